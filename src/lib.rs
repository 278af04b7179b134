//! Energy based [novelty curves](https://www.audiolabs-erlangen.de/resources/MIR/FMP/C6/C6S1_NoveltyEnergy.html)
//! for onset detection.
//!
//! A novelty curve peaks where the energy of a signal increases abruptly,
//! which makes it a simple proxy for note and beat onsets.
//!
//! The crate reads a WAV file, computes the curve from the log-compressed
//! short-time energy of overlapping frames and writes it as a
//! `time,novelty` CSV table.
//!
//! # Examples
//!
//! ```no_run
//! use energy_novelty::{config::NoveltyConfig, pipeline};
//!
//! let config = NoveltyConfig {
//!     input_path: "voice.wav".into(),
//!     output_path: "voice.csv".into(),
//!     ..NoveltyConfig::default()
//! };
//! let summary = pipeline::run(&config)?;
//! println!("{} frames", summary.frame_count);
//! # Ok::<(), energy_novelty::NoveltyError>(())
//! ```

pub mod audio;
pub mod common;
pub mod config;
pub mod csv;
pub mod enov;
mod error;
pub mod novelty_curve;
pub mod pipeline;

pub use error::{NoveltyError, Result};
pub use novelty_curve::NoveltyCurve;
