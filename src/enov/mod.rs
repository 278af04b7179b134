//! [Audio onset detection](https://en.wikipedia.org/wiki/Onset_(audio)) using
//! [energy based novelty](https://www.audiolabs-erlangen.de/resources/MIR/FMP/C6/C6S1_NoveltyEnergy.html).
//!
//! The waveform is split into overlapping frames. The short-time energy of each
//! frame is log-compressed and the novelty of a frame is the increase in
//! compressed energy relative to the previous frame, clamped at zero.
//!
//! # Examples
//!
//! ```
//! use energy_novelty::audio::Waveform;
//! use energy_novelty::enov::{novelty_energy, NoveltyParams};
//!
//! // Silence followed by a burst
//! let mut samples = vec![0.0; 4096];
//! for sample in samples[2048..].iter_mut() {
//!     *sample = 0.5;
//! }
//! let waveform = Waveform::from_samples(samples, 8000);
//! let curve = novelty_energy(&waveform, &NoveltyParams::new(1024, 256, 10.0, true)).unwrap();
//!
//! assert_eq!(curve.len(), 13);
//! assert_eq!(curve.values()[0], 0.0);
//! assert_eq!(curve.max_value(), 1.0);
//! ```

mod compression_function;
mod detector;
mod novelty;

pub use compression_function::{CompressionFunction, IdentityCompression, LogCompression};
pub use detector::EnergyNoveltyDetector;
pub use novelty::EnergyNovelty;

use log::{debug, warn};

use crate::audio::Waveform;
use crate::error::{NoveltyError, Result};
use crate::novelty_curve::NoveltyCurve;

/// Parameters of the energy novelty computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoveltyParams {
    /// Frame size N in samples.
    pub frame_size: usize,
    /// Hop size H in samples.
    pub hop_size: usize,
    /// Logarithmic compression constant. 0 disables compression.
    pub gamma: f64,
    /// Scale the curve to a maximum of 1.
    pub normalize: bool,
}

impl NoveltyParams {
    pub fn new(frame_size: usize, hop_size: usize, gamma: f64, normalize: bool) -> Self {
        NoveltyParams {
            frame_size,
            hop_size,
            gamma,
            normalize,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_size == 0 {
            return Err(NoveltyError::InvalidConfig(
                "frame size must be greater than 0".into(),
            ));
        }
        if self.hop_size == 0 {
            return Err(NoveltyError::InvalidConfig(
                "hop size must be greater than 0".into(),
            ));
        }
        if !self.gamma.is_finite() || self.gamma < 0. {
            return Err(NoveltyError::InvalidConfig(format!(
                "gamma must be a finite number >= 0, got {}",
                self.gamma
            )));
        }
        Ok(())
    }
}

impl Default for NoveltyParams {
    fn default() -> Self {
        NoveltyParams::new(2048, 128, 10.0, true)
    }
}

/// Computes the energy novelty curve of a waveform.
///
/// A waveform shorter than one frame gives an empty curve. A waveform with a
/// sample rate of 0 is rejected, since its frames have no timestamps.
pub fn novelty_energy(waveform: &Waveform, params: &NoveltyParams) -> Result<NoveltyCurve> {
    params.validate()?;
    if waveform.sample_rate() == 0 {
        return Err(NoveltyError::InvalidConfig(
            "waveform sample rate must be greater than 0".into(),
        ));
    }
    debug!("Computing energy novelty with {:?}", params);

    let mut detector =
        EnergyNoveltyDetector::new(params.frame_size, params.hop_size, params.gamma)?;
    let window_processor = *detector.window_processor();
    let frame_count = window_processor.window_count(waveform.len());
    if frame_count == 0 {
        warn!(
            "Waveform has {} samples, fewer than one frame of {}",
            waveform.len(),
            window_processor.window_size()
        );
    }

    let mut values = Vec::with_capacity(frame_count);
    detector.process(waveform.samples(), |_, novelty| values.push(novelty.novelty()));

    let mut curve = NoveltyCurve::new(values, waveform.sample_rate(), window_processor.hop_size());
    if params.normalize && !curve.normalize() && !curve.is_empty() {
        warn!("Novelty curve is all zeros, skipping normalization");
    }
    debug!(
        "{} novelty frames at {} Hz",
        curve.len(),
        curve.feature_rate()
    );
    Ok(curve)
}
