//! Load, extract, write.

use log::{debug, info};

use crate::audio::load_wav;
use crate::config::NoveltyConfig;
use crate::csv::write_csv;
use crate::enov::novelty_energy;
use crate::error::Result;

/// What a completed run produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub sample_count: usize,
    pub sample_rate: u32,
    pub frame_count: usize,
    pub feature_rate: f64,
}

/// Runs the whole pipeline for one input file. Nothing is written unless the
/// novelty curve was computed successfully.
pub fn run(config: &NoveltyConfig) -> Result<RunSummary> {
    config.validate()?;
    debug!("Running with {:?}", config);

    let waveform = load_wav(&config.input_path)?;
    let curve = novelty_energy(&waveform, &config.params())?;
    info!(
        "Computed {} novelty frames ({} Hz feature rate)",
        curve.len(),
        curve.feature_rate()
    );
    write_csv(&config.output_path, &curve, config.overwrite)?;

    Ok(RunSummary {
        sample_count: waveform.len(),
        sample_rate: waveform.sample_rate(),
        frame_count: curve.len(),
        feature_rate: curve.feature_rate(),
    })
}
