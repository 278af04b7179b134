//! WAV file loading.

use std::path::Path;

use hound::{SampleFormat, WavReader};
use log::{debug, info};

use crate::error::{NoveltyError, Result};

/// Mono audio samples and their sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f64>,
    sample_rate: u32,
    /// Channel count of the source, before down-mixing.
    source_channels: u16,
    /// Bit depth of the source encoding.
    source_bit_depth: u16,
}

impl Waveform {
    pub fn from_samples(samples: Vec<f64>, sample_rate: u32) -> Self {
        Waveform {
            samples,
            sample_rate,
            source_channels: 1,
            source_bit_depth: 64,
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn source_channels(&self) -> u16 {
        self.source_channels
    }

    pub fn source_bit_depth(&self) -> u16 {
        self.source_bit_depth
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Averages interleaved channels into a single channel. A trailing
/// incomplete sample frame is dropped.
pub fn downmix(interleaved: &[f64], channels: usize) -> Vec<f64> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f64>() / channels as f64)
        .collect()
}

/// Reads a WAV file into a mono waveform.
///
/// Integer PCM of up to 32 bits is scaled into [-1, 1), 32 bit float
/// samples are used as is. Multi channel files are down-mixed by averaging.
pub fn load_wav<P: AsRef<Path>>(path: P) -> Result<Waveform> {
    let path = path.as_ref();
    let mut reader = WavReader::open(path).map_err(|error| NoveltyError::from_wav(path, error))?;

    let spec = reader.spec();
    debug!(
        "{}: {} channel(s), {} Hz, {}-bit {:?}",
        path.display(),
        spec.channels,
        spec.sample_rate,
        spec.bits_per_sample,
        spec.sample_format
    );
    // hound rejects zero channels itself, but not a zero sample rate.
    if spec.sample_rate == 0 {
        return Err(NoveltyError::Format("WAV file declares a sample rate of 0 Hz".into()));
    }

    let interleaved: Vec<f64> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, bits @ 1..=32) => {
            let scale = 1. / (1_u64 << (bits - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|sample| sample.map(|s| s as f64 * scale))
                .collect::<std::result::Result<Vec<f64>, _>>()
                .map_err(|error| NoveltyError::from_wav(path, error))?
        }
        (SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .map(|sample| sample.map(|s| s as f64))
            .collect::<std::result::Result<Vec<f64>, _>>()
            .map_err(|error| NoveltyError::from_wav(path, error))?,
        (format, bits) => {
            return Err(NoveltyError::Format(format!(
                "{:?} samples with {} bits per sample",
                format, bits
            )));
        }
    };

    let samples = downmix(&interleaved, spec.channels as usize);
    let waveform = Waveform {
        samples,
        sample_rate: spec.sample_rate,
        source_channels: spec.channels,
        source_bit_depth: spec.bits_per_sample,
    };
    info!(
        "Loaded {} ({} samples, {:.3} s)",
        path.display(),
        waveform.len(),
        waveform.duration_secs()
    );
    Ok(waveform)
}
