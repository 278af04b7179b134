use std::path::Path;

/// Writes interleaved samples in [-1, 1] as 16 bit PCM, clamping out of range values.
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    sample_rate: u32,
    channel_count: u16,
    buffer: &[f64],
) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: channel_count,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for sample in buffer.iter() {
        let clamped_sample = sample.clamp(-1.0, 1.0);
        let amplitude = i16::MAX as f64;
        writer.write_sample((clamped_sample * amplitude) as i16)?;
    }
    writer.finalize()
}

/// Writes interleaved samples as 32 bit float.
pub fn write_wav_f32<P: AsRef<Path>>(
    path: P,
    sample_rate: u32,
    channel_count: u16,
    buffer: &[f64],
) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: channel_count,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for sample in buffer.iter() {
        writer.write_sample(*sample as f32)?;
    }
    writer.finalize()
}

/// Interleaves channels of equal length.
pub fn interleave(channels: &[&[f64]]) -> Vec<f64> {
    let frame_count = channels.iter().map(|c| c.len()).min().unwrap_or(0);
    let mut result = Vec::with_capacity(frame_count * channels.len());
    for i in 0..frame_count {
        for channel in channels {
            result.push(channel[i]);
        }
    }
    result
}
