use std::f64::consts::PI;

pub fn silence(sample_count: usize) -> Vec<f64> {
    vec![0.0; sample_count]
}

/// A single 1.0 sample at `position`, zeros elsewhere.
pub fn impulse(sample_count: usize, position: usize) -> Vec<f64> {
    let mut signal = silence(sample_count);
    if position < sample_count {
        signal[position] = 1.0;
    }
    signal
}

/// Sine bursts of `burst_length` samples starting every `period` samples,
/// silence in between.
pub fn sine_bursts(
    sample_count: usize,
    sample_rate: u32,
    freq: f64,
    period: usize,
    burst_length: usize,
) -> Vec<f64> {
    (0..sample_count)
        .map(|i| {
            if i % period < burst_length {
                0.5 * (2.0 * PI * freq * i as f64 / sample_rate as f64).sin()
            } else {
                0.0
            }
        })
        .collect()
}
