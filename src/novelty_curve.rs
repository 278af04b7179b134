use crate::common::F64ArrayExt;

/// A novelty curve with one value per analysis frame.
#[derive(Debug, Clone, PartialEq)]
pub struct NoveltyCurve {
    values: Vec<f64>,
    /// Sample rate of the analyzed waveform in Hz.
    sample_rate: u32,
    /// Number of waveform samples between consecutive frames.
    hop_size: usize,
}

impl NoveltyCurve {
    pub fn new(values: Vec<f64>, sample_rate: u32, hop_size: usize) -> Self {
        NoveltyCurve {
            values,
            sample_rate,
            hop_size,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn hop_size(&self) -> usize {
        self.hop_size
    }

    /// The sample rate of the curve itself, `sample_rate / hop_size`.
    pub fn feature_rate(&self) -> f64 {
        self.sample_rate as f64 / self.hop_size as f64
    }

    /// Start time in seconds of the frame at `frame_index`.
    pub fn time_at(&self, frame_index: usize) -> f64 {
        (frame_index * self.hop_size) as f64 / self.sample_rate as f64
    }

    /// `(time, novelty)` pairs in frame order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(frame_index, value)| (self.time_at(frame_index), *value))
    }

    pub fn max_value(&self) -> f64 {
        self.values.peak_level()
    }

    /// Scales the curve so that its maximum absolute value is 1. A curve that
    /// is all zeros, or empty, is left as is. Returns whether the curve was scaled.
    pub fn normalize(&mut self) -> bool {
        let max = self.max_value();
        if max == 0. {
            return false;
        }
        for value in self.values.iter_mut() {
            *value /= max;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::NoveltyCurve;

    #[test]
    fn test_times() {
        let curve = NoveltyCurve::new(vec![0.; 4], 8000, 128);
        assert_eq!(curve.feature_rate(), 62.5);
        assert_eq!(curve.time_at(0), 0.);
        assert_eq!(curve.time_at(3), 0.048);
        let times: Vec<f64> = curve.points().map(|(time, _)| time).collect();
        assert_eq!(times, vec![0., 0.016, 0.032, 0.048]);
    }

    #[test]
    fn test_normalize() {
        let mut curve = NoveltyCurve::new(vec![0., 2., 0.5, 4.], 100, 1);
        assert!(curve.normalize());
        assert_eq!(curve.values(), &[0., 0.5, 0.125, 1.]);
        assert_eq!(curve.max_value(), 1.);
    }

    #[test]
    fn test_normalize_zero_curve_is_noop() {
        let mut curve = NoveltyCurve::new(vec![0.; 3], 100, 1);
        assert!(!curve.normalize());
        assert_eq!(curve.values(), &[0.; 3]);

        let mut empty = NoveltyCurve::new(vec![], 100, 1);
        assert!(!empty.normalize());
        assert!(empty.is_empty());
    }
}
