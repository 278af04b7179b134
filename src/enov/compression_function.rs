pub trait CompressionFunction {
    fn compress(&self, input: f64) -> f64;
}

/// Logarithmic compression `ln(1 + gamma * x)`. A `gamma` of zero
/// leaves the input unchanged.
#[derive(Debug, Clone, Copy)]
pub struct LogCompression {
    gamma: f64,
}

impl LogCompression {
    pub fn new(gamma: f64) -> Self {
        LogCompression { gamma }
    }
}

impl CompressionFunction for LogCompression {
    fn compress(&self, input: f64) -> f64 {
        if self.gamma == 0. {
            return input;
        }
        (1. + self.gamma * input).ln()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCompression;

impl CompressionFunction for IdentityCompression {
    fn compress(&self, input: f64) -> f64 {
        input
    }
}

#[cfg(test)]
mod tests {
    use crate::enov::compression_function::{
        CompressionFunction, IdentityCompression, LogCompression,
    };

    #[test]
    fn test_log_compression() {
        let function = LogCompression::new(10.);
        assert_eq!(function.compress(0.), 0.);
        assert!((function.compress(1.) - 11_f64.ln()).abs() < 1e-12);
        assert!((function.compress(0.5) - 6_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_gamma_is_identity() {
        let function = LogCompression::new(0.);
        for input in [0., 0.25, 3.5, 1024.] {
            assert_eq!(function.compress(input), input);
            assert_eq!(function.compress(input), IdentityCompression.compress(input));
        }
    }

    #[test]
    fn test_log_compression_is_monotonic() {
        let function = LogCompression::new(100.);
        let mut prev = function.compress(0.);
        for i in 1..100 {
            let value = function.compress(i as f64 * 0.1);
            assert!(value > prev);
            prev = value;
        }
    }
}
