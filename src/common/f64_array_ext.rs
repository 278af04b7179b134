//! `[f64]` extensions.

/// `[f64]` extensions.
pub trait F64ArrayExt {
    /// Returns the maximum absolute value.
    fn peak_level(&self) -> f64;
    /// Returns the short-time energy, i.e the sum of the squared values.
    fn energy(&self) -> f64;
}

impl F64ArrayExt for [f64] {
    fn peak_level(&self) -> f64 {
        let mut max: f64 = 0.0;
        for sample in self.iter() {
            let value = sample.abs();
            if value > max {
                max = value
            }
        }
        max
    }

    fn energy(&self) -> f64 {
        let mut energy: f64 = 0.;
        for sample in self.iter() {
            energy += sample * sample
        }
        energy
    }
}
