use crate::{common::F64ArrayExt, enov::compression_function::CompressionFunction};

// https://www.audiolabs-erlangen.de/resources/MIR/FMP/C6/C6S1_NoveltyEnergy.html
pub struct EnergyNovelty {
    energy: f64,
    compressed_energy: f64,
    compressed_energy_prev: f64,
    novelty: f64,
    has_processed_first_window: bool,
}

impl EnergyNovelty {
    pub fn new() -> Self {
        EnergyNovelty {
            energy: 0.,
            compressed_energy: 0.,
            compressed_energy_prev: 0.,
            novelty: 0.,
            has_processed_first_window: false,
        }
    }

    /// The half-wave rectified increase in compressed energy
    /// relative to the previous window. Zero for the first window.
    pub fn novelty(&self) -> f64 {
        self.novelty
    }

    /// Short-time energy of the most recent window.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn compressed_energy(&self) -> f64 {
        self.compressed_energy
    }

    pub fn compressed_energy_prev(&self) -> f64 {
        self.compressed_energy_prev
    }

    pub fn clear(&mut self) {
        self.energy = 0.;
        self.compressed_energy = 0.;
        self.compressed_energy_prev = 0.;
        self.novelty = 0.;
        self.has_processed_first_window = false;
    }

    pub fn process_window<C: CompressionFunction>(&mut self, window: &[f64], compression_func: &C) {
        self.compressed_energy_prev = self.compressed_energy;
        self.energy = window.energy();
        self.compressed_energy = compression_func.compress(self.energy);

        self.novelty = if self.has_processed_first_window {
            (self.compressed_energy - self.compressed_energy_prev).max(0.)
        } else {
            0.
        };
        self.has_processed_first_window = true;
    }
}

impl Default for EnergyNovelty {
    fn default() -> Self {
        EnergyNovelty::new()
    }
}
