use crate::common::WindowProcessor;
use crate::enov::{
    compression_function::{CompressionFunction, LogCompression},
    novelty::EnergyNovelty,
};
use crate::error::Result;

pub struct EnergyNoveltyDetector<C: CompressionFunction> {
    window_processor: WindowProcessor,
    novelty: EnergyNovelty,
    compression_func: C,
}

impl EnergyNoveltyDetector<LogCompression> {
    pub fn new(window_size: usize, hop_size: usize, gamma: f64) -> Result<Self> {
        EnergyNoveltyDetector::from_options(window_size, hop_size, LogCompression::new(gamma))
    }
}

impl<C: CompressionFunction> EnergyNoveltyDetector<C> {
    pub fn from_options(window_size: usize, hop_size: usize, compression_func: C) -> Result<Self> {
        Ok(EnergyNoveltyDetector {
            window_processor: WindowProcessor::new(window_size, hop_size)?,
            novelty: EnergyNovelty::new(),
            compression_func,
        })
    }

    pub fn window_processor(&self) -> &WindowProcessor {
        &self.window_processor
    }

    pub fn reset(&mut self) {
        self.novelty.clear()
    }

    /// Processes every complete window of `buffer` in order, calling `handler`
    /// with the window index and the updated novelty state. The novelty state
    /// carries over between calls until `reset` is called.
    pub fn process<F>(&mut self, buffer: &[f64], mut handler: F)
    where
        F: FnMut(usize, &EnergyNovelty),
    {
        let novelty = &mut self.novelty;
        let compression_func = &self.compression_func;
        self.window_processor.process(buffer, |window_index, window| {
            novelty.process_window(window, compression_func);
            handler(window_index, &*novelty)
        })
    }
}
