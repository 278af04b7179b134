use crate::error::{NoveltyError, Result};

/// Splits a sample buffer into (possibly overlapping) windows of
/// `window_size` samples, starting a new window every `hop_size` samples.
/// Only complete windows are produced.
#[derive(Debug, Clone, Copy)]
pub struct WindowProcessor {
    window_size: usize,
    hop_size: usize,
}

fn validate_sizes(window_size: usize, hop_size: usize) -> Result<()> {
    if window_size == 0 {
        return Err(NoveltyError::InvalidConfig(
            "window size must be greater than 0".into(),
        ));
    }
    if hop_size == 0 {
        return Err(NoveltyError::InvalidConfig(
            "hop size must be greater than 0".into(),
        ));
    }
    Ok(())
}

impl WindowProcessor {
    pub fn new(window_size: usize, hop_size: usize) -> Result<Self> {
        validate_sizes(window_size, hop_size)?;
        Ok(WindowProcessor {
            window_size,
            hop_size,
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn hop_size(&self) -> usize {
        self.hop_size
    }

    /// The number of complete windows in a buffer of `sample_count` samples,
    /// `floor((sample_count - window_size) / hop_size) + 1`, or 0 if the buffer
    /// is shorter than one window.
    pub fn window_count(&self, sample_count: usize) -> usize {
        if sample_count < self.window_size {
            0
        } else {
            (sample_count - self.window_size) / self.hop_size + 1
        }
    }

    /// Calls `handler` with the index and contents of every complete window,
    /// in order.
    pub fn process<F>(&self, buffer: &[f64], mut handler: F)
    where
        F: FnMut(usize, &[f64]),
    {
        for window_index in 0..self.window_count(buffer.len()) {
            let start = window_index * self.hop_size;
            handler(window_index, &buffer[start..start + self.window_size]);
        }
    }
}
