//! Common algorithms and utilities.

mod f64_array_ext;
mod window_processor;

pub use f64_array_ext::F64ArrayExt;
pub use window_processor::WindowProcessor;
