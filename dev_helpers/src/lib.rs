//! Fixtures shared by tests and benchmarks.

pub mod signal;
pub mod wav;
