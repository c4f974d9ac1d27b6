//! Mathematical utilities: ensemble spread and two-sided intervals.

pub mod interval;
pub mod spread;

pub use interval::*;
pub use spread::*;
