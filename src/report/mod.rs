//! Dashboard output.

mod generator;

pub use generator::*;
