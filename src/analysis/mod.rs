//! Analysis modules.
//!
//! Derives dashboard statistics from the stored collections.

pub mod aggregator;

pub use aggregator::*;
