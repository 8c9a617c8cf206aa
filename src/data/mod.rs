//! Synthetic data generation.

pub mod cohort;

pub use cohort::*;
