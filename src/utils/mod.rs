//! Utility modules for the diversity pipeline
//!
//! - Normalization: abundance → relative proportion

pub mod normalization;

pub use normalization::{relative_proportions, sums_to_one, PROPORTION_SUM_TOLERANCE};
