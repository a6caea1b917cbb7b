//! Percent-of-total shares
//!
//! Each record's contribution to its index: shannon_i / H and simpson_i / D.
//! A single-species sample has H = 0 and no meaningful decomposition.

use crate::error::{DiversityError, Result};
use crate::metrics::indices::DiversityIndices;

/// Share columns (each sums to 1)
#[derive(Debug, Clone, PartialEq)]
pub struct ShareColumns {
    pub shannon: Vec<f64>,
    pub simpson: Vec<f64>,
}

/// Calculate both share columns
///
/// Fails with `DegenerateInput` when either index is zero.
pub fn calculate_shares(
    shannon_components: &[f64],
    simpson_components: &[f64],
    indices: &DiversityIndices,
) -> Result<ShareColumns> {
    if indices.shannon == 0.0 {
        return Err(DiversityError::degenerate(
            "share decomposition",
            "Shannon index is zero (single-species sample)",
        ));
    }
    if indices.simpson_sum == 0.0 {
        return Err(DiversityError::degenerate(
            "share decomposition",
            "Simpson sum is zero",
        ));
    }

    let shannon = shannon_components
        .iter()
        .map(|c| c / indices.shannon)
        .collect();
    let simpson = simpson_components
        .iter()
        .map(|c| c / indices.simpson_sum)
        .collect();

    Ok(ShareColumns { shannon, simpson })
}
