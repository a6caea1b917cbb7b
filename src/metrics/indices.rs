//! Index aggregation
//!
//! H = Σ shannon_i, D = Σ simpson_i, reported Simpson = 1 - D.

use serde::Serialize;
use std::fmt;

/// Scalar diversity indices for one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiversityIndices {
    /// Shannon entropy H (natural log), >= 0
    pub shannon: f64,
    /// Σ p_i², in (0, 1] for non-degenerate input
    pub simpson_sum: f64,
}

impl DiversityIndices {
    /// Reported Simpson index: probability two random draws differ
    pub fn simpson_index(&self) -> f64 {
        1.0 - self.simpson_sum
    }
}

/// Prints the two report lines
impl fmt::Display for DiversityIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shannon value: {}", self.shannon)?;
        write!(f, "Simpson value: {}", self.simpson_index())
    }
}

/// Aggregate component columns into the two indices
pub fn aggregate_indices(shannon_components: &[f64], simpson_components: &[f64]) -> DiversityIndices {
    let shannon = shannon_components.iter().sum();
    let simpson_sum = simpson_components.iter().sum();

    tracing::debug!("Aggregated indices: H = {}, Σp² = {}", shannon, simpson_sum);

    DiversityIndices { shannon, simpson_sum }
}
