//! Proportion Normalization
//!
//! Converts raw abundances to relative proportions p_i = a_i / Σa.
//! Zero or overflowing totals are rejected instead of silently producing NaN
//! or all-zero columns. A Σp outside `PROPORTION_SUM_TOLERANCE` is logged.

use crate::error::{DiversityError, Result};

/// Tolerance on Σp = 1 for well-conditioned input
pub const PROPORTION_SUM_TOLERANCE: f64 = 1e-9;

/// Normalize abundances to relative proportions
///
/// Algorithm:
/// 1. Reject negative / non-finite abundances
/// 2. total = Σ abundance, must be finite and > 0
/// 3. p_i = abundance_i / total, warn if Σp drifts from 1
///
/// An empty slice has total 0 and is therefore degenerate.
pub fn relative_proportions(abundances: &[f64]) -> Result<Vec<f64>> {
    if let Some((index, &value)) = abundances
        .iter()
        .enumerate()
        .find(|(_, v)| !(v.is_finite() && **v >= 0.0))
    {
        return Err(DiversityError::InvalidAbundance { index, value });
    }

    let total: f64 = abundances.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(DiversityError::degenerate(
            "normalization",
            format!(
                "total abundance of {} records is {} (must be finite and > 0)",
                abundances.len(),
                total
            ),
        ));
    }

    tracing::debug!("Normalizing {} abundances (total = {})", abundances.len(), total);

    let proportions: Vec<f64> = abundances.iter().map(|a| a / total).collect();
    if !sums_to_one(&proportions) {
        tracing::warn!(
            "Proportions sum to {} (tolerance {})",
            proportions.iter().sum::<f64>(),
            PROPORTION_SUM_TOLERANCE
        );
    }

    Ok(proportions)
}

/// Check Σp ≈ 1
pub fn sums_to_one(proportions: &[f64]) -> bool {
    (proportions.iter().sum::<f64>() - 1.0).abs() < PROPORTION_SUM_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_proportions() {
        let p = relative_proportions(&[1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(p.len(), 4);
        for value in &p {
            assert_relative_eq!(*value, 0.25, epsilon = 1e-12);
        }
        assert!(sums_to_one(&p));
    }

    #[test]
    fn test_skewed_proportions() {
        let p = relative_proportions(&[9.0, 1.0]).unwrap();
        assert_relative_eq!(p[0], 0.9, epsilon = 1e-12);
        assert_relative_eq!(p[1], 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_entries_keep_zero_proportion() {
        let p = relative_proportions(&[0.0, 3.0, 0.0, 1.0]).unwrap();
        assert_eq!(p[0], 0.0);
        assert_eq!(p[2], 0.0);
        assert_relative_eq!(p[1], 0.75, epsilon = 1e-12);
        assert!(sums_to_one(&p));
    }

    #[test]
    fn test_sums_to_one_tolerance() {
        assert!(sums_to_one(&[0.5, 0.5 + PROPORTION_SUM_TOLERANCE / 2.0]));
        assert!(!sums_to_one(&[0.5, 0.5 + 10.0 * PROPORTION_SUM_TOLERANCE]));
        assert!(!sums_to_one(&[]));

        // Wide dynamic range still normalizes within tolerance
        let p = relative_proportions(&[1e300, 1e-300, 3.0]).unwrap();
        assert!(sums_to_one(&p));
        assert_relative_eq!(p[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_all_zero_is_degenerate() {
        let err = relative_proportions(&[0.0, 0.0, 0.0]).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_overflowing_total_is_degenerate() {
        // Each value is finite but the sum is +inf; p would be all zeros
        match relative_proportions(&[f64::MAX, f64::MAX]) {
            Err(DiversityError::DegenerateInput { stage, reason }) => {
                assert_eq!(stage, "normalization");
                assert!(reason.contains("inf"), "{reason}");
            }
            other => panic!("expected DegenerateInput, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_is_degenerate() {
        let err = relative_proportions(&[]).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_negative_and_nan_rejected() {
        assert_eq!(
            relative_proportions(&[1.0, -2.0]),
            Err(DiversityError::InvalidAbundance { index: 1, value: -2.0 })
        );
        assert!(matches!(
            relative_proportions(&[f64::NAN, 1.0]),
            Err(DiversityError::InvalidAbundance { index: 0, .. })
        ));
        assert!(relative_proportions(&[f64::INFINITY]).is_err());
    }
}
