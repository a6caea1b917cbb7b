//! Error types for the diversity pipeline
//!
//! Every stage fails fast with a [`DiversityError`]; nothing downstream of a
//! failed stage runs and no partial report is produced.

use thiserror::Error;

/// Errors produced while generating samples or computing diversity indices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiversityError {
    /// A normalization or share denominator was zero.
    #[error("degenerate input during {stage}: {reason}")]
    DegenerateInput {
        stage: &'static str,
        reason: String,
    },

    /// An abundance value was negative, NaN or infinite.
    #[error("invalid abundance at index {index}: {value} (abundances must be finite and >= 0)")]
    InvalidAbundance { index: usize, value: f64 },

    /// The sample generator was asked for zero values.
    #[error("sample count must be greater than zero")]
    EmptySample,

    /// Unknown distribution name or parameters rejected by the sampler.
    #[error("invalid distribution '{name}': {reason}")]
    InvalidDistribution { name: String, reason: String },
}

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, DiversityError>;

impl DiversityError {
    pub(crate) fn degenerate(stage: &'static str, reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            stage,
            reason: reason.into(),
        }
    }

    pub(crate) fn distribution(name: &str, reason: impl ToString) -> Self {
        Self::InvalidDistribution {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True for the zero-denominator family of failures.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let cases: Vec<(DiversityError, &str)> = vec![
            (
                DiversityError::degenerate("normalization", "total abundance is zero"),
                "degenerate input during normalization",
            ),
            (
                DiversityError::InvalidAbundance { index: 3, value: -1.0 },
                "invalid abundance at index 3",
            ),
            (DiversityError::EmptySample, "sample count must be"),
            (
                DiversityError::distribution("weibull", "shape must be positive"),
                "invalid distribution 'weibull'",
            ),
        ];
        for (err, expected_prefix) in cases {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "'{msg}' should start with '{expected_prefix}'"
            );
        }
    }

    #[test]
    fn test_is_degenerate() {
        assert!(DiversityError::degenerate("share decomposition", "x").is_degenerate());
        assert!(!DiversityError::EmptySample.is_degenerate());
    }
}
