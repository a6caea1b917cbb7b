//! Diversity Index Explorer
//!
//! Generates a synthetic abundance sample and decomposes two ecological
//! diversity indices over it, record by record:
//!
//! - `data/`: seeded sample generation from a configurable distribution
//! - `utils/`: abundance → relative proportion normalization
//! - `metrics/`: Shannon/Simpson components, index aggregation, shares
//! - `table/`: the per-record table (with a Polars view)
//! - `scorer/`: coordinator running the stages in order
//! - `plots/`: exploration views (plotly)
//!
//! Degenerate inputs (zero total abundance, single-species samples) fail with
//! `DiversityError::DegenerateInput` instead of producing NaN.

pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod plots;
pub mod scorer;
pub mod table;
pub mod utils;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use data::{generate_sample, seeded_rng, AbundanceSample, DistributionSpec, FIELD_SURVEY_ABUNDANCES};
pub use error::{DiversityError, Result};
pub use metrics::*;
pub use plots::ExplorationPlots;
pub use scorer::{score_abundances, score_sample, DiversityReport, DiversityScorer};
pub use table::{Record, RecordTable};
pub use utils::{relative_proportions, sums_to_one};
