//! Metric stages of the diversity pipeline
//!
//! Proportions (see `utils::normalization`) feed three stages, run in order:
//! components → indices → shares.

pub mod components;
pub mod indices;
pub mod shares;

pub use components::{calculate_components, shannon_component, simpson_component, ComponentColumns};
pub use indices::{aggregate_indices, DiversityIndices};
pub use shares::{calculate_shares, ShareColumns};
