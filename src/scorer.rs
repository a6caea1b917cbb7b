//! Diversity Scorer - main coordinator for one exploration run
//!
//! Runs the pipeline stages strictly in order:
//!
//! Generate → Normalize → Components → Aggregate → Shares
//!
//! Any failing stage aborts the run; no partial report is returned.

use crate::config::PipelineConfig;
use crate::data::{seeded_rng, AbundanceSample, DistributionSpec};
use crate::error::Result;
use crate::metrics::{aggregate_indices, calculate_components, calculate_shares, DiversityIndices};
use crate::table::RecordTable;
use crate::utils::relative_proportions;
use rand::Rng;

/// Main diversity scorer
#[derive(Debug, Clone)]
pub struct DiversityScorer {
    distribution: DistributionSpec,
    count: usize,
    seed: Option<u64>,
}

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct DiversityReport {
    /// Seed the sample was drawn with (None when scoring supplied abundances)
    pub seed: Option<u64>,
    pub table: RecordTable,
    pub indices: DiversityIndices,
}

impl DiversityReport {
    pub fn shannon_index(&self) -> f64 {
        self.indices.shannon
    }

    pub fn simpson_index(&self) -> f64 {
        self.indices.simpson_index()
    }
}

impl DiversityScorer {
    /// Initialize from a validated configuration
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        let distribution = config.distribution_spec()?;

        tracing::info!(
            "Diversity scorer: {} {:?}, {} records, seed {:?}",
            distribution.name(),
            config.params,
            config.count,
            config.seed
        );

        Ok(Self {
            distribution,
            count: config.count,
            seed: config.seed,
        })
    }

    pub fn distribution(&self) -> &DistributionSpec {
        &self.distribution
    }

    /// Generate the sample and score it
    ///
    /// Uses the configured seed, or draws one and logs it so the run can be
    /// repeated.
    pub fn run(&self) -> Result<DiversityReport> {
        let seed = self.seed.unwrap_or_else(|| {
            let seed = rand::thread_rng().gen();
            tracing::info!("No seed configured, drew seed {}", seed);
            seed
        });

        let mut rng = seeded_rng(seed);
        let mut report = self.run_with_rng(&mut rng)?;
        report.seed = Some(seed);
        Ok(report)
    }

    /// Generate the sample from a caller-supplied RNG and score it
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<DiversityReport> {
        let sample = self.distribution.sample(self.count, rng)?;
        score_sample(&sample)
    }
}

/// Score an existing abundance sample
pub fn score_sample(sample: &AbundanceSample) -> Result<DiversityReport> {
    let zeros = sample.zero_count();
    if zeros > 0 {
        tracing::warn!("{} of {} abundances are zero (ln p = -inf)", zeros, sample.len());
    }
    score_abundances(sample.as_ref())
}

/// Score a raw abundance slice
pub fn score_abundances(abundances: &[f64]) -> Result<DiversityReport> {
    let proportions = relative_proportions(abundances)?;
    let components = calculate_components(&proportions);
    let indices = aggregate_indices(&components.shannon, &components.simpson);
    let shares = calculate_shares(&components.shannon, &components.simpson, &indices)?;

    tracing::info!(
        "Scored {} records: Shannon = {:.6}, Simpson = {:.6}",
        abundances.len(),
        indices.shannon,
        indices.simpson_index()
    );

    Ok(DiversityReport {
        seed: None,
        table: RecordTable::from_stages(abundances.to_vec(), proportions, components, shares),
        indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiversityError;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_case() {
        let report = score_abundances(&[1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_relative_eq!(report.shannon_index(), 4.0_f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(report.shannon_index(), 1.3863, epsilon = 1e-4);
        assert_relative_eq!(report.indices.simpson_sum, 0.25, epsilon = 1e-12);
        assert_relative_eq!(report.simpson_index(), 0.75, epsilon = 1e-12);
        for p in report.table.proportion() {
            assert_relative_eq!(*p, 0.25, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_two_species_case() {
        let report = score_abundances(&[9.0, 1.0]).unwrap();
        assert_relative_eq!(report.shannon_index(), 0.3251, epsilon = 1e-4);
        assert_relative_eq!(report.indices.simpson_sum, 0.82, epsilon = 1e-12);
        assert_relative_eq!(report.simpson_index(), 0.18, epsilon = 1e-12);
    }

    #[test]
    fn test_all_zero_fails_at_normalization() {
        match score_abundances(&[0.0, 0.0, 0.0]) {
            Err(DiversityError::DegenerateInput { stage, .. }) => assert_eq!(stage, "normalization"),
            other => panic!("expected DegenerateInput, got {:?}", other),
        }
    }

    #[test]
    fn test_single_species_fails_at_shares() {
        match score_abundances(&[5.0]) {
            Err(DiversityError::DegenerateInput { stage, .. }) => {
                assert_eq!(stage, "share decomposition")
            }
            other => panic!("expected DegenerateInput, got {:?}", other),
        }
    }

    #[test]
    fn test_score_sample_matches_raw_abundances() {
        let sample = AbundanceSample::from(vec![0.0, 3.0, 1.0, 0.0]);
        let report = score_sample(&sample).unwrap();
        assert_eq!(report, score_abundances(&[0.0, 3.0, 1.0, 0.0]).unwrap());
        assert_eq!(report.table.abundance(), sample.values());
        assert_relative_eq!(report.table.proportion()[1], 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_seeded_run_is_reproducible() {
        let config = PipelineConfig::default().with_seed(82);
        let scorer = DiversityScorer::new(&config).unwrap();

        let a = scorer.run().unwrap();
        let b = scorer.run().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, Some(82));
        assert_eq!(a.table.len(), 82);
    }

    #[test]
    fn test_unseeded_run_records_seed() {
        let scorer = DiversityScorer::new(&PipelineConfig::default()).unwrap();
        let report = scorer.run().unwrap();
        let seed = report.seed.expect("seed recorded");

        let replay = DiversityScorer::new(&PipelineConfig::default().with_seed(seed))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(report, replay);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PipelineConfig {
            distribution: "weibull".into(),
            params: vec![0.6, 1.0, 2.0],
            ..PipelineConfig::default()
        };
        assert!(DiversityScorer::new(&config).is_err());
    }
}
