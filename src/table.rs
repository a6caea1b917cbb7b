//! Record Table
//!
//! Column-oriented storage of every per-record quantity the pipeline derives,
//! with row access and a Polars view using the exploration column names.

use crate::metrics::{ComponentColumns, ShareColumns};
use anyhow::{Context, Result};
use polars::prelude::*;

pub const COL_ABUNDANCE: &str = "Abundance";
pub const COL_PROPORTION: &str = "PsubI";
pub const COL_LN_PROPORTION: &str = "NL_PsubI";
pub const COL_SHANNON_COMPONENT: &str = "SH Component";
pub const COL_SIMPSON_COMPONENT: &str = "SI Component";
pub const COL_SHANNON_SHARE: &str = "SH PercentofSum";
pub const COL_SIMPSON_SHARE: &str = "SI PercentofSum";

/// One row of the table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub abundance: f64,
    pub proportion: f64,
    pub ln_proportion: f64,
    pub shannon_component: f64,
    pub simpson_component: f64,
    pub shannon_share: f64,
    pub simpson_share: f64,
}

/// Derived columns, all of equal length; immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTable {
    abundance: Vec<f64>,
    proportion: Vec<f64>,
    ln_proportion: Vec<f64>,
    shannon_component: Vec<f64>,
    simpson_component: Vec<f64>,
    shannon_share: Vec<f64>,
    simpson_share: Vec<f64>,
}

impl RecordTable {
    pub(crate) fn from_stages(
        abundance: Vec<f64>,
        proportion: Vec<f64>,
        components: ComponentColumns,
        shares: ShareColumns,
    ) -> Self {
        debug_assert_eq!(abundance.len(), proportion.len());
        debug_assert_eq!(abundance.len(), components.shannon.len());
        debug_assert_eq!(abundance.len(), shares.simpson.len());

        Self {
            abundance,
            proportion,
            ln_proportion: components.ln_proportion,
            shannon_component: components.shannon,
            simpson_component: components.simpson,
            shannon_share: shares.shannon,
            simpson_share: shares.simpson,
        }
    }

    pub fn len(&self) -> usize {
        self.abundance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abundance.is_empty()
    }

    pub fn abundance(&self) -> &[f64] {
        &self.abundance
    }

    pub fn proportion(&self) -> &[f64] {
        &self.proportion
    }

    pub fn ln_proportion(&self) -> &[f64] {
        &self.ln_proportion
    }

    pub fn shannon_component(&self) -> &[f64] {
        &self.shannon_component
    }

    pub fn simpson_component(&self) -> &[f64] {
        &self.simpson_component
    }

    pub fn shannon_share(&self) -> &[f64] {
        &self.shannon_share
    }

    pub fn simpson_share(&self) -> &[f64] {
        &self.simpson_share
    }

    pub fn get(&self, idx: usize) -> Option<Record> {
        (idx < self.len()).then(|| Record {
            abundance: self.abundance[idx],
            proportion: self.proportion[idx],
            ln_proportion: self.ln_proportion[idx],
            shannon_component: self.shannon_component[idx],
            simpson_component: self.simpson_component[idx],
            shannon_share: self.shannon_share[idx],
            simpson_share: self.simpson_share[idx],
        })
    }

    /// Iterate rows in sample order
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        (0..self.len()).filter_map(move |idx| self.get(idx))
    }

    /// Materialize as a Polars DataFrame (one column per derived field)
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let columns: Vec<Column> = [
            (COL_ABUNDANCE, &self.abundance),
            (COL_PROPORTION, &self.proportion),
            (COL_LN_PROPORTION, &self.ln_proportion),
            (COL_SHANNON_COMPONENT, &self.shannon_component),
            (COL_SIMPSON_COMPONENT, &self.simpson_component),
            (COL_SHANNON_SHARE, &self.shannon_share),
            (COL_SIMPSON_SHARE, &self.simpson_share),
        ]
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values.as_slice()).into())
        .collect();

        DataFrame::new(columns).with_context(|| "Failed to build record DataFrame")
    }

    /// Records sorted by abundance, most abundant first
    pub fn rank_abundance_frame(&self) -> Result<DataFrame> {
        self.to_dataframe()?
            .lazy()
            .sort(
                [COL_ABUNDANCE],
                SortMultipleOptions::default().with_order_descending(true),
            )
            .collect()
            .with_context(|| "Failed to sort records by abundance")
    }
}
