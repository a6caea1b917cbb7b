//! Exploration plots
//!
//! Display-only views over a scored record table. Built with plotly and opened
//! in the browser by `show`; nothing is written by the pipeline itself.

use crate::table::{
    RecordTable, COL_ABUNDANCE, COL_SHANNON_COMPONENT, COL_SHANNON_SHARE, COL_SIMPSON_COMPONENT,
    COL_SIMPSON_SHARE,
};
use plotly::color::NamedColor;
use plotly::common::{Marker, Mode};
use plotly::layout::Axis;
use plotly::{Histogram, Layout, Plot, Scatter};

/// Simpson components are tiny next to the dominant taxon, so their views clip y
pub const SIMPSON_Y_RANGE: [f64; 2] = [0.0, 0.005];

/// Trace name for the Shannon vs. Simpson component view
pub const COMPONENT_COMPARISON_NAME: &str = "SH vs SI Component";

/// The five exploration views, in display order
pub struct ExplorationPlots {
    /// Histogram of the raw sample
    pub abundance_distribution: Plot,
    /// Abundance vs. Shannon component
    pub shannon_components: Plot,
    /// Abundance vs. Simpson component (y clipped)
    pub simpson_components: Plot,
    /// Both percent-of-total shares overlaid
    pub index_contributions: Plot,
    /// Shannon component vs. Simpson component (y clipped)
    pub component_comparison: Plot,
}

impl ExplorationPlots {
    pub fn from_table(table: &RecordTable) -> Self {
        Self {
            abundance_distribution: abundance_histogram(table),
            shannon_components: shannon_component_scatter(table),
            simpson_components: simpson_component_scatter(table),
            index_contributions: share_overlay_scatter(table),
            component_comparison: component_comparison_scatter(table),
        }
    }

    pub fn plots(&self) -> [&Plot; 5] {
        [
            &self.abundance_distribution,
            &self.shannon_components,
            &self.simpson_components,
            &self.index_contributions,
            &self.component_comparison,
        ]
    }

    /// Open every view in the browser
    pub fn show_all(&self) {
        for plot in self.plots() {
            plot.show();
        }
    }
}

fn markers(x: &[f64], y: &[f64], name: &str) -> Box<Scatter<f64, f64>> {
    Scatter::new(x.to_vec(), y.to_vec())
        .mode(Mode::Markers)
        .name(name)
}

fn scatter_layout(x_label: &str, y_label: &str) -> Layout {
    Layout::new()
        .x_axis(Axis::new().title(x_label))
        .y_axis(Axis::new().title(y_label))
}

fn clipped_layout(x_label: &str, y_label: &str) -> Layout {
    Layout::new()
        .x_axis(Axis::new().title(x_label))
        .y_axis(Axis::new().title(y_label).range(SIMPSON_Y_RANGE.to_vec()))
}

pub fn abundance_histogram(table: &RecordTable) -> Plot {
    let mut plot = Plot::new();
    plot.add_trace(Histogram::new(table.abundance().to_vec()).name(COL_ABUNDANCE));
    plot.set_layout(scatter_layout(COL_ABUNDANCE, "Count"));
    plot
}

pub fn shannon_component_scatter(table: &RecordTable) -> Plot {
    let mut plot = Plot::new();
    plot.add_trace(
        markers(table.abundance(), table.shannon_component(), COL_SHANNON_COMPONENT)
            .marker(Marker::new().color(NamedColor::Red)),
    );
    plot.set_layout(scatter_layout(COL_ABUNDANCE, COL_SHANNON_COMPONENT));
    plot
}

pub fn simpson_component_scatter(table: &RecordTable) -> Plot {
    let mut plot = Plot::new();
    plot.add_trace(
        markers(table.abundance(), table.simpson_component(), COL_SIMPSON_COMPONENT)
            .marker(Marker::new().color(NamedColor::Green)),
    );
    plot.set_layout(clipped_layout(COL_ABUNDANCE, COL_SIMPSON_COMPONENT));
    plot
}

pub fn share_overlay_scatter(table: &RecordTable) -> Plot {
    let mut plot = Plot::new();
    plot.add_trace(
        markers(table.abundance(), table.shannon_share(), COL_SHANNON_SHARE)
            .marker(Marker::new().color(NamedColor::Purple)),
    );
    plot.add_trace(markers(table.abundance(), table.simpson_share(), COL_SIMPSON_SHARE));
    plot.set_layout(scatter_layout(COL_ABUNDANCE, "Share of index").show_legend(true));
    plot
}

pub fn component_comparison_scatter(table: &RecordTable) -> Plot {
    let mut plot = Plot::new();
    plot.add_trace(markers(
        table.shannon_component(),
        table.simpson_component(),
        COMPONENT_COMPARISON_NAME,
    ));
    plot.set_layout(clipped_layout(COL_SHANNON_COMPONENT, COL_SIMPSON_COMPONENT));
    plot
}
