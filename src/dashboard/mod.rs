//! Dashboard
//!
//! Ties the immutable record table to the page:
//!
//! - **controls**: control identifiers and their current values
//! - **charts**: chart identifiers, their inputs, and figure rendering
//! - **summary**: headline statistics and control options
//!
//! # Dispatch
//!
//! ```text
//! control change → ChartId::driven_by(control) → ChartId::render(table, controls) → Figure
//! ```
//!
//! The browser decides *when* to ask for a chart; everything it asks for is
//! a pure function of the table and the control values it sends.

pub mod charts;
pub mod controls;
pub mod summary;

pub use charts::ChartId;
pub use controls::{ChartStyle, ControlId, ControlValues};
pub use summary::{format_thousands, BillingSlider, DatasetSummary, SliderMark};

use crate::chart::Figure;
use crate::config::DashboardConfig;
use crate::records::RecordTable;
use std::sync::Arc;

/// The loaded table plus everything derived from it once at startup
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: Arc<RecordTable>,
    summary: Arc<DatasetSummary>,
    bins: usize,
}

impl Dashboard {
    pub fn new(table: RecordTable, config: &DashboardConfig) -> Self {
        let summary = DatasetSummary::from_table(&table, config.slider_step);

        tracing::info!(
            records = summary.total_records,
            missing_billing = summary.missing_billing,
            genders = summary.gender_options.len(),
            conditions = summary.condition_options.len(),
            "Dashboard ready"
        );

        Self {
            table: Arc::new(table),
            summary: Arc::new(summary),
            bins: config.bins.max(1),
        }
    }

    pub fn table(&self) -> &RecordTable {
        &self.table
    }

    pub fn summary(&self) -> &DatasetSummary {
        &self.summary
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Render one chart for the given control values
    pub fn render(&self, chart: ChartId, controls: &ControlValues) -> Figure {
        tracing::debug!(chart = %chart, ?controls, "Rendering chart");
        if let (Some(threshold), Some(slider)) = (controls.threshold, &self.summary.billing_slider) {
            if !slider.contains(threshold) {
                tracing::debug!(
                    threshold,
                    min = slider.min,
                    max = slider.max,
                    "Threshold outside the slider range"
                );
            }
        }
        chart.render(&self.table, controls, &self.summary, self.bins)
    }
}
