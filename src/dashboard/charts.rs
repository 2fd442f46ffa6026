//! Chart registry
//!
//! Each chart output names the controls it reads and knows how to turn the
//! matching transform result into a `Figure`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::controls::{ChartStyle, ControlId, ControlValues};
use super::summary::DatasetSummary;
use crate::chart::{palette, AxisData, BarMode, BarTrace, Figure, PieTrace, ScatterTrace};
use crate::records::RecordTable;
use crate::transforms::{
    admission_trends, age_distribution_with_bins, billing_distribution_with_bins,
    condition_distribution, insurance_comparison, CategoryShares, GroupedMeans, Histogram,
    TrendSeries,
};

/// Identifier of a chart output on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartId {
    AgeDistribution,
    ConditionDistribution,
    InsuranceComparison,
    BillingDistribution,
    AdmissionTrends,
}

impl ChartId {
    pub fn all() -> &'static [ChartId] {
        &[
            ChartId::AgeDistribution,
            ChartId::ConditionDistribution,
            ChartId::InsuranceComparison,
            ChartId::BillingDistribution,
            ChartId::AdmissionTrends,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartId::AgeDistribution => "age-distribution",
            ChartId::ConditionDistribution => "condition-distribution",
            ChartId::InsuranceComparison => "insurance-comparison",
            ChartId::BillingDistribution => "billing-distribution",
            ChartId::AdmissionTrends => "admission-trends",
        }
    }

    /// Card heading shown above the chart
    pub fn heading(&self) -> &'static str {
        match self {
            ChartId::AgeDistribution => "Patient Demographics",
            ChartId::ConditionDistribution => "Medical Condition Distribution",
            ChartId::InsuranceComparison => "Insurance Provider Comparison",
            ChartId::BillingDistribution => "Billing Amount Distribution",
            ChartId::AdmissionTrends => "Trends in Admission",
        }
    }

    /// Controls whose change must re-render this chart
    pub fn inputs(&self) -> &'static [ControlId] {
        match self {
            ChartId::AgeDistribution
            | ChartId::ConditionDistribution
            | ChartId::InsuranceComparison => &[ControlId::GenderFilter],
            ChartId::BillingDistribution => &[ControlId::GenderFilter, ControlId::BillingSlider],
            ChartId::AdmissionTrends => &[ControlId::ChartType, ControlId::ConditionFilter],
        }
    }

    /// Charts that read a given control
    pub fn driven_by(control: ControlId) -> Vec<ChartId> {
        Self::all()
            .iter()
            .copied()
            .filter(|chart| chart.inputs().contains(&control))
            .collect()
    }

    /// Run the matching transform and build its figure
    ///
    /// A missing billing threshold falls back to the slider's initial value.
    pub fn render(
        &self,
        table: &RecordTable,
        controls: &ControlValues,
        summary: &DatasetSummary,
        bins: usize,
    ) -> Figure {
        let gender = controls.selected_gender();

        match self {
            ChartId::AgeDistribution => match age_distribution_with_bins(table, gender, bins) {
                Some(hist) => age_figure(&hist),
                None => Figure::blank(),
            },
            ChartId::ConditionDistribution => {
                condition_figure(&condition_distribution(table, gender))
            }
            ChartId::InsuranceComparison => insurance_figure(&insurance_comparison(table, gender)),
            ChartId::BillingDistribution => {
                let threshold = controls
                    .threshold
                    .or_else(|| summary.default_threshold())
                    .unwrap_or(f64::INFINITY);
                billing_figure(&billing_distribution_with_bins(
                    table, gender, threshold, bins,
                ))
            }
            ChartId::AdmissionTrends => trends_figure(
                &admission_trends(table, controls.selected_condition()),
                controls.chart_style(),
            ),
        }
    }
}

impl std::fmt::Display for ChartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|chart| chart.as_str() == s)
            .ok_or_else(|| format!("Unknown chart: {}", s))
    }
}

/// Histogram series as stacked bars centred on their bins
fn histogram_bars(hist: &Histogram, colors: &[&'static str]) -> Vec<BarTrace> {
    let centers = hist.centers();
    let width = hist.bin_width();

    hist.series
        .iter()
        .enumerate()
        .map(|(i, series)| {
            BarTrace::new(
                AxisData::Numbers(centers.clone()),
                series.counts.iter().map(|c| Some(*c as f64)).collect(),
            )
            .name(series.name.clone())
            .width(width)
            .color(palette::color_at(colors, i))
        })
        .collect()
}

fn age_figure(hist: &Histogram) -> Figure {
    histogram_bars(hist, palette::GENDER).into_iter().fold(
        Figure::new("Age Distribution by Gender")
            .axes("Age", "count")
            .barmode(BarMode::Stack)
            .bargap(0.0)
            .legend_title("Gender"),
        |figure, bar| figure.trace(bar),
    )
}

fn condition_figure(shares: &CategoryShares) -> Figure {
    Figure::new("Medical Condition Distribution").trace(PieTrace {
        labels: shares.slices.iter().map(|s| s.label.clone()).collect(),
        values: shares.slices.iter().map(|s| s.count as f64).collect(),
    })
}

fn insurance_figure(grouped: &GroupedMeans) -> Figure {
    let providers = AxisData::Labels(grouped.providers.clone());

    grouped.series.iter().enumerate().fold(
        Figure::new("Insurance Provider Price Comparison")
            .axes("Insurance Provider", "Billing Amount")
            .barmode(BarMode::Group)
            .legend_title("Medical Condition"),
        |figure, (i, series)| {
            figure.trace(
                BarTrace::new(providers.clone(), series.means.clone())
                    .name(series.condition.clone())
                    .color(palette::color_at(palette::SET2, i)),
            )
        },
    )
}

fn billing_figure(hist: &Histogram) -> Figure {
    histogram_bars(hist, &[palette::PRIMARY]).into_iter().fold(
        Figure::new("Billing Amount Distribution")
            .axes("Billing Amount", "count")
            .bargap(0.0),
        |figure, bar| figure.trace(bar),
    )
}

fn trends_figure(trends: &TrendSeries, style: ChartStyle) -> Figure {
    let x = AxisData::Labels(trends.labels());
    let y = trends.counts().into_iter().map(|c| Some(c as f64)).collect();

    let figure = Figure::new("Admission Trends over Time").axes("YearMonth", "Count");
    match style {
        ChartStyle::Line => figure.trace(ScatterTrace::lines(x, y)),
        ChartStyle::Bar => figure.trace(BarTrace::new(x, y)),
    }
}
