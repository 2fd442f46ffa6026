//! Dashboard controls
//!
//! The named inputs on the page and the values they currently hold.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of an interactive control on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlId {
    GenderFilter,
    BillingSlider,
    ChartType,
    ConditionFilter,
}

impl ControlId {
    pub fn all() -> &'static [ControlId] {
        &[
            ControlId::GenderFilter,
            ControlId::BillingSlider,
            ControlId::ChartType,
            ControlId::ConditionFilter,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlId::GenderFilter => "gender-filter",
            ControlId::BillingSlider => "billing-slider",
            ControlId::ChartType => "chart-type",
            ControlId::ConditionFilter => "condition-filter",
        }
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the admission trend is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    Line,
    Bar,
}

impl ChartStyle {
    /// `"line"` selects a line chart; anything else, including nothing, is a bar chart
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("line") => ChartStyle::Line,
            _ => ChartStyle::Bar,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartStyle::Line => "line",
            ChartStyle::Bar => "bar",
        }
    }
}

impl std::fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values of every control
///
/// Deserialises directly from a chart request's query string. Empty strings
/// count as "nothing selected".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ControlValues {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub chart_type: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
}

impl ControlValues {
    /// Builder method: select a gender
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Builder method: set the billing threshold
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Builder method: set the trend chart type
    pub fn chart_type(mut self, chart_type: impl Into<String>) -> Self {
        self.chart_type = Some(chart_type.into());
        self
    }

    /// Builder method: select a medical condition
    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn selected_gender(&self) -> Option<&str> {
        self.gender.as_deref().filter(|g| !g.is_empty())
    }

    pub fn selected_condition(&self) -> Option<&str> {
        self.condition.as_deref().filter(|c| !c.is_empty())
    }

    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle::parse(self.chart_type.as_deref())
    }
}

/// Accepts a number or numeric text; empty text means no threshold
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid threshold: {text}"))),
    }
}
