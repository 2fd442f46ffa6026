//! Data Transfer Objects
//!
//! Response types for the API endpoints.
//! Chart figures and the dataset summary serialize directly; these wrap them
//! with the registry metadata the page needs.

use serde::Serialize;

use crate::chart::Figure;
use crate::dashboard::{ChartId, ControlId, DatasetSummary};

// ============================================
// CHART DTOs
// ============================================

/// Registry entry for one chart output
#[derive(Debug, Serialize)]
pub struct ChartInfo {
    pub id: ChartId,
    pub heading: String,
    /// Controls whose change re-renders this chart
    pub inputs: Vec<ControlId>,
}

impl From<ChartId> for ChartInfo {
    fn from(id: ChartId) -> Self {
        Self {
            id,
            heading: id.heading().to_string(),
            inputs: id.inputs().to_vec(),
        }
    }
}

/// Chart registry response
#[derive(Debug, Serialize)]
pub struct ChartListResponse {
    pub charts: Vec<ChartInfo>,
    pub total: usize,
}

/// Rendered chart response
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub id: ChartId,
    pub figure: Figure,
}

// ============================================
// DASHBOARD DTOs
// ============================================

/// Option shown in a dropdown or radio group
#[derive(Debug, Serialize)]
pub struct OptionDto {
    pub label: String,
    pub value: String,
}

impl OptionDto {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Options whose label is their value
    pub fn from_values(values: &[String]) -> Vec<Self> {
        values.iter().map(|v| OptionDto::new(v, v)).collect()
    }
}

/// Everything the page needs to build itself
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub title: String,
    pub summary: DatasetSummary,
    pub gender_options: Vec<OptionDto>,
    pub condition_options: Vec<OptionDto>,
    pub chart_type_options: Vec<OptionDto>,
    /// Initially selected chart type
    pub chart_type: String,
    pub charts: Vec<ChartInfo>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
