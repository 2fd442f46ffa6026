//! Dashboard Routes
//!
//! - GET /api/v1/dashboard - Summary, control options and chart registry
//! - GET /api/v1/summary - Dataset summary only

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ChartInfo, DashboardResponse, OptionDto};
use crate::api::state::AppState;
use crate::dashboard::{ChartId, ChartStyle, DatasetSummary};

/// GET /api/v1/dashboard
///
/// Everything the page needs to lay out its controls and chart panels.
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    let summary = state.dashboard.summary().clone();

    Json(DashboardResponse {
        title: "Healthcare Dashboard".to_string(),
        gender_options: OptionDto::from_values(&summary.gender_options),
        condition_options: OptionDto::from_values(&summary.condition_options),
        chart_type_options: vec![
            OptionDto::new("Line Chart", ChartStyle::Line.as_str()),
            OptionDto::new("Bar Chart", ChartStyle::Bar.as_str()),
        ],
        chart_type: ChartStyle::Line.to_string(),
        charts: ChartId::all().iter().copied().map(ChartInfo::from).collect(),
        summary,
    })
}

/// GET /api/v1/summary
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummary> {
    Json(state.dashboard.summary().clone())
}
