//! Chart Routes
//!
//! - GET /api/v1/charts - Chart registry with each chart's input controls
//! - GET /api/v1/charts/:chart - Render one chart for the given control values
//!
//! Control values travel in the query string:
//! `?gender=Female&threshold=25000&chart_type=line&condition=Asthma`.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartInfo, ChartListResponse, ChartResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::{ChartId, ControlValues};

/// GET /api/v1/charts
///
/// List every chart output and the controls it depends on.
pub async fn list_charts() -> Json<ChartListResponse> {
    let charts: Vec<ChartInfo> = ChartId::all().iter().copied().map(ChartInfo::from).collect();

    Json(ChartListResponse {
        total: charts.len(),
        charts,
    })
}

/// GET /api/v1/charts/:chart
///
/// Run the chart's transform against the loaded table.
pub async fn render_chart(
    State(state): State<Arc<AppState>>,
    Path(chart): Path<String>,
    controls: Result<Query<ControlValues>, QueryRejection>,
) -> ApiResult<Json<ChartResponse>> {
    let id: ChartId = chart.parse().map_err(ApiError::NotFound)?;
    let Query(controls) = controls?;

    let figure = state.dashboard.render(id, &controls);

    Ok(Json(ChartResponse { id, figure }))
}
