//! Healthdash HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page
//! - `GET /assets/style.css` - Stylesheet
//!
//! ## Dashboard
//! - `GET /api/v1/dashboard` - Summary, control options and chart registry
//! - `GET /api/v1/summary` - Dataset summary
//!
//! ## Charts
//! - `GET /api/v1/charts` - Chart registry
//! - `GET /api/v1/charts/:chart` - Render a chart for the given control values
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use healthdash::api::{serve, AppState};
//! use healthdash::config::Config;
//! use healthdash::dashboard::Dashboard;
//! use healthdash::records::TableLoader;
//! use healthdash::stylesheet;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let css = stylesheet::compile(&config.assets.stylesheet)?;
//!     let table = TableLoader::new().load(&config.data.path)?;
//!     let dashboard = Dashboard::new(table, &config.dashboard);
//!
//!     let state = AppState::new(dashboard, config.api.clone(), css);
//!     serve(state, &config.api).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Dashboard routes
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        .route("/summary", get(routes::dashboard::get_summary))
        // Chart routes
        .route("/charts", get(routes::charts::list_charts))
        .route("/charts/:chart", get(routes::charts::render_chart));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::assets::index))
        .route("/assets/style.css", get(routes::assets::stylesheet))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive CORS unless origins are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

/// Start the dashboard server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Healthdash listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Healthdash shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::dashboard::Dashboard;
    use crate::transforms::test_support::sample_table;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    const TEST_CSS: &str = ".card {\n  flex: 1;\n}\n";

    fn create_test_app() -> Router {
        let dashboard = Dashboard::new(sample_table(), &DashboardConfig::default());
        let state = AppState::new(dashboard, ApiConfig::default(), TEST_CSS);
        build_router(state)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _) = get(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, body) = get(create_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["records"], 12);
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let css = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/assets/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(css.status(), StatusCode::OK);
        assert_eq!(
            css.headers()[axum::http::header::CONTENT_TYPE],
            "text/css; charset=utf-8"
        );
        let body = axum::body::to_bytes(css.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], TEST_CSS.as_bytes());
    }

    #[tokio::test]
    async fn test_dashboard_layout() {
        let (status, body) = get(create_test_app(), "/api/v1/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["total_records"], 12);
        assert_eq!(body["gender_options"][0]["value"], "Female");
        assert_eq!(body["chart_type"], "line");
        assert_eq!(body["charts"].as_array().unwrap().len(), 5);
        assert_eq!(body["charts"][3]["id"], "billing-distribution");
        assert_eq!(
            body["charts"][3]["inputs"],
            serde_json::json!(["gender-filter", "billing-slider"])
        );
    }

    #[tokio::test]
    async fn test_summary() {
        let (status, body) = get(create_test_app(), "/api/v1/summary").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["missing_billing"], 2);
        assert!(body["billing_slider"]["marks"].is_array());
    }

    #[tokio::test]
    async fn test_list_charts() {
        let (status, body) = get(create_test_app(), "/api/v1/charts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 5);
    }

    #[tokio::test]
    async fn test_render_age_chart_with_gender() {
        let (status, body) =
            get(create_test_app(), "/api/v1/charts/age-distribution?gender=Male").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "age-distribution");
        assert_eq!(body["figure"]["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["figure"]["data"][0]["name"], "Male");
    }

    #[tokio::test]
    async fn test_render_unknown_gender_is_blank() {
        let (status, body) =
            get(create_test_app(), "/api/v1/charts/age-distribution?gender=Nobody").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["figure"],
            serde_json::json!({"data": [], "layout": {}})
        );
    }

    #[tokio::test]
    async fn test_render_billing_below_minimum() {
        let (status, body) = get(
            create_test_app(),
            "/api/v1/charts/billing-distribution?threshold=-100000",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let counts = body["figure"]["data"][0]["y"].as_array().unwrap();
        assert_eq!(counts.len(), 10);
        assert!(counts.iter().all(|c| c.as_f64() == Some(0.0)));
    }

    #[tokio::test]
    async fn test_render_trends_fallback_to_bar() {
        let (status, body) = get(
            create_test_app(),
            "/api/v1/charts/admission-trends?chart_type=area&condition=Diabetes",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["figure"]["data"][0]["type"], "bar");
    }

    #[tokio::test]
    async fn test_unknown_chart_not_found() {
        let (status, body) = get(create_test_app(), "/api/v1/charts/heatmap").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_blank_threshold_uses_median() {
        let (status, blank) = get(
            create_test_app(),
            "/api/v1/charts/billing-distribution?gender=&threshold=",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, default) = get(create_test_app(), "/api/v1/charts/billing-distribution").await;
        assert_eq!(blank["figure"], default["figure"]);
    }

    #[tokio::test]
    async fn test_invalid_threshold_bad_request() {
        let (status, body) = get(
            create_test_app(),
            "/api/v1/charts/billing-distribution?threshold=lots",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_QUERY");
    }
}
