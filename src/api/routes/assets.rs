//! Page Routes
//!
//! - GET / - Dashboard page
//! - GET /assets/style.css - Stylesheet
//!
//! The page is compiled into the binary; the stylesheet is the CSS
//! compiled at startup.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use crate::api::AppState;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /assets/style.css
pub async fn stylesheet(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        state.stylesheet.to_string(),
    )
}
