//! Server-rendered page routes

use crate::{AppState, error::Result};
use axum::{Router, extract::State, response::Html, routing::get};
use showcase::{SystemClock, render_page, service_catalog};
use tracing::debug;

/// Create page routes
pub fn router() -> Router<AppState> {
    Router::new().route("/services", get(services_page))
}

/// Render the Services page
async fn services_page(State(_state): State<AppState>) -> Result<Html<String>> {
    debug!("Rendering services page");

    let payload = service_catalog();
    Ok(Html(render_page(&payload, &SystemClock)))
}
