//! Catalog payload routes
//!
//! Exposes the payload the page renderer consumes, as JSON:
//! `{"title": string, "services": [{"id", "title", "description", "icon"}]}`.

use crate::{AppState, error::Result};
use axum::{Json, Router, extract::State, routing::get};
use showcase::{CatalogPayload, service_catalog};
use tracing::debug;

/// Create catalog routes
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_catalog))
}

/// Return the service catalog payload
async fn get_catalog(State(_state): State<AppState>) -> Result<Json<CatalogPayload>> {
    debug!("Serving service catalog payload");

    Ok(Json(service_catalog()))
}
