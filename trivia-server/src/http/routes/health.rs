//! Health check: process is up and the store answers a category read

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub total_categories: usize,
}

/// GET /health - a store failure surfaces as the usual 422
async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let categories = state.store().categories().await?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        total_categories: categories.len(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[tokio::test]
    async fn reports_category_count() {
        let state = AppState::new(MemoryStore::with_default_categories());
        let Json(body) = health(State(state)).await.unwrap();
        assert_eq!(body.status, "ok");
        assert_eq!(body.total_categories, 6);
    }
}
