use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::ApiState;

#[derive(Serialize)]
struct LandingResponse {
    service: String,
    version: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

async fn landing() -> Json<LandingResponse> {
    Json(LandingResponse {
        service: "nobat consultation booking".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(landing))
        .route("/health", get(health_check))
}
