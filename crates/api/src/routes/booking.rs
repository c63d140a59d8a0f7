use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/book", get(handlers::booking::booking_form))
        .route("/api/book", post(handlers::booking::book))
        .route(
            "/api/appointments/today",
            get(handlers::booking::today_appointments),
        )
}
