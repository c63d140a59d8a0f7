use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/admin/appointments",
            get(handlers::admin::list_appointments),
        )
        .route(
            "/api/admin/appointments/:id/confirm",
            post(handlers::admin::confirm_appointment),
        )
        .route(
            "/api/admin/appointments/:id",
            delete(handlers::admin::cancel_appointment),
        )
        .route(
            "/api/admin/consultants",
            get(handlers::admin::list_consultants),
        )
        .route(
            "/api/admin/consultants",
            post(handlers::admin::create_consultant),
        )
        .route(
            "/api/admin/consultants/:id",
            get(handlers::admin::get_consultant),
        )
        .route(
            "/api/admin/consultants/:id",
            put(handlers::admin::update_consultant),
        )
        .route(
            "/api/admin/consultants/:id",
            delete(handlers::admin::delete_consultant),
        )
}
