use crate::features::auth::handler;
use crate::features::auth::service::AuthService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Login stays outside the admin middleware
pub fn public_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/admin/login", post(handler::login))
        .with_state(service)
}

pub fn admin_routes() -> Router {
    Router::new().route("/api/admin/session", get(handler::get_session))
}
