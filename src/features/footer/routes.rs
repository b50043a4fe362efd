use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::footer::{handlers, services::FooterService};

pub fn routes(service: Arc<FooterService>) -> Router {
    Router::new()
        .route("/api/footer", get(handlers::get_footer))
        .with_state(service)
}

pub fn admin_routes(service: Arc<FooterService>) -> Router {
    Router::new()
        .route("/api/admin/footer", put(handlers::update_footer))
        .with_state(service)
}
