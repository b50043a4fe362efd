use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::storefront::{handlers, services::StorefrontService};

pub fn routes(service: Arc<StorefrontService>) -> Router {
    Router::new()
        .route("/api/storefront", get(handlers::get_storefront))
        .with_state(service)
}
