use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::products::{handlers, services::ProductService};

/// Public storefront routes
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/featured", get(handlers::list_featured_products))
        .route("/api/products/new-arrivals", get(handlers::list_new_arrivals))
        .route("/api/products/{id}", get(handlers::get_product))
        .route(
            "/api/products/{id}/gallery",
            get(handlers::get_product_gallery),
        )
        .with_state(service)
}

/// Admin routes; the caller layers admin authentication on top
pub fn admin_routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route("/api/admin/products", post(handlers::create_product))
        .route(
            "/api/admin/products/{id}",
            put(handlers::update_product).delete(handlers::delete_product),
        )
        .route(
            "/api/admin/products/{id}/gallery",
            put(handlers::replace_product_gallery),
        )
        .with_state(service)
}
