use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::carousel::{handlers, services::CarouselService};

pub fn routes(service: Arc<CarouselService>) -> Router {
    Router::new()
        .route("/api/carousel", get(handlers::list_carousel_images))
        .route("/api/carousel/{id}", get(handlers::get_carousel_image))
        .with_state(service)
}

pub fn admin_routes(service: Arc<CarouselService>) -> Router {
    Router::new()
        .route("/api/admin/carousel", post(handlers::create_carousel_image))
        .route(
            "/api/admin/carousel/{id}",
            put(handlers::update_carousel_image).delete(handlers::delete_carousel_image),
        )
        .route(
            "/api/admin/carousel/{id}/move-up",
            post(handlers::move_carousel_image_up),
        )
        .route(
            "/api/admin/carousel/{id}/move-down",
            post(handlers::move_carousel_image_down),
        )
        .with_state(service)
}
