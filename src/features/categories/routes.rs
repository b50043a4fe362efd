use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Public storefront routes
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/{id}", get(handlers::get_category))
        .with_state(service)
}

/// Admin routes; the caller layers admin authentication on top
pub fn admin_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/admin/categories", post(handlers::create_category))
        .route(
            "/api/admin/categories/names",
            get(handlers::list_category_names),
        )
        .route(
            "/api/admin/categories/{id}",
            put(handlers::update_category).delete(handlers::delete_category),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::MemoryStore;
    use crate::shared::test_helpers::with_admin_session;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn service() -> Arc<CategoryService> {
        let store = Arc::new(MemoryStore::new());
        Arc::new(CategoryService::new(store))
    }

    fn create_request() -> Request<Body> {
        Request::post("/api/admin/categories")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Wall Panels"}"#))
            .unwrap()
    }

    #[tokio::test]
    async fn test_admin_handler_rejects_missing_session() {
        let response = admin_routes(service())
            .oneshot(create_request())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_handler_with_session() {
        let response = with_admin_session(admin_routes(service()))
            .oneshot(create_request())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_json() {
        let request = Request::post("/api/admin/categories")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{name:"))
            .unwrap();
        let response = with_admin_session(admin_routes(service()))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
