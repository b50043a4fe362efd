#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::time::Duration;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};
#[cfg(test)]
use axum_test::TestServer;
#[cfg(test)]
use chrono::Utc;

#[cfg(test)]
use crate::app::{api_router, AppServices};
#[cfg(test)]
use crate::core::config::AdminAuthConfig;
#[cfg(test)]
use crate::features::auth::model::AdminSession;
#[cfg(test)]
use crate::modules::store::{CatalogStores, MemoryStore};

#[cfg(test)]
pub const TEST_ADMIN_PASSWORD: &str = "decor-2025";

#[cfg(test)]
pub fn test_admin_config() -> AdminAuthConfig {
    AdminAuthConfig {
        username: "admin".to_string(),
        password: TEST_ADMIN_PASSWORD.to_string(),
        jwt_secret: "a-test-secret-that-is-long-enough-for-hs256".to_string(),
        session_ttl: Duration::from_secs(900),
    }
}

#[cfg(test)]
pub fn create_admin_session() -> AdminSession {
    AdminSession {
        username: "admin".to_string(),
        expires_at: Utc::now() + chrono::Duration::minutes(15),
    }
}

#[cfg(test)]
async fn inject_admin_session_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_admin_session());
    next.run(request).await
}

/// Skip the token check for handler-level tests
#[cfg(test)]
pub fn with_admin_session(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_session_middleware))
}

/// Full API over a fresh memory store
#[cfg(test)]
pub fn memory_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let services = AppServices::new(&CatalogStores::memory(store.clone()), &test_admin_config());
    let server = TestServer::new(api_router(&services)).unwrap();
    (server, store)
}

/// Log in with the test credentials and return the bearer token
#[cfg(test)]
pub async fn admin_token(server: &TestServer) -> String {
    let response = server
        .post("/api/admin/login")
        .json(&serde_json::json!({
            "username": "admin",
            "password": TEST_ADMIN_PASSWORD,
        }))
        .await;
    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    body["data"]["accessToken"]
        .as_str()
        .unwrap()
        .to_string()
}
