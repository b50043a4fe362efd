use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Router};

use crate::core::config::AdminAuthConfig;
use crate::core::middleware;
use crate::features::auth::{routes as auth_routes, AuthService, SessionTokens};
use crate::features::carousel::{routes as carousel_routes, CarouselService};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::footer::{routes as footer_routes, FooterService};
use crate::features::products::{routes as products_routes, ProductService};
use crate::features::search::{routes as search_routes, SearchService};
use crate::features::storefront::{routes as storefront_routes, StorefrontService};
use crate::modules::store::CatalogStores;

/// Every service the API routes need, wired to one set of stores
pub struct AppServices {
    pub tokens: Arc<SessionTokens>,
    pub auth: Arc<AuthService>,
    pub products: Arc<ProductService>,
    pub categories: Arc<CategoryService>,
    pub carousel: Arc<CarouselService>,
    pub footer: Arc<FooterService>,
    pub search: Arc<SearchService>,
    pub storefront: Arc<StorefrontService>,
}

impl AppServices {
    pub fn new(stores: &CatalogStores, admin: &AdminAuthConfig) -> Self {
        let tokens = Arc::new(SessionTokens::from_config(admin));
        let auth = Arc::new(AuthService::new(admin, Arc::clone(&tokens)));

        let products = Arc::new(ProductService::new(
            Arc::clone(&stores.products),
            Arc::clone(&stores.categories),
        ));
        let categories = Arc::new(CategoryService::new(Arc::clone(&stores.categories)));
        let carousel = Arc::new(CarouselService::new(Arc::clone(&stores.carousel)));
        let footer = Arc::new(FooterService::new(Arc::clone(&stores.footer)));
        let search = Arc::new(SearchService::new(Arc::clone(&products)));
        let storefront = Arc::new(StorefrontService::new(
            Arc::clone(&products),
            Arc::clone(&categories),
            Arc::clone(&carousel),
            Arc::clone(&footer),
        ));

        Self {
            tokens,
            auth,
            products,
            categories,
            carousel,
            footer,
            search,
            storefront,
        }
    }
}

async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

/// API routes without the outer tower layers; `main` adds tracing, request
/// ids, CORS and Swagger UI.
pub fn api_router(services: &AppServices) -> Router {
    // Admin routes (require a session token)
    let admin_routes = Router::new()
        .merge(auth_routes::admin_routes())
        .merge(products_routes::admin_routes(Arc::clone(&services.products)))
        .merge(categories_routes::admin_routes(Arc::clone(
            &services.categories,
        )))
        .merge(carousel_routes::admin_routes(Arc::clone(&services.carousel)))
        .merge(footer_routes::admin_routes(Arc::clone(&services.footer)))
        .route_layer(from_fn_with_state(
            Arc::clone(&services.tokens),
            middleware::admin_auth_middleware,
        ));

    let public_routes = Router::new()
        .merge(auth_routes::public_routes(Arc::clone(&services.auth)))
        .merge(storefront_routes::routes(Arc::clone(&services.storefront)))
        .merge(search_routes::routes(Arc::clone(&services.search)))
        .merge(products_routes::routes(Arc::clone(&services.products)))
        .merge(categories_routes::routes(Arc::clone(&services.categories)))
        .merge(carousel_routes::routes(Arc::clone(&services.carousel)))
        .merge(footer_routes::routes(Arc::clone(&services.footer)))
        .route("/health", get(health_check));

    Router::new().merge(admin_routes).merge(public_routes)
}
