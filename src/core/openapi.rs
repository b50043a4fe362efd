use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dto as auth_dto, handler as auth_handler, model as auth_model};
use crate::features::carousel::{dtos as carousel_dtos, handlers as carousel_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::footer::{dtos as footer_dtos, handlers as footer_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::features::search::{dtos as search_dtos, handlers as search_handlers};
use crate::features::storefront::{dtos as storefront_dtos, handlers as storefront_handlers};
use crate::shared::types::{ApiResponse, DeletedDto, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handler::login,
        auth_handler::get_session,
        // Storefront (public)
        storefront_handlers::get_storefront,
        search_handlers::search_products,
        // Products
        products_handlers::list_products,
        products_handlers::list_featured_products,
        products_handlers::list_new_arrivals,
        products_handlers::get_product,
        products_handlers::get_product_gallery,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::delete_product,
        products_handlers::replace_product_gallery,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::list_category_names,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Carousel
        carousel_handlers::list_carousel_images,
        carousel_handlers::get_carousel_image,
        carousel_handlers::create_carousel_image,
        carousel_handlers::update_carousel_image,
        carousel_handlers::delete_carousel_image,
        carousel_handlers::move_carousel_image_up,
        carousel_handlers::move_carousel_image_down,
        // Footer
        footer_handlers::get_footer,
        footer_handlers::update_footer,
    ),
    components(
        schemas(
            Meta,
            DeletedDto,
            ApiResponse<DeletedDto>,
            ApiResponse<Vec<String>>,
            // Auth
            auth_model::AdminSession,
            auth_dto::LoginRequestDto,
            auth_dto::LoginResponseDto,
            auth_dto::SessionResponseDto,
            ApiResponse<auth_dto::LoginResponseDto>,
            ApiResponse<auth_dto::SessionResponseDto>,
            // Storefront
            storefront_dtos::StorefrontDto,
            ApiResponse<storefront_dtos::StorefrontDto>,
            search_dtos::SearchResultDto,
            ApiResponse<search_dtos::SearchResultDto>,
            // Products
            products_dtos::ProductResponseDto,
            products_dtos::CreateProductDto,
            products_dtos::UpdateProductDto,
            products_dtos::ProductGalleryDto,
            products_dtos::UpdateProductGalleryDto,
            ApiResponse<products_dtos::ProductResponseDto>,
            ApiResponse<Vec<products_dtos::ProductResponseDto>>,
            ApiResponse<products_dtos::ProductGalleryDto>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            // Carousel
            carousel_dtos::CarouselImageResponseDto,
            carousel_dtos::CreateCarouselImageDto,
            carousel_dtos::UpdateCarouselImageDto,
            ApiResponse<carousel_dtos::CarouselImageResponseDto>,
            ApiResponse<Vec<carousel_dtos::CarouselImageResponseDto>>,
            // Footer
            footer_dtos::FooterResponseDto,
            footer_dtos::UpdateFooterDto,
            ApiResponse<footer_dtos::FooterResponseDto>,
        )
    ),
    tags(
        (name = "auth", description = "Admin session"),
        (name = "storefront", description = "Home page content (public)"),
        (name = "search", description = "Product search (public)"),
        (name = "products", description = "Product catalog"),
        (name = "categories", description = "Product categories"),
        (name = "carousel", description = "Hero carousel slides and ordering"),
        (name = "footer", description = "Site footer content"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Interiors Catalog API",
        version = "0.1.0",
        description = "Catalog, storefront and admin API for an interior decoration showroom",
    )
)]
pub struct ApiDoc;

/// Adds the admin Bearer session scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_admin_and_public_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/storefront",
            "/api/search",
            "/api/products/{id}",
            "/api/admin/carousel/{id}/move-up",
            "/api/admin/login",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Showroom".to_string(),
            version: "2.0.0".to_string(),
            description: "Docs".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "Showroom");
        assert_eq!(doc.info.version, "2.0.0");
    }
}
