use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AdminSession;
use crate::features::products::dtos::{
    CreateProductDto, ProductGalleryDto, ProductQueryParams, ProductResponseDto,
    UpdateProductDto, UpdateProductGalleryDto,
};
use crate::features::products::services::ProductService;
use crate::shared::types::{ApiResponse, DeletedDto, Meta};

/// List products, optionally filtered by category or highlight flags
#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductQueryParams),
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
    Query(params): Query<ProductQueryParams>,
) -> Json<ApiResponse<Vec<ProductResponseDto>>> {
    let products = service.list(params).await;
    let meta = Meta::of(&products);
    Json(ApiResponse::success(Some(products), None, Some(meta)))
}

/// Featured products for the storefront grid
#[utoipa::path(
    get,
    path = "/api/products/featured",
    responses(
        (status = 200, description = "Featured products", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn list_featured_products(
    State(service): State<Arc<ProductService>>,
) -> Json<ApiResponse<Vec<ProductResponseDto>>> {
    let products = service.list_featured().await;
    let meta = Meta::of(&products);
    Json(ApiResponse::success(Some(products), None, Some(meta)))
}

/// New arrivals for the storefront grid
#[utoipa::path(
    get,
    path = "/api/products/new-arrivals",
    responses(
        (status = 200, description = "New arrivals", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn list_new_arrivals(
    State(service): State<Arc<ProductService>>,
) -> Json<ApiResponse<Vec<ProductResponseDto>>> {
    let products = service.list_new_arrivals().await;
    let meta = Meta::of(&products);
    Json(ApiResponse::success(Some(products), None, Some(meta)))
}

/// Get product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service
        .get_by_id(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Gallery images for a product
#[utoipa::path(
    get,
    path = "/api/products/{id}/gallery",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Gallery images", body = ApiResponse<ProductGalleryDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product_gallery(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProductGalleryDto>>> {
    let gallery = service.get_gallery(id).await?;
    Ok(Json(ApiResponse::success(Some(gallery), None, None)))
}

/// Create a product (admin only)
#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Admin login required")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_product(
    _session: AdminSession,
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<CreateProductDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponseDto>>)> {
    let product = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(product),
            Some("Product created".to_string()),
            None,
        )),
    ))
}

/// Update a product (admin only)
///
/// Setting `isFeatured` clears `isNewArrival` and vice versa.
#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_product(
    _session: AdminSession,
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateProductDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(product),
        Some("Product updated".to_string()),
        None,
    )))
}

/// Delete a product permanently (admin only)
#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted or already absent", body = ApiResponse<DeletedDto>),
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_product(
    _session: AdminSession,
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeletedDto>>> {
    let deleted = service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeletedDto { deleted }),
        None,
        None,
    )))
}

/// Replace a product's gallery images (admin only)
#[utoipa::path(
    put,
    path = "/api/admin/products/{id}/gallery",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductGalleryDto,
    responses(
        (status = 200, description = "Gallery replaced", body = ApiResponse<ProductGalleryDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn replace_product_gallery(
    _session: AdminSession,
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateProductGalleryDto>,
) -> Result<Json<ApiResponse<ProductGalleryDto>>> {
    let gallery = service.replace_gallery(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(gallery), None, None)))
}
