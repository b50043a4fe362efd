use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::features::storefront::dtos::{StorefrontDto, StorefrontQueryParams};
use crate::features::storefront::services::StorefrontService;
use crate::shared::types::ApiResponse;

/// Home page content, optionally narrowed to one category
#[utoipa::path(
    get,
    path = "/api/storefront",
    params(StorefrontQueryParams),
    responses(
        (status = 200, description = "Storefront sections", body = ApiResponse<StorefrontDto>),
    ),
    tag = "storefront"
)]
pub async fn get_storefront(
    State(service): State<Arc<StorefrontService>>,
    Query(params): Query<StorefrontQueryParams>,
) -> Json<ApiResponse<StorefrontDto>> {
    Json(ApiResponse::success(Some(service.home(params).await), None, None))
}
