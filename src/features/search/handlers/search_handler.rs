use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::features::search::dtos::{SearchQueryParams, SearchResultDto};
use crate::features::search::services::SearchService;
use crate::shared::types::{ApiResponse, Meta};

/// Case-insensitive substring search over the product catalog
#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQueryParams),
    responses(
        (status = 200, description = "Matching products; empty for a blank query", body = ApiResponse<SearchResultDto>),
    ),
    tag = "search"
)]
pub async fn search_products(
    State(service): State<Arc<SearchService>>,
    Query(params): Query<SearchQueryParams>,
) -> Json<ApiResponse<SearchResultDto>> {
    let result = service.search(params.q.as_deref().unwrap_or_default()).await;
    let meta = Meta::of(&result.products);
    Json(ApiResponse::success(Some(result), None, Some(meta)))
}
