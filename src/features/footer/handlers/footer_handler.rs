use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AdminSession;
use crate::features::footer::dtos::{FooterResponseDto, UpdateFooterDto};
use crate::features::footer::services::FooterService;
use crate::shared::types::ApiResponse;

/// Site footer content
#[utoipa::path(
    get,
    path = "/api/footer",
    responses(
        (status = 200, description = "Footer content", body = ApiResponse<FooterResponseDto>),
    ),
    tag = "footer"
)]
pub async fn get_footer(
    State(service): State<Arc<FooterService>>,
) -> Json<ApiResponse<FooterResponseDto>> {
    Json(ApiResponse::success(Some(service.get().await), None, None))
}

/// Replace footer content (admin only)
#[utoipa::path(
    put,
    path = "/api/admin/footer",
    request_body = UpdateFooterDto,
    responses(
        (status = 200, description = "Footer updated", body = ApiResponse<FooterResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Admin login required")
    ),
    tag = "footer",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_footer(
    _session: AdminSession,
    State(service): State<Arc<FooterService>>,
    AppJson(dto): AppJson<UpdateFooterDto>,
) -> Result<Json<ApiResponse<FooterResponseDto>>> {
    let footer = service.update(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(footer),
        Some("Footer updated".to_string()),
        None,
    )))
}
