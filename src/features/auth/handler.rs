use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::dto::{LoginRequestDto, LoginResponseDto, SessionResponseDto};
use crate::features::auth::model::AdminSession;
use crate::features::auth::service::AuthService;
use crate::shared::types::ApiResponse;

/// Exchange the admin credentials for a short-lived session token
#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Session issued", body = ApiResponse<LoginResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid username or password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<LoginResponseDto>>> {
    let response = service.login(dto)?;
    Ok(Json(ApiResponse::success(Some(response), None, None)))
}

/// Current admin session
#[utoipa::path(
    get,
    path = "/api/admin/session",
    responses(
        (status = 200, description = "Session is valid", body = ApiResponse<SessionResponseDto>),
        (status = 401, description = "Missing, invalid or expired session")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_session(session: AdminSession) -> Json<ApiResponse<SessionResponseDto>> {
    Json(ApiResponse::success(Some(session.into()), None, None))
}
