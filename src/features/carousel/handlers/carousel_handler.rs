use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AdminSession;
use crate::features::carousel::dtos::{
    CarouselImageResponseDto, CreateCarouselImageDto, UpdateCarouselImageDto,
};
use crate::features::carousel::services::CarouselService;
use crate::shared::types::{ApiResponse, DeletedDto, Meta};

/// Hero carousel slides in render order
#[utoipa::path(
    get,
    path = "/api/carousel",
    responses(
        (status = 200, description = "Slides in display order", body = ApiResponse<Vec<CarouselImageResponseDto>>),
    ),
    tag = "carousel"
)]
pub async fn list_carousel_images(
    State(service): State<Arc<CarouselService>>,
) -> Json<ApiResponse<Vec<CarouselImageResponseDto>>> {
    let slides = service.list().await;
    let meta = Meta::of(&slides);
    Json(ApiResponse::success(Some(slides), None, Some(meta)))
}

/// Get slide by id
#[utoipa::path(
    get,
    path = "/api/carousel/{id}",
    params(
        ("id" = Uuid, Path, description = "Carousel image ID")
    ),
    responses(
        (status = 200, description = "Slide found", body = ApiResponse<CarouselImageResponseDto>),
        (status = 404, description = "Slide not found")
    ),
    tag = "carousel"
)]
pub async fn get_carousel_image(
    State(service): State<Arc<CarouselService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CarouselImageResponseDto>>> {
    let slide = service
        .get_by_id(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Carousel image with id {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(slide), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/admin/carousel",
    request_body = CreateCarouselImageDto,
    responses(
        (status = 201, description = "Slide created", body = ApiResponse<CarouselImageResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Display order already used")
    ),
    tag = "carousel",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_carousel_image(
    _session: AdminSession,
    State(service): State<Arc<CarouselService>>,
    AppJson(dto): AppJson<CreateCarouselImageDto>,
) -> Result<(StatusCode, Json<ApiResponse<CarouselImageResponseDto>>)> {
    let slide = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(slide),
            Some("Carousel image created".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/carousel/{id}",
    params(
        ("id" = Uuid, Path, description = "Carousel image ID")
    ),
    request_body = UpdateCarouselImageDto,
    responses(
        (status = 200, description = "Slide updated", body = ApiResponse<CarouselImageResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Slide not found")
    ),
    tag = "carousel",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_carousel_image(
    _session: AdminSession,
    State(service): State<Arc<CarouselService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCarouselImageDto>,
) -> Result<Json<ApiResponse<CarouselImageResponseDto>>> {
    let slide = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(slide),
        Some("Carousel image updated".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/carousel/{id}",
    params(
        ("id" = Uuid, Path, description = "Carousel image ID")
    ),
    responses(
        (status = 200, description = "Slide deleted or already absent", body = ApiResponse<DeletedDto>),
    ),
    tag = "carousel",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_carousel_image(
    _session: AdminSession,
    State(service): State<Arc<CarouselService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeletedDto>>> {
    let deleted = service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeletedDto { deleted }),
        None,
        None,
    )))
}

/// Move a slide one position earlier; no-op for the first slide
#[utoipa::path(
    post,
    path = "/api/admin/carousel/{id}/move-up",
    params(
        ("id" = Uuid, Path, description = "Carousel image ID")
    ),
    responses(
        (status = 200, description = "Slides in new display order", body = ApiResponse<Vec<CarouselImageResponseDto>>),
        (status = 404, description = "Slide not found")
    ),
    tag = "carousel",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn move_carousel_image_up(
    _session: AdminSession,
    State(service): State<Arc<CarouselService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<CarouselImageResponseDto>>>> {
    let slides = service.move_up(id).await?;
    let meta = Meta::of(&slides);
    Ok(Json(ApiResponse::success(Some(slides), None, Some(meta))))
}

/// Move a slide one position later; no-op for the last slide
#[utoipa::path(
    post,
    path = "/api/admin/carousel/{id}/move-down",
    params(
        ("id" = Uuid, Path, description = "Carousel image ID")
    ),
    responses(
        (status = 200, description = "Slides in new display order", body = ApiResponse<Vec<CarouselImageResponseDto>>),
        (status = 404, description = "Slide not found")
    ),
    tag = "carousel",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn move_carousel_image_down(
    _session: AdminSession,
    State(service): State<Arc<CarouselService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<CarouselImageResponseDto>>>> {
    let slides = service.move_down(id).await?;
    let meta = Meta::of(&slides);
    Ok(Json(ApiResponse::success(Some(slides), None, Some(meta))))
}
