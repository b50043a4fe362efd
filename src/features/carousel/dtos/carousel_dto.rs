use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::carousel::models::{CarouselImage, CarouselImagePatch};
use crate::shared::validation::LINK_REGEX;

/// Response DTO for a hero carousel slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarouselImageResponseDto {
    pub id: Uuid,
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CarouselImage> for CarouselImageResponseDto {
    fn from(s: CarouselImage) -> Self {
        Self {
            id: s.id,
            image: s.image,
            title: s.title,
            subtitle: s.subtitle,
            button_text: s.button_text,
            button_link: s.button_link,
            display_order: s.display_order,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarouselImageDto {
    /// Image URL or data URL
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 500))]
    pub subtitle: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub button_text: String,

    #[serde(default)]
    #[validate(
        length(max = 2000),
        regex(path = *LINK_REGEX, message = "buttonLink must be a site path or an http(s) URL")
    )]
    pub button_link: String,

    /// Builds `buttonLink` as the storefront link for this category when
    /// `buttonLink` is empty
    #[validate(length(max = 200))]
    pub link_category: Option<String>,

    /// Appended after the last slide when omitted
    pub display_order: Option<i32>,
}

/// Partial update; only the fields present are changed
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarouselImageDto {
    pub image: Option<String>,

    #[validate(length(max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 500))]
    pub subtitle: Option<String>,

    #[validate(length(max = 100))]
    pub button_text: Option<String>,

    #[validate(
        length(max = 2000),
        regex(path = *LINK_REGEX, message = "buttonLink must be a site path or an http(s) URL")
    )]
    pub button_link: Option<String>,

    pub display_order: Option<i32>,
}

impl From<UpdateCarouselImageDto> for CarouselImagePatch {
    fn from(dto: UpdateCarouselImageDto) -> Self {
        Self {
            image: dto.image,
            title: dto.title,
            subtitle: dto.subtitle,
            button_text: dto.button_text,
            button_link: dto.button_link,
            display_order: dto.display_order,
        }
    }
}
