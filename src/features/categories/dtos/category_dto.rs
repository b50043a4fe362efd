use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::{Category, CategoryPatch, NewCategory};
use crate::shared::validation::trim_owned;

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            image: c.image,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Create request. Missing fields deserialize as empty so the service can
/// report which required field is absent.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,

    #[serde(default)]
    pub image: String,
}

impl From<CreateCategoryDto> for NewCategory {
    fn from(dto: CreateCategoryDto) -> Self {
        Self {
            name: trim_owned(dto.name),
            description: dto.description,
            image: dto.image,
        }
    }
}

/// Partial update; only the fields present are changed
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    #[validate(length(max = 200))]
    pub name: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub image: Option<String>,
}

impl From<UpdateCategoryDto> for CategoryPatch {
    fn from(dto: UpdateCategoryDto) -> Self {
        Self {
            name: dto.name.map(trim_owned),
            description: dto.description,
            image: dto.image,
        }
    }
}
