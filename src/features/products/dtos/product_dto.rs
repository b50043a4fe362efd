use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::products::models::{
    NewProduct, Product, ProductFilter, ProductGallery, ProductPatch,
};
use crate::shared::validation::trim_owned;

/// Response DTO for product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub dimensions: String,
    pub category: String,
    pub use_case: String,
    pub image: String,
    pub is_featured: bool,
    pub is_new_arrival: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            dimensions: p.dimensions,
            category: p.category,
            use_case: p.use_case,
            image: p.image,
            is_featured: p.is_featured,
            is_new_arrival: p.is_new_arrival,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Create request. Missing fields deserialize as empty so the service can
/// report which required field is absent.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 5000))]
    pub description: String,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub dimensions: String,

    /// Name of an existing category
    #[serde(default)]
    #[validate(length(max = 200))]
    pub category: String,

    #[serde(default)]
    #[validate(length(max = 500))]
    pub use_case: String,

    /// Image URL or data URL
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub is_new_arrival: bool,
}

impl From<CreateProductDto> for NewProduct {
    fn from(dto: CreateProductDto) -> Self {
        Self {
            name: trim_owned(dto.name),
            description: dto.description,
            dimensions: dto.dimensions,
            category: trim_owned(dto.category),
            use_case: dto.use_case,
            image: dto.image,
            is_featured: dto.is_featured,
            is_new_arrival: dto.is_new_arrival,
        }
    }
}

/// Partial update; only the fields present are changed
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    #[validate(length(max = 200))]
    pub name: Option<String>,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    #[validate(length(max = 200))]
    pub dimensions: Option<String>,

    #[validate(length(max = 200))]
    pub category: Option<String>,

    #[validate(length(max = 500))]
    pub use_case: Option<String>,

    pub image: Option<String>,

    pub is_featured: Option<bool>,

    pub is_new_arrival: Option<bool>,
}

impl From<UpdateProductDto> for ProductPatch {
    fn from(dto: UpdateProductDto) -> Self {
        Self {
            name: dto.name.map(trim_owned),
            description: dto.description,
            dimensions: dto.dimensions,
            category: dto.category.map(trim_owned),
            use_case: dto.use_case,
            image: dto.image,
            is_featured: dto.is_featured,
            is_new_arrival: dto.is_new_arrival,
        }
    }
}

/// Equality filters for listing products
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductQueryParams {
    /// Only products in this category
    pub category: Option<String>,

    /// Filter on the featured flag
    pub is_featured: Option<bool>,

    /// Filter on the new-arrival flag
    pub is_new_arrival: Option<bool>,
}

impl From<ProductQueryParams> for ProductFilter {
    fn from(params: ProductQueryParams) -> Self {
        Self {
            is_featured: params.is_featured,
            is_new_arrival: params.is_new_arrival,
            category: params
                .category
                .map(trim_owned)
                .filter(|c| !c.is_empty()),
        }
    }
}

/// Extra images shown on the product detail page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductGalleryDto {
    pub product_id: Uuid,
    pub images: Vec<String>,
}

impl From<ProductGallery> for ProductGalleryDto {
    fn from(g: ProductGallery) -> Self {
        Self {
            product_id: g.product_id,
            images: g.images,
        }
    }
}

/// Replace the whole gallery; order is preserved
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductGalleryDto {
    #[validate(length(max = 20))]
    pub images: Vec<String>,
}
