use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::carousel::dtos::CarouselImageResponseDto;
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::footer::dtos::FooterResponseDto;
use crate::features::products::dtos::ProductResponseDto;

/// The storefront's only public URL parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StorefrontQueryParams {
    /// Show only this category's products
    pub category: Option<String>,
    /// Section id the page should scroll to
    pub section: Option<String>,
}

/// Everything the home page renders in one response.
///
/// With an active category only `categoryProducts` and `footer` are filled;
/// otherwise the hero, category grid and highlight sections are.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontDto {
    pub active_category: Option<String>,
    pub section: Option<String>,
    pub carousel: Vec<CarouselImageResponseDto>,
    pub categories: Vec<CategoryResponseDto>,
    pub featured: Vec<ProductResponseDto>,
    pub new_arrivals: Vec<ProductResponseDto>,
    pub category_products: Vec<ProductResponseDto>,
    pub footer: Option<FooterResponseDto>,
}
