use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::products::dtos::ProductResponseDto;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQueryParams {
    /// Free text matched against name, description and category
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultDto {
    /// The query as received, trimmed
    pub query: String,
    pub products: Vec<ProductResponseDto>,
}
