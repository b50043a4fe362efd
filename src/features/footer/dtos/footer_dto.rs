use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::footer::models::FooterContent;
use crate::shared::validation::PHONE_REGEX;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FooterResponseDto {
    pub copyright: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub whatsapp: String,
}

impl From<FooterContent> for FooterResponseDto {
    fn from(f: FooterContent) -> Self {
        Self {
            copyright: f.copyright,
            address: f.address,
            phone: f.phone,
            email: f.email,
            whatsapp: f.whatsapp,
        }
    }
}

/// Replaces the whole footer; empty contact fields are hidden on the storefront
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFooterDto {
    #[serde(default)]
    #[validate(length(max = 300))]
    pub copyright: String,

    #[serde(default)]
    #[validate(length(max = 500))]
    pub address: String,

    #[serde(default)]
    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(max = 254))]
    pub email: String,

    #[serde(default)]
    #[validate(regex(path = *PHONE_REGEX, message = "Invalid WhatsApp number"))]
    pub whatsapp: String,
}

impl From<UpdateFooterDto> for FooterContent {
    fn from(dto: UpdateFooterDto) -> Self {
        Self {
            copyright: dto.copyright.trim().to_string(),
            address: dto.address,
            phone: dto.phone.trim().to_string(),
            email: dto.email.trim().to_string(),
            whatsapp: dto.whatsapp.trim().to_string(),
        }
    }
}
