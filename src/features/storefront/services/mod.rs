mod links;
mod storefront_service;

pub use links::category_link;
pub use storefront_service::StorefrontService;
