//! Storefront hero carousel and its admin ordering controls.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CarouselService;
