//! Storefront product search.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::{search_products, SearchService};
