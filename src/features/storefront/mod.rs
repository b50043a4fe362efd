//! Public home page aggregate driven by `?category=` and `?section=`.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::{category_link, StorefrontService};
