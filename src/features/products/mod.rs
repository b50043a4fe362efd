//! Product catalog: storefront listing, detail and gallery reads, admin CRUD.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProductService;
