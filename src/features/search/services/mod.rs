mod search_service;

pub use search_service::{search_products, SearchService};
