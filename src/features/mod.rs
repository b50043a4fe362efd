pub mod auth;
pub mod carousel;
pub mod categories;
pub mod footer;
pub mod products;
pub mod search;
pub mod storefront;
