//! Product categories.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/categories` | No | List categories |
//! | GET | `/api/categories/{id}` | No | Get category |
//! | GET | `/api/admin/categories/names` | Admin | Names for dropdowns |
//! | POST | `/api/admin/categories` | Admin | Create category |
//! | PUT | `/api/admin/categories/{id}` | Admin | Update (rename cascades) |
//! | DELETE | `/api/admin/categories/{id}` | Admin | Delete unused category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
