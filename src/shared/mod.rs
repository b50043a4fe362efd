//! Shared helpers used across features

pub mod test_helpers;
pub mod types;
pub mod validation;
