//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the adapters for the Persistent Store backing the catalog.

pub mod store;
