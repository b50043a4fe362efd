//! Core layer - configuration, error types, extractors and HTTP middleware
//! shared by every feature.

pub mod config;
pub mod database;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod openapi;
