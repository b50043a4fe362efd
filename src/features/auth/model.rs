use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A validated admin session, available to admin handlers as an extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdminSession {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}
