use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Row shape of the `categories` collection
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.image.is_none()
    }

    pub fn apply_to(&self, category: &mut Category) {
        if let Some(ref v) = self.name {
            category.name = v.clone();
        }
        if let Some(ref v) = self.description {
            category.description = v.clone();
        }
        if let Some(ref v) = self.image {
            category.image = v.clone();
        }
    }
}

/// Result of a category update; a name change carries its product rewrite
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryUpdate {
    pub category: Category,
    pub previous_name: String,
    pub products_moved: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryRemoval {
    Deleted,
    Missing,
    /// Still referenced by this many products; nothing was written
    InUse(i64),
}
