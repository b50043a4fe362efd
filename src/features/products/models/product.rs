use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Row shape of the `products` collection
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub dimensions: String,
    /// Loose reference to `Category::name`
    pub category: String,
    pub use_case: String,
    pub image: String,
    pub is_featured: bool,
    pub is_new_arrival: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape; the store generates id and timestamps
#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub dimensions: String,
    pub category: String,
    pub use_case: String,
    pub image: String,
    pub is_featured: bool,
    pub is_new_arrival: bool,
}

/// Partial update; `None` leaves the column untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub dimensions: Option<String>,
    pub category: Option<String>,
    pub use_case: Option<String>,
    pub image: Option<String>,
    pub is_featured: Option<bool>,
    pub is_new_arrival: Option<bool>,
}

/// Equality filters supported by product selects
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub is_featured: Option<bool>,
    pub is_new_arrival: Option<bool>,
    pub category: Option<String>,
}

impl NewProduct {
    /// A product is never both featured and a new arrival; featured wins.
    pub fn enforce_single_highlight(&mut self) {
        if self.is_featured && self.is_new_arrival {
            self.is_new_arrival = false;
        }
    }
}

impl ProductPatch {
    /// Setting one highlight flag clears the other within the same update.
    /// When both are requested, featured wins.
    pub fn enforce_single_highlight(&mut self) {
        match (self.is_featured, self.is_new_arrival) {
            (Some(true), _) => self.is_new_arrival = Some(false),
            (_, Some(true)) => self.is_featured = Some(false),
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ProductPatch::default()
    }

    /// Apply to an in-memory row (used by the memory store)
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(ref v) = self.name {
            product.name = v.clone();
        }
        if let Some(ref v) = self.description {
            product.description = v.clone();
        }
        if let Some(ref v) = self.dimensions {
            product.dimensions = v.clone();
        }
        if let Some(ref v) = self.category {
            product.category = v.clone();
        }
        if let Some(ref v) = self.use_case {
            product.use_case = v.clone();
        }
        if let Some(ref v) = self.image {
            product.image = v.clone();
        }
        if let Some(v) = self.is_featured {
            product.is_featured = v;
        }
        if let Some(v) = self.is_new_arrival {
            product.is_new_arrival = v;
        }
    }
}

impl ProductFilter {
    pub fn featured() -> Self {
        Self {
            is_featured: Some(true),
            ..Default::default()
        }
    }

    pub fn new_arrivals() -> Self {
        Self {
            is_new_arrival: Some(true),
            ..Default::default()
        }
    }

    pub fn in_category(name: impl Into<String>) -> Self {
        Self {
            category: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.is_featured.is_none_or(|v| product.is_featured == v)
            && self.is_new_arrival.is_none_or(|v| product.is_new_arrival == v)
            && self
                .category
                .as_deref()
                .is_none_or(|c| product.category == c)
    }
}
