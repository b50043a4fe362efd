//! Persistent Store adapters
//!
//! The catalog treats its store as a black box with table-like collections
//! (`products`, `categories`, `carousel_images`, `site_footer`). Each
//! collection is reached through its own trait so services depend only on
//! what they touch.
//!
//! Two adapters implement every trait:
//! - [`PgStore`] - PostgreSQL via sqlx
//! - [`MemoryStore`] - in-process maps, used for local runs and tests

mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::features::carousel::models::{CarouselImage, CarouselImagePatch, NewCarouselImage};
use crate::features::categories::models::{
    Category, CategoryPatch, CategoryRemoval, CategoryUpdate, NewCategory,
};
use crate::features::footer::models::FooterContent;
use crate::features::products::models::{
    NewProduct, Product, ProductFilter, ProductGallery, ProductPatch,
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Unique or check constraint rejected the write
    #[error("{0}")]
    Conflict(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Rows matching every equality filter, in insertion order
    async fn select_products(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>>;
    async fn select_product(&self, id: Uuid) -> StoreResult<Option<Product>>;
    /// Insert and update fail with `Conflict` when the named category does
    /// not exist at write time
    async fn insert_product(&self, product: NewProduct) -> StoreResult<Product>;
    async fn update_product(&self, id: Uuid, patch: ProductPatch) -> StoreResult<Option<Product>>;
    async fn delete_product(&self, id: Uuid) -> StoreResult<bool>;
    async fn select_gallery(&self, product_id: Uuid) -> StoreResult<ProductGallery>;
    async fn replace_gallery(
        &self,
        product_id: Uuid,
        images: Vec<String>,
    ) -> StoreResult<ProductGallery>;
}

#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories ordered by name
    async fn select_categories(&self) -> StoreResult<Vec<Category>>;
    async fn select_category(&self, id: Uuid) -> StoreResult<Option<Category>>;
    async fn select_category_by_name(&self, name: &str) -> StoreResult<Option<Category>>;
    async fn insert_category(&self, category: NewCategory) -> StoreResult<Category>;
    /// Apply a patch as one write. A name change also rewrites the category
    /// of every product that used the old name; either both land or neither.
    async fn rename_category(
        &self,
        id: Uuid,
        patch: CategoryPatch,
    ) -> StoreResult<Option<CategoryUpdate>>;
    /// Delete only while no product references the category, checked and
    /// removed as one write
    async fn delete_category_if_unused(&self, id: Uuid) -> StoreResult<CategoryRemoval>;
}

#[async_trait]
pub trait CarouselStore: Send + Sync {
    /// All slides in render order
    async fn select_carousel_images(&self) -> StoreResult<Vec<CarouselImage>>;
    async fn select_carousel_image(&self, id: Uuid) -> StoreResult<Option<CarouselImage>>;
    async fn max_display_order(&self) -> StoreResult<Option<i32>>;
    async fn insert_carousel_image(&self, slide: NewCarouselImage) -> StoreResult<CarouselImage>;
    async fn update_carousel_image(
        &self,
        id: Uuid,
        patch: CarouselImagePatch,
    ) -> StoreResult<Option<CarouselImage>>;
    async fn delete_carousel_image(&self, id: Uuid) -> StoreResult<bool>;
    /// Exchange the display_order values of two slides as one write.
    /// Returns false when either slide no longer exists.
    async fn swap_display_order(&self, first: Uuid, second: Uuid) -> StoreResult<bool>;
}

#[async_trait]
pub trait FooterStore: Send + Sync {
    async fn select_footer(&self) -> StoreResult<Option<FooterContent>>;
    async fn upsert_footer(&self, content: FooterContent) -> StoreResult<FooterContent>;
}

/// Handles to every collection, all backed by the same adapter
#[derive(Clone)]
pub struct CatalogStores {
    pub products: Arc<dyn ProductStore>,
    pub categories: Arc<dyn CategoryStore>,
    pub carousel: Arc<dyn CarouselStore>,
    pub footer: Arc<dyn FooterStore>,
}

impl CatalogStores {
    pub fn postgres(pool: PgPool) -> Self {
        Self::from_adapter(Arc::new(PgStore::new(pool)))
    }

    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Self::from_adapter(store)
    }

    fn from_adapter<S>(store: Arc<S>) -> Self
    where
        S: ProductStore + CategoryStore + CarouselStore + FooterStore + 'static,
    {
        Self {
            products: store.clone(),
            categories: store.clone(),
            carousel: store.clone(),
            footer: store,
        }
    }
}
