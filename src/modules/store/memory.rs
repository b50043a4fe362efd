//! In-process adapter with the same observable semantics as Postgres:
//! generated ids and timestamps, unique category names, unique slide
//! display orders, insertion-ordered selects.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    CarouselStore, CategoryStore, FooterStore, ProductStore, StoreError, StoreResult,
};
use crate::features::carousel::models::{CarouselImage, CarouselImagePatch, NewCarouselImage};
use crate::features::categories::models::{
    Category, CategoryPatch, CategoryRemoval, CategoryUpdate, NewCategory,
};
use crate::features::footer::models::FooterContent;
use crate::features::products::models::{
    NewProduct, Product, ProductFilter, ProductGallery, ProductPatch,
};

#[derive(Debug, Default)]
struct MemoryState {
    products: Vec<Product>,
    galleries: HashMap<Uuid, Vec<String>>,
    categories: Vec<Category>,
    carousel: Vec<CarouselImage>,
    footer: Option<FooterContent>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
    writes: AtomicUsize,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of write operations that reached the store
    #[cfg(test)]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail as if the store were unreachable
    #[cfg(test)]
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "memory store switched off".to_string(),
            ));
        }
        Ok(())
    }

    fn begin_write(&self) -> StoreResult<()> {
        self.check_available()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn category_name_taken(state: &MemoryState, name: &str, except: Option<Uuid>) -> bool {
    state
        .categories
        .iter()
        .any(|c| c.name == name && Some(c.id) != except)
}

fn missing_category() -> StoreError {
    StoreError::Conflict("Referenced record does not exist".to_string())
}

fn display_order_taken(state: &MemoryState, order: i32, except: Option<Uuid>) -> bool {
    state
        .carousel
        .iter()
        .any(|s| s.display_order == order && Some(s.id) != except)
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn select_products(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>> {
        self.check_available()?;
        let state = self.state.read().await;
        Ok(state
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn select_product(&self, id: Uuid) -> StoreResult<Option<Product>> {
        self.check_available()?;
        let state = self.state.read().await;
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_product(&self, product: NewProduct) -> StoreResult<Product> {
        self.begin_write()?;
        if product.is_featured && product.is_new_arrival {
            return Err(StoreError::Conflict(
                "The record violates a catalog rule".to_string(),
            ));
        }

        let mut state = self.state.write().await;
        if !state.categories.iter().any(|c| c.name == product.category) {
            return Err(missing_category());
        }

        let now = Utc::now();
        let row = Product {
            id: Uuid::new_v4(),
            name: product.name,
            description: product.description,
            dimensions: product.dimensions,
            category: product.category,
            use_case: product.use_case,
            image: product.image,
            is_featured: product.is_featured,
            is_new_arrival: product.is_new_arrival,
            created_at: now,
            updated_at: now,
        };
        state.products.push(row.clone());
        Ok(row)
    }

    async fn update_product(&self, id: Uuid, patch: ProductPatch) -> StoreResult<Option<Product>> {
        self.begin_write()?;
        let mut state = self.state.write().await;
        if let Some(ref category) = patch.category {
            if !state.categories.iter().any(|c| &c.name == category) {
                return Err(missing_category());
            }
        }
        let Some(product) = state.products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        let mut updated = product.clone();
        patch.apply_to(&mut updated);
        if updated.is_featured && updated.is_new_arrival {
            return Err(StoreError::Conflict(
                "The record violates a catalog rule".to_string(),
            ));
        }
        updated.updated_at = Utc::now();
        *product = updated.clone();
        Ok(Some(updated))
    }

    async fn delete_product(&self, id: Uuid) -> StoreResult<bool> {
        self.begin_write()?;
        let mut state = self.state.write().await;
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        state.galleries.remove(&id);
        Ok(state.products.len() < before)
    }

    async fn select_gallery(&self, product_id: Uuid) -> StoreResult<ProductGallery> {
        self.check_available()?;
        let state = self.state.read().await;
        Ok(ProductGallery {
            product_id,
            images: state.galleries.get(&product_id).cloned().unwrap_or_default(),
        })
    }

    async fn replace_gallery(
        &self,
        product_id: Uuid,
        images: Vec<String>,
    ) -> StoreResult<ProductGallery> {
        self.begin_write()?;
        let mut state = self.state.write().await;
        if !state.products.iter().any(|p| p.id == product_id) {
            return Err(StoreError::Conflict(
                "Referenced record does not exist".to_string(),
            ));
        }
        if images.is_empty() {
            state.galleries.remove(&product_id);
        } else {
            state.galleries.insert(product_id, images.clone());
        }
        Ok(ProductGallery { product_id, images })
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn select_categories(&self) -> StoreResult<Vec<Category>> {
        self.check_available()?;
        let state = self.state.read().await;
        let mut categories = state.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn select_category(&self, id: Uuid) -> StoreResult<Option<Category>> {
        self.check_available()?;
        let state = self.state.read().await;
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn select_category_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        self.check_available()?;
        let state = self.state.read().await;
        Ok(state.categories.iter().find(|c| c.name == name).cloned())
    }

    async fn insert_category(&self, category: NewCategory) -> StoreResult<Category> {
        self.begin_write()?;
        let mut state = self.state.write().await;
        if category_name_taken(&state, &category.name, None) {
            return Err(StoreError::Conflict(
                "A category with this name already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let row = Category {
            id: Uuid::new_v4(),
            name: category.name,
            description: category.description,
            image: category.image,
            created_at: now,
            updated_at: now,
        };
        state.categories.push(row.clone());
        Ok(row)
    }

    async fn rename_category(
        &self,
        id: Uuid,
        patch: CategoryPatch,
    ) -> StoreResult<Option<CategoryUpdate>> {
        self.begin_write()?;
        let mut state = self.state.write().await;
        if let Some(ref name) = patch.name {
            if category_name_taken(&state, name, Some(id)) {
                return Err(StoreError::Conflict(
                    "A category with this name already exists".to_string(),
                ));
            }
        }

        let now = Utc::now();
        let Some(category) = state.categories.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        let previous_name = category.name.clone();
        patch.apply_to(category);
        category.updated_at = now;
        let category = category.clone();

        let mut products_moved = 0;
        if category.name != previous_name {
            for product in state
                .products
                .iter_mut()
                .filter(|p| p.category == previous_name)
            {
                product.category = category.name.clone();
                product.updated_at = now;
                products_moved += 1;
            }
        }

        Ok(Some(CategoryUpdate {
            category,
            previous_name,
            products_moved,
        }))
    }

    async fn delete_category_if_unused(&self, id: Uuid) -> StoreResult<CategoryRemoval> {
        self.begin_write()?;
        let mut state = self.state.write().await;
        let Some(index) = state.categories.iter().position(|c| c.id == id) else {
            return Ok(CategoryRemoval::Missing);
        };

        let name = &state.categories[index].name;
        let in_use = state.products.iter().filter(|p| &p.category == name).count() as i64;
        if in_use > 0 {
            return Ok(CategoryRemoval::InUse(in_use));
        }

        state.categories.remove(index);
        Ok(CategoryRemoval::Deleted)
    }
}

#[async_trait]
impl CarouselStore for MemoryStore {
    async fn select_carousel_images(&self) -> StoreResult<Vec<CarouselImage>> {
        self.check_available()?;
        let state = self.state.read().await;
        let mut slides = state.carousel.clone();
        slides.sort_by(CarouselImage::render_order);
        Ok(slides)
    }

    async fn select_carousel_image(&self, id: Uuid) -> StoreResult<Option<CarouselImage>> {
        self.check_available()?;
        let state = self.state.read().await;
        Ok(state.carousel.iter().find(|s| s.id == id).cloned())
    }

    async fn max_display_order(&self) -> StoreResult<Option<i32>> {
        self.check_available()?;
        let state = self.state.read().await;
        Ok(state.carousel.iter().map(|s| s.display_order).max())
    }

    async fn insert_carousel_image(&self, slide: NewCarouselImage) -> StoreResult<CarouselImage> {
        self.begin_write()?;
        let mut state = self.state.write().await;
        if display_order_taken(&state, slide.display_order, None) {
            return Err(StoreError::Conflict(
                "Another slide already uses this display order".to_string(),
            ));
        }

        let now = Utc::now();
        let row = CarouselImage {
            id: Uuid::new_v4(),
            image: slide.image,
            title: slide.title,
            subtitle: slide.subtitle,
            button_text: slide.button_text,
            button_link: slide.button_link,
            display_order: slide.display_order,
            created_at: now,
            updated_at: now,
        };
        state.carousel.push(row.clone());
        Ok(row)
    }

    async fn update_carousel_image(
        &self,
        id: Uuid,
        patch: CarouselImagePatch,
    ) -> StoreResult<Option<CarouselImage>> {
        self.begin_write()?;
        let mut state = self.state.write().await;
        if let Some(order) = patch.display_order {
            if display_order_taken(&state, order, Some(id)) {
                return Err(StoreError::Conflict(
                    "Another slide already uses this display order".to_string(),
                ));
            }
        }

        let Some(slide) = state.carousel.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        patch.apply_to(slide);
        slide.updated_at = Utc::now();
        Ok(Some(slide.clone()))
    }

    async fn delete_carousel_image(&self, id: Uuid) -> StoreResult<bool> {
        self.begin_write()?;
        let mut state = self.state.write().await;
        let before = state.carousel.len();
        state.carousel.retain(|s| s.id != id);
        Ok(state.carousel.len() < before)
    }

    async fn swap_display_order(&self, first: Uuid, second: Uuid) -> StoreResult<bool> {
        self.begin_write()?;
        let mut state = self.state.write().await;
        let first_idx = state.carousel.iter().position(|s| s.id == first);
        let second_idx = state.carousel.iter().position(|s| s.id == second);
        let (Some(a), Some(b)) = (first_idx, second_idx) else {
            return Ok(false);
        };

        let now = Utc::now();
        let order_a = state.carousel[a].display_order;
        state.carousel[a].display_order = state.carousel[b].display_order;
        state.carousel[b].display_order = order_a;
        state.carousel[a].updated_at = now;
        state.carousel[b].updated_at = now;
        Ok(true)
    }
}

#[async_trait]
impl FooterStore for MemoryStore {
    async fn select_footer(&self) -> StoreResult<Option<FooterContent>> {
        self.check_available()?;
        let state = self.state.read().await;
        Ok(state.footer.clone())
    }

    async fn upsert_footer(&self, content: FooterContent) -> StoreResult<FooterContent> {
        self.begin_write()?;
        let mut state = self.state.write().await;
        state.footer = Some(content.clone());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(order: i32) -> NewCarouselImage {
        NewCarouselImage {
            image: format!("https://cdn.example.com/slide-{}.jpg", order),
            display_order: order,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_generates_id_and_counts_write() {
        let store = MemoryStore::new();
        let category = store
            .insert_category(NewCategory {
                name: "Wall Panels".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(!category.id.is_nil());
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn test_category_names_are_unique() {
        let store = MemoryStore::new();
        let new = || NewCategory {
            name: "Wall Panels".to_string(),
            ..Default::default()
        };
        store.insert_category(new()).await.unwrap();
        let result = store.insert_category(new()).await;
        assert!(matches!(result, Err(StoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_carousel_selects_in_render_order() {
        let store = MemoryStore::new();
        store.insert_carousel_image(slide(3)).await.unwrap();
        store.insert_carousel_image(slide(1)).await.unwrap();
        store.insert_carousel_image(slide(2)).await.unwrap();

        let orders: Vec<i32> = store
            .select_carousel_images()
            .await
            .unwrap()
            .iter()
            .map(|s| s.display_order)
            .collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_swap_display_order() {
        let store = MemoryStore::new();
        let a = store.insert_carousel_image(slide(1)).await.unwrap();
        let b = store.insert_carousel_image(slide(5)).await.unwrap();

        assert!(store.swap_display_order(a.id, b.id).await.unwrap());

        let a = store.select_carousel_image(a.id).await.unwrap().unwrap();
        let b = store.select_carousel_image(b.id).await.unwrap().unwrap();
        assert_eq!((a.display_order, b.display_order), (5, 1));
    }

    #[tokio::test]
    async fn test_swap_with_missing_slide_is_false() {
        let store = MemoryStore::new();
        let a = store.insert_carousel_image(slide(1)).await.unwrap();
        assert!(!store.swap_display_order(a.id, Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_reads_and_writes() {
        let store = MemoryStore::new();
        store.set_unavailable(true);

        assert!(matches!(
            store.select_categories().await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.upsert_footer(FooterContent::default()).await.is_err());
        assert_eq!(store.write_count(), 0);
    }

    async fn seed_category(store: &MemoryStore, name: &str) -> Category {
        store
            .insert_category(NewCategory {
                name: name.to_string(),
                ..Default::default()
            })
            .await
            .unwrap()
    }

    async fn seed_product(store: &MemoryStore, name: &str, category: &str) -> Product {
        store
            .insert_product(NewProduct {
                name: name.to_string(),
                category: category.to_string(),
                ..Default::default()
            })
            .await
            .unwrap()
    }

    fn in_category(name: &str) -> ProductFilter {
        ProductFilter {
            category: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_product_requires_category() {
        let store = MemoryStore::new();
        let result = store
            .insert_product(NewProduct {
                name: "Cornice A".to_string(),
                category: "Ceiling Cornices".to_string(),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(StoreError::Conflict(_))));
        assert!(store
            .select_products(&ProductFilter::default())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_rename_category_moves_products() {
        let store = MemoryStore::new();
        let category = seed_category(&store, "Ceiling Cornices").await;
        seed_product(&store, "Cornice A", "Ceiling Cornices").await;
        seed_product(&store, "Cornice B", "Ceiling Cornices").await;

        let update = store
            .rename_category(
                category.id,
                CategoryPatch {
                    name: Some("Cornices".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(update.previous_name, "Ceiling Cornices");
        assert_eq!(update.products_moved, 2);
        let moved = store.select_products(&in_category("Cornices")).await.unwrap();
        assert_eq!(moved.len(), 2);
    }

    #[tokio::test]
    async fn test_rename_to_taken_name_changes_nothing() {
        let store = MemoryStore::new();
        let panels = seed_category(&store, "Wall Panels").await;
        seed_category(&store, "Cornices").await;
        seed_product(&store, "Geometric Panel", "Wall Panels").await;

        let result = store
            .rename_category(
                panels.id,
                CategoryPatch {
                    name: Some("Cornices".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(StoreError::Conflict(_))));
        let panels = store.select_category(panels.id).await.unwrap().unwrap();
        assert_eq!(panels.name, "Wall Panels");
        let products = store.select_products(&in_category("Wall Panels")).await.unwrap();
        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_category_if_unused() {
        let store = MemoryStore::new();
        let panels = seed_category(&store, "Wall Panels").await;
        let cornices = seed_category(&store, "Cornices").await;
        seed_product(&store, "Geometric Panel", "Wall Panels").await;

        assert_eq!(
            store.delete_category_if_unused(panels.id).await.unwrap(),
            CategoryRemoval::InUse(1)
        );
        assert!(store.select_category(panels.id).await.unwrap().is_some());

        assert_eq!(
            store.delete_category_if_unused(cornices.id).await.unwrap(),
            CategoryRemoval::Deleted
        );
        assert_eq!(
            store.delete_category_if_unused(cornices.id).await.unwrap(),
            CategoryRemoval::Missing
        );
    }
}
