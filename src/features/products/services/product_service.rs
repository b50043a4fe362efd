use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{
    CreateProductDto, ProductGalleryDto, ProductQueryParams, ProductResponseDto,
    UpdateProductDto, UpdateProductGalleryDto,
};
use crate::features::products::models::{NewProduct, ProductFilter, ProductPatch};
use crate::modules::store::{CategoryStore, ProductStore};
use crate::shared::validation::{is_blank, reject_blank, require_present};

/// Service for product operations
pub struct ProductService {
    products: Arc<dyn ProductStore>,
    categories: Arc<dyn CategoryStore>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductStore>, categories: Arc<dyn CategoryStore>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// List products matching the query filters. Empty on store failure.
    pub async fn list(&self, params: ProductQueryParams) -> Vec<ProductResponseDto> {
        self.list_filtered(&ProductFilter::from(params)).await
    }

    pub async fn list_featured(&self) -> Vec<ProductResponseDto> {
        self.list_filtered(&ProductFilter::featured()).await
    }

    pub async fn list_new_arrivals(&self) -> Vec<ProductResponseDto> {
        self.list_filtered(&ProductFilter::new_arrivals()).await
    }

    pub async fn list_filtered(&self, filter: &ProductFilter) -> Vec<ProductResponseDto> {
        match self.products.select_products(filter).await {
            Ok(products) => products.into_iter().map(Into::into).collect(),
            Err(e) => {
                tracing::error!("Failed to list products ({:?}): {:?}", filter, e);
                Vec::new()
            }
        }
    }

    /// Get product by id; absent when missing or on store failure
    pub async fn get_by_id(&self, id: Uuid) -> Option<ProductResponseDto> {
        match self.products.select_product(id).await {
            Ok(product) => product.map(Into::into),
            Err(e) => {
                tracing::error!("Failed to get product {}: {:?}", id, e);
                None
            }
        }
    }

    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductResponseDto> {
        dto.validate().map_err(AppError::from_validation)?;
        require_present("name", &dto.name)?;
        require_present("category", &dto.category)?;

        let mut product = NewProduct::from(dto);
        product.enforce_single_highlight();
        self.ensure_category_exists(&product.category).await?;

        let product = self.products.insert_product(product).await.map_err(|e| {
            tracing::error!("Failed to create product: {:?}", e);
            AppError::Store(e)
        })?;

        tracing::info!("Product created: {} ({})", product.name, product.id);
        Ok(product.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdateProductDto) -> Result<ProductResponseDto> {
        dto.validate().map_err(AppError::from_validation)?;
        reject_blank("name", dto.name.as_deref())?;
        reject_blank("category", dto.category.as_deref())?;

        let mut patch = ProductPatch::from(dto);
        patch.enforce_single_highlight();
        if patch.is_empty() {
            return self
                .products
                .select_product(id)
                .await?
                .map(Into::into)
                .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)));
        }
        if let Some(ref category) = patch.category {
            self.ensure_category_exists(category).await?;
        }

        let product = self
            .products
            .update_product(id, patch)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update product {}: {:?}", id, e);
                AppError::Store(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))?;

        tracing::info!("Product updated: {} ({})", product.name, product.id);
        Ok(product.into())
    }

    /// Delete a product permanently. `Ok(false)` when it was already gone.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let deleted = self.products.delete_product(id).await.map_err(|e| {
            tracing::error!("Failed to delete product {}: {:?}", id, e);
            AppError::Store(e)
        })?;

        if deleted {
            tracing::info!("Product deleted: {}", id);
        }
        Ok(deleted)
    }

    pub async fn get_gallery(&self, id: Uuid) -> Result<ProductGalleryDto> {
        self.require_product(id).await?;
        let gallery = self.products.select_gallery(id).await?;
        Ok(gallery.into())
    }

    pub async fn replace_gallery(
        &self,
        id: Uuid,
        dto: UpdateProductGalleryDto,
    ) -> Result<ProductGalleryDto> {
        dto.validate().map_err(AppError::from_validation)?;
        if dto.images.iter().any(|image| is_blank(image)) {
            return Err(AppError::Validation(
                "gallery images cannot be empty".to_string(),
            ));
        }

        self.require_product(id).await?;
        let gallery = self
            .products
            .replace_gallery(id, dto.images)
            .await
            .map_err(|e| {
                tracing::error!("Failed to replace gallery for product {}: {:?}", id, e);
                AppError::Store(e)
            })?;

        Ok(gallery.into())
    }

    async fn require_product(&self, id: Uuid) -> Result<()> {
        match self.products.select_product(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!(
                "Product with id {} not found",
                id
            ))),
        }
    }

    async fn ensure_category_exists(&self, name: &str) -> Result<()> {
        match self.categories.select_category_by_name(name).await? {
            Some(_) => Ok(()),
            None => {
                tracing::debug!("Rejected product with unknown category '{}'", name);
                Err(AppError::Validation(format!(
                    "category '{}' does not exist",
                    name
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::models::NewCategory;
    use crate::modules::store::MemoryStore;
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;

    async fn service_with_category(name: &str) -> (Arc<MemoryStore>, ProductService) {
        let store = Arc::new(MemoryStore::new());
        store
            .insert_category(NewCategory {
                name: name.to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let service = ProductService::new(store.clone(), store.clone());
        (store, service)
    }

    fn product(name: &str, category: &str) -> CreateProductDto {
        CreateProductDto {
            name: name.to_string(),
            description: Sentence(4..10).fake(),
            dimensions: "50cm x 50cm panels".to_string(),
            category: category.to_string(),
            use_case: "Feature Walls, Office Spaces".to_string(),
            image: "https://cdn.example.com/panel.jpg".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_missing_name_never_writes() {
        let (store, service) = service_with_category("Wall Panels").await;
        let writes = store.write_count();

        let result = service
            .create(CreateProductDto {
                category: "Wall Panels".to_string(),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("name")));
        assert_eq!(store.write_count(), writes);
    }

    #[tokio::test]
    async fn test_create_missing_category_never_writes() {
        let (store, service) = service_with_category("Wall Panels").await;
        let writes = store.write_count();

        let result = service
            .create(CreateProductDto {
                name: "Geometric 3D Wall Panel".to_string(),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("category")));
        assert_eq!(store.write_count(), writes);
    }

    #[tokio::test]
    async fn test_create_unknown_category_is_rejected() {
        let (store, service) = service_with_category("Wall Panels").await;
        let writes = store.write_count();

        let result = service.create(product("Crown Cornice", "Cornices")).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.write_count(), writes);
    }

    #[tokio::test]
    async fn test_create_with_both_flags_keeps_featured() {
        let (_, service) = service_with_category("Wall Panels").await;
        let mut dto = product("Geometric 3D Wall Panel", "Wall Panels");
        dto.is_featured = true;
        dto.is_new_arrival = true;

        let created = service.create(dto).await.unwrap();
        assert!(created.is_featured);
        assert!(!created.is_new_arrival);
    }

    #[tokio::test]
    async fn test_update_never_leaves_both_flags_set() {
        let (_, service) = service_with_category("Wall Panels").await;
        let mut dto = product("Geometric 3D Wall Panel", "Wall Panels");
        dto.is_featured = true;
        let created = service.create(dto).await.unwrap();

        let updated = service
            .update(
                created.id,
                UpdateProductDto {
                    is_new_arrival: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!updated.is_featured);
        assert!(updated.is_new_arrival);

        let updated = service
            .update(
                created.id,
                UpdateProductDto {
                    is_featured: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(updated.is_featured);
        assert!(!updated.is_new_arrival);
    }

    #[tokio::test]
    async fn test_update_only_touches_present_fields() {
        let (_, service) = service_with_category("Wall Panels").await;
        let created = service
            .create(product("Geometric 3D Wall Panel", "Wall Panels"))
            .await
            .unwrap();

        let updated = service
            .update(
                created.id,
                UpdateProductDto {
                    dimensions: Some("60cm x 60cm panels".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.dimensions, "60cm x 60cm panels");
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.description, created.description);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_required_fields() {
        let (store, service) = service_with_category("Wall Panels").await;
        let created = service
            .create(product("Geometric 3D Wall Panel", "Wall Panels"))
            .await
            .unwrap();
        let writes = store.write_count();

        for dto in [
            UpdateProductDto {
                name: Some(String::new()),
                ..Default::default()
            },
            UpdateProductDto {
                category: Some("   ".to_string()),
                ..Default::default()
            },
        ] {
            let result = service.update(created.id, dto).await;
            assert!(matches!(result, Err(AppError::Validation(_))));
        }
        assert_eq!(store.write_count(), writes);
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let (_, service) = service_with_category("Wall Panels").await;
        let result = service
            .update(Uuid::new_v4(), UpdateProductDto::default())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_filters() {
        let (_, service) = service_with_category("Wall Panels").await;
        let mut featured = product("Geometric 3D Wall Panel", "Wall Panels");
        featured.is_featured = true;
        let mut fresh = product("Wave Wall Panel", "Wall Panels");
        fresh.is_new_arrival = true;
        let featured = service.create(featured).await.unwrap();
        let fresh = service.create(fresh).await.unwrap();

        let ids = |list: Vec<ProductResponseDto>| list.into_iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(service.list_featured().await), vec![featured.id]);
        assert_eq!(ids(service.list_new_arrivals().await), vec![fresh.id]);
        assert_eq!(
            ids(service
                .list(ProductQueryParams {
                    category: Some("Wall Panels".to_string()),
                    ..Default::default()
                })
                .await),
            vec![featured.id, fresh.id]
        );
    }

    #[tokio::test]
    async fn test_store_failure_soft_fails_reads_and_fails_writes() {
        let (store, service) = service_with_category("Wall Panels").await;
        let created = service
            .create(product("Geometric 3D Wall Panel", "Wall Panels"))
            .await
            .unwrap();
        store.set_unavailable(true);

        assert!(service.list(ProductQueryParams::default()).await.is_empty());
        assert!(service.get_by_id(created.id).await.is_none());
        assert!(matches!(
            service.delete(created.id).await,
            Err(AppError::Store(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_absent() {
        let (_, service) = service_with_category("Wall Panels").await;
        let created = service
            .create(product("Geometric 3D Wall Panel", "Wall Panels"))
            .await
            .unwrap();

        assert!(service.delete(created.id).await.unwrap());
        assert!(service.get_by_id(created.id).await.is_none());
        assert!(!service.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_gallery_replace_and_read() {
        let (_, service) = service_with_category("Wall Panels").await;
        let created = service
            .create(product("Geometric 3D Wall Panel", "Wall Panels"))
            .await
            .unwrap();

        let images = vec![
            "https://cdn.example.com/panel-1.jpg".to_string(),
            "https://cdn.example.com/panel-2.jpg".to_string(),
        ];
        service
            .replace_gallery(
                created.id,
                UpdateProductGalleryDto {
                    images: images.clone(),
                },
            )
            .await
            .unwrap();

        let gallery = service.get_gallery(created.id).await.unwrap();
        assert_eq!(gallery.images, images);
    }

    #[tokio::test]
    async fn test_gallery_rejects_blank_image() {
        let (_, service) = service_with_category("Wall Panels").await;
        let created = service
            .create(product("Geometric 3D Wall Panel", "Wall Panels"))
            .await
            .unwrap();

        let result = service
            .replace_gallery(
                created.id,
                UpdateProductGalleryDto {
                    images: vec![" ".to_string()],
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_gallery_for_missing_product_is_not_found() {
        let (_, service) = service_with_category("Wall Panels").await;
        assert!(matches!(
            service.get_gallery(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
