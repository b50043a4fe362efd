use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::{CategoryPatch, CategoryRemoval, NewCategory};
use crate::modules::store::CategoryStore;
use crate::shared::validation::{reject_blank, require_present};

/// Service for category operations
///
/// Products refer to categories by name. Renaming a category rewrites the
/// name on every product that used it, and a category still in use cannot
/// be deleted. The store performs each of those as a single write.
pub struct CategoryService {
    categories: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryStore>) -> Self {
        Self { categories }
    }

    /// List all categories ordered by name. Empty on store failure.
    pub async fn list(&self) -> Vec<CategoryResponseDto> {
        match self.categories.select_categories().await {
            Ok(categories) => categories.into_iter().map(Into::into).collect(),
            Err(e) => {
                tracing::error!("Failed to list categories: {:?}", e);
                Vec::new()
            }
        }
    }

    /// Category names for product form dropdowns
    pub async fn list_names(&self) -> Vec<String> {
        self.list().await.into_iter().map(|c| c.name).collect()
    }

    /// Get category by id; absent when missing or on store failure
    pub async fn get_by_id(&self, id: Uuid) -> Option<CategoryResponseDto> {
        match self.categories.select_category(id).await {
            Ok(category) => category.map(Into::into),
            Err(e) => {
                tracing::error!("Failed to get category {}: {:?}", id, e);
                None
            }
        }
    }

    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        dto.validate().map_err(AppError::from_validation)?;
        require_present("name", &dto.name)?;

        let category = self
            .categories
            .insert_category(NewCategory::from(dto))
            .await
            .map_err(|e| {
                tracing::error!("Failed to create category: {:?}", e);
                AppError::Store(e)
            })?;

        tracing::info!("Category created: {} ({})", category.name, category.id);
        Ok(category.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        dto.validate().map_err(AppError::from_validation)?;
        reject_blank("name", dto.name.as_deref())?;

        let patch = CategoryPatch::from(dto);
        if patch.is_empty() {
            return self
                .categories
                .select_category(id)
                .await?
                .map(Into::into)
                .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)));
        }

        let update = self
            .categories
            .rename_category(id, patch)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update category {}: {:?}", id, e);
                AppError::Store(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))?;

        if update.category.name != update.previous_name {
            tracing::info!(
                "Category renamed '{}' -> '{}', {} products updated",
                update.previous_name,
                update.category.name,
                update.products_moved
            );
        }

        Ok(update.category.into())
    }

    /// Delete a category. `Ok(false)` when it was already gone.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let removal = self
            .categories
            .delete_category_if_unused(id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category {}: {:?}", id, e);
                AppError::Store(e)
            })?;

        match removal {
            CategoryRemoval::Deleted => {
                tracing::info!("Category deleted: {}", id);
                Ok(true)
            }
            CategoryRemoval::Missing => Ok(false),
            CategoryRemoval::InUse(count) => Err(AppError::Conflict(format!(
                "Category is used by {} product(s); move them first",
                count
            ))),
        }
    }
}
