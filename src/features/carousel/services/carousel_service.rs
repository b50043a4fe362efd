use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::carousel::dtos::{
    CarouselImageResponseDto, CreateCarouselImageDto, UpdateCarouselImageDto,
};
use crate::features::carousel::models::{CarouselImage, CarouselImagePatch, NewCarouselImage};
use crate::features::storefront::category_link;
use crate::modules::store::CarouselStore;
use crate::shared::validation::{is_blank, reject_blank, require_present};

/// Direction of a one-step reorder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Service for the storefront hero carousel
///
/// Slides render by `display_order`. Moving a slide swaps its order value
/// with the neighbouring slide; values are never renumbered, so gaps are
/// expected.
pub struct CarouselService {
    store: Arc<dyn CarouselStore>,
}

impl CarouselService {
    pub fn new(store: Arc<dyn CarouselStore>) -> Self {
        Self { store }
    }

    /// All slides in render order. Empty on store failure.
    pub async fn list(&self) -> Vec<CarouselImageResponseDto> {
        match self.store.select_carousel_images().await {
            Ok(slides) => slides.into_iter().map(Into::into).collect(),
            Err(e) => {
                tracing::error!("Failed to list carousel images: {:?}", e);
                Vec::new()
            }
        }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Option<CarouselImageResponseDto> {
        match self.store.select_carousel_image(id).await {
            Ok(slide) => slide.map(Into::into),
            Err(e) => {
                tracing::error!("Failed to get carousel image {}: {:?}", id, e);
                None
            }
        }
    }

    pub async fn create(&self, dto: CreateCarouselImageDto) -> Result<CarouselImageResponseDto> {
        dto.validate().map_err(AppError::from_validation)?;
        require_present("image", &dto.image)?;

        let display_order = match dto.display_order {
            Some(order) => order,
            None => self.next_display_order().await?,
        };

        let button_link = match dto.link_category {
            Some(ref category) if is_blank(&dto.button_link) && !is_blank(category) => {
                category_link(category.trim())
            }
            _ => dto.button_link,
        };

        let slide = self
            .store
            .insert_carousel_image(NewCarouselImage {
                image: dto.image,
                title: dto.title,
                subtitle: dto.subtitle,
                button_text: dto.button_text,
                button_link,
                display_order,
            })
            .await
            .map_err(|e| {
                tracing::error!("Failed to create carousel image: {:?}", e);
                AppError::Store(e)
            })?;

        tracing::info!(
            "Carousel image created: {} at order {}",
            slide.id,
            slide.display_order
        );
        Ok(slide.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateCarouselImageDto,
    ) -> Result<CarouselImageResponseDto> {
        dto.validate().map_err(AppError::from_validation)?;
        reject_blank("image", dto.image.as_deref())?;

        let patch = CarouselImagePatch::from(dto);
        if patch.is_empty() {
            return self
                .store
                .select_carousel_image(id)
                .await?
                .map(Into::into)
                .ok_or_else(|| {
                    AppError::NotFound(format!("Carousel image with id {} not found", id))
                });
        }

        let slide = self
            .store
            .update_carousel_image(id, patch)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update carousel image {}: {:?}", id, e);
                AppError::Store(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Carousel image with id {} not found", id)))?;

        tracing::info!("Carousel image updated: {}", slide.id);
        Ok(slide.into())
    }

    /// Delete a slide. `Ok(false)` when it was already gone.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let deleted = self.store.delete_carousel_image(id).await.map_err(|e| {
            tracing::error!("Failed to delete carousel image {}: {:?}", id, e);
            AppError::Store(e)
        })?;

        if deleted {
            tracing::info!("Carousel image deleted: {}", id);
        }
        Ok(deleted)
    }

    pub async fn move_up(&self, id: Uuid) -> Result<Vec<CarouselImageResponseDto>> {
        self.move_slide(id, MoveDirection::Up).await
    }

    pub async fn move_down(&self, id: Uuid) -> Result<Vec<CarouselImageResponseDto>> {
        self.move_slide(id, MoveDirection::Down).await
    }

    /// Swap the slide with its neighbour and return the new render order.
    /// The first slide moving up and the last moving down are no-ops.
    pub async fn move_slide(
        &self,
        id: Uuid,
        direction: MoveDirection,
    ) -> Result<Vec<CarouselImageResponseDto>> {
        let slides = self.store.select_carousel_images().await.map_err(|e| {
            tracing::error!("Failed to load carousel for reorder: {:?}", e);
            AppError::Store(e)
        })?;

        let Some(neighbour) = neighbour_of(&slides, id, direction)? else {
            tracing::debug!("Carousel image {} already at boundary ({:?})", id, direction);
            return Ok(slides.into_iter().map(Into::into).collect());
        };

        let swapped = self
            .store
            .swap_display_order(id, neighbour)
            .await
            .map_err(|e| {
                tracing::error!("Failed to swap carousel images {} and {}: {:?}", id, neighbour, e);
                AppError::Store(e)
            })?;
        if !swapped {
            return Err(AppError::NotFound(format!(
                "Carousel image with id {} not found",
                id
            )));
        }

        tracing::info!("Carousel image {} moved {:?}", id, direction);
        Ok(self.list().await)
    }

    async fn next_display_order(&self) -> Result<i32> {
        let max = self.store.max_display_order().await.map_err(|e| {
            tracing::error!("Failed to read carousel order: {:?}", e);
            AppError::Store(e)
        })?;
        Ok(max.map_or(0, |m| m.saturating_add(1)))
    }
}

/// Id of the slide adjacent to `id` in render order, `None` at the boundary
fn neighbour_of(
    slides: &[CarouselImage],
    id: Uuid,
    direction: MoveDirection,
) -> Result<Option<Uuid>> {
    let index = slides
        .iter()
        .position(|s| s.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Carousel image with id {} not found", id)))?;

    let neighbour = match direction {
        MoveDirection::Up => index.checked_sub(1),
        MoveDirection::Down => Some(index + 1).filter(|i| *i < slides.len()),
    };
    Ok(neighbour.map(|i| slides[i].id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::MemoryStore;

    fn service() -> (Arc<MemoryStore>, CarouselService) {
        let store = Arc::new(MemoryStore::new());
        let service = CarouselService::new(store.clone());
        (store, service)
    }

    fn slide(title: &str) -> CreateCarouselImageDto {
        CreateCarouselImageDto {
            image: format!("https://cdn.example.com/{}.jpg", title.to_lowercase()),
            title: title.to_string(),
            subtitle: "Premium interior decoration".to_string(),
            button_text: "Shop now".to_string(),
            ..Default::default()
        }
    }

    async fn three_slides(service: &CarouselService) -> Vec<Uuid> {
        let mut ids = Vec::new();
        for title in ["Panels", "Cornices", "Troughs"] {
            ids.push(service.create(slide(title)).await.unwrap().id);
        }
        ids
    }

    fn orders(slides: &[CarouselImageResponseDto]) -> Vec<i32> {
        let mut orders: Vec<i32> = slides.iter().map(|s| s.display_order).collect();
        orders.sort();
        orders
    }

    #[tokio::test]
    async fn test_create_without_image_never_writes() {
        let (store, service) = service();

        let result = service.create(CreateCarouselImageDto::default()).await;

        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("image")));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_create_appends_after_last_slide() {
        let (_, service) = service();
        let mut first = slide("Panels");
        first.display_order = Some(10);
        service.create(first).await.unwrap();

        let second = service.create(slide("Cornices")).await.unwrap();
        assert_eq!(second.display_order, 11);
    }

    #[tokio::test]
    async fn test_create_first_slide_starts_at_zero() {
        let (_, service) = service();
        let created = service.create(slide("Panels")).await.unwrap();
        assert_eq!(created.display_order, 0);
    }

    #[tokio::test]
    async fn test_create_builds_category_link() {
        let (_, service) = service();
        let mut dto = slide("Panels");
        dto.link_category = Some("Wall Panels".to_string());

        let created = service.create(dto).await.unwrap();
        assert_eq!(created.button_link, "/?category=Wall%20Panels");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_link() {
        let (store, service) = service();
        let mut dto = slide("Panels");
        dto.button_link = "javascript:alert(1)".to_string();

        let result = service.create(dto).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_image() {
        let (store, service) = service();
        let created = service.create(slide("Panels")).await.unwrap();
        let writes = store.write_count();

        let result = service
            .update(
                created.id,
                UpdateCarouselImageDto {
                    image: Some(String::new()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.write_count(), writes);
    }

    #[tokio::test]
    async fn test_update_without_fields_never_writes() {
        let (store, service) = service();
        let created = service.create(slide("Panels")).await.unwrap();
        let writes = store.write_count();

        let unchanged = service
            .update(created.id, UpdateCarouselImageDto::default())
            .await
            .unwrap();

        assert_eq!(unchanged.updated_at, created.updated_at);
        assert_eq!(store.write_count(), writes);

        let missing = service
            .update(Uuid::new_v4(), UpdateCarouselImageDto::default())
            .await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_move_up_first_slide_is_noop() {
        let (store, service) = service();
        let ids = three_slides(&service).await;
        let before = service.list().await;
        let writes = store.write_count();

        let after = service.move_up(ids[0]).await.unwrap();

        assert_eq!(after, before);
        assert_eq!(store.write_count(), writes);
    }

    #[tokio::test]
    async fn test_move_down_last_slide_is_noop() {
        let (store, service) = service();
        let ids = three_slides(&service).await;
        let before = service.list().await;
        let writes = store.write_count();

        let after = service.move_down(ids[2]).await.unwrap();

        assert_eq!(after, before);
        assert_eq!(store.write_count(), writes);
    }

    #[tokio::test]
    async fn test_move_up_swaps_with_predecessor() {
        let (_, service) = service();
        let ids = three_slides(&service).await;
        let before = service.list().await;
        let old_order = before[1].display_order;
        let predecessor_old_order = before[0].display_order;

        let after = service.move_up(ids[1]).await.unwrap();

        let moved = after.iter().find(|s| s.id == ids[1]).unwrap();
        let predecessor = after.iter().find(|s| s.id == ids[0]).unwrap();
        assert!(moved.display_order < predecessor.display_order);
        assert_eq!(moved.display_order, predecessor_old_order);
        assert_eq!(predecessor.display_order, old_order);
        assert_eq!(orders(&after), orders(&before));
        assert_eq!(
            after.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![ids[1], ids[0], ids[2]]
        );
    }

    #[tokio::test]
    async fn test_move_down_preserves_order_values_with_gaps() {
        let (_, service) = service();
        let mut ids = Vec::new();
        for (title, order) in [("Panels", 3), ("Cornices", 7), ("Troughs", 20)] {
            let mut dto = slide(title);
            dto.display_order = Some(order);
            ids.push(service.create(dto).await.unwrap().id);
        }

        let after = service.move_down(ids[0]).await.unwrap();

        assert_eq!(orders(&after), vec![3, 7, 20]);
        assert_eq!(
            after.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![ids[1], ids[0], ids[2]]
        );
    }

    #[tokio::test]
    async fn test_move_missing_slide_is_not_found() {
        let (_, service) = service();
        three_slides(&service).await;

        let result = service.move_up(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_duplicate_display_order_is_conflict() {
        let (_, service) = service();
        let mut first = slide("Panels");
        first.display_order = Some(1);
        service.create(first).await.unwrap();

        let mut second = slide("Cornices");
        second.display_order = Some(1);
        let result = service.create(second).await;
        assert!(matches!(result, Err(AppError::Store(_))));
    }

    #[tokio::test]
    async fn test_list_soft_fails() {
        let (store, service) = service();
        three_slides(&service).await;
        store.set_unavailable(true);

        assert!(service.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (_, service) = service();
        let created = service.create(slide("Panels")).await.unwrap();

        assert!(service.delete(created.id).await.unwrap());
        assert!(!service.delete(created.id).await.unwrap());
    }
}
