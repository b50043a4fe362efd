use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::cmp::Ordering;
use uuid::Uuid;

/// Row shape of the `carousel_images` collection
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CarouselImage {
    pub id: Uuid,
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewCarouselImage {
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarouselImagePatch {
    pub image: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub display_order: Option<i32>,
}

impl CarouselImage {
    /// Render order: display_order, then creation time, then id
    pub fn render_order(a: &CarouselImage, b: &CarouselImage) -> Ordering {
        a.display_order
            .cmp(&b.display_order)
            .then(a.created_at.cmp(&b.created_at))
            .then(a.id.cmp(&b.id))
    }
}

impl CarouselImagePatch {
    pub fn is_empty(&self) -> bool {
        self.image.is_none()
            && self.title.is_none()
            && self.subtitle.is_none()
            && self.button_text.is_none()
            && self.button_link.is_none()
            && self.display_order.is_none()
    }

    pub fn apply_to(&self, slide: &mut CarouselImage) {
        if let Some(ref v) = self.image {
            slide.image = v.clone();
        }
        if let Some(ref v) = self.title {
            slide.title = v.clone();
        }
        if let Some(ref v) = self.subtitle {
            slide.subtitle = v.clone();
        }
        if let Some(ref v) = self.button_text {
            slide.button_text = v.clone();
        }
        if let Some(ref v) = self.button_link {
            slide.button_link = v.clone();
        }
        if let Some(v) = self.display_order {
            slide.display_order = v;
        }
    }
}
