use uuid::Uuid;

/// Ordered extra images shown on a product detail page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductGallery {
    pub product_id: Uuid,
    pub images: Vec<String>,
}
