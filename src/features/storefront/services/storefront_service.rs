use std::sync::Arc;

use crate::features::carousel::CarouselService;
use crate::features::categories::CategoryService;
use crate::features::footer::FooterService;
use crate::features::products::models::ProductFilter;
use crate::features::products::ProductService;
use crate::features::storefront::dtos::{StorefrontDto, StorefrontQueryParams};

/// Assembles the home page from the catalog services. Every read soft-fails,
/// so a store outage renders empty sections rather than an error.
pub struct StorefrontService {
    products: Arc<ProductService>,
    categories: Arc<CategoryService>,
    carousel: Arc<CarouselService>,
    footer: Arc<FooterService>,
}

impl StorefrontService {
    pub fn new(
        products: Arc<ProductService>,
        categories: Arc<CategoryService>,
        carousel: Arc<CarouselService>,
        footer: Arc<FooterService>,
    ) -> Self {
        Self {
            products,
            categories,
            carousel,
            footer,
        }
    }

    pub async fn home(&self, params: StorefrontQueryParams) -> StorefrontDto {
        let active_category = params
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        let section = params
            .section
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let footer = Some(self.footer.get().await);

        if let Some(category) = active_category {
            let category_products = self
                .products
                .list_filtered(&ProductFilter::in_category(category.clone()))
                .await;
            return StorefrontDto {
                active_category: Some(category),
                section,
                category_products,
                footer,
                ..Default::default()
            };
        }

        let (carousel, categories, featured, new_arrivals) = tokio::join!(
            self.carousel.list(),
            self.categories.list(),
            self.products.list_featured(),
            self.products.list_new_arrivals(),
        );

        StorefrontDto {
            active_category: None,
            section,
            carousel,
            categories,
            featured,
            new_arrivals,
            category_products: Vec::new(),
            footer,
        }
    }
}
