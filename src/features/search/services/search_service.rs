use std::sync::Arc;

use crate::features::products::dtos::{ProductQueryParams, ProductResponseDto};
use crate::features::products::ProductService;
use crate::features::search::dtos::SearchResultDto;

/// Products whose name, description or category contains `query`,
/// case-insensitively, in input order.
///
/// A blank query means no search has been made yet and yields nothing.
pub fn search_products(query: &str, products: &[ProductResponseDto]) -> Vec<ProductResponseDto> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Linear scan over the current catalog
pub struct SearchService {
    products: Arc<ProductService>,
}

impl SearchService {
    pub fn new(products: Arc<ProductService>) -> Self {
        Self { products }
    }

    pub async fn search(&self, query: &str) -> SearchResultDto {
        let query = query.trim();
        let products = if query.is_empty() {
            Vec::new()
        } else {
            let catalog = self.products.list(ProductQueryParams::default()).await;
            search_products(query, &catalog)
        };

        tracing::debug!("Search '{}' matched {} product(s)", query, products.len());
        SearchResultDto {
            query: query.to_string(),
            products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fake::faker::lorem::en::{Sentence, Word};
    use fake::Fake;
    use uuid::Uuid;

    fn product(name: &str, description: &str, category: &str) -> ProductResponseDto {
        let now = Utc::now();
        ProductResponseDto {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
            dimensions: String::new(),
            category: category.to_string(),
            use_case: String::new(),
            image: String::new(),
            is_featured: false,
            is_new_arrival: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn random_catalog(len: usize) -> Vec<ProductResponseDto> {
        (0..len)
            .map(|_| {
                let name: String = Word().fake();
                let description: String = Sentence(3..8).fake();
                let category: String = Word().fake();
                product(&name, &description, &category)
            })
            .collect()
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let catalog = random_catalog(25);
        assert!(search_products("", &catalog).is_empty());
        assert!(search_products("   ", &catalog).is_empty());
        assert!(search_products("\t\n", &catalog).is_empty());
    }

    #[test]
    fn test_empty_catalog_returns_nothing() {
        for _ in 0..10 {
            let query: String = Word().fake();
            assert!(search_products(&query, &[]).is_empty());
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let cornice = product("Royal Crown Cornice", "Ornate ceiling trim", "Cornices");
        let panel = product("Geometric 3D Wall Panel", "Textured panel", "Wall Panels");
        let catalog = vec![panel, cornice.clone()];

        assert_eq!(search_products("CORNICE", &catalog), vec![cornice]);
    }

    #[test]
    fn test_matches_description_and_category() {
        let catalog = vec![
            product("Wave Panel", "Flowing ripple texture", "Wall Panels"),
            product("Crown Cornice", "Ornate ceiling trim", "Cornices"),
            product("LED Trough", "Recessed ceiling light channel", "Light Troughs"),
        ];

        let by_description: Vec<_> = search_products("ceiling", &catalog)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(by_description, vec!["Crown Cornice", "LED Trough"]);

        let by_category: Vec<_> = search_products("wall panels", &catalog)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(by_category, vec!["Wave Panel"]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let catalog = vec![product("Royal Crown Cornice", "", "Cornices")];
        assert_eq!(search_products("  crown ", &catalog).len(), 1);
    }

    #[test]
    fn test_every_name_finds_its_product_in_order() {
        let catalog = random_catalog(40);
        for p in &catalog {
            let results = search_products(&p.name.to_uppercase(), &catalog);
            assert!(results.iter().any(|r| r.id == p.id));

            let positions: Vec<usize> = results
                .iter()
                .map(|r| catalog.iter().position(|c| c.id == r.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
