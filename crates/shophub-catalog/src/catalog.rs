//! # Catalog
//!
//! The immutable product catalog and its query API.
//!
//! Construction validates every record and rejects duplicate ids; after
//! that the catalog only hands out shared references, so consumers can
//! hold a `&Catalog` for the whole session.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::info;

use shophub_core::validation::validate_product;
use shophub_core::Product;

use crate::data;
use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Catalog
// =============================================================================

/// Read-only collection of products, unique by id, in catalog order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from a product list.
    ///
    /// ## Errors
    /// - [`CatalogError::InvalidProduct`] if a record fails validation
    /// - [`CatalogError::DuplicateProduct`] if two records share an id
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();

        for product in &products {
            validate_product(product).map_err(|source| CatalogError::InvalidProduct {
                id: product.id,
                source,
            })?;

            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProduct { id: product.id });
            }
        }

        info!(count = products.len(), "catalog loaded");
        Ok(Catalog { products })
    }

    /// Builds the catalog from the built-in sample data.
    pub fn with_sample_data() -> CatalogResult<Self> {
        Self::new(data::sample_products())
    }

    /// All products in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a product by id, failing if it does not exist.
    pub fn require(&self, id: u32) -> CatalogResult<&Product> {
        self.get(id).ok_or(CatalogError::ProductNotFound { id })
    }

    /// Products highlighted on the home page.
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Products in the given category.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// The `limit` highest-rated products, rating descending. Ties keep
    /// catalog order.
    pub fn top_rated(&self, limit: usize) -> Vec<&Product> {
        let mut ranked: Vec<&Product> = self.products.iter().collect();
        ranked.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(limit);
        ranked
    }

    /// Up to `limit` products from the same category as `id`, excluding
    /// the product itself. Empty when the id is unknown.
    pub fn related(&self, id: u32, limit: usize) -> Vec<&Product> {
        let Some(subject) = self.get(id) else {
            return Vec::new();
        };

        self.products
            .iter()
            .filter(|p| p.category == subject.category && p.id != id)
            .take(limit)
            .collect()
    }

    /// Distinct category labels in first-seen catalog order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(|p| seen.insert(p.category.as_str()))
            .map(|p| p.category.as_str())
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: u32, category: &str, rating: f32) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: String::new(),
            price_cents: 1_000,
            image: String::new(),
            category: category.to_string(),
            rating,
            featured: false,
            stock: 5,
        }
    }

    fn sample() -> Catalog {
        Catalog::with_sample_data().unwrap()
    }

    #[test]
    fn test_sample_catalog_loads() {
        let catalog = sample();
        assert_eq!(catalog.len(), 14);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_get_and_require() {
        let catalog = sample();

        assert_eq!(catalog.get(5).unwrap().name, "Professional Camera");
        assert!(catalog.get(99).is_none());

        assert!(catalog.require(5).is_ok());
        assert!(matches!(
            catalog.require(99),
            Err(CatalogError::ProductNotFound { id: 99 })
        ));
    }

    #[test]
    fn test_featured_products() {
        let catalog = sample();
        let featured = catalog.featured();

        assert_eq!(featured.len(), 6);
        assert!(featured.iter().all(|p| p.featured));
    }

    #[test]
    fn test_by_category() {
        let catalog = sample();
        let electronics = catalog.by_category("Electronics");

        assert_eq!(electronics.len(), 6);
        assert!(electronics.iter().all(|p| p.category == "Electronics"));

        assert!(catalog.by_category("Unknown").is_empty());
    }

    #[test]
    fn test_top_rated_sorted_descending() {
        let catalog = sample();
        let top = catalog.top_rated(3);

        assert_eq!(top.len(), 3);
        assert!(top.windows(2).all(|w| w[0].rating >= w[1].rating));
        assert_eq!(top[0].rating, 4.9);
    }

    #[test]
    fn test_related_excludes_subject() {
        let catalog = sample();
        let related = catalog.related(1, 4);

        assert_eq!(related.len(), 4);
        assert!(related.iter().all(|p| p.category == "Electronics"));
        assert!(related.iter().all(|p| p.id != 1));

        assert!(catalog.related(99, 4).is_empty());
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let catalog = sample();
        assert_eq!(
            catalog.categories(),
            vec![
                "Electronics",
                "Fashion",
                "Home & Garden",
                "Sports",
                "Beauty",
                "Food & Beverage"
            ]
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            test_product(1, "Electronics", 4.0),
            test_product(1, "Fashion", 3.5),
        ]);

        assert!(matches!(
            result,
            Err(CatalogError::DuplicateProduct { id: 1 })
        ));
    }

    #[test]
    fn test_invalid_record_rejected() {
        let mut bad = test_product(2, "Electronics", 4.0);
        bad.price_cents = -500;

        let result = Catalog::new(vec![test_product(1, "Electronics", 4.0), bad]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidProduct { id: 2, .. })
        ));
    }
}
