//! # Catalog Error Types
//!
//! Errors surfaced while building or querying the catalog. Lookup by id
//! has both shapes: `get` returns `Option` for views that render an
//! empty state, `require` returns [`CatalogError::ProductNotFound`] for
//! callers that treat a missing id as a failure.

use shophub_core::ValidationError;
use thiserror::Error;

// =============================================================================
// Catalog Error
// =============================================================================

/// Catalog construction and lookup errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with the requested id exists.
    #[error("Product not found: {id}")]
    ProductNotFound { id: u32 },

    /// Two records share an id. Ids key the whole storefront, so the
    /// catalog refuses to build.
    #[error("Duplicate product id: {id}")]
    DuplicateProduct { id: u32 },

    /// A record failed field validation.
    #[error("Invalid product {id}: {source}")]
    InvalidProduct {
        id: u32,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================
