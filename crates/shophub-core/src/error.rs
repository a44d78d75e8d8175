//! # Error Types
//!
//! Validation error types for shophub-core.
//!
//! The cart itself has no failure modes: all four operations are total,
//! and unknown product ids are no-ops. Errors only arise when product
//! records entering the system are malformed, which is caught up front by
//! the [`crate::validation`] module.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Product record validation errors.
///
/// These occur when a product record doesn't meet requirements. Used for
/// early validation before a record reaches the catalog or the cart.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Unit price below zero.
    #[error("price must be non-negative, got {cents} cents")]
    NegativePrice { cents: i64 },

    /// Rating outside the five-star scale.
    #[error("rating must be between 0 and 5, got {rating}")]
    RatingOutOfRange { rating: f32 },
}

// =============================================================================
// Unit Tests
// =============================================================================
