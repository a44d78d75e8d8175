//! # Validation Module
//!
//! Product record validation for the ShopHub storefront.
//!
//! Catalog data is hard-coded today, but it still passes through these
//! checks when the catalog is constructed, so a bad record is rejected at
//! startup rather than surfacing as a wrong price in a cart.
//!
//! ## Usage
//! ```rust
//! use shophub_core::validation::{validate_price_cents, validate_rating};
//!
//! validate_price_cents(29_900).unwrap();
//! validate_rating(4.8).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::Product;
use crate::MAX_RATING;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a category label.
///
/// ## Rules
/// - Must not be empty (every product belongs to a category)
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::NegativePrice { cents });
    }

    Ok(())
}

/// Validates a customer rating.
///
/// ## Rules
/// - Must be within the five-star scale, 0.0 through 5.0
pub fn validate_rating(rating: f32) -> ValidationResult<()> {
    if !(0.0..=MAX_RATING).contains(&rating) || rating.is_nan() {
        return Err(ValidationError::RatingOutOfRange { rating });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a complete product record.
///
/// Composes the field validators; the first failing check wins.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_category(&product.category)?;
    validate_price_cents(product.price_cents)?;
    validate_rating(product.rating)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
