//! # Validation Module
//!
//! Field-level validation rules for Darzi Order Desk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end (TypeScript)                                       │
//! │  ├── Basic format checks (empty, numeric)                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Finite/positive checks on measurements and quantities             │
//! │  └── Runs again inside compute_line_item - nothing unchecked can       │
//! │      reach a cost formula                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── CHECK constraints on prices                                       │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use darzi_core::validation::{validate_length, validate_quantity};
//!
//! validate_length(250.0).unwrap();
//! validate_quantity(2).unwrap();
//! assert!(validate_length(0.0).is_err());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::ShopSettings;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a raw measured length.
///
/// ## Rules
/// - Must be a finite number (no NaN, no infinities)
/// - Must be strictly positive
///
/// A zero or negative measurement is user error; NaN means the front-end
/// let a non-numeric string through. Both are rejected with the field
/// name so the form can highlight the input.
pub fn validate_length(length: f64) -> ValidationResult<()> {
    if !length.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "length".to_string(),
        });
    }

    if length <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "length".to_string(),
        });
    }

    Ok(())
}

/// Validates a piece quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price-per-meter value.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (zero is allowed - remnant giveaways exist)
pub fn validate_price_per_meter(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price_per_meter".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price_per_meter".to_string(),
        });
    }

    Ok(())
}

/// Validates shop settings before they are used in a computation or
/// written back from the settings screen.
///
/// ## Rules
/// - `stitching_price` must be finite and non-negative
/// - `extra_hem_cm` must be finite and non-negative
///
/// A negative hem allowance could drive a curtain's fabric consumption
/// (and cost) negative, so it is rejected at the same boundary as every
/// other numeric input.
pub fn validate_settings(settings: &ShopSettings) -> ValidationResult<()> {
    if !settings.stitching_price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "stitching_price".to_string(),
        });
    }
    if settings.stitching_price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stitching_price".to_string(),
        });
    }

    if !settings.extra_hem_cm.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "extra_hem_cm".to_string(),
        });
    }
    if settings.extra_hem_cm < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "extra_hem_cm".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name for order submission.
///
/// ## Rules
/// - Must not be empty or all-whitespace
///
/// ## Returns
/// The trimmed name, ready to persist.
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_length() {
        assert!(validate_length(0.5).is_ok());
        assert!(validate_length(250.0).is_ok());

        assert!(validate_length(0.0).is_err());
        assert!(validate_length(-10.0).is_err());
        assert!(validate_length(f64::NAN).is_err());
        assert!(validate_length(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_per_meter() {
        assert!(validate_price_per_meter(0.0).is_ok()); // free remnant
        assert!(validate_price_per_meter(10.5).is_ok());

        assert!(validate_price_per_meter(-0.01).is_err());
        assert!(validate_price_per_meter(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_settings() {
        let good = ShopSettings {
            stitching_price: 5.0,
            extra_hem_cm: 10.0,
        };
        assert!(validate_settings(&good).is_ok());

        let zeroed = ShopSettings {
            stitching_price: 0.0,
            extra_hem_cm: 0.0,
        };
        assert!(validate_settings(&zeroed).is_ok());

        let negative_hem = ShopSettings {
            stitching_price: 5.0,
            extra_hem_cm: -1.0,
        };
        assert!(validate_settings(&negative_hem).is_err());

        let nan_stitching = ShopSettings {
            stitching_price: f64::NAN,
            extra_hem_cm: 10.0,
        };
        assert!(validate_settings(&nan_stitching).is_err());
    }

    #[test]
    fn test_validate_customer_name() {
        assert_eq!(validate_customer_name("Ayesha Khan").unwrap(), "Ayesha Khan");
        assert_eq!(validate_customer_name("  Bilal  ").unwrap(), "Bilal");

        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
    }
}
