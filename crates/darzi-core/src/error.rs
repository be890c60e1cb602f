//! # Error Types
//!
//! Domain-specific error types for darzi-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  darzi-core errors (this file)                                         │
//! │  ├── CoreError        - Pricing/order domain errors                    │
//! │  └── ValidationError  - Field-level input validation failures          │
//! │                                                                         │
//! │  darzi-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → (UI layer) → user guidance        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, index, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every variant is recoverable by the caller - nothing here is fatal
//!
//! ## Error Classes
//! `IndexOutOfRange` deserves a note: it means the caller removed an item
//! that does not exist, which is a caller bug rather than bad user input.
//! It is still returned as a value (no panic) so the UI layer can log it
//! and recover, but it should never be shown as a validation hint.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent bad numeric input, unmet submission
/// preconditions, or misuse of the draft-order API. They should be caught
/// and translated to user-friendly messages by the UI layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A raw numeric value was malformed or unusable.
    ///
    /// ## When This Occurs
    /// - Length is NaN, infinite, zero, or negative
    /// - Any measurement that cannot be converted to centimeters
    ///
    /// The caller should re-prompt for the named field.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// A named required field on a line-item request is missing/invalid.
    ///
    /// Wraps [`ValidationError`]; the field name inside is what the UI
    /// should surface next to the offending input.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Item removal referenced a position that does not exist.
    ///
    /// ## When This Occurs
    /// - `remove_item(index)` with `index >= len`
    ///
    /// This is a programming-error class, distinct from user-input errors.
    #[error("item index {index} out of range for order with {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// Submission blocked: the customer name is empty or all-whitespace.
    #[error("customer name is required")]
    MissingCustomerName,

    /// Submission blocked: the order has no line items.
    #[error("order has no items")]
    EmptyOrder,

    /// Order has reached the maximum allowed number of line items.
    #[error("order cannot have more than {max} items")]
    OrderTooLarge { max: usize },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a line-item request or a catalog/settings edit
/// doesn't meet requirements. Each variant names the offending field so
/// the caller can surface it to the user.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Numeric value is outside the allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// The supplied fabric does not match the requested fabric id.
    ///
    /// ## When This Occurs
    /// - Catalog lookup returned a different record than the request named
    /// - The request references a fabric that no longer exists
    #[error("fabric_id mismatch: requested '{requested}', supplied '{supplied}'")]
    FabricMismatch { requested: String, supplied: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
