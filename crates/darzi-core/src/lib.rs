//! # darzi-core: Pure Business Logic for Darzi Order Desk
//!
//! This crate is the **heart** of Darzi Order Desk, an order-intake tool
//! for a made-to-measure fabric and curtain shop. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Darzi Order Desk Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Order-Entry Front-End (web)                     │   │
//! │  │    Customer form ──► Item form ──► Order summary ──► Save      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON (ts-rs generated types)           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ darzi-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   units   │  │  pricing  │  │   order   │  │   │
//! │  │   │  Fabric   │  │ LengthUnit│  │ line-item │  │DraftOrder │  │   │
//! │  │   │ LineItem  │  │  to cm    │  │   cost    │  │  totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    darzi-db (Database Layer)                    │   │
//! │  │          SQLite queries, migrations, repositories               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Fabric, LineItem, Order, etc.)
//! - [`units`] - Length units and conversion to canonical centimeters
//! - [`pricing`] - Line-item cost computation (curtain vs generic yardage)
//! - [`order`] - In-memory draft order: append, remove, totals, submission checks
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Inputs**: Fabric prices and shop settings are passed into every
//!    computation - the engine never reads ambient/global state
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use darzi_core::pricing::compute_line_item;
//! use darzi_core::types::{Fabric, ItemType, LineItemRequest, ShopSettings};
//! use darzi_core::units::LengthUnit;
//!
//! let fabric = Fabric {
//!     id: "f-1".to_string(),
//!     name: "Velvet".to_string(),
//!     design_code: "VLV-101".to_string(),
//!     price_per_meter: 10.0,
//! };
//! let settings = ShopSettings { stitching_price: 5.0, extra_hem_cm: 10.0 };
//! let request = LineItemRequest {
//!     fabric_id: "f-1".to_string(),
//!     item_type: ItemType::Curtain,
//!     length: 100.0,
//!     unit: LengthUnit::Centimeter,
//!     quantity: 2,
//! };
//!
//! // Two curtain pieces, 100 cm each + 10 cm hem, at 10.00/m + 5.00 stitching:
//! let item = compute_line_item(&request, &fabric, &settings).unwrap();
//! assert_eq!(item.fabric_used_m, 2.2);
//! assert_eq!(item.cost, 32.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod order;
pub mod pricing;
pub mod types;
pub mod units;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use darzi_core::Fabric` instead of
// `use darzi_core::types::Fabric`

pub use error::{CoreError, CoreResult, ValidationError};
pub use order::DraftOrder;
pub use types::*;
pub use units::LengthUnit;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed on a single order
///
/// ## Business Reason
/// Prevents runaway orders and keeps the printable documents to a
/// reasonable size. Can be made configurable per-shop in future versions.
pub const MAX_ORDER_ITEMS: usize = 100;

/// Maximum quantity (pieces) for a single line item
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Configurable per-shop in future versions.
pub const MAX_ITEM_QUANTITY: i64 = 999;
