//! # Domain Types
//!
//! Core domain types used throughout Darzi Order Desk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Fabric      │   │    LineItem     │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  fabric_id (FK) │   │  id (UUID)      │       │
//! │  │  name           │   │  fabric_name *  │   │  order_date     │       │
//! │  │  design_code    │   │  design_code *  │   │  customer_id    │       │
//! │  │  price_per_meter│   │  length_cm      │   │  total_cost     │       │
//! │  └─────────────────┘   │  cost           │   └─────────────────┘       │
//! │                        └─────────────────┘    * frozen snapshots       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ShopSettings   │   │    ItemType     │   │  TailoringItem  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  stitching_price│   │  Curtain        │   │  design_code    │       │
//! │  │  extra_hem_cm   │   │  Other          │   │  length_cm, qty │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A [`LineItem`] denormalizes `fabric_name` and `design_code` from the
//! catalog at the moment it is finalized. Historical orders must render
//! exactly as sold, no matter how the catalog is edited later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::units::LengthUnit;

// =============================================================================
// Item Type
// =============================================================================

/// How a line item is billed.
///
/// This is the one branch in the pricing engine: curtains carry a
/// per-piece stitching charge and a hem allowance; everything else is
/// billed purely by fabric yardage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Made-to-measure curtain: hem allowance + per-piece stitching.
    Curtain,
    /// Generic yardage: fabric cost only.
    Other,
}

impl Default for ItemType {
    fn default() -> Self {
        ItemType::Curtain
    }
}

// =============================================================================
// Fabric
// =============================================================================

/// A fabric in the shop catalog.
///
/// Immutable for the duration of a pricing computation; price edits happen
/// out-of-band through the settings screens and never touch already
/// finalized line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Fabric {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in the order form (e.g., "Velvet").
    pub name: String,

    /// Design code - the business identifier printed on the bolt
    /// (e.g., "VLV-101"). This is what the tailoring department reads.
    pub design_code: String,

    /// Price per linear meter. Non-negative.
    pub price_per_meter: f64,
}

// =============================================================================
// Shop Settings
// =============================================================================

/// Shop-wide pricing tunables.
///
/// Read-only input to the pricing engine; both values affect curtain
/// items only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct ShopSettings {
    /// Flat charge per curtain piece for stitching work.
    pub stitching_price: f64,

    /// Extra length in centimeters added per curtain piece for hems.
    pub extra_hem_cm: f64,
}

// =============================================================================
// Line Items
// =============================================================================

/// A draft line-item request, as entered in the order form.
///
/// Transient and caller-constructed; never persisted as-is. The pricing
/// engine validates it and turns it into a [`LineItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItemRequest {
    /// Catalog id of the selected fabric.
    pub fabric_id: String,

    /// Billing branch: curtain or generic yardage.
    pub item_type: ItemType,

    /// Raw measured length, in `unit`. Must be finite and positive.
    pub length: f64,

    /// Unit the length was measured in.
    pub unit: LengthUnit,

    /// Number of pieces. Must be a positive integer.
    pub quantity: i64,
}

/// A finalized, priced line item.
///
/// ## Snapshot Pattern
/// `fabric_name` and `design_code` are frozen copies taken at computation
/// time. Later catalog edits must NOT retroactively alter this record.
///
/// ## Invariants
/// - `length_cm`, `fabric_used_m`, and `cost` are non-negative and
///   rounded to 2 decimal places
/// - Immutable once created, except by removal from its order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct LineItem {
    /// Catalog id of the fabric this item was priced against.
    pub fabric_id: String,

    /// Fabric name at pricing time (frozen).
    pub fabric_name: String,

    /// Design code at pricing time (frozen).
    pub design_code: String,

    /// Billing branch used.
    pub item_type: ItemType,

    /// Measured length converted to centimeters, rounded to 2 dp.
    pub length_cm: f64,

    /// Number of pieces.
    pub quantity: i64,

    /// Fabric consumed in meters, rounded to 2 dp.
    pub fabric_used_m: f64,

    /// Computed cost, rounded to 2 dp.
    pub cost: f64,
}

// =============================================================================
// Customers
// =============================================================================

/// Customer contact fields as captured on the order form.
///
/// Only the name is required; walk-in customers often leave the rest
/// blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerDetails {
    /// Customer name. Required for submission.
    pub name: String,

    /// Contact phone number.
    pub phone: Option<String>,

    /// Delivery / fitting address.
    pub address: Option<String>,
}

/// A persisted customer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

// =============================================================================
// Orders (persisted shapes)
// =============================================================================

/// A persisted order header.
///
/// `total_cost` here is the display-rounded value written at submission
/// time; the precise figure is always recoverable as the sum of the
/// order's item costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// When the order was taken.
    #[ts(as = "String")]
    pub order_date: DateTime<Utc>,

    /// Customer this order belongs to.
    pub customer_id: String,

    /// Order total at submission time, rounded to 2 dp.
    pub total_cost: f64,
}

/// An order row joined with its customer name, for list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct OrderSummary {
    pub id: String,
    #[ts(as = "String")]
    pub order_date: DateTime<Utc>,
    pub customer_id: String,
    pub total_cost: f64,
    pub customer_name: String,
}

/// Everything needed to render one order: header, customer, items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FullOrderDetails {
    pub order: Order,
    pub customer: Customer,
    pub items: Vec<LineItem>,
}

/// The reduced projection handed to the tailoring department: one row per
/// line item, just what the cutting table needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct TailoringItem {
    pub design_code: String,
    pub length_cm: f64,
    pub quantity: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ItemType::Curtain).unwrap(),
            "\"curtain\""
        );
        assert_eq!(serde_json::to_string(&ItemType::Other).unwrap(), "\"other\"");
    }

    #[test]
    fn test_item_type_default() {
        assert_eq!(ItemType::default(), ItemType::Curtain);
    }

    #[test]
    fn test_customer_details_optional_fields() {
        let json = r#"{"name":"Ayesha Khan","phone":null,"address":null}"#;
        let details: CustomerDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.name, "Ayesha Khan");
        assert!(details.phone.is_none());
        assert!(details.address.is_none());
    }

    #[test]
    fn test_line_item_request_round_trip() {
        let request = LineItemRequest {
            fabric_id: "f-1".to_string(),
            item_type: ItemType::Other,
            length: 2.5,
            unit: crate::units::LengthUnit::Meter,
            quantity: 3,
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: LineItemRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
