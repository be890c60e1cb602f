//! # Pricing Module
//!
//! Turns a draft line-item request into a finalized, priced line item.
//!
//! ## The Two Billing Branches
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Line-Item Cost Computation                          │
//! │                                                                         │
//! │  Request { fabric_id, item_type, length, unit, quantity }              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate fields ──► to_centimeters(length, unit)                      │
//! │       │                                                                 │
//! │       ├── CURTAIN ─────────────────────────────────────────────┐       │
//! │       │   per_piece_m = (length_cm + extra_hem_cm) / 100       │       │
//! │       │   fabric_used = quantity × per_piece_m                 │       │
//! │       │   cost = fabric_used × price/m                         │       │
//! │       │        + quantity × stitching_price                    │       │
//! │       │                                                        │       │
//! │       └── OTHER ───────────────────────────────────────────────┤       │
//! │           fabric_used = (length_cm × quantity) / 100           │       │
//! │           cost = fabric_used × price/m                         │       │
//! │                                                                ▼       │
//! │                               round length/used/cost to 2 dp,          │
//! │                               snapshot fabric name + design code       │
//! │                                                                         │
//! │  Stitching is a fixed per-piece charge, independent of fabric cost.    │
//! │  That per-piece charge plus the hem allowance is what makes a          │
//! │  curtain different from generic yardage.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Policy
//! All intermediate math runs unrounded; only the three output fields of
//! the finalized item (`length_cm`, `fabric_used_m`, `cost`) are rounded,
//! each independently, to 2 decimal places.

use crate::error::{CoreResult, ValidationError};
use crate::types::{Fabric, ItemType, LineItem, LineItemRequest, ShopSettings};
use crate::units::{round2, to_centimeters, CM_PER_METER};
use crate::validation;

// =============================================================================
// Line-Item Computation
// =============================================================================

/// Validates a draft request and computes its finalized line item.
///
/// Pure function of its inputs: the caller supplies the fabric record and
/// the current shop settings, and nothing here reads or writes any shared
/// state.
///
/// ## Preconditions
/// Checked before any arithmetic; each violation returns a typed error
/// naming the offending field:
/// - `fabric.id` must match `request.fabric_id`
/// - `fabric.price_per_meter` must be finite and non-negative
/// - `request.length` must be finite and positive
/// - `request.quantity` must be a positive integer (≤ 999)
/// - `settings` values must be finite and non-negative
///
/// ## Snapshot Semantics
/// The returned item carries frozen copies of the fabric name and design
/// code. Mutating the catalog afterwards must not change this record.
///
/// ## Example
/// ```rust
/// use darzi_core::pricing::compute_line_item;
/// use darzi_core::types::{Fabric, ItemType, LineItemRequest, ShopSettings};
/// use darzi_core::units::LengthUnit;
///
/// let fabric = Fabric {
///     id: "f-1".into(),
///     name: "Velvet".into(),
///     design_code: "VLV-101".into(),
///     price_per_meter: 10.0,
/// };
/// let settings = ShopSettings { stitching_price: 5.0, extra_hem_cm: 10.0 };
///
/// // 3 pieces of generic yardage, 2 meters each, at 10.00/m:
/// let request = LineItemRequest {
///     fabric_id: "f-1".into(),
///     item_type: ItemType::Other,
///     length: 2.0,
///     unit: LengthUnit::Meter,
///     quantity: 3,
/// };
/// let item = compute_line_item(&request, &fabric, &settings).unwrap();
/// assert_eq!(item.length_cm, 200.0);
/// assert_eq!(item.fabric_used_m, 6.0);
/// assert_eq!(item.cost, 60.0);
/// ```
pub fn compute_line_item(
    request: &LineItemRequest,
    fabric: &Fabric,
    settings: &ShopSettings,
) -> CoreResult<LineItem> {
    // The fabric record must be the one the request named. A stale or
    // wrong catalog lookup must never price an item.
    if fabric.id != request.fabric_id {
        return Err(ValidationError::FabricMismatch {
            requested: request.fabric_id.clone(),
            supplied: fabric.id.clone(),
        }
        .into());
    }

    validation::validate_price_per_meter(fabric.price_per_meter)?;
    validation::validate_length(request.length)?;
    validation::validate_quantity(request.quantity)?;
    validation::validate_settings(settings)?;

    let length_cm = to_centimeters(request.length, request.unit)?;
    let quantity = request.quantity as f64;

    let (fabric_used_m, cost) = match request.item_type {
        ItemType::Curtain => {
            // Each piece is cut with the hem allowance on top of the
            // measured drop, then billed per meter plus stitching.
            let per_piece_m = (length_cm + settings.extra_hem_cm) / CM_PER_METER;
            let fabric_used_m = quantity * per_piece_m;
            let cost =
                fabric_used_m * fabric.price_per_meter + quantity * settings.stitching_price;
            (fabric_used_m, cost)
        }
        ItemType::Other => {
            // Plain yardage: no hem, no stitching.
            let fabric_used_m = (length_cm * quantity) / CM_PER_METER;
            let cost = fabric_used_m * fabric.price_per_meter;
            (fabric_used_m, cost)
        }
    };

    Ok(LineItem {
        fabric_id: fabric.id.clone(),
        fabric_name: fabric.name.clone(),
        design_code: fabric.design_code.clone(),
        item_type: request.item_type,
        length_cm: round2(length_cm),
        quantity: request.quantity,
        fabric_used_m: round2(fabric_used_m),
        cost: round2(cost),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::LengthUnit;

    fn test_fabric(price_per_meter: f64) -> Fabric {
        Fabric {
            id: "fabric-1".to_string(),
            name: "Velvet".to_string(),
            design_code: "VLV-101".to_string(),
            price_per_meter,
        }
    }

    fn test_settings() -> ShopSettings {
        ShopSettings {
            stitching_price: 5.0,
            extra_hem_cm: 10.0,
        }
    }

    fn curtain_request(length: f64, unit: LengthUnit, quantity: i64) -> LineItemRequest {
        LineItemRequest {
            fabric_id: "fabric-1".to_string(),
            item_type: ItemType::Curtain,
            length,
            unit,
            quantity,
        }
    }

    fn other_request(length: f64, unit: LengthUnit, quantity: i64) -> LineItemRequest {
        LineItemRequest {
            item_type: ItemType::Other,
            ..curtain_request(length, unit, quantity)
        }
    }

    #[test]
    fn test_curtain_formula() {
        // 2 pieces, 100 cm each, 10 cm hem, 10.00/m fabric, 5.00 stitching:
        // fabric_used = 2 × (110/100) = 2.2 m
        // cost = 2.2 × 10.00 + 2 × 5.00 = 32.00
        let item = compute_line_item(
            &curtain_request(100.0, LengthUnit::Centimeter, 2),
            &test_fabric(10.0),
            &test_settings(),
        )
        .unwrap();

        assert_eq!(item.length_cm, 100.0);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.fabric_used_m, 2.2);
        assert_eq!(item.cost, 32.0);
    }

    #[test]
    fn test_other_formula_with_meter_input() {
        // 3 pieces of 2 meters (→ 200 cm): fabric_used = 200×3/100 = 6 m,
        // cost = 6 × 10.00 = 60.00. No hem, no stitching.
        let item = compute_line_item(
            &other_request(2.0, LengthUnit::Meter, 3),
            &test_fabric(10.0),
            &test_settings(),
        )
        .unwrap();

        assert_eq!(item.length_cm, 200.0);
        assert_eq!(item.fabric_used_m, 6.0);
        assert_eq!(item.cost, 60.0);
    }

    #[test]
    fn test_other_ignores_hem_and_stitching() {
        let plain = ShopSettings {
            stitching_price: 0.0,
            extra_hem_cm: 0.0,
        };
        let with_extras = ShopSettings {
            stitching_price: 50.0,
            extra_hem_cm: 25.0,
        };

        let a = compute_line_item(
            &other_request(150.0, LengthUnit::Centimeter, 2),
            &test_fabric(8.0),
            &plain,
        )
        .unwrap();
        let b = compute_line_item(
            &other_request(150.0, LengthUnit::Centimeter, 2),
            &test_fabric(8.0),
            &with_extras,
        )
        .unwrap();

        assert_eq!(a.cost, b.cost);
        assert_eq!(a.fabric_used_m, b.fabric_used_m);
    }

    #[test]
    fn test_curtain_with_inch_input() {
        // 98 inch = 248.92 cm; + 10 cm hem = 258.92 cm per piece.
        // fabric_used = 1 × 2.5892 m → 2.59 rounded
        // cost = 2.5892 × 10.00 + 1 × 5.00 = 30.892 → 30.89 rounded
        let item = compute_line_item(
            &curtain_request(98.0, LengthUnit::Inch, 1),
            &test_fabric(10.0),
            &test_settings(),
        )
        .unwrap();

        assert_eq!(item.length_cm, 248.92);
        assert_eq!(item.fabric_used_m, 2.59);
        assert_eq!(item.cost, 30.89);
    }

    #[test]
    fn test_rounding_happens_only_on_outputs() {
        // 1.3 inch = 3.302 cm. The per-piece math must use the unrounded
        // 3.302 even though the stored length is rounded to 3.3.
        let item = compute_line_item(
            &other_request(1.3, LengthUnit::Inch, 100),
            &test_fabric(100.0),
            &test_settings(),
        )
        .unwrap();

        assert_eq!(item.length_cm, 3.3);
        // 3.302 × 100 / 100 = 3.302 m → 3.3 rounded
        assert_eq!(item.fabric_used_m, 3.3);
        // cost = 3.302 × 100.00 = 330.20, not 330.00
        assert_eq!(item.cost, 330.2);
    }

    #[test]
    fn test_snapshot_fields_are_frozen() {
        let mut fabric = test_fabric(10.0);
        let item = compute_line_item(
            &curtain_request(100.0, LengthUnit::Centimeter, 2),
            &fabric,
            &test_settings(),
        )
        .unwrap();

        // Catalog edits after finalization must not reach the item.
        fabric.price_per_meter = 99.0;
        fabric.name = "Renamed".to_string();
        fabric.design_code = "XXX-000".to_string();

        assert_eq!(item.cost, 32.0);
        assert_eq!(item.fabric_name, "Velvet");
        assert_eq!(item.design_code, "VLV-101");
    }

    #[test]
    fn test_zero_price_fabric_is_allowed() {
        let item = compute_line_item(
            &curtain_request(100.0, LengthUnit::Centimeter, 2),
            &test_fabric(0.0),
            &test_settings(),
        )
        .unwrap();

        // Stitching still applies even when the fabric itself is free.
        assert_eq!(item.cost, 10.0);
    }

    #[test]
    fn test_rejects_bad_length() {
        let fabric = test_fabric(10.0);
        let settings = test_settings();

        for length in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = compute_line_item(
                &curtain_request(length, LengthUnit::Centimeter, 1),
                &fabric,
                &settings,
            );
            assert!(result.is_err(), "length {length} should be rejected");
        }
    }

    #[test]
    fn test_rejects_bad_quantity() {
        let fabric = test_fabric(10.0);
        let settings = test_settings();

        for quantity in [0, -1, 1000] {
            let result = compute_line_item(
                &curtain_request(100.0, LengthUnit::Centimeter, quantity),
                &fabric,
                &settings,
            );
            assert!(result.is_err(), "quantity {quantity} should be rejected");
        }
    }

    #[test]
    fn test_rejects_fabric_mismatch() {
        let other_fabric = Fabric {
            id: "fabric-2".to_string(),
            ..test_fabric(10.0)
        };

        let err = compute_line_item(
            &curtain_request(100.0, LengthUnit::Centimeter, 1),
            &other_fabric,
            &test_settings(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            crate::error::CoreError::Validation(ValidationError::FabricMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_fabric_price() {
        let result = compute_line_item(
            &curtain_request(100.0, LengthUnit::Centimeter, 1),
            &test_fabric(-1.0),
            &test_settings(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_outputs_are_non_negative_and_two_dp() {
        let item = compute_line_item(
            &curtain_request(123.456, LengthUnit::Centimeter, 3),
            &test_fabric(7.77),
            &test_settings(),
        )
        .unwrap();

        for value in [item.length_cm, item.fabric_used_m, item.cost] {
            assert!(value >= 0.0);
            assert_eq!(round2(value), value, "{value} is not rounded to 2 dp");
        }
    }
}
