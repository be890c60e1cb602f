//! # Units Module
//!
//! Length units and conversion to the canonical unit (centimeters).
//!
//! ## Why a Canonical Unit?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE MIXED-UNIT PROBLEM                                                 │
//! │                                                                         │
//! │  Customers bring measurements however they took them:                  │
//! │    "250 cm"  "2.5 meter"  "98 inch"  "8 feet"                          │
//! │                                                                         │
//! │  Pricing is per LINEAR METER of fabric, and the hem allowance is       │
//! │  configured in centimeters. Mixing units inside the cost formula is    │
//! │  how you end up billing a customer for 98 meters of velvet.            │
//! │                                                                         │
//! │  OUR SOLUTION: Convert to centimeters ONCE, at the entry point.        │
//! │  Everything after `to_centimeters()` is centimeters or meters.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Policy
//! Conversion does NOT round. Rounding happens exactly once, on the three
//! output fields of a finalized line item (length, fabric used, cost).
//! Rounding mid-formula would compound error across the conversion and
//! the cost computation.
//!
//! ## Usage
//! ```rust
//! use darzi_core::units::{to_centimeters, LengthUnit};
//!
//! assert_eq!(to_centimeters(2.0, LengthUnit::Meter).unwrap(), 200.0);
//! assert_eq!(to_centimeters(1.0, LengthUnit::Inch).unwrap(), 2.54);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Conversion Factors
// =============================================================================

/// Centimeters per meter.
pub const CM_PER_METER: f64 = 100.0;

/// Centimeters per inch (exact, by international definition).
pub const CM_PER_INCH: f64 = 2.54;

/// Centimeters per foot (12 inches).
pub const CM_PER_FOOT: f64 = 30.48;

// =============================================================================
// Length Unit
// =============================================================================

/// A unit a raw customer measurement can arrive in.
///
/// The serialized names (`cm`, `meter`, `inch`, `feet`) match what the
/// order-entry front-end sends; the canonical storage unit is always
/// centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LengthUnit {
    /// Centimeters - the canonical unit, conversion is the identity.
    #[serde(rename = "cm")]
    Centimeter,
    /// Meters.
    #[serde(rename = "meter")]
    Meter,
    /// Inches.
    #[serde(rename = "inch")]
    Inch,
    /// Feet.
    #[serde(rename = "feet")]
    Foot,
}

impl LengthUnit {
    /// Returns the multiplier that converts this unit to centimeters.
    #[inline]
    pub const fn factor_to_cm(&self) -> f64 {
        match self {
            LengthUnit::Centimeter => 1.0,
            LengthUnit::Meter => CM_PER_METER,
            LengthUnit::Inch => CM_PER_INCH,
            LengthUnit::Foot => CM_PER_FOOT,
        }
    }
}

impl Default for LengthUnit {
    fn default() -> Self {
        LengthUnit::Centimeter
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "meter",
            LengthUnit::Inch => "inch",
            LengthUnit::Foot => "feet",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Conversion
// =============================================================================

/// Converts a raw measurement to centimeters.
///
/// ## Rules
/// - `value` must be a finite, strictly positive number
/// - No rounding is applied here (see module docs)
///
/// ## Errors
/// [`CoreError::InvalidInput`] naming the `length` field when the value is
/// NaN, infinite, zero, or negative. A bad measurement must never silently
/// become `0` and flow into a stored cost.
///
/// ## Example
/// ```rust
/// use darzi_core::units::{to_centimeters, LengthUnit};
///
/// assert_eq!(to_centimeters(1.0, LengthUnit::Meter).unwrap(), 100.0);
/// assert_eq!(to_centimeters(1.0, LengthUnit::Foot).unwrap(), 30.48);
/// assert!(to_centimeters(0.0, LengthUnit::Centimeter).is_err());
/// assert!(to_centimeters(f64::NAN, LengthUnit::Meter).is_err());
/// ```
pub fn to_centimeters(value: f64, unit: LengthUnit) -> CoreResult<f64> {
    if !value.is_finite() {
        return Err(CoreError::InvalidInput {
            field: "length".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if value <= 0.0 {
        return Err(CoreError::InvalidInput {
            field: "length".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    Ok(value * unit.factor_to_cm())
}

// =============================================================================
// Rounding
// =============================================================================

/// Rounds a value to 2 decimal places, half away from zero.
///
/// ## Where This Is Used
/// Exactly three places: the `length_cm`, `fabric_used_m`, and `cost`
/// fields of a finalized line item. Never inside a formula, and never on
/// an order's running total (the total stays a precise sum of already
/// rounded item costs).
///
/// ## Example
/// ```rust
/// use darzi_core::units::round2;
///
/// assert_eq!(round2(2.204), 2.2);
/// assert_eq!(round2(2.205), 2.21);
/// assert_eq!(round2(32.000000000000004), 32.0);
/// ```
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_exactness() {
        assert_eq!(to_centimeters(1.0, LengthUnit::Meter).unwrap(), 100.0);
        assert_eq!(to_centimeters(1.0, LengthUnit::Inch).unwrap(), 2.54);
        assert_eq!(to_centimeters(1.0, LengthUnit::Foot).unwrap(), 30.48);
        assert_eq!(to_centimeters(1.0, LengthUnit::Centimeter).unwrap(), 1.0);
    }

    #[test]
    fn test_centimeter_is_identity() {
        for value in [0.5, 1.0, 37.25, 250.0, 9999.0] {
            assert_eq!(to_centimeters(value, LengthUnit::Centimeter).unwrap(), value);
        }
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert!(to_centimeters(0.0, LengthUnit::Meter).is_err());
        assert!(to_centimeters(-1.0, LengthUnit::Meter).is_err());
        assert!(to_centimeters(-0.01, LengthUnit::Inch).is_err());
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert!(to_centimeters(f64::NAN, LengthUnit::Centimeter).is_err());
        assert!(to_centimeters(f64::INFINITY, LengthUnit::Meter).is_err());
        assert!(to_centimeters(f64::NEG_INFINITY, LengthUnit::Foot).is_err());
    }

    #[test]
    fn test_error_names_the_length_field() {
        let err = to_centimeters(f64::NAN, LengthUnit::Meter).unwrap_err();
        match err {
            CoreError::InvalidInput { field, .. } => assert_eq!(field, "length"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_no_rounding_at_conversion() {
        // 1.3 inch = 3.302 cm and must stay unrounded (three decimals)
        // until the finalized item is produced.
        assert_eq!(to_centimeters(1.3, LengthUnit::Inch).unwrap(), 3.302);
        assert_eq!(to_centimeters(8.0, LengthUnit::Foot).unwrap(), 243.84);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.0), 1.0);
        assert_eq!(round2(2.204), 2.2);
        assert_eq!(round2(2.205), 2.21);
        assert_eq!(round2(2.999), 3.0);
        assert_eq!(round2(248.92), 248.92);
    }

    #[test]
    fn test_round2_absorbs_float_noise() {
        // 2.2 * 10 + 2 * 5 accumulates binary representation noise; the
        // rounded output must be the clean 2-dp value.
        let noisy = 2.2_f64 * 10.0 + 2.0 * 5.0;
        assert_eq!(round2(noisy), 32.0);
    }

    #[test]
    fn test_unit_display_matches_wire_names() {
        assert_eq!(LengthUnit::Centimeter.to_string(), "cm");
        assert_eq!(LengthUnit::Meter.to_string(), "meter");
        assert_eq!(LengthUnit::Inch.to_string(), "inch");
        assert_eq!(LengthUnit::Foot.to_string(), "feet");
    }

    #[test]
    fn test_unit_serde_round_trip() {
        let json = serde_json::to_string(&LengthUnit::Foot).unwrap();
        assert_eq!(json, "\"feet\"");
        let unit: LengthUnit = serde_json::from_str("\"cm\"").unwrap();
        assert_eq!(unit, LengthUnit::Centimeter);
    }
}
