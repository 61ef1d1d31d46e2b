//! # Unit Types
//!
//! Type-safe wrappers for the site-measurement units used throughout the
//! engine. These provide compile-time safety against unit confusion while
//! remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Quantity takeoff uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Units
//!
//! Field measurements follow the cft/sft conventions common in South Asian
//! construction estimation:
//! - Length: feet (ft), inches (in); plaster thickness in millimeters (mm)
//! - Area: square feet (sft)
//! - Volume: cubic feet (cft)
//! - Mass: kilograms (kg); rebar weights are quoted in kg per foot
//!
//! ## Example
//!
//! ```rust
//! use quantify_core::units::{Feet, Inches, Millimeters};
//!
//! let thickness = Inches(18.0);
//! let thickness_ft: Feet = thickness.into();
//! assert_eq!(thickness_ft.0, 1.5);
//!
//! let plaster: Feet = Millimeters(304.8).into();
//! assert!((plaster.0 - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

impl From<Millimeters> for Feet {
    fn from(mm: Millimeters) -> Self {
        Feet(mm.0 / 304.8)
    }
}

impl From<Feet> for Millimeters {
    fn from(ft: Feet) -> Self {
        Millimeters(ft.0 * 304.8)
    }
}

// ============================================================================
// Area and Volume Units
// ============================================================================

/// Area in square feet (sft)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Volume in cubic feet (cft)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cft(pub f64);

/// Area times a thickness is a volume.
impl Mul<Feet> for SqFt {
    type Output = Cft;
    fn mul(self, rhs: Feet) -> Cft {
        Cft(self.0 * rhs.0)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Millimeters);
impl_arithmetic!(SqFt);
impl_arithmetic!(Cft);
impl_arithmetic!(Kilograms);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_feet() {
        let inches = Inches(18.0);
        let ft: Feet = inches.into();
        assert_eq!(ft.0, 1.5);
    }

    #[test]
    fn test_millimeters_to_feet() {
        let mm = Millimeters(12.0);
        let ft: Feet = mm.into();
        assert!((ft.0 - 12.0 / 304.8).abs() < 1e-12);
    }

    #[test]
    fn test_area_times_thickness() {
        let vol = SqFt(1200.0) * Feet(0.5);
        assert_eq!(vol.0, 600.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Cft(10.0);
        let b = Cft(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 1.54).0, 15.4);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let vol = Cft(15.4);
        let json = serde_json::to_string(&vol).unwrap();
        assert_eq!(json, "15.4");

        let roundtrip: Cft = serde_json::from_str(&json).unwrap();
        assert_eq!(vol, roundtrip);
    }
}
