//! # Unit Types
//!
//! Type-safe wrappers for body measurement units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! The engine works in SI internally (meters and kilograms). Forms may collect
//! height in centimeters or feet and weight in kilograms or pounds; the
//! [`HeightUnit`] and [`WeightUnit`] selectors record which one was used.
//!
//! ## Conversion Factors
//!
//! - 1 cm = 0.01 m
//! - 1 ft = 0.3048 m
//! - 1 lb = 0.453592 kg
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::units::{Centimeters, Feet, Kilograms, Meters, Pounds};
//!
//! let height: Meters = Centimeters(180.0).into();
//! assert!((height.0 - 1.8).abs() < 1e-12);
//!
//! let height: Meters = Feet(5.9).into();
//! assert!((height.0 - 1.79832).abs() < 1e-9);
//!
//! let weight: Kilograms = Pounds(160.0).into();
//! assert!((weight.0 - 72.57472).abs() < 1e-9);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Meters per foot
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Centimeters per meter
pub const CENTIMETERS_PER_METER: f64 = 100.0;

/// Kilograms per pound
pub const KILOGRAMS_PER_POUND: f64 = 0.453592;

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in feet (decimal feet, e.g. 5.9 ft)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / CENTIMETERS_PER_METER)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * CENTIMETERS_PER_METER)
    }
}

impl From<Feet> for Meters {
    fn from(ft: Feet) -> Self {
        Meters(ft.0 * METERS_PER_FOOT)
    }
}

impl From<Meters> for Feet {
    fn from(m: Meters) -> Self {
        Feet(m.0 / METERS_PER_FOOT)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 * KILOGRAMS_PER_POUND)
    }
}

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 / KILOGRAMS_PER_POUND)
    }
}

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

impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Feet);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Pounds);

impl Meters {
    /// Square of the length, in m²
    pub fn squared(self) -> f64 {
        self.0 * self.0
    }
}

// ============================================================================
// Unit Selectors
// ============================================================================

/// Unit a height value was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HeightUnit {
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "ft")]
    Feet,
}

impl HeightUnit {
    /// All height units in display order
    pub const ALL: [HeightUnit; 2] = [HeightUnit::Centimeters, HeightUnit::Feet];

    /// Short unit code ("cm", "ft")
    pub fn code(&self) -> &'static str {
        match self {
            HeightUnit::Centimeters => "cm",
            HeightUnit::Feet => "ft",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            HeightUnit::Centimeters => "Centimeters (cm)",
            HeightUnit::Feet => "Feet (ft)",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for HeightUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Centimeters),
            "ft" | "foot" | "feet" => Ok(HeightUnit::Feet),
            _ => Err(CalcError::invalid_input("height_unit", s, "Expected 'cm' or 'ft'")),
        }
    }
}

/// Unit a weight value was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "lbs")]
    Pounds,
}

impl WeightUnit {
    /// All weight units in display order
    pub const ALL: [WeightUnit; 2] = [WeightUnit::Kilograms, WeightUnit::Pounds];

    /// Short unit code ("kg", "lbs")
    pub fn code(&self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kg",
            WeightUnit::Pounds => "lbs",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "Kilograms (kg)",
            WeightUnit::Pounds => "Pounds (lbs)",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for WeightUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Pounds),
            _ => Err(CalcError::invalid_input("weight_unit", s, "Expected 'kg' or 'lbs'")),
        }
    }
}
