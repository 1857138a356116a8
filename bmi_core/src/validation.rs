//! # Input Validation
//!
//! The BMI engine assumes its input is already valid. This module is the
//! layer that makes it so: range checks on a [`Measurement`], and parsing of
//! raw form text into one.
//!
//! ## Rules
//!
//! - age: whole number, 1 through 120
//! - height: finite and greater than zero
//! - weight: finite and greater than zero
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::validation::MeasurementForm;
//! use bmi_core::units::{HeightUnit, WeightUnit};
//!
//! let form = MeasurementForm {
//!     age: "30".to_string(),
//!     height: "180".to_string(),
//!     height_unit: HeightUnit::Centimeters,
//!     weight: "75".to_string(),
//!     weight_unit: WeightUnit::Kilograms,
//! };
//!
//! let measurement = form.parse().unwrap();
//! assert_eq!(measurement.age, 30);
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::calculations::bmi::Measurement;
use crate::errors::{CalcError, CalcResult};
use crate::units::{HeightUnit, WeightUnit};

/// Accepted ages in years
pub const AGE_RANGE: RangeInclusive<u32> = 1..=120;

impl Measurement {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.check_ranges()
            .inspect_err(|e| log::warn!("rejected measurement: {}", e))
    }

    fn check_ranges(&self) -> CalcResult<()> {
        validate_age(i64::from(self.age))?;
        validate_positive("height", self.height, "Height must be greater than zero")?;
        validate_positive("weight", self.weight, "Weight must be greater than zero")?;
        Ok(())
    }
}

fn validate_age(age: i64) -> CalcResult<u32> {
    match u32::try_from(age) {
        Ok(age) if AGE_RANGE.contains(&age) => Ok(age),
        _ => Err(CalcError::invalid_input(
            "age",
            age.to_string(),
            format!("Age must be between {} and {}", AGE_RANGE.start(), AGE_RANGE.end()),
        )),
    }
}

fn validate_positive(field: &str, value: f64, reason: &str) -> CalcResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(value)
}

/// Raw form contents, as typed by a user.
///
/// Numeric fields are kept as text so a front end can hold partial input
/// ("", "1", "17") between keystrokes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementForm {
    pub age: String,
    pub height: String,
    pub height_unit: HeightUnit,
    pub weight: String,
    pub weight_unit: WeightUnit,
}

impl MeasurementForm {
    /// Empty form with the given unit selections
    pub fn with_units(height_unit: HeightUnit, weight_unit: WeightUnit) -> Self {
        MeasurementForm {
            height_unit,
            weight_unit,
            ..Default::default()
        }
    }

    /// Whether every text field has something in it
    pub fn is_complete(&self) -> bool {
        [&self.age, &self.height, &self.weight]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Parse and validate the form into a [`Measurement`].
    ///
    /// Fields are checked in form order (age, height, weight); the first
    /// failure is returned.
    pub fn parse(&self) -> CalcResult<Measurement> {
        let measurement = Measurement {
            age: self.parse_age()?,
            height: self.parse_height()?,
            height_unit: self.height_unit,
            weight: self.parse_weight()?,
            weight_unit: self.weight_unit,
        };
        Ok(measurement)
    }

    /// Every validation failure in the form, one per invalid field.
    pub fn field_errors(&self) -> Vec<CalcError> {
        [
            self.parse_age().err(),
            self.parse_height().err(),
            self.parse_weight().err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn parse_age(&self) -> CalcResult<u32> {
        let raw = required("age", &self.age)?;
        let age: i64 = raw
            .parse()
            .map_err(|_| CalcError::invalid_input("age", raw, "Age must be a whole number"))?;
        validate_age(age)
    }

    fn parse_height(&self) -> CalcResult<f64> {
        let value = parse_number("height", &self.height)?;
        validate_positive("height", value, "Height must be greater than zero")
    }

    fn parse_weight(&self) -> CalcResult<f64> {
        let value = parse_number("weight", &self.weight)?;
        validate_positive("weight", value, "Weight must be greater than zero")
    }
}

fn required<'a>(field: &str, raw: &'a str) -> CalcResult<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalcError::missing_field(field));
    }
    Ok(trimmed)
}

fn parse_number(field: &str, raw: &str) -> CalcResult<f64> {
    let raw = required(field, raw)?;
    raw.parse()
        .map_err(|_| CalcError::invalid_input(field, raw, "Must be a number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(age: &str, height: &str, weight: &str) -> MeasurementForm {
        MeasurementForm {
            age: age.to_string(),
            height: height.to_string(),
            height_unit: HeightUnit::Centimeters,
            weight: weight.to_string(),
            weight_unit: WeightUnit::Kilograms,
        }
    }

    #[test]
    fn test_valid_form() {
        let m = form("30", " 180 ", "75.5").parse().unwrap();
        assert_eq!(m.age, 30);
        assert_eq!(m.height, 180.0);
        assert_eq!(m.weight, 75.5);
        assert_eq!(m.height_unit, HeightUnit::Centimeters);
    }

    #[test]
    fn test_age_bounds() {
        assert!(form("1", "180", "75").parse().is_ok());
        assert!(form("120", "180", "75").parse().is_ok());
        assert!(form("0", "180", "75").parse().is_err());
        assert!(form("121", "180", "75").parse().is_err());
        assert!(form("-4", "180", "75").parse().is_err());
    }

    #[test]
    fn test_age_must_be_whole() {
        let err = form("30.5", "180", "75").parse().unwrap_err();
        assert_eq!(err.field(), Some("age"));
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_positive_rejected() {
        let err = form("30", "0", "75").parse().unwrap_err();
        assert_eq!(err.field(), Some("height"));

        let err = form("30", "180", "-2").parse().unwrap_err();
        assert_eq!(err.field(), Some("weight"));

        assert!(form("30", "NaN", "75").parse().is_err());
        assert!(form("30", "inf", "75").parse().is_err());
    }

    #[test]
    fn test_missing_field() {
        let f = form("30", "", "75");
        assert!(!f.is_complete());
        assert_eq!(f.parse().unwrap_err(), CalcError::missing_field("height"));
    }

    #[test]
    fn test_unparseable_number() {
        let err = form("30", "tall", "75").parse().unwrap_err();
        assert_eq!(err, CalcError::invalid_input("height", "tall", "Must be a number"));
    }

    #[test]
    fn test_field_errors_reports_every_field() {
        let errors = form("200", "abc", "").field_errors();
        let fields: Vec<_> = errors.iter().filter_map(|e| e.field()).collect();
        assert_eq!(fields, vec!["age", "height", "weight"]);

        assert!(form("30", "180", "75").field_errors().is_empty());
    }

    #[test]
    fn test_measurement_validate() {
        let mut m = form("30", "180", "75").parse().unwrap();
        assert!(m.validate().is_ok());
        m.age = 0;
        assert!(m.validate().is_err());
        m.age = 30;
        m.weight = 0.0;
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_validate_reports_first_bad_field() {
        let m = Measurement {
            age: 121,
            height: -1.0,
            height_unit: HeightUnit::Centimeters,
            weight: 70.0,
            weight_unit: WeightUnit::Kilograms,
        };
        let err = m.validate().unwrap_err();
        assert_eq!(err.field(), Some("age"));

        let m = Measurement { age: 40, ..m };
        assert_eq!(m.validate().unwrap_err().field(), Some("height"));
    }

    #[test]
    fn test_with_units() {
        let f = MeasurementForm::with_units(HeightUnit::Feet, WeightUnit::Pounds);
        assert_eq!(f.height_unit, HeightUnit::Feet);
        assert!(f.age.is_empty());
    }
}
