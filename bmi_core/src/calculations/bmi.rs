//! # BMI Calculation
//!
//! Converts a [`Measurement`] into a [`BmiResult`]:
//!
//! ```text
//! BMI = weight_kg / height_m²
//! ```
//!
//! ## Categories
//!
//! | Range               | Category      |
//! |---------------------|---------------|
//! | bmi < 18.5          | Underweight   |
//! | 18.5 <= bmi < 25.0  | Normal Weight |
//! | 25.0 <= bmi < 30.0  | Overweight    |
//! | bmi >= 30.0         | Obese         |
//!
//! Each range includes its lower bound, so a BMI of exactly 18.5 is
//! Normal Weight. Classification uses the full-precision value; only the
//! displayed value is rounded.
//!
//! Age is carried through for display but does not enter the formula.
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::calculations::bmi::{compute_bmi, Category, Measurement};
//! use bmi_core::units::{HeightUnit, WeightUnit};
//!
//! let m = Measurement {
//!     age: 30,
//!     height: 180.0,
//!     height_unit: HeightUnit::Centimeters,
//!     weight: 75.0,
//!     weight_unit: WeightUnit::Kilograms,
//! };
//!
//! let result = compute_bmi(&m);
//! assert_eq!(result.category, Category::NormalWeight);
//! assert_eq!(result.display_value(), "23.1");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::units::{Centimeters, Feet, HeightUnit, Kilograms, Meters, Pounds, WeightUnit};

/// Lower bound of the Normal Weight range
pub const NORMAL_WEIGHT_MIN: f64 = 18.5;

/// Lower bound of the Overweight range
pub const OVERWEIGHT_MIN: f64 = 25.0;

/// Lower bound of the Obese range
pub const OBESE_MIN: f64 = 30.0;

/// Input to the BMI calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "age": 25,
///   "height": 5.9,
///   "height_unit": "ft",
///   "weight": 160.0,
///   "weight_unit": "lbs"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Age in whole years, 1 through 120
    pub age: u32,

    /// Height in `height_unit`
    pub height: f64,

    /// Unit the height was entered in
    pub height_unit: HeightUnit,

    /// Weight in `weight_unit`
    pub weight: f64,

    /// Unit the weight was entered in
    pub weight_unit: WeightUnit,
}

impl Measurement {
    /// Height converted to meters
    pub fn height_meters(&self) -> Meters {
        convert_height_to_meters(self.height, self.height_unit)
    }

    /// Weight converted to kilograms
    pub fn weight_kilograms(&self) -> Kilograms {
        convert_weight_to_kilograms(self.weight, self.weight_unit)
    }

    /// Height with its unit code, e.g. "180 cm"
    pub fn height_label(&self) -> String {
        format!("{} {}", self.height, self.height_unit.code())
    }

    /// Weight with its unit code, e.g. "160 lbs"
    pub fn weight_label(&self) -> String {
        format!("{} {}", self.weight, self.weight_unit.code())
    }
}

/// Health category derived from a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Underweight,
    #[serde(rename = "Normal Weight")]
    NormalWeight,
    Overweight,
    Obese,
}

impl Category {
    /// All categories from lowest to highest BMI
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::NormalWeight,
        Category::Overweight,
        Category::Obese,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::NormalWeight => "Normal Weight",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }

    /// Advisory text shown with a result in this category
    pub fn advisory(&self) -> &'static str {
        match self {
            Category::Underweight => {
                "You are underweight. Consider consulting with a healthcare provider about healthy ways to gain weight."
            }
            Category::NormalWeight => {
                "You have a healthy weight. Keep maintaining a balanced diet and regular physical activity."
            }
            Category::Overweight => {
                "You are overweight. Consider a balanced diet and regular exercise to reach a healthier weight."
            }
            Category::Obese => {
                "Your BMI is in the obese range. Consider consulting with a healthcare provider for personalized advice."
            }
        }
    }

    /// Presentation color for this category
    pub fn display_color(&self) -> DisplayColor {
        match self {
            Category::Underweight => DisplayColor::Blue,
            Category::NormalWeight => DisplayColor::Green,
            Category::Overweight => DisplayColor::Yellow,
            Category::Obese => DisplayColor::Red,
        }
    }

    /// Half-open BMI range `[min, max)` for this category
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            Category::Underweight => (None, Some(NORMAL_WEIGHT_MIN)),
            Category::NormalWeight => (Some(NORMAL_WEIGHT_MIN), Some(OVERWEIGHT_MIN)),
            Category::Overweight => (Some(OVERWEIGHT_MIN), Some(OBESE_MIN)),
            Category::Obese => (Some(OBESE_MIN), None),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Color hint carried through for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Blue,
    Green,
    Yellow,
    Red,
}

impl DisplayColor {
    /// RGB components in 0.0..=1.0
    pub fn rgb(&self) -> [f32; 3] {
        match self {
            DisplayColor::Blue => [0.23, 0.51, 0.96],
            DisplayColor::Green => [0.13, 0.64, 0.29],
            DisplayColor::Yellow => [0.85, 0.65, 0.05],
            DisplayColor::Red => [0.86, 0.15, 0.15],
        }
    }

    /// Lowercase color name
    pub fn name(&self) -> &'static str {
        match self {
            DisplayColor::Blue => "blue",
            DisplayColor::Green => "green",
            DisplayColor::Yellow => "yellow",
            DisplayColor::Red => "red",
        }
    }
}

/// Output of the BMI calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bmi": 23.148148148148145,
///   "category": "Normal Weight",
///   "advisory": "You have a healthy weight. ...",
///   "display_color": "green"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// Full-precision BMI in kg/m²
    pub bmi: f64,

    /// Category the BMI falls in
    pub category: Category,

    /// Advisory text for the category
    pub advisory: String,

    /// Presentation color for the category
    pub display_color: DisplayColor,
}

impl BmiResult {
    /// BMI rounded to one decimal place, for display
    pub fn display_value(&self) -> String {
        format!("{:.1}", self.bmi)
    }
}

/// Convert a height in the given unit to meters.
pub fn convert_height_to_meters(value: f64, unit: HeightUnit) -> Meters {
    match unit {
        HeightUnit::Centimeters => Centimeters(value).into(),
        HeightUnit::Feet => Feet(value).into(),
    }
}

/// Convert a weight in the given unit to kilograms.
pub fn convert_weight_to_kilograms(value: f64, unit: WeightUnit) -> Kilograms {
    match unit {
        WeightUnit::Kilograms => Kilograms(value),
        WeightUnit::Pounds => Pounds(value).into(),
    }
}

/// Classify a BMI value.
///
/// Boundary values belong to the higher category. Non-finite input
/// (from a zero height) falls through to [`Category::Obese`].
pub fn classify(bmi: f64) -> Category {
    if bmi < NORMAL_WEIGHT_MIN {
        Category::Underweight
    } else if bmi < OVERWEIGHT_MIN {
        Category::NormalWeight
    } else if bmi < OBESE_MIN {
        Category::Overweight
    } else {
        Category::Obese
    }
}

/// Compute BMI for a measurement.
///
/// Performs no validation: a zero height yields an infinite or NaN BMI.
/// Use [`calculate`] when the measurement has not been validated yet.
pub fn compute_bmi(measurement: &Measurement) -> BmiResult {
    let height_m = measurement.height_meters();
    let weight_kg = measurement.weight_kilograms();

    let bmi = weight_kg.value() / height_m.squared();
    let category = classify(bmi);

    log::debug!(
        "bmi: {} / {}² = {} ({})",
        weight_kg.value(),
        height_m.value(),
        bmi,
        category
    );

    BmiResult {
        bmi,
        category,
        advisory: category.advisory().to_string(),
        display_color: category.display_color(),
    }
}

/// Validate a measurement, then compute its BMI.
///
/// # Returns
///
/// * `Ok(BmiResult)` - Calculation results
/// * `Err(CalcError)` - If age, height or weight is out of range
pub fn calculate(measurement: &Measurement) -> CalcResult<BmiResult> {
    measurement.validate()?;
    Ok(compute_bmi(measurement))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(age: u32, height_cm: f64, weight_kg: f64) -> Measurement {
        Measurement {
            age,
            height: height_cm,
            height_unit: HeightUnit::Centimeters,
            weight: weight_kg,
            weight_unit: WeightUnit::Kilograms,
        }
    }

    #[test]
    fn test_metric_scenario() {
        let m = metric(30, 180.0, 75.0);
        assert!((m.height_meters().value() - 1.80).abs() < 1e-12);

        let result = compute_bmi(&m);
        // 75 / 1.8² = 23.148...
        assert!((result.bmi - 23.148148).abs() < 1e-5);
        assert_eq!(result.category, Category::NormalWeight);
        assert_eq!(result.display_color, DisplayColor::Green);
    }

    #[test]
    fn test_imperial_scenario() {
        let m = Measurement {
            age: 25,
            height: 5.9,
            height_unit: HeightUnit::Feet,
            weight: 160.0,
            weight_unit: WeightUnit::Pounds,
        };
        assert!((m.height_meters().value() - 1.79832).abs() < 1e-9);
        assert!((m.weight_kilograms().value() - 72.57472).abs() < 1e-9);

        let result = compute_bmi(&m);
        // 72.57472 / 1.79832² = 22.4415
        assert!((result.bmi - 22.4415).abs() < 1e-3);
        assert_eq!(result.category, Category::NormalWeight);
    }

    #[test]
    fn test_underweight_and_normal() {
        let normal = compute_bmi(&metric(40, 150.0, 45.0));
        assert!((normal.bmi - 20.0).abs() < 1e-9);
        assert_eq!(normal.category, Category::NormalWeight);

        let under = compute_bmi(&metric(40, 150.0, 40.0));
        assert!((under.bmi - 17.78).abs() < 0.01);
        assert_eq!(under.category, Category::Underweight);
        assert_eq!(under.display_value(), "17.8");
    }

    #[test]
    fn test_obese_scenario() {
        let result = compute_bmi(&metric(50, 170.0, 90.0));
        assert!((result.bmi - 31.14).abs() < 0.01);
        assert_eq!(result.category, Category::Obese);
        assert_eq!(result.display_color, DisplayColor::Red);
    }

    #[test]
    fn test_exact_boundary_is_normal_weight() {
        let result = compute_bmi(&metric(20, 100.0, 18.5));
        assert_eq!(result.bmi, 18.5);
        assert_eq!(result.category, Category::NormalWeight);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(18.499_999), Category::Underweight);
        assert_eq!(classify(18.5), Category::NormalWeight);
        assert_eq!(classify(24.999_999), Category::NormalWeight);
        assert_eq!(classify(25.0), Category::Overweight);
        assert_eq!(classify(29.999_999), Category::Overweight);
        assert_eq!(classify(30.0), Category::Obese);
    }

    #[test]
    fn test_classify_uses_full_precision() {
        // 24.96 displays as "25.0" but is still Normal Weight
        assert_eq!(classify(24.96), Category::NormalWeight);
    }

    #[test]
    fn test_age_does_not_affect_result() {
        let young = compute_bmi(&metric(1, 170.0, 70.0));
        let old = compute_bmi(&metric(120, 170.0, 70.0));
        assert_eq!(young, old);
    }

    #[test]
    fn test_zero_height_is_not_finite() {
        let result = compute_bmi(&metric(30, 0.0, 70.0));
        assert!(!result.bmi.is_finite());
    }

    #[test]
    fn test_calculate_rejects_invalid_input() {
        assert!(calculate(&metric(0, 170.0, 70.0)).is_err());
        assert!(calculate(&metric(30, 0.0, 70.0)).is_err());
        assert!(calculate(&metric(30, 170.0, 70.0)).is_ok());
    }

    #[test]
    fn test_category_lookup_tables() {
        for category in Category::ALL {
            assert!(!category.advisory().is_empty());
            let (min, _) = category.bounds();
            if let Some(min) = min {
                assert_eq!(classify(min), category);
            }
        }
        assert_eq!(Category::Overweight.display_color(), DisplayColor::Yellow);
        assert_eq!(Category::Underweight.display_color().name(), "blue");
    }

    #[test]
    fn test_serialization() {
        let result = compute_bmi(&metric(30, 180.0, 75.0));
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"Normal Weight\""));
        assert!(json.contains("\"green\""));

        let roundtrip: BmiResult = serde_json::from_str(&json).unwrap();
        assert!((result.bmi - roundtrip.bmi).abs() < 1e-12);
        assert_eq!(result.category, roundtrip.category);
        assert_eq!(result.advisory, roundtrip.advisory);
    }
}
