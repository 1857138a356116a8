//! Property-based tests for the BMI engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated measurements.

use bmi_core::calculations::{
    classify, compute_bmi, convert_height_to_meters, convert_weight_to_kilograms, Category,
    Measurement,
};
use bmi_core::units::{Centimeters, Feet, HeightUnit, Kilograms, Meters, Pounds, WeightUnit};
use bmi_core::validation::MeasurementForm;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_height_unit()(variant in 0..2u8) -> HeightUnit {
        HeightUnit::ALL[variant as usize]
    }
}

prop_compose! {
    fn arbitrary_weight_unit()(variant in 0..2u8) -> WeightUnit {
        WeightUnit::ALL[variant as usize]
    }
}

prop_compose! {
    fn valid_measurement()(
        age in 1u32..=120,
        height in 0.5f64..300.0,
        height_unit in arbitrary_height_unit(),
        weight in 1.0f64..500.0,
        weight_unit in arbitrary_weight_unit()
    ) -> Measurement {
        Measurement { age, height, height_unit, weight, weight_unit }
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(1.0)
}

proptest! {
    #[test]
    fn category_matches_thresholds(m in valid_measurement()) {
        let result = compute_bmi(&m);
        let expected = if result.bmi < 18.5 {
            Category::Underweight
        } else if result.bmi < 25.0 {
            Category::NormalWeight
        } else if result.bmi < 30.0 {
            Category::Overweight
        } else {
            Category::Obese
        };
        prop_assert_eq!(result.category, expected);
        prop_assert_eq!(result.display_color, expected.display_color());
        prop_assert_eq!(result.advisory.as_str(), expected.advisory());
    }

    #[test]
    fn compute_is_idempotent(m in valid_measurement()) {
        prop_assert_eq!(compute_bmi(&m), compute_bmi(&m));
    }

    #[test]
    fn valid_measurements_give_positive_finite_bmi(m in valid_measurement()) {
        prop_assert!(m.validate().is_ok());
        let bmi = compute_bmi(&m).bmi;
        prop_assert!(bmi.is_finite());
        prop_assert!(bmi > 0.0);
    }

    #[test]
    fn age_never_changes_result(m in valid_measurement(), other_age in 1u32..=120) {
        let other = Measurement { age: other_age, ..m };
        prop_assert_eq!(compute_bmi(&m), compute_bmi(&other));
    }

    #[test]
    fn centimeters_round_trip(cm in 0.1f64..1000.0) {
        let m = convert_height_to_meters(cm, HeightUnit::Centimeters);
        let back: Centimeters = m.into();
        prop_assert!(approx_eq(back.value(), cm));
        prop_assert!(approx_eq(m.value() * 100.0, cm));
    }

    #[test]
    fn feet_round_trip(ft in 0.1f64..30.0) {
        let m: Meters = convert_height_to_meters(ft, HeightUnit::Feet);
        let back: Feet = m.into();
        prop_assert!(approx_eq(back.value(), ft));
    }

    #[test]
    fn pounds_round_trip(lb in 0.1f64..2000.0) {
        let kg: Kilograms = convert_weight_to_kilograms(lb, WeightUnit::Pounds);
        let back: Pounds = kg.into();
        prop_assert!(approx_eq(back.value(), lb));
    }

    #[test]
    fn kilograms_are_identity(kg in 0.1f64..2000.0) {
        prop_assert_eq!(convert_weight_to_kilograms(kg, WeightUnit::Kilograms).value(), kg);
    }

    #[test]
    fn classify_is_monotonic(a in 0.0f64..80.0, b in 0.0f64..80.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rank = |c: Category| Category::ALL.iter().position(|x| *x == c);
        prop_assert!(rank(classify(lo)) <= rank(classify(hi)));
    }

    #[test]
    fn form_parse_matches_direct_measurement(m in valid_measurement()) {
        let form = MeasurementForm {
            age: m.age.to_string(),
            height: m.height.to_string(),
            height_unit: m.height_unit,
            weight: m.weight.to_string(),
            weight_unit: m.weight_unit,
        };
        prop_assert_eq!(form.parse().unwrap(), m);
    }
}

#[test]
fn boundary_values_belong_to_higher_category() {
    assert_eq!(classify(18.5), Category::NormalWeight);
    assert_eq!(classify(25.0), Category::Overweight);
    assert_eq!(classify(30.0), Category::Obese);
}

#[test]
fn exact_boundary_from_measurement() {
    let m = Measurement {
        age: 40,
        height: 100.0,
        height_unit: HeightUnit::Centimeters,
        weight: 18.5,
        weight_unit: WeightUnit::Kilograms,
    };
    assert_eq!(compute_bmi(&m).category, Category::NormalWeight);
}
