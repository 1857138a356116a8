//! Static reference information shown next to a BMI result.

use serde::Serialize;

use crate::calculations::bmi::Category;

/// One row of the category reference table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRow {
    pub category: Category,
    /// Range as shown to the user, e.g. "18.5 to under 25.0".
    ///
    /// Upper bounds are exclusive, matching [`crate::calculations::classify`].
    pub range_label: &'static str,
}

/// Category table in ascending BMI order
pub static CATEGORY_TABLE: [ReferenceRow; 4] = [
    ReferenceRow {
        category: Category::Underweight,
        range_label: "Below 18.5",
    },
    ReferenceRow {
        category: Category::NormalWeight,
        range_label: "18.5 to under 25.0",
    },
    ReferenceRow {
        category: Category::Overweight,
        range_label: "25.0 to under 30.0",
    },
    ReferenceRow {
        category: Category::Obese,
        range_label: "30.0 and above",
    },
];

/// General notes about what BMI does and does not tell you
pub const NOTES: [&str; 5] = [
    "BMI is a screening tool, not a diagnostic measure.",
    "It does not measure body fat directly.",
    "It does not account for age, sex, or muscle mass.",
    "Categories use the unrounded BMI, so 24.96 (shown as 25.0) is still Normal Weight.",
    "Consult a healthcare provider for a complete health assessment.",
];

/// Reference row for a category
pub fn row_for(category: Category) -> &'static ReferenceRow {
    // CATEGORY_TABLE follows Category::ALL order
    &CATEGORY_TABLE[category as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::bmi::{compute_bmi, Measurement};
    use crate::units::{HeightUnit, WeightUnit};

    #[test]
    fn test_table_covers_every_category_in_order() {
        let categories: Vec<_> = CATEGORY_TABLE.iter().map(|r| r.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_row_for() {
        assert_eq!(row_for(Category::Overweight).range_label, "25.0 to under 30.0");
        assert_eq!(row_for(Category::Obese).category, Category::Obese);
    }

    #[test]
    fn test_labels_agree_with_thresholds() {
        for row in &CATEGORY_TABLE {
            let expected = match row.category.bounds() {
                (None, Some(hi)) => format!("Below {:.1}", hi),
                (Some(lo), Some(hi)) => format!("{:.1} to under {:.1}", lo, hi),
                (Some(lo), None) => format!("{:.1} and above", lo),
                (None, None) => unreachable!("every category has a bound"),
            };
            assert_eq!(row.range_label, expected);
        }
    }

    #[test]
    fn test_rounded_display_stays_inside_label() {
        // 24.96 displays as "25.0" but is still below the Overweight threshold
        let m = Measurement {
            age: 30,
            height: 100.0,
            height_unit: HeightUnit::Centimeters,
            weight: 24.96,
            weight_unit: WeightUnit::Kilograms,
        };
        let result = compute_bmi(&m);
        assert_eq!(result.display_value(), "25.0");
        assert_eq!(result.category, Category::NormalWeight);

        let label = row_for(result.category).range_label;
        assert!(label.contains("under 25.0"));
        assert!(NOTES.iter().any(|n| n.contains("unrounded")));
    }
}
