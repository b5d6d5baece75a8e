//! Label derivation
//!
//! Pure functions from a [`NutritionRecord`] to table rows and front-of-pack
//! warnings. Nothing here validates or clamps input; every function is total.

use super::format::{format_number_default, format_percent_dv};
use super::reference::{Nutrient, WarningThresholds};
use crate::models::{FrontWarnings, NutritionRecord, TableRow};

/// Amount in one portion: `value_100 * portion_size / 100`, unrounded
pub fn derive_portion_value(value_100: f64, portion_size: f64) -> f64 {
    value_100 * portion_size / 100.0
}

/// Percentage of the daily value, rounded to an integer
///
/// Half-way cases round toward positive infinity (12.5 -> 13, -12.5 -> -12).
/// A zero daily value yields 0.
pub fn derive_percent_dv(per_portion: f64, daily_value: f64) -> i64 {
    if daily_value == 0.0 {
        return 0;
    }
    round_half_up(per_portion / daily_value * 100.0)
}

fn round_half_up(x: f64) -> i64 {
    let floor = x.floor();
    // x - floor is exact, unlike x + 0.5 near 0.49999999999999994
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    // `as` saturates; NaN becomes 0
    rounded as i64
}

fn table_row(nutrient: Nutrient, value_100: f64, portion_size: f64) -> TableRow {
    let per_portion = derive_portion_value(value_100, portion_size);
    let percent = derive_percent_dv(per_portion, nutrient.daily_value());

    TableRow {
        nutrient,
        label: nutrient.label(),
        per_100: format_number_default(value_100),
        per_portion: format_number_default(per_portion),
        percent_dv: format_percent_dv(percent),
        indent_level: nutrient.indent_level(),
    }
}

/// Build the nutrition facts table in regulatory order
///
/// The ten mandatory rows always appear; vitamins and minerals follow only
/// when declared with a value above zero.
pub fn generate_table_rows(record: &NutritionRecord) -> Vec<TableRow> {
    let portion_size = record.portion_size;

    let mandatory = Nutrient::MANDATORY.iter().map(|&n| {
        let value = record.value_per_100(n).unwrap_or(0.0);
        table_row(n, value, portion_size)
    });

    let declared = Nutrient::MICRONUTRIENTS.iter().filter_map(|&n| {
        record
            .micronutrients
            .get(n)
            .filter(|v| *v > 0.0)
            .map(|v| table_row(n, v, portion_size))
    });

    mandatory.chain(declared).collect()
}

/// Evaluate the "ALTO EM" flags against the solid or liquid limits
///
/// Comparison is inclusive: a value exactly at the limit raises the flag.
pub fn calculate_front_warnings(record: &NutritionRecord) -> FrontWarnings {
    let limits = WarningThresholds::for_product(record.is_liquid);

    FrontWarnings {
        high_added_sugar: record.added_sugars >= limits.added_sugar,
        high_saturated_fat: record.saturated_fat >= limits.saturated_fat,
        high_sodium: record.sodium >= limits.sodium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Micronutrients;

    fn record_with_sodium_and_carbs() -> NutritionRecord {
        NutritionRecord {
            sodium: 600.0,
            carbohydrates: 20.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_portion_value_is_unrounded() {
        assert_eq!(derive_portion_value(12.34, 30.0), 12.34 * 30.0 / 100.0);
        assert_eq!(derive_portion_value(600.0, 50.0), 300.0);
        assert_eq!(derive_portion_value(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_percent_dv_zero_reference() {
        assert_eq!(derive_percent_dv(123.0, 0.0), 0);
        assert_eq!(derive_percent_dv(-4.0, 0.0), 0);
    }

    #[test]
    fn test_percent_dv_at_reference_is_100() {
        assert_eq!(derive_percent_dv(2400.0, 2400.0), 100);
        assert_eq!(derive_percent_dv(22.0, 22.0), 100);
    }

    #[test]
    fn test_percent_dv_rounding() {
        // 1 / 8 * 100 = 12.5 exactly
        assert_eq!(derive_percent_dv(1.0, 8.0), 13);
        assert_eq!(derive_percent_dv(-1.0, 8.0), -12);
        assert_eq!(derive_percent_dv(300.0, 2400.0), 13);
        assert_eq!(derive_percent_dv(10.0, 2000.0), 1);
        assert_eq!(derive_percent_dv(9.0, 2000.0), 0);
    }

    #[test]
    fn test_round_half_up_just_below_half() {
        assert_eq!(round_half_up(0.49999999999999994), 0);
        assert_eq!(round_half_up(f64::NAN), 0);
    }

    #[test]
    fn test_ten_mandatory_rows_in_order() {
        let rows = generate_table_rows(&record_with_sodium_and_carbs());
        let order: Vec<Nutrient> = rows.iter().map(|r| r.nutrient).collect();
        assert_eq!(order, Nutrient::MANDATORY.to_vec());

        let indents: Vec<u8> = rows.iter().map(|r| r.indent_level).collect();
        assert_eq!(indents, vec![0, 0, 1, 2, 0, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn test_declared_micronutrient_appends_after_sodium() {
        let record = NutritionRecord {
            micronutrients: Micronutrients {
                vitamin_c: Some(10.0),
                ..Default::default()
            },
            ..record_with_sodium_and_carbs()
        };
        let rows = generate_table_rows(&record);
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[9].nutrient, Nutrient::Sodium);
        assert_eq!(rows[10].nutrient, Nutrient::VitaminC);
        assert_eq!(rows[10].label, "Vitamina C (mg)");
        // 10 mg per 100 g, 100 g portion, 45 mg reference -> 22 %
        assert_eq!(rows[10].per_portion, "10,0");
        assert_eq!(rows[10].percent_dv, "22");
    }

    #[test]
    fn test_zero_or_negative_micronutrients_are_skipped() {
        let record = NutritionRecord {
            micronutrients: Micronutrients {
                vitamin_a: Some(0.0),
                iron: Some(-1.0),
                zinc: Some(3.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let rows = generate_table_rows(&record);
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[10].nutrient, Nutrient::Zinc);
    }

    #[test]
    fn test_micronutrients_keep_fixed_order() {
        let record = NutritionRecord {
            micronutrients: Micronutrients {
                zinc: Some(1.0),
                vitamin_a: Some(100.0),
                calcium: Some(200.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let tail: Vec<Nutrient> = generate_table_rows(&record)[10..]
            .iter()
            .map(|r| r.nutrient)
            .collect();
        assert_eq!(tail, vec![Nutrient::VitaminA, Nutrient::Calcium, Nutrient::Zinc]);
    }

    #[test]
    fn test_row_values() {
        let record = NutritionRecord {
            portion_size: 30.0,
            sodium: 400.0,
            energy_kcal: 450.0,
            ..Default::default()
        };
        let rows = generate_table_rows(&record);

        let energy = &rows[0];
        assert_eq!(energy.label, "Valor energético (kcal)");
        assert_eq!(energy.per_100, "450,0");
        assert_eq!(energy.per_portion, "135,0");
        assert_eq!(energy.percent_dv, "7");

        let sodium = &rows[9];
        assert_eq!(sodium.per_100, "400,0");
        assert_eq!(sodium.per_portion, "120,0");
        assert_eq!(sodium.percent_dv, "5");

        let protein = &rows[4];
        assert_eq!(protein.per_100, "0");
        assert_eq!(protein.per_portion, "0");
        assert_eq!(protein.percent_dv, "0");
    }

    #[test]
    fn test_generation_is_idempotent_and_total() {
        let record = NutritionRecord {
            portion_size: -10.0,
            total_fat: -5.0,
            sodium: f64::NAN,
            ..Default::default()
        };
        let first = generate_table_rows(&record);
        let second = generate_table_rows(&record);
        assert_eq!(first, second);
        assert_eq!(first[5].per_portion, "0,5");
    }

    #[test]
    fn test_solid_added_sugar_boundary() {
        let mut record = NutritionRecord {
            added_sugars: 15.0,
            ..Default::default()
        };
        assert!(calculate_front_warnings(&record).high_added_sugar);

        record.added_sugars = 14.9;
        assert!(!calculate_front_warnings(&record).high_added_sugar);
    }

    #[test]
    fn test_liquid_thresholds() {
        let liquid = NutritionRecord {
            is_liquid: true,
            sodium: 300.0,
            ..Default::default()
        };
        assert!(calculate_front_warnings(&liquid).high_sodium);

        let solid = NutritionRecord {
            is_liquid: false,
            ..liquid.clone()
        };
        assert!(!calculate_front_warnings(&solid).high_sodium);
    }

    #[test]
    fn test_all_boundaries_inclusive() {
        let solid = NutritionRecord {
            added_sugars: 15.0,
            saturated_fat: 6.0,
            sodium: 600.0,
            ..Default::default()
        };
        let warnings = calculate_front_warnings(&solid);
        assert!(warnings.high_added_sugar && warnings.high_saturated_fat && warnings.high_sodium);

        let liquid = NutritionRecord {
            is_liquid: true,
            added_sugars: 7.5,
            saturated_fat: 3.0,
            sodium: 299.9,
            ..Default::default()
        };
        let warnings = calculate_front_warnings(&liquid);
        assert!(warnings.high_added_sugar);
        assert!(warnings.high_saturated_fat);
        assert!(!warnings.high_sodium);
    }

    #[test]
    fn test_default_record_has_no_warnings() {
        assert!(!calculate_front_warnings(&NutritionRecord::default()).has_any());
    }
}
