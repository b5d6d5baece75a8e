//! Nutrition label module
//!
//! Reference tables, table derivation, number formatting and mandatory
//! declarations. Everything here is pure.

pub mod allergens;
pub mod calculations;
pub mod format;
pub mod reference;

pub use allergens::{
    allergen_label, compose_allergen_declaration, compose_allergen_declaration_compact,
    compose_declarations, gluten_declaration, lactose_declaration, MandatoryDeclarations,
};
pub use calculations::{
    calculate_front_warnings, derive_percent_dv, derive_portion_value, generate_table_rows,
};
pub use format::{format_number, format_number_default, format_percent_dv, format_quantity};
pub use reference::{Allergen, Nutrient, ALLERGEN_CATALOG, DAILY_VALUES};
