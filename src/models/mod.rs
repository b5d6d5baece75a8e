//! Data models
//!
//! Label input (the nutrition record) and the values derived from it.

mod allergen;
mod record;
mod table;

pub use allergen::{AllergenCategory, AllergenCode, AllergenSelection};
pub use record::{GlutenStatus, LactoseStatus, Micronutrients, NutritionRecord};
pub use table::{FrontWarnings, TableFormat, TableRow};

pub use crate::nutrition::reference::{Allergen, Nutrient};
