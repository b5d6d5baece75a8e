//! Nutrition record
//!
//! The single input of the label: per-100 g/ml nutrient values plus product,
//! portion and allergen data. Field names on the wire match the label editor.

use serde::{Deserialize, Serialize};

use super::allergen::AllergenSelection;
use crate::nutrition::reference::Nutrient;

/// Gluten declaration, always printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GlutenStatus {
    Contains,
    #[default]
    Free,
}

/// Lactose declaration, printed only for `Contains`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LactoseStatus {
    Contains,
    #[default]
    None,
}

/// Optional vitamins and minerals per 100 g/ml
///
/// `None` means not declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Micronutrients {
    #[serde(rename = "vitaminA100g", default, skip_serializing_if = "Option::is_none")]
    pub vitamin_a: Option<f64>, // μg
    #[serde(rename = "vitaminC100g", default, skip_serializing_if = "Option::is_none")]
    pub vitamin_c: Option<f64>, // mg
    #[serde(rename = "vitaminD100g", default, skip_serializing_if = "Option::is_none")]
    pub vitamin_d: Option<f64>, // μg
    #[serde(rename = "vitaminE100g", default, skip_serializing_if = "Option::is_none")]
    pub vitamin_e: Option<f64>, // mg
    #[serde(rename = "calcium100g", default, skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>, // mg
    #[serde(rename = "iron100g", default, skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>, // mg
    #[serde(rename = "potassium100g", default, skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>, // mg
    #[serde(rename = "zinc100g", default, skip_serializing_if = "Option::is_none")]
    pub zinc: Option<f64>, // mg
}

impl Micronutrients {
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::VitaminA => self.vitamin_a,
            Nutrient::VitaminC => self.vitamin_c,
            Nutrient::VitaminD => self.vitamin_d,
            Nutrient::VitaminE => self.vitamin_e,
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
            Nutrient::Potassium => self.potassium,
            Nutrient::Zinc => self.zinc,
            _ => None,
        }
    }
}

/// Everything needed to compute a nutrition facts label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NutritionRecord {
    pub product_name: String,
    pub portions_per_package: u32,
    /// Grams, or millilitres when `is_liquid`
    pub portion_size: f64,
    pub portion_description: String,
    pub is_liquid: bool,

    #[serde(rename = "energyKcal100g")]
    pub energy_kcal: f64,
    #[serde(rename = "carbohydrates100g")]
    pub carbohydrates: f64, // g
    #[serde(rename = "totalSugars100g")]
    pub total_sugars: f64, // g
    #[serde(rename = "addedSugars100g")]
    pub added_sugars: f64, // g
    #[serde(rename = "proteins100g")]
    pub protein: f64, // g
    #[serde(rename = "totalFats100g")]
    pub total_fat: f64, // g
    #[serde(rename = "saturatedFats100g")]
    pub saturated_fat: f64, // g
    #[serde(rename = "transFats100g")]
    pub trans_fat: f64, // g
    #[serde(rename = "dietaryFiber100g")]
    pub dietary_fiber: f64, // g
    #[serde(rename = "sodium100g")]
    pub sodium: f64, // mg

    #[serde(flatten)]
    pub micronutrients: Micronutrients,

    pub allergens: AllergenSelection,
    pub gluten_status: GlutenStatus,
    pub lactose_status: LactoseStatus,
}

impl Default for NutritionRecord {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            portions_per_package: 1,
            portion_size: 100.0,
            portion_description: "(medida caseira)".to_string(),
            is_liquid: false,
            energy_kcal: 0.0,
            carbohydrates: 0.0,
            total_sugars: 0.0,
            added_sugars: 0.0,
            protein: 0.0,
            total_fat: 0.0,
            saturated_fat: 0.0,
            trans_fat: 0.0,
            dietary_fiber: 0.0,
            sodium: 0.0,
            micronutrients: Micronutrients::default(),
            allergens: AllergenSelection::default(),
            gluten_status: GlutenStatus::default(),
            lactose_status: LactoseStatus::default(),
        }
    }
}

impl NutritionRecord {
    /// Per-100 value of a nutrient; `None` only for undeclared micronutrients
    pub fn value_per_100(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Energy => Some(self.energy_kcal),
            Nutrient::Carbohydrates => Some(self.carbohydrates),
            Nutrient::TotalSugars => Some(self.total_sugars),
            Nutrient::AddedSugars => Some(self.added_sugars),
            Nutrient::Protein => Some(self.protein),
            Nutrient::TotalFat => Some(self.total_fat),
            Nutrient::SaturatedFat => Some(self.saturated_fat),
            Nutrient::TransFat => Some(self.trans_fat),
            Nutrient::DietaryFiber => Some(self.dietary_fiber),
            Nutrient::Sodium => Some(self.sodium),
            other => self.micronutrients.get(other),
        }
    }

    /// "ml" for liquids, "g" otherwise
    pub fn unit(&self) -> &'static str {
        if self.is_liquid {
            "ml"
        } else {
            "g"
        }
    }
}
