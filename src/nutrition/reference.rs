//! Reference tables
//!
//! Daily reference values, front-of-pack warning thresholds and the allergen
//! catalog. Everything here is `const` data (RDC 429/2020, IN 75/2020, RDC 727/2022).

use serde::{Deserialize, Serialize};

// ============================================================================
// Daily Reference Values (%VD denominators)
// ============================================================================

/// Daily reference intake for every declarable nutrient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyValues {
    pub energy_kcal: f64,
    pub carbohydrates: f64,   // g
    pub total_sugars: f64,    // g
    pub added_sugars: f64,    // g
    pub protein: f64,         // g
    pub total_fat: f64,       // g
    pub saturated_fat: f64,   // g
    pub trans_fat: f64,       // g
    pub dietary_fiber: f64,   // g
    pub sodium: f64,          // mg
    pub vitamin_a: f64,       // μg
    pub vitamin_c: f64,       // mg
    pub vitamin_d: f64,       // μg
    pub vitamin_e: f64,       // mg
    pub calcium: f64,         // mg
    pub iron: f64,            // mg
    pub potassium: f64,       // mg
    pub zinc: f64,            // mg
}

/// Reference values for a 2.000 kcal diet
pub const DAILY_VALUES: DailyValues = DailyValues {
    energy_kcal: 2000.0,
    carbohydrates: 300.0,
    total_sugars: 50.0,
    added_sugars: 50.0,
    protein: 75.0,
    total_fat: 55.0,
    saturated_fat: 22.0,
    trans_fat: 2.0,
    dietary_fiber: 25.0,
    sodium: 2400.0,
    vitamin_a: 600.0,
    vitamin_c: 45.0,
    vitamin_d: 5.0,
    vitamin_e: 10.0,
    calcium: 1000.0,
    iron: 14.0,
    potassium: 3500.0,
    zinc: 7.0,
};

// ============================================================================
// Front-of-pack Warning Thresholds
// ============================================================================

/// Per-100 limits at or above which the "ALTO EM" badge is mandatory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarningThresholds {
    pub added_sugar: f64,   // g
    pub saturated_fat: f64, // g
    pub sodium: f64,        // mg
}

/// Limits per 100 g
pub const SOLID_THRESHOLDS: WarningThresholds = WarningThresholds {
    added_sugar: 15.0,
    saturated_fat: 6.0,
    sodium: 600.0,
};

/// Limits per 100 ml
pub const LIQUID_THRESHOLDS: WarningThresholds = WarningThresholds {
    added_sugar: 7.5,
    saturated_fat: 3.0,
    sodium: 300.0,
};

impl WarningThresholds {
    pub fn for_product(is_liquid: bool) -> &'static WarningThresholds {
        if is_liquid {
            &LIQUID_THRESHOLDS
        } else {
            &SOLID_THRESHOLDS
        }
    }
}

// ============================================================================
// Nutrient Descriptors
// ============================================================================

/// A row of the nutrition facts table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    Energy,
    Carbohydrates,
    TotalSugars,
    AddedSugars,
    Protein,
    TotalFat,
    SaturatedFat,
    TransFat,
    DietaryFiber,
    Sodium,
    VitaminA,
    VitaminC,
    VitaminD,
    VitaminE,
    Calcium,
    Iron,
    Potassium,
    Zinc,
}

impl Nutrient {
    /// Mandatory rows, in table order
    pub const MANDATORY: [Nutrient; 10] = [
        Nutrient::Energy,
        Nutrient::Carbohydrates,
        Nutrient::TotalSugars,
        Nutrient::AddedSugars,
        Nutrient::Protein,
        Nutrient::TotalFat,
        Nutrient::SaturatedFat,
        Nutrient::TransFat,
        Nutrient::DietaryFiber,
        Nutrient::Sodium,
    ];

    /// Optional vitamin and mineral rows, in table order
    pub const MICRONUTRIENTS: [Nutrient; 8] = [
        Nutrient::VitaminA,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::VitaminE,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::Potassium,
        Nutrient::Zinc,
    ];

    /// Display name as printed on the label
    pub fn display_name(&self) -> &'static str {
        match self {
            Nutrient::Energy => "Valor energético",
            Nutrient::Carbohydrates => "Carboidratos",
            Nutrient::TotalSugars => "Açúcares totais",
            Nutrient::AddedSugars => "Açúcares adicionados",
            Nutrient::Protein => "Proteínas",
            Nutrient::TotalFat => "Gorduras totais",
            Nutrient::SaturatedFat => "Gorduras saturadas",
            Nutrient::TransFat => "Gorduras trans",
            Nutrient::DietaryFiber => "Fibras alimentares",
            Nutrient::Sodium => "Sódio",
            Nutrient::VitaminA => "Vitamina A",
            Nutrient::VitaminC => "Vitamina C",
            Nutrient::VitaminD => "Vitamina D",
            Nutrient::VitaminE => "Vitamina E",
            Nutrient::Calcium => "Cálcio",
            Nutrient::Iron => "Ferro",
            Nutrient::Potassium => "Potássio",
            Nutrient::Zinc => "Zinco",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Energy => "kcal",
            Nutrient::Sodium => "mg",
            Nutrient::VitaminA | Nutrient::VitaminD => "μg",
            Nutrient::VitaminC
            | Nutrient::VitaminE
            | Nutrient::Calcium
            | Nutrient::Iron
            | Nutrient::Potassium
            | Nutrient::Zinc => "mg",
            _ => "g",
        }
    }

    /// Nesting under the previous top-level row (0 = top level)
    pub fn indent_level(&self) -> u8 {
        match self {
            Nutrient::TotalSugars | Nutrient::SaturatedFat | Nutrient::TransFat => 1,
            Nutrient::AddedSugars => 2,
            _ => 0,
        }
    }

    pub fn daily_value(&self) -> f64 {
        let dv = &DAILY_VALUES;
        match self {
            Nutrient::Energy => dv.energy_kcal,
            Nutrient::Carbohydrates => dv.carbohydrates,
            Nutrient::TotalSugars => dv.total_sugars,
            Nutrient::AddedSugars => dv.added_sugars,
            Nutrient::Protein => dv.protein,
            Nutrient::TotalFat => dv.total_fat,
            Nutrient::SaturatedFat => dv.saturated_fat,
            Nutrient::TransFat => dv.trans_fat,
            Nutrient::DietaryFiber => dv.dietary_fiber,
            Nutrient::Sodium => dv.sodium,
            Nutrient::VitaminA => dv.vitamin_a,
            Nutrient::VitaminC => dv.vitamin_c,
            Nutrient::VitaminD => dv.vitamin_d,
            Nutrient::VitaminE => dv.vitamin_e,
            Nutrient::Calcium => dv.calcium,
            Nutrient::Iron => dv.iron,
            Nutrient::Potassium => dv.potassium,
            Nutrient::Zinc => dv.zinc,
        }
    }

    /// Table label, e.g. "Sódio (mg)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name(), self.unit())
    }
}

// ============================================================================
// Allergen Catalog
// ============================================================================

/// The declarable allergenic substances
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Allergen {
    Wheat,
    Rye,
    Barley,
    Oats,
    Crustaceans,
    Eggs,
    Fish,
    Peanuts,
    Soy,
    Milk,
    Almonds,
    Hazelnuts,
    Cashews,
    BrazilNuts,
    Macadamias,
    Walnuts,
    Pecans,
    Pistachios,
    PineNuts,
    Chestnuts,
    Latex,
}

/// One catalog entry: wire id and printed label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllergenEntry {
    pub allergen: Allergen,
    pub id: &'static str,
    pub label: &'static str,
}

const fn entry(allergen: Allergen, id: &'static str, label: &'static str) -> AllergenEntry {
    AllergenEntry { allergen, id, label }
}

/// Catalog in declaration order; indexed by `Allergen as usize`
pub const ALLERGEN_CATALOG: [AllergenEntry; 21] = [
    entry(Allergen::Wheat, "wheat", "Trigo"),
    entry(Allergen::Rye, "rye", "Centeio"),
    entry(Allergen::Barley, "barley", "Cevada"),
    entry(Allergen::Oats, "oats", "Aveia"),
    entry(Allergen::Crustaceans, "crustaceans", "Crustáceos"),
    entry(Allergen::Eggs, "eggs", "Ovos"),
    entry(Allergen::Fish, "fish", "Peixes"),
    entry(Allergen::Peanuts, "peanuts", "Amendoim"),
    entry(Allergen::Soy, "soy", "Soja"),
    entry(Allergen::Milk, "milk", "Leite"),
    entry(Allergen::Almonds, "almonds", "Amêndoa"),
    entry(Allergen::Hazelnuts, "hazelnuts", "Avelãs"),
    entry(Allergen::Cashews, "cashews", "Castanha-de-caju"),
    entry(Allergen::BrazilNuts, "brazilNuts", "Castanha-do-brasil"),
    entry(Allergen::Macadamias, "macadamias", "Macadâmias"),
    entry(Allergen::Walnuts, "walnuts", "Nozes"),
    entry(Allergen::Pecans, "pecans", "Pecãs"),
    entry(Allergen::Pistachios, "pistachios", "Pistaches"),
    entry(Allergen::PineNuts, "pineNuts", "Pinoli"),
    entry(Allergen::Chestnuts, "chestnuts", "Castanhas"),
    entry(Allergen::Latex, "latex", "Látex natural"),
];

impl Allergen {
    pub fn entry(self) -> &'static AllergenEntry {
        &ALLERGEN_CATALOG[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.entry().id
    }

    pub fn label(self) -> &'static str {
        self.entry().label
    }

    pub fn from_id(id: &str) -> Option<Self> {
        ALLERGEN_CATALOG
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.allergen)
    }
}
