//! Mandatory declarations (RDC 727/2022)
//!
//! Builds the allergen sentence in its full and compact forms plus the gluten
//! and lactose statements. Pure and total.

use serde::Serialize;

use super::reference::ALLERGEN_CATALOG;
use crate::models::{
    AllergenCategory, AllergenCode, AllergenSelection, GlutenStatus, LactoseStatus,
    NutritionRecord,
};

/// Prefix of the full allergen sentence
pub const ALLERGEN_LEAD_IN: &str = "ALÉRGICOS:";

pub const CONTAINS_GLUTEN: &str = "CONTÉM GLÚTEN";
pub const GLUTEN_FREE: &str = "NÃO CONTÉM GLÚTEN";
pub const CONTAINS_LACTOSE: &str = "CONTÉM LACTOSE";

/// Label of a catalog id, or the id itself when it is not in the catalog
pub fn allergen_label(id: &str) -> &str {
    ALLERGEN_CATALOG
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.label)
        .unwrap_or(id)
}

/// "Leite, Soja" for one declaration, skipping repeated ids
fn joined_labels(codes: &[AllergenCode]) -> String {
    let mut seen: Vec<&AllergenCode> = Vec::with_capacity(codes.len());
    for code in codes {
        if !seen.contains(&code) {
            seen.push(code);
        }
    }
    seen.iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lower-case clauses ("contém Leite") for the non-empty declarations
fn clauses(selection: &AllergenSelection) -> Vec<String> {
    AllergenCategory::ALL
        .iter()
        .filter(|cat| !selection.get(**cat).is_empty())
        .map(|cat| format!("{} {}", cat.lead_in(), joined_labels(selection.get(*cat))))
        .collect()
}

/// Full sentence, e.g. "ALÉRGICOS: CONTÉM LEITE E PODE CONTER SOJA."
///
/// `None` when nothing is declared. Lactose is never part of this sentence.
pub fn compose_allergen_declaration(selection: &AllergenSelection) -> Option<String> {
    let parts = clauses(selection);
    if parts.is_empty() {
        return None;
    }
    Some(format!("{} {}.", ALLERGEN_LEAD_IN, parts.join(" e ")).to_uppercase())
}

/// Compact form for small printed labels: "CONTÉM LEITE E PODE CONTER SOJA"
pub fn compose_allergen_declaration_compact(selection: &AllergenSelection) -> Option<String> {
    let parts: Vec<String> = clauses(selection)
        .iter()
        .map(|clause| clause.to_uppercase())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join(" E "))
}

pub fn gluten_declaration(status: GlutenStatus) -> &'static str {
    match status {
        GlutenStatus::Contains => CONTAINS_GLUTEN,
        GlutenStatus::Free => GLUTEN_FREE,
    }
}

/// Only a positive lactose statement is printed
pub fn lactose_declaration(status: LactoseStatus) -> Option<&'static str> {
    match status {
        LactoseStatus::Contains => Some(CONTAINS_LACTOSE),
        LactoseStatus::None => None,
    }
}

/// All mandatory statements of one label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MandatoryDeclarations {
    pub allergens: Option<String>,
    pub allergens_compact: Option<String>,
    pub lactose: Option<&'static str>,
    pub gluten: &'static str,
}

impl MandatoryDeclarations {
    pub fn has_allergen_or_lactose(&self) -> bool {
        self.allergens.is_some() || self.lactose.is_some()
    }

    /// Printed lines in label order: allergens, lactose, gluten
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = Vec::with_capacity(3);
        if let Some(text) = &self.allergens {
            lines.push(text.as_str());
        }
        if let Some(text) = self.lactose {
            lines.push(text);
        }
        lines.push(self.gluten);
        lines
    }
}

pub fn compose_declarations(record: &NutritionRecord) -> MandatoryDeclarations {
    MandatoryDeclarations {
        allergens: compose_allergen_declaration(&record.allergens),
        allergens_compact: compose_allergen_declaration_compact(&record.allergens),
        lactose: lactose_declaration(record.lactose_status),
        gluten: gluten_declaration(record.gluten_status),
    }
}
