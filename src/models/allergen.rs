//! Allergen selection model
//!
//! Three independent declarations (RDC 727/2022): "contém", "contém derivados de"
//! and "pode conter". An allergen may sit in more than one of them at once.

use serde::{Deserialize, Serialize};

use crate::nutrition::allergens::allergen_label;
use crate::nutrition::reference::Allergen;

/// An allergen id as received from input
///
/// Catalog ids decode to `Known`; anything else is kept verbatim so that
/// decoding never fails and the id can still be printed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AllergenCode {
    Known(Allergen),
    Unknown(String),
}

impl AllergenCode {
    pub fn id(&self) -> &str {
        match self {
            AllergenCode::Known(a) => a.id(),
            AllergenCode::Unknown(id) => id,
        }
    }

    /// Printed label; unknown ids print as themselves
    pub fn label(&self) -> &str {
        match self {
            AllergenCode::Known(a) => a.label(),
            AllergenCode::Unknown(id) => allergen_label(id),
        }
    }
}

impl From<Allergen> for AllergenCode {
    fn from(allergen: Allergen) -> Self {
        AllergenCode::Known(allergen)
    }
}

impl From<&str> for AllergenCode {
    fn from(id: &str) -> Self {
        match Allergen::from_id(id) {
            Some(a) => AllergenCode::Known(a),
            None => AllergenCode::Unknown(id.to_string()),
        }
    }
}

/// Which declaration an allergen belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AllergenCategory {
    Contains,
    ContainsDerivatives,
    MayContain,
}

impl AllergenCategory {
    /// Declaration order on the label
    pub const ALL: [AllergenCategory; 3] = [
        AllergenCategory::Contains,
        AllergenCategory::ContainsDerivatives,
        AllergenCategory::MayContain,
    ];

    /// Clause lead-in, lower case as in running text
    pub fn lead_in(&self) -> &'static str {
        match self {
            AllergenCategory::Contains => "contém",
            AllergenCategory::ContainsDerivatives => "derivados de",
            AllergenCategory::MayContain => "pode conter",
        }
    }
}

/// Allergen declarations of a product
///
/// Each list behaves as an insertion-ordered set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllergenSelection {
    pub contains: Vec<AllergenCode>,
    pub contains_derivatives: Vec<AllergenCode>,
    pub may_contain: Vec<AllergenCode>,
}

impl AllergenSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: AllergenCategory) -> &[AllergenCode] {
        match category {
            AllergenCategory::Contains => &self.contains,
            AllergenCategory::ContainsDerivatives => &self.contains_derivatives,
            AllergenCategory::MayContain => &self.may_contain,
        }
    }

    fn get_mut(&mut self, category: AllergenCategory) -> &mut Vec<AllergenCode> {
        match category {
            AllergenCategory::Contains => &mut self.contains,
            AllergenCategory::ContainsDerivatives => &mut self.contains_derivatives,
            AllergenCategory::MayContain => &mut self.may_contain,
        }
    }

    /// Builder form of [`AllergenSelection::insert`]
    pub fn with(mut self, category: AllergenCategory, code: impl Into<AllergenCode>) -> Self {
        self.insert(category, code);
        self
    }

    /// Add an allergen to a declaration; returns false if it was already there
    pub fn insert(&mut self, category: AllergenCategory, code: impl Into<AllergenCode>) -> bool {
        let code = code.into();
        let list = self.get_mut(category);
        if list.contains(&code) {
            return false;
        }
        list.push(code);
        true
    }

    /// Remove an allergen from a declaration; returns false if it was absent
    pub fn remove(&mut self, category: AllergenCategory, code: &AllergenCode) -> bool {
        let list = self.get_mut(category);
        let before = list.len();
        list.retain(|c| c != code);
        list.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.contains.is_empty() && self.contains_derivatives.is_empty() && self.may_contain.is_empty()
    }
}
