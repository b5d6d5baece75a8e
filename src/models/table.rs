//! Derived label data
//!
//! Values computed from a [`NutritionRecord`](super::NutritionRecord); never stored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::nutrition::reference::Nutrient;

/// One formatted row of the nutrition facts table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub nutrient: Nutrient,
    /// Name and unit, e.g. "Sódio (mg)"
    pub label: String,
    pub per_100: String,
    pub per_portion: String,
    pub percent_dv: String,
    /// 0 = top level, 1 = "dos quais", 2 = nested twice
    pub indent_level: u8,
}

/// Front-of-pack "ALTO EM" flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontWarnings {
    pub high_added_sugar: bool,
    pub high_saturated_fat: bool,
    pub high_sodium: bool,
}

impl FrontWarnings {
    pub fn has_any(&self) -> bool {
        self.high_added_sugar || self.high_saturated_fat || self.high_sodium
    }

    /// Badge texts for the raised flags, in badge order
    pub fn active_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.high_added_sugar {
            labels.push("Açúcar Adicionado");
        }
        if self.high_saturated_fat {
            labels.push("Gordura Saturada");
        }
        if self.high_sodium {
            labels.push("Sódio");
        }
        labels
    }
}

/// Table layout variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    #[default]
    Vertical,
    Horizontal,
    /// Single paragraph for small packages
    Linear,
}

impl TableFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableFormat::Vertical => "vertical",
            TableFormat::Horizontal => "horizontal",
            TableFormat::Linear => "linear",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TableFormat::Vertical => "Vertical",
            TableFormat::Horizontal => "Horizontal",
            TableFormat::Linear => "Linear (embalagens pequenas)",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vertical" => Ok(TableFormat::Vertical),
            "horizontal" => Ok(TableFormat::Horizontal),
            "linear" => Ok(TableFormat::Linear),
            other => Err(format!("unknown table layout '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_labels_order() {
        let warnings = FrontWarnings {
            high_added_sugar: true,
            high_saturated_fat: false,
            high_sodium: true,
        };
        assert!(warnings.has_any());
        assert_eq!(warnings.active_labels(), vec!["Açúcar Adicionado", "Sódio"]);
    }

    #[test]
    fn test_no_warnings() {
        let warnings = FrontWarnings::default();
        assert!(!warnings.has_any());
        assert!(warnings.active_labels().is_empty());
    }

    #[test]
    fn test_table_format_parse() {
        assert_eq!("Linear".parse::<TableFormat>(), Ok(TableFormat::Linear));
        assert_eq!("horizontal".parse::<TableFormat>(), Ok(TableFormat::Horizontal));
        assert!("diagonal".parse::<TableFormat>().is_err());
        assert_eq!(TableFormat::Linear.display_name(), "Linear (embalagens pequenas)");
    }
}
