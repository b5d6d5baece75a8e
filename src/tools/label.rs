//! Label data tools
//!
//! Reads a nutrition record and builds the JSON responses printed by the CLI.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::LabelResult;
use crate::models::{FrontWarnings, NutritionRecord, TableFormat, TableRow};
use crate::nutrition::reference::WarningThresholds;
use crate::nutrition::{
    calculate_front_warnings, compose_declarations, generate_table_rows, MandatoryDeclarations,
};
use crate::render::{linear_paragraph, portion_summary};

// ============================================================================
// Input
// ============================================================================

/// Decode a record from any JSON source
pub fn read_record<R: Read>(reader: R) -> LabelResult<NutritionRecord> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a record from a file, or from stdin when `path` is `None` or `-`
pub fn load_record(path: Option<&Path>) -> LabelResult<NutritionRecord> {
    match path {
        Some(p) if p != Path::new("-") => {
            debug!("Reading nutrition record from {}", p.display());
            let file = File::open(p)?;
            read_record(BufReader::new(file))
        }
        _ => {
            debug!("Reading nutrition record from stdin");
            read_record(io::stdin().lock())
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Portion header data
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortionInfo {
    pub unit: &'static str,
    pub per_package: String,
    pub portion: String,
}

/// Response for `table`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse {
    pub product_name: String,
    pub portion: PortionInfo,
    pub rows: Vec<TableRow>,
}

/// Response for `warnings`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningsResponse {
    pub is_liquid: bool,
    pub warnings: FrontWarnings,
    pub has_any: bool,
    pub labels: Vec<&'static str>,
    /// Limits the record was checked against, per 100 g or 100 ml
    pub added_sugar_limit: f64,
    pub saturated_fat_limit: f64,
    pub sodium_limit: f64,
}

/// Response for `summary`: everything printed on the label
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSummary {
    pub product_name: String,
    pub portion: PortionInfo,
    pub rows: Vec<TableRow>,
    pub warnings: FrontWarnings,
    pub warning_labels: Vec<&'static str>,
    pub declarations: MandatoryDeclarations,
    /// Text of the linear layout
    pub linear_text: String,
    pub layouts: Vec<&'static str>,
}

// ============================================================================
// Tools
// ============================================================================

fn portion_info(record: &NutritionRecord) -> PortionInfo {
    let summary = portion_summary(record);
    PortionInfo {
        unit: record.unit(),
        per_package: summary.per_package,
        portion: summary.portion,
    }
}

pub fn table_response(record: &NutritionRecord) -> TableResponse {
    TableResponse {
        product_name: record.product_name.clone(),
        portion: portion_info(record),
        rows: generate_table_rows(record),
    }
}

pub fn warnings_response(record: &NutritionRecord) -> WarningsResponse {
    let warnings = calculate_front_warnings(record);
    let limits = WarningThresholds::for_product(record.is_liquid);
    WarningsResponse {
        is_liquid: record.is_liquid,
        has_any: warnings.has_any(),
        labels: warnings.active_labels(),
        warnings,
        added_sugar_limit: limits.added_sugar,
        saturated_fat_limit: limits.saturated_fat,
        sodium_limit: limits.sodium,
    }
}

pub fn declarations_response(record: &NutritionRecord) -> MandatoryDeclarations {
    compose_declarations(record)
}

pub fn label_summary(record: &NutritionRecord) -> LabelSummary {
    let rows = generate_table_rows(record);
    let warnings = calculate_front_warnings(record);

    LabelSummary {
        product_name: record.product_name.clone(),
        portion: portion_info(record),
        linear_text: linear_paragraph(record, &rows),
        rows,
        warning_labels: warnings.active_labels(),
        warnings,
        declarations: compose_declarations(record),
        layouts: [TableFormat::Vertical, TableFormat::Horizontal, TableFormat::Linear]
            .iter()
            .map(|f| f.display_name())
            .collect(),
    }
}
