//! Label layout
//!
//! Places the nutrition facts table, the front-of-pack badge, the mandatory
//! declarations and the footer on a [`LabelSheet`]. All measures are in mm.

use super::sheet::{
    estimate_text_width, wrap_text, Align, LabelSheet, COLOR_BLACK, COLOR_MUTED, COLOR_WHITE,
};
use crate::models::{FrontWarnings, NutritionRecord, TableFormat, TableRow};
use crate::nutrition::{
    calculate_front_warnings, compose_declarations, format_quantity, generate_table_rows,
    MandatoryDeclarations,
};

// ============================================================================
// Text Constants
// ============================================================================

pub const TABLE_TITLE: &str = "INFORMAÇÃO NUTRICIONAL";
pub const DV_FOOTNOTE: &str = "*Percentual de valores diários fornecidos pela porção.";
pub const DECLARATIONS_TITLE: &str = "DECLARAÇÕES OBRIGATÓRIAS";
pub const BADGE_TITLE: &str = "ALTO EM";
pub const FOOTER_LINES: [&str; 2] = [
    "Tabela gerada conforme RDC 429/2020, IN 75/2020 e RDC 727/2022 da ANVISA.",
    "Valores diários de referência baseados em uma dieta de 2.000 kcal.",
];

const VERTICAL_WIDTH: f32 = 90.0;
const HORIZONTAL_WIDTH: f32 = 170.0;
const LINEAR_WIDTH: f32 = 120.0;

const PAD: f32 = 2.0;
const SECTION_GAP: f32 = 6.0;
const ROW_HEIGHT: f32 = 4.5;
const INDENT_STEP: f32 = 3.0;
const THICK: f32 = 0.8;
const THIN: f32 = 0.2;

const BADGE_HEIGHT: f32 = 12.0;
const BADGE_GAP: f32 = 1.0;

// ============================================================================
// Text Builders
// ============================================================================

/// Portion lines printed under the table title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortionSummary {
    /// "Porções por embalagem: 4 porções"
    pub per_package: String,
    /// "Porção: 30 g (3 unidades)"
    pub portion: String,
    /// Portion column header, e.g. "30 g"
    pub portion_header: String,
}

pub fn portion_summary(record: &NutritionRecord) -> PortionSummary {
    let unit = record.unit();
    let size = format_quantity(record.portion_size);
    let count = format_quantity(f64::from(record.portions_per_package));

    let portion = format!("Porção: {} {} {}", size, unit, record.portion_description.trim());

    PortionSummary {
        per_package: format!("Porções por embalagem: {} porções", count),
        portion: portion.trim_end().to_string(),
        portion_header: format!("{} {}", size, unit),
    }
}

/// Entries of the linear table, e.g. "dos quais Gorduras trans 0 g (0 g, 0%)"
pub fn linear_entries(rows: &[TableRow]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            let prefix = if row.indent_level > 0 { "dos quais " } else { "" };
            let unit = row.nutrient.unit();
            format!(
                "{}{} {} {} ({} {}, {}%)",
                prefix,
                row.nutrient.display_name(),
                row.per_100,
                unit,
                row.per_portion,
                unit,
                row.percent_dv
            )
        })
        .collect()
}

/// The full linear paragraph, lead-in included
pub fn linear_paragraph(record: &NutritionRecord, rows: &[TableRow]) -> String {
    let unit = record.unit();
    format!(
        "Por 100 {} ({} {}, %VD*): {}.",
        unit,
        format_quantity(record.portion_size),
        unit,
        linear_entries(rows).join(" • ")
    )
}

// ============================================================================
// Layout
// ============================================================================

/// Lay out a complete label in the given table format
pub fn layout_label(record: &NutritionRecord, format: TableFormat) -> LabelSheet {
    let width = match format {
        TableFormat::Vertical => VERTICAL_WIDTH,
        TableFormat::Horizontal => HORIZONTAL_WIDTH,
        TableFormat::Linear => LINEAR_WIDTH,
    };
    let mut sheet = LabelSheet::new(width);
    let rows = generate_table_rows(record);
    let mut y = 0.0;

    let name = record.product_name.trim();
    if !name.is_empty() {
        for line in wrap_text(name, 12.0, true, width) {
            y += 5.0;
            sheet.text(0.0, y, line, 12.0, true, COLOR_BLACK, Align::Left);
        }
        y += 3.0;
    }

    y = match format {
        TableFormat::Vertical => draw_vertical_table(&mut sheet, record, &rows, y),
        TableFormat::Horizontal => draw_horizontal_table(&mut sheet, record, &rows, y),
        TableFormat::Linear => draw_linear_table(&mut sheet, record, &rows, y),
    };

    let warnings = calculate_front_warnings(record);
    if warnings.has_any() {
        y = draw_front_badge(&mut sheet, &warnings, y + SECTION_GAP);
    }

    y = draw_declarations(&mut sheet, &compose_declarations(record), y + SECTION_GAP);
    y = draw_footer(&mut sheet, y + SECTION_GAP);

    sheet.height = y + PAD;
    sheet
}

/// Title bar with white text on black; returns the y below it
fn draw_title_bar(sheet: &mut LabelSheet, x: f32, width: f32, y: f32) -> f32 {
    sheet.rect(x, y, width, 7.0, COLOR_BLACK);
    sheet.text(x + width / 2.0, y + 5.0, TABLE_TITLE, 10.0, true, COLOR_WHITE, Align::Center);
    y + 7.0
}

/// Right edges of the 100 g, portion and %VD columns
fn value_columns(right: f32, value_width: f32, dv_width: f32) -> [f32; 3] {
    [
        right - PAD - dv_width - value_width,
        right - PAD - dv_width,
        right - PAD,
    ]
}

fn draw_value_header(
    sheet: &mut LabelSheet,
    columns: &[f32; 3],
    summary: &PortionSummary,
    unit: &str,
    y: f32,
    color: (u8, u8, u8),
) {
    let headers = [format!("100 {}", unit), summary.portion_header.clone(), "%VD*".to_string()];
    for (x, header) in columns.iter().zip(headers) {
        sheet.text(*x, y, header, 7.5, true, color, Align::Right);
    }
}

fn draw_rows(sheet: &mut LabelSheet, rows: &[TableRow], left: f32, columns: &[f32; 3], y: f32) -> f32 {
    let mut y = y;
    for row in rows {
        y += ROW_HEIGHT;
        let x = left + PAD + INDENT_STEP * f32::from(row.indent_level);
        sheet.text(x, y, row.label.as_str(), 7.5, false, COLOR_BLACK, Align::Left);
        let values = [&row.per_100, &row.per_portion, &row.percent_dv];
        for (col, value) in columns.iter().zip(values) {
            sheet.text(*col, y, value.as_str(), 7.5, false, COLOR_BLACK, Align::Right);
        }
        y += 1.3;
        sheet.hrule(left, columns[2] + PAD, y, THIN);
    }
    y
}

fn draw_vertical_table(sheet: &mut LabelSheet, record: &NutritionRecord, rows: &[TableRow], y: f32) -> f32 {
    let width = sheet.width;
    let top = y;
    let summary = portion_summary(record);

    let mut y = draw_title_bar(sheet, 0.0, width, y);
    y += 4.5;
    sheet.text(PAD, y, summary.per_package.as_str(), 8.0, false, COLOR_BLACK, Align::Left);
    y += 4.0;
    sheet.text(PAD, y, summary.portion.as_str(), 8.0, false, COLOR_BLACK, Align::Left);
    y += 2.5;
    sheet.hrule(0.0, width, y, THICK);

    let columns = value_columns(width, 18.0, 16.0);
    y += 4.5;
    draw_value_header(sheet, &columns, &summary, record.unit(), y, COLOR_BLACK);
    y += 1.5;
    sheet.hrule(0.0, width, y, THICK);

    y = draw_rows(sheet, rows, 0.0, &columns, y);

    y += 4.0;
    sheet.text(PAD, y, DV_FOOTNOTE, 6.5, false, COLOR_MUTED, Align::Left);
    y += 2.0;

    sheet.frame(0.0, top, width, y - top, 0.6);
    y
}

fn draw_horizontal_table(sheet: &mut LabelSheet, record: &NutritionRecord, rows: &[TableRow], y: f32) -> f32 {
    const LEFT_WIDTH: f32 = 42.0;
    let width = sheet.width;
    let top = y;
    let summary = portion_summary(record);

    // Left column: title and portion information
    sheet.rect(0.0, top, LEFT_WIDTH, 11.0, COLOR_BLACK);
    sheet.text(LEFT_WIDTH / 2.0, top + 4.8, "INFORMAÇÃO", 9.0, true, COLOR_WHITE, Align::Center);
    sheet.text(LEFT_WIDTH / 2.0, top + 9.0, "NUTRICIONAL", 9.0, true, COLOR_WHITE, Align::Center);

    let mut left_y = top + 11.0 + 1.0;
    let portion_lines = [
        "Porções por emb.:".to_string(),
        format_quantity(f64::from(record.portions_per_package)),
        format!("Porção: {}", summary.portion_header),
    ];
    for (i, line) in portion_lines.into_iter().enumerate() {
        left_y += 3.8;
        sheet.text(PAD, left_y, line, 7.5, i == 1, COLOR_BLACK, Align::Left);
    }
    for line in wrap_text(&record.portion_description, 7.5, false, LEFT_WIDTH - 2.0 * PAD) {
        left_y += 3.8;
        sheet.text(PAD, left_y, line, 7.5, false, COLOR_BLACK, Align::Left);
    }

    // Right column: nutrient grid with a black header row
    let columns = value_columns(width, 24.0, 20.0);
    sheet.rect(LEFT_WIDTH, top, width - LEFT_WIDTH, 6.0, COLOR_BLACK);
    draw_value_header(sheet, &columns, &summary, record.unit(), top + 4.3, COLOR_WHITE);
    let right_y = draw_rows(sheet, rows, LEFT_WIDTH, &columns, top + 6.0);

    let bottom = left_y.max(right_y) + 1.0;
    sheet.rule(LEFT_WIDTH, top, LEFT_WIDTH, bottom, THICK);
    sheet.hrule(0.0, width, bottom, THIN);

    let mut y = bottom + 3.5;
    sheet.text(PAD, y, DV_FOOTNOTE, 6.5, false, COLOR_MUTED, Align::Left);
    y += 2.0;

    sheet.frame(0.0, top, width, y - top, 0.6);
    y
}

fn draw_linear_table(sheet: &mut LabelSheet, record: &NutritionRecord, rows: &[TableRow], y: f32) -> f32 {
    let width = sheet.width;
    let text_width = width - 2.0 * PAD;
    let top = y;
    let summary = portion_summary(record);

    let mut y = draw_title_bar(sheet, 0.0, width, y);
    y += 0.5;
    let portion_text = format!("{} • {}", summary.per_package, summary.portion);
    for line in wrap_text(&portion_text, 7.5, false, text_width) {
        y += 3.6;
        sheet.text(PAD, y, line, 7.5, false, COLOR_BLACK, Align::Left);
    }
    y += 2.0;
    sheet.hrule(0.0, width, y, THICK);

    y += 0.8;
    for line in wrap_text(&linear_paragraph(record, rows), 7.0, false, text_width) {
        y += 3.4;
        sheet.text(PAD, y, line, 7.0, false, COLOR_BLACK, Align::Left);
    }
    y += 2.0;
    sheet.hrule(0.0, width, y, THIN);

    y += 3.5;
    sheet.text(PAD, y, DV_FOOTNOTE, 6.5, false, COLOR_MUTED, Align::Left);
    y += 2.0;

    sheet.frame(0.0, top, width, y - top, 0.6);
    y
}

/// "ALTO EM" block followed by one block per raised flag, wrapping to new rows
fn draw_front_badge(sheet: &mut LabelSheet, warnings: &FrontWarnings, y: f32) -> f32 {
    let title_width = 18.0;
    sheet.rect(0.0, y, title_width, BADGE_HEIGHT, COLOR_BLACK);
    sheet.text(title_width / 2.0, y + 5.2, "ALTO", 8.0, true, COLOR_WHITE, Align::Center);
    sheet.text(title_width / 2.0, y + 9.2, "EM", 8.0, true, COLOR_WHITE, Align::Center);

    let mut x = title_width + BADGE_GAP;
    let mut row_top = y;
    for label in warnings.active_labels() {
        let text = label.to_uppercase();
        let block_width = estimate_text_width(&text, 8.0, true) + 6.0;
        if x + block_width > sheet.width && x > 0.0 {
            x = 0.0;
            row_top += BADGE_HEIGHT + BADGE_GAP;
        }
        sheet.rect(x, row_top, block_width, BADGE_HEIGHT, COLOR_BLACK);
        sheet.text(x + block_width / 2.0, row_top + 7.3, text, 8.0, true, COLOR_WHITE, Align::Center);
        x += block_width + BADGE_GAP;
    }
    row_top + BADGE_HEIGHT
}

fn draw_declarations(sheet: &mut LabelSheet, declarations: &MandatoryDeclarations, y: f32) -> f32 {
    let width = sheet.width;
    let mut y = y;
    sheet.text(0.0, y, DECLARATIONS_TITLE, 8.0, true, COLOR_BLACK, Align::Left);
    y += 1.2;
    sheet.hrule(0.0, width, y, 0.4);
    y += 0.5;

    for text in declarations.lines() {
        for line in wrap_text(text, 8.0, true, width) {
            y += 3.8;
            sheet.text(0.0, y, line, 8.0, true, COLOR_BLACK, Align::Left);
        }
        y += 0.8;
    }
    y
}

fn draw_footer(sheet: &mut LabelSheet, y: f32) -> f32 {
    let width = sheet.width;
    let mut y = y - 3.0;
    for text in FOOTER_LINES {
        for line in wrap_text(text, 6.5, false, width) {
            y += 3.0;
            sheet.text(0.0, y, line, 6.5, false, COLOR_MUTED, Align::Left);
        }
    }
    y
}
