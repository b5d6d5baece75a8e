//! PDF backend
//!
//! Paints a [`LabelSheet`] onto an A4 page with the built-in Helvetica fonts.

use printpdf::path::PaintMode;
use printpdf::*;

use super::sheet::{estimate_text_width, Align, Color as SheetColor, Element, LabelSheet};
use crate::error::LabelResult;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;

// ============================================================================
// PDF Helper Functions
// ============================================================================

fn rgb_to_printpdf(color: SheetColor) -> Color {
    Color::Rgb(Rgb::new(
        color.0 as f32 / 255.0,
        color.1 as f32 / 255.0,
        color.2 as f32 / 255.0,
        None,
    ))
}

/// Built-in fonts only cover Windows-1252
fn to_win_ansi(text: &str) -> String {
    text.replace('\u{03BC}', "\u{00B5}")
}

/// Converts sheet coordinates (top-left origin) to page coordinates
fn page_point(x: f32, y: f32) -> (Mm, Mm) {
    (Mm(MARGIN + x), Mm(PAGE_HEIGHT - MARGIN - y))
}

fn add_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    color: SheetColor,
) {
    let (px, py) = page_point(x, y);
    layer.set_fill_color(rgb_to_printpdf(color));
    layer.use_text(to_win_ansi(text), size, px, py, font);
}

fn add_line(layer: &PdfLayerReference, from: (f32, f32), to: (f32, f32), color: SheetColor, width_mm: f32) {
    layer.set_outline_color(rgb_to_printpdf(color));
    layer.set_outline_thickness(Mm(width_mm).into_pt().0);

    let (x1, y1) = page_point(from.0, from.1);
    let (x2, y2) = page_point(to.0, to.1);
    let line = Line {
        points: vec![(Point::new(x1, y1), false), (Point::new(x2, y2), false)],
        is_closed: false,
    };
    layer.add_line(line);
}

fn add_filled_rect(layer: &PdfLayerReference, x: f32, y: f32, width: f32, height: f32, color: SheetColor) {
    let (llx, lly) = page_point(x, y + height);
    let (urx, ury) = page_point(x + width, y);
    layer.set_fill_color(rgb_to_printpdf(color));
    layer.add_rect(Rect::new(llx, lly, urx, ury).with_mode(PaintMode::Fill));
}

/// Left edge of a text run anchored at `x`
fn aligned_x(x: f32, text: &str, size_pt: f32, bold: bool, align: Align) -> f32 {
    match align {
        Align::Left => x,
        Align::Center => x - estimate_text_width(text, size_pt, bold) / 2.0,
        Align::Right => x - estimate_text_width(text, size_pt, bold),
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a sheet as a single-page A4 PDF document
pub fn render_pdf(sheet: &LabelSheet, title: &str) -> LabelResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");

    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let font_bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let layer = doc.get_page(page).get_layer(layer);

    if sheet.height > PAGE_HEIGHT - 2.0 * MARGIN {
        tracing::warn!(
            "Label is {:.0} mm tall and will not fit on one page",
            sheet.height
        );
    }

    for element in &sheet.elements {
        match element {
            Element::FilledRect { x, y, width, height, color } => {
                add_filled_rect(&layer, *x, *y, *width, *height, *color);
            }
            Element::Rule { x1, y1, x2, y2, thickness, color } => {
                add_line(&layer, (*x1, *y1), (*x2, *y2), *color, *thickness);
            }
            Element::Text { x, y, text, size_pt, bold, color, align } => {
                let font = if *bold { &font_bold } else { &font };
                let left = aligned_x(*x, text, *size_pt, *bold, *align);
                add_text(&layer, font, text, left, *y, *size_pt, *color);
            }
        }
    }

    Ok(doc.save_to_bytes()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutritionRecord, TableFormat};
    use crate::render::layout::layout_label;

    #[test]
    fn test_win_ansi_mapping() {
        assert_eq!(to_win_ansi("Vitamina A (μg)"), "Vitamina A (µg)");
        assert_eq!(to_win_ansi("Sódio (mg)"), "Sódio (mg)");
    }

    #[test]
    fn test_page_point_flips_y() {
        let (x, y) = page_point(0.0, 0.0);
        assert_eq!(x, Mm(20.0));
        assert_eq!(y, Mm(277.0));
    }

    #[test]
    fn test_aligned_x() {
        let width = estimate_text_width("%VD*", 7.5, true);
        assert_eq!(aligned_x(50.0, "%VD*", 7.5, true, Align::Left), 50.0);
        assert!((aligned_x(50.0, "%VD*", 7.5, true, Align::Right) - (50.0 - width)).abs() < 1e-4);
        assert!((aligned_x(50.0, "%VD*", 7.5, true, Align::Center) - (50.0 - width / 2.0)).abs() < 1e-4);
    }

    #[test]
    fn test_render_pdf_bytes() {
        let record = NutritionRecord {
            product_name: "Suco de Laranja".to_string(),
            is_liquid: true,
            sodium: 350.0,
            ..Default::default()
        };
        for format in [TableFormat::Vertical, TableFormat::Horizontal, TableFormat::Linear] {
            let sheet = layout_label(&record, format);
            let bytes = render_pdf(&sheet, "Suco de Laranja").unwrap();
            assert!(bytes.starts_with(b"%PDF"));
            assert!(bytes.len() > 500);
        }
    }
}
