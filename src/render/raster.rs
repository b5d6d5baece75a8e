//! Bitmap and SVG backends
//!
//! Paints a [`LabelSheet`] through plotters, at 4 px/mm times the pixel ratio,
//! and encodes bitmaps with the `image` crate.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_bitmap::BitMapBackend;

use super::sheet::{Align, Element, LabelSheet, PT_TO_MM};
use crate::config::MAX_SCALE;
use crate::error::{LabelError, LabelResult};

/// Pixels per millimetre at 1x
pub const BASE_PX_PER_MM: f32 = 4.0;

/// White border around the label, in mm
const QUIET_ZONE: f32 = 3.0;

/// Pixel ratio limited to 1..=4
pub fn clamp_scale(scale: u32) -> u32 {
    scale.clamp(1, MAX_SCALE)
}

/// Pixel size of a sheet at the given ratio
pub fn pixel_size(sheet: &LabelSheet, scale: u32) -> (u32, u32) {
    let px_per_mm = BASE_PX_PER_MM * clamp_scale(scale) as f32;
    let w = ((sheet.width + 2.0 * QUIET_ZONE) * px_per_mm).ceil() as u32;
    let h = ((sheet.height + 2.0 * QUIET_ZONE) * px_per_mm).ceil() as u32;
    (w.max(1), h.max(1))
}

fn rgb(color: (u8, u8, u8)) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn paint<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    sheet: &LabelSheet,
    px_per_mm: f32,
) -> LabelResult<()> {
    let px = |mm: f32| ((mm + QUIET_ZONE) * px_per_mm).round() as i32;

    area.fill(&WHITE).map_err(LabelError::drawing)?;

    for element in &sheet.elements {
        match element {
            Element::FilledRect { x, y, width, height, color } => {
                let rect = Rectangle::new(
                    [(px(*x), px(*y)), (px(x + width), px(y + height))],
                    rgb(*color).filled(),
                );
                area.draw(&rect).map_err(LabelError::drawing)?;
            }
            Element::Rule { x1, y1, x2, y2, thickness, color } => {
                let stroke = ((thickness * px_per_mm).round() as u32).max(1);
                let line = PathElement::new(
                    vec![(px(*x1), px(*y1)), (px(*x2), px(*y2))],
                    rgb(*color).stroke_width(stroke),
                );
                area.draw(&line).map_err(LabelError::drawing)?;
            }
            Element::Text { x, y, text, size_pt, bold, color, align } => {
                let size_px = f64::from(size_pt * PT_TO_MM * px_per_mm);
                let weight = if *bold { FontStyle::Bold } else { FontStyle::Normal };
                let h_pos = match align {
                    Align::Left => HPos::Left,
                    Align::Center => HPos::Center,
                    Align::Right => HPos::Right,
                };
                let style = FontDesc::new(FontFamily::SansSerif, size_px, weight)
                    .color(&rgb(*color))
                    .pos(Pos::new(h_pos, VPos::Bottom));
                area.draw_text(text, &style, (px(*x), px(*y)))
                    .map_err(LabelError::drawing)?;
            }
        }
    }

    area.present().map_err(LabelError::drawing)?;
    Ok(())
}

/// Rasterize a sheet on a white background
pub fn render_bitmap(sheet: &LabelSheet, scale: u32) -> LabelResult<RgbImage> {
    let (width, height) = pixel_size(sheet, scale);
    let px_per_mm = BASE_PX_PER_MM * clamp_scale(scale) as f32;
    let mut buffer = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        paint(&root, sheet, px_per_mm)?;
    }

    RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| LabelError::Drawing("Failed to create image from buffer".to_string()))
}

pub fn encode_png(image: &RgbImage) -> LabelResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// JPEG at `quality` (1-100)
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> LabelResult<Vec<u8>> {
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100)).encode_image(image)?;
    Ok(bytes)
}

/// Render a sheet as an SVG document sized in pixels at the given ratio
pub fn render_svg(sheet: &LabelSheet, scale: u32) -> LabelResult<String> {
    let (width, height) = pixel_size(sheet, scale);
    let px_per_mm = BASE_PX_PER_MM * clamp_scale(scale) as f32;
    let mut svg = String::new();

    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        paint(&root, sheet, px_per_mm)?;
    }

    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutritionRecord, TableFormat};
    use crate::render::layout::layout_label;
    use crate::render::sheet::{COLOR_BLACK, COLOR_WHITE};

    /// Title bar and rules only; bitmap text needs system fonts
    fn boxes_only() -> LabelSheet {
        let mut sheet = LabelSheet::new(40.0);
        sheet.rect(0.0, 0.0, 40.0, 7.0, COLOR_BLACK);
        sheet.hrule(0.0, 40.0, 12.0, 0.8);
        sheet.frame(0.0, 0.0, 40.0, 20.0, 0.6);
        sheet.height = 20.0;
        sheet
    }

    #[test]
    fn test_clamp_scale() {
        assert_eq!(clamp_scale(0), 1);
        assert_eq!(clamp_scale(3), 3);
        assert_eq!(clamp_scale(9), 4);
    }

    #[test]
    fn test_pixel_size_follows_scale() {
        let sheet = boxes_only();
        assert_eq!(pixel_size(&sheet, 1), (184, 104));
        assert_eq!(pixel_size(&sheet, 2), (368, 208));
        assert_eq!(pixel_size(&sheet, 10), pixel_size(&sheet, 4));
    }

    #[test]
    fn test_bitmap_pixels() {
        let image = render_bitmap(&boxes_only(), 1).unwrap();
        assert_eq!(image.dimensions(), (184, 104));
        // Quiet zone stays white, title bar is black
        assert_eq!(image.get_pixel(2, 2).0, [255, 255, 255]);
        assert_eq!(image.get_pixel(90, 25).0, [0, 0, 0]);
        assert_eq!(image.get_pixel(90, 72).0, [255, 255, 255]);
    }

    #[test]
    fn test_png_signature() {
        let image = render_bitmap(&boxes_only(), 2).unwrap();
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 368);
    }

    #[test]
    fn test_jpeg_signature() {
        let image = render_bitmap(&boxes_only(), 1).unwrap();
        let bytes = encode_jpeg(&image, 95).unwrap();
        assert_eq!(&bytes[..3], &[0xFF, 0xD8, 0xFF]);
        assert!(encode_jpeg(&image, 0).is_ok());
    }

    #[test]
    fn test_svg_contains_label_text() {
        let record = NutritionRecord {
            sodium: 700.0,
            ..Default::default()
        };
        let svg = render_svg(&layout_label(&record, TableFormat::Vertical), 1).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("INFORMA"));
        assert!(svg.contains("Carboidratos (g)"));
        assert!(svg.contains("%VD*"));
        assert!(svg.contains("SÓDIO"));
    }

    #[test]
    fn test_svg_white_text() {
        let mut sheet = boxes_only();
        sheet.text(20.0, 5.0, "ALTO EM", 8.0, true, COLOR_WHITE, Align::Center);
        let svg = render_svg(&sheet, 2).unwrap();
        assert!(svg.contains("ALTO EM"));
        assert!(svg.to_uppercase().contains("#FFFFFF"));
    }
}
