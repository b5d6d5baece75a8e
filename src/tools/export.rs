//! Export tool
//!
//! Renders a label as PDF, PNG, JPEG or SVG and writes it to disk.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ExportConfig;
use crate::error::{LabelError, LabelResult};
use crate::models::{NutritionRecord, TableFormat};
use crate::render::raster::{clamp_scale, pixel_size};
use crate::render::{encode_jpeg, encode_png, layout_label, render_bitmap, render_pdf, render_svg};

// ============================================================================
// Export Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Png,
    Jpg,
    Svg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
            ExportFormat::Jpg => "jpg",
            ExportFormat::Svg => "svg",
        }
    }

    pub fn is_image(&self) -> bool {
        !matches!(self, ExportFormat::Pdf)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpg),
            "svg" => Ok(ExportFormat::Svg),
            other => Err(format!("unknown export format '{}'", other)),
        }
    }
}

/// What to export and where
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub layout: TableFormat,
    /// Pixel ratio for images, clamped to 1..=4
    pub scale: u32,
    pub jpeg_quality: u8,
    /// Explicit target; defaults to a name derived from the record inside
    /// the configured output directory
    pub output: Option<PathBuf>,
}

impl ExportOptions {
    /// Options seeded from configuration
    pub fn from_config(config: &ExportConfig, format: ExportFormat) -> Self {
        Self {
            format,
            layout: TableFormat::default(),
            scale: config.scale,
            jpeg_quality: config.jpeg_quality,
            output: None,
        }
    }
}

/// Response for `export`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub success: bool,
    pub file_path: String,
    pub format: ExportFormat,
    pub layout: TableFormat,
    pub bytes_written: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_size: Option<(u32, u32)>,
    pub generated_at: DateTime<Utc>,
    pub message: String,
}

// ============================================================================
// File Names
// ============================================================================

/// Lower-case product name with whitespace runs replaced by '-'
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.chars()
                .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
                .collect::<String>()
                .to_lowercase()
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// `rotulo-{slug}.pdf` for PDFs, `tabela-nutricional.{ext}` for images
pub fn default_file_name(record: &NutritionRecord, format: ExportFormat) -> String {
    if format.is_image() {
        return format!("tabela-nutricional.{}", format.extension());
    }
    let slug = slugify(&record.product_name);
    if slug.is_empty() {
        "rotulo-nutricional.pdf".to_string()
    } else {
        format!("rotulo-{}.pdf", slug)
    }
}

// ============================================================================
// Export
// ============================================================================

/// Encoded label plus its pixel size for image formats
#[derive(Debug, Clone)]
pub struct RenderedLabel {
    pub bytes: Vec<u8>,
    pub pixel_size: Option<(u32, u32)>,
}

/// Render the label to bytes in the requested format
pub fn render_label(record: &NutritionRecord, options: &ExportOptions) -> LabelResult<RenderedLabel> {
    let sheet = layout_label(record, options.layout);
    let scale = clamp_scale(options.scale);

    let bytes = match options.format {
        ExportFormat::Pdf => {
            let title = match record.product_name.trim() {
                "" => "Tabela Nutricional",
                name => name,
            };
            render_pdf(&sheet, title)?
        }
        ExportFormat::Png => encode_png(&render_bitmap(&sheet, scale)?)?,
        ExportFormat::Jpg => encode_jpeg(&render_bitmap(&sheet, scale)?, options.jpeg_quality)?,
        ExportFormat::Svg => render_svg(&sheet, scale)?.into_bytes(),
    };

    Ok(RenderedLabel {
        bytes,
        pixel_size: options.format.is_image().then(|| pixel_size(&sheet, scale)),
    })
}

fn target_path(record: &NutritionRecord, options: &ExportOptions, config: &ExportConfig) -> PathBuf {
    match &options.output {
        Some(path) => path.clone(),
        None => config.output_dir.join(default_file_name(record, options.format)),
    }
}

/// Render and write a label; returns where it went
pub fn export_label(
    record: &NutritionRecord,
    options: &ExportOptions,
    config: &ExportConfig,
) -> LabelResult<ExportResponse> {
    if options.scale != clamp_scale(options.scale) {
        return Err(LabelError::InvalidOption(format!(
            "scale must be between 1 and 4, got {}",
            options.scale
        )));
    }

    let path = target_path(record, options, config);
    info!(
        "Exporting {} label as {} to {}",
        options.layout,
        options.format,
        path.display()
    );

    let rendered = render_label(record, options)?;
    write_file(&path, &rendered.bytes)?;

    let file_path = path.display().to_string();
    let message = match rendered.pixel_size {
        Some((w, h)) => format!(
            "{} exported at {}x ({}x{} px) to {}",
            options.format.extension().to_uppercase(),
            options.scale,
            w,
            h,
            file_path
        ),
        None => format!("PDF exported to {}", file_path),
    };
    info!("{}", message);

    Ok(ExportResponse {
        success: true,
        file_path,
        format: options.format,
        layout: options.layout,
        bytes_written: rendered.bytes.len(),
        pixel_size: rendered.pixel_size,
        generated_at: Utc::now(),
        message,
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> LabelResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> NutritionRecord {
        NutritionRecord {
            product_name: name.to_string(),
            ..Default::default()
        }
    }

    fn config_in(dir: &Path) -> ExportConfig {
        ExportConfig {
            output_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("PDF".parse::<ExportFormat>(), Ok(ExportFormat::Pdf));
        assert_eq!("jpeg".parse::<ExportFormat>(), Ok(ExportFormat::Jpg));
        assert_eq!("svg".parse::<ExportFormat>(), Ok(ExportFormat::Svg));
        assert!("gif".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Jpg.to_string(), "jpg");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Biscoito de Polvilho"), "biscoito-de-polvilho");
        assert_eq!(slugify("  Pão   Francês "), "pão-francês");
        assert_eq!(slugify("Leite 1/2 Desnatado"), "leite-1-2-desnatado");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(default_file_name(&named("Granola Crocante"), ExportFormat::Pdf), "rotulo-granola-crocante.pdf");
        assert_eq!(default_file_name(&named(""), ExportFormat::Pdf), "rotulo-nutricional.pdf");
        assert_eq!(default_file_name(&named("Granola"), ExportFormat::Png), "tabela-nutricional.png");
        assert_eq!(default_file_name(&named(""), ExportFormat::Jpg), "tabela-nutricional.jpg");
        assert_eq!(default_file_name(&named(""), ExportFormat::Svg), "tabela-nutricional.svg");
    }

    #[test]
    fn test_export_pdf_to_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let options = ExportOptions::from_config(&config, ExportFormat::Pdf);

        let response = export_label(&named("Granola Crocante"), &options, &config).unwrap();
        let expected = dir.path().join("rotulo-granola-crocante.pdf");
        assert!(response.success);
        assert_eq!(response.file_path, expected.display().to_string());
        assert_eq!(response.pixel_size, None);

        let bytes = fs::read(&expected).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(bytes.len(), response.bytes_written);
    }

    #[test]
    fn test_export_svg_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let target = dir.path().join("saida").join("rotulo.svg");
        let options = ExportOptions {
            layout: TableFormat::Linear,
            scale: 2,
            output: Some(target.clone()),
            ..ExportOptions::from_config(&config, ExportFormat::Svg)
        };

        let response = export_label(&named("Granola"), &options, &config).unwrap();
        assert_eq!(response.layout, TableFormat::Linear);
        assert!(response.pixel_size.is_some());
        assert!(response.message.starts_with("SVG exported at 2x"));

        let svg = fs::read_to_string(&target).unwrap();
        assert!(svg.contains("Por 100 g (100 g, %VD*):"));
    }

    #[test]
    fn test_export_rejects_bad_scale() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let options = ExportOptions {
            scale: 7,
            ..ExportOptions::from_config(&config, ExportFormat::Png)
        };
        let err = export_label(&named(""), &options, &config).unwrap_err();
        assert!(matches!(err, LabelError::InvalidOption(_)));
        assert!(!dir.path().join("tabela-nutricional.png").exists());
    }

    #[test]
    fn test_response_json() {
        let response = ExportResponse {
            success: true,
            file_path: "rotulo-nutricional.pdf".to_string(),
            format: ExportFormat::Pdf,
            layout: TableFormat::Vertical,
            bytes_written: 1024,
            pixel_size: None,
            generated_at: DateTime::from_timestamp(1_760_000_000, 0).unwrap(),
            message: "PDF exported to rotulo-nutricional.pdf".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["format"], "pdf");
        assert_eq!(value["layout"], "vertical");
        assert_eq!(value["filePath"], "rotulo-nutricional.pdf");
        assert!(value.get("pixelSize").is_none());
        assert_eq!(value["generatedAt"], "2025-10-09T08:53:20Z");
    }
}
