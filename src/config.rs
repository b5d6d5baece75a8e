//! Export configuration
//!
//! Defaults come from the environment; command-line flags override them.

use std::path::PathBuf;

use crate::error::{LabelError, LabelResult};

pub const OUTPUT_DIR_VAR: &str = "ROTULO_OUTPUT_DIR";
pub const SCALE_VAR: &str = "ROTULO_SCALE";
pub const JPEG_QUALITY_VAR: &str = "ROTULO_JPEG_QUALITY";

pub const DEFAULT_SCALE: u32 = 1;
pub const MAX_SCALE: u32 = 4;
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Directory for files exported without an explicit path
    pub output_dir: PathBuf,
    /// Pixel ratio for PNG/JPEG/SVG, 1 to 4
    pub scale: u32,
    /// JPEG quality, 1 to 100
    pub jpeg_quality: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            scale: DEFAULT_SCALE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ExportConfig {
    /// Read ROTULO_OUTPUT_DIR, ROTULO_SCALE and ROTULO_JPEG_QUALITY
    pub fn from_env() -> LabelResult<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset or blank variables keep their default
    pub fn from_lookup<F>(lookup: F) -> LabelResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = get(OUTPUT_DIR_VAR) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(raw) = get(SCALE_VAR) {
            config.scale = parse_scale(&raw).map_err(|reason| LabelError::InvalidConfig {
                var: SCALE_VAR,
                value: raw.clone(),
                reason,
            })?;
        }
        if let Some(raw) = get(JPEG_QUALITY_VAR) {
            config.jpeg_quality =
                parse_jpeg_quality(&raw).map_err(|reason| LabelError::InvalidConfig {
                    var: JPEG_QUALITY_VAR,
                    value: raw.clone(),
                    reason,
                })?;
        }

        Ok(config)
    }
}

/// Parse a pixel ratio, 1 to 4
pub fn parse_scale(raw: &str) -> Result<u32, String> {
    let scale: u32 = raw
        .trim()
        .parse()
        .map_err(|_| "must be a whole number".to_string())?;
    if !(1..=MAX_SCALE).contains(&scale) {
        return Err(format!("must be between 1 and {}", MAX_SCALE));
    }
    Ok(scale)
}

/// Parse a JPEG quality, 1 to 100
pub fn parse_jpeg_quality(raw: &str) -> Result<u8, String> {
    let quality: u8 = raw
        .trim()
        .parse()
        .map_err(|_| "must be a whole number".to_string())?;
    if !(1..=100).contains(&quality) {
        return Err("must be between 1 and 100".to_string());
    }
    Ok(quality)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ExportConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ExportConfig::default());
        assert_eq!(config.scale, 1);
        assert_eq!(config.jpeg_quality, 95);
    }

    #[test]
    fn test_reads_variables() {
        let config = ExportConfig::from_lookup(lookup(&[
            (OUTPUT_DIR_VAR, "/tmp/rotulos"),
            (SCALE_VAR, "3"),
            (JPEG_QUALITY_VAR, "80"),
        ]))
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/rotulos"));
        assert_eq!(config.scale, 3);
        assert_eq!(config.jpeg_quality, 80);
    }

    #[test]
    fn test_blank_variable_keeps_default() {
        let config = ExportConfig::from_lookup(lookup(&[(SCALE_VAR, "  ")])).unwrap();
        assert_eq!(config.scale, DEFAULT_SCALE);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = ExportConfig::from_lookup(lookup(&[(SCALE_VAR, "5")])).unwrap_err();
        assert!(matches!(err, LabelError::InvalidConfig { var: SCALE_VAR, .. }));

        assert!(ExportConfig::from_lookup(lookup(&[(JPEG_QUALITY_VAR, "0")])).is_err());
        assert!(ExportConfig::from_lookup(lookup(&[(JPEG_QUALITY_VAR, "high")])).is_err());
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_scale("2"), Ok(2));
        assert!(parse_scale("0").is_err());
        assert_eq!(parse_jpeg_quality("100"), Ok(100));
        assert!(parse_jpeg_quality("101").is_err());
    }
}
