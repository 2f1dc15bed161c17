//! JSON configuration for the `split_digits` tool.
//!
//! ```text
//! {
//!   "input": "digits.png",
//!   "params": { "normalize": { "threshold": 0.7 }, "segment": { "gap": 6 } },
//!   "output": {
//!     "glyph_dir": "out/glyphs",
//!     "intensity_image": "out/intensity.png",
//!     "report_json": "out/report.json"
//!   }
//! }
//! ```
use crate::error::SplitError;
use crate::params::SplitterParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SplitToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: SplitterParams,
    #[serde(default)]
    pub output: SplitOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct SplitOutputConfig {
    /// Directory receiving one PNG per glyph.
    pub glyph_dir: Option<PathBuf>,
    /// PNG of the normalized intensity map the glyphs were cut from.
    pub intensity_image: Option<PathBuf>,
    /// Path of the JSON summary; printed to stdout when absent.
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<SplitToolConfig, SplitError> {
    let data = fs::read_to_string(path).map_err(|e| SplitError::io(path, e))?;
    parse_config(&data)
        .map_err(|e| SplitError::InvalidParams(format!("config {}: {e}", path.display())))
}

pub fn parse_config(data: &str) -> Result<SplitToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let cfg = parse_config(r#"{ "input": "row.png" }"#).unwrap();
        assert_eq!(cfg.input, PathBuf::from("row.png"));
        assert_eq!(cfg.params, SplitterParams::default());
        assert!(cfg.output.glyph_dir.is_none());
    }

    #[test]
    fn full_config_round_trips_fields() {
        let cfg = parse_config(
            r#"{
                "input": "row.png",
                "params": { "segment": { "gap": 6, "expand_height": 4, "output_size": [32, 32] } },
                "output": {
                    "glyph_dir": "out",
                    "intensity_image": "out/intensity.png",
                    "report_json": "out/report.json"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.params.segment.gap, 6);
        assert_eq!(cfg.params.segment.expand_height, 4);
        assert_eq!(cfg.params.segment.output_size, (32, 32));
        assert_eq!(cfg.output.report_json, Some(PathBuf::from("out/report.json")));
        assert_eq!(
            cfg.output.intensity_image,
            Some(PathBuf::from("out/intensity.png"))
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_config(Path::new("/nonexistent/split.json")).unwrap_err();
        assert!(matches!(err, SplitError::Io { .. }));
    }
}
