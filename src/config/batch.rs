use super::params::{EdgeDefaults, EdgeOverrides};
use crate::error::IoError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_DIR: &str = "data/raw";
pub const DEFAULT_OUTPUT_DIR: &str = "data/edges";

/// What the batch driver does when a single image fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    /// Stop the run and return the error.
    #[default]
    Abort,
    /// Log the failure, record it in the summary and continue.
    Skip,
}

/// Batch tool configuration as read from JSON.
///
/// Every field is optional in the file; omitted fields take the values of
/// [`BatchConfig::default`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Directory scanned for images.
    pub input: PathBuf,
    /// Directory receiving the edge maps.
    pub output: PathBuf,
    /// Operator name, matched case-insensitively against the registry.
    pub method: String,
    /// Descend into subdirectories of `input`.
    pub recursive: bool,
    /// Also write an original/edges comparison image per input.
    pub visualize: bool,
    pub on_error: OnError,
    /// Optional JSON run summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,
    pub defaults: EdgeDefaults,
    pub overrides: EdgeOverrides,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            method: "canny".to_string(),
            recursive: false,
            visualize: false,
            on_error: OnError::Abort,
            report: None,
            defaults: EdgeDefaults::default(),
            overrides: EdgeOverrides::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<BatchConfig, IoError> {
    let data = fs::read_to_string(path).map_err(|e| IoError::io(path, e))?;
    serde_json::from_str(&data).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg: BatchConfig = serde_json::from_str("{}").expect("parse");
        assert_eq!(cfg.input, PathBuf::from(DEFAULT_INPUT_DIR));
        assert_eq!(cfg.output, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(cfg.method, "canny");
        assert_eq!(cfg.on_error, OnError::Abort);
        assert!(cfg.report.is_none());
    }

    #[test]
    fn parses_policy_and_overrides() {
        let cfg: BatchConfig = serde_json::from_str(
            r#"{
                "method": "laplacian",
                "on_error": "skip",
                "overrides": { "laplacian": { "scale": 2.0 } }
            }"#,
        )
        .expect("parse");
        assert_eq!(cfg.method, "laplacian");
        assert_eq!(cfg.on_error, OnError::Skip);
        assert_eq!(cfg.overrides.laplacian.scale, Some(2.0));
        assert_eq!(cfg.overrides.laplacian.ksize, None);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/edge_vision.json")).unwrap_err();
        assert!(matches!(err, IoError::Io { .. }));
    }
}
