//! Batch driver: discover images, run one operator on each, persist results.
//!
//! Images are processed sequentially in sorted path order. Each edge map is
//! written to the same relative path under `output` as its source has under
//! `input`; with `visualize` set, an RGB comparison (original | edges) is
//! written alongside as `<stem>_compare.png`.
//!
//! Per-image failures follow [`OnError`]: `Abort` returns the first error,
//! `Skip` logs it, records it in the summary and moves on.
use crate::config::{BatchConfig, OnError};
use crate::error::{BatchError, EdgeError, IoError};
use crate::image::{list_images, load_image, save_image, write_json_file};
use crate::registry::{available_methods, EdgeMethod};
use crate::visualization::side_by_side;
use log::{debug, info, warn};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Resolve a user-supplied operator name (case-insensitive).
pub fn resolve_method(name: &str) -> Result<EdgeMethod, EdgeError> {
    let canonical = name.trim().to_ascii_lowercase();
    EdgeMethod::lookup(&canonical).ok_or_else(|| EdgeError::UnknownOperator {
        name: name.to_string(),
        available: available_methods().join(", "),
    })
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: usize,
    pub height: usize,
    pub elapsed_ms: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFailure {
    pub input: PathBuf,
    pub error: String,
}

/// What a batch run did.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub method: EdgeMethod,
    pub input: PathBuf,
    pub output: PathBuf,
    pub processed: Vec<ImageOutcome>,
    pub failed: Vec<ImageFailure>,
    pub total_ms: f64,
}

/// Run the configured batch.
pub fn run(config: &BatchConfig) -> Result<BatchSummary, BatchError> {
    let start = Instant::now();
    let method = resolve_method(&config.method)?;

    let images = list_images(&config.input, config.recursive)?;
    if images.is_empty() {
        return Err(BatchError::NoImages(config.input.clone()));
    }
    fs::create_dir_all(&config.output)
        .map_err(|e| IoError::io(&config.output, e))?;
    info!(
        "{} image(s) from {} -> {} using {method}",
        images.len(),
        config.input.display(),
        config.output.display()
    );

    let mut processed = Vec::with_capacity(images.len());
    let mut failed = Vec::new();
    for path in &images {
        match process_image(path, method, config) {
            Ok(outcome) => {
                debug!(
                    "{} -> {} ({:.2} ms)",
                    path.display(),
                    outcome.output.display(),
                    outcome.elapsed_ms
                );
                processed.push(outcome);
            }
            Err(err) => match config.on_error {
                OnError::Abort => {
                    return Err(BatchError::Image {
                        path: path.clone(),
                        source: Box::new(err),
                    })
                }
                OnError::Skip => {
                    warn!("skipping {}: {err}", path.display());
                    failed.push(ImageFailure {
                        input: path.clone(),
                        error: err.to_string(),
                    });
                }
            },
        }
    }

    let summary = BatchSummary {
        method,
        input: config.input.clone(),
        output: config.output.clone(),
        processed,
        failed,
        total_ms: start.elapsed().as_secs_f64() * 1000.0,
    };
    if let Some(report) = &config.report {
        write_json_file(report, &summary)?;
        info!("wrote report to {}", report.display());
    }
    info!(
        "done: {} written, {} failed in {:.1} ms",
        summary.processed.len(),
        summary.failed.len(),
        summary.total_ms
    );
    Ok(summary)
}

fn process_image(path: &Path, method: EdgeMethod, config: &BatchConfig) -> Result<ImageOutcome, BatchError> {
    let start = Instant::now();
    let image = load_image(path, false)?;
    let edges = method.apply(&image, &config.overrides, &config.defaults)?;

    let output = output_path(path, config);
    save_image(&edges, &output)?;

    if config.visualize {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let composite = side_by_side(&image, &edges)?;
        save_image(&composite, &output.with_file_name(format!("{stem}_compare.png")))?;
    }

    let (height, width) = edges.dim();
    Ok(ImageOutcome {
        input: path.to_path_buf(),
        output,
        width,
        height,
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}

/// Mirror the input tree: `input/a/x.png` is written to `output/a/x.png`.
fn output_path(path: &Path, config: &BatchConfig) -> PathBuf {
    match path.strip_prefix(&config.input) {
        Ok(relative) => config.output.join(relative),
        Err(_) => config.output.join(path.file_name().unwrap_or(path.as_os_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names_are_case_insensitive() {
        assert_eq!(resolve_method("SOBEL").unwrap(), EdgeMethod::Sobel);
        assert_eq!(resolve_method(" canny ").unwrap(), EdgeMethod::Canny);
    }

    #[test]
    fn unknown_method_lists_alternatives() {
        let err = resolve_method("prewitt").unwrap_err();
        assert_eq!(
            err,
            EdgeError::UnknownOperator {
                name: "prewitt".to_string(),
                available: "canny, laplacian, sobel".to_string(),
            }
        );
        assert!(err.to_string().contains("prewitt"));
    }

    #[test]
    fn output_mirrors_input_tree() {
        let config = BatchConfig {
            input: PathBuf::from("in"),
            output: PathBuf::from("out"),
            ..Default::default()
        };
        assert_eq!(
            output_path(Path::new("in/a/x.png"), &config),
            PathBuf::from("out/a/x.png")
        );
        assert_eq!(
            output_path(Path::new("in/x.png"), &config),
            PathBuf::from("out/x.png")
        );
        assert_eq!(
            output_path(Path::new("elsewhere/y.png"), &config),
            PathBuf::from("out/y.png")
        );
    }

    #[test]
    fn unknown_method_fails_before_touching_the_filesystem() {
        let config = BatchConfig {
            input: PathBuf::from("/nonexistent/input"),
            method: "roberts".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            run(&config),
            Err(BatchError::Edge(EdgeError::UnknownOperator { .. }))
        ));
    }
}
