//! Error types shared by the operators, the I/O helpers and the batch driver.
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the edge operators and the caller-side dispatch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EdgeError {
    #[error("unsupported image shape for grayscale conversion: {shape:?}")]
    UnsupportedShape { shape: Vec<usize> },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("unknown edge operator '{name}' (available: {available})")]
    UnknownOperator { name: String, available: String },
}

impl EdgeError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        EdgeError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Failures of image discovery, decoding/encoding and config files.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("input directory not found or not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("image not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to load image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    #[error("failed to save image to {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    #[error("cannot save {}: {source}", path.display())]
    Shape {
        path: PathBuf,
        #[source]
        source: EdgeError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl IoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures that end a batch run.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Edge(#[from] EdgeError),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error("no images found in: {}", .0.display())]
    NoImages(PathBuf),

    #[error("failed to process {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: Box<BatchError>,
    },
}
