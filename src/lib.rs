#![doc = include_str!("../README.md")]

// Operators and their dispatch.
pub mod edges;
pub mod registry;

// Ambient layers: configuration, errors, I/O.
pub mod config;
pub mod error;
pub mod image;

// Tooling built on top of the operators.
pub mod batch;
pub mod synthetic;
pub mod visualization;

// --- High-level re-exports -------------------------------------------------

pub use crate::config::{BatchConfig, EdgeDefaults, EdgeOverrides};
pub use crate::edges::{canny_edges, laplacian_edges, sobel_edges, to_grayscale};
pub use crate::error::{BatchError, EdgeError, IoError};
pub use crate::registry::{available_methods, EdgeMethod};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::config::{
        CannyOptions, EdgeDefaults, EdgeOverrides, LaplacianOptions, SobelOptions,
    };
    pub use crate::error::EdgeError;
    pub use crate::registry::{available_methods, EdgeMethod};
    pub use crate::{canny_edges, laplacian_edges, sobel_edges, to_grayscale};
}
