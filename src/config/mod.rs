//! Configuration: process-wide operator defaults, per-call overrides and the
//! batch tool's JSON config file.
//!
//! Defaults are an immutable value object built once (usually via
//! [`EdgeDefaults::default`] or a JSON file) and passed explicitly to every
//! operator. Overrides are option structs whose `None` fields fall back to the
//! corresponding default, field by field.

pub mod batch;
pub mod params;

pub use batch::{load_config, BatchConfig, OnError, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
pub use params::{
    CannyOptions, CannyParams, EdgeDefaults, EdgeOverrides, LaplacianOptions, LaplacianParams,
    SobelOptions, SobelParams,
};
