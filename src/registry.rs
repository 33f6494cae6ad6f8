//! Closed registry of edge operators.
//!
//! The set of operators is fixed at compile time, so the registry is an enum
//! with a single dispatch function rather than a runtime table. Lookup only
//! answers "is this a known name"; turning a miss into
//! [`EdgeError::UnknownOperator`] is the caller's job (see
//! [`crate::batch::resolve_method`]).
use crate::config::{EdgeDefaults, EdgeOverrides};
use crate::edges::{canny_edges, laplacian_edges, sobel_edges};
use crate::error::EdgeError;
use ndarray::{Array2, ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMethod {
    Canny,
    Laplacian,
    Sobel,
}

impl EdgeMethod {
    /// All operators, sorted by canonical name.
    pub const ALL: [EdgeMethod; 3] = [EdgeMethod::Canny, EdgeMethod::Laplacian, EdgeMethod::Sobel];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            EdgeMethod::Canny => "canny",
            EdgeMethod::Laplacian => "laplacian",
            EdgeMethod::Sobel => "sobel",
        }
    }

    /// Exact match on the canonical name.
    pub fn lookup(name: &str) -> Option<EdgeMethod> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Run the operator with its slice of `overrides` over `defaults`.
    pub fn apply<S, D>(
        self,
        image: &ArrayBase<S, D>,
        overrides: &EdgeOverrides,
        defaults: &EdgeDefaults,
    ) -> Result<Array2<u8>, EdgeError>
    where
        S: Data<Elem = u8>,
        D: Dimension,
    {
        match self {
            EdgeMethod::Canny => canny_edges(image, &overrides.canny, &defaults.canny),
            EdgeMethod::Laplacian => {
                laplacian_edges(image, &overrides.laplacian, &defaults.laplacian)
            }
            EdgeMethod::Sobel => sobel_edges(image, &overrides.sobel, &defaults.sobel),
        }
    }
}

impl fmt::Display for EdgeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical operator names in sorted order.
pub fn available_methods() -> Vec<&'static str> {
    EdgeMethod::ALL.iter().map(|m| m.name()).collect()
}
