//! Edge operators: grayscale coercion, Canny, Sobel magnitude and Laplacian.
//!
//! Every operator has the same shape:
//!
//! ```text
//! op(&image, &options, &defaults) -> Result<Array2<u8>, EdgeError>
//! ```
//!
//! - `image` is any `u8` `ndarray` of shape `(H, W)` or `(H, W, 3)` (RGB).
//! - `options` holds per-call overrides; `None` fields fall back to `defaults`.
//! - The result is a fresh `(H, W)` map; the input is never modified.
//!
//! Shape problems are reported before any numeric work; parameter problems
//! are reported as [`EdgeError::InvalidParameter`](crate::error::EdgeError).
//!
//! The numeric building blocks (binomial Sobel kernels, separable filtering,
//! border policies) live in [`kernels`].

pub mod canny;
pub mod gray;
pub mod kernels;
pub mod laplacian;
pub mod sobel;

pub use canny::canny_edges;
pub use gray::to_grayscale;
pub use laplacian::laplacian_edges;
pub use sobel::sobel_edges;
