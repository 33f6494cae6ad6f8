//! Image discovery and persistence.
//!
//! Images cross the crate boundary as `ndarray` arrays of `u8`: `(H, W)` for
//! grayscale and `(H, W, 3)` for RGB. Decoding and encoding go through the
//! `image` crate, which also fixes the channel order (RGB) that
//! [`crate::edges::to_grayscale`] expects.

pub mod discovery;
pub mod io;

pub use discovery::{is_supported, list_images, ALLOWED_EXTENSIONS};
pub use io::{load_image, save_image, write_json_file};
