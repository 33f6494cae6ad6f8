//! I/O helpers for images and JSON.
//!
//! - `load_image`: decode a PNG/JPEG/BMP/TIFF into an `(H, W, 3)` RGB or
//!   `(H, W)` gray array.
//! - `save_image`: encode a gray or RGB array, creating parent directories.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::error::{EdgeError, IoError};
use image::{GrayImage, RgbImage};
use ndarray::{Array2, Array3, ArrayBase, ArrayD, Data, Dimension};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as RGB `(H, W, 3)` or, with `as_gray`, as `(H, W)`.
pub fn load_image(path: &Path, as_gray: bool) -> Result<ArrayD<u8>, IoError> {
    if !path.is_file() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let decoded = image::open(path).map_err(|source| IoError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let array = if as_gray {
        let gray = decoded.into_luma8();
        let (w, h) = gray.dimensions();
        Array2::from_shape_vec((h as usize, w as usize), gray.into_raw())
            .map(|a| a.into_dyn())
    } else {
        let rgb = decoded.into_rgb8();
        let (w, h) = rgb.dimensions();
        Array3::from_shape_vec((h as usize, w as usize, 3), rgb.into_raw())
            .map(|a| a.into_dyn())
    };
    // The decoder's buffer length always matches its reported dimensions.
    array.map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })
}

/// Save a `(H, W)` gray or `(H, W, 3)` RGB array; the format follows the
/// file extension.
pub fn save_image<S, D>(image: &ArrayBase<S, D>, path: &Path) -> Result<(), IoError>
where
    S: Data<Elem = u8>,
    D: Dimension,
{
    ensure_parent_dir(path)?;
    let shape = image.shape().to_vec();
    let data: Vec<u8> = image.iter().copied().collect();
    let encoded = match shape.as_slice() {
        &[h, w] => GrayImage::from_raw(w as u32, h as u32, data).map(|img| img.save(path)),
        &[h, w, 3] => RgbImage::from_raw(w as u32, h as u32, data).map(|img| img.save(path)),
        _ => None,
    };
    match encoded {
        Some(result) => result.map_err(|source| IoError::Encode {
            path: path.to_path_buf(),
            source,
        }),
        None => Err(IoError::Shape {
            path: path.to_path_buf(),
            source: EdgeError::UnsupportedShape { shape },
        }),
    }
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), IoError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|e| IoError::io(path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| IoError::io(parent, e))?;
        }
    }
    Ok(())
}
