//! Input discovery: regular files with a recognised raster extension.
use crate::error::IoError;
use std::fs;
use std::path::{Path, PathBuf};

/// Lowercase extensions (with the leading dot) picked up by [`list_images`].
pub const ALLOWED_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".bmp", ".tif", ".tiff"];

/// `true` if the path's extension is one of [`ALLOWED_EXTENSIONS`],
/// compared case-insensitively.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let dotted = format!(".{}", ext.to_ascii_lowercase());
            ALLOWED_EXTENSIONS.contains(&dotted.as_str())
        })
        .unwrap_or(false)
}

/// List image files under `directory`, sorted by path.
///
/// With `recursive` set, subdirectories are walked depth-first. Symlinked
/// directories are not descended into; symlinked files are listed.
pub fn list_images(directory: &Path, recursive: bool) -> Result<Vec<PathBuf>, IoError> {
    if !directory.is_dir() {
        return Err(IoError::NotADirectory(directory.to_path_buf()));
    }
    let mut images = Vec::new();
    collect(directory, recursive, &mut images)?;
    images.sort();
    Ok(images)
}

fn collect(dir: &Path, recursive: bool, out: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(|e| IoError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| IoError::io(dir, e))?;
        let path = entry.path();
        // `file_type` does not follow symlinks.
        let file_type = entry.file_type().map_err(|e| IoError::io(&path, e))?;
        if file_type.is_dir() {
            if recursive {
                collect(&path, recursive, out)?;
            }
        } else if path.is_file() && is_supported(&path) {
            out.push(path);
        }
    }
    Ok(())
}
