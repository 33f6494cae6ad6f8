//! Comparison composites for eyeballing edge maps.
//!
//! These build plain RGB arrays that the caller can save with
//! [`crate::image::save_image`]; nothing here opens a window.
use crate::edges::gray::gray_to_rgb;
use crate::error::EdgeError;
use ndarray::{s, Array3, ArrayBase, Data, Dimension, Ix2, Ix3};

/// Normalize a gray or RGB array to an owned `(H, W, 3)` RGB array.
pub fn to_rgb<S, D>(image: &ArrayBase<S, D>) -> Result<Array3<u8>, EdgeError>
where
    S: Data<Elem = u8>,
    D: Dimension,
{
    let view = image.view().into_dyn();
    let shape = view.shape().to_vec();
    match shape.as_slice() {
        [_, _] => {
            let gray = view
                .into_dimensionality::<Ix2>()
                .map_err(|_| unsupported(&shape))?;
            Ok(gray_to_rgb(gray))
        }
        [_, _, 3] => view
            .into_dimensionality::<Ix3>()
            .map(|rgb| rgb.to_owned())
            .map_err(|_| unsupported(&shape)),
        other => Err(unsupported(other)),
    }
}

/// Original on the left, processed image on the right.
pub fn side_by_side<S1, D1, S2, D2>(
    original: &ArrayBase<S1, D1>,
    processed: &ArrayBase<S2, D2>,
) -> Result<Array3<u8>, EdgeError>
where
    S1: Data<Elem = u8>,
    D1: Dimension,
    S2: Data<Elem = u8>,
    D2: Dimension,
{
    grid(&[to_rgb(original)?, to_rgb(processed)?], 2)
}

/// Lay out RGB tiles row-major in a grid with `cols` columns (at least one).
///
/// Cells are sized to the largest tile; smaller tiles sit in the top-left
/// corner of their cell over a black background.
pub fn grid(tiles: &[Array3<u8>], cols: usize) -> Result<Array3<u8>, EdgeError> {
    if tiles.is_empty() {
        return Err(EdgeError::invalid("tiles", "at least one image is required"));
    }
    for tile in tiles {
        if tile.dim().2 != 3 {
            return Err(unsupported(tile.shape()));
        }
    }

    let cols = cols.max(1).min(tiles.len());
    let rows = tiles.len().div_ceil(cols);
    let cell_h = tiles.iter().map(|t| t.dim().0).max().unwrap_or(0);
    let cell_w = tiles.iter().map(|t| t.dim().1).max().unwrap_or(0);

    let mut canvas = Array3::<u8>::zeros((rows * cell_h, cols * cell_w, 3));
    for (i, tile) in tiles.iter().enumerate() {
        let (th, tw, _) = tile.dim();
        let (y0, x0) = ((i / cols) * cell_h, (i % cols) * cell_w);
        canvas
            .slice_mut(s![y0..y0 + th, x0..x0 + tw, ..])
            .assign(tile);
    }
    Ok(canvas)
}

fn unsupported(shape: &[usize]) -> EdgeError {
    EdgeError::UnsupportedShape {
        shape: shape.to_vec(),
    }
}
