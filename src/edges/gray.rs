//! Grayscale coercion shared by every operator.
use crate::error::EdgeError;
use ndarray::{Array2, Array3, ArrayBase, ArrayView2, CowArray, Data, Dimension, Ix2, Ix3};

// 14-bit fixed-point luma weights (0.299, 0.587, 0.114) for RGB order.
const LUMA_SHIFT: u32 = 14;
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;

#[inline]
pub(crate) fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B + (1 << (LUMA_SHIFT - 1));
    (y >> LUMA_SHIFT) as u8
}

/// Coerce an image to a 2-D grayscale plane.
///
/// `(H, W)` input is borrowed as-is; `(H, W, 3)` RGB input is converted with
/// the luma transform. Any other shape fails with
/// [`EdgeError::UnsupportedShape`].
pub fn to_grayscale<'a, S, D>(image: &'a ArrayBase<S, D>) -> Result<CowArray<'a, u8, Ix2>, EdgeError>
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
            Ok(CowArray::from(gray))
        }
        &[h, w, 3] => {
            let rgb = view
                .into_dimensionality::<Ix3>()
                .map_err(|_| unsupported(&shape))?;
            let gray = Array2::from_shape_fn((h, w), |(y, x)| {
                luma(rgb[[y, x, 0]], rgb[[y, x, 1]], rgb[[y, x, 2]])
            });
            Ok(CowArray::from(gray))
        }
        other => Err(unsupported(other)),
    }
}

/// Lift a grayscale plane to `f64` for derivative filtering.
pub(crate) fn to_f64(gray: ArrayView2<'_, u8>) -> Array2<f64> {
    gray.mapv(f64::from)
}

/// Replicate a grayscale plane into three channels.
pub(crate) fn gray_to_rgb(gray: ArrayView2<'_, u8>) -> Array3<u8> {
    let (h, w) = gray.dim();
    Array3::from_shape_fn((h, w, 3), |(y, x, _)| gray[[y, x]])
}

fn unsupported(shape: &[usize]) -> EdgeError {
    EdgeError::UnsupportedShape {
        shape: shape.to_vec(),
    }
}
