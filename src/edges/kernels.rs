//! Derivative kernels and separable filtering on `f64` planes.
//!
//! - Sobel kernels of any odd size are built from the binomial construction
//!   (repeated `[1, 1]` smoothing followed by `[-1, 1]` differencing), which
//!   yields the classical `[-1, 0, 1] ⊗ [1, 2, 1]` pair for size 3 and the
//!   extended 5×5 / 7×7 apertures.
//! - A size-1 aperture means "no smoothing"; first/second derivatives along
//!   that axis still use a 3-tap difference.
//! - Filtering is separable: one horizontal pass into a scratch plane, then a
//!   vertical pass accumulating whole rows.
//!
//! Complexity: O(W·H·(kx + ky)) per call; memory: two float planes.
use crate::error::EdgeError;
use ndarray::{Array2, ArrayView2};

/// Sobel aperture sizes accepted by [`sobel`] and the Canny gradient stage.
pub const SOBEL_KSIZES: [usize; 4] = [1, 3, 5, 7];

/// Largest Laplacian aperture.
pub const MAX_LAPLACIAN_KSIZE: usize = 31;

/// Out-of-range sample policy for convolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Border {
    /// `aaa|abcd|ddd`
    Replicate,
    /// `dcb|abcd|cba`
    Reflect101,
}

impl Border {
    #[inline]
    fn index(self, i: isize, n: usize) -> usize {
        let last = n as isize - 1;
        match self {
            Border::Replicate => i.clamp(0, last) as usize,
            Border::Reflect101 => {
                if last == 0 {
                    return 0;
                }
                let period = 2 * last;
                let m = i.rem_euclid(period);
                (if m > last { period - m } else { m }) as usize
            }
        }
    }
}

/// 1-D kernel of the given size computing the `order`-th derivative
/// (order 0 is the binomial smoothing kernel).
pub fn sobel_kernel(ksize: usize, order: usize) -> Vec<f64> {
    debug_assert!(ksize % 2 == 1 && order < ksize.max(2));
    let mut ker = vec![0.0f64; ksize + 1];
    ker[0] = 1.0;

    for _ in 0..ksize.saturating_sub(order + 1) {
        let mut old = ker[0];
        for j in 1..=ksize {
            let new = ker[j] + ker[j - 1];
            ker[j - 1] = old;
            old = new;
        }
    }

    for _ in 0..order {
        let mut old = -ker[0];
        for j in 1..=ksize {
            let new = ker[j - 1] - ker[j];
            ker[j - 1] = old;
            old = new;
        }
    }

    ker.truncate(ksize);
    ker
}

/// Convolve `src` with the separable kernel `kx` (along x) ⊗ `ky` (along y).
///
/// Kernels are applied as correlation, matching the usual Sobel sign
/// convention (positive `dx` for intensity increasing to the right).
pub fn sep_filter(src: ArrayView2<'_, f64>, kx: &[f64], ky: &[f64], border: Border) -> Array2<f64> {
    let (h, w) = src.dim();
    let mut horiz = Array2::<f64>::zeros((h, w));
    let mut out = Array2::<f64>::zeros((h, w));
    if h == 0 || w == 0 {
        return out;
    }

    let rx = (kx.len() / 2) as isize;
    for (src_row, mut dst_row) in src.rows().into_iter().zip(horiz.rows_mut()) {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, &tap) in kx.iter().enumerate() {
                let sx = border.index(x as isize + k as isize - rx, w);
                acc += src_row[sx] * tap;
            }
            dst_row[x] = acc;
        }
    }

    let ry = (ky.len() / 2) as isize;
    for y in 0..h {
        let mut dst_row = out.row_mut(y);
        for (k, &tap) in ky.iter().enumerate() {
            if tap == 0.0 {
                continue;
            }
            let sy = border.index(y as isize + k as isize - ry, h);
            dst_row.scaled_add(tap, &horiz.row(sy));
        }
    }

    out
}

/// Validate a Sobel aperture.
pub fn check_sobel_ksize(name: &'static str, ksize: usize) -> Result<(), EdgeError> {
    if SOBEL_KSIZES.contains(&ksize) {
        Ok(())
    } else {
        Err(EdgeError::invalid(
            name,
            format!("kernel size must be one of {SOBEL_KSIZES:?}, got {ksize}"),
        ))
    }
}

/// Derivative of order `(dx, dy)` with the extended Sobel operator.
pub fn sobel(
    src: ArrayView2<'_, f64>,
    dx: usize,
    dy: usize,
    ksize: usize,
    border: Border,
) -> Result<Array2<f64>, EdgeError> {
    check_sobel_ksize("ksize", ksize)?;
    if dx + dy == 0 || dx > 2 || dy > 2 {
        return Err(EdgeError::invalid(
            "order",
            format!("unsupported derivative order ({dx}, {dy})"),
        ));
    }
    Ok(derivative(src, dx, dy, ksize, border))
}

fn derivative(src: ArrayView2<'_, f64>, dx: usize, dy: usize, ksize: usize, border: Border) -> Array2<f64> {
    let ksize_x = if ksize == 1 && dx > 0 { 3 } else { ksize };
    let ksize_y = if ksize == 1 && dy > 0 { 3 } else { ksize };
    let kx = sobel_kernel(ksize_x, dx);
    let ky = sobel_kernel(ksize_y, dy);
    sep_filter(src, &kx, &ky, border)
}

/// `scale · (∂²/∂x² + ∂²/∂y²) + delta`.
///
/// Size 1 is the 4-neighbor kernel `[0 1 0; 1 -4 1; 0 1 0]`; size 3 yields
/// `[2 0 2; 0 -8 0; 2 0 2]`; larger sizes sum the second-order Sobel responses.
pub fn laplacian(
    src: ArrayView2<'_, f64>,
    ksize: usize,
    scale: f64,
    delta: f64,
    border: Border,
) -> Result<Array2<f64>, EdgeError> {
    if ksize % 2 == 0 || ksize > MAX_LAPLACIAN_KSIZE {
        return Err(EdgeError::invalid(
            "ksize",
            format!("Laplacian kernel size must be odd and at most {MAX_LAPLACIAN_KSIZE}, got {ksize}"),
        ));
    }
    if !scale.is_finite() || !delta.is_finite() {
        return Err(EdgeError::invalid(
            "scale/delta",
            format!("must be finite, got scale={scale}, delta={delta}"),
        ));
    }

    let mut lap = derivative(src, 2, 0, ksize, border);
    lap += &derivative(src, 0, 2, ksize, border);
    lap.mapv_inplace(|v| v * scale + delta);
    Ok(lap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn binomial_kernels_match_classical_sobel() {
        assert_eq!(sobel_kernel(1, 0), vec![1.0]);
        assert_eq!(sobel_kernel(3, 0), vec![1.0, 2.0, 1.0]);
        assert_eq!(sobel_kernel(3, 1), vec![-1.0, 0.0, 1.0]);
        assert_eq!(sobel_kernel(3, 2), vec![1.0, -2.0, 1.0]);
        assert_eq!(sobel_kernel(5, 1), vec![-1.0, -2.0, 0.0, 2.0, 1.0]);
        assert_eq!(sobel_kernel(5, 2), vec![1.0, 0.0, -2.0, 0.0, 1.0]);
        assert_eq!(sobel_kernel(7, 0), vec![1.0, 6.0, 15.0, 20.0, 15.0, 6.0, 1.0]);
    }

    #[test]
    fn reflect101_mirrors_without_edge_duplication() {
        let b = Border::Reflect101;
        assert_eq!(b.index(-1, 5), 1);
        assert_eq!(b.index(-2, 5), 2);
        assert_eq!(b.index(5, 5), 3);
        assert_eq!(b.index(-1, 2), 1);
        assert_eq!(b.index(3, 1), 0);
        assert_eq!(Border::Replicate.index(-3, 5), 0);
        assert_eq!(Border::Replicate.index(9, 5), 4);
    }

    #[test]
    fn horizontal_ramp_has_constant_dx_and_zero_dy() {
        let ramp = Array2::from_shape_fn((6, 8), |(_, x)| 10.0 * x as f64);
        let gx = sobel(ramp.view(), 1, 0, 3, Border::Replicate).unwrap();
        let gy = sobel(ramp.view(), 0, 1, 3, Border::Replicate).unwrap();
        // interior: (1 + 2 + 1) * (20) = 80
        assert_eq!(gx[[3, 4]], 80.0);
        assert!(gy.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn laplacian_ksize1_uses_four_neighbor_kernel() {
        let mut img = Array2::<f64>::zeros((5, 5));
        img[[2, 2]] = 1.0;
        let lap = laplacian(img.view(), 1, 1.0, 0.0, Border::Reflect101).unwrap();
        let expected = array![[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];
        assert_eq!(lap.slice(ndarray::s![1..4, 1..4]), expected);
    }

    #[test]
    fn laplacian_ksize3_uses_diagonal_kernel() {
        let mut img = Array2::<f64>::zeros((5, 5));
        img[[2, 2]] = 1.0;
        let lap = laplacian(img.view(), 3, 1.0, 0.0, Border::Reflect101).unwrap();
        let expected = array![[2.0, 0.0, 2.0], [0.0, -8.0, 0.0], [2.0, 0.0, 2.0]];
        assert_eq!(lap.slice(ndarray::s![1..4, 1..4]), expected);
    }

    #[test]
    fn rejects_unsupported_apertures() {
        let img = Array2::<f64>::zeros((4, 4));
        assert!(matches!(
            sobel(img.view(), 1, 0, 9, Border::Reflect101),
            Err(EdgeError::InvalidParameter { .. })
        ));
        assert!(matches!(
            laplacian(img.view(), 4, 1.0, 0.0, Border::Reflect101),
            Err(EdgeError::InvalidParameter { .. })
        ));
    }
}
