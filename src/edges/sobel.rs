//! Sobel gradient-magnitude edge maps.
use super::gray::{to_f64, to_grayscale};
use super::kernels::{check_sobel_ksize, sobel, Border};
use crate::config::{SobelOptions, SobelParams};
use crate::error::EdgeError;
use log::debug;
use ndarray::{Array2, ArrayBase, Data, Dimension, Zip};

/// Gradient magnitude `sqrt(dx² + dy²)` rescaled so the strongest response is
/// exactly 255.
///
/// Derivatives are computed in `f64` so the combination step cannot clip. A
/// flat image (maximum magnitude 0) yields an all-zero map.
pub fn sobel_edges<S, D>(
    image: &ArrayBase<S, D>,
    options: &SobelOptions,
    defaults: &SobelParams,
) -> Result<Array2<u8>, EdgeError>
where
    S: Data<Elem = u8>,
    D: Dimension,
{
    let gray = to_grayscale(image)?;
    let params = options.resolve(defaults);
    check_sobel_ksize("ksize", params.ksize)?;

    let plane = to_f64(gray.view());
    let gx = sobel(plane.view(), 1, 0, params.ksize, Border::Reflect101)?;
    let gy = sobel(plane.view(), 0, 1, params.ksize, Border::Reflect101)?;
    let magnitude = Zip::from(&gx).and(&gy).map_collect(|&dx, &dy| dx.hypot(dy));

    let max = magnitude.iter().copied().fold(0.0f64, f64::max);
    debug!("sobel {:?} ksize={} max={max:.3}", gray.dim(), params.ksize);
    if max <= 0.0 {
        return Ok(Array2::zeros(gray.dim()));
    }
    Ok(magnitude.mapv(|m| (m / max * 255.0) as u8))
}
