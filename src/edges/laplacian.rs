//! Absolute Laplacian edge maps.
use super::gray::{to_f64, to_grayscale};
use super::kernels::{laplacian, Border};
use crate::config::{LaplacianOptions, LaplacianParams};
use crate::error::EdgeError;
use log::debug;
use ndarray::{Array2, ArrayBase, Data, Dimension};

/// `|scale · ∇²I + delta|`, rounded half to even and saturated to `[0, 255]`.
pub fn laplacian_edges<S, D>(
    image: &ArrayBase<S, D>,
    options: &LaplacianOptions,
    defaults: &LaplacianParams,
) -> Result<Array2<u8>, EdgeError>
where
    S: Data<Elem = u8>,
    D: Dimension,
{
    let gray = to_grayscale(image)?;
    let params = options.resolve(defaults);
    debug!(
        "laplacian {:?} ksize={} scale={} delta={}",
        gray.dim(),
        params.ksize,
        params.scale,
        params.delta
    );

    let plane = to_f64(gray.view());
    let response = laplacian(
        plane.view(),
        params.ksize,
        params.scale,
        params.delta,
        Border::Reflect101,
    )?;
    Ok(response.mapv(saturate_abs))
}

#[inline]
fn saturate_abs(v: f64) -> u8 {
    v.abs().round_ties_even().min(255.0) as u8
}
