//! Canny detector: Sobel gradients, direction-aligned non-maximum suppression
//! and two-threshold hysteresis.
//!
//! NMS quantizes the gradient direction to 0°/45°/90°/135° using the
//! `tan(22.5°)` test on `|dx|`, `|dy|` and compares each pixel with its two
//! neighbors across the edge. Neighbors outside the image count as zero, so
//! the outermost frame can still carry edges.
//!
//! Hysteresis keeps local maxima above `high` and every local maximum above
//! `low` that is 8-connected to one of them.
use super::gray::{to_f64, to_grayscale};
use super::kernels::{sobel, Border};
use crate::config::{CannyOptions, CannyParams};
use crate::error::EdgeError;
use log::debug;
use ndarray::{Array2, ArrayBase, ArrayView2, Data, Dimension, Zip};

const TAN_22_5_DEG: f64 = 0.414_213_562_373_095_05;
const CANNY_APERTURES: [usize; 3] = [3, 5, 7];

const EDGE: u8 = 255;
const NOT_EDGE: u8 = 0;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Class {
    Suppressed,
    Weak,
    Strong,
}

/// Compute a binary (0 / 255) edge map with the Canny detector.
///
/// `options` fields left as `None` take their value from `defaults`.
pub fn canny_edges<S, D>(
    image: &ArrayBase<S, D>,
    options: &CannyOptions,
    defaults: &CannyParams,
) -> Result<Array2<u8>, EdgeError>
where
    S: Data<Elem = u8>,
    D: Dimension,
{
    let gray = to_grayscale(image)?;
    let params = options.resolve(defaults);
    let (low, high) = validate(&params)?;
    debug!(
        "canny {:?} low={low} high={high} aperture={} l2={}",
        gray.dim(),
        params.aperture_size,
        params.l2_gradient
    );

    let plane = to_f64(gray.view());
    let gx = sobel(plane.view(), 1, 0, params.aperture_size, Border::Replicate)?;
    let gy = sobel(plane.view(), 0, 1, params.aperture_size, Border::Replicate)?;
    let mag = if params.l2_gradient {
        Zip::from(&gx).and(&gy).map_collect(|&dx, &dy| dx.hypot(dy))
    } else {
        Zip::from(&gx).and(&gy).map_collect(|&dx, &dy| dx.abs() + dy.abs())
    };

    let classes = suppress(gx.view(), gy.view(), mag.view(), low, high);
    Ok(hysteresis(&classes))
}

fn validate(params: &CannyParams) -> Result<(f64, f64), EdgeError> {
    if !CANNY_APERTURES.contains(&params.aperture_size) {
        return Err(EdgeError::invalid(
            "aperture_size",
            format!(
                "must be odd between 3 and 7, got {}",
                params.aperture_size
            ),
        ));
    }
    for (name, value) in [
        ("low_threshold", params.low_threshold),
        ("high_threshold", params.high_threshold),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(EdgeError::invalid(
                name,
                format!("must be a finite, non-negative number, got {value}"),
            ));
        }
    }
    let (low, high) = (params.low_threshold, params.high_threshold);
    Ok(if low > high { (high, low) } else { (low, high) })
}

fn suppress(
    gx: ArrayView2<'_, f64>,
    gy: ArrayView2<'_, f64>,
    mag: ArrayView2<'_, f64>,
    low: f64,
    high: f64,
) -> Array2<Class> {
    let (h, w) = mag.dim();
    let at = |x: isize, y: isize| -> f64 {
        if x < 0 || y < 0 || x >= w as isize || y >= h as isize {
            0.0
        } else {
            mag[[y as usize, x as usize]]
        }
    };

    Array2::from_shape_fn((h, w), |(y, x)| {
        let m = mag[[y, x]];
        if m <= low {
            return Class::Suppressed;
        }

        let dx = gx[[y, x]];
        let dy = gy[[y, x]];
        let (ax, ay) = (dx.abs(), dy.abs());
        let (xi, yi) = (x as isize, y as isize);

        let is_max = if ay <= ax * TAN_22_5_DEG {
            m > at(xi - 1, yi) && m >= at(xi + 1, yi)
        } else if ax <= ay * TAN_22_5_DEG {
            m > at(xi, yi - 1) && m >= at(xi, yi + 1)
        } else {
            // Same signs: gradient points down-right, compare along that diagonal.
            let s = if (dx < 0.0) == (dy < 0.0) { 1 } else { -1 };
            m > at(xi - s, yi - 1) && m > at(xi + s, yi + 1)
        };

        match (is_max, m > high) {
            (false, _) => Class::Suppressed,
            (true, true) => Class::Strong,
            (true, false) => Class::Weak,
        }
    })
}

fn hysteresis(classes: &Array2<Class>) -> Array2<u8> {
    let (h, w) = classes.dim();
    let mut out = Array2::from_elem((h, w), NOT_EDGE);
    let mut stack: Vec<(usize, usize)> = classes
        .indexed_iter()
        .filter(|(_, &c)| c == Class::Strong)
        .map(|(idx, _)| idx)
        .collect();
    for &(y, x) in &stack {
        out[[y, x]] = EDGE;
    }

    while let Some((y, x)) = stack.pop() {
        for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                if out[[ny, nx]] == NOT_EDGE && classes[[ny, nx]] == Class::Weak {
                    out[[ny, nx]] = EDGE;
                    stack.push((ny, nx));
                }
            }
        }
    }

    out
}
