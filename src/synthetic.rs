//! Synthetic sample images with known edges.
//!
//! Shapes are rasterized directly on `(H, W, 3)` RGB canvases: filled and
//! outlined rectangles and circles, thick line segments and stroked text.
//! Outlines are centered on the nominal geometry, so a thickness of 1 on an
//! axis-aligned line covers exactly one pixel row or column.
//!
//! Text uses a small built-in single-stroke font in Hershey "simplex" units
//! (cap height 21, baseline at 0, y pointing up).
use crate::error::IoError;
use crate::image::save_image;
use ndarray::Array3;
use std::path::{Path, PathBuf};

pub type Rgb = [u8; 3];

pub const WHITE: Rgb = [255, 255, 255];
pub const BLACK: Rgb = [0, 0, 0];
pub const RED: Rgb = [255, 0, 0];
pub const GREEN: Rgb = [0, 255, 0];
pub const BLUE: Rgb = [0, 0, 255];

/// Side length of the generated sample scenes.
pub const SAMPLE_SIZE: usize = 512;

/// Solid white `(height, width, 3)` canvas.
pub fn blank_canvas(width: usize, height: usize) -> Array3<u8> {
    Array3::from_elem((height, width, 3), 255)
}

/// Horizontal ramp from 0 (left) to 255 (right), replicated to RGB, with a
/// centered solid white square of `side` pixels.
pub fn gradient_with_square(width: usize, height: usize, side: usize) -> Array3<u8> {
    let span = width.saturating_sub(1).max(1);
    let mut img = Array3::from_shape_fn((height, width, 3), |(_, x, _)| (x * 255 / span) as u8);
    let (x0, y0) = (width.saturating_sub(side) / 2, height.saturating_sub(side) / 2);
    fill_rect(&mut img, (x0, y0), (x0 + side, y0 + side), WHITE);
    img
}

#[inline]
fn put(img: &mut Array3<u8>, x: usize, y: usize, color: Rgb) {
    for (c, &v) in color.iter().enumerate() {
        img[[y, x, c]] = v;
    }
}

/// Fill the half-open box `[x0, x1) × [y0, y1)`, clipped to the canvas.
pub fn fill_rect(img: &mut Array3<u8>, (x0, y0): (usize, usize), (x1, y1): (usize, usize), color: Rgb) {
    let (h, w, _) = img.dim();
    for y in y0.min(h)..y1.min(h) {
        for x in x0.min(w)..x1.min(w) {
            put(img, x, y, color);
        }
    }
}

/// Rectangle outline through the corners `p0` and `p1` (inclusive).
pub fn draw_rect(img: &mut Array3<u8>, p0: (usize, usize), p1: (usize, usize), color: Rgb, thickness: usize) {
    let corners = [(p0.0, p0.1), (p1.0, p0.1), (p1.0, p1.1), (p0.0, p1.1)];
    for i in 0..4 {
        draw_line(img, corners[i], corners[(i + 1) % 4], color, thickness);
    }
}

/// Filled disc.
pub fn fill_circle(img: &mut Array3<u8>, center: (usize, usize), radius: usize, color: Rgb) {
    let (cx, cy, r) = (center.0 as f64, center.1 as f64, radius as f64);
    paint_where(img, (cx - r, cy - r, cx + r, cy + r), |x, y| (x - cx).hypot(y - cy) <= r, color);
}

/// Circle outline.
pub fn draw_circle(img: &mut Array3<u8>, center: (usize, usize), radius: usize, color: Rgb, thickness: usize) {
    let half = thickness.max(1) as f64 / 2.0;
    let (cx, cy, r) = (center.0 as f64, center.1 as f64, radius as f64);
    let reach = r + half;
    paint_where(
        img,
        (cx - reach, cy - reach, cx + reach, cy + reach),
        |x, y| ((x - cx).hypot(y - cy) - r).abs() <= half,
        color,
    );
}

/// Line segment of the given thickness.
pub fn draw_line(img: &mut Array3<u8>, p0: (usize, usize), p1: (usize, usize), color: Rgb, thickness: usize) {
    let half = thickness.max(1) as f64 / 2.0;
    let (ax, ay) = (p0.0 as f64, p0.1 as f64);
    let (bx, by) = (p1.0 as f64, p1.1 as f64);
    let (vx, vy) = (bx - ax, by - ay);
    let len2 = vx * vx + vy * vy;
    let bbox = (ax.min(bx) - half, ay.min(by) - half, ax.max(bx) + half, ay.max(by) + half);
    paint_where(img, bbox, |x, y| {
        let t = if len2 > 0.0 {
            (((x - ax) * vx + (y - ay) * vy) / len2).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let (px, py) = (ax + t * vx, ay + t * vy);
        (x - px).hypot(y - py) <= half
    }, color);
}

/// Closed polygon outline.
pub fn draw_polygon(img: &mut Array3<u8>, points: &[(usize, usize)], color: Rgb, thickness: usize) {
    for (i, &p) in points.iter().enumerate() {
        draw_line(img, p, points[(i + 1) % points.len()], color, thickness);
    }
}

/// Polylines of one glyph, in font units.
type Strokes = &'static [&'static [(i32, i32)]];

const BOWL_RIGHT: &[(i32, i32)] = &[
    (15, 11), (13, 13), (11, 14), (8, 14), (6, 13), (4, 11), (3, 8), (3, 6),
    (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3),
];

/// Advance width and strokes for `c`, if the font has it.
fn glyph(c: char) -> Option<(i32, Strokes)> {
    let g: (i32, Strokes) = match c {
        ' ' => (16, &[]),
        'E' => (19, &[&[(4, 0), (4, 21), (17, 21)], &[(4, 11), (12, 11)], &[(4, 0), (17, 0)]]),
        'V' => (18, &[&[(1, 21), (9, 0), (17, 21)]]),
        'd' => (19, &[&[(15, 21), (15, 0)], BOWL_RIGHT]),
        'e' => (
            18,
            &[&[
                (3, 8), (15, 8), (15, 10), (14, 12), (13, 13), (11, 14), (8, 14), (6, 13),
                (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3),
            ]],
        ),
        'g' => (
            19,
            &[&[(15, 14), (15, -4), (14, -7), (13, -8), (11, -9), (8, -9), (6, -8)], BOWL_RIGHT],
        ),
        'i' => (8, &[&[(3, 21), (4, 20), (5, 21), (4, 22), (3, 21)], &[(4, 14), (4, 0)]]),
        'n' => (
            19,
            &[&[(4, 14), (4, 0)], &[(4, 10), (7, 13), (9, 14), (12, 14), (14, 13), (15, 10), (15, 0)]],
        ),
        'o' => (
            19,
            &[&[
                (8, 14), (6, 13), (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0),
                (13, 1), (15, 3), (16, 6), (16, 8), (15, 11), (13, 13), (11, 14), (8, 14),
            ]],
        ),
        's' => (
            17,
            &[&[
                (14, 11), (13, 13), (10, 14), (7, 14), (4, 13), (3, 11), (4, 9), (6, 8),
                (11, 7), (13, 6), (14, 4), (14, 3), (13, 1), (10, 0), (7, 0), (4, 1), (3, 3),
            ]],
        ),
        _ => return None,
    };
    Some(g)
}

/// Stroke `text` with its baseline starting at `origin`; one font unit is
/// `scale` pixels. Characters without a glyph advance like a space.
pub fn draw_text(img: &mut Array3<u8>, text: &str, origin: (usize, usize), scale: f64, color: Rgb, thickness: usize) {
    let to_px = |v: f64| v.round().max(0.0) as usize;
    let mut pen = origin.0 as f64;
    let base = origin.1 as f64;
    for c in text.chars() {
        let (advance, strokes) = glyph(c).unwrap_or((16, &[]));
        for stroke in strokes {
            for pair in stroke.windows(2) {
                let [(x0, y0), (x1, y1)] = [pair[0], pair[1]];
                draw_line(
                    img,
                    (to_px(pen + x0 as f64 * scale), to_px(base - y0 as f64 * scale)),
                    (to_px(pen + x1 as f64 * scale), to_px(base - y1 as f64 * scale)),
                    color,
                    thickness,
                );
            }
        }
        pen += advance as f64 * scale;
    }
}

/// Paint every pixel of the inclusive box `[x0, x1] × [y0, y1]` (clipped)
/// for which `inside` holds.
fn paint_where(
    img: &mut Array3<u8>,
    (x0, y0, x1, y1): (f64, f64, f64, f64),
    inside: impl Fn(f64, f64) -> bool,
    color: Rgb,
) {
    let (h, w, _) = img.dim();
    if w == 0 || h == 0 {
        return;
    }
    let clip = |v: f64, n: usize| v.max(0.0).min((n - 1) as f64) as usize;
    for y in clip(y0.floor(), h)..=clip(y1.ceil(), h) {
        for x in clip(x0.floor(), w)..=clip(x1.ceil(), w) {
            if inside(x as f64, y as f64) {
                put(img, x, y, color);
            }
        }
    }
}

/// The named sample scenes written by [`generate_samples`].
pub fn sample_scenes() -> Vec<(&'static str, Array3<u8>)> {
    let n = SAMPLE_SIZE;

    let mut rectangles = blank_canvas(n, n);
    draw_rect(&mut rectangles, (50, 50), (450, 200), BLACK, 3);
    fill_rect(&mut rectangles, (100, 250), (401, 451), RED);

    let mut circles = blank_canvas(n, n);
    draw_circle(&mut circles, (256, 256), 150, BLACK, 3);
    fill_circle(&mut circles, (256, 256), 75, BLUE);

    let mut grid = blank_canvas(n, n);
    for x in (50..n).step_by(50) {
        draw_line(&mut grid, (x, 50), (x, 462), BLACK, 1);
    }
    for y in (50..n).step_by(50) {
        draw_line(&mut grid, (50, y), (462, y), BLACK, 1);
    }

    let mut text = blank_canvas(n, n);
    draw_text(&mut text, "Edge Vision", (40, 260), 2.0, BLACK, 3);

    let mut mixed = blank_canvas(n, n);
    draw_rect(&mut mixed, (30, 30), (200, 200), BLUE, 4);
    fill_circle(&mut mixed, (350, 150), 80, GREEN);
    draw_polygon(&mut mixed, &[(100, 300), (200, 450), (50, 450)], RED, 3);

    vec![
        ("rectangles.png", rectangles),
        ("circles.png", circles),
        ("grid.png", grid),
        ("text.png", text),
        ("mixed.png", mixed),
    ]
}

/// Write every sample scene into `output_dir` and return the written paths.
pub fn generate_samples(output_dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    sample_scenes()
        .into_iter()
        .map(|(name, img)| {
            let path = output_dir.join(name);
            save_image(&img, &path)?;
            Ok(path)
        })
        .collect()
}
