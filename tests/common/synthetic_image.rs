use ndarray::{Array2, Array3};

/// Generates a simple high-contrast checkerboard image.
#[allow(dead_code)]
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Array2<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    Array2::from_shape_fn((height, width), |(y, x)| {
        if (x / cell + y / cell) & 1 == 0 {
            32
        } else {
            220
        }
    })
}

/// 128×128 RGB horizontal ramp (0..=255) with a solid white 64×64 square at
/// `[32, 96) × [32, 96)`.
#[allow(dead_code)]
pub fn gradient_square_rgb() -> Array3<u8> {
    edge_vision::synthetic::gradient_with_square(128, 128, 64)
}

/// Photometric negative `255 - v`.
#[allow(dead_code)]
pub fn negative<D: ndarray::Dimension>(image: &ndarray::Array<u8, D>) -> ndarray::Array<u8, D> {
    image.mapv(|v| 255 - v)
}
