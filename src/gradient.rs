//! Forward-difference gradient estimation and direction buckets.

use std::f32::consts::{FRAC_PI_2, PI};

use image::{GrayImage, Luma};
use imageproc::definitions::Image;

use crate::EdgeError;

/// Per-pixel gradient direction in radians, in `[-π/2, π/2]`.
pub type DirectionMap = Image<Luma<f32>>;

/// Lower edge of the 45° bucket, `π/8`.
const EIGHTH_PI: f32 = PI / 8.0;
/// Upper edge of the 45° bucket, `3π/8`.
const THREE_EIGHTHS_PI: f32 = 3.0 * PI / 8.0;

/// One of the four 45°-wide direction buckets used for ridge thinning.
///
/// Each bucket names the axis along which a pixel is compared with its two
/// neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Centered on 0°, angles in `[-π/8, π/8)`: left and right neighbors.
    Horizontal,
    /// Centered on 45°, angles in `[π/8, 3π/8)`: up-right and down-left neighbors.
    AntiDiagonal,
    /// Centered on 90°, every other angle: up and down neighbors.
    Vertical,
    /// Centered on -45°, angles in `[-3π/8, -π/8)`: up-left and down-right neighbors.
    Diagonal,
}

impl Direction {
    /// Buckets a raw angle in radians.
    ///
    /// Angles outside `[-3π/8, 3π/8)`, including both `±π/2`, fall in
    /// [`Direction::Vertical`].
    pub fn from_angle(angle: f32) -> Self {
        if (-THREE_EIGHTHS_PI..-EIGHTH_PI).contains(&angle) {
            Direction::Diagonal
        } else if (-EIGHTH_PI..EIGHTH_PI).contains(&angle) {
            Direction::Horizontal
        } else if (EIGHTH_PI..THREE_EIGHTHS_PI).contains(&angle) {
            Direction::AntiDiagonal
        } else {
            Direction::Vertical
        }
    }

    /// Offsets `(dx, dy)` of the two neighbors compared along this bucket.
    pub fn neighbor_offsets(self) -> [(i32, i32); 2] {
        match self {
            Direction::Diagonal => [(-1, -1), (1, 1)],
            Direction::Horizontal => [(-1, 0), (1, 0)],
            Direction::AntiDiagonal => [(1, -1), (-1, 1)],
            Direction::Vertical => [(0, -1), (0, 1)],
        }
    }
}

/// Gradient magnitude and direction rasters with identical dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientField {
    magnitude: GrayImage,
    direction: DirectionMap,
}

impl GradientField {
    /// Pairs a magnitude raster with a direction raster.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeError::DimensionMismatch`] if the two rasters differ in
    /// width or height.
    pub fn new(magnitude: GrayImage, direction: DirectionMap) -> Result<Self, EdgeError> {
        if magnitude.dimensions() != direction.dimensions() {
            return Err(EdgeError::DimensionMismatch {
                expected: magnitude.dimensions(),
                found: direction.dimensions(),
            });
        }
        Ok(Self {
            magnitude,
            direction,
        })
    }

    pub fn magnitude(&self) -> &GrayImage {
        &self.magnitude
    }

    pub fn direction(&self) -> &DirectionMap {
        &self.direction
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.magnitude.dimensions()
    }

    /// Direction bucket at `(x, y)`.
    pub fn bucket(&self, x: u32, y: u32) -> Direction {
        Direction::from_angle(self.direction.get_pixel(x, y)[0])
    }
}

/// Estimates gradient magnitude and direction with a 2×2 forward-difference stencil.
///
/// For every interior pixel `(x, y)` the stencil reads the 2×2 block whose
/// top-left corner is the pixel itself:
///
/// ```text
/// grad_x = [p(x, y+1) - p(x, y)] + [p(x+1, y+1) - p(x+1, y)]
/// grad_y = [p(x+1, y) - p(x, y)] + [p(x+1, y+1) - p(x, y+1)]
/// ```
///
/// `grad_x` differences rows and `grad_y` differences columns. This is cheaper
/// than a centered Sobel stencil and is not numerically interchangeable with
/// one.
///
/// # Arguments
///
/// * `image` - Smoothed grayscale image
///
/// # Returns
///
/// A [`GradientField`] with the same dimensions as `image`.
///
/// # Magnitude
///
/// `sqrt(grad_x² + grad_y²)` truncated toward zero and saturated at 255. The
/// stencil can reach about 721, which saturates rather than wrapping.
///
/// # Direction
///
/// `atan(grad_y / grad_x)` in radians. When `grad_x` is zero the angle is
/// `π/2` for positive `grad_y`, `-π/2` for negative `grad_y`, and `0` when
/// both are zero. No NaN or infinity is ever stored.
///
/// # Border
///
/// The first and last rows and columns keep zero magnitude and zero direction.
pub fn gradient(image: &GrayImage) -> GradientField {
    let (width, height) = image.dimensions();
    let mut magnitude = GrayImage::new(width, height);
    let mut direction = DirectionMap::new(width, height);

    let p = |x: u32, y: u32| i32::from(image.get_pixel(x, y)[0]);

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let grad_x = (p(x, y + 1) - p(x, y)) + (p(x + 1, y + 1) - p(x + 1, y));
            let grad_y = (p(x + 1, y) - p(x, y)) + (p(x + 1, y + 1) - p(x, y + 1));

            magnitude.put_pixel(x, y, Luma([saturate_magnitude(grad_x, grad_y)]));
            direction.put_pixel(x, y, Luma([gradient_angle(grad_x, grad_y)]));
        }
    }

    GradientField {
        magnitude,
        direction,
    }
}

/// Euclidean norm truncated and clamped into the u8 range.
fn saturate_magnitude(grad_x: i32, grad_y: i32) -> u8 {
    let norm = f64::from(grad_x * grad_x + grad_y * grad_y).sqrt();
    norm.min(f64::from(u8::MAX)) as u8
}

/// `atan(grad_y / grad_x)` with an explicit convention for `grad_x == 0`.
fn gradient_angle(grad_x: i32, grad_y: i32) -> f32 {
    if grad_x == 0 {
        return match grad_y.signum() {
            1 => FRAC_PI_2,
            -1 => -FRAC_PI_2,
            _ => 0.0,
        };
    }
    (grad_y as f32 / grad_x as f32).atan()
}
