//! Double-threshold classification and causal edge linking.

use image::{GrayImage, Luma};
use imageproc::definitions::{HasBlack, HasWhite};

use crate::EdgeError;

/// Low/high threshold pair for [`link`].
///
/// Both values lie in `[0, 255]` and `low <= high`; [`Thresholds::new`] enforces this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    low: f64,
    high: f64,
}

impl Thresholds {
    pub const DEFAULT_LOW: f64 = 40.0;
    pub const DEFAULT_HIGH: f64 = 80.0;

    /// Validates and builds a threshold pair.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeError::InvalidThresholds`] if either value is not a finite number
    /// in `[0, 255]`, or if `low > high`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use canny_edge::Thresholds;
    ///
    /// assert!(Thresholds::new(40.0, 80.0).is_ok());
    /// assert!(Thresholds::new(80.0, 40.0).is_err());
    /// assert!(Thresholds::new(-1.0, 300.0).is_err());
    /// ```
    pub fn new(low: f64, high: f64) -> Result<Self, EdgeError> {
        let in_range = |value: f64| (0.0..=255.0).contains(&value);
        if !in_range(low) || !in_range(high) || low > high {
            return Err(EdgeError::InvalidThresholds { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low: Self::DEFAULT_LOW,
            high: Self::DEFAULT_HIGH,
        }
    }
}

/// Range of values an ambiguous pixel may hold after [`classify`].
const AMBIGUOUS_MIN: u8 = 1;
const AMBIGUOUS_MAX: u8 = 254;

/// Classifies every pixel against the threshold pair (pass 1 of [`link`]).
///
/// # Polarity
///
/// The classification is inverted relative to textbook Canny:
///
/// - **Above `high`**: set to 0 (discarded)
/// - **Below `low`**: set to 255 (strong)
/// - **Within `[low, high]`**: kept as-is (ambiguous), clamped into `1..=254`
///
/// Ambiguous samples never share a value with strong or discarded ones: an in-band
/// 255 (possible when `high == 255`) is stored as 254, and an in-band 0 (possible
/// when `low == 0`) as 1. Raising `high` with `low` fixed therefore never increases
/// the number of 255 pixels.
pub fn classify(magnitude: &GrayImage, thresholds: Thresholds) -> GrayImage {
    let strong = Luma::<u8>::white();
    let discarded = Luma::<u8>::black();

    let mut out = magnitude.clone();
    for pixel in out.pixels_mut() {
        let value = f64::from(pixel[0]);
        if value > thresholds.high {
            *pixel = discarded;
        } else if value < thresholds.low {
            *pixel = strong;
        } else {
            pixel[0] = pixel[0].clamp(AMBIGUOUS_MIN, AMBIGUOUS_MAX);
        }
    }
    out
}

/// Links classified pixels into a binary edge map using two thresholds.
///
/// This function implements the final step of the pipeline as three in-place passes over
/// a copy of `magnitude`.
///
/// # Arguments
///
/// * `magnitude` - Magnitude image after non-maximum suppression
/// * `thresholds` - Validated low/high pair
///
/// # Returns
///
/// An image of the same dimensions whose every pixel is either 0 or 255.
///
/// # Algorithm
///
/// 1. **Classify**: see [`classify`]; note the inverted polarity
/// 2. **Link**: for every 255 pixel at `(x, y)` with `1 <= x < width - 2` and
///    `1 <= y < height - 2`, promote ambiguous pixels (values `1..=254`) among
///    `(x-1, y-1)`, `(x, y-1)`, `(x-1, y)` to 255
/// 3. **Clean up**: every pixel that is not 255 becomes 0
///
/// # Linking Window
///
/// The window is the causal 2×2 block ending at the strong pixel, not a symmetric
/// 3×3 neighborhood. Ambiguous pixels below or to the right of a strong pixel are
/// never promoted by it, and since promoted pixels lie at or before the scan position
/// a promotion never triggers further promotions.
pub fn link(magnitude: &GrayImage, thresholds: Thresholds) -> GrayImage {
    let strong = Luma::<u8>::white();
    let discarded = Luma::<u8>::black();

    let mut out = classify(magnitude, thresholds);
    let (width, height) = out.dimensions();

    for y in 1..height.saturating_sub(2) {
        for x in 1..width.saturating_sub(2) {
            if out.get_pixel(x, y)[0] != strong[0] {
                continue;
            }
            for ny in y - 1..=y {
                for nx in x - 1..=x {
                    let value = out.get_pixel(nx, ny)[0];
                    if value != discarded[0] && value != strong[0] {
                        out.put_pixel(nx, ny, strong);
                    }
                }
            }
        }
    }

    for pixel in out.pixels_mut() {
        if *pixel != strong {
            *pixel = discarded;
        }
    }
    debug!(
        "hysteresis kept {} edge pixels",
        out.iter().filter(|&&value| value == strong[0]).count()
    );
    out
}
