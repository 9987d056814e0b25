//! Direction-aware non-maximum suppression.

use image::{GrayImage, Luma};

use crate::gradient::GradientField;

/// Thins gradient-magnitude ridges by suppressing pixels that are not strict local maxima.
///
/// This implements the non-maximum suppression step of Canny edge detection. Each interior
/// pixel's direction is quantized into one of four 45° buckets (see
/// [`Direction`](crate::Direction)) and the pixel is compared with its two neighbors along
/// that bucket's axis.
///
/// # Arguments
///
/// * `field` - Gradient field produced by [`gradient`](crate::gradient())
///
/// # Returns
///
/// A magnitude image of the same dimensions in which non-maximal pixels are zero.
///
/// # Algorithm
///
/// 1. Start from a copy of the magnitude image, so border pixels pass through unchanged
/// 2. Visit interior pixels in row-major order, skipping those already at zero
/// 3. Bucket the direction and fetch the two neighbors along the bucket's axis
/// 4. Zero the pixel if its magnitude is `<=` either neighbor
///
/// # Neighbor Selection
///
/// - Diagonal (-45°): up-left and down-right
/// - Horizontal (0°): left and right
/// - Anti-diagonal (45°): up-right and down-left
/// - Vertical (90°): up and down
///
/// # Scan Order
///
/// Suppression happens in place: neighbors above and to the left have already been
/// visited and are read with their suppressed values.
///
/// # Ties
///
/// Equality suppresses, so a plateau of equal magnitudes collapses entirely to zero
/// instead of leaving a single ridge pixel.
pub fn suppress(field: &GradientField) -> GrayImage {
    let mut out = field.magnitude().clone();
    let (width, height) = out.dimensions();

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let center = out.get_pixel(x, y)[0];
            if center == 0 {
                continue;
            }

            let [first, second] = field
                .bucket(x, y)
                .neighbor_offsets()
                .map(|(dx, dy)| out.get_pixel(x.wrapping_add_signed(dx), y.wrapping_add_signed(dy))[0]);

            if center <= first || center <= second {
                out.put_pixel(x, y, Luma([0]));
            }
        }
    }
    debug!(
        "suppression kept {} nonzero pixels",
        out.iter().filter(|&&value| value != 0).count()
    );
    out
}
