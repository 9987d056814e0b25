//! Separable 3×3 Gaussian smoothing.

use image::{GrayImage, Luma};

/// 1×3 binomial kernel; its weights sum to 4.
const GAUSSIAN_KERNEL: [u32; 3] = [1, 2, 1];
const KERNEL_SUM: u32 = 4;

/// Smooths a grayscale image with a 3×3 Gaussian built from two 1×3 passes.
///
/// The image is filtered row by row with `[1, 2, 1] / 4`, transposed, filtered
/// row by row again (which acts on the original columns), and transposed back.
/// This yields the normalized 3×3 kernel `[1 2 1; 2 4 2; 1 2 1] / 16` without
/// ever materializing it, up to the truncation applied after each pass.
///
/// # Arguments
///
/// * `image` - Input grayscale image
///
/// # Returns
///
/// A new image with the same dimensions as `image`.
///
/// # Numeric Contract
///
/// Each weighted sum is divided by 4 with integer truncation, never rounding,
/// so `[1, 2, 2]` smooths to `[1, 1, 2]`.
///
/// # Border Policy
///
/// Each pass only filters the interior of the lines it sweeps:
///
/// - The four corner pixels are copied from the input unchanged.
/// - The rest of the first and last rows receive only the horizontal pass.
/// - The rest of the first and last columns receive only the vertical pass.
///
/// Images narrower or shorter than three pixels have no interior along that
/// axis and pass through unchanged along it.
///
/// # Examples
///
/// ```rust
/// use canny_edge::smooth;
/// use image::GrayImage;
///
/// let image = GrayImage::from_raw(3, 1, vec![1, 2, 2]).unwrap();
/// let smoothed = smooth(&image);
/// assert_eq!(smoothed.as_raw(), &vec![1, 1, 2]);
/// ```
pub fn smooth(image: &GrayImage) -> GrayImage {
    let horizontal = convolve_rows(image);
    let vertical = convolve_rows(&transpose(&horizontal));
    transpose(&vertical)
}

/// Applies the 1×3 kernel to the interior of every row.
///
/// Reads come from `image` and writes go to a copy, so the pass never sees
/// its own output.
fn convolve_rows(image: &GrayImage) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut out = image.clone();
    if width < 3 {
        return out;
    }

    for y in 0..height {
        for x in 1..width - 1 {
            let sum: u32 = GAUSSIAN_KERNEL
                .iter()
                .enumerate()
                .map(|(n, weight)| u32::from(image.get_pixel(x - 1 + n as u32, y)[0]) * weight)
                .sum();
            // sum <= 4 * 255, so the quotient always fits in a u8
            out.put_pixel(x, y, Luma([(sum / KERNEL_SUM) as u8]));
        }
    }
    out
}

fn transpose(image: &GrayImage) -> GrayImage {
    let (width, height) = image.dimensions();
    GrayImage::from_fn(height, width, |x, y| *image.get_pixel(y, x))
}
