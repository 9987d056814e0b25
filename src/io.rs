//! Image file collaborators: decode, encode, and side-by-side composition.

use std::path::Path;

use image::{imageops, GrayImage};

use crate::EdgeError;

/// Width in pixels of the black gap [`merge`] puts between its two inputs.
pub const MERGE_GAP: u32 = 5;

/// Loads an image file and converts it to 8-bit grayscale.
///
/// Any format enabled in the `image` crate is accepted; color inputs are reduced
/// to luma.
///
/// # Errors
///
/// - [`EdgeError::Decode`] if the file cannot be read or decoded
/// - [`EdgeError::EmptyImage`] if the decoded image has no pixels
pub fn load<P: AsRef<Path>>(path: P) -> Result<GrayImage, EdgeError> {
    let image = image::open(path.as_ref())?.to_luma8();
    if image.width() == 0 || image.height() == 0 {
        return Err(EdgeError::EmptyImage);
    }
    debug!(
        "loaded {} ({}x{})",
        path.as_ref().display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Saves a grayscale image, choosing the encoder from the file extension.
///
/// # Errors
///
/// Returns [`EdgeError::Encode`] if the format is unknown or writing fails.
pub fn save<P: AsRef<Path>>(path: P, image: &GrayImage) -> Result<(), EdgeError> {
    let path = path.as_ref();
    image.save(path).map_err(|source| EdgeError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Places two images side by side for inspection.
///
/// `left` is drawn at the origin and `right` starts [`MERGE_GAP`] pixels after
/// the end of `left`; the gap is black.
///
/// # Errors
///
/// - [`EdgeError::DimensionMismatch`] if the two images differ in height
/// - [`EdgeError::CanvasTooWide`] if the combined width does not fit in `u32`
///
/// # Examples
///
/// ```rust
/// use canny_edge::merge;
/// use image::GrayImage;
///
/// let merged = merge(&GrayImage::new(4, 3), &GrayImage::new(6, 3)).unwrap();
/// assert_eq!(merged.dimensions(), (4 + 5 + 6, 3));
/// ```
pub fn merge(left: &GrayImage, right: &GrayImage) -> Result<GrayImage, EdgeError> {
    if left.height() != right.height() {
        return Err(EdgeError::DimensionMismatch {
            expected: (right.width(), left.height()),
            found: right.dimensions(),
        });
    }

    let width = left
        .width()
        .checked_add(MERGE_GAP)
        .and_then(|offset| offset.checked_add(right.width()))
        .ok_or(EdgeError::CanvasTooWide {
            left: left.width(),
            gap: MERGE_GAP,
            right: right.width(),
        })?;
    let right_offset = i64::from(left.width()) + i64::from(MERGE_GAP);

    let mut canvas = GrayImage::new(width, left.height());
    imageops::replace(&mut canvas, left, 0, 0);
    imageops::replace(&mut canvas, right, right_offset, 0);
    Ok(canvas)
}
