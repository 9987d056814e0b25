use std::path::PathBuf;

/// Errors reported by the edge detection pipeline and its I/O helpers.
///
/// Every variant is terminal for the invocation that produced it; nothing
/// in the pipeline retries or recovers partially.
#[derive(Debug, thiserror::Error)]
pub enum EdgeError {
    /// The input could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The input raster has zero width or zero height.
    #[error("input image is empty")]
    EmptyImage,

    /// The output raster could not be written.
    #[error("failed to write image to {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Two rasters that must share dimensions do not.
    #[error("dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },

    /// A composed raster would be wider than `u32::MAX` pixels.
    #[error("merged width {left} + {gap} + {right} overflows u32")]
    CanvasTooWide { left: u32, gap: u32, right: u32 },

    /// Thresholds outside `[0, 255]`, non-finite, or with `low > high`.
    #[error("invalid thresholds: low={low}, high={high} (need 0 <= low <= high <= 255)")]
    InvalidThresholds { low: f64, high: f64 },
}
