//! # Canny Edge Detection Library
//!
//! This crate computes binary edge maps from grayscale images with a four-stage Canny
//! pipeline built on integer arithmetic and small fixed stencils.
//!
//! ## Features
//!
//! - Separable 3×3 Gaussian smoothing with truncating integer division
//! - 2×2 forward-difference gradient magnitude and direction
//! - Direction-bucketed non-maximum suppression for edge thinning
//! - Double-threshold hysteresis with causal 2×2 linking
//! - Image loading, saving and side-by-side visualization helpers
//! - Optional debug logging (enable with `logger` feature)
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use canny_edge::{detect_edges, load, merge, save, Thresholds};
//!
//! // Load and process image
//! let image = load("example.png").unwrap();
//! let edges = detect_edges(&image, Thresholds::default()).unwrap();
//!
//! // Inspect input and output together
//! let view = merge(&image, &edges).unwrap();
//! save("edges_output.png", &view).unwrap();
//! ```
//!
//! ## Optional Features
//!
//! ### Logger Feature
//!
//! Enable debug logging to monitor the edge detection pipeline:
//!
//! ```toml
//! [dependencies]
//! canny-edge = { version = "0.1.0", features = ["logger"] }
//! log = "0.4"
//! env_logger = "0.11"
//! ```
//!
//! ```rust,no_run
//! use canny_edge::{detect_edges, load, Thresholds};
//!
//! // Initialize logger to see debug output
//! env_logger::init();
//!
//! let image = load("example.png").unwrap();
//! let edges = detect_edges(&image, Thresholds::default()).unwrap();
//! // With logger feature, you'll see debug messages like:
//! // DEBUG canny_edge: start detecting edges on 640x480 image
//! // DEBUG canny_edge::suppress: suppression kept 5210 nonzero pixels
//! // DEBUG canny_edge::hysteresis: hysteresis kept 301338 edge pixels
//! ```
//!
//! ### CLI Feature
//!
//! The `cli` feature builds the `canny-edge` binary, which runs the pipeline on a file and
//! logs per-stage timings.
//!
//! ## Stage-by-Stage Usage
//!
//! ```rust,no_run
//! use canny_edge::{gradient, link, load, smooth, suppress, Thresholds};
//!
//! let image = load("input.png").unwrap();
//! let smoothed = smooth(&image);
//! let field = gradient(&smoothed);
//! let thinned = suppress(&field);
//! let edges = link(&thinned, Thresholds::new(30.0, 90.0).unwrap());
//!
//! let edge_pixels = edges.iter().filter(|&&value| value == 255).count();
//! println!("{} edge pixels", edge_pixels);
//! ```
//!
//! ## Polarity
//!
//! Hysteresis classification is inverted relative to textbook Canny: magnitudes below the
//! low threshold become 255 and magnitudes above the high threshold become 0. See
//! [`classify`] for details.

use image::GrayImage;

// Conditional logging macros
#[cfg(feature = "logger")]
macro_rules! debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(feature = "logger"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

mod error;
mod gradient;
mod hysteresis;
mod io;
mod smooth;
mod suppress;

pub use error::EdgeError;
pub use gradient::{gradient, Direction, DirectionMap, GradientField};
pub use hysteresis::{classify, link, Thresholds};
pub use io::{load, merge, save, MERGE_GAP};
pub use smooth::smooth;
pub use suppress::suppress;

/// Runs the full edge detection pipeline on a grayscale image.
///
/// # Arguments
///
/// * `image` - Input grayscale image
/// * `thresholds` - Hysteresis thresholds, see [`Thresholds`]
///
/// # Returns
///
/// A binary image of the same dimensions, every pixel 0 or 255.
///
/// # Errors
///
/// Returns [`EdgeError::EmptyImage`] if `image` has zero width or height.
///
/// # Examples
///
/// ```rust
/// use canny_edge::{detect_edges, Thresholds};
/// use image::{GrayImage, Luma};
///
/// let image = GrayImage::from_fn(8, 8, |x, _y| Luma([if x < 4 { 0 } else { 200 }]));
/// let edges = detect_edges(&image, Thresholds::default()).unwrap();
/// assert!(edges.iter().all(|&value| value == 0 || value == 255));
/// ```
///
/// # Algorithm Pipeline
///
/// 1. [`smooth`]: separable 3×3 Gaussian
/// 2. [`gradient`]: forward-difference magnitude and direction
/// 3. [`suppress`]: non-maximum suppression for edge thinning
/// 4. [`link`]: hysteresis classification and linking
pub fn detect_edges(image: &GrayImage, thresholds: Thresholds) -> Result<GrayImage, EdgeError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(EdgeError::EmptyImage);
    }
    debug!("start detecting edges on {}x{} image", width, height);

    let smoothed = smooth(image);
    debug!("smoothed ok");

    let field = gradient(&smoothed);
    debug!("gradient ok");

    let thinned = suppress(&field);
    debug!("thinned ok");

    let edges = link(&thinned, thresholds);
    debug!("edges ok");

    Ok(edges)
}
