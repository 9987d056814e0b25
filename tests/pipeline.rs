// Integration tests for the full pipeline through the public API.
//
// The 5×5 fixture below is worked out by hand, stage by stage, from the stage
// definitions rather than compared with any other Canny implementation: the
// stencil, the in-place suppression and the inverted hysteresis polarity all
// differ from the textbook algorithm.

use canny_edge::{
    classify, detect_edges, gradient, link, smooth, suppress, Direction, Thresholds,
};
use image::{GrayImage, Luma};
use imageproc::gray_image;

fn single_bright_pixel() -> GrayImage {
    let mut image = GrayImage::new(5, 5);
    image.put_pixel(2, 2, Luma([200]));
    image
}

/// Deterministic pseudo-random texture.
fn texture(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        let h = x.wrapping_mul(73_856_093) ^ y.wrapping_mul(19_349_663);
        Luma([(h % 256) as u8])
    })
}

/// 8×8 column step from 0 to 255; its gradient saturates along the step.
fn hard_step() -> GrayImage {
    GrayImage::from_fn(8, 8, |x, _| Luma([if x < 4 { 0 } else { 255 }]))
}

// ===== Hand-computed scenario =====

#[test]
fn scenario_smoothed() {
    // Row pass: [0, 50, 100, 50, 0] on row 2. Column pass: 50/4, 100/4, 200/4.
    let expected = gray_image!(
        0, 0, 0, 0, 0;
        0, 12, 25, 12, 0;
        0, 25, 50, 25, 0;
        0, 12, 25, 12, 0;
        0, 0, 0, 0, 0);
    assert_eq!(smooth(&single_bright_pixel()), expected);
}

#[test]
fn scenario_gradient() {
    let field = gradient(&smooth(&single_bright_pixel()));

    // (1, 1): grad_x = grad_y = 38 -> sqrt(2888) = 53.7
    // (3, 1): grad_x = 13, grad_y = -37 -> sqrt(1538) = 39.2
    // (3, 3): grad_x = grad_y = -12 -> sqrt(288) = 16.9
    let expected_magnitude = gray_image!(
        0, 0, 0, 0, 0;
        0, 53, 53, 39, 0;
        0, 53, 53, 39, 0;
        0, 39, 39, 16, 0;
        0, 0, 0, 0, 0);
    assert_eq!(field.magnitude(), &expected_magnitude);

    let expected_buckets = [
        [Direction::AntiDiagonal, Direction::Diagonal, Direction::Vertical],
        [Direction::Diagonal, Direction::AntiDiagonal, Direction::Vertical],
        [Direction::Horizontal, Direction::Horizontal, Direction::AntiDiagonal],
    ];
    for (row, buckets) in expected_buckets.iter().enumerate() {
        for (col, bucket) in buckets.iter().enumerate() {
            let (x, y) = (col as u32 + 1, row as u32 + 1);
            assert_eq!(field.bucket(x, y), *bucket, "bucket at ({x}, {y})");
        }
    }
}

#[test]
fn scenario_suppressed() {
    let thinned = suppress(&gradient(&smooth(&single_bright_pixel())));

    // (3, 1) ties with (3, 2) below it and is zeroed; (3, 2) then reads 0 above
    // and survives. Likewise (1, 3) ties with (2, 3) and is zeroed, so (2, 3)
    // reads 0 on its left and survives.
    let expected = gray_image!(
        0, 0, 0, 0, 0;
        0, 53, 53, 0, 0;
        0, 53, 53, 39, 0;
        0, 0, 39, 16, 0;
        0, 0, 0, 0, 0);
    assert_eq!(thinned, expected);
}

#[test]
fn scenario_full_pipeline() {
    let edges = detect_edges(&single_bright_pixel(), Thresholds::new(40.0, 80.0).unwrap()).unwrap();

    // Everything below 40 turns strong; the four 53s are ambiguous and no strong
    // pixel in the linking scan has them in its causal window, so cleanup drops them.
    let expected = gray_image!(
        255, 255, 255, 255, 255;
        255, 0, 0, 255, 255;
        255, 0, 0, 255, 255;
        255, 255, 255, 255, 255;
        255, 255, 255, 255, 255);
    assert_eq!(edges, expected);
}

// ===== Properties =====

#[test]
fn every_stage_preserves_dimensions() {
    for (w, h) in [(1, 1), (2, 3), (3, 2), (16, 9), (33, 47)] {
        let image = texture(w, h);
        let smoothed = smooth(&image);
        let field = gradient(&smoothed);
        let thinned = suppress(&field);
        let edges = link(&thinned, Thresholds::default());

        assert_eq!(smoothed.dimensions(), (w, h));
        assert_eq!(field.dimensions(), (w, h));
        assert_eq!(field.direction().dimensions(), (w, h));
        assert_eq!(thinned.dimensions(), (w, h));
        assert_eq!(edges.dimensions(), (w, h));
    }
}

#[test]
fn output_is_binary() {
    let image = texture(40, 30);
    for (low, high) in [(40.0, 80.0), (0.0, 0.0), (255.0, 255.0), (5.0, 250.0)] {
        let edges = detect_edges(&image, Thresholds::new(low, high).unwrap()).unwrap();
        assert!(
            edges.iter().all(|&value| value == 0 || value == 255),
            "non-binary output for ({low}, {high})"
        );
    }
}

#[test]
fn pipeline_is_deterministic() {
    let image = texture(64, 48);
    let thresholds = Thresholds::default();
    let first = detect_edges(&image, thresholds).unwrap();
    let second = detect_edges(&image, thresholds).unwrap();
    assert_eq!(first, second);
}

#[test]
fn raising_high_never_adds_strong_pixels() {
    let thinned = suppress(&gradient(&smooth(&texture(50, 50))));
    let strong = |high: f64| {
        classify(&thinned, Thresholds::new(20.0, high).unwrap())
            .iter()
            .filter(|&&value| value == 255)
            .count()
    };

    let counts: Vec<usize> = (20..=255).step_by(5).map(|high| strong(f64::from(high))).collect();
    assert!(counts.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn saturated_ridge_stays_out_of_strong_set_at_full_high() {
    // Smoothed columns read 0, 0, 0, 63, 191, 255, ...; grad_y at x = 3 is 256 and
    // saturates. The vertical plateau collapses in scan order except its last row.
    let thinned = suppress(&gradient(&smooth(&hard_step())));
    assert_eq!(thinned.get_pixel(3, 6)[0], 255);

    let at = |high: f64| Thresholds::new(40.0, high).unwrap();
    let strong = |image: &GrayImage| image.iter().filter(|&&value| value == 255).count();

    let mut previous = usize::MAX;
    for high in [40.0, 120.0, 200.0, 250.0, 254.0, 255.0] {
        let classified = classify(&thinned, at(high));
        assert!(strong(&classified) <= previous, "high {high}");
        previous = strong(&classified);
    }

    assert_eq!(classify(&thinned, at(255.0)).get_pixel(3, 6)[0], 254);
    assert_eq!(link(&thinned, at(255.0)), link(&thinned, at(250.0)));
    assert_eq!(
        detect_edges(&hard_step(), at(255.0)).unwrap(),
        detect_edges(&hard_step(), at(250.0)).unwrap()
    );
}

#[test]
fn border_policies_hold_for_any_interior() {
    let image = texture(12, 10);
    let (w, h) = image.dimensions();
    let smoothed = smooth(&image);
    let field = gradient(&smoothed);
    let thinned = suppress(&field);

    for &(x, y) in &[(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        assert_eq!(smoothed.get_pixel(x, y), image.get_pixel(x, y));
    }
    for (x, y, pixel) in field.magnitude().enumerate_pixels() {
        if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
            assert_eq!(pixel[0], 0);
            assert_eq!(field.direction().get_pixel(x, y)[0], 0.0);
            assert_eq!(thinned.get_pixel(x, y), pixel);
        }
    }
}
