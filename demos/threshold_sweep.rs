use std::time::{Duration, Instant};

use canny_edge::{classify, gradient, link, smooth, suppress, Thresholds};
use env_logger::Builder;
use image::{GrayImage, Luma};
use log::info;

fn main() {
    Builder::from_default_env().format_timestamp_nanos().init();

    // Synthetic scene with edges in every direction bucket
    let image = GrayImage::from_fn(256, 256, |x, y| {
        let center_x = 128i32;
        let center_y = 128i32;
        let (x, y) = (x as i32, y as i32);

        let mut value: u8 = 20;

        // Bright square
        if (x - center_x).abs() < 48 && (y - center_y).abs() < 48 {
            value = 200;
        }

        // Diagonal stripe
        if (x - y).abs() < 6 {
            value = value.saturating_add(40);
        }

        // Disc
        let (dx, dy) = (x - 64, y - 192);
        if dx * dx + dy * dy < 30 * 30 {
            value = 120;
        }

        // Fine texture
        if (x + y) % 7 == 0 {
            value = value.saturating_sub(10);
        }

        Luma([value])
    });

    info!("image: {}x{}", image.width(), image.height());

    let smoothed = smooth(&image);
    let thinned = suppress(&gradient(&smoothed));

    // Sweep the high threshold with low fixed; strong counts must not grow
    let low = 30.0;
    let mut previous = usize::MAX;
    for high in [30.0, 60.0, 90.0, 120.0, 180.0, 255.0] {
        let thresholds = Thresholds::new(low, high).unwrap();
        let strong = classify(&thinned, thresholds)
            .iter()
            .filter(|&&value| value == 255)
            .count();
        let edges = link(&thinned, thresholds)
            .iter()
            .filter(|&&value| value == 255)
            .count();
        info!("low {low}, high {high}: {strong} strong after classify, {edges} after linking");
        assert!(strong <= previous);
        previous = strong;
    }

    // Average the time of each stage over several runs
    let runs = 5;
    let mut totals = [Duration::ZERO; 4];
    for i in 0..runs {
        let start = Instant::now();
        let smoothed = smooth(&image);
        totals[0] += start.elapsed();

        let start = Instant::now();
        let field = gradient(&smoothed);
        totals[1] += start.elapsed();

        let start = Instant::now();
        let thinned = suppress(&field);
        totals[2] += start.elapsed();

        let start = Instant::now();
        let _edges = link(&thinned, Thresholds::default());
        totals[3] += start.elapsed();

        info!("Run {}/{}", i + 1, runs);
    }

    info!("\n=== Stage Timing Summary ===");
    for (stage, total) in ["smooth", "gradient", "suppress", "link"].iter().zip(totals) {
        info!("{stage}: {:?}", total / runs);
    }
}
