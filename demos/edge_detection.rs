use std::time::Instant;

use canny_edge::{detect_edges, load, merge, save, Thresholds};
use env_logger::Builder;
use log::info;

fn main() {
    Builder::from_default_env().format_timestamp_nanos().init();
    // Load image
    let img = load("test_image/edge-small.png").unwrap();

    info!("start detection on {}x{}", img.width(), img.height());

    let instance = Instant::now();

    // Edge detection with the default 40/80 thresholds
    let edges = detect_edges(&img, Thresholds::default()).unwrap();

    let elapsed = instance.elapsed();
    info!("detection took: {elapsed:?}");

    // Input on the left, edges on the right
    let result = merge(&img, &edges).unwrap();
    save("test_image/canny_edges.png", &result).unwrap();

    info!(
        "marked {} edge pixels",
        edges.iter().filter(|&&value| value == 255).count()
    );
}
