//! canny-edge: run the edge detection pipeline on an image file.
//!
//! Writes the binary edge map, optionally a side-by-side view of input and
//! output, and optionally the `imageproc` Canny result for comparison. Stage
//! timings are logged at info level.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=info cargo run --release --features cli -- [OPTIONS] <INPUT>
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use canny_edge::{gradient, link, load, merge, save, smooth, suppress, EdgeError, Thresholds};
use clap::Parser;
use env_logger::{Builder, Env};
use image::GrayImage;
use log::info;

/// Integer-arithmetic Canny edge detection.
#[derive(Parser)]
#[command(name = "canny-edge", version)]
struct Cli {
    /// Path to the input image (any format the `image` crate decodes).
    input: PathBuf,

    /// Where to write the edge map. Defaults to `<input stem>_canny.png`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Low hysteresis threshold (0-255).
    #[arg(long, default_value_t = Thresholds::DEFAULT_LOW)]
    low: f64,

    /// High hysteresis threshold (0-255).
    #[arg(long, default_value_t = Thresholds::DEFAULT_HIGH)]
    high: f64,

    /// Also write the input and the edge map side by side.
    #[arg(long)]
    side_by_side: Option<PathBuf>,

    /// Also write `imageproc::edges::canny` output with the same thresholds.
    #[arg(long)]
    reference: Option<PathBuf>,
}

/// Wall-clock time of the whole pipeline and of each stage, in pipeline order.
///
/// `total` comes from its own stopwatch around all four stages.
struct StageTimings {
    total: Duration,
    smooth: Duration,
    gradient: Duration,
    suppress: Duration,
    link: Duration,
}

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_nanos()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), EdgeError> {
    let thresholds = Thresholds::new(cli.low, cli.high)?;
    let image = load(&cli.input)?;
    info!(
        "loaded {} ({}x{})",
        cli.input.display(),
        image.width(),
        image.height()
    );

    let (edges, timings) = timed_pipeline(&image, thresholds);
    info!(
        "total {:?}, smooth {:?}, gradient {:?}, suppress {:?}, link {:?}",
        timings.total,
        timings.smooth,
        timings.gradient,
        timings.suppress,
        timings.link
    );
    info!(
        "{} of {} pixels marked as edge",
        edges.iter().filter(|&&value| value == 255).count(),
        edges.len()
    );

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));
    save(&output, &edges)?;
    info!("wrote {}", output.display());

    if let Some(path) = &cli.side_by_side {
        save(path, &merge(&image, &edges)?)?;
        info!("wrote {}", path.display());
    }

    if let Some(path) = &cli.reference {
        let start = Instant::now();
        let reference =
            imageproc::edges::canny(&image, thresholds.low() as f32, thresholds.high() as f32);
        info!("imageproc canny {:?}", start.elapsed());
        save(path, &reference)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

/// Runs the four stages one by one so each can be timed.
fn timed_pipeline(image: &GrayImage, thresholds: Thresholds) -> (GrayImage, StageTimings) {
    let pipeline_start = Instant::now();

    let start = Instant::now();
    let smoothed = smooth(image);
    let smooth_time = start.elapsed();

    let start = Instant::now();
    let field = gradient(&smoothed);
    let gradient_time = start.elapsed();

    let start = Instant::now();
    let thinned = suppress(&field);
    let suppress_time = start.elapsed();

    let start = Instant::now();
    let edges = link(&thinned, thresholds);
    let link_time = start.elapsed();
    let total = pipeline_start.elapsed();

    let timings = StageTimings {
        total,
        smooth: smooth_time,
        gradient: gradient_time,
        suppress: suppress_time,
        link: link_time,
    };
    (edges, timings)
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "output".into(), |stem| stem.to_string_lossy());
    input.with_file_name(format!("{stem}_canny.png"))
}
