//! Replays recorded facial landmarks through the head pose tracker and prints
//! the smoothed rotation for every frame.

use anyhow::{Context, Result};
use clap::Parser;
use landmark_head_pose::{
    config::{Config, EXAMPLE_CONFIG},
    frames::Recording,
    tracker::HeadTracker,
};
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark recording to replay (YAML)
    #[arg(short, long, required_unless_present = "print_config")]
    input: Option<String>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Smoother type, optionally with a factor (e.g. `exponential:0.2`, `none`)
    #[arg(short, long)]
    smoother: Option<String>,

    /// Smoothing factor in (0, 1]; conflicts with a different factor given in `--smoother`
    #[arg(short, long)]
    factor: Option<f64>,

    /// Decimal places per axis
    #[arg(short, long)]
    precision: Option<usize>,

    /// Also print the raw estimate for each frame
    #[arg(long)]
    raw: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::from_file(path).with_context(|| format!("loading config {path}"))?,
        None => Config::default(),
    };
    if let Some(smoother) = args.smoother {
        config.smoothing.smoother = smoother;
    }
    if let Some(factor) = args.factor {
        config.smoothing.factor = factor;
    }
    if let Some(precision) = args.precision {
        config.display.precision = precision;
    }

    let mut tracker = HeadTracker::from_config(&config).context("building tracker")?;
    info!("Using smoother {}", tracker.smoother_name());

    let input = args.input.context("no input recording given")?;
    let recording = Recording::from_file(&input).with_context(|| format!("loading recording {input}"))?;

    let precision = config.display.precision;
    let mut failed = 0usize;
    for (index, frame) in recording.frames.iter().enumerate() {
        match tracker.process(frame.as_ref()) {
            Ok(pose) => {
                if args.raw {
                    println!("{index:>6}  raw [{:.*}]  smoothed [{:.*}]", precision, pose.raw, precision, pose.smoothed);
                } else {
                    println!("{index:>6}  {:.*}", precision, pose.smoothed);
                }
            }
            Err(e) => {
                warn!("Skipping frame {index}: {e}");
                failed += 1;
            }
        }
    }

    info!(
        "Processed {} frames ({} skipped), final rotation [{:.*}]",
        recording.frames.len(),
        failed,
        precision,
        tracker.rotation()
    );

    Ok(())
}
