//! Headless batch runner: load an image onto a canvas, run filters, save.
//!
//!   rusty-canvas -i photo.png -o out.png --brightness 20 --blur 3
//!   rusty-canvas -i scan.jpg -o scan.png --width 800 --height 600 --sharpen

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use rusty_canvas::ops::convolution::MAX_BOX_BLUR;
use rusty_canvas::utils::importer;
use rusty_canvas::{CanvasConfig, CanvasEngine, FixedMetrics};

/// Apply canvas filters to an image without opening a window.
#[derive(Parser, Debug)]
#[command(name = "rusty-canvas", about = "Headless canvas filter runner")]
struct CliArgs {
    /// Image to load onto the canvas.
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Where to write the result; the format follows the extension.
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Canvas width. Defaults to the input image's width.
    #[arg(long)]
    width: Option<usize>,

    /// Canvas height. Defaults to the input image's height.
    #[arg(long)]
    height: Option<usize>,

    /// Brightness delta (-255..255).
    #[arg(long, allow_hyphen_values = true, value_parser = clap::value_parser!(i32).range(-255..=255))]
    brightness: Option<i32>,

    /// Contrast factor (0.1..3.0).
    #[arg(long)]
    contrast: Option<f32>,

    /// Box blur kernel size (1..99); even sizes round up to the next odd one.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..=MAX_BOX_BLUR as u64))]
    blur: Option<u64>,

    /// Apply the 3x3 sharpen kernel.
    #[arg(long)]
    sharpen: bool,

    /// Number of undo steps kept while processing.
    #[arg(long, default_value_t = rusty_canvas::app::state::DEFAULT_UNDO_LIMIT)]
    history_depth: usize,

    /// Log each step with timings.
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: CliArgs) -> rusty_canvas::Result<()> {
    let started = Instant::now();
    let decoded = importer::decode_path(&args.input)?;
    let width = args.width.unwrap_or(decoded.width() as usize);
    let height = args.height.unwrap_or(decoded.height() as usize);

    let config = CanvasConfig::default()
        .with_size(width, height)
        .with_history_depth(args.history_depth);
    let mut engine = CanvasEngine::new(config);
    engine.import_image(&decoded);

    if let Some(delta) = args.brightness {
        engine.apply_brightness(delta);
    }
    if let Some(factor) = args.contrast {
        engine.apply_contrast(rusty_canvas::app::providers::CONTRAST_RANGE.sanitize(factor));
    }
    if let Some(size) = args.blur {
        engine.apply_blur(size as usize);
    }
    if args.sharpen {
        engine.apply_sharpen();
    }

    engine.save_image(&args.output, &FixedMetrics)?;
    log::info!(
        "{} -> {} in {:?}",
        args.input.display(),
        args.output.display(),
        started.elapsed()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
