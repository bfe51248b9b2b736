//! Headless shell for the field-lab visualizer.
//!
//! Drives the full plot session against a PNG canvas:
//! - Loads a CSV scalar field and reports the load dialog text
//! - Renders the colormapped surface
//! - Renders the gradient-vector overlay
//! - Applies the requested vector scale
//! - Writes `surface.png` and `vectors.png`

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use field_common::{Notification, Severity};
use fieldlab::PngCanvas;
use plot_session::{PlotSession, ScaleFactor};

#[derive(Parser, Debug)]
#[command(name = "fieldlab")]
#[command(about = "Render a CSV scalar field as a surface and gradient-vector plot")]
struct Args {
    /// CSV file to load (one header row, comma-separated float rows)
    input: String,

    /// Directory for rendered PNG output
    #[arg(short, long, env = "FIELDLAB_OUT", default_value = "out")]
    output_dir: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value = "640")]
    width: usize,

    /// Canvas height in pixels
    #[arg(long, default_value = "480")]
    height: usize,

    /// Vector length multiplier (slider range 1-5)
    #[arg(short, long, default_value = "1")]
    scale: i64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting fieldlab");

    let mut canvas = PngCanvas::new(args.width, args.height);
    let mut session = PlotSession::new();

    // Load: the session reports a dialog payload either way.
    let result = session.load(&mut canvas, &args.input);
    present(&Notification::for_load(&args.input, &result));
    if result.is_err() {
        bail!("load failed, nothing to render");
    }

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("failed to create output directory {}", args.output_dir.display())
    })?;

    // Plot the surface once its control is enabled.
    if !session.controls().plot {
        bail!("plot action is not enabled");
    }
    session.render_surface(&mut canvas);
    let surface_path = args.output_dir.join("surface.png");
    write_png(&canvas, &surface_path)?;
    info!(path = %surface_path.display(), "surface written");

    // Overlay the gradient vectors.
    if !session.controls().quiver {
        bail!("quiver action is not enabled");
    }
    session.render_vectors(&mut canvas);

    // Apply the requested slider value.
    let k = ScaleFactor::clamped(args.scale);
    if session.controls().slider && k != session.scale() {
        session.rescale_vectors(&mut canvas, k);
    }

    let vectors_path = args.output_dir.join("vectors.png");
    write_png(&canvas, &vectors_path)?;
    info!(path = %vectors_path.display(), scale = k.get(), "vector plot written");

    Ok(())
}

/// Print a load dialog the way the windowed shell would show it.
fn present(note: &Notification) {
    match note.severity {
        Severity::Info => info!(title = %note.title, "{}", note.message),
        Severity::Critical => error!(title = %note.title, "{}", note.message),
    }
}

/// Encode the canvas and write it to `path`.
fn write_png(canvas: &PngCanvas, path: &std::path::Path) -> Result<()> {
    let png = canvas
        .encode_png()
        .map_err(anyhow::Error::msg)
        .context("PNG encoding failed")?;
    fs::write(path, png).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
