//! `ezview`: open a P3/P6 PPM image in a window and move it around with the keyboard.
//!
//! | Key | Press | Repeat |
//! |-----|-------|--------|
//! | `Q` / `W` | rotate ±15° | ±2° |
//! | `A` / `S` | scale ×0.9 / ×1.1 | ×0.97 / ×1.03 |
//! | arrows | translate 0.1 | 0.04 |
//! | `Z` / `X` | shear x by y ∓0.1 | ∓0.04 |
//! | `C` / `V` | shear y by x ∓0.1 | ∓0.04 |
//! | `Escape` | quit | |

mod bindings;
mod config;
mod session;
mod window_size;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use winit::dpi::LogicalSize;

use ezview_engine::device::GpuInit;
use ezview_engine::logging::{init_logging, LoggingConfig};
use ezview_engine::transform::RotationPolicy;
use ezview_engine::window::{Runtime, RuntimeConfig};
use ezview_ppm::{ImageBuffer, Subtype};

use crate::config::ViewerConfig;
use crate::session::ViewerSession;
use crate::window_size::initial_window_size;

#[derive(Parser, Debug)]
#[command(name = "ezview", version, about = "View a P3/P6 PPM image with keyboard transforms")]
struct Cli {
    /// PPM file to open (P3 or P6, max value 255).
    path: PathBuf,

    /// Keep rotation angle-preserving on non-square windows.
    #[arg(long)]
    aspect_correct: bool,

    /// Log filter in env_logger syntax; overrides RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,

    /// Re-encode the image to OUT instead of opening a window.
    #[arg(long, value_name = "OUT")]
    convert: Option<PathBuf>,

    /// With --convert, write ASCII (P3) instead of binary (P6).
    #[arg(long, requires = "convert")]
    ascii: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..Default::default()
    });

    let image = ezview_ppm::decode(&cli.path)
        .with_context(|| format!("failed to load {}", cli.path.display()))?;
    log::info!(
        "loaded {} ({}x{})",
        cli.path.display(),
        image.width(),
        image.height()
    );

    if let Some(out) = &cli.convert {
        let subtype = if cli.ascii { Subtype::Ascii } else { Subtype::Binary };
        return convert(&image, out, subtype);
    }

    view(&cli, image)
}

fn convert(image: &ImageBuffer, out: &Path, subtype: Subtype) -> anyhow::Result<()> {
    ezview_ppm::encoder::write(out, image, subtype)
        .with_context(|| format!("failed to write {}", out.display()))?;
    log::info!("wrote {}", out.display());
    Ok(())
}

fn view(cli: &Cli, image: ImageBuffer) -> anyhow::Result<()> {
    let (width, height) = initial_window_size(image.width(), image.height());
    let name = cli
        .path
        .file_name()
        .map_or_else(|| cli.path.display().to_string(), |n| n.to_string_lossy().into_owned());

    let runtime = RuntimeConfig {
        title: format!("ezview - {name}"),
        initial_size: LogicalSize::new(width as f64, height as f64),
        ..Default::default()
    };

    let config = ViewerConfig {
        rotation_policy: if cli.aspect_correct {
            RotationPolicy::AspectCorrected
        } else {
            RotationPolicy::Plain
        },
        ..Default::default()
    };

    let session = ViewerSession::new(image, config)?;
    Runtime::run(runtime, GpuInit::default(), session).context("viewer failed")
}
