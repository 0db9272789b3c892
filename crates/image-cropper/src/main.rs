//! # Image Cropper
//! Crops an image to a rectangle chosen with pointer gestures, replayed from a gesture script,
//! and saves the crop as a JPEG.
//!

#![allow(clippy::std_instead_of_alloc)]

use std::{fs::create_dir_all, path::PathBuf, process::ExitCode};

use clap::Parser;
use config::Config;
use crop_geometry::PixelRect;
use events::CropperEvent;
use mimalloc::MiMalloc;
use script::GestureScript;
use session::CropSession;
use source_image::SourceImage;
use tracing::{debug, info, info_span, warn};
use utilities::{
    directories::output_dir,
    failure::{Failure, report},
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod config;
mod events;
mod extractor;
#[cfg(feature = "log")]
mod logger;
mod script;
mod session;
mod source_image;
mod utilities;

/// The Cargo package version.
#[cfg(not(debug_assertions))]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The Cargo package version or '0.0.0' if a non-release build.
#[cfg(debug_assertions)]
pub const VERSION: &str = "0.0.0";

/// Crop an image and save the result as a JPEG.
#[derive(Parser, Debug)]
#[command(name = "image-cropper", version)]
struct Args {
    /// Image to crop.
    image: PathBuf,

    /// Gesture script to replay. Without one the initial crop is saved.
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Directory to save crops in.
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Config file to use instead of the one in the config directory.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at trace level.
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Set up logger
    #[cfg(feature = "log")]
    let _logger_guards = logger::setup_logger(&utilities::directories::config_dir(), args.debug)
        .report_and_panic("Could not set up the logger");

    let _span = info_span!("[Main]").entered();
    info!("Image Cropper v{}", VERSION);

    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load_or_create(&config_path)
        .report_and_panic("Could not load the config file");

    let output = match args.output {
        Some(dir) => {
            create_dir_all(&dir).report_and_panic("Could not create the output directory");
            dir
        }
        None => output_dir(),
    };

    let Some(source) = SourceImage::open(&args.image, config.max_file_size)
        .report("Could not open the image")
    else {
        return ExitCode::FAILURE;
    };

    let script = match &args.script {
        Some(path) => match GestureScript::load(path).report("Could not load the gesture script") {
            Some(script) => script,
            None => return ExitCode::FAILURE,
        },
        None => GestureScript::default(),
    };

    let Some(mut session) = CropSession::new(
        config.container,
        source.natural_size(),
        config.session,
        config.handle_radius,
    )
    .report("Could not start a crop session") else {
        return ExitCode::FAILURE;
    };

    let Some(crops) = replay(&mut session, &script) else {
        return ExitCode::FAILURE;
    };
    debug!(
        "Final crop {:?} in a {:?} container",
        session.controller().rect(),
        session.container()
    );

    for pixel_rect in crops {
        let saved = extractor::extract(&source.image, pixel_rect, config.jpeg_quality())
            .and_then(|bytes| extractor::save(&bytes, &output))
            .report("Could not save the crop");

        match saved {
            Some(path) => info!(
                "Saved {pixel_rect:?} of {} to {}",
                source.path.display(),
                path.display()
            ),
            None => return ExitCode::FAILURE,
        }
    }

    ExitCode::SUCCESS
}

/// Feeds the script through the session and collects the crops it asks for. A script without
/// crop events crops once at the end.
fn replay(session: &mut CropSession, script: &GestureScript) -> Option<Vec<PixelRect>> {
    let mut crops = Vec::new();

    for event in script.cropper_events() {
        match session.handle_event(event) {
            Ok(Some(pixel_rect)) => crops.push(pixel_rect),
            Ok(None) => (),
            Err(error) if event == CropperEvent::Crop => {
                report(error, "Could not map the crop to the image");
                return None;
            }
            Err(error) => warn!("Skipping {event:?}: {error}"),
        }
    }

    if !script.crops() {
        crops.push(session.source_rect().report("Could not map the crop to the image")?);
    }

    Some(crops)
}
