use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use gesture_annotator::pipeline::annotated_path;
use gesture_annotator::{AnnotationStyle, Pipeline, RecordedRecognizer};

#[derive(Parser)]
#[command(name = "gesture-annotator")]
#[command(about = "Draw hand landmarks and recognized gestures onto an image")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Recognizer output for the image (JSON)
    #[arg(short, long, value_name = "JSON")]
    detections: PathBuf,

    /// Directory the annotated image is written to
    #[arg(short, long, value_name = "DIR", default_value = "annotated")]
    output_dir: PathBuf,

    /// Annotation style (TOML)
    #[arg(short, long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Leave "Left"/"Right" out of the gesture labels
    #[arg(long)]
    no_handedness: bool,

    /// Save debug outputs to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let style = match &args.config {
        Some(path) => AnnotationStyle::load(path)
            .with_context(|| format!("failed loading style from {}", path.display()))?,
        None => AnnotationStyle::default(),
    };
    let style = if args.no_handedness {
        style.with_handedness(false)
    } else {
        style
    };

    let recognizer = RecordedRecognizer::from_path(&args.detections)
        .context("failed loading recognizer output")?;

    let mut pipeline = Pipeline::standard(style);
    if let Some(debug_dir) = args.debug_out {
        pipeline = pipeline
            .with_debug(debug_dir)
            .context("failed enabling debug output")?;
    }

    tracing::info!(image = %args.image_path.display(), "annotating");
    let annotation = pipeline
        .process_file(&recognizer, &args.image_path)
        .context("failed annotating image")?;

    if !annotation.is_detected() {
        println!("{}", annotation.summary());
        return Ok(());
    }

    let output_path = annotated_path(&args.output_dir, &args.image_path);
    annotation
        .save(&output_path)
        .context("failed saving annotated image")?;
    tracing::info!(path = %output_path.display(), "saved annotated image");

    if annotation.labels().is_empty() {
        println!("hands detected, but no gesture recognized");
    } else {
        println!("{}", annotation.summary());
    }

    Ok(())
}
