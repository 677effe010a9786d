use image::RgbImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::AnnotationStyle;
use crate::error::{Error, Result};
use crate::models::{GestureLabel, HandDetection};
use crate::projection;
use crate::recognizer::GestureRecognizer;

/// Image being annotated, plus the labels drawn onto it so far.
/// Owned by a single `annotate` call; every step draws into the same buffer.
pub struct AnnotationFrame {
    pub image: RgbImage,
    pub labels: Vec<GestureLabel>,
}

/// The hand a step is currently drawing
pub struct HandContext<'a> {
    /// Position of the hand in the recognizer output
    pub index: usize,
    pub detection: &'a HandDetection,
    /// Landmarks projected to pixel coordinates
    pub points: &'a [(i32, i32)],
}

/// One drawing pass, run once per hand in detection order
pub trait AnnotationStep: Send + Sync {
    /// Draw onto the frame for one hand
    fn process(&self, frame: &mut AnnotationFrame, hand: &HandContext<'_>) -> Result<()>;

    /// Human-readable name for this step (used for logs and debug output)
    fn name(&self) -> &str;
}

/// How an `annotate` call ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The recognizer found no hands; the image is returned untouched
    NoGestureDetected,
    /// Hands were drawn; one label per hand that had a gesture candidate, in hand order
    Annotated(Vec<GestureLabel>),
}

/// Result of annotating one image
#[derive(Debug, Clone)]
pub struct Annotation {
    pub image: RgbImage,
    pub outcome: Outcome,
}

impl Annotation {
    pub fn labels(&self) -> &[GestureLabel] {
        match &self.outcome {
            Outcome::NoGestureDetected => &[],
            Outcome::Annotated(labels) => labels,
        }
    }

    pub fn is_detected(&self) -> bool {
        matches!(self.outcome, Outcome::Annotated(_))
    }

    /// Label texts joined by newlines, in hand order.
    pub fn summary(&self) -> String {
        match &self.outcome {
            Outcome::NoGestureDetected => "no gesture detected".to_string(),
            Outcome::Annotated(labels) => labels
                .iter()
                .map(|label| label.text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Write the annotated image; the format follows the file extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.image
            .save(path)
            .map_err(|e| Error::SaveImage(e, path.to_path_buf()))
    }
}

/// Where the annotated copy of `input` goes: same file name, inside `output_dir`.
pub fn annotated_path(output_dir: &Path, input: &Path) -> PathBuf {
    match input.file_name() {
        Some(name) => output_dir.join(name),
        None => output_dir.join("annotated.png"),
    }
}

/// Decode an encoded image (PNG, JPEG, ...) into an RGB buffer.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage> {
    let decoded = image::load_from_memory(bytes).map_err(Error::ImageLoad)?;
    Ok(decoded.to_rgb8())
}

/// Load an image file into an RGB buffer.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let decoded = image::ImageReader::open(path)
        .map_err(|e| Error::ReadImage(e, path.to_path_buf()))?
        .with_guessed_format()
        .map_err(|e| Error::ReadImage(e, path.to_path_buf()))?
        .decode()
        .map_err(Error::ImageLoad)?;
    Ok(decoded.to_rgb8())
}

/// Ordered drawing steps applied to every hand of an image
pub struct Pipeline {
    steps: Vec<Arc<dyn AnnotationStep>>,
    /// Snapshots of the image after every step go here when set
    debug_dir: Option<PathBuf>,
}

impl Pipeline {
    /// A pipeline without steps; `annotate` then only validates
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            debug_dir: None,
        }
    }

    /// Standard skeleton + label pipeline for the given style
    pub fn standard(style: AnnotationStyle) -> Self {
        crate::render::build_standard_pipeline(style)
    }

    /// Save a snapshot of the image after every step into `output_dir`.
    /// The directory must be empty or not exist yet.
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(Error::DebugDirNotEmpty(output_dir));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.debug_dir = Some(output_dir);

        Ok(self)
    }

    /// Add a drawing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn AnnotationStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Annotate `image` with the given detections.
    ///
    /// Every hand is validated before the first pixel is touched, so a malformed hand
    /// fails the whole call and no image is produced.
    pub fn annotate(&self, image: RgbImage, detections: &[HandDetection]) -> Result<Annotation> {
        for (index, hand) in detections.iter().enumerate() {
            hand.validate(index)?;
        }

        if detections.is_empty() {
            tracing::debug!("no hands in recognizer output");
            return Ok(Annotation {
                image,
                outcome: Outcome::NoGestureDetected,
            });
        }

        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::ImageLoad(image::ImageError::Limits(
                image::error::LimitError::from_kind(image::error::LimitErrorKind::DimensionError),
            )));
        }

        if let Some(dir) = &self.debug_dir {
            save_debug_image(&image, &dir.join("00_input"), "01.png")?;
        }

        let mut frame = AnnotationFrame {
            image,
            labels: Vec::with_capacity(detections.len()),
        };

        for (index, detection) in detections.iter().enumerate() {
            let points = projection::project_all(&detection.landmarks, width, height);
            let hand = HandContext {
                index,
                detection,
                points: &points,
            };
            tracing::debug!(
                hand = index,
                handedness = %detection.handedness,
                candidates = detection.gestures.len(),
                "annotating hand"
            );

            for (step_idx, step) in self.steps.iter().enumerate() {
                step.process(&mut frame, &hand)?;

                if let Some(dir) = &self.debug_dir {
                    let step_dir = dir.join(format!(
                        "{:02}_{}",
                        step_idx + 1,
                        step.name().to_lowercase().replace(' ', "_")
                    ));
                    save_debug_image(&frame.image, &step_dir, &format!("{:02}.png", index + 1))?;
                }
            }
        }

        Ok(Annotation {
            image: frame.image,
            outcome: Outcome::Annotated(frame.labels),
        })
    }

    /// Decode `bytes` and annotate the result. Undecodable input fails before any drawing.
    pub fn annotate_bytes(&self, bytes: &[u8], detections: &[HandDetection]) -> Result<Annotation> {
        let image = decode_image(bytes)?;
        self.annotate(image, detections)
    }

    /// Run the recognizer on `image`, then annotate its output.
    pub fn process_image(
        &self,
        recognizer: &dyn GestureRecognizer,
        image: RgbImage,
    ) -> Result<Annotation> {
        let detections = recognizer.recognize(&image)?;
        tracing::debug!(
            recognizer = recognizer.name(),
            hands = detections.len(),
            "recognizer finished"
        );
        self.annotate(image, &detections)
    }

    /// Load an image file and run `process_image` on it.
    pub fn process_file(
        &self,
        recognizer: &dyn GestureRecognizer,
        path: &Path,
    ) -> Result<Annotation> {
        let image = load_image(path)?;
        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "image loaded"
        );
        self.process_image(recognizer, image)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn save_debug_image(image: &RgbImage, dir: &Path, filename: &str) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    image
        .save(&path)
        .map_err(|e| Error::SaveImage(e, path.clone()))?;
    tracing::trace!(path = %path.display(), "saved debug image");
    Ok(())
}

/// Annotate with the default style.
pub fn annotate(image: RgbImage, detections: &[HandDetection]) -> Result<Annotation> {
    Pipeline::standard(AnnotationStyle::default()).annotate(image, detections)
}

/// Decode and annotate with the default style.
pub fn annotate_bytes(bytes: &[u8], detections: &[HandDetection]) -> Result<Annotation> {
    Pipeline::standard(AnnotationStyle::default()).annotate_bytes(bytes, detections)
}
