//! The seam to the external gesture recognition model.
//!
//! The model itself is opaque to this crate: it takes an RGB image and returns, for every
//! hand it found, 21 normalized landmarks, a handedness classification and a ranked list of
//! gesture categories. Recognizers are constructed once by the caller and passed in.

use image::RgbImage;
use parking_lot::Mutex;
use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{Category, HandDetection, Handedness, Landmark};

/// A recognizer that can be shared between threads and called concurrently.
pub trait GestureRecognizer: Send + Sync {
    fn recognize(&self, image: &RgbImage) -> Result<Vec<HandDetection>>;

    /// Human-readable name for this recognizer (used in logs)
    fn name(&self) -> &str;
}

/// A recognizer that needs exclusive access while it runs, e.g. one that reuses
/// internal inference buffers.
pub trait StatefulRecognizer: Send {
    fn recognize(&mut self, image: &RgbImage) -> Result<Vec<HandDetection>>;

    fn name(&self) -> &str;
}

/// Serializes calls to a [`StatefulRecognizer`] so it can be used as a [`GestureRecognizer`].
pub struct SharedRecognizer<R> {
    name: String,
    inner: Mutex<R>,
}

impl<R: StatefulRecognizer> SharedRecognizer<R> {
    pub fn new(recognizer: R) -> Self {
        Self {
            name: recognizer.name().to_string(),
            inner: Mutex::new(recognizer),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R: StatefulRecognizer> GestureRecognizer for SharedRecognizer<R> {
    fn recognize(&self, image: &RgbImage) -> Result<Vec<HandDetection>> {
        let mut recognizer = self.inner.lock();
        recognizer.recognize(image)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A category as the recognizer reports it
#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    pub category_name: String,
    pub score: f32,
    #[serde(default)]
    pub index: Option<i32>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Raw recognizer output: parallel per-hand lists, indexed by hand.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecognizerOutput {
    #[serde(default)]
    pub gestures: Vec<Vec<RawCategory>>,
    #[serde(default)]
    pub handedness: Vec<Vec<RawCategory>>,
    #[serde(default)]
    pub hand_landmarks: Vec<Vec<Landmark>>,
}

impl RecognizerOutput {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::ParseDetections)
    }

    /// Convert to one [`HandDetection`] per entry of `hand_landmarks`.
    ///
    /// A hand without a gesture list gets no candidates; gesture lists beyond the last hand
    /// are ignored. Every hand needs a handedness classification.
    pub fn into_detections(self) -> Result<Vec<HandDetection>> {
        let hands = self.hand_landmarks.len();
        if self.gestures.len() > hands {
            tracing::warn!(
                hands,
                gesture_lists = self.gestures.len(),
                "recognizer reported more gesture lists than hands, ignoring the surplus"
            );
        }

        let mut gestures = self.gestures.into_iter();
        let mut handedness = self.handedness.into_iter();

        let mut detections = Vec::with_capacity(hands);
        for (hand, landmarks) in self.hand_landmarks.into_iter().enumerate() {
            let label = handedness
                .next()
                .and_then(|categories| categories.into_iter().next())
                .ok_or(Error::MissingHandedness { hand })?;

            let candidates = gestures
                .next()
                .unwrap_or_default()
                .into_iter()
                .map(|raw| Category::new(raw.category_name, raw.score))
                .collect();

            detections.push(HandDetection::new(
                landmarks,
                label.category_name.parse::<Handedness>()?,
                candidates,
            ));
        }

        Ok(detections)
    }
}

/// Serves recognizer output that was recorded ahead of time, regardless of the image.
#[derive(Debug, Clone)]
pub struct RecordedRecognizer {
    detections: Vec<HandDetection>,
}

impl RecordedRecognizer {
    pub fn new(detections: Vec<HandDetection>) -> Self {
        Self { detections }
    }

    /// Parse recorded output in the recognizer's JSON layout
    pub fn from_json(json: &str) -> Result<Self> {
        let detections = RecognizerOutput::from_json(json)?.into_detections()?;
        Ok(Self::new(detections))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::ReadDetections(e, path.to_path_buf()))?;
        Self::from_json(&json)
    }

    pub fn detections(&self) -> &[HandDetection] {
        &self.detections
    }
}

impl GestureRecognizer for RecordedRecognizer {
    fn recognize(&self, image: &RgbImage) -> Result<Vec<HandDetection>> {
        tracing::trace!(
            width = image.width(),
            height = image.height(),
            hands = self.detections.len(),
            "serving recorded detections"
        );
        Ok(self.detections.clone())
    }

    fn name(&self) -> &str {
        "recorded"
    }
}
