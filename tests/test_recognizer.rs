//! Integration tests for the recognizer seam.
//!
//! Tests cover:
//! - Converting recorded recognizer output into hand detections
//! - Mismatched gesture/hand list lengths
//! - Serialized access to stateful recognizers
//! - Running the pipeline end to end from files

mod common;

use common::*;
use gesture_annotator::pipeline::annotated_path;
use gesture_annotator::{
    GestureRecognizer, RecognizerOutput, SharedRecognizer, StatefulRecognizer,
};
use image::RgbImage;

#[test]
fn test_recorded_output_to_detections() -> anyhow::Result<()> {
    let recognizer = RecordedRecognizer::from_json(RECORDED_TWO_HANDS)?;
    let detections = recognizer.detections();

    assert_eq!(detections.len(), 2);
    assert_eq!(detections[0].landmarks.len(), 21);
    assert_eq!(detections[0].handedness, Handedness::Right);
    assert_eq!(detections[0].gestures.len(), 2);
    assert_eq!(detections[0].gestures[0], Category::new("Thumb_Up", 0.87));

    // the second hand has no gesture list
    assert_eq!(detections[1].handedness, Handedness::Left);
    assert!(detections[1].gestures.is_empty());

    Ok(())
}

#[test]
fn test_surplus_gesture_lists_are_ignored() -> anyhow::Result<()> {
    let json = r#"{
        "gestures": [
            [{"category_name": "Victory", "score": 0.7}],
            [{"category_name": "Thumb_Down", "score": 0.6}]
        ],
        "handedness": [[{"category_name": "Left", "score": 0.9}]],
        "hand_landmarks": [[]]
    }"#;

    let detections = RecognizerOutput::from_json(json)?.into_detections()?;

    assert_eq!(detections.len(), 1);
    assert_eq!(detections[0].gestures, vec![Category::new("Victory", 0.7)]);

    Ok(())
}

#[test]
fn test_empty_output_has_no_hands() -> anyhow::Result<()> {
    let detections = RecognizerOutput::from_json("{}")?.into_detections()?;
    assert!(detections.is_empty());
    Ok(())
}

#[test]
fn test_missing_handedness_is_rejected() {
    let json = r#"{
        "handedness": [[{"category_name": "Left", "score": 0.9}], []],
        "hand_landmarks": [[], []]
    }"#;

    let result = RecordedRecognizer::from_json(json);

    assert!(matches!(result, Err(Error::MissingHandedness { hand: 1 })));
}

#[test]
fn test_unknown_handedness_is_rejected() {
    let json = r#"{
        "handedness": [[{"category_name": "Both", "score": 0.9}]],
        "hand_landmarks": [[]]
    }"#;

    let result = RecordedRecognizer::from_json(json);

    assert!(matches!(result, Err(Error::UnknownHandedness(label)) if label == "Both"));
}

#[test]
fn test_invalid_json_is_rejected() {
    let result = RecordedRecognizer::from_json("{ not json");
    assert!(matches!(result, Err(Error::ParseDetections(_))));
}

#[test]
fn test_missing_detections_file() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");

    let result = RecordedRecognizer::from_path(&dir.path().join("missing.json"));

    assert!(matches!(result, Err(Error::ReadDetections(_, _))));
}

#[test]
fn test_process_image_with_recorded_recognizer() -> anyhow::Result<()> {
    let recognizer = RecordedRecognizer::from_json(RECORDED_TWO_HANDS)?;
    let pipeline = Pipeline::standard(AnnotationStyle::default());

    let annotation = pipeline.process_image(&recognizer, blank_image(WIDTH, HEIGHT))?;

    assert_eq!(annotation.summary(), "Thumb_Up (87.0%) - Right");
    assert_eq!(annotation.labels().len(), 1);

    Ok(())
}

/// Counts calls; needs `&mut self` like a model reusing its inference buffers.
struct CountingRecognizer {
    calls: usize,
    hand: HandDetection,
}

impl StatefulRecognizer for CountingRecognizer {
    fn recognize(&mut self, _image: &RgbImage) -> gesture_annotator::Result<Vec<HandDetection>> {
        self.calls += 1;
        Ok(vec![self.hand.clone()])
    }

    fn name(&self) -> &str {
        "counting"
    }
}

#[test]
fn test_shared_recognizer_serializes_calls() -> anyhow::Result<()> {
    let shared = SharedRecognizer::new(CountingRecognizer {
        calls: 0,
        hand: make_hand(Handedness::Left, &[("Open_Palm", 0.66)]),
    });
    let pipeline = Pipeline::standard(AnnotationStyle::default());

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let annotation = pipeline
                    .process_image(&shared, blank_image(64, 64))
                    .expect("annotation failed");
                assert_eq!(annotation.summary(), "Open_Palm (66.0%) - Left");
            });
        }
    });

    assert_eq!(shared.name(), "counting");
    assert_eq!(shared.into_inner().calls, 4);

    Ok(())
}

#[test]
fn test_process_file_and_save() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let input_path = dir.path().join("hand.png");
    blank_image(WIDTH, HEIGHT).save(&input_path)?;

    let recognizer = RecordedRecognizer::from_json(RECORDED_TWO_HANDS)?;
    let pipeline = Pipeline::standard(AnnotationStyle::default());
    let annotation = pipeline.process_file(&recognizer, &input_path)?;

    let output_path = annotated_path(&dir.path().join("annotated"), &input_path);
    assert_eq!(output_path, dir.path().join("annotated").join("hand.png"));
    annotation.save(&output_path)?;

    let saved = image::open(&output_path)?.to_rgb8();
    assert_eq!(saved.dimensions(), (WIDTH, HEIGHT));
    assert_eq!(saved.as_raw(), annotation.image.as_raw());

    Ok(())
}

#[test]
fn test_process_file_rejects_undecodable_image() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let input_path = dir.path().join("broken.png");
    std::fs::write(&input_path, b"this is not a png")?;

    let recognizer = RecordedRecognizer::from_json(RECORDED_TWO_HANDS)?;
    let pipeline = Pipeline::standard(AnnotationStyle::default());
    let result = pipeline.process_file(&recognizer, &input_path);

    assert!(matches!(result, Err(Error::ImageLoad(_))));

    Ok(())
}

#[test]
fn test_process_file_missing_image() {
    let recognizer = RecordedRecognizer::new(Vec::new());
    let pipeline = Pipeline::standard(AnnotationStyle::default());

    let result = pipeline.process_file(&recognizer, std::path::Path::new("/nonexistent/hand.png"));

    assert!(matches!(result, Err(Error::ReadImage(_, _))));
}
