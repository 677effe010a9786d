pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod projection;
pub mod recognizer;
pub mod render;

pub use config::AnnotationStyle;
pub use error::{Error, Result};
pub use models::{
    Category, GestureLabel, HandDetection, HandLandmark, Handedness, Landmark, HAND_CONNECTIONS,
    NUM_LANDMARKS,
};
pub use pipeline::{
    annotate, annotate_bytes, Annotation, AnnotationFrame, AnnotationStep, HandContext, Outcome,
    Pipeline,
};
pub use projection::project;
pub use recognizer::{
    GestureRecognizer, RecognizerOutput, RecordedRecognizer, SharedRecognizer, StatefulRecognizer,
};
