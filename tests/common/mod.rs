mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from gesture_annotator for tests
pub use gesture_annotator::{
    Annotation, AnnotationStyle, Category, Error, GestureLabel, HandDetection, Handedness,
    Landmark, Outcome, Pipeline, RecordedRecognizer,
};
