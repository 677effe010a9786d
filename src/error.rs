use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load image")]
    ImageLoad(#[source] image::ImageError),

    #[error("failed to read image file: {1:?}")]
    ReadImage(#[source] std::io::Error, PathBuf),

    #[error("hand {hand} has {landmarks} landmarks, expected 21")]
    MalformedDetection { hand: usize, landmarks: usize },

    #[error("hand {hand} has no handedness classification")]
    MissingHandedness { hand: usize },

    #[error("unknown handedness label: {0:?}")]
    UnknownHandedness(String),

    #[error("failed to read detections file: {1:?}")]
    ReadDetections(#[source] std::io::Error, PathBuf),

    #[error("failed to parse recorded detections")]
    ParseDetections(#[source] serde_json::Error),

    #[error("failed to read style config: {1:?}")]
    ReadConfig(#[source] std::io::Error, PathBuf),

    #[error("failed to parse style config")]
    ParseConfig(#[source] toml::de::Error),

    #[error("failed to save image: {1:?}")]
    SaveImage(#[source] image::ImageError, PathBuf),

    #[error("debug directory is not empty: {0:?}")]
    DebugDirNotEmpty(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
