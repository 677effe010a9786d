//! Annotation style settings, stored in TOML format.

use image::Rgb;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Colors, sizes and label layout used when drawing annotations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationStyle {
    /// Color of the skeleton edges (RGB)
    pub connection_color: [u8; 3],
    /// Thickness of the skeleton edges in pixels
    pub connection_thickness: u32,
    /// Color of the landmark markers (RGB)
    pub landmark_color: [u8; 3],
    /// Radius of the filled landmark markers
    pub landmark_radius: u32,
    /// Color of the gesture labels (RGB)
    pub label_color: [u8; 3],
    /// Baseline origin of the first label
    pub label_margin: [i32; 2],
    /// Vertical distance between the labels of consecutive hands
    pub label_spacing: i32,
    /// Append "Left"/"Right" to each label
    pub show_handedness: bool,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            connection_color: [0, 255, 0],
            connection_thickness: 2,
            landmark_color: [255, 0, 0],
            landmark_radius: 5,
            label_color: [0, 0, 255],
            label_margin: [30, 30],
            label_spacing: 30,
            show_handedness: true,
        }
    }
}

impl AnnotationStyle {
    /// Load a style from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::ReadConfig(e, path.to_path_buf()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(Error::ParseConfig)
    }

    pub fn with_handedness(mut self, show: bool) -> Self {
        self.show_handedness = show;
        self
    }

    pub fn connection_rgb(&self) -> Rgb<u8> {
        Rgb(self.connection_color)
    }

    pub fn landmark_rgb(&self) -> Rgb<u8> {
        Rgb(self.landmark_color)
    }

    pub fn label_rgb(&self) -> Rgb<u8> {
        Rgb(self.label_color)
    }
}
