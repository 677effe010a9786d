use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Number of landmarks the recognizer reports for every hand.
pub const NUM_LANDMARKS: usize = 21;

/// Normalized hand keypoint, `x` and `y` relative to the image size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// Names for the 21 hand landmarks, in the order the recognizer reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandLandmark {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl HandLandmark {
    pub fn idx(self) -> usize {
        self as usize
    }
}

/// Skeleton edges drawn between landmarks: each finger is chained from the wrist to its tip.
pub const HAND_CONNECTIONS: [(HandLandmark, HandLandmark); 20] = {
    use HandLandmark::*;
    [
        // Thumb
        (Wrist, ThumbCmc),
        (ThumbCmc, ThumbMcp),
        (ThumbMcp, ThumbIp),
        (ThumbIp, ThumbTip),
        // Index
        (Wrist, IndexFingerMcp),
        (IndexFingerMcp, IndexFingerPip),
        (IndexFingerPip, IndexFingerDip),
        (IndexFingerDip, IndexFingerTip),
        // Middle
        (Wrist, MiddleFingerMcp),
        (MiddleFingerMcp, MiddleFingerPip),
        (MiddleFingerPip, MiddleFingerDip),
        (MiddleFingerDip, MiddleFingerTip),
        // Ring
        (Wrist, RingFingerMcp),
        (RingFingerMcp, RingFingerPip),
        (RingFingerPip, RingFingerDip),
        (RingFingerDip, RingFingerTip),
        // Pinky
        (Wrist, PinkyMcp),
        (PinkyMcp, PinkyPip),
        (PinkyPip, PinkyDip),
        (PinkyDip, PinkyTip),
    ]
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handedness::Left => f.write_str("Left"),
            Handedness::Right => f.write_str("Right"),
        }
    }
}

impl FromStr for Handedness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Left" => Ok(Handedness::Left),
            "Right" => Ok(Handedness::Right),
            other => Err(Error::UnknownHandedness(other.to_string())),
        }
    }
}

/// A named gesture class with the recognizer's confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub score: f32,
}

impl Category {
    pub fn new(name: impl Into<String>, score: f32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// One hand reported by the recognizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandDetection {
    pub landmarks: Vec<Landmark>,
    pub handedness: Handedness,
    /// Gesture candidates, ranked by the recognizer (highest score first)
    pub gestures: Vec<Category>,
}

impl HandDetection {
    pub fn new(landmarks: Vec<Landmark>, handedness: Handedness, gestures: Vec<Category>) -> Self {
        Self {
            landmarks,
            handedness,
            gestures,
        }
    }

    /// Highest scoring gesture; on equal scores the earlier candidate wins.
    pub fn top_gesture(&self) -> Option<&Category> {
        let mut best: Option<&Category> = None;
        for candidate in &self.gestures {
            match best {
                Some(current) if current.score >= candidate.score || candidate.score.is_nan() => {}
                _ => best = Some(candidate),
            }
        }
        best
    }

    /// Check the landmark count before anything is drawn for this hand.
    pub fn validate(&self, hand: usize) -> Result<(), Error> {
        if self.landmarks.len() != NUM_LANDMARKS {
            return Err(Error::MalformedDetection {
                hand,
                landmarks: self.landmarks.len(),
            });
        }
        Ok(())
    }
}

/// Label drawn for one hand
#[derive(Debug, Clone, PartialEq)]
pub struct GestureLabel {
    pub hand_index: usize,
    pub text: String,
    /// Baseline origin of the text, in pixels
    pub position: (i32, i32),
}
