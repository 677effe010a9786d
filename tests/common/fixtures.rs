use gesture_annotator::{Category, HandDetection, Handedness, Landmark};
use image::{ImageBuffer, Rgb, RgbImage};
use std::io::Cursor;

pub const WIDTH: u32 = 640;
pub const HEIGHT: u32 = 480;

/// Creates a uniformly gray test image.
pub fn blank_image(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_pixel(width, height, Rgb([90u8, 90u8, 90u8]))
}

/// Encodes an image as PNG bytes.
pub fn encode_png(image: &RgbImage) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, image::ImageFormat::Png)
        .expect("Failed to encode test image");
    bytes.into_inner()
}

/// 21 landmarks in the lower half of the image: the wrist at the bottom, each finger
/// a vertical chain of four joints above it. `shift` moves the whole hand sideways.
pub fn hand_landmarks(shift: f32) -> Vec<Landmark> {
    let mut landmarks = vec![Landmark::new(0.5 + shift, 0.9)];
    for finger in 0..5 {
        for joint in 1..=4 {
            landmarks.push(Landmark::new(
                0.3 + 0.1 * finger as f32 + shift,
                0.85 - 0.08 * joint as f32,
            ));
        }
    }
    landmarks
}

/// A hand with well-formed landmarks and the given gesture candidates.
pub fn make_hand(handedness: Handedness, gestures: &[(&str, f32)]) -> HandDetection {
    HandDetection::new(
        hand_landmarks(0.0),
        handedness,
        gestures
            .iter()
            .map(|(name, score)| Category::new(*name, *score))
            .collect(),
    )
}

/// A hand with `count` landmarks instead of 21.
pub fn make_malformed_hand(count: usize) -> HandDetection {
    let mut landmarks = hand_landmarks(0.0);
    landmarks.resize(count, Landmark::new(0.5, 0.5));
    HandDetection::new(
        landmarks,
        Handedness::Left,
        vec![Category::new("Open_Palm", 0.7)],
    )
}

/// Counts pixels of exactly `color`.
pub fn count_pixels(image: &RgbImage, color: Rgb<u8>) -> usize {
    image.pixels().filter(|pixel| **pixel == color).count()
}

/// Counts pixels of exactly `color` in rows `rows`.
pub fn count_pixels_in_rows(image: &RgbImage, color: Rgb<u8>, rows: std::ops::Range<u32>) -> usize {
    image
        .enumerate_pixels()
        .filter(|(_, y, pixel)| rows.contains(y) && **pixel == color)
        .count()
}

/// Recognizer output in the layout the gesture model emits, two hands with one gesture list.
pub const RECORDED_TWO_HANDS: &str = r#"{
  "gestures": [
    [
      {"index": -1, "score": 0.87, "display_name": "", "category_name": "Thumb_Up"},
      {"index": -1, "score": 0.05, "display_name": "", "category_name": "None"}
    ]
  ],
  "handedness": [
    [{"index": 0, "score": 0.98, "display_name": "Right", "category_name": "Right"}],
    [{"index": 1, "score": 0.91, "display_name": "Left", "category_name": "Left"}]
  ],
  "hand_landmarks": [
    [
      {"x": 0.50, "y": 0.90, "z": 0.0},
      {"x": 0.30, "y": 0.80}, {"x": 0.30, "y": 0.70}, {"x": 0.30, "y": 0.60}, {"x": 0.30, "y": 0.50},
      {"x": 0.40, "y": 0.80}, {"x": 0.40, "y": 0.70}, {"x": 0.40, "y": 0.60}, {"x": 0.40, "y": 0.50},
      {"x": 0.50, "y": 0.80}, {"x": 0.50, "y": 0.70}, {"x": 0.50, "y": 0.60}, {"x": 0.50, "y": 0.50},
      {"x": 0.60, "y": 0.80}, {"x": 0.60, "y": 0.70}, {"x": 0.60, "y": 0.60}, {"x": 0.60, "y": 0.50},
      {"x": 0.70, "y": 0.80}, {"x": 0.70, "y": 0.70}, {"x": 0.70, "y": 0.60}, {"x": 0.70, "y": 0.50}
    ],
    [
      {"x": 0.20, "y": 0.95},
      {"x": 0.10, "y": 0.85}, {"x": 0.10, "y": 0.75}, {"x": 0.10, "y": 0.65}, {"x": 0.10, "y": 0.55},
      {"x": 0.15, "y": 0.85}, {"x": 0.15, "y": 0.75}, {"x": 0.15, "y": 0.65}, {"x": 0.15, "y": 0.55},
      {"x": 0.20, "y": 0.85}, {"x": 0.20, "y": 0.75}, {"x": 0.20, "y": 0.65}, {"x": 0.20, "y": 0.55},
      {"x": 0.25, "y": 0.85}, {"x": 0.25, "y": 0.75}, {"x": 0.25, "y": 0.65}, {"x": 0.25, "y": 0.55},
      {"x": 0.30, "y": 0.85}, {"x": 0.30, "y": 0.75}, {"x": 0.30, "y": 0.65}, {"x": 0.30, "y": 0.55}
    ]
  ]
}"#;
