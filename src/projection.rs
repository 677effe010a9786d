use crate::models::Landmark;

/// Map a normalized landmark to pixel coordinates in a `width` x `height` image.
///
/// Landmarks outside `[0, 1]` land outside the image; drawing clips them.
pub fn project(landmark: &Landmark, width: u32, height: u32) -> (i32, i32) {
    debug_assert!(width > 0 && height > 0, "image dimensions must be non-zero");
    let x = (landmark.x as f64 * width as f64).round() as i32;
    let y = (landmark.y as f64 * height as f64).round() as i32;
    (x, y)
}

/// Project every landmark of a hand, preserving order.
pub fn project_all(landmarks: &[Landmark], width: u32, height: u32) -> Vec<(i32, i32)> {
    landmarks
        .iter()
        .map(|landmark| project(landmark, width, height))
        .collect()
}
