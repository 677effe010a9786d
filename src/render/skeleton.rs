use image::RgbImage;

use crate::config::AnnotationStyle;
use crate::models::HAND_CONNECTIONS;
use crate::render::canvas;

/// Draw the hand skeleton: all connections first, then a marker on every landmark.
///
/// `points` must hold one projected point per landmark; the pipeline validates the count
/// before anything is drawn. Points may lie arbitrarily far outside the image.
pub fn draw_skeleton(image: &mut RgbImage, points: &[(i32, i32)], style: &AnnotationStyle) {
    for (a, b) in HAND_CONNECTIONS {
        canvas::draw_line(
            image,
            points[a.idx()],
            points[b.idx()],
            style.connection_thickness,
            style.connection_rgb(),
        );
    }

    for &point in points {
        canvas::draw_filled_circle(image, point, style.landmark_radius, style.landmark_rgb());
    }
}
