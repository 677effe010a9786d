use image::RgbImage;

use crate::config::AnnotationStyle;
use crate::models::{Category, GestureLabel, HandDetection, Handedness};
use crate::render::canvas;

/// Format a gesture as `"{name} ({percent:.1}%)"`, optionally followed by `" - {handedness}"`.
pub fn format_label(gesture: &Category, handedness: Handedness, show_handedness: bool) -> String {
    let percent = gesture.score * 100.0;
    if show_handedness {
        format!("{} ({:.1}%) - {}", gesture.name, percent, handedness)
    } else {
        format!("{} ({:.1}%)", gesture.name, percent)
    }
}

/// Labels stack downwards from the top margin, one row per hand index.
pub fn label_position(hand_index: usize, style: &AnnotationStyle) -> (i32, i32) {
    let [x, y] = style.label_margin;
    (x, y + style.label_spacing * hand_index as i32)
}

/// Build the label for a hand, or `None` if the recognizer gave it no gesture candidates.
pub fn compose_label(
    hand_index: usize,
    hand: &HandDetection,
    style: &AnnotationStyle,
) -> Option<GestureLabel> {
    let gesture = hand.top_gesture()?;
    Some(GestureLabel {
        hand_index,
        text: format_label(gesture, hand.handedness, style.show_handedness),
        position: label_position(hand_index, style),
    })
}

pub fn draw_label(image: &mut RgbImage, label: &GestureLabel, style: &AnnotationStyle) {
    canvas::draw_text(image, &label.text, label.position, style.label_rgb());
}
