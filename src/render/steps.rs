use crate::config::AnnotationStyle;
use crate::error::Result;
use crate::pipeline::{AnnotationFrame, AnnotationStep, HandContext};
use crate::render::{label, skeleton};

/// Draw the hand skeleton (connections and landmark markers)
pub struct SkeletonStep {
    pub style: AnnotationStyle,
}

impl AnnotationStep for SkeletonStep {
    fn process(&self, frame: &mut AnnotationFrame, hand: &HandContext<'_>) -> Result<()> {
        skeleton::draw_skeleton(&mut frame.image, hand.points, &self.style);
        Ok(())
    }

    fn name(&self) -> &str {
        "Skeleton"
    }
}

/// Draw the top gesture label of the hand and record it in the frame
pub struct LabelStep {
    pub style: AnnotationStyle,
}

impl AnnotationStep for LabelStep {
    fn process(&self, frame: &mut AnnotationFrame, hand: &HandContext<'_>) -> Result<()> {
        let Some(gesture_label) = label::compose_label(hand.index, hand.detection, &self.style)
        else {
            tracing::debug!(hand = hand.index, "no gesture candidates, skipping label");
            return Ok(());
        };

        label::draw_label(&mut frame.image, &gesture_label, &self.style);
        tracing::trace!(
            hand = hand.index,
            text = %gesture_label.text,
            x = gesture_label.position.0,
            y = gesture_label.position.1,
            "drew gesture label"
        );
        frame.labels.push(gesture_label);
        Ok(())
    }

    fn name(&self) -> &str {
        "Gesture Label"
    }
}
