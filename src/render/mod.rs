pub mod canvas;
pub mod label;
pub mod skeleton;
pub mod steps;

use std::sync::Arc;

use crate::config::AnnotationStyle;
use crate::pipeline::Pipeline;

/// Build the standard pipeline: skeleton first, then the gesture label, for every hand
pub fn build_standard_pipeline(style: AnnotationStyle) -> Pipeline {
    use crate::render::steps::*;

    Pipeline::new()
        .add_step(Arc::new(SkeletonStep {
            style: style.clone(),
        }))
        .add_step(Arc::new(LabelStep { style }))
}
