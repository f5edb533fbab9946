/// Post-processing stack interface.
///
/// The stack owns every effect (bloom, color grading, tone mapping, FXAA) and
/// writes the final image to the camera target.

use std::sync::Arc;
use crate::error::Galaxy3dResult;
use crate::camera::Camera;
use crate::frame_config::BufferSize;
use crate::graphics_device::TextureRef;
use crate::render_graph::PassContext;
use crate::settings::{CameraBufferSettings, FinalBlendMode, PostFxSettings};

/// Inputs of one post-FX run
pub struct PostFxFrame<'p> {
    /// Color attachment holding the rendered frame
    pub source: TextureRef,
    pub camera: &'p Camera,
    pub buffer_settings: &'p CameraBufferSettings,
    pub buffer_size: BufferSize,
    pub final_blend_mode: FinalBlendMode,
    pub settings: &'p Arc<dyn PostFxSettings>,
    /// Edge of the color grading LUT (16, 32 or 64)
    pub color_lut_resolution: u32,
    pub keep_alpha: bool,
}

/// Post-FX stack
pub trait PostFxStack {
    /// Apply every effect and write the result to the camera target
    fn render(&mut self, ctx: &mut PassContext<'_>, frame: &PostFxFrame<'_>) -> Galaxy3dResult<()>;
}
