/// Settings of a whole render pipeline instance.

use std::sync::Arc;
use crate::render_graph::EditorCapabilities;
use crate::settings::{CameraBufferSettings, PostFxSettings, ShadowSettings};

/// Resolution of the color grading lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLutResolution {
    R16 = 16,
    R32 = 32,
    R64 = 64,
}

impl ColorLutResolution {
    pub fn size(self) -> u32 {
        self as u32
    }
}

/// Pipeline-wide configuration
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub camera_buffer: CameraBufferSettings,
    pub use_lights_per_object: bool,
    pub shadows: ShadowSettings,
    pub post_fx_settings: Option<Arc<dyn PostFxSettings>>,
    pub color_lut_resolution: ColorLutResolution,
    /// Shader of the material used for copies and the final blit
    pub camera_renderer_shader: String,
    pub editor: EditorCapabilities,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            camera_buffer: CameraBufferSettings::default(),
            use_lights_per_object: true,
            shadows: ShadowSettings::default(),
            post_fx_settings: None,
            color_lut_resolution: ColorLutResolution::R32,
            camera_renderer_shader: "Hidden/Custom RP/Camera Renderer".to_string(),
            editor: EditorCapabilities::empty(),
        }
    }
}
