/// Per-camera override settings.

use std::fmt;
use std::sync::{Arc, LazyLock};
use crate::settings::PostFxSettings;

/// Blend factor, numbered like the shader-side blend enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero = 0,
    One = 1,
    DstColor = 2,
    SrcColor = 3,
    OneMinusDstColor = 4,
    SrcAlpha = 5,
    OneMinusSrcColor = 6,
    DstAlpha = 7,
    OneMinusDstAlpha = 8,
    SrcAlphaSaturate = 9,
    OneMinusSrcAlpha = 10,
}

impl BlendFactor {
    /// Value written to the global blend slots
    pub fn as_float(self) -> f32 {
        self as u32 as f32
    }
}

/// Source/destination blend used when compositing to the camera target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FinalBlendMode {
    pub source: BlendFactor,
    pub destination: BlendFactor,
}

impl FinalBlendMode {
    /// Opaque overwrite (One, Zero)
    pub const OPAQUE: FinalBlendMode = FinalBlendMode {
        source: BlendFactor::One,
        destination: BlendFactor::Zero,
    };
}

impl Default for FinalBlendMode {
    fn default() -> Self {
        Self::OPAQUE
    }
}

/// How a camera's render scale combines with the global one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderScaleMode {
    Inherit,
    Multiply,
    Override,
}

/// Per-camera overrides
#[derive(Clone)]
pub struct CameraSettings {
    pub copy_color: bool,
    pub copy_depth: bool,
    pub rendering_layer_mask: u32,
    /// Apply `rendering_layer_mask` to lights as well
    pub mask_lights: bool,
    pub render_scale_mode: RenderScaleMode,
    pub render_scale: f32,
    /// Replace the pipeline post-FX settings with `post_fx_settings`
    pub override_post_fx: bool,
    pub post_fx_settings: Option<Arc<dyn PostFxSettings>>,
    pub allow_fxaa: bool,
    pub keep_alpha: bool,
    pub final_blend_mode: FinalBlendMode,
}

static DEFAULT_CAMERA_SETTINGS: LazyLock<CameraSettings> = LazyLock::new(CameraSettings::default);

impl CameraSettings {
    /// Shared immutable instance used for cameras without overrides
    pub fn shared_default() -> &'static CameraSettings {
        &DEFAULT_CAMERA_SETTINGS
    }

    /// Combine the global render scale with this camera's scale
    pub fn resolve_render_scale(&self, global_scale: f32) -> f32 {
        match self.render_scale_mode {
            RenderScaleMode::Inherit => global_scale,
            RenderScaleMode::Multiply => global_scale * self.render_scale,
            RenderScaleMode::Override => self.render_scale,
        }
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            copy_color: true,
            copy_depth: true,
            rendering_layer_mask: u32::MAX,
            mask_lights: false,
            render_scale_mode: RenderScaleMode::Inherit,
            render_scale: 1.0,
            override_post_fx: false,
            post_fx_settings: None,
            allow_fxaa: true,
            keep_alpha: false,
            final_blend_mode: FinalBlendMode::OPAQUE,
        }
    }
}

impl fmt::Debug for CameraSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraSettings")
            .field("copy_color", &self.copy_color)
            .field("copy_depth", &self.copy_depth)
            .field("rendering_layer_mask", &self.rendering_layer_mask)
            .field("mask_lights", &self.mask_lights)
            .field("render_scale_mode", &self.render_scale_mode)
            .field("render_scale", &self.render_scale)
            .field("override_post_fx", &self.override_post_fx)
            .field("has_post_fx_settings", &self.post_fx_settings.is_some())
            .field("allow_fxaa", &self.allow_fxaa)
            .field("keep_alpha", &self.keep_alpha)
            .field("final_blend_mode", &self.final_blend_mode)
            .finish()
    }
}

#[cfg(test)]
#[path = "camera_settings_tests.rs"]
mod tests;
