/// Effective per-frame configuration of one camera.
///
/// [`FrameConfig::resolve`] merges the global buffer settings, the camera and
/// its optional override into the flags the passes branch on. It is rebuilt
/// for every render call and never persisted.

use std::sync::Arc;
use glam::Vec4;
use crate::camera::{Camera, CameraType};
use crate::settings::{
    CameraBufferSettings, CameraSettings, FinalBlendMode, FxaaSettings, PostFxSettings,
};

/// Smallest accepted render scale
pub const RENDER_SCALE_MIN: f32 = 0.1;

/// Largest accepted render scale
pub const RENDER_SCALE_MAX: f32 = 2.0;

/// Scales closer than this to 1.0 render at native size
pub const RENDER_SCALE_EPSILON: f32 = 0.01;

/// Size of the camera buffers in pixels, never smaller than 1×1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferSize {
    pub width: u32,
    pub height: u32,
}

impl BufferSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width: width.max(1), height: height.max(1) }
    }

    /// `(1/w, 1/h, w, h)`, the layout of the global buffer-size binding
    pub fn as_vector(&self) -> Vec4 {
        let (w, h) = (self.width as f32, self.height as f32);
        Vec4::new(1.0 / w, 1.0 / h, w, h)
    }
}

/// Whether a composed render scale differs enough from 1.0 to need scaling
pub fn is_scaled(render_scale: f32) -> bool {
    (render_scale - 1.0).abs() > RENDER_SCALE_EPSILON
}

/// Clamp a render scale to the supported range
pub fn clamp_render_scale(render_scale: f32) -> f32 {
    render_scale.clamp(RENDER_SCALE_MIN, RENDER_SCALE_MAX)
}

/// Buffer size for a camera of `pixel_width`×`pixel_height` at `render_scale`
pub fn scaled_buffer_size(pixel_width: u32, pixel_height: u32, render_scale: f32) -> BufferSize {
    if !is_scaled(render_scale) {
        return BufferSize::new(pixel_width, pixel_height);
    }
    let scale = clamp_render_scale(render_scale);
    BufferSize::new(
        (pixel_width as f32 * scale).round() as u32,
        (pixel_height as f32 * scale).round() as u32,
    )
}

/// Whether the camera needs an off-screen color/depth pair
pub fn needs_intermediate_buffer(
    use_scaled_rendering: bool,
    use_color_texture: bool,
    use_depth_texture: bool,
    has_active_post_fx: bool,
) -> bool {
    use_scaled_rendering || use_color_texture || use_depth_texture || has_active_post_fx
}

/// Effective settings for one camera render
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Global buffer settings with camera restrictions applied (HDR, FXAA)
    pub buffer_settings: CameraBufferSettings,
    /// Composed and clamped render scale
    pub render_scale: f32,
    pub use_scaled_rendering: bool,
    pub buffer_size: BufferSize,
    pub use_color_texture: bool,
    pub use_depth_texture: bool,
    pub keep_alpha: bool,
    /// Filters renderers drawn by geometry passes
    pub rendering_layer_mask: u32,
    /// Filters lights; all bits unless the camera masks lights
    pub light_mask: u32,
    pub final_blend_mode: FinalBlendMode,
    pub post_fx_settings: Option<Arc<dyn PostFxSettings>>,
    pub has_active_post_fx: bool,
}

impl FrameConfig {
    /// Merge global settings with the camera and its override.
    ///
    /// `camera_settings` falls back to [`CameraSettings::shared_default`].
    /// `post_fx_settings` are the pipeline-wide ones; a camera that overrides
    /// post FX replaces them entirely, even with `None`.
    pub fn resolve(
        buffer_settings: &CameraBufferSettings,
        camera: &Camera,
        camera_settings: Option<&CameraSettings>,
        post_fx_settings: Option<&Arc<dyn PostFxSettings>>,
    ) -> Self {
        let camera_settings = camera_settings.unwrap_or(CameraSettings::shared_default());

        let (use_color_texture, use_depth_texture) =
            if camera.camera_type() == CameraType::Reflection {
                (buffer_settings.copy_color_reflection, buffer_settings.copy_depth_reflection)
            } else {
                (
                    buffer_settings.copy_color && camera_settings.copy_color,
                    buffer_settings.copy_depth && camera_settings.copy_depth,
                )
            };

        let post_fx_settings = if camera_settings.override_post_fx {
            camera_settings.post_fx_settings.clone()
        } else {
            post_fx_settings.cloned()
        };
        let has_active_post_fx = post_fx_settings
            .as_ref()
            .is_some_and(|settings| settings.is_active_for(camera));

        let requested_scale = camera_settings.resolve_render_scale(buffer_settings.render_scale);
        let use_scaled_rendering =
            is_scaled(requested_scale) && camera.camera_type() != CameraType::SceneView;
        let buffer_size = if use_scaled_rendering {
            scaled_buffer_size(camera.pixel_width(), camera.pixel_height(), requested_scale)
        } else {
            BufferSize::new(camera.pixel_width(), camera.pixel_height())
        };

        let mut effective_buffer = *buffer_settings;
        effective_buffer.allow_hdr &= camera.allow_hdr();
        effective_buffer.fxaa.enabled &= camera_settings.allow_fxaa;

        Self {
            buffer_settings: effective_buffer,
            render_scale: clamp_render_scale(requested_scale),
            use_scaled_rendering,
            buffer_size,
            use_color_texture,
            use_depth_texture,
            keep_alpha: camera_settings.keep_alpha,
            rendering_layer_mask: camera_settings.rendering_layer_mask,
            light_mask: if camera_settings.mask_lights {
                camera_settings.rendering_layer_mask
            } else {
                u32::MAX
            },
            final_blend_mode: camera_settings.final_blend_mode,
            post_fx_settings,
            has_active_post_fx,
        }
    }

    pub fn allow_hdr(&self) -> bool {
        self.buffer_settings.allow_hdr
    }

    pub fn fxaa(&self) -> &FxaaSettings {
        &self.buffer_settings.fxaa
    }

    /// Whether the intermediate color/depth attachment pair exists
    pub fn use_intermediate_buffer(&self) -> bool {
        needs_intermediate_buffer(
            self.use_scaled_rendering,
            self.use_color_texture,
            self.use_depth_texture,
            self.has_active_post_fx,
        )
    }
}

#[cfg(test)]
#[path = "frame_config_tests.rs"]
mod tests;
