use std::sync::Arc;
use glam::Mat4;
use crate::camera::{Camera, CameraType};
use crate::settings::{
    BlendFactor, CameraBufferSettings, CameraSettings, FinalBlendMode, PostFxProfile,
    PostFxSettings, RenderScaleMode,
};
use super::*;

fn camera(camera_type: CameraType) -> Camera {
    Camera::new("Test", camera_type, Mat4::IDENTITY, Mat4::IDENTITY, 1280, 720)
}

fn post_fx() -> Arc<dyn PostFxSettings> {
    Arc::new(PostFxProfile::default())
}

// ============================================================================
// Render scale
// ============================================================================

#[test]
fn test_clamp_render_scale() {
    for input in [-1.0, 0.0, 0.05, 0.1, 0.5, 1.0, 1.7, 2.0, 3.5, 100.0] {
        let expected = f32::min(f32::max(input, 0.1), 2.0);
        assert_eq!(clamp_render_scale(input), expected, "input {}", input);
    }
}

#[test]
fn test_near_one_scales_render_native() {
    for input in [0.991, 1.0, 1.005, 1.009] {
        assert_eq!(scaled_buffer_size(1280, 720, input), BufferSize::new(1280, 720));
    }
}

#[test]
fn test_scaled_buffer_size_rounds() {
    assert_eq!(scaled_buffer_size(1280, 720, 0.5), BufferSize::new(640, 360));
    assert_eq!(scaled_buffer_size(101, 33, 0.5), BufferSize::new(51, 17));
    assert_eq!(scaled_buffer_size(100, 100, 1.333), BufferSize::new(133, 133));
}

#[test]
fn test_scaled_buffer_size_is_clamped() {
    assert_eq!(scaled_buffer_size(100, 50, 5.0), BufferSize::new(200, 100));
    assert_eq!(scaled_buffer_size(100, 50, 0.01), BufferSize::new(10, 5));
}

#[test]
fn test_buffer_size_never_below_one() {
    assert_eq!(scaled_buffer_size(3, 2, 0.1), BufferSize::new(1, 1));
    assert_eq!(BufferSize::new(0, 0), BufferSize { width: 1, height: 1 });
}

#[test]
fn test_buffer_size_vector() {
    let v = BufferSize::new(4, 2).as_vector();
    assert_eq!(v, glam::Vec4::new(0.25, 0.5, 4.0, 2.0));
}

#[test]
fn test_scene_view_never_scales() {
    let buffer = CameraBufferSettings { render_scale: 0.5, ..Default::default() };
    let config = FrameConfig::resolve(&buffer, &camera(CameraType::SceneView), None, None);
    assert!(!config.use_scaled_rendering);
    assert_eq!(config.buffer_size, BufferSize::new(1280, 720));
}

#[test]
fn test_camera_multiplier_composes_with_global_scale() {
    let buffer = CameraBufferSettings { render_scale: 0.5, ..Default::default() };
    let settings = CameraSettings {
        render_scale_mode: RenderScaleMode::Multiply,
        render_scale: 2.0,
        ..Default::default()
    };
    let config = FrameConfig::resolve(&buffer, &camera(CameraType::Game), Some(&settings), None);
    assert!(!config.use_scaled_rendering);
    assert!(!config.use_intermediate_buffer());
}

// ============================================================================
// Intermediate buffer
// ============================================================================

#[test]
fn test_intermediate_buffer_truth_table() {
    for bits in 0..16u32 {
        let scaled = bits & 1 != 0;
        let color = bits & 2 != 0;
        let depth = bits & 4 != 0;
        let post = bits & 8 != 0;
        assert_eq!(
            needs_intermediate_buffer(scaled, color, depth, post),
            scaled || color || depth || post,
        );
    }
}

#[test]
fn test_resolved_config_matches_truth_table() {
    for bits in 0..16u32 {
        let buffer = CameraBufferSettings {
            render_scale: if bits & 1 != 0 { 0.5 } else { 1.0 },
            copy_color: bits & 2 != 0,
            copy_depth: bits & 4 != 0,
            ..Default::default()
        };
        let settings = if bits & 8 != 0 { Some(post_fx()) } else { None };
        let config =
            FrameConfig::resolve(&buffer, &camera(CameraType::Game), None, settings.as_ref());
        assert_eq!(config.use_intermediate_buffer(), bits != 0, "combination {:04b}", bits);
    }
}

// ============================================================================
// Copy flags
// ============================================================================

#[test]
fn test_copies_need_global_and_camera_flags() {
    let buffer = CameraBufferSettings { copy_color: true, copy_depth: true, ..Default::default() };
    let settings = CameraSettings { copy_color: false, ..Default::default() };
    let config = FrameConfig::resolve(&buffer, &camera(CameraType::Game), Some(&settings), None);
    assert!(!config.use_color_texture);
    assert!(config.use_depth_texture);
}

#[test]
fn test_reflection_camera_uses_reflection_flags_only() {
    let buffer = CameraBufferSettings {
        copy_color_reflection: true,
        copy_depth_reflection: true,
        ..Default::default()
    };
    let settings = CameraSettings { copy_color: false, copy_depth: false, ..Default::default() };
    let config =
        FrameConfig::resolve(&buffer, &camera(CameraType::Reflection), Some(&settings), None);
    assert!(config.use_color_texture);
    assert!(config.use_depth_texture);
    assert!(config.use_intermediate_buffer());
}

#[test]
fn test_reflection_camera_ignores_regular_copy_flags() {
    let buffer = CameraBufferSettings { copy_color: true, copy_depth: true, ..Default::default() };
    let config = FrameConfig::resolve(&buffer, &camera(CameraType::Reflection), None, None);
    assert!(!config.use_color_texture);
    assert!(!config.use_depth_texture);
}

// ============================================================================
// Post FX
// ============================================================================

#[test]
fn test_post_fx_active_for_game_camera() {
    let global = post_fx();
    let config = FrameConfig::resolve(
        &CameraBufferSettings::default(),
        &camera(CameraType::Game),
        None,
        Some(&global),
    );
    assert!(config.has_active_post_fx);
}

#[test]
fn test_post_fx_inactive_for_reflection_camera() {
    let global = post_fx();
    let config = FrameConfig::resolve(
        &CameraBufferSettings::default(),
        &camera(CameraType::Reflection),
        None,
        Some(&global),
    );
    assert!(!config.has_active_post_fx);
}

#[test]
fn test_override_replaces_post_fx_even_with_none() {
    let global = post_fx();
    let settings = CameraSettings { override_post_fx: true, ..Default::default() };
    let config = FrameConfig::resolve(
        &CameraBufferSettings::default(),
        &camera(CameraType::Game),
        Some(&settings),
        Some(&global),
    );
    assert!(config.post_fx_settings.is_none());
    assert!(!config.has_active_post_fx);
}

#[test]
fn test_override_supplies_camera_post_fx() {
    let settings = CameraSettings {
        override_post_fx: true,
        post_fx_settings: Some(post_fx()),
        ..Default::default()
    };
    let config = FrameConfig::resolve(
        &CameraBufferSettings::default(),
        &camera(CameraType::Game),
        Some(&settings),
        None,
    );
    assert!(config.has_active_post_fx);
}

// ============================================================================
// Camera restrictions
// ============================================================================

#[test]
fn test_hdr_requires_camera_permission() {
    let mut cam = camera(CameraType::Game);
    cam.set_allow_hdr(false);
    let config = FrameConfig::resolve(&CameraBufferSettings::default(), &cam, None, None);
    assert!(!config.allow_hdr());
}

#[test]
fn test_fxaa_requires_camera_permission() {
    let mut buffer = CameraBufferSettings::default();
    buffer.fxaa.enabled = true;
    let settings = CameraSettings { allow_fxaa: false, ..Default::default() };
    let config = FrameConfig::resolve(&buffer, &camera(CameraType::Game), Some(&settings), None);
    assert!(!config.fxaa().enabled);
}

#[test]
fn test_light_mask_follows_mask_lights() {
    let masked = CameraSettings { rendering_layer_mask: 0b101, mask_lights: true, ..Default::default() };
    let config = FrameConfig::resolve(
        &CameraBufferSettings::default(),
        &camera(CameraType::Game),
        Some(&masked),
        None,
    );
    assert_eq!(config.light_mask, 0b101);
    assert_eq!(config.rendering_layer_mask, 0b101);

    let unmasked = CameraSettings { rendering_layer_mask: 0b101, ..Default::default() };
    let config = FrameConfig::resolve(
        &CameraBufferSettings::default(),
        &camera(CameraType::Game),
        Some(&unmasked),
        None,
    );
    assert_eq!(config.light_mask, u32::MAX);
}

#[test]
fn test_final_blend_and_keep_alpha_come_from_camera() {
    let settings = CameraSettings {
        keep_alpha: true,
        final_blend_mode: FinalBlendMode {
            source: BlendFactor::SrcAlpha,
            destination: BlendFactor::OneMinusSrcAlpha,
        },
        ..Default::default()
    };
    let config = FrameConfig::resolve(
        &CameraBufferSettings::default(),
        &camera(CameraType::Game),
        Some(&settings),
        None,
    );
    assert!(config.keep_alpha);
    assert_eq!(config.final_blend_mode.destination, BlendFactor::OneMinusSrcAlpha);
}
