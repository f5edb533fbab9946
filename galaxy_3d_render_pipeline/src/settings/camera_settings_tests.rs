use super::*;

// ============================================================================
// Render scale composition
// ============================================================================

#[test]
fn test_inherit_uses_global_scale() {
    let settings = CameraSettings { render_scale: 0.5, ..Default::default() };
    assert_eq!(settings.resolve_render_scale(1.5), 1.5);
}

#[test]
fn test_multiply_composes_scales() {
    let settings = CameraSettings {
        render_scale_mode: RenderScaleMode::Multiply,
        render_scale: 0.5,
        ..Default::default()
    };
    assert_eq!(settings.resolve_render_scale(1.5), 0.75);
}

#[test]
fn test_override_ignores_global_scale() {
    let settings = CameraSettings {
        render_scale_mode: RenderScaleMode::Override,
        render_scale: 0.25,
        ..Default::default()
    };
    assert_eq!(settings.resolve_render_scale(2.0), 0.25);
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_shared_default_is_one_instance() {
    let a = CameraSettings::shared_default() as *const CameraSettings;
    let b = CameraSettings::shared_default() as *const CameraSettings;
    assert_eq!(a, b);
}

#[test]
fn test_default_values() {
    let settings = CameraSettings::default();
    assert!(settings.copy_color && settings.copy_depth);
    assert_eq!(settings.rendering_layer_mask, u32::MAX);
    assert!(settings.allow_fxaa);
    assert_eq!(settings.final_blend_mode, FinalBlendMode::OPAQUE);
}

#[test]
fn test_blend_factor_values() {
    assert_eq!(BlendFactor::Zero.as_float(), 0.0);
    assert_eq!(BlendFactor::One.as_float(), 1.0);
    assert_eq!(BlendFactor::OneMinusSrcAlpha.as_float(), 10.0);
}
