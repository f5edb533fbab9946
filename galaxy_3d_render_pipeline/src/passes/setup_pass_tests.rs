use glam::Vec4;
use crate::graphics_device::mock_graphics_device::MockRenderContext;
use crate::graphics_device::FilterMode;
use crate::passes::test_support::{camera, config, graph, MISSING};
use crate::render_graph::{BindingValue, EditorCapabilities};
use super::*;

// ============================================================================
// effective_clear_flags
// ============================================================================

#[test]
fn test_clear_flags_kept_without_intermediate_buffer() {
    for flags in [ClearFlags::Skybox, ClearFlags::Color, ClearFlags::Depth, ClearFlags::Nothing] {
        assert_eq!(effective_clear_flags(flags, false), flags);
    }
}

#[test]
fn test_clear_flags_become_color_with_intermediate_buffer() {
    for flags in [ClearFlags::Skybox, ClearFlags::Color, ClearFlags::Depth, ClearFlags::Nothing] {
        assert_eq!(effective_clear_flags(flags, true), ClearFlags::Color);
    }
}

// ============================================================================
// Recording
// ============================================================================

#[test]
fn test_no_attachments_without_intermediate_buffer() {
    let camera = camera(ClearFlags::Skybox);
    let config = config(&camera, false, false);
    let mut graph = graph(EditorCapabilities::empty());
    let mut ctx = MockRenderContext::new();

    let mut scope = graph.begin_frame("Main Camera");
    let textures = SetupPass::record(&mut scope, &camera, &config, MISSING).unwrap();
    assert_eq!(textures, CameraTextures::default());
    let report = scope.end_frame(&mut ctx).unwrap();
    assert_eq!(report.transient_targets, 0);

    let state = ctx.state.lock().unwrap();
    assert_eq!(
        state.lines_starting_with("set_render_target"),
        vec!["set_render_target CameraTarget/Load/Store depth=none"]
    );
    assert_eq!(
        state.lines_starting_with("clear_render_target"),
        vec!["clear_render_target depth=true color=true [0.0, 0.0, 0.0, 0.0]"]
    );
}

#[test]
fn test_depth_only_clear_without_intermediate_buffer() {
    let camera = camera(ClearFlags::Depth);
    let config = config(&camera, false, false);
    let mut graph = graph(EditorCapabilities::empty());
    let mut ctx = MockRenderContext::new();

    let mut scope = graph.begin_frame("Main Camera");
    SetupPass::record(&mut scope, &camera, &config, MISSING).unwrap();
    scope.end_frame(&mut ctx).unwrap();

    let state = ctx.state.lock().unwrap();
    assert_eq!(
        state.lines_starting_with("clear_render_target"),
        vec!["clear_render_target depth=true color=false [0.0, 0.0, 0.0, 0.0]"]
    );
}

#[test]
fn test_intermediate_attachments_declared_and_cleared_to_background() {
    let mut camera = camera(ClearFlags::Skybox);
    camera.set_background_color(Vec4::new(0.2, 0.4, 0.6, 1.0));
    let config = config(&camera, true, false);
    let mut graph = graph(EditorCapabilities::empty());
    let mut ctx = MockRenderContext::new();

    let mut scope = graph.begin_frame("Main Camera");
    let textures = SetupPass::record(&mut scope, &camera, &config, MISSING).unwrap();
    let (color, depth) = textures.attachments().unwrap();

    let color_desc = scope.target(color).unwrap().desc;
    assert_eq!((color_desc.width, color_desc.height), (640, 480));
    assert_eq!(color_desc.format, TextureFormat::R16G16B16A16_SFLOAT);
    assert_eq!(color_desc.filter, FilterMode::Bilinear);
    let depth_desc = scope.target(depth).unwrap().desc;
    assert_eq!(depth_desc.depth_bits, 32);
    assert_eq!(depth_desc.filter, FilterMode::Point);
    scope.end_frame(&mut ctx).unwrap();

    let state = ctx.state.lock().unwrap();
    assert_eq!(
        state.lines_starting_with("set_render_target"),
        vec!["set_render_target Temporary(0)/DontCare/Store depth=Temporary(1)/DontCare/Store"]
    );
    assert_eq!(
        state.lines_starting_with("clear_render_target"),
        vec!["clear_render_target depth=true color=true [0.2, 0.4, 0.6, 1.0]"]
    );
}

#[test]
fn test_ldr_attachment_when_hdr_disallowed() {
    let mut camera = camera(ClearFlags::Color);
    camera.set_allow_hdr(false);
    let config = config(&camera, false, true);
    let mut graph = graph(EditorCapabilities::empty());

    let mut scope = graph.begin_frame("Main Camera");
    let textures = SetupPass::record(&mut scope, &camera, &config, MISSING).unwrap();
    let color = textures.color_attachment.unwrap();
    assert_eq!(scope.target(color).unwrap().desc.format, TextureFormat::R8G8B8A8_UNORM);
}

#[test]
fn test_globals_bound_after_setup() {
    let camera = camera(ClearFlags::Skybox);
    let config = config(&camera, true, true);
    let mut graph = graph(EditorCapabilities::empty());
    let mut ctx = MockRenderContext::new();

    let mut scope = graph.begin_frame("Main Camera");
    SetupPass::record(&mut scope, &camera, &config, MISSING).unwrap();
    scope.end_frame(&mut ctx).unwrap();

    let state = ctx.state.lock().unwrap();
    assert_eq!(
        state.global(GlobalBinding::BufferSize),
        Some(BindingValue::Vector(Vec4::new(1.0 / 640.0, 1.0 / 480.0, 640.0, 480.0)))
    );
    // Attachments released at the end of the frame's only pass
    assert_eq!(state.global(GlobalBinding::ColorAttachment), Some(BindingValue::Texture(MISSING)));
    assert_eq!(state.global(GlobalBinding::ColorTexture), Some(BindingValue::Texture(MISSING)));
    assert_eq!(state.global(GlobalBinding::DepthTexture), Some(BindingValue::Texture(MISSING)));
}
