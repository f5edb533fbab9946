/// Shared fixtures for pass tests

use glam::{Mat4, Vec3};
use crate::camera::{Camera, CameraType, ClearFlags};
use crate::frame_config::FrameConfig;
use crate::graphics_device::{TextureHandle, TextureRef};
use crate::render_graph::{EditorCapabilities, PassGraph};
use crate::settings::CameraBufferSettings;

pub(crate) const MISSING: TextureRef = TextureRef::Texture(TextureHandle(900));

pub(crate) fn camera(clear_flags: ClearFlags) -> Camera {
    let projection = Mat4::perspective_rh(std::f32::consts::FRAC_PI_3, 4.0 / 3.0, 0.3, 100.0);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    let mut camera = Camera::new("Main Camera", CameraType::Game, view, projection, 640, 480);
    camera.set_clip_planes(0.3, 100.0);
    camera.set_clear_flags(clear_flags);
    camera
}

pub(crate) fn graph(editor: EditorCapabilities) -> PassGraph {
    PassGraph::new(editor, MISSING)
}

/// Frame config with the given copies and otherwise default settings
pub(crate) fn config(camera: &Camera, copy_color: bool, copy_depth: bool) -> FrameConfig {
    let buffer_settings = CameraBufferSettings { copy_color, copy_depth, ..Default::default() };
    FrameConfig::resolve(&buffer_settings, camera, None, None)
}
