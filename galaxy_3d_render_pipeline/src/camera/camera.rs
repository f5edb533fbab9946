/// Camera: passive description of one view to render.
///
/// The caller computes the matrices and target size; the camera renderer only
/// reads them. Per-camera overrides are attached as an optional
/// [`CameraSettings`] snapshot.

use std::sync::Arc;
use glam::{Mat4, Vec4};
use crate::graphics_device::Viewport;
use crate::settings::CameraSettings;

/// What kind of view a camera renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraType {
    /// Regular in-game camera
    Game,
    /// Editor scene view
    SceneView,
    /// Editor asset preview
    Preview,
    /// Reflection probe capture
    Reflection,
}

impl CameraType {
    /// Name used as the profiling label of cameras without overrides
    pub fn name(&self) -> &'static str {
        match self {
            CameraType::Game => "Game",
            CameraType::SceneView => "SceneView",
            CameraType::Preview => "Preview",
            CameraType::Reflection => "Reflection",
        }
    }
}

/// Requested clear behavior, ordered from "clear most" to "clear nothing".
///
/// `Skybox < Color < Depth < Nothing`: depth is cleared for every flag up to
/// `Depth`, color for every flag up to `Color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClearFlags {
    Skybox = 1,
    Color = 2,
    Depth = 3,
    Nothing = 4,
}

/// Normalized viewport rectangle inside the camera target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewRect {
    /// The whole target
    pub const FULL: ViewRect = ViewRect { x: 0.0, y: 0.0, width: 1.0, height: 1.0 };
}

/// Camera data consumed by the camera renderer
#[derive(Debug, Clone)]
pub struct Camera {
    name: String,
    camera_type: CameraType,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    rect: ViewRect,
    target_width: u32,
    target_height: u32,
    near_clip: f32,
    far_clip: f32,
    clear_flags: ClearFlags,
    background_color: Vec4,
    allow_hdr: bool,
    settings: Option<Arc<CameraSettings>>,
}

impl Camera {
    /// Create a camera covering a `target_width`×`target_height` target.
    ///
    /// Defaults: full view rect, clip planes 0.3..1000, skybox clear,
    /// transparent black background, HDR allowed, no overrides.
    pub fn new(
        name: &str,
        camera_type: CameraType,
        view: Mat4,
        projection: Mat4,
        target_width: u32,
        target_height: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            camera_type,
            view_matrix: view,
            projection_matrix: projection,
            rect: ViewRect::FULL,
            target_width,
            target_height,
            near_clip: 0.3,
            far_clip: 1000.0,
            clear_flags: ClearFlags::Skybox,
            background_color: Vec4::ZERO,
            allow_hdr: true,
            settings: None,
        }
    }

    // ===== GETTERS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn camera_type(&self) -> CameraType {
        self.camera_type
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Normalized viewport rectangle
    pub fn rect(&self) -> ViewRect {
        self.rect
    }

    /// Whether the viewport covers the whole target
    pub fn has_full_view_rect(&self) -> bool {
        self.rect == ViewRect::FULL
    }

    /// Viewport width in pixels
    pub fn pixel_width(&self) -> u32 {
        (self.target_width as f32 * self.rect.width).round().max(0.0) as u32
    }

    /// Viewport height in pixels
    pub fn pixel_height(&self) -> u32 {
        (self.target_height as f32 * self.rect.height).round().max(0.0) as u32
    }

    /// Viewport in target pixels
    pub fn pixel_rect(&self) -> Viewport {
        Viewport {
            x: self.target_width as f32 * self.rect.x,
            y: self.target_height as f32 * self.rect.y,
            width: self.pixel_width() as f32,
            height: self.pixel_height() as f32,
        }
    }

    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    pub fn far_clip(&self) -> f32 {
        self.far_clip
    }

    pub fn clear_flags(&self) -> ClearFlags {
        self.clear_flags
    }

    /// Background color (linear RGBA)
    pub fn background_color(&self) -> Vec4 {
        self.background_color
    }

    pub fn allow_hdr(&self) -> bool {
        self.allow_hdr
    }

    /// Per-camera override, if the camera carries one
    pub fn settings(&self) -> Option<&CameraSettings> {
        self.settings.as_deref()
    }

    /// Profiling label: the camera name with overrides, its type name otherwise
    pub fn execution_label(&self) -> &str {
        if self.settings.is_some() {
            &self.name
        } else {
            self.camera_type.name()
        }
    }

    // ===== SETTERS =====

    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }

    pub fn set_rect(&mut self, rect: ViewRect) {
        self.rect = rect;
    }

    pub fn set_target_size(&mut self, width: u32, height: u32) {
        self.target_width = width;
        self.target_height = height;
    }

    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near_clip = near;
        self.far_clip = far;
    }

    pub fn set_clear_flags(&mut self, flags: ClearFlags) {
        self.clear_flags = flags;
    }

    pub fn set_background_color(&mut self, color: Vec4) {
        self.background_color = color;
    }

    pub fn set_allow_hdr(&mut self, allow: bool) {
        self.allow_hdr = allow;
    }

    /// Attach or remove the per-camera override
    pub fn set_settings(&mut self, settings: Option<Arc<CameraSettings>>) {
        self.settings = settings;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
