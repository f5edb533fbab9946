/// Post-FX settings as seen by the camera renderer.
///
/// Effect parameters belong to the post-FX stack; the renderer only needs to
/// know whether a settings asset applies to a camera.

use std::fmt;
use crate::camera::{Camera, CameraType};

/// A post-FX settings asset
pub trait PostFxSettings: fmt::Debug + Send + Sync {
    /// Whether these effects should run for `camera`
    fn is_active_for(&self, camera: &Camera) -> bool;
}

/// Settings profile active for game cameras and, optionally, the scene view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostFxProfile {
    /// Show effects in the editor scene view
    pub scene_view_effects: bool,
}

impl Default for PostFxProfile {
    fn default() -> Self {
        Self { scene_view_effects: true }
    }
}

impl PostFxSettings for PostFxProfile {
    fn is_active_for(&self, camera: &Camera) -> bool {
        match camera.camera_type() {
            CameraType::Game => true,
            CameraType::SceneView => self.scene_view_effects,
            CameraType::Preview | CameraType::Reflection => false,
        }
    }
}
