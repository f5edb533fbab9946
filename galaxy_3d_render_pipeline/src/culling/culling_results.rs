/// Culling parameters and results.

use glam::{Mat4, Vec3};
use crate::camera::{Camera, Frustum};

/// Host identifier of a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RendererId(pub u32);

/// Parameters of one visibility query
#[derive(Debug, Clone, Copy)]
pub struct CullingParameters {
    pub view_matrix: Mat4,
    pub frustum: Frustum,
    pub camera_position: Vec3,
    pub far_clip: f32,
    /// Shadow casters farther than this are not requested
    pub shadow_distance: f32,
}

impl CullingParameters {
    /// Derive culling parameters from a camera.
    ///
    /// Returns `None` when the camera has no pixels, invalid clip planes,
    /// a singular or non-finite view/projection, or a degenerate frustum.
    /// `shadow_distance` starts at the far plane.
    pub fn from_camera(camera: &Camera) -> Option<Self> {
        if camera.pixel_width() == 0 || camera.pixel_height() == 0 {
            return None;
        }
        let (near, far) = (camera.near_clip(), camera.far_clip());
        if !(near.is_finite() && far.is_finite() && near > 0.0 && far > near) {
            return None;
        }

        let view = *camera.view_matrix();
        let projection = *camera.projection_matrix();
        if !view.is_finite() || !projection.is_finite() {
            return None;
        }
        if view.determinant().abs() <= f32::EPSILON || projection.determinant().abs() <= f32::EPSILON {
            return None;
        }

        let frustum = Frustum::from_view_projection(&camera.view_projection_matrix())?;
        let camera_position = view.inverse().w_axis.truncate();

        Some(Self {
            view_matrix: view,
            frustum,
            camera_position,
            far_clip: far,
            shadow_distance: far,
        })
    }
}

/// A renderer that passed culling
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRenderer {
    pub id: RendererId,
    /// Light mode tag of the renderer's shader pass
    pub shader_tag: String,
    pub render_queue: u32,
    /// Material identity, used to bucket draws by state
    pub material_id: u32,
    /// Distance along the camera's view direction
    pub view_depth: f32,
    pub rendering_layer_mask: u32,
}

/// Light type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Directional,
    Spot,
    Point,
}

/// A light that affects the visible volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleLight {
    pub kind: LightKind,
    pub casts_shadows: bool,
    pub rendering_layer_mask: u32,
}

/// Output of a visibility query, read-only for the rest of the frame
#[derive(Debug, Clone, Default)]
pub struct CullingResults {
    pub renderers: Vec<VisibleRenderer>,
    pub lights: Vec<VisibleLight>,
    /// Renderers within shadow distance that cast shadows
    pub shadow_caster_count: usize,
    /// Shadow distance the query ran with
    pub shadow_distance: f32,
}

impl CullingResults {
    /// Whether any light of `kinds` passing `light_mask` casts visible shadows
    pub fn has_shadowed_light(&self, kinds: &[LightKind], light_mask: u32) -> bool {
        self.shadow_caster_count > 0
            && self.lights.iter().any(|light| {
                light.casts_shadows
                    && kinds.contains(&light.kind)
                    && light.rendering_layer_mask & light_mask != 0
            })
    }
}
