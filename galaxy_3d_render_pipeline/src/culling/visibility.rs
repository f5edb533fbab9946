/// FrustumVisibility: brute-force frustum culling over a renderer list.
///
/// Tests every renderer's world-space bounds against the camera frustum.
/// O(n), no spatial structure; meant for hosts without their own culling.

use glam::{Mat4, Vec3};
use crate::culling::{
    CullingParameters, CullingResults, RendererId, VisibleLight, VisibleRenderer,
};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Transform by a matrix (Arvo's method, exact for affine transforms)
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        AABB { min: new_min, max: new_max }
    }
}

/// A renderer known to the host scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneRenderer {
    pub id: RendererId,
    /// World-space bounds
    pub bounds: AABB,
    pub shader_tag: String,
    pub render_queue: u32,
    pub material_id: u32,
    pub rendering_layer_mask: u32,
    pub casts_shadows: bool,
}

/// Flat renderer/light set culled against the camera frustum
#[derive(Debug, Clone, Default)]
pub struct FrustumVisibility {
    renderers: Vec<SceneRenderer>,
    lights: Vec<VisibleLight>,
}

impl FrustumVisibility {
    pub fn new(renderers: Vec<SceneRenderer>, lights: Vec<VisibleLight>) -> Self {
        Self { renderers, lights }
    }

    pub fn renderers(&self) -> &[SceneRenderer] {
        &self.renderers
    }

    /// Run the query
    ///
    /// Every light is considered visible. A renderer counts as a shadow caster
    /// when it casts shadows and its center lies within the shadow distance,
    /// whether or not it is visible itself.
    pub fn query(&self, parameters: &CullingParameters) -> CullingResults {
        let mut results = CullingResults {
            lights: self.lights.clone(),
            shadow_distance: parameters.shadow_distance,
            ..Default::default()
        };

        for renderer in &self.renderers {
            let center = renderer.bounds.center();
            if renderer.casts_shadows
                && center.distance(parameters.camera_position) <= parameters.shadow_distance
            {
                results.shadow_caster_count += 1;
            }

            if !parameters.frustum.intersects_aabb(&renderer.bounds) {
                continue;
            }

            // Right-handed view space looks down -Z
            let view_depth = -parameters.view_matrix.transform_point3(center).z;
            results.renderers.push(VisibleRenderer {
                id: renderer.id,
                shader_tag: renderer.shader_tag.clone(),
                render_queue: renderer.render_queue,
                material_id: renderer.material_id,
                view_depth,
                rendering_layer_mask: renderer.rendering_layer_mask,
            });
        }

        results
    }
}

#[cfg(test)]
#[path = "visibility_tests.rs"]
mod tests;
