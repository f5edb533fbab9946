/// Culler: runs the visibility query for a camera.

use crate::error::Galaxy3dResult;
use crate::camera::Camera;
use crate::culling::{CullingParameters, CullingResults};
use crate::graphics_device::RenderContext;
use crate::engine_debug;

/// Stateless culling entry point
pub struct Culler;

impl Culler {
    /// Cull `camera` with shadows limited to `max_shadow_distance`.
    ///
    /// Returns `Ok(None)` when the camera cannot produce culling parameters;
    /// the caller must then skip the camera without touching any resource.
    /// The shadow distance is clamped to the far plane before the query runs.
    pub fn cull(
        context: &mut dyn RenderContext,
        camera: &Camera,
        max_shadow_distance: f32,
    ) -> Galaxy3dResult<Option<CullingResults>> {
        let Some(mut parameters) = CullingParameters::from_camera(camera) else {
            engine_debug!(
                "galaxy3d::Culler",
                "Camera '{}' has no valid culling parameters",
                camera.name()
            );
            return Ok(None);
        };

        parameters.shadow_distance = max_shadow_distance.min(camera.far_clip());
        let results = context.cull(&parameters)?;
        Ok(Some(results))
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
