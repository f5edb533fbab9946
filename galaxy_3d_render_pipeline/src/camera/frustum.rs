/// Frustum: six clipping planes used to build culling parameters.
///
/// Each plane is a Vec4 (A, B, C, D) with an inward-pointing unit normal
/// (A, B, C). A point P is inside when dot(plane, (P, 1)) >= 0 for all planes.

use glam::{Mat4, Vec3, Vec4};
use crate::culling::AABB;

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Plane normals shorter than this are treated as degenerate
const MIN_NORMAL_LENGTH: f32 = 1e-6;

/// Six frustum planes: left, right, bottom, top, near, far
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract normalized planes from a view-projection matrix.
    ///
    /// Returns `None` when the matrix is not finite or any plane collapses
    /// (zero-length normal), which happens with singular projections.
    /// Uses the Gribb & Hartmann method (perspective and orthographic).
    pub fn from_view_projection(vp: &Mat4) -> Option<Self> {
        if !vp.is_finite() {
            return None;
        }

        let row = |i: usize| vp.row(i);
        let mut planes = [
            row(3) + row(0),
            row(3) - row(0),
            row(3) + row(1),
            row(3) - row(1),
            row(3) + row(2),
            row(3) - row(2),
        ];

        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if !(normal_len > MIN_NORMAL_LENGTH) {
                return None;
            }
            *plane /= normal_len;
        }

        Some(Self { planes })
    }

    /// Signed distance from a point to one plane (positive inside)
    pub fn distance(&self, plane: usize, point: Vec3) -> f32 {
        self.planes[plane].truncate().dot(point) + self.planes[plane].w
    }

    /// Conservative AABB test using the "positive vertex" of each plane.
    ///
    /// May report an outside box as visible, never the reverse.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.planes.iter().all(|plane| {
            let normal = plane.truncate();
            let p_vertex = Vec3::new(
                if normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
                if normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
                if normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
            );
            normal.dot(p_vertex) + plane.w >= 0.0
        })
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
