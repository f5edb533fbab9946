use glam::{Mat4, Vec3};
use crate::culling::AABB;
use super::*;

fn perspective_vp() -> Mat4 {
    let projection = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    projection * view
}

fn unit_box_at(center: Vec3) -> AABB {
    AABB { min: center - Vec3::splat(0.5), max: center + Vec3::splat(0.5) }
}

// ============================================================================
// Frustum::from_view_projection
// ============================================================================

#[test]
fn test_planes_are_normalized() {
    let frustum = Frustum::from_view_projection(&perspective_vp()).unwrap();
    for plane in &frustum.planes {
        assert!((plane.truncate().length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn test_orthographic_projection_is_valid() {
    let projection = Mat4::orthographic_rh(-10.0, 10.0, -10.0, 10.0, 0.1, 100.0);
    assert!(Frustum::from_view_projection(&projection).is_some());
}

#[test]
fn test_zero_matrix_is_degenerate() {
    assert!(Frustum::from_view_projection(&Mat4::ZERO).is_none());
}

#[test]
fn test_non_finite_matrix_is_degenerate() {
    let mut m = perspective_vp();
    m.x_axis.x = f32::NAN;
    assert!(Frustum::from_view_projection(&m).is_none());
}

#[test]
fn test_origin_is_inside_all_planes() {
    let frustum = Frustum::from_view_projection(&perspective_vp()).unwrap();
    for plane in 0..6 {
        assert!(frustum.distance(plane, Vec3::ZERO) > 0.0, "plane {} rejects origin", plane);
    }
}

// ============================================================================
// AABB tests
// ============================================================================

#[test]
fn test_box_in_front_of_camera_is_visible() {
    let frustum = Frustum::from_view_projection(&perspective_vp()).unwrap();
    assert!(frustum.intersects_aabb(&unit_box_at(Vec3::ZERO)));
}

#[test]
fn test_box_behind_camera_is_culled() {
    let frustum = Frustum::from_view_projection(&perspective_vp()).unwrap();
    assert!(!frustum.intersects_aabb(&unit_box_at(Vec3::new(0.0, 0.0, 20.0))));
}

#[test]
fn test_box_beyond_far_plane_is_culled() {
    let frustum = Frustum::from_view_projection(&perspective_vp()).unwrap();
    assert!(!frustum.intersects_aabb(&unit_box_at(Vec3::new(0.0, 0.0, -200.0))));
}
