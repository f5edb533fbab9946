//! Camera module: camera description and frustum planes.
//!
//! Cameras are owned and driven by the caller; the renderer reads them.

mod camera;
mod frustum;

pub use camera::{Camera, CameraType, ClearFlags, ViewRect};
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
