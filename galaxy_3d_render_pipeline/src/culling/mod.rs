//! Culling: visibility queries for one camera.
//!
//! The [`Culler`] derives culling parameters from a camera and runs the host's
//! visibility query. [`FrustumVisibility`] is a ready-made query for hosts
//! that keep a flat list of renderers.

mod culling_results;
mod culler;
mod visibility;

pub use culling_results::{
    CullingParameters, CullingResults, VisibleRenderer, VisibleLight, LightKind, RendererId,
};
pub use culler::Culler;
pub use visibility::{AABB, SceneRenderer, FrustumVisibility};
