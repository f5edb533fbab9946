/// Lighting subsystem interface.
///
/// The lighting pass declares the shadow atlases for the frame; the subsystem
/// behind this trait fills them and uploads per-light data when the pass
/// executes. Atlas packing and shadow rendering are up to the implementation.

use crate::error::Galaxy3dResult;
use crate::culling::CullingResults;
use crate::render_graph::{PassContext, TargetKey};
use crate::settings::ShadowSettings;

/// Shadow atlases declared for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowTextures {
    pub directional_atlas: TargetKey,
    pub other_atlas: TargetKey,
}

/// Everything the lighting subsystem receives for one camera
pub struct LightingInput<'i> {
    pub culling: &'i CullingResults,
    pub shadow_settings: &'i ShadowSettings,
    pub use_lights_per_object: bool,
    /// Lights whose rendering layers miss this mask are ignored
    pub light_mask: u32,
    pub shadow_textures: ShadowTextures,
}

/// Lighting subsystem
pub trait Lighting {
    /// Render shadows and upload light data for one camera
    fn setup(&mut self, ctx: &mut PassContext<'_>, input: &LightingInput<'_>) -> Galaxy3dResult<()>;
}
