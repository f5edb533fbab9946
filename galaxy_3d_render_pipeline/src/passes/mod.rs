//! Camera passes: one module per pass of the per-camera frame.
//!
//! Every pass exposes a `record` function that appends it to a
//! [`RecordingScope`](crate::render_graph::RecordingScope), declaring the
//! targets and global bindings it touches. Conditional passes return whether
//! they were recorded.

mod lighting_pass;
mod setup_pass;
mod geometry_pass;
mod skybox_pass;
mod copy_attachments_pass;
mod unsupported_shaders_pass;
mod post_fx_pass;
mod final_pass;
mod gizmos_pass;

pub use lighting_pass::LightingPass;
pub use setup_pass::{SetupPass, effective_clear_flags};
pub use geometry_pass::{GeometryPass, SHADER_TAGS};
pub use skybox_pass::SkyboxPass;
pub use copy_attachments_pass::{CopyAttachmentsPass, copy_attachments};
pub use unsupported_shaders_pass::{UnsupportedShadersPass, LEGACY_SHADER_TAGS};
pub use post_fx_pass::PostFxPass;
pub use final_pass::FinalPass;
pub use gizmos_pass::GizmosPass;

use crate::error::{Galaxy3dError, Galaxy3dResult};
use crate::render_graph::TargetKey;

/// Camera targets declared for one frame
///
/// Attachments exist only with an intermediate buffer; copies only when the
/// frame requests them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CameraTextures {
    pub color_attachment: Option<TargetKey>,
    pub depth_attachment: Option<TargetKey>,
    pub color_copy: Option<TargetKey>,
    pub depth_copy: Option<TargetKey>,
}

impl CameraTextures {
    /// Attachment pair, if the frame renders into an intermediate buffer
    pub fn attachments(&self) -> Option<(TargetKey, TargetKey)> {
        self.color_attachment.zip(self.depth_attachment)
    }
}

/// Unwrap a target a pass cannot run without
pub(crate) fn required(key: Option<TargetKey>, what: &str) -> Galaxy3dResult<TargetKey> {
    key.ok_or_else(|| Galaxy3dError::InvalidResource(format!("{} was not declared this frame", what)))
}

#[cfg(test)]
pub(crate) mod test_support;
