/// RenderContext trait - the host's per-frame rendering context.

use crate::error::Galaxy3dResult;
use crate::camera::Camera;
use crate::culling::{CullingParameters, CullingResults};
use crate::graphics_device::CommandList;

/// Host rendering context for one frame
///
/// Owns visibility queries and the submission boundary. Command lists are
/// borrowed from the context, filled by one camera, handed back for execution
/// and finally released.
pub trait RenderContext {
    /// Run the visibility query for a camera
    fn cull(&mut self, parameters: &CullingParameters) -> Galaxy3dResult<CullingResults>;

    /// Whether gizmos should be drawn for this camera this frame
    fn should_render_gizmos(&self, camera: &Camera) -> bool;

    /// Get an empty command list labelled for profiling
    fn acquire_command_list(&mut self, label: &str) -> Galaxy3dResult<Box<dyn CommandList>>;

    /// Schedule a recorded command list
    fn execute_command_list(&mut self, commands: &mut dyn CommandList) -> Galaxy3dResult<()>;

    /// Submit all scheduled work
    fn submit(&mut self) -> Galaxy3dResult<()>;

    /// Return a command list to the host
    fn release_command_list(&mut self, commands: Box<dyn CommandList>);
}
