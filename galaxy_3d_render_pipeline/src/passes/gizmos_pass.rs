/// Gizmos pass (editor only).

use crate::error::Galaxy3dResult;
use crate::camera::Camera;
use crate::copier::CameraRendererCopier;
use crate::graphics_device::{GizmoSubset, TextureRef};
use crate::passes::{required, CameraTextures};
use crate::render_graph::{GlobalBinding, RecordingScope};

pub struct GizmosPass;

impl GizmosPass {
    pub const NAME: &'static str = "Gizmos";

    /// Record gizmo drawing when the capability is on and the host wants
    /// gizmos for this camera.
    ///
    /// With an intermediate buffer the depth attachment is first drawn into
    /// the camera target so gizmos depth-test against the scene.
    pub fn record<'a>(
        scope: &mut RecordingScope<'a>,
        should_render_gizmos: bool,
        camera: &'a Camera,
        use_intermediate_buffer: bool,
        copier: CameraRendererCopier,
        textures: &CameraTextures,
    ) -> Galaxy3dResult<bool> {
        if !scope.editor_capabilities().gizmos_enabled() || !should_render_gizmos {
            return Ok(false);
        }

        scope.record(
            Self::NAME,
            |builder| {
                if !use_intermediate_buffer {
                    return Ok(None);
                }
                let depth = builder.read(required(textures.depth_attachment, "depth attachment")?)?;
                builder.write_binding(GlobalBinding::SourceTexture);
                Ok(Some(depth))
            },
            move |depth, ctx| {
                if let Some(depth) = depth {
                    let source = ctx.texture(*depth)?;
                    copier.copy_by_drawing(ctx, source, TextureRef::CameraTarget, true)?;
                }
                let commands = ctx.commands();
                commands.draw_gizmos(camera, GizmoSubset::PreImageEffects)?;
                commands.draw_gizmos(camera, GizmoSubset::PostImageEffects)
            },
        )?;
        Ok(true)
    }
}
