/// Final pass: composites the color attachment onto the camera target when
/// no post FX runs.

use crate::error::Galaxy3dResult;
use crate::copier::CameraRendererCopier;
use crate::passes::{required, CameraTextures};
use crate::render_graph::{GlobalBinding, RecordingScope};

pub struct FinalPass;

impl FinalPass {
    pub const NAME: &'static str = "Final";

    pub fn record(
        scope: &mut RecordingScope<'_>,
        copier: CameraRendererCopier,
        textures: &CameraTextures,
    ) -> Galaxy3dResult<()> {
        scope.record(
            Self::NAME,
            |builder| {
                let color = builder.read(required(textures.color_attachment, "color attachment")?)?;
                builder.write_binding(GlobalBinding::SrcBlend);
                builder.write_binding(GlobalBinding::DstBlend);
                builder.write_binding(GlobalBinding::SourceTexture);
                Ok(color)
            },
            move |color, ctx| {
                let source = ctx.texture(*color)?;
                copier.copy_to_camera_target(ctx, source)
            },
        )?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "final_pass_tests.rs"]
mod tests;
