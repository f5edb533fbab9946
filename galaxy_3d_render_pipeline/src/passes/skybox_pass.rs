/// Skybox pass, recorded only for cameras that clear to the skybox.

use crate::error::Galaxy3dResult;
use crate::camera::{Camera, ClearFlags};
use crate::passes::CameraTextures;
use crate::render_graph::RecordingScope;

pub struct SkyboxPass;

impl SkyboxPass {
    pub const NAME: &'static str = "Skybox";

    pub fn record<'a>(
        scope: &mut RecordingScope<'a>,
        camera: &'a Camera,
        textures: &CameraTextures,
    ) -> Galaxy3dResult<bool> {
        if camera.clear_flags() != ClearFlags::Skybox {
            return Ok(false);
        }

        scope.record(
            Self::NAME,
            |builder| {
                if let Some((color, depth)) = textures.attachments() {
                    builder.write(color)?;
                    builder.read(depth)?;
                }
                Ok(())
            },
            move |_, ctx| ctx.commands().draw_skybox(camera),
        )?;
        Ok(true)
    }
}
