/// Post FX pass: hands the color attachment to the post-processing stack,
/// which writes the camera target.

use crate::error::{Galaxy3dError, Galaxy3dResult};
use crate::camera::Camera;
use crate::frame_config::FrameConfig;
use crate::passes::{required, CameraTextures};
use crate::post_fx::{PostFxFrame, PostFxStack};
use crate::render_graph::{GlobalBinding, RecordingScope};

pub struct PostFxPass;

impl PostFxPass {
    pub const NAME: &'static str = "Post FX";

    pub fn record<'a>(
        scope: &mut RecordingScope<'a>,
        post_fx_stack: &'a mut dyn PostFxStack,
        camera: &'a Camera,
        config: &'a FrameConfig,
        color_lut_resolution: u32,
        textures: &CameraTextures,
    ) -> Galaxy3dResult<()> {
        let settings = config.post_fx_settings.as_ref().ok_or_else(|| {
            Galaxy3dError::InvalidResource("post FX requested without post FX settings".to_string())
        })?;

        scope.record(
            Self::NAME,
            |builder| {
                let color = builder.read(required(textures.color_attachment, "color attachment")?)?;
                builder.read_binding(GlobalBinding::BufferSize);
                builder.read_binding(GlobalBinding::ColorAttachment);
                builder.write_binding(GlobalBinding::SourceTexture);
                Ok(color)
            },
            move |color, ctx| {
                let frame = PostFxFrame {
                    source: ctx.texture(*color)?,
                    camera,
                    buffer_settings: &config.buffer_settings,
                    buffer_size: config.buffer_size,
                    final_blend_mode: config.final_blend_mode,
                    settings,
                    color_lut_resolution,
                    keep_alpha: config.keep_alpha,
                };
                post_fx_stack.render(ctx, &frame)
            },
        )?;
        Ok(())
    }
}
