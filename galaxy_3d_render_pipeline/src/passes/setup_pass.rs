/// Setup pass: intermediate attachments, clearing and the baseline global
/// bindings every later pass may sample.

use glam::Vec4;
use crate::error::Galaxy3dResult;
use crate::camera::{Camera, ClearFlags};
use crate::frame_config::FrameConfig;
use crate::graphics_device::{
    AttachmentBinding, LoadAction, StoreAction, TargetDesc, TextureFormat, TextureRef,
};
use crate::passes::CameraTextures;
use crate::render_graph::{GlobalBinding, RecordingScope};
use crate::engine_trace;

/// Clear flags actually applied; an intermediate buffer always clears color
/// and depth.
pub fn effective_clear_flags(flags: ClearFlags, use_intermediate_buffer: bool) -> ClearFlags {
    if use_intermediate_buffer {
        ClearFlags::Color
    } else {
        flags
    }
}

pub struct SetupPass;

impl SetupPass {
    pub const NAME: &'static str = "Setup";

    /// Record the setup pass.
    ///
    /// `missing_texture` is bound to the color and depth copy slots until the
    /// copy pass replaces it.
    pub fn record(
        scope: &mut RecordingScope<'_>,
        camera: &Camera,
        config: &FrameConfig,
        missing_texture: TextureRef,
    ) -> Galaxy3dResult<CameraTextures> {
        let use_intermediate = config.use_intermediate_buffer();
        let size = config.buffer_size;
        let format = TextureFormat::color(config.allow_hdr());
        let clear_flags = effective_clear_flags(camera.clear_flags(), use_intermediate);
        let clear_value = if clear_flags == ClearFlags::Color {
            camera.background_color()
        } else {
            Vec4::ZERO
        };

        scope.record(
            Self::NAME,
            |builder| {
                builder.write_binding(GlobalBinding::BufferSize);
                builder.write_binding(GlobalBinding::ColorTexture);
                builder.write_binding(GlobalBinding::DepthTexture);
                if !use_intermediate {
                    return Ok(CameraTextures::default());
                }

                builder.write_binding(GlobalBinding::ColorAttachment);
                builder.write_binding(GlobalBinding::DepthAttachment);
                Ok(CameraTextures {
                    color_attachment: Some(builder.create_frame_target(
                        "Color Attachment",
                        TargetDesc::color(size.width, size.height, format),
                    )),
                    depth_attachment: Some(builder.create_frame_target(
                        "Depth Attachment",
                        TargetDesc::depth(size.width, size.height),
                    )),
                    ..Default::default()
                })
            },
            move |textures, ctx| {
                match textures.attachments() {
                    Some((color, depth)) => {
                        let color = ctx.texture(color)?;
                        let depth = ctx.texture(depth)?;
                        ctx.commands().set_render_target(
                            AttachmentBinding::new(color, LoadAction::DontCare, StoreAction::Store),
                            Some(AttachmentBinding::new(depth, LoadAction::DontCare, StoreAction::Store)),
                        )?;
                        ctx.set_global_texture(GlobalBinding::ColorAttachment, color)?;
                        ctx.set_global_texture(GlobalBinding::DepthAttachment, depth)?;
                    }
                    None => {
                        ctx.commands().set_render_target(
                            AttachmentBinding::load_store(TextureRef::CameraTarget),
                            None,
                        )?;
                    }
                }

                engine_trace!(
                    "galaxy3d::SetupPass",
                    "Clearing with {:?} into a {}x{} buffer",
                    clear_flags, size.width, size.height
                );
                ctx.commands().clear_render_target(
                    clear_flags <= ClearFlags::Depth,
                    clear_flags <= ClearFlags::Color,
                    clear_value,
                )?;
                ctx.set_global_texture(GlobalBinding::ColorTexture, missing_texture)?;
                ctx.set_global_texture(GlobalBinding::DepthTexture, missing_texture)?;
                ctx.set_global_vector(GlobalBinding::BufferSize, size.as_vector())
            },
        )
    }
}

#[cfg(test)]
#[path = "setup_pass_tests.rs"]
mod tests;
