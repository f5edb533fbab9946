/// Copy attachments pass: sampleable copies of the color and depth
/// attachments for the transparent geometry.

use crate::error::Galaxy3dResult;
use crate::copier::CameraRendererCopier;
use crate::frame_config::FrameConfig;
use crate::graphics_device::{AttachmentBinding, TargetDesc, TextureFormat};
use crate::passes::{required, CameraTextures};
use crate::render_graph::{GlobalBinding, PassContext, RecordingScope};

/// Copy the requested attachments and bind the copies.
///
/// When copying had to draw, the attachments are rebound with Load/Store so
/// the following passes render where they expect to.
pub fn copy_attachments(
    ctx: &mut PassContext<'_>,
    copier: &CameraRendererCopier,
    textures: &CameraTextures,
) -> Galaxy3dResult<()> {
    if let (Some(attachment), Some(copy)) = (textures.color_attachment, textures.color_copy) {
        let (from, to) = (ctx.texture(attachment)?, ctx.texture(copy)?);
        copier.copy(ctx, from, to, false)?;
        ctx.set_global_texture(GlobalBinding::ColorTexture, to)?;
    }
    if let (Some(attachment), Some(copy)) = (textures.depth_attachment, textures.depth_copy) {
        let (from, to) = (ctx.texture(attachment)?, ctx.texture(copy)?);
        copier.copy(ctx, from, to, true)?;
        ctx.set_global_texture(GlobalBinding::DepthTexture, to)?;
    }

    if copier.requires_render_target_reset_after_copy() {
        if let Some((color, depth)) = textures.attachments() {
            let (color, depth) = (ctx.texture(color)?, ctx.texture(depth)?);
            ctx.commands().set_render_target(
                AttachmentBinding::load_store(color),
                Some(AttachmentBinding::load_store(depth)),
            )?;
        }
    }
    Ok(())
}

pub struct CopyAttachmentsPass;

impl CopyAttachmentsPass {
    pub const NAME: &'static str = "Copy Attachments";

    /// Record the copy pass when the frame uses a color or depth texture.
    ///
    /// Returns `textures` extended with the copies.
    pub fn record(
        scope: &mut RecordingScope<'_>,
        config: &FrameConfig,
        copier: CameraRendererCopier,
        textures: CameraTextures,
    ) -> Galaxy3dResult<CameraTextures> {
        if !config.use_color_texture && !config.use_depth_texture {
            return Ok(textures);
        }

        let (use_color, use_depth) = (config.use_color_texture, config.use_depth_texture);
        let size = config.buffer_size;
        let format = TextureFormat::color(config.allow_hdr());

        scope.record(
            Self::NAME,
            |builder| {
                let color = required(textures.color_attachment, "color attachment")?;
                let depth = required(textures.depth_attachment, "depth attachment")?;
                let mut textures = textures;

                if use_color {
                    builder.read(color)?;
                    textures.color_copy = Some(builder.create_target(
                        "Color Copy",
                        TargetDesc::color(size.width, size.height, format),
                    ));
                    builder.write_binding(GlobalBinding::ColorTexture);
                }
                if use_depth {
                    builder.read(depth)?;
                    textures.depth_copy =
                        Some(builder.create_target("Depth Copy", TargetDesc::depth(size.width, size.height)));
                    builder.write_binding(GlobalBinding::DepthTexture);
                }
                if copier.requires_render_target_reset_after_copy() {
                    builder.write(color)?;
                    builder.write(depth)?;
                    builder.write_binding(GlobalBinding::SourceTexture);
                }
                Ok(textures)
            },
            move |textures, ctx| copy_attachments(ctx, &copier, textures),
        )
    }
}

#[cfg(test)]
#[path = "copy_attachments_pass_tests.rs"]
mod tests;
