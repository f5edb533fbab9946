/// Attachment copies and the final composite to the camera target.
///
/// Copies go through the host's texture copy when the platform has one and
/// fall back to drawing a full-screen triangle with the camera renderer
/// material. Shader pass 0 copies color, pass 1 copies depth.

use crate::error::Galaxy3dResult;
use crate::camera::Camera;
use crate::graphics_device::{
    AttachmentBinding, LoadAction, MaterialHandle, StoreAction, TextureRef, Viewport,
};
use crate::render_graph::{GlobalBinding, PassContext};
use crate::settings::{BlendFactor, FinalBlendMode};

/// Shader pass copying color
pub const COPY_COLOR_PASS: u32 = 0;
/// Shader pass copying depth
pub const COPY_DEPTH_PASS: u32 = 1;

/// Full-screen triangle
const FULL_SCREEN_VERTICES: u32 = 3;

/// Copy helper bound to one camera for one frame
#[derive(Debug, Clone, Copy)]
pub struct CameraRendererCopier {
    material: MaterialHandle,
    copy_texture_supported: bool,
    final_blend_mode: FinalBlendMode,
    full_view_rect: bool,
    pixel_rect: Viewport,
}

impl CameraRendererCopier {
    pub fn new(
        material: MaterialHandle,
        copy_texture_supported: bool,
        camera: &Camera,
        final_blend_mode: FinalBlendMode,
    ) -> Self {
        Self {
            material,
            copy_texture_supported,
            final_blend_mode,
            full_view_rect: camera.has_full_view_rect(),
            pixel_rect: camera.pixel_rect(),
        }
    }

    pub fn copy_texture_supported(&self) -> bool {
        self.copy_texture_supported
    }

    /// Whether copying leaves a different render target bound
    pub fn requires_render_target_reset_after_copy(&self) -> bool {
        !self.copy_texture_supported
    }

    /// Copy `from` into `to`
    pub fn copy(
        &self,
        ctx: &mut PassContext<'_>,
        from: TextureRef,
        to: TextureRef,
        is_depth: bool,
    ) -> Galaxy3dResult<()> {
        if self.copy_texture_supported {
            ctx.commands().copy_texture(from, to)
        } else {
            self.copy_by_drawing(ctx, from, to, is_depth)
        }
    }

    /// Copy by drawing into `to`, which stays bound afterwards
    pub fn copy_by_drawing(
        &self,
        ctx: &mut PassContext<'_>,
        from: TextureRef,
        to: TextureRef,
        is_depth: bool,
    ) -> Galaxy3dResult<()> {
        ctx.set_global_texture(GlobalBinding::SourceTexture, from)?;
        let commands = ctx.commands();
        commands.set_render_target(
            AttachmentBinding::new(to, LoadAction::DontCare, StoreAction::Store),
            None,
        )?;
        let shader_pass = if is_depth { COPY_DEPTH_PASS } else { COPY_COLOR_PASS };
        commands.draw_procedural(self.material, shader_pass, FULL_SCREEN_VERTICES)
    }

    /// Load action used when compositing onto the camera target.
    ///
    /// Previous contents only matter when they get blended with or when the
    /// camera covers part of the target.
    pub fn final_load_action(&self) -> LoadAction {
        if self.final_blend_mode.destination == BlendFactor::Zero && self.full_view_rect {
            LoadAction::DontCare
        } else {
            LoadAction::Load
        }
    }

    /// Composite `from` onto the camera target with the final blend mode,
    /// restricted to the camera's pixel rect.
    ///
    /// The blend slots are reset to opaque afterwards.
    pub fn copy_to_camera_target(&self, ctx: &mut PassContext<'_>, from: TextureRef) -> Galaxy3dResult<()> {
        ctx.set_global_float(GlobalBinding::SrcBlend, self.final_blend_mode.source.as_float())?;
        ctx.set_global_float(GlobalBinding::DstBlend, self.final_blend_mode.destination.as_float())?;
        ctx.set_global_texture(GlobalBinding::SourceTexture, from)?;

        let commands = ctx.commands();
        commands.set_render_target(
            AttachmentBinding::new(TextureRef::CameraTarget, self.final_load_action(), StoreAction::Store),
            None,
        )?;
        commands.set_viewport(self.pixel_rect)?;
        commands.draw_procedural(self.material, COPY_COLOR_PASS, FULL_SCREEN_VERTICES)?;

        ctx.set_global_float(GlobalBinding::SrcBlend, BlendFactor::One.as_float())?;
        ctx.set_global_float(GlobalBinding::DstBlend, BlendFactor::Zero.as_float())
    }
}

#[cfg(test)]
#[path = "copier_tests.rs"]
mod tests;
