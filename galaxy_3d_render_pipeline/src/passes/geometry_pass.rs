/// Geometry passes: opaque and transparent renderers.

use crate::error::Galaxy3dResult;
use crate::camera::Camera;
use crate::culling::CullingResults;
use crate::geometry::{PerObjectData, RenderQueueRange, RendererList, RendererListDesc, SortingCriteria};
use crate::lighting::ShadowTextures;
use crate::passes::CameraTextures;
use crate::render_graph::{GlobalBinding, RecordingScope};

/// Light modes drawn by the geometry passes
pub const SHADER_TAGS: [&str; 2] = ["SRPDefaultUnlit", "CustomLit"];

pub struct GeometryPass;

impl GeometryPass {
    pub const OPAQUE_NAME: &'static str = "Geometry Opaque";
    pub const TRANSPARENT_NAME: &'static str = "Geometry Transparent";

    /// Renderer list drawn by one geometry pass
    pub fn renderer_list(
        camera: &Camera,
        culling: &CullingResults,
        use_lights_per_object: bool,
        rendering_layer_mask: u32,
        opaque: bool,
    ) -> RendererList {
        let mut per_object_data = PerObjectData::standard();
        if use_lights_per_object {
            per_object_data |= PerObjectData::lights_per_object();
        }
        let (queue_range, sorting) = if opaque {
            (RenderQueueRange::OPAQUE, SortingCriteria::CommonOpaque)
        } else {
            (RenderQueueRange::TRANSPARENT, SortingCriteria::CommonTransparent)
        };

        RendererList::build(
            RendererListDesc {
                shader_tags: &SHADER_TAGS,
                queue_range,
                sorting,
                per_object_data,
                rendering_layer_mask,
                override_material: None,
            },
            culling,
            camera.far_clip(),
        )
    }

    /// Record the opaque or transparent geometry pass.
    ///
    /// Both sample the shadow atlases. The transparent pass also samples the
    /// attachment copies made before it.
    #[allow(clippy::too_many_arguments)]
    pub fn record(
        scope: &mut RecordingScope<'_>,
        camera: &Camera,
        culling: &CullingResults,
        use_lights_per_object: bool,
        rendering_layer_mask: u32,
        opaque: bool,
        textures: &CameraTextures,
        shadows: &ShadowTextures,
    ) -> Galaxy3dResult<()> {
        let list = Self::renderer_list(camera, culling, use_lights_per_object, rendering_layer_mask, opaque);
        let name = if opaque { Self::OPAQUE_NAME } else { Self::TRANSPARENT_NAME };

        scope.record(
            name,
            |builder| {
                builder.read(shadows.directional_atlas)?;
                builder.read(shadows.other_atlas)?;
                if let Some((color, depth)) = textures.attachments() {
                    builder.write(color)?;
                    builder.write(depth)?;
                }
                if !opaque {
                    for copy in [textures.color_copy, textures.depth_copy].into_iter().flatten() {
                        builder.read(copy)?;
                    }
                    builder.read_binding(GlobalBinding::ColorTexture);
                    builder.read_binding(GlobalBinding::DepthTexture);
                }
                Ok(())
            },
            move |_, ctx| ctx.commands().draw_renderers(&list),
        )
    }
}

#[cfg(test)]
#[path = "geometry_pass_tests.rs"]
mod tests;
