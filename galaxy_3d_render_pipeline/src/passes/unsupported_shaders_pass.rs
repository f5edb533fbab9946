/// Unsupported shaders overlay (editor only): renderers using legacy light
/// modes are drawn with the error material so they stand out.

use crate::error::Galaxy3dResult;
use crate::camera::Camera;
use crate::culling::CullingResults;
use crate::geometry::{PerObjectData, RenderQueueRange, RendererList, RendererListDesc, SortingCriteria};
use crate::graphics_device::MaterialHandle;
use crate::passes::CameraTextures;
use crate::render_graph::RecordingScope;
use crate::engine_warn;

/// Light modes of the built-in pipeline this renderer does not support
pub const LEGACY_SHADER_TAGS: [&str; 6] = [
    "Always",
    "ForwardBase",
    "PrepassBase",
    "Vertex",
    "VertexLMRGBM",
    "VertexLM",
];

pub struct UnsupportedShadersPass;

impl UnsupportedShadersPass {
    pub const NAME: &'static str = "Unsupported Shaders";

    /// Record the overlay when the capability is on and something uses a
    /// legacy light mode
    pub fn record(
        scope: &mut RecordingScope<'_>,
        camera: &Camera,
        culling: &CullingResults,
        error_material: MaterialHandle,
        textures: &CameraTextures,
    ) -> Galaxy3dResult<bool> {
        if !scope.editor_capabilities().overlay_enabled() {
            return Ok(false);
        }

        let list = RendererList::build(
            RendererListDesc {
                shader_tags: &LEGACY_SHADER_TAGS,
                queue_range: RenderQueueRange::ALL,
                sorting: SortingCriteria::CommonOpaque,
                per_object_data: PerObjectData::empty(),
                rendering_layer_mask: u32::MAX,
                override_material: Some(error_material),
            },
            culling,
            camera.far_clip(),
        );
        if list.is_empty() {
            return Ok(false);
        }

        engine_warn!(
            "galaxy3d::UnsupportedShaders",
            "Camera '{}': {} renderer(s) use unsupported shaders",
            camera.name(),
            list.len()
        );

        scope.record(
            Self::NAME,
            |builder| {
                if let Some((color, depth)) = textures.attachments() {
                    builder.write(color)?;
                    builder.write(depth)?;
                }
                Ok(())
            },
            move |_, ctx| ctx.commands().draw_renderers(&list),
        )?;
        Ok(true)
    }
}
