/// CameraRenderer: renders one camera per call.
///
/// Resolves the frame configuration, culls, records the fixed pass sequence
/// into the pass graph and executes it:
///
/// Lighting → Setup → Geometry Opaque → [Skybox] → [Copy Attachments] →
/// Geometry Transparent → [Unsupported Shaders] → [Post FX | Final] → [Gizmos]
///
/// The renderer owns the copy material, the error material and the 1×1
/// "Missing" texture for its whole lifetime; everything else lives for one
/// call.

use std::sync::Arc;
use crate::error::{Galaxy3dError, Galaxy3dResult};
use crate::camera::Camera;
use crate::copier::CameraRendererCopier;
use crate::culling::Culler;
use crate::frame_config::FrameConfig;
use crate::graphics_device::{
    GraphicsDevice, MaterialHandle, RenderContext, TextureDesc, TextureFormat, TextureHandle,
    TextureRef,
};
use crate::lighting::Lighting;
use crate::passes::{
    CopyAttachmentsPass, FinalPass, GeometryPass, GizmosPass, LightingPass, PostFxPass,
    SetupPass, SkyboxPass, UnsupportedShadersPass,
};
use crate::post_fx::PostFxStack;
use crate::render_graph::{EditorCapabilities, FrameReport, PassGraph};
use crate::settings::{CameraBufferSettings, PostFxSettings, ShadowSettings};
use crate::{engine_debug, engine_info, engine_warn};

/// Shader of the material drawing unsupported renderers
pub const ERROR_SHADER: &str = "Hidden/InternalErrorShader";

/// Result of one `render` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The camera could not be culled; nothing was recorded or submitted
    Skipped,
    /// The frame was executed and submitted
    Rendered(FrameReport),
}

pub struct CameraRenderer {
    material: MaterialHandle,
    error_material: MaterialHandle,
    missing_texture: TextureHandle,
    copy_texture_supported: bool,
    pass_graph: PassGraph,
    lighting: Box<dyn Lighting>,
    post_fx_stack: Box<dyn PostFxStack>,
}

impl CameraRenderer {
    /// Create the renderer and its fallback resources.
    ///
    /// Resources created before a failure are destroyed again.
    pub fn new(
        device: &mut dyn GraphicsDevice,
        shader: &str,
        editor: EditorCapabilities,
        lighting: Box<dyn Lighting>,
        post_fx_stack: Box<dyn PostFxStack>,
    ) -> Galaxy3dResult<Self> {
        let material = device.create_material(shader).map_err(|e| {
            Galaxy3dError::InitializationFailed(format!("camera renderer material '{}': {}", shader, e))
        })?;

        let error_material = match device.create_material(ERROR_SHADER) {
            Ok(material) => material,
            Err(e) => {
                let _ = device.destroy_material(material);
                return Err(Galaxy3dError::InitializationFailed(format!("error material: {}", e)));
            }
        };

        let missing = TextureDesc {
            name: "Missing".to_string(),
            width: 1,
            height: 1,
            format: TextureFormat::R8G8B8A8_UNORM,
            fill: [0.5, 0.5, 0.5, 1.0],
        };
        let missing_texture = match device.create_texture(&missing) {
            Ok(texture) => texture,
            Err(e) => {
                let _ = device.destroy_material(error_material);
                let _ = device.destroy_material(material);
                return Err(Galaxy3dError::InitializationFailed(format!("missing texture: {}", e)));
            }
        };

        let copy_texture_supported = device.supports_copy_texture();
        engine_info!(
            "galaxy3d::CameraRenderer",
            "Camera renderer created (shader '{}', texture copy {})",
            shader,
            if copy_texture_supported { "supported" } else { "emulated" }
        );

        Ok(Self {
            material,
            error_material,
            missing_texture,
            copy_texture_supported,
            pass_graph: PassGraph::new(editor, TextureRef::Texture(missing_texture)),
            lighting,
            post_fx_stack,
        })
    }

    pub fn copy_texture_supported(&self) -> bool {
        self.copy_texture_supported
    }

    pub fn editor_capabilities(&self) -> EditorCapabilities {
        self.pass_graph.editor_capabilities()
    }

    pub fn set_editor_capabilities(&mut self, editor: EditorCapabilities) {
        self.pass_graph.set_editor_capabilities(editor);
    }

    pub fn pass_graph(&self) -> &PassGraph {
        &self.pass_graph
    }

    /// Render one camera.
    ///
    /// Returns [`RenderOutcome::Skipped`] when the camera cannot be culled.
    /// A failing pass aborts the frame; its command list is released without
    /// being submitted.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        context: &mut dyn RenderContext,
        camera: &Camera,
        buffer_settings: &CameraBufferSettings,
        use_lights_per_object: bool,
        shadow_settings: &ShadowSettings,
        post_fx_settings: Option<&Arc<dyn PostFxSettings>>,
        color_lut_resolution: u32,
    ) -> Galaxy3dResult<RenderOutcome> {
        let config = FrameConfig::resolve(buffer_settings, camera, camera.settings(), post_fx_settings);

        let Some(culling) = Culler::cull(context, camera, shadow_settings.max_distance)? else {
            engine_warn!(
                "galaxy3d::CameraRenderer",
                "Skipping camera '{}': no valid culling parameters",
                camera.name()
            );
            return Ok(RenderOutcome::Skipped);
        };

        let use_intermediate = config.use_intermediate_buffer();
        engine_debug!(
            "galaxy3d::CameraRenderer",
            "Camera '{}': {}x{} buffer, intermediate {}, scaled {}, post FX {}",
            camera.name(),
            config.buffer_size.width,
            config.buffer_size.height,
            use_intermediate,
            config.use_scaled_rendering,
            config.has_active_post_fx
        );

        let copier = CameraRendererCopier::new(
            self.material,
            self.copy_texture_supported,
            camera,
            config.final_blend_mode,
        );
        let should_render_gizmos = context.should_render_gizmos(camera);
        let missing_texture = TextureRef::Texture(self.missing_texture);
        let error_material = self.error_material;
        let lighting = &mut *self.lighting;
        let post_fx_stack = &mut *self.post_fx_stack;

        let mut scope = self.pass_graph.begin_frame(camera.execution_label());

        let shadows = LightingPass::record(
            &mut scope,
            lighting,
            &culling,
            shadow_settings,
            use_lights_per_object,
            config.light_mask,
        )?;
        let textures = SetupPass::record(&mut scope, camera, &config, missing_texture)?;
        GeometryPass::record(
            &mut scope,
            camera,
            &culling,
            use_lights_per_object,
            config.rendering_layer_mask,
            true,
            &textures,
            &shadows,
        )?;
        SkyboxPass::record(&mut scope, camera, &textures)?;
        let textures = CopyAttachmentsPass::record(&mut scope, &config, copier, textures)?;
        GeometryPass::record(
            &mut scope,
            camera,
            &culling,
            use_lights_per_object,
            config.rendering_layer_mask,
            false,
            &textures,
            &shadows,
        )?;
        UnsupportedShadersPass::record(&mut scope, camera, &culling, error_material, &textures)?;

        if config.has_active_post_fx {
            PostFxPass::record(&mut scope, post_fx_stack, camera, &config, color_lut_resolution, &textures)?;
        } else if use_intermediate {
            FinalPass::record(&mut scope, copier, &textures)?;
        }
        GizmosPass::record(&mut scope, should_render_gizmos, camera, use_intermediate, copier, &textures)?;

        let report = scope.end_frame(context)?;
        Ok(RenderOutcome::Rendered(report))
    }

    /// Destroy the fallback resources
    pub fn destroy(self, device: &mut dyn GraphicsDevice) -> Galaxy3dResult<()> {
        device.destroy_texture(self.missing_texture)?;
        device.destroy_material(self.error_material)?;
        device.destroy_material(self.material)
    }
}

#[cfg(test)]
#[path = "camera_renderer_tests.rs"]
mod tests;
