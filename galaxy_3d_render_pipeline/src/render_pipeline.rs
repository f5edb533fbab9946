/// RenderPipeline: renders a list of cameras with shared pipeline settings.

use crate::error::Galaxy3dResult;
use crate::camera::Camera;
use crate::camera_renderer::{CameraRenderer, RenderOutcome};
use crate::graphics_device::{GraphicsDevice, RenderContext};
use crate::lighting::Lighting;
use crate::post_fx::PostFxStack;
use crate::settings::PipelineSettings;
use crate::engine_trace;

pub struct RenderPipeline {
    settings: PipelineSettings,
    camera_renderer: CameraRenderer,
}

impl RenderPipeline {
    pub fn new(
        device: &mut dyn GraphicsDevice,
        settings: PipelineSettings,
        lighting: Box<dyn Lighting>,
        post_fx_stack: Box<dyn PostFxStack>,
    ) -> Galaxy3dResult<Self> {
        let camera_renderer = CameraRenderer::new(
            device,
            &settings.camera_renderer_shader,
            settings.editor,
            lighting,
            post_fx_stack,
        )?;
        Ok(Self { settings, camera_renderer })
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    pub fn camera_renderer(&self) -> &CameraRenderer {
        &self.camera_renderer
    }

    /// Render every camera in order, one outcome per camera.
    ///
    /// Cameras are independent; the first failing camera aborts the call.
    pub fn render(
        &mut self,
        context: &mut dyn RenderContext,
        cameras: &[Camera],
    ) -> Galaxy3dResult<Vec<RenderOutcome>> {
        let mut outcomes = Vec::with_capacity(cameras.len());
        for camera in cameras {
            engine_trace!("galaxy3d::RenderPipeline", "Rendering camera '{}'", camera.name());
            outcomes.push(self.camera_renderer.render(
                context,
                camera,
                &self.settings.camera_buffer,
                self.settings.use_lights_per_object,
                &self.settings.shadows,
                self.settings.post_fx_settings.as_ref(),
                self.settings.color_lut_resolution.size(),
            )?);
        }
        Ok(outcomes)
    }

    /// Destroy the pipeline's GPU resources
    pub fn destroy(self, device: &mut dyn GraphicsDevice) -> Galaxy3dResult<()> {
        self.camera_renderer.destroy(device)
    }
}

#[cfg(test)]
#[path = "render_pipeline_tests.rs"]
mod tests;
