/// Mock host for unit tests (no GPU required)
///
/// Every command recorded by a [`MockCommandList`] lands in a shared
/// [`MockCommandState`] as a readable line, next to the state a real backend
/// would track: bound targets, live temporaries and global bindings.

use std::sync::{Arc, Mutex};
use glam::Vec4;
use rustc_hash::FxHashMap;
use crate::error::{Galaxy3dError, Galaxy3dResult};
use crate::camera::Camera;
use crate::culling::{
    CullingParameters, CullingResults, FrustumVisibility, RendererId, VisibleRenderer,
};
use crate::frame_config::BufferSize;
use crate::geometry::RendererList;
use crate::graphics_device::{
    AttachmentBinding, CommandList, GizmoSubset, GraphicsDevice, LoadAction, MaterialHandle,
    RenderContext, StoreAction, TargetDesc, TextureDesc, TextureHandle, TextureRef, Viewport,
};
use crate::lighting::{Lighting, LightingInput};
use crate::post_fx::{PostFxFrame, PostFxStack};
use crate::render_graph::{BindingValue, GlobalBinding, PassContext};

// ============================================================================
// Mock Command List
// ============================================================================

/// Everything recorded into mock command lists
#[derive(Debug, Default)]
pub struct MockCommandState {
    pub commands: Vec<String>,
    pub color_target: Option<AttachmentBinding>,
    pub depth_target: Option<AttachmentBinding>,
    pub viewport: Option<Viewport>,
    pub live_slots: Vec<u32>,
    pub temporaries_acquired: usize,
    pub globals: FxHashMap<GlobalBinding, BindingValue>,
    pub debug_depth: i32,
    pub drawn_lists: Vec<RendererList>,
    /// Command name that fails when recorded
    pub fail_on: Option<String>,
}

impl MockCommandState {
    /// Recorded lines starting with `prefix`
    pub fn lines_starting_with(&self, prefix: &str) -> Vec<String> {
        self.commands.iter().filter(|line| line.starts_with(prefix)).cloned().collect()
    }

    /// Names of the debug groups opened, in order
    pub fn debug_groups(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|line| line.strip_prefix("push_debug_group "))
            .map(str::to_string)
            .collect()
    }

    pub fn global(&self, binding: GlobalBinding) -> Option<BindingValue> {
        self.globals.get(&binding).copied()
    }
}

pub type SharedCommandState = Arc<Mutex<MockCommandState>>;

fn describe(binding: &AttachmentBinding) -> String {
    format!("{:?}/{:?}/{:?}", binding.target, binding.load, binding.store)
}

pub struct MockCommandList {
    state: SharedCommandState,
}

impl MockCommandList {
    pub fn new(state: SharedCommandState) -> Self {
        Self { state }
    }

    fn record<F>(&self, command: &str, line: String, apply: F) -> Galaxy3dResult<()>
    where
        F: FnOnce(&mut MockCommandState),
    {
        let mut state = self.state.lock().unwrap();
        if state.fail_on.as_deref() == Some(command) {
            return Err(Galaxy3dError::BackendError(format!("mock failure in {}", command)));
        }
        state.commands.push(line);
        apply(&mut state);
        Ok(())
    }
}

impl CommandList for MockCommandList {
    fn push_debug_group(&mut self, name: &str) -> Galaxy3dResult<()> {
        self.record("push_debug_group", format!("push_debug_group {}", name), |state| {
            state.debug_depth += 1;
        })
    }

    fn pop_debug_group(&mut self) -> Galaxy3dResult<()> {
        self.record("pop_debug_group", "pop_debug_group".to_string(), |state| {
            state.debug_depth -= 1;
        })
    }

    fn get_temporary_target(&mut self, slot: u32, desc: &TargetDesc) -> Galaxy3dResult<()> {
        let line = format!(
            "get_temporary_target {} {}x{} {:?}",
            slot, desc.width, desc.height, desc.format
        );
        self.record("get_temporary_target", line, |state| {
            state.live_slots.push(slot);
            state.temporaries_acquired += 1;
        })
    }

    fn release_temporary_target(&mut self, slot: u32) -> Galaxy3dResult<()> {
        self.record("release_temporary_target", format!("release_temporary_target {}", slot), |state| {
            state.live_slots.retain(|live| *live != slot);
        })
    }

    fn set_render_target(
        &mut self,
        color: AttachmentBinding,
        depth: Option<AttachmentBinding>,
    ) -> Galaxy3dResult<()> {
        let line = format!(
            "set_render_target {} depth={}",
            describe(&color),
            depth.as_ref().map(describe).unwrap_or_else(|| "none".to_string())
        );
        self.record("set_render_target", line, |state| {
            state.color_target = Some(color);
            state.depth_target = depth;
        })
    }

    fn clear_render_target(&mut self, clear_depth: bool, clear_color: bool, color: Vec4) -> Galaxy3dResult<()> {
        let line = format!(
            "clear_render_target depth={} color={} {:?}",
            clear_depth, clear_color, color.to_array()
        );
        self.record("clear_render_target", line, |_| {})
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Galaxy3dResult<()> {
        let line = format!(
            "set_viewport {},{} {}x{}",
            viewport.x, viewport.y, viewport.width, viewport.height
        );
        self.record("set_viewport", line, |state| state.viewport = Some(viewport))
    }

    fn copy_texture(&mut self, source: TextureRef, destination: TextureRef) -> Galaxy3dResult<()> {
        self.record("copy_texture", format!("copy_texture {:?} -> {:?}", source, destination), |_| {})
    }

    fn set_global_texture(&mut self, binding: GlobalBinding, texture: TextureRef) -> Galaxy3dResult<()> {
        self.record("set_global_texture", format!("set_global_texture {:?} {:?}", binding, texture), |state| {
            state.globals.insert(binding, BindingValue::Texture(texture));
        })
    }

    fn set_global_vector(&mut self, binding: GlobalBinding, value: Vec4) -> Galaxy3dResult<()> {
        self.record("set_global_vector", format!("set_global_vector {:?} {:?}", binding, value.to_array()), |state| {
            state.globals.insert(binding, BindingValue::Vector(value));
        })
    }

    fn set_global_float(&mut self, binding: GlobalBinding, value: f32) -> Galaxy3dResult<()> {
        self.record("set_global_float", format!("set_global_float {:?} {}", binding, value), |state| {
            state.globals.insert(binding, BindingValue::Float(value));
        })
    }

    fn draw_procedural(&mut self, material: MaterialHandle, shader_pass: u32, vertex_count: u32) -> Galaxy3dResult<()> {
        let line = format!(
            "draw_procedural material={} pass={} vertices={}",
            material.0, shader_pass, vertex_count
        );
        self.record("draw_procedural", line, |_| {})
    }

    fn draw_renderers(&mut self, list: &RendererList) -> Galaxy3dResult<()> {
        let line = format!("draw_renderers {}", list.len());
        let list = list.clone();
        self.record("draw_renderers", line, move |state| state.drawn_lists.push(list))
    }

    fn draw_skybox(&mut self, camera: &Camera) -> Galaxy3dResult<()> {
        self.record("draw_skybox", format!("draw_skybox {}", camera.name()), |_| {})
    }

    fn draw_gizmos(&mut self, _camera: &Camera, subset: GizmoSubset) -> Galaxy3dResult<()> {
        self.record("draw_gizmos", format!("draw_gizmos {:?}", subset), |_| {})
    }
}

// ============================================================================
// Mock Render Context
// ============================================================================

pub struct MockRenderContext {
    pub state: SharedCommandState,
    /// Returned by `cull` when no visibility set is attached
    pub culling: CullingResults,
    pub visibility: Option<FrustumVisibility>,
    pub render_gizmos: bool,
    pub cull_requests: Vec<CullingParameters>,
    pub labels: Vec<String>,
    pub acquired: usize,
    pub executed: usize,
    pub submitted: usize,
    pub released: usize,
}

impl MockRenderContext {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockCommandState::default())),
            culling: CullingResults::default(),
            visibility: None,
            render_gizmos: false,
            cull_requests: Vec::new(),
            labels: Vec::new(),
            acquired: 0,
            executed: 0,
            submitted: 0,
            released: 0,
        }
    }

    pub fn with_culling(culling: CullingResults) -> Self {
        Self { culling, ..Self::new() }
    }

    /// Make the next command named `command` fail
    pub fn fail_on(&self, command: &str) {
        self.state.lock().unwrap().fail_on = Some(command.to_string());
    }

    pub fn commands(&self) -> Vec<String> {
        self.state.lock().unwrap().commands.clone()
    }
}

impl RenderContext for MockRenderContext {
    fn cull(&mut self, parameters: &CullingParameters) -> Galaxy3dResult<CullingResults> {
        self.cull_requests.push(*parameters);
        Ok(match &self.visibility {
            Some(visibility) => visibility.query(parameters),
            None => CullingResults {
                shadow_distance: parameters.shadow_distance,
                ..self.culling.clone()
            },
        })
    }

    fn should_render_gizmos(&self, _camera: &Camera) -> bool {
        self.render_gizmos
    }

    fn acquire_command_list(&mut self, label: &str) -> Galaxy3dResult<Box<dyn CommandList>> {
        self.acquired += 1;
        self.labels.push(label.to_string());
        Ok(Box::new(MockCommandList::new(Arc::clone(&self.state))))
    }

    fn execute_command_list(&mut self, _commands: &mut dyn CommandList) -> Galaxy3dResult<()> {
        self.executed += 1;
        Ok(())
    }

    fn submit(&mut self) -> Galaxy3dResult<()> {
        self.submitted += 1;
        Ok(())
    }

    fn release_command_list(&mut self, _commands: Box<dyn CommandList>) {
        self.released += 1;
    }
}

// ============================================================================
// Mock Graphics Device
// ============================================================================

pub struct MockGraphicsDevice {
    pub copy_texture_supported: bool,
    pub materials: Vec<(MaterialHandle, String)>,
    pub textures: Vec<(TextureHandle, TextureDesc)>,
    /// Shader name whose material creation fails
    pub fail_shader: Option<String>,
    next_handle: u64,
}

impl MockGraphicsDevice {
    pub fn new(copy_texture_supported: bool) -> Self {
        Self {
            copy_texture_supported,
            materials: Vec::new(),
            textures: Vec::new(),
            fail_shader: None,
            next_handle: 1,
        }
    }

    fn next(&mut self) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn supports_copy_texture(&self) -> bool {
        self.copy_texture_supported
    }

    fn create_material(&mut self, shader: &str) -> Galaxy3dResult<MaterialHandle> {
        if self.fail_shader.as_deref() == Some(shader) {
            return Err(Galaxy3dError::BackendError(format!("shader '{}' not found", shader)));
        }
        let handle = MaterialHandle(self.next());
        self.materials.push((handle, shader.to_string()));
        Ok(handle)
    }

    fn destroy_material(&mut self, material: MaterialHandle) -> Galaxy3dResult<()> {
        let before = self.materials.len();
        self.materials.retain(|(handle, _)| *handle != material);
        if self.materials.len() == before {
            return Err(Galaxy3dError::InvalidResource(format!("unknown material {}", material.0)));
        }
        Ok(())
    }

    fn create_texture(&mut self, desc: &TextureDesc) -> Galaxy3dResult<TextureHandle> {
        let handle = TextureHandle(self.next());
        self.textures.push((handle, desc.clone()));
        Ok(handle)
    }

    fn destroy_texture(&mut self, texture: TextureHandle) -> Galaxy3dResult<()> {
        let before = self.textures.len();
        self.textures.retain(|(handle, _)| *handle != texture);
        if self.textures.len() == before {
            return Err(Galaxy3dError::InvalidResource(format!("unknown texture {}", texture.0)));
        }
        Ok(())
    }
}

// ============================================================================
// Mock Lighting
// ============================================================================

/// One call of [`MockLighting::setup`]
#[derive(Debug, Clone, PartialEq)]
pub struct LightingCall {
    pub light_mask: u32,
    pub use_lights_per_object: bool,
    pub shadow_distance: f32,
    pub directional_atlas: TextureRef,
    pub other_atlas: TextureRef,
}

#[derive(Default)]
pub struct MockLighting {
    pub calls: Arc<Mutex<Vec<LightingCall>>>,
    pub fail: bool,
}

impl Lighting for MockLighting {
    fn setup(&mut self, ctx: &mut PassContext<'_>, input: &LightingInput<'_>) -> Galaxy3dResult<()> {
        if self.fail {
            return Err(Galaxy3dError::BackendError("shadow rendering failed".to_string()));
        }
        let directional_atlas = ctx.texture(input.shadow_textures.directional_atlas)?;
        let other_atlas = ctx.texture(input.shadow_textures.other_atlas)?;
        self.calls.lock().unwrap().push(LightingCall {
            light_mask: input.light_mask,
            use_lights_per_object: input.use_lights_per_object,
            shadow_distance: input.culling.shadow_distance,
            directional_atlas,
            other_atlas,
        });
        Ok(())
    }
}

// ============================================================================
// Mock Post FX Stack
// ============================================================================

/// One call of [`MockPostFxStack::render`]
#[derive(Debug, Clone, PartialEq)]
pub struct PostFxCall {
    pub source: TextureRef,
    pub buffer_size: BufferSize,
    pub color_lut_resolution: u32,
    pub keep_alpha: bool,
    pub fxaa_enabled: bool,
    /// Global bindings as the stack saw them
    pub color_attachment: Option<BindingValue>,
    pub depth_attachment: Option<BindingValue>,
    pub buffer_size_binding: Option<BindingValue>,
}

#[derive(Default)]
pub struct MockPostFxStack {
    pub calls: Arc<Mutex<Vec<PostFxCall>>>,
}

impl PostFxStack for MockPostFxStack {
    fn render(&mut self, ctx: &mut PassContext<'_>, frame: &PostFxFrame<'_>) -> Galaxy3dResult<()> {
        self.calls.lock().unwrap().push(PostFxCall {
            source: frame.source,
            buffer_size: frame.buffer_size,
            color_lut_resolution: frame.color_lut_resolution,
            keep_alpha: frame.keep_alpha,
            fxaa_enabled: frame.buffer_settings.fxaa.enabled,
            color_attachment: ctx.binding(GlobalBinding::ColorAttachment),
            depth_attachment: ctx.binding(GlobalBinding::DepthAttachment),
            buffer_size_binding: ctx.binding(GlobalBinding::BufferSize),
        });
        ctx.set_global_texture(GlobalBinding::SourceTexture, frame.source)?;
        let commands = ctx.commands();
        commands.set_render_target(
            AttachmentBinding::new(TextureRef::CameraTarget, LoadAction::DontCare, StoreAction::Store),
            None,
        )?;
        commands.draw_procedural(MaterialHandle(0), 0, 3)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Visible renderer with full rendering layers and material 0
pub fn visible_renderer(id: u32, shader_tag: &str, render_queue: u32, view_depth: f32) -> VisibleRenderer {
    VisibleRenderer {
        id: RendererId(id),
        shader_tag: shader_tag.to_string(),
        render_queue,
        material_id: 0,
        view_depth,
        rendering_layer_mask: u32::MAX,
    }
}
