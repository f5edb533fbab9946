/// CommandList trait - the host command recorder the passes write into.

use glam::Vec4;
use crate::error::Galaxy3dResult;
use crate::camera::Camera;
use crate::geometry::RendererList;
use crate::graphics_device::{MaterialHandle, TargetDesc, TextureRef};
use crate::render_graph::GlobalBinding;

/// What happens to existing target contents when it gets bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadAction {
    /// Preserve existing contents
    Load,
    /// Contents are undefined
    DontCare,
}

/// What happens to target contents when rendering into it ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Store,
    DontCare,
}

/// A target bound for rendering with its load/store actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentBinding {
    pub target: TextureRef,
    pub load: LoadAction,
    pub store: StoreAction,
}

impl AttachmentBinding {
    pub fn new(target: TextureRef, load: LoadAction, store: StoreAction) -> Self {
        Self { target, load, store }
    }

    /// Load/Store binding
    pub fn load_store(target: TextureRef) -> Self {
        Self::new(target, LoadAction::Load, StoreAction::Store)
    }
}

/// Pixel-space viewport rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Gizmo drawing phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoSubset {
    /// Drawn before image effects
    PreImageEffects,
    /// Drawn after image effects
    PostImageEffects,
}

/// Command recorder
///
/// Commands are recorded in call order and executed by the host when the
/// render context receives the list. Every method may fail; the pass graph
/// treats a failure as fatal to the frame.
pub trait CommandList {
    /// Open a named profiling/debug scope
    fn push_debug_group(&mut self, name: &str) -> Galaxy3dResult<()>;

    /// Close the innermost debug scope
    fn pop_debug_group(&mut self) -> Galaxy3dResult<()>;

    /// Bind backing memory for the temporary target `slot`
    fn get_temporary_target(&mut self, slot: u32, desc: &TargetDesc) -> Galaxy3dResult<()>;

    /// Release the backing memory of `slot`
    fn release_temporary_target(&mut self, slot: u32) -> Galaxy3dResult<()>;

    /// Bind color and depth targets for rendering
    fn set_render_target(
        &mut self,
        color: AttachmentBinding,
        depth: Option<AttachmentBinding>,
    ) -> Galaxy3dResult<()>;

    /// Clear the bound targets
    fn clear_render_target(
        &mut self,
        clear_depth: bool,
        clear_color: bool,
        color: Vec4,
    ) -> Galaxy3dResult<()>;

    /// Restrict rendering to a pixel rectangle
    fn set_viewport(&mut self, viewport: Viewport) -> Galaxy3dResult<()>;

    /// Copy one texture into another of identical size and format
    fn copy_texture(&mut self, source: TextureRef, destination: TextureRef) -> Galaxy3dResult<()>;

    /// Bind a texture to a global slot
    fn set_global_texture(&mut self, binding: GlobalBinding, texture: TextureRef) -> Galaxy3dResult<()>;

    /// Bind a vector to a global slot
    fn set_global_vector(&mut self, binding: GlobalBinding, value: Vec4) -> Galaxy3dResult<()>;

    /// Bind a float to a global slot
    fn set_global_float(&mut self, binding: GlobalBinding, value: f32) -> Galaxy3dResult<()>;

    /// Draw a procedural full-screen triangle with one shader pass of `material`
    fn draw_procedural(
        &mut self,
        material: MaterialHandle,
        shader_pass: u32,
        vertex_count: u32,
    ) -> Galaxy3dResult<()>;

    /// Draw a filtered, sorted list of visible renderers
    fn draw_renderers(&mut self, list: &RendererList) -> Galaxy3dResult<()>;

    /// Draw the camera's skybox
    fn draw_skybox(&mut self, camera: &Camera) -> Galaxy3dResult<()>;

    /// Draw editor gizmos of one phase
    fn draw_gizmos(&mut self, camera: &Camera, subset: GizmoSubset) -> Galaxy3dResult<()>;
}
