//! Host boundary: the graphics device, the per-frame render context and the
//! command recorder. The pipeline only talks to the GPU through these traits.

mod texture;
mod command_list;
mod graphics_device;
mod render_context;

#[cfg(test)]
pub mod mock_graphics_device;

pub use texture::{
    TextureFormat, FilterMode, TargetDesc, TextureDesc,
    TextureHandle, MaterialHandle, TextureRef,
};
pub use command_list::{
    CommandList, LoadAction, StoreAction, AttachmentBinding, Viewport, GizmoSubset,
};
pub use graphics_device::GraphicsDevice;
pub use render_context::RenderContext;
