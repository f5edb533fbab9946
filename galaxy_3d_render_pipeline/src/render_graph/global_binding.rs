/// Global resource bindings shared between passes.
///
/// Passes never hand resources to each other directly; they bind them to one
/// of these slots and later passes sample the slot.

use glam::Vec4;
use rustc_hash::FxHashMap;
use crate::graphics_device::TextureRef;

/// Closed set of global binding slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalBinding {
    /// `(1/w, 1/h, w, h)` of the camera buffers
    BufferSize,
    ColorAttachment,
    DepthAttachment,
    /// Sampleable copy of the color attachment
    ColorTexture,
    /// Sampleable copy of the depth attachment
    DepthTexture,
    /// Input of copy and blit draws
    SourceTexture,
    SrcBlend,
    DstBlend,
}

impl GlobalBinding {
    pub const ALL: [GlobalBinding; 8] = [
        GlobalBinding::BufferSize,
        GlobalBinding::ColorAttachment,
        GlobalBinding::DepthAttachment,
        GlobalBinding::ColorTexture,
        GlobalBinding::DepthTexture,
        GlobalBinding::SourceTexture,
        GlobalBinding::SrcBlend,
        GlobalBinding::DstBlend,
    ];

    /// Shader property name of the slot
    pub fn shader_name(&self) -> &'static str {
        match self {
            GlobalBinding::BufferSize => "_CameraBufferSize",
            GlobalBinding::ColorAttachment => "_CameraColorAttachment",
            GlobalBinding::DepthAttachment => "_CameraDepthAttachment",
            GlobalBinding::ColorTexture => "_CameraColorTexture",
            GlobalBinding::DepthTexture => "_CameraDepthTexture",
            GlobalBinding::SourceTexture => "_SourceTexture",
            GlobalBinding::SrcBlend => "_CameraSrcBlend",
            GlobalBinding::DstBlend => "_CameraDstBlend",
        }
    }
}

/// Value bound to a slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BindingValue {
    Texture(TextureRef),
    Vector(Vec4),
    Float(f32),
}

/// What is currently bound to each slot during one frame
#[derive(Debug, Default)]
pub struct BindingTable {
    values: FxHashMap<GlobalBinding, BindingValue>,
}

impl BindingTable {
    pub fn get(&self, binding: GlobalBinding) -> Option<BindingValue> {
        self.values.get(&binding).copied()
    }

    pub fn set(&mut self, binding: GlobalBinding, value: BindingValue) {
        self.values.insert(binding, value);
    }

    /// Slots currently holding `texture`, in `GlobalBinding::ALL` order
    pub fn bound_to(&self, texture: TextureRef) -> Vec<GlobalBinding> {
        GlobalBinding::ALL
            .into_iter()
            .filter(|binding| self.get(*binding) == Some(BindingValue::Texture(texture)))
            .collect()
    }
}
