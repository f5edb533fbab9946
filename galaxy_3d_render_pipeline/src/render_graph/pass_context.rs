/// Execution context handed to a pass action.

use glam::Vec4;
use rustc_hash::FxHashMap;
use crate::error::{Galaxy3dError, Galaxy3dResult};
use crate::graphics_device::{CommandList, TextureRef};
use crate::render_graph::{BindingTable, BindingValue, GlobalBinding, TargetKey};

/// What one pass sees while executing
///
/// Targets resolve only if the pass declared them; global bindings go through
/// the context so the graph knows what is bound where.
pub struct PassContext<'c> {
    pass_name: &'c str,
    commands: &'c mut dyn CommandList,
    granted: &'c FxHashMap<TargetKey, TextureRef>,
    bindings: &'c mut BindingTable,
}

impl<'c> PassContext<'c> {
    pub(crate) fn new(
        pass_name: &'c str,
        commands: &'c mut dyn CommandList,
        granted: &'c FxHashMap<TargetKey, TextureRef>,
        bindings: &'c mut BindingTable,
    ) -> Self {
        Self { pass_name, commands, granted, bindings }
    }

    /// Name of the executing pass
    pub fn pass_name(&self) -> &str {
        self.pass_name
    }

    /// Command recorder
    pub fn commands(&mut self) -> &mut dyn CommandList {
        &mut *self.commands
    }

    /// Resolve a declared target to the texture backing it this frame
    pub fn texture(&self, key: TargetKey) -> Galaxy3dResult<TextureRef> {
        self.granted.get(&key).copied().ok_or_else(|| {
            Galaxy3dError::InvalidResource(format!(
                "pass '{}' accesses a target it did not declare",
                self.pass_name
            ))
        })
    }

    /// Current value of a global binding
    pub fn binding(&self, binding: GlobalBinding) -> Option<BindingValue> {
        self.bindings.get(binding)
    }

    pub fn set_global_texture(&mut self, binding: GlobalBinding, texture: TextureRef) -> Galaxy3dResult<()> {
        self.commands.set_global_texture(binding, texture)?;
        self.bindings.set(binding, BindingValue::Texture(texture));
        Ok(())
    }

    pub fn set_global_vector(&mut self, binding: GlobalBinding, value: Vec4) -> Galaxy3dResult<()> {
        self.commands.set_global_vector(binding, value)?;
        self.bindings.set(binding, BindingValue::Vector(value));
        Ok(())
    }

    pub fn set_global_float(&mut self, binding: GlobalBinding, value: f32) -> Galaxy3dResult<()> {
        self.commands.set_global_float(binding, value)?;
        self.bindings.set(binding, BindingValue::Float(value));
        Ok(())
    }
}
