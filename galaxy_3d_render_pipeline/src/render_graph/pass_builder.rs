/// Record-time declaration of what a pass touches.

use slotmap::SlotMap;
use crate::error::{Galaxy3dError, Galaxy3dResult};
use crate::graphics_device::TargetDesc;
use crate::render_graph::{GlobalBinding, TargetKey};

/// Virtual transient target of one frame
#[derive(Debug, Clone)]
pub struct TransientTarget {
    pub name: String,
    pub desc: TargetDesc,
    /// Last pass that declared a write
    pub last_writer: Option<usize>,
    /// First and last pass using the target
    pub first_use: Option<usize>,
    pub last_use: Option<usize>,
    /// Kept until the frame's last pass instead of its own last use
    pub frame_lifetime: bool,
}

/// Declarations collected from one pass's setup
#[derive(Debug, Default)]
pub(crate) struct PassDeclarations {
    pub reads: Vec<TargetKey>,
    pub writes: Vec<TargetKey>,
    pub binding_reads: Vec<GlobalBinding>,
    pub binding_writes: Vec<GlobalBinding>,
}

/// Builder handed to a pass's setup function
pub struct PassBuilder<'s> {
    pass_name: &'s str,
    pass_index: usize,
    targets: &'s mut SlotMap<TargetKey, TransientTarget>,
    declarations: PassDeclarations,
}

impl<'s> PassBuilder<'s> {
    pub(crate) fn new(
        pass_name: &'s str,
        pass_index: usize,
        targets: &'s mut SlotMap<TargetKey, TransientTarget>,
    ) -> Self {
        Self { pass_name, pass_index, targets, declarations: PassDeclarations::default() }
    }

    /// Declare a new transient target written by this pass.
    ///
    /// Its slot is released right after the last pass that uses it.
    pub fn create_target(&mut self, name: &str, desc: TargetDesc) -> TargetKey {
        self.insert_target(name, desc, false)
    }

    /// Declare a target written by this pass that stays backed until the
    /// frame's last pass has run
    pub fn create_frame_target(&mut self, name: &str, desc: TargetDesc) -> TargetKey {
        self.insert_target(name, desc, true)
    }

    /// Declare a read; the target must have been written by an earlier pass
    /// or by this one
    pub fn read(&mut self, key: TargetKey) -> Galaxy3dResult<TargetKey> {
        let target = self.targets.get(key).ok_or_else(|| self.unknown_target())?;
        if target.last_writer.is_none() {
            return Err(Galaxy3dError::InvalidResource(format!(
                "pass '{}' reads target '{}' before any pass wrote it",
                self.pass_name, target.name
            )));
        }
        if !self.declarations.reads.contains(&key) {
            self.declarations.reads.push(key);
        }
        Ok(key)
    }

    /// Declare a write to an existing target
    pub fn write(&mut self, key: TargetKey) -> Galaxy3dResult<TargetKey> {
        if !self.targets.contains_key(key) {
            return Err(self.unknown_target());
        }
        self.mark_write(key);
        Ok(key)
    }

    /// Declare that the pass samples a global binding
    pub fn read_binding(&mut self, binding: GlobalBinding) {
        if !self.declarations.binding_reads.contains(&binding) {
            self.declarations.binding_reads.push(binding);
        }
    }

    /// Declare that the pass binds a global binding
    pub fn write_binding(&mut self, binding: GlobalBinding) {
        if !self.declarations.binding_writes.contains(&binding) {
            self.declarations.binding_writes.push(binding);
        }
    }

    /// Descriptor of a declared target
    pub fn desc(&self, key: TargetKey) -> Option<&TargetDesc> {
        self.targets.get(key).map(|target| &target.desc)
    }

    pub(crate) fn finish(self) -> PassDeclarations {
        self.declarations
    }

    fn insert_target(&mut self, name: &str, desc: TargetDesc, frame_lifetime: bool) -> TargetKey {
        let key = self.targets.insert(TransientTarget {
            name: name.to_string(),
            desc,
            last_writer: None,
            first_use: None,
            last_use: None,
            frame_lifetime,
        });
        self.mark_write(key);
        key
    }

    fn mark_write(&mut self, key: TargetKey) {
        if let Some(target) = self.targets.get_mut(key) {
            target.last_writer = Some(self.pass_index);
        }
        if !self.declarations.writes.contains(&key) {
            self.declarations.writes.push(key);
        }
    }

    fn unknown_target(&self) -> Galaxy3dError {
        Galaxy3dError::InvalidResource(format!("pass '{}' uses an unknown target", self.pass_name))
    }
}
