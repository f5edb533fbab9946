/// PassGraph: linear pass scheduler for one camera at a time.
///
/// A frame is recorded into a [`RecordingScope`]: each pass declares the
/// targets and global bindings it touches in a setup function and supplies an
/// execute closure. `end_frame` runs every pass in recording order against a
/// single command list and hands that list to the render context.
///
/// Producer-before-consumer order comes from recording order; the graph
/// validates declarations but never reorders passes. Transient targets get a
/// pool slot right before their first use. Short-lived targets give it back
/// right after their last use, frame targets after the last pass; nothing
/// outlives the scope, even when a pass fails.

use slotmap::{new_key_type, SlotMap};
use rustc_hash::{FxHashMap, FxHashSet};
use crate::error::{Galaxy3dError, Galaxy3dResult};
use crate::graphics_device::{CommandList, RenderContext, TargetDesc, TextureRef};
use crate::render_graph::{
    BindingTable, BindingValue, CustomAction, EditorCapabilities, GlobalBinding, PassAction,
    PassBuilder, PassContext, TargetPool, TransientTarget,
};
use crate::{engine_error, engine_trace};

new_key_type! {
    /// Key of a transient target declared during one frame
    pub struct TargetKey;
}

/// A recorded pass
struct PassNode<'a> {
    name: String,
    reads: Vec<TargetKey>,
    writes: Vec<TargetKey>,
    action: Box<dyn PassAction + 'a>,
}

/// Summary of an executed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    /// Execution label of the frame
    pub label: String,
    /// Executed pass names, in order
    pub passes: Vec<String>,
    /// Number of transient targets backed during the frame
    pub transient_targets: usize,
}

/// Persistent scheduler state
pub struct PassGraph {
    pool: TargetPool,
    editor: EditorCapabilities,
    fallback_texture: TextureRef,
}

impl PassGraph {
    /// Create a scheduler.
    ///
    /// `fallback_texture` replaces texture bindings whose target was released.
    pub fn new(editor: EditorCapabilities, fallback_texture: TextureRef) -> Self {
        Self { pool: TargetPool::new(), editor, fallback_texture }
    }

    pub fn editor_capabilities(&self) -> EditorCapabilities {
        self.editor
    }

    pub fn set_editor_capabilities(&mut self, editor: EditorCapabilities) {
        self.editor = editor;
    }

    /// Slot pool shared by all frames
    pub fn pool(&self) -> &TargetPool {
        &self.pool
    }

    /// Start recording a frame labelled `label`
    pub fn begin_frame(&mut self, label: &str) -> RecordingScope<'_> {
        RecordingScope {
            label: label.to_string(),
            pool: &mut self.pool,
            editor: self.editor,
            fallback_texture: self.fallback_texture,
            targets: SlotMap::with_key(),
            passes: Vec::new(),
            written_bindings: FxHashSet::default(),
        }
    }
}

/// One frame being recorded
pub struct RecordingScope<'a> {
    label: String,
    pool: &'a mut TargetPool,
    editor: EditorCapabilities,
    fallback_texture: TextureRef,
    targets: SlotMap<TargetKey, TransientTarget>,
    passes: Vec<PassNode<'a>>,
    written_bindings: FxHashSet<GlobalBinding>,
}

impl<'a> RecordingScope<'a> {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn editor_capabilities(&self) -> EditorCapabilities {
        self.editor
    }

    /// Names of the recorded passes, in order
    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|pass| pass.name.as_str()).collect()
    }

    /// Declared target, if `key` belongs to this frame
    pub fn target(&self, key: TargetKey) -> Option<&TransientTarget> {
        self.targets.get(key)
    }

    /// Record a pass.
    ///
    /// `setup` declares resources and returns data that is both returned to
    /// the caller and handed to every call of `execute`. A failing setup, or a
    /// read of a binding that neither an earlier pass nor this one writes,
    /// aborts recording.
    pub fn record<D, S, E>(&mut self, name: &str, setup: S, mut execute: E) -> Galaxy3dResult<D>
    where
        D: Clone + 'a,
        S: FnOnce(&mut PassBuilder<'_>) -> Galaxy3dResult<D>,
        E: FnMut(&D, &mut PassContext<'_>) -> Galaxy3dResult<()> + 'a,
    {
        let index = self.passes.len();
        let mut builder = PassBuilder::new(name, index, &mut self.targets);
        let data = setup(&mut builder).map_err(|e| {
            engine_error!("galaxy3d::PassGraph", "Setup of pass '{}' failed: {}", name, e);
            Galaxy3dError::pass_failed(name, e)
        })?;
        let declarations = builder.finish();

        for binding in &declarations.binding_reads {
            if !self.written_bindings.contains(binding)
                && !declarations.binding_writes.contains(binding)
            {
                let error = Galaxy3dError::InvalidResource(format!(
                    "pass '{}' reads {:?} but no earlier pass binds it",
                    name, binding
                ));
                engine_error!("galaxy3d::PassGraph", "{}", error);
                return Err(Galaxy3dError::pass_failed(name, error));
            }
        }
        self.written_bindings.extend(declarations.binding_writes.iter().copied());

        for key in declarations.reads.iter().chain(&declarations.writes) {
            if let Some(target) = self.targets.get_mut(*key) {
                target.first_use.get_or_insert(index);
                target.last_use = Some(index);
            }
        }

        let captured = data.clone();
        self.passes.push(PassNode {
            name: name.to_string(),
            reads: declarations.reads,
            writes: declarations.writes,
            action: Box::new(CustomAction::new(move |ctx| execute(&captured, ctx))),
        });
        Ok(data)
    }

    /// Execute every recorded pass and submit the frame.
    ///
    /// The command list comes from `context` and goes back to it whether the
    /// frame succeeds or not; only a successful frame is executed and submitted.
    pub fn end_frame(self, context: &mut dyn RenderContext) -> Galaxy3dResult<FrameReport> {
        let mut commands = context.acquire_command_list(&self.label)?;
        let executed = self.execute(&mut *commands);

        let result = executed.and_then(|report| {
            context.execute_command_list(&mut *commands)?;
            context.submit()?;
            Ok(report)
        });
        context.release_command_list(commands);
        result
    }

    fn execute(self, commands: &mut dyn CommandList) -> Galaxy3dResult<FrameReport> {
        let RecordingScope { label, pool, fallback_texture, targets, mut passes, .. } = self;

        // Lifetimes: which targets start and end at each pass
        let mut acquisitions: Vec<Vec<TargetKey>> = vec![Vec::new(); passes.len()];
        let mut releases: Vec<Vec<TargetKey>> = vec![Vec::new(); passes.len()];
        let final_pass = passes.len().saturating_sub(1);
        for (key, target) in &targets {
            if let (Some(first), Some(last)) = (target.first_use, target.last_use) {
                acquisitions[first].push(key);
                releases[if target.frame_lifetime { final_pass } else { last }].push(key);
            }
        }

        let mut frame = FrameExecution {
            pool,
            commands,
            fallback_texture,
            slots: FxHashMap::default(),
            bindings: BindingTable::default(),
            backed: 0,
        };

        let outcome = frame.run(&label, &targets, &mut passes, &acquisitions, &releases);
        if outcome.is_err() {
            frame.release_remaining();
        }
        let backed = frame.backed;
        outcome.map(|_| FrameReport {
            label,
            passes: passes.into_iter().map(|pass| pass.name).collect(),
            transient_targets: backed,
        })
    }
}

/// Mutable state while a frame executes
struct FrameExecution<'f> {
    pool: &'f mut TargetPool,
    commands: &'f mut dyn CommandList,
    fallback_texture: TextureRef,
    slots: FxHashMap<TargetKey, u32>,
    bindings: BindingTable,
    backed: usize,
}

impl FrameExecution<'_> {
    fn run(
        &mut self,
        label: &str,
        targets: &SlotMap<TargetKey, TransientTarget>,
        passes: &mut [PassNode<'_>],
        acquisitions: &[Vec<TargetKey>],
        releases: &[Vec<TargetKey>],
    ) -> Galaxy3dResult<()> {
        self.commands.push_debug_group(label)?;
        for (index, pass) in passes.iter_mut().enumerate() {
            engine_trace!("galaxy3d::PassGraph", "[{}] executing pass '{}'", label, pass.name);
            self.run_pass(targets, pass, &acquisitions[index], &releases[index])
                .map_err(|e| {
                    engine_error!("galaxy3d::PassGraph", "[{}] pass '{}' failed: {}", label, pass.name, e);
                    match e {
                        Galaxy3dError::PassFailed { .. } => e,
                        other => Galaxy3dError::pass_failed(&pass.name, other),
                    }
                })?;
        }
        self.commands.pop_debug_group()
    }

    fn run_pass(
        &mut self,
        targets: &SlotMap<TargetKey, TransientTarget>,
        pass: &mut PassNode<'_>,
        acquire: &[TargetKey],
        release: &[TargetKey],
    ) -> Galaxy3dResult<()> {
        for key in acquire {
            let desc: TargetDesc = targets[*key].desc;
            let slot = self.pool.acquire(desc);
            self.slots.insert(*key, slot);
            self.backed += 1;
            self.commands.get_temporary_target(slot, &desc)?;
        }

        let mut granted: FxHashMap<TargetKey, TextureRef> = FxHashMap::default();
        for key in pass.reads.iter().chain(&pass.writes) {
            let slot = self.slots.get(key).copied().ok_or_else(|| {
                Galaxy3dError::InvalidResource(format!("target '{}' has no backing slot", targets[*key].name))
            })?;
            granted.insert(*key, TextureRef::Temporary(slot));
        }

        self.commands.push_debug_group(&pass.name)?;
        {
            let mut ctx = PassContext::new(&pass.name, &mut *self.commands, &granted, &mut self.bindings);
            pass.action.execute(&mut ctx)?;
        }
        self.commands.pop_debug_group()?;

        for key in release {
            if let Some(slot) = self.slots.remove(key) {
                self.release_slot(slot)?;
            }
        }
        Ok(())
    }

    /// Give a slot back and point bindings that referenced it at the fallback
    fn release_slot(&mut self, slot: u32) -> Galaxy3dResult<()> {
        self.commands.release_temporary_target(slot)?;
        self.pool.release(slot)?;
        for binding in self.bindings.bound_to(TextureRef::Temporary(slot)) {
            self.commands.set_global_texture(binding, self.fallback_texture)?;
            self.bindings.set(binding, BindingValue::Texture(self.fallback_texture));
        }
        Ok(())
    }

    /// Frame already failed: give back every slot still held
    fn release_remaining(&mut self) {
        let mut slots: Vec<u32> = self.slots.drain().map(|(_, slot)| slot).collect();
        slots.sort_unstable();
        for slot in slots {
            let _ = self.commands.release_temporary_target(slot);
            let _ = self.pool.release(slot);
        }
    }
}

#[cfg(test)]
#[path = "pass_graph_tests.rs"]
mod tests;
