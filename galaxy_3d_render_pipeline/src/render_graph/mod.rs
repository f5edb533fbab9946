//! Render graph: linear per-camera pass scheduling.
//!
//! Passes are recorded in a fixed order with declared target and binding
//! accesses, then executed in that same order against one command list.
//! There is no reordering and no aliasing across passes beyond slot reuse.

mod editor_capabilities;
mod global_binding;
mod target_pool;
mod pass_action;
mod pass_builder;
mod pass_context;
mod pass_graph;

pub use editor_capabilities::EditorCapabilities;
pub use global_binding::{GlobalBinding, BindingValue, BindingTable};
pub use target_pool::TargetPool;
pub use pass_action::{PassAction, CustomAction};
pub use pass_builder::{PassBuilder, TransientTarget};
pub use pass_context::PassContext;
pub use pass_graph::{PassGraph, RecordingScope, TargetKey, FrameReport};
