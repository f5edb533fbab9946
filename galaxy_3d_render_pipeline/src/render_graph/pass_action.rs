/// Pass action trait and its closure-based implementation.
///
/// An action is what a pass does when the graph executes it.

use crate::error::Galaxy3dResult;
use crate::render_graph::PassContext;

/// Work executed by a recorded pass
pub trait PassAction {
    /// Record commands through the pass context
    fn execute(&mut self, ctx: &mut PassContext<'_>) -> Galaxy3dResult<()>;
}

/// Closure-based action
///
/// May borrow renderer state (lighting, post FX stack) for the duration of
/// the recording scope.
pub struct CustomAction<'a> {
    callback: Box<dyn FnMut(&mut PassContext<'_>) -> Galaxy3dResult<()> + 'a>,
}

impl<'a> CustomAction<'a> {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(&mut PassContext<'_>) -> Galaxy3dResult<()> + 'a,
    {
        Self { callback: Box::new(callback) }
    }
}

impl PassAction for CustomAction<'_> {
    fn execute(&mut self, ctx: &mut PassContext<'_>) -> Galaxy3dResult<()> {
        (self.callback)(ctx)
    }
}
