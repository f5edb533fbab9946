/// Editor-only features the pass graph may record.

use bitflags::bitflags;

bitflags! {
    /// Editor capabilities injected into the pass graph
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EditorCapabilities: u32 {
        /// Gizmo drawing
        const GIZMOS = 1 << 0;
        /// Unsupported-shader error overlay
        const OVERLAY = 1 << 1;
    }
}

impl EditorCapabilities {
    pub fn gizmos_enabled(&self) -> bool {
        self.contains(EditorCapabilities::GIZMOS)
    }

    pub fn overlay_enabled(&self) -> bool {
        self.contains(EditorCapabilities::OVERLAY)
    }
}

impl Default for EditorCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}
