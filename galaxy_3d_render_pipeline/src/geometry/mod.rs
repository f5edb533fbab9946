//! Geometry: renderer lists built from culling results.
//!
//! A renderer list selects visible renderers by shader tag, render queue and
//! rendering layer, and orders them for drawing.

mod renderer_list;

pub use renderer_list::{
    RendererList, RendererListDesc, RenderQueueRange, SortingCriteria, PerObjectData,
    DrawKey,
};
