/*!
# Galaxy 3D Render Pipeline

Per-camera render orchestration for the Galaxy 3D engine.

For each camera the pipeline resolves an effective frame configuration, culls,
records a fixed sequence of passes into a linear pass graph and executes it
against a host command list. The GPU is only reached through host traits, so
the crate runs the same against a real backend or a recording mock.

## Architecture

- **CameraRenderer**: Per-camera orchestrator (settings, culling, pass recording)
- **RenderPipeline**: Renders a list of cameras with shared settings
- **PassGraph**: Linear pass scheduler with pooled transient targets
- **GraphicsDevice / RenderContext / CommandList**: Host boundary traits
- **Lighting / PostFxStack**: Subsystems invoked by their passes
*/

// Internal modules
mod error;
mod engine;
pub mod log;
mod utils;
pub mod camera;
pub mod settings;
pub mod frame_config;
pub mod graphics_device;
pub mod culling;
pub mod geometry;
pub mod render_graph;
pub mod lighting;
pub mod post_fx;
pub mod copier;
pub mod passes;
pub mod camera_renderer;
pub mod render_pipeline;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Galaxy3dError, Galaxy3dResult};

    // Engine singleton
    pub use crate::engine::Engine;

    // Orchestration
    pub use crate::camera_renderer::{CameraRenderer, RenderOutcome, ERROR_SHADER};
    pub use crate::render_pipeline::RenderPipeline;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Settings sub-module
    pub mod settings {
        pub use crate::settings::*;
        pub use crate::frame_config::{FrameConfig, BufferSize};
    }

    // Host boundary sub-module
    pub mod render {
        pub use crate::graphics_device::*;
        pub use crate::lighting::{Lighting, LightingInput, ShadowTextures};
        pub use crate::post_fx::{PostFxStack, PostFxFrame};
    }

    // Culling and geometry sub-module
    pub mod scene {
        pub use crate::culling::*;
        pub use crate::geometry::*;
    }

    // Pass graph sub-module
    pub mod graph {
        pub use crate::render_graph::*;
        pub use crate::passes::*;
        pub use crate::copier::CameraRendererCopier;
    }
}

// Re-export math library at crate root
pub use glam;
