//! Settings consumed by the camera renderer.
//!
//! Plain structs with defaults; loading them from assets is up to the caller.

mod buffer_settings;
mod camera_settings;
mod shadow_settings;
mod post_fx_settings;
mod pipeline_settings;

pub use buffer_settings::{CameraBufferSettings, FxaaSettings, FxaaQuality, BicubicRescalingMode};
pub use camera_settings::{CameraSettings, RenderScaleMode, FinalBlendMode, BlendFactor};
pub use shadow_settings::{ShadowSettings, DirectionalShadows, OtherShadows, ShadowFilter};
pub use post_fx_settings::{PostFxSettings, PostFxProfile};
pub use pipeline_settings::{PipelineSettings, ColorLutResolution};
