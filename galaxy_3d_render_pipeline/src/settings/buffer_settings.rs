/// Global camera buffer settings.

/// Quality preset of the FXAA shader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FxaaQuality {
    Low,
    Medium,
    High,
}

/// Fast approximate anti-aliasing parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FxaaSettings {
    pub enabled: bool,
    /// Minimum contrast to process, in [0.0312, 0.0833]
    pub fixed_threshold: f32,
    /// Contrast relative to local luminance, in [0.063, 0.333]
    pub relative_threshold: f32,
    /// Strength of subpixel blending, in [0, 1]
    pub subpixel_blending: f32,
    pub quality: FxaaQuality,
}

impl Default for FxaaSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            fixed_threshold: 0.0833,
            relative_threshold: 0.166,
            subpixel_blending: 0.75,
            quality: FxaaQuality::Medium,
        }
    }
}

/// When the final rescale uses bicubic filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BicubicRescalingMode {
    Off,
    UpOnly,
    UpAndDown,
}

/// Global settings for camera color/depth buffers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBufferSettings {
    pub allow_hdr: bool,
    pub copy_color: bool,
    pub copy_color_reflection: bool,
    pub copy_depth: bool,
    pub copy_depth_reflection: bool,
    /// Base render scale; clamped to [0.1, 2.0] when applied
    pub render_scale: f32,
    pub bicubic_rescaling: BicubicRescalingMode,
    pub fxaa: FxaaSettings,
}

impl Default for CameraBufferSettings {
    fn default() -> Self {
        Self {
            allow_hdr: true,
            copy_color: false,
            copy_color_reflection: false,
            copy_depth: false,
            copy_depth_reflection: false,
            render_scale: 1.0,
            bicubic_rescaling: BicubicRescalingMode::Off,
            fxaa: FxaaSettings::default(),
        }
    }
}
