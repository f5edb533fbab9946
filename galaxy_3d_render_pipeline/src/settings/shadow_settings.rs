/// Shadow configuration handed to the lighting subsystem.

/// PCF filter size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowFilter {
    Pcf2x2,
    Pcf3x3,
    Pcf5x5,
    Pcf7x7,
}

/// Directional light shadow atlas configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalShadows {
    /// Atlas edge in texels (256..=8192)
    pub atlas_size: u32,
    pub filter: ShadowFilter,
    /// Number of cascades (1..=4)
    pub cascade_count: u32,
    pub cascade_ratios: [f32; 3],
    pub cascade_fade: f32,
}

/// Spot/point light shadow atlas configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OtherShadows {
    pub atlas_size: u32,
    pub filter: ShadowFilter,
}

/// Shadow settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    /// Maximum shadow distance; clamped to the camera far plane when culling
    pub max_distance: f32,
    pub distance_fade: f32,
    pub directional: DirectionalShadows,
    pub other: OtherShadows,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            max_distance: 100.0,
            distance_fade: 0.1,
            directional: DirectionalShadows {
                atlas_size: 1024,
                filter: ShadowFilter::Pcf2x2,
                cascade_count: 4,
                cascade_ratios: [0.1, 0.25, 0.5],
                cascade_fade: 0.1,
            },
            other: OtherShadows {
                atlas_size: 1024,
                filter: ShadowFilter::Pcf2x2,
            },
        }
    }
}
