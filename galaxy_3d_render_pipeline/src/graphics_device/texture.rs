/// Texture formats, filters, descriptors and the handles the host hands back.

/// Texture formats used by the camera renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    /// LDR color (default render-texture format)
    R8G8B8A8_UNORM,
    /// HDR color
    R16G16B16A16_SFLOAT,
    /// 32-bit depth
    D32_FLOAT,
    /// Shadow map depth
    SHADOW_MAP,
}

impl TextureFormat {
    /// Color format for an intermediate buffer
    pub fn color(use_hdr: bool) -> Self {
        if use_hdr {
            TextureFormat::R16G16B16A16_SFLOAT
        } else {
            TextureFormat::R8G8B8A8_UNORM
        }
    }

    /// Whether this is a depth format
    pub fn is_depth(&self) -> bool {
        matches!(self, TextureFormat::D32_FLOAT | TextureFormat::SHADOW_MAP)
    }
}

/// Sampling filter of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// Nearest texel
    Point,
    /// Linear within one mip level
    Bilinear,
}

/// Descriptor of a transient render target (not yet allocated)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetDesc {
    pub width: u32,
    pub height: u32,
    /// Depth buffer bits (0 for color targets)
    pub depth_bits: u32,
    pub format: TextureFormat,
    pub filter: FilterMode,
}

impl TargetDesc {
    /// Color target
    pub fn color(width: u32, height: u32, format: TextureFormat) -> Self {
        Self { width, height, depth_bits: 0, format, filter: FilterMode::Bilinear }
    }

    /// 32-bit depth target sampled with point filtering
    pub fn depth(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            depth_bits: 32,
            format: TextureFormat::D32_FLOAT,
            filter: FilterMode::Point,
        }
    }

    /// Shadow atlas of `size`×`size`
    pub fn shadow_atlas(size: u32) -> Self {
        Self {
            width: size,
            height: size,
            depth_bits: 32,
            format: TextureFormat::SHADOW_MAP,
            filter: FilterMode::Bilinear,
        }
    }
}

/// Descriptor of a persistent texture created through the graphics device
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDesc {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    /// Value every texel is filled with
    pub fill: [f32; 4],
}

/// Handle to a texture owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Handle to a material owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub u64);

/// Anything a command can read from or render into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureRef {
    /// The camera's own output (back buffer or render texture)
    CameraTarget,
    /// A pooled temporary target, by slot
    Temporary(u32),
    /// A persistent texture owned by the host
    Texture(TextureHandle),
}
