/// Renderer list construction and draw ordering.
///
/// Sorting uses a packed 64-bit key (queue, quantized depth, material) radix
/// sorted with `rdst`; the renderer's position in the culling results breaks
/// ties so the order is deterministic.

use bitflags::bitflags;
use rdst::{RadixKey, RadixSort};
use crate::culling::{CullingResults, RendererId};
use crate::graphics_device::MaterialHandle;

bitflags! {
    /// Per-object data uploaded with each draw
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PerObjectData: u32 {
        const LIGHT_PROBE = 1 << 0;
        const REFLECTION_PROBES = 1 << 1;
        const LIGHT_PROBE_PROXY_VOLUME = 1 << 2;
        const LIGHTMAPS = 1 << 3;
        const LIGHT_DATA = 1 << 4;
        const LIGHT_INDICES = 1 << 5;
        const OCCLUSION_PROBE = 1 << 6;
        const OCCLUSION_PROBE_PROXY_VOLUME = 1 << 7;
        const SHADOW_MASK = 1 << 8;
    }
}

impl PerObjectData {
    /// Data every lit renderer receives
    pub fn standard() -> Self {
        PerObjectData::REFLECTION_PROBES
            | PerObjectData::LIGHTMAPS
            | PerObjectData::SHADOW_MASK
            | PerObjectData::LIGHT_PROBE
            | PerObjectData::OCCLUSION_PROBE
            | PerObjectData::LIGHT_PROBE_PROXY_VOLUME
            | PerObjectData::OCCLUSION_PROBE_PROXY_VOLUME
    }

    /// Per-object light list
    pub fn lights_per_object() -> Self {
        PerObjectData::LIGHT_DATA | PerObjectData::LIGHT_INDICES
    }
}

/// Inclusive render queue range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderQueueRange {
    pub min: u32,
    pub max: u32,
}

impl RenderQueueRange {
    pub const OPAQUE: RenderQueueRange = RenderQueueRange { min: 0, max: 2500 };
    pub const TRANSPARENT: RenderQueueRange = RenderQueueRange { min: 2501, max: 5000 };
    pub const ALL: RenderQueueRange = RenderQueueRange { min: 0, max: 5000 };

    pub fn contains(&self, queue: u32) -> bool {
        (self.min..=self.max).contains(&queue)
    }
}

/// Draw ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortingCriteria {
    /// Keep culling order
    None,
    /// Queue, then front-to-back, then material
    CommonOpaque,
    /// Queue, then back-to-front, then material
    CommonTransparent,
}

/// What to draw and how
#[derive(Debug, Clone, PartialEq)]
pub struct RendererListDesc {
    pub shader_tags: &'static [&'static str],
    pub queue_range: RenderQueueRange,
    pub sorting: SortingCriteria,
    pub per_object_data: PerObjectData,
    pub rendering_layer_mask: u32,
    /// Material replacing every renderer's own
    pub override_material: Option<MaterialHandle>,
}

/// Sort entry: packed key plus culling index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawKey {
    pub key: u64,
    pub index: u32,
}

impl RadixKey for DrawKey {
    // 4 index bytes (least significant) then 8 key bytes
    const LEVELS: usize = 12;

    #[inline]
    fn get_level(&self, level: usize) -> u8 {
        if level < 4 {
            (self.index >> (level * 8)) as u8
        } else {
            (self.key >> ((level - 4) * 8)) as u8
        }
    }
}

const DEPTH_BITS: u32 = 24;
const MATERIAL_BITS: u32 = 24;
const DEPTH_MAX: u64 = (1 << DEPTH_BITS) - 1;
const MATERIAL_MASK: u64 = (1 << MATERIAL_BITS) - 1;

impl DrawKey {
    /// Pack queue, depth and material for `sorting`.
    ///
    /// Depth is normalized by `far_clip` and quantized to 24 bits; transparent
    /// sorting inverts it so farther renderers come first.
    pub fn pack(
        sorting: SortingCriteria,
        render_queue: u32,
        view_depth: f32,
        far_clip: f32,
        material_id: u32,
        index: u32,
    ) -> Self {
        let normalized = if far_clip > 0.0 { (view_depth / far_clip).clamp(0.0, 1.0) } else { 0.0 };
        let depth = (normalized as f64 * DEPTH_MAX as f64) as u64;
        let depth = match sorting {
            SortingCriteria::CommonTransparent => DEPTH_MAX - depth,
            _ => depth,
        };
        let key = match sorting {
            SortingCriteria::None => 0,
            _ => ((render_queue as u64 & 0xFFFF) << (DEPTH_BITS + MATERIAL_BITS))
                | (depth << MATERIAL_BITS)
                | (material_id as u64 & MATERIAL_MASK),
        };
        Self { key, index }
    }
}

/// Filtered and ordered renderers ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct RendererList {
    pub desc: RendererListDesc,
    pub renderers: Vec<RendererId>,
}

impl RendererList {
    /// Select and order renderers from `culling`
    pub fn build(desc: RendererListDesc, culling: &CullingResults, far_clip: f32) -> Self {
        let mut keys: Vec<DrawKey> = culling
            .renderers
            .iter()
            .enumerate()
            .filter(|(_, renderer)| {
                desc.queue_range.contains(renderer.render_queue)
                    && renderer.rendering_layer_mask & desc.rendering_layer_mask != 0
                    && desc.shader_tags.contains(&renderer.shader_tag.as_str())
            })
            .map(|(index, renderer)| {
                DrawKey::pack(
                    desc.sorting,
                    renderer.render_queue,
                    renderer.view_depth,
                    far_clip,
                    renderer.material_id,
                    index as u32,
                )
            })
            .collect();

        keys.radix_sort_unstable();

        let renderers = keys
            .iter()
            .map(|draw| culling.renderers[draw.index as usize].id)
            .collect();
        Self { desc, renderers }
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }
}

#[cfg(test)]
#[path = "renderer_list_tests.rs"]
mod tests;
