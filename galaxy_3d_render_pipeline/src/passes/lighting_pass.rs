/// Lighting pass: declares the shadow atlases and runs the lighting subsystem.

use crate::error::Galaxy3dResult;
use crate::culling::{CullingResults, LightKind};
use crate::graphics_device::TargetDesc;
use crate::lighting::{Lighting, LightingInput, ShadowTextures};
use crate::render_graph::RecordingScope;
use crate::settings::ShadowSettings;

pub struct LightingPass;

impl LightingPass {
    pub const NAME: &'static str = "Lighting";

    /// Atlas edge for lights of `kinds`; 1 when none of them casts shadows
    fn atlas_size(culling: &CullingResults, kinds: &[LightKind], light_mask: u32, size: u32) -> u32 {
        if culling.has_shadowed_light(kinds, light_mask) {
            size
        } else {
            1
        }
    }

    pub fn record<'a>(
        scope: &mut RecordingScope<'a>,
        lighting: &'a mut dyn Lighting,
        culling: &'a CullingResults,
        shadow_settings: &'a ShadowSettings,
        use_lights_per_object: bool,
        light_mask: u32,
    ) -> Galaxy3dResult<ShadowTextures> {
        let directional_size = Self::atlas_size(
            culling,
            &[LightKind::Directional],
            light_mask,
            shadow_settings.directional.atlas_size,
        );
        let other_size = Self::atlas_size(
            culling,
            &[LightKind::Spot, LightKind::Point],
            light_mask,
            shadow_settings.other.atlas_size,
        );

        scope.record(
            Self::NAME,
            |builder| {
                Ok(ShadowTextures {
                    directional_atlas: builder.create_frame_target(
                        "Directional Shadow Atlas",
                        TargetDesc::shadow_atlas(directional_size),
                    ),
                    other_atlas: builder
                        .create_frame_target("Other Shadow Atlas", TargetDesc::shadow_atlas(other_size)),
                })
            },
            move |shadow_textures, ctx| {
                let input = LightingInput {
                    culling,
                    shadow_settings,
                    use_lights_per_object,
                    light_mask,
                    shadow_textures: *shadow_textures,
                };
                lighting.setup(ctx, &input)
            },
        )
    }
}

#[cfg(test)]
#[path = "lighting_pass_tests.rs"]
mod tests;
