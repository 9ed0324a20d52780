use crate::{
    animation::curve::Curve,
    animation::morph::MorphSpec,
    animation::window::SpotlightWindow,
    foundation::error::{ScrollError, ScrollResult},
    scene::config::{ChannelCurves, RevealConfig, SceneConfig, TargetKind, TargetSpec},
};

/// Names accepted by [`SceneConfig::preset`].
pub const PRESET_NAMES: [&str; 2] = ["wellness-journey", "pillar-spotlight"];

// Hero content eases out over the first 1/1.15 of the scene.
const HERO_END: f64 = 1.0 / 1.15;

fn element(name: &str, channels: ChannelCurves) -> TargetSpec {
    TargetSpec {
        name: name.to_string(),
        kind: TargetKind::Element,
        stagger: 0.0,
        channels,
        morph: None,
    }
}

fn morph_layer(name: &str, stagger: f64) -> TargetSpec {
    TargetSpec {
        name: name.to_string(),
        kind: TargetKind::Morph,
        stagger,
        channels: ChannelCurves::default(),
        morph: Some(MorphSpec::default()),
    }
}

fn hero_targets() -> Vec<TargetSpec> {
    vec![
        element(
            "hero-card",
            ChannelCurves {
                translate_y: Some(Curve::linear(0.0, HERO_END, 0.0, -16.0)),
                opacity: Some(Curve::linear(0.0, HERO_END, 1.0, 0.72)),
                ..ChannelCurves::default()
            },
        ),
        element(
            "accent",
            ChannelCurves {
                translate_y: Some(Curve::linear(0.0, HERO_END, 0.0, -10.0)),
                scale: Some(Curve::linear(0.0, HERO_END, 1.0, 0.96)),
                opacity: Some(Curve::linear(0.0, HERO_END, 1.0, 0.74)),
                ..ChannelCurves::default()
            },
        ),
        element(
            "stage",
            ChannelCurves {
                translate_y: Some(Curve::linear(0.06, 0.94, 76.0, 0.0)),
                scale: Some(Curve::linear(0.06, 0.94, 0.92, 1.0)),
                opacity: Some(Curve::linear(0.06, 0.94, 0.08, 1.0)),
                blur: Some(Curve::linear(0.06, 0.94, 5.0, 0.0)),
                ..ChannelCurves::default()
            },
        ),
        element(
            "content-panel",
            ChannelCurves {
                translate_y: Some(Curve::linear(0.16, 0.9, 30.0, 0.0)),
                opacity: Some(Curve::linear(0.16, 0.9, 0.35, 1.0)),
                ..ChannelCurves::default()
            },
        ),
    ]
}

fn floating_and_orbs() -> Vec<TargetSpec> {
    vec![
        TargetSpec {
            stagger: -0.08,
            ..element(
                "floating-panel",
                ChannelCurves {
                    translate_y: Some(Curve::linear(0.28, 0.86, 18.0, 0.0)),
                    opacity: Some(Curve::linear(0.28, 0.86, 0.2, 1.0)),
                    ..ChannelCurves::default()
                },
            )
        },
        element(
            "orb",
            ChannelCurves {
                translate_x: Some(Curve::linear(0.14, 0.86, 0.0, 10.0)),
                translate_y: Some(Curve::linear(0.14, 0.86, 20.0, 0.0)),
                scale: Some(Curve::linear(0.14, 0.86, 0.9, 1.0)),
                opacity: Some(Curve::linear(0.14, 0.86, 0.2, 0.95)),
                drift: vec![1.0, -1.0],
                ..ChannelCurves::default()
            },
        ),
    ]
}

impl SceneConfig {
    /// The wellness-journey landing page: hero fade-out, stage reveal, staggered pillars,
    /// three-phase blob layers, floating panels and drifting orbs.
    pub fn wellness_journey() -> Self {
        let mut targets = hero_targets();
        targets.push(TargetSpec {
            stagger: -0.08,
            ..element(
                "pillar",
                ChannelCurves {
                    translate_y: Some(Curve::linear(0.2, 0.82, 18.0, 0.0)),
                    opacity: Some(Curve::linear(0.2, 0.82, 0.45, 1.0)),
                    ..ChannelCurves::default()
                },
            )
        });
        targets.push(morph_layer("morph-layer", 0.12));
        targets.extend(floating_and_orbs());
        Self {
            name: "wellness-journey".to_string(),
            targets,
            reveal: RevealConfig::default(),
        }
    }

    /// Variant that walks a spotlight across the pillars, one after another.
    pub fn pillar_spotlight() -> Self {
        let mut targets = hero_targets();
        targets.push(TargetSpec {
            stagger: -0.15,
            ..element(
                "pillar",
                ChannelCurves {
                    translate_y: Some(Curve::linear(0.2, 0.5, 18.0, 0.0)),
                    opacity: Some(Curve::linear(0.2, 0.5, 0.45, 1.0)),
                    spotlight: Some(SpotlightWindow {
                        start: 0.35,
                        end: 0.55,
                    }),
                    ..ChannelCurves::default()
                },
            )
        });
        targets.push(morph_layer("morph-layer", 0.12));
        Self {
            name: "pillar-spotlight".to_string(),
            targets,
            reveal: RevealConfig {
                threshold: 0.35,
                bottom_margin: -0.15,
            },
        }
    }

    /// Built-in variant by name (see [`PRESET_NAMES`]).
    pub fn preset(name: &str) -> ScrollResult<Self> {
        match name {
            "wellness-journey" => Ok(Self::wellness_journey()),
            "pillar-spotlight" => Ok(Self::pillar_spotlight()),
            other => Err(ScrollError::config(format!(
                "unknown preset '{other}' (expected one of: {})",
                PRESET_NAMES.join(", ")
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/presets.rs"]
mod tests;
