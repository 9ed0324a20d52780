use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::{
    animation::curve::Curve,
    animation::morph::MorphSpec,
    animation::window::SpotlightWindow,
    foundation::error::{ScrollError, ScrollResult},
    foundation::math::is_unit,
};

/// Declarative description of one animation variant of the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    /// Variant name.
    pub name: String,
    /// Animated targets, evaluated in order.
    pub targets: Vec<TargetSpec>,
    /// Reveal-on-intersect settings.
    #[serde(default)]
    pub reveal: RevealConfig,
}

/// How a target's frames are produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TargetKind {
    /// Channel curves over (staggered) scroll progress; translations in px.
    #[default]
    Element,
    /// A blob layer driven by a clamped phase; translations in percent.
    Morph,
}

/// One named animated target and its per-channel curves.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TargetSpec {
    /// Channel name, e.g. `"pillar"`.
    pub name: String,
    /// Target kind.
    #[serde(default)]
    pub kind: TargetKind,
    /// Phase offset added per instance index. Negative values delay later instances.
    #[serde(default)]
    pub stagger: f64,
    /// Channel curves (element targets; morph targets may add a spotlight).
    #[serde(default)]
    pub channels: ChannelCurves,
    /// Blob description (morph targets only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morph: Option<MorphSpec>,
}

/// Curves for each output channel. Absent channels are not written.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChannelCurves {
    /// Horizontal offset in px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_x: Option<Curve>,
    /// Vertical offset in px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<Curve>,
    /// Uniform scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Curve>,
    /// Rotation in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<Curve>,
    /// Blur radius in px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<Curve>,
    /// Opacity; clamped to `[0, 1]` on output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Curve>,
    /// Triangular emphasis pulse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotlight: Option<SpotlightWindow>,
    /// Per-instance multiplier for `translate_x`; the last entry repeats.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub drift: Vec<f64>,
}

impl ChannelCurves {
    /// Multiplier for instance `index`.
    pub fn drift_for(&self, index: usize) -> f64 {
        match self.drift.get(index).or_else(|| self.drift.last()) {
            Some(d) => *d,
            None => 1.0,
        }
    }

    fn curves(&self) -> impl Iterator<Item = (&'static str, &Curve)> {
        [
            ("translate_x", self.translate_x.as_ref()),
            ("translate_y", self.translate_y.as_ref()),
            ("scale", self.scale.as_ref()),
            ("rotate", self.rotate.as_ref()),
            ("blur", self.blur.as_ref()),
            ("opacity", self.opacity.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, c)| c.map(|c| (name, c)))
    }

    // Channels only element targets read; morph layers take just the spotlight.
    fn element_only(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.curves().map(|(name, _)| name).collect();
        if !self.drift.is_empty() {
            names.push("drift");
        }
        names
    }

    fn validate(&self, target: &str) -> ScrollResult<()> {
        for (channel, curve) in self.curves() {
            curve
                .validate()
                .map_err(|e| e.in_context(format!("target '{target}' channel '{channel}'")))?;
        }
        if let Some(s) = &self.spotlight {
            s.validate()
                .map_err(|e| e.in_context(format!("target '{target}' spotlight")))?;
        }
        if self.drift.iter().any(|d| !d.is_finite()) {
            return Err(ScrollError::validation(format!(
                "target '{target}': drift values must be finite"
            )));
        }
        Ok(())
    }
}

/// Reveal latch settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealConfig {
    /// Intersection ratio at which an element is revealed.
    pub threshold: f64,
    /// Bottom root margin as a fraction of viewport height; `<= 0` fires before the element
    /// is fully in view.
    pub bottom_margin: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            bottom_margin: -0.1,
        }
    }
}

impl RevealConfig {
    /// Threshold in `[0, 1]`, margin in `[-1, 0]`.
    pub fn validate(&self) -> ScrollResult<()> {
        if !is_unit(self.threshold) {
            return Err(ScrollError::validation(
                "reveal threshold must be within [0, 1]",
            ));
        }
        if !self.bottom_margin.is_finite() || !(-1.0..=0.0).contains(&self.bottom_margin) {
            return Err(ScrollError::validation(
                "reveal bottom margin must be within [-1, 0]",
            ));
        }
        Ok(())
    }
}

impl SceneConfig {
    /// Parse from JSON text. Does not validate.
    pub fn from_json_str(s: &str) -> ScrollResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: &Path) -> ScrollResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ScrollError::Other(anyhow::Error::new(e).context(format!(
                "read scene config '{}'",
                path.display()
            )))
        })?;
        let cfg = Self::from_json_str(&text)?;
        cfg.validate()?;
        tracing::info!(
            name = %cfg.name,
            targets = cfg.targets.len(),
            path = %path.display(),
            "loaded scene config"
        );
        Ok(cfg)
    }

    /// Pretty JSON.
    pub fn to_json_pretty(&self) -> ScrollResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every window, target and reveal setting.
    pub fn validate(&self) -> ScrollResult<()> {
        if self.targets.is_empty() {
            return Err(ScrollError::validation("scene must have at least one target"));
        }
        let mut seen = BTreeSet::new();
        for t in &self.targets {
            if t.name.trim().is_empty() {
                return Err(ScrollError::validation("target name must be non-empty"));
            }
            if !seen.insert(t.name.as_str()) {
                return Err(ScrollError::validation(format!(
                    "duplicate target name '{}'",
                    t.name
                )));
            }
            if !t.stagger.is_finite() {
                return Err(ScrollError::validation(format!(
                    "target '{}': stagger must be finite",
                    t.name
                )));
            }
            t.channels.validate(&t.name)?;
            match (t.kind, &t.morph) {
                (TargetKind::Morph, None) => {
                    return Err(ScrollError::validation(format!(
                        "morph target '{}' is missing a morph spec",
                        t.name
                    )));
                }
                (TargetKind::Morph, Some(m)) => {
                    m.validate()
                        .map_err(|e| e.in_context(format!("target '{}'", t.name)))?;
                    let unused = t.channels.element_only();
                    if !unused.is_empty() {
                        return Err(ScrollError::validation(format!(
                            "morph target '{}' cannot animate {}; only spotlight applies",
                            t.name,
                            unused.join(", ")
                        )));
                    }
                }
                (TargetKind::Element, Some(_)) => {
                    return Err(ScrollError::validation(format!(
                        "element target '{}' has a morph spec; set kind to Morph",
                        t.name
                    )));
                }
                (TargetKind::Element, None) => {}
            }
        }
        self.reveal.validate()
    }

    /// Look up a target by name.
    pub fn target(&self, name: &str) -> Option<&TargetSpec> {
        self.targets.iter().find(|t| t.name == name)
    }
}

/// How many DOM elements are bound to each target. Unbound targets are skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Bindings(BTreeMap<String, usize>);

impl Bindings {
    /// Empty bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// One instance of every target in `config`.
    pub fn one_each(config: &SceneConfig) -> Self {
        Self(config.targets.iter().map(|t| (t.name.clone(), 1)).collect())
    }

    /// Bind `count` instances of `target`.
    pub fn set(&mut self, target: impl Into<String>, count: usize) -> &mut Self {
        self.0.insert(target.into(), count);
        self
    }

    /// Builder form of [`Bindings::set`].
    pub fn with(mut self, target: impl Into<String>, count: usize) -> Self {
        self.set(target, count);
        self
    }

    /// Bound instance count; 0 when the target has no elements.
    pub fn count(&self, target: &str) -> usize {
        self.0.get(target).copied().unwrap_or(0)
    }

    /// Parse a `name=count` pair.
    pub fn parse_pair(s: &str) -> ScrollResult<(String, usize)> {
        let (name, count) = s
            .split_once('=')
            .ok_or_else(|| ScrollError::config(format!("binding '{s}' must be name=count")))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ScrollError::config(format!("binding '{s}' has an empty name")));
        }
        let count = count
            .trim()
            .parse::<usize>()
            .map_err(|e| ScrollError::config(format!("binding '{s}': {e}")))?;
        Ok((name.to_string(), count))
    }

    /// Names bound here that `config` does not define.
    pub fn unknown_targets<'a>(&'a self, config: &SceneConfig) -> Vec<&'a str> {
        self.0
            .keys()
            .filter(|k| config.target(k).is_none())
            .map(String::as_str)
            .collect()
    }

    /// Iterate `(target, count)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
