use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::{
    foundation::error::{ScrollError, ScrollResult},
    scene::frame::{Frame, SceneFrame},
    style::sink::StyleSink,
};

/// Custom property carrying the spotlight emphasis.
pub const SPOTLIGHT_PROPERTY: &str = "--spotlight";

// Digits past the requested precision inspected for an exact binary tie.
const TIE_GUARD: usize = 40;

/// Fixed-point formatting that matches `Number.prototype.toFixed`: exact ties round away from
/// zero (std formatting rounds them to even) and `-0` prints as `0`.
pub(crate) fn fixed(v: f64, digits: usize) -> String {
    let v = v + 0.0;
    if !v.is_finite() {
        return format!("{v}");
    }
    let wide = format!("{:.*}", digits + TIE_GUARD, v.abs());
    let (head, tail) = wide.split_at(wide.len() - TIE_GUARD);
    let tie = tail.starts_with('5') && tail.bytes().skip(1).all(|b| b == b'0');
    if !tie {
        return format!("{:.*}", digits, v);
    }
    let rounded = increment_last_digit(head.trim_end_matches('.'));
    if v < 0.0 { format!("-{rounded}") } else { rounded }
}

fn increment_last_digit(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    for c in chars.iter_mut().rev() {
        match *c {
            '.' => continue,
            '9' => *c = '0',
            d => {
                *c = char::from(d as u8 + 1);
                return chars.into_iter().collect();
            }
        }
    }
    std::iter::once('1').chain(chars).collect()
}

fn length(v: Option<f64>, suffix: &str) -> String {
    match v {
        Some(v) => format!("{}{suffix}", fixed(v, 2)),
        None => "0".to_string(),
    }
}

/// CSS `transform` value for a frame, or `None` if it has no transform channels.
pub fn transform_value(frame: &Frame) -> Option<String> {
    if !frame.has_transform() {
        return None;
    }
    if frame.neutral {
        return Some("none".to_string());
    }
    let mut parts = Vec::with_capacity(3);
    if frame.translate_x.is_some() || frame.translate_y.is_some() {
        let suffix = frame.unit.suffix();
        parts.push(format!(
            "translate3d({}, {}, 0)",
            length(frame.translate_x, suffix),
            length(frame.translate_y, suffix)
        ));
    }
    if let Some(s) = frame.scale {
        parts.push(format!("scale({})", fixed(s, 3)));
    }
    if let Some(r) = frame.rotate_deg {
        parts.push(format!("rotate({}deg)", fixed(r, 2)));
    }
    Some(parts.join(" "))
}

/// CSS declarations for one element, in a stable order.
pub fn declarations(frame: &Frame) -> Vec<(&'static str, String)> {
    let mut out = Vec::with_capacity(5);
    if let Some(radius) = frame.radius {
        let r: Vec<String> = radius.iter().map(|v| format!("{v}%")).collect();
        out.push((
            "border-radius",
            format!("{} / {}", r[..4].join(" "), r[4..].join(" ")),
        ));
    }
    if let Some(t) = transform_value(frame) {
        out.push(("transform", t));
    }
    if let Some(o) = frame.opacity {
        let v = if frame.neutral {
            "1".to_string()
        } else {
            fixed(o, 3)
        };
        out.push(("opacity", v));
    }
    if let Some(b) = frame.blur_px {
        let v = if frame.neutral {
            "none".to_string()
        } else {
            format!("blur({}px)", fixed(b, 2))
        };
        out.push(("filter", v));
    }
    if let Some(s) = frame.spotlight {
        let v = if frame.neutral {
            "0".to_string()
        } else {
            fixed(s, 3)
        };
        out.push((SPOTLIGHT_PROPERTY, v));
    }
    out
}

/// Addresses one bound element: target name plus instance index.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct ElementKey {
    /// Target name.
    pub target: String,
    /// Instance index.
    pub index: usize,
}

/// Sink that renders frames into per-element CSS declarations.
#[derive(Debug, Default)]
pub struct CssSink {
    // Target order from the scene config, so rendering follows page order.
    order: Vec<String>,
    styles: BTreeMap<ElementKey, Vec<(&'static str, String)>>,
    applied: u64,
}

impl CssSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declarations of one element from the last apply.
    pub fn element(&self, target: &str, index: usize) -> Option<&[(&'static str, String)]> {
        let key = ElementKey {
            target: target.to_string(),
            index,
        };
        self.styles.get(&key).map(Vec::as_slice)
    }

    /// Single property value of one element.
    pub fn value(&self, target: &str, index: usize, property: &str) -> Option<&str> {
        self.element(target, index)?
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Number of applies so far.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Render the current state as CSS-like rule blocks in page order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for target in &self.order {
            for (key, decls) in self.styles.range(
                ElementKey {
                    target: target.clone(),
                    index: 0,
                }..=ElementKey {
                    target: target.clone(),
                    index: usize::MAX,
                },
            ) {
                let _ = write!(out, "{}[{}] {{", key.target, key.index);
                for (p, v) in decls {
                    let _ = write!(out, " {p}: {v};");
                }
                out.push_str(" }\n");
            }
        }
        out
    }
}

impl StyleSink for CssSink {
    fn apply(&mut self, frame: &SceneFrame) -> ScrollResult<()> {
        let mut styles = BTreeMap::new();
        let mut order = Vec::with_capacity(frame.targets.len());
        for t in &frame.targets {
            if order.contains(&t.name) {
                return Err(ScrollError::style(format!(
                    "target '{}' appears twice in one frame",
                    t.name
                )));
            }
            order.push(t.name.clone());
            for (index, f) in t.frames.iter().enumerate() {
                let key = ElementKey {
                    target: t.name.clone(),
                    index,
                };
                styles.insert(key, declarations(f));
            }
        }
        self.order = order;
        self.styles = styles;
        self.applied += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/css.rs"]
mod tests;
