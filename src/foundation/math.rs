/// Clamp `v` into `[min, max]`. NaN collapses to `min`.
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    if v.is_nan() {
        return min;
    }
    v.max(min).min(max)
}

/// Clamp into the unit interval.
pub fn clamp01(v: f64) -> f64 {
    clamp(v, 0.0, 1.0)
}

/// Unclamped linear interpolation `a + (b - a) * t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn is_unit(v: f64) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
