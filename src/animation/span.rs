use crate::foundation::math::lerp;

/// Values that can be linearly interpolated.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` by `t` (unclamped).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

impl<const N: usize> Lerp for [f64; N] {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        std::array::from_fn(|i| lerp(a[i], b[i], t))
    }
}

/// A `from -> to` output range driven by a phase in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span<T> {
    /// Value at phase 0.
    pub from: T,
    /// Value at phase 1.
    pub to: T,
}

impl<T: Lerp> Span<T> {
    /// Build a span.
    pub const fn new(from: T, to: T) -> Self {
        Self { from, to }
    }

    /// Sample at `phase`; the phase is clamped so the span never extrapolates.
    pub fn at(&self, phase: f64) -> T {
        T::lerp(&self.from, &self.to, crate::foundation::math::clamp01(phase))
    }
}
