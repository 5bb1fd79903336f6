//! Scalar interpolation helpers shared by curves, filters and the drivetrain.

/// Linear interpolation: `a + (b - a) * t`.
///
/// `t` is not clamped, so values outside `[0,1]` extrapolate.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: the weight `t` such that `lerp(a, b, t) == x`.
///
/// Returns 0 when `a == b`, where every weight maps to the same value.
#[inline]
pub fn lerp_weight(a: f64, b: f64, x: f64) -> f64 {
    let span = b - a;
    if span.abs() <= f64::EPSILON * a.abs().max(b.abs()).max(1.0) {
        0.0
    } else {
        (x - a) / span
    }
}
