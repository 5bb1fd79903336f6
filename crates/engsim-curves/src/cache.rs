//! Pre-computed sample cache for approximate curve lookup.

use crate::interp::{lerp, lerp_weight};

/// Ordered `(x, y)` samples of a normalized curve.
///
/// The cache trades exactness for speed: instead of solving the cubic for `t`
/// on every query, a lookup binary-searches the samples for the bracketing
/// pair and interpolates linearly between them. Precision is bounded by the
/// sampling step.
///
/// # Ordering
///
/// [`SampleCache::y_for_x`] requires the first coordinates to be
/// non-decreasing, [`SampleCache::x_for_y`] the second. Lookups along an
/// unordered axis return an unspecified value from somewhere on the curve.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleCache {
    samples: Vec<(f64, f64)>,
}

impl SampleCache {
    /// Sample `point` at `t = 0, step, 2*step, ...` below 1, framed by the
    /// exact endpoints `start` and `end`.
    ///
    /// `step` must already be validated to lie in `(0, 0.5]`.
    pub(crate) fn build<F>(step: f64, start: (f64, f64), end: (f64, f64), point: F) -> Self
    where
        F: Fn(f64) -> (f64, f64),
    {
        // Interior sample count; the small bias keeps 1/0.05 from rounding up.
        let interior = ((1.0 / step) - 1e-9).ceil().max(1.0) as usize;

        let mut samples = Vec::with_capacity(interior + 1);
        samples.push(start);
        samples.extend(
            (1..interior)
                .map(|i| i as f64 * step)
                .filter(|t| *t < 1.0)
                .map(point),
        );
        samples.push(end);

        Self { samples }
    }

    /// Number of cached samples, endpoints included.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: a cache holds at least its two endpoints.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Raw samples for inspection.
    pub fn samples(&self) -> &[(f64, f64)] {
        &self.samples
    }

    /// Interpolated y for a normalized x in `[0,1]`.
    #[inline]
    pub fn y_for_x(&self, x: f64) -> f64 {
        self.interpolate(x, |s| s.0, |s| s.1)
    }

    /// Interpolated x for a normalized y in `[0,1]`.
    #[inline]
    pub fn x_for_y(&self, y: f64) -> f64 {
        self.interpolate(y, |s| s.1, |s| s.0)
    }

    /// True when the x coordinates never decrease.
    pub fn is_monotonic_x(&self) -> bool {
        self.samples.windows(2).all(|w| match w {
            [a, b] => b.0 >= a.0,
            _ => true,
        })
    }

    /// True when the y coordinates never decrease.
    pub fn is_monotonic_y(&self) -> bool {
        self.samples.windows(2).all(|w| match w {
            [a, b] => b.1 >= a.1,
            _ => true,
        })
    }

    fn interpolate<K, V>(&self, query: f64, key: K, value: V) -> f64
    where
        K: Fn(&(f64, f64)) -> f64,
        V: Fn(&(f64, f64)) -> f64,
    {
        // First sample past the origin whose key is >= query.
        let tail = self.samples.get(1..).unwrap_or_default();
        let upper = (1 + tail.partition_point(|s| query > key(s))).min(self.samples.len() - 1);

        match (self.samples.get(upper - 1), self.samples.get(upper)) {
            (Some(lo), Some(hi)) => {
                let weight = lerp_weight(key(lo), key(hi), query);
                lerp(value(lo), value(hi), weight)
            }
            _ => 0.0,
        }
    }
}
