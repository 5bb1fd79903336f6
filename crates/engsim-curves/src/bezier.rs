//! Cubic Bezier response curve with a cached approximate inverse.

use serde::{Deserialize, Serialize};

use crate::cache::SampleCache;
use crate::error::{CurveError, CurveResult};

/// Serializable construction parameters of a [`CubicBezier`].
///
/// The curve runs from the anchor `A = (0, ay)` to `B = (1, by)` in normalized
/// space, shaped by the interior control points `c1` and `c2`. `scale_x` and
/// `scale_y` map the normalized domain and range onto engineering units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParams {
    /// First control point, x.
    pub c1x: f64,
    /// First control point, y.
    pub c1y: f64,
    /// Second control point, x.
    pub c2x: f64,
    /// Second control point, y.
    pub c2y: f64,
    /// Domain scale.
    pub scale_x: f64,
    /// Range scale.
    pub scale_y: f64,
    /// y of the start anchor.
    pub ay: f64,
    /// y of the end anchor.
    pub by: f64,
    /// Sampling step of the lookup cache.
    pub accuracy: f64,
}

impl CurveParams {
    /// Default sampling step: 21 cached samples.
    pub const DEFAULT_ACCURACY: f64 = 0.05;

    /// Parameters for the given control points with every other value at its
    /// default.
    pub const fn new(c1x: f64, c1y: f64, c2x: f64, c2y: f64) -> Self {
        Self {
            c1x,
            c1y,
            c2x,
            c2y,
            scale_x: 1.0,
            scale_y: 1.0,
            ay: 0.0,
            by: 1.0,
            accuracy: Self::DEFAULT_ACCURACY,
        }
    }

    /// Same parameters with different end-anchor heights.
    pub const fn with_anchors(self, ay: f64, by: f64) -> Self {
        Self { ay, by, ..self }
    }

    /// Same parameters with different scale factors.
    pub const fn with_scale(self, scale_x: f64, scale_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            ..self
        }
    }

    /// Same parameters with a different sampling step.
    pub const fn with_accuracy(self, accuracy: f64) -> Self {
        Self { accuracy, ..self }
    }

    /// Check every value without building a cache.
    pub fn validate(&self) -> CurveResult<()> {
        let named = [
            ("c1x", self.c1x),
            ("c1y", self.c1y),
            ("c2x", self.c2x),
            ("c2y", self.c2y),
            ("scale_x", self.scale_x),
            ("scale_y", self.scale_y),
            ("ay", self.ay),
            ("by", self.by),
            ("accuracy", self.accuracy),
        ];
        if let Some((name, value)) = named.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(CurveError::NonFiniteParameter { name, value });
        }

        if self.scale_x <= 0.0 {
            return Err(CurveError::NonPositiveScale {
                axis: "x",
                value: self.scale_x,
            });
        }
        if self.scale_y <= 0.0 {
            return Err(CurveError::NonPositiveScale {
                axis: "y",
                value: self.scale_y,
            });
        }
        if !(self.accuracy > 0.0 && self.accuracy <= 0.5) {
            return Err(CurveError::InvalidAccuracy(self.accuracy));
        }

        Ok(())
    }
}

impl Default for CurveParams {
    /// The straight diagonal from (0,0) to (1,1).
    fn default() -> Self {
        Self::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0)
    }
}

/// Cubic Bezier curve with an eagerly built lookup cache.
///
/// All parameters are fixed at construction. The `with_*` methods consume the
/// curve and return a new one with a rebuilt cache, so the cache can never go
/// stale relative to the anchors or control points.
///
/// # Example
///
/// ```
/// use engsim_curves::CubicBezier;
///
/// // Pedal travel to clutch engagement.
/// let clutch = CubicBezier::new(1.0, 0.0, 0.65, 0.0)?;
/// assert!(clutch.value_at(0.0).abs() < 1e-9);
/// assert!((clutch.value_at(1.0) - 1.0).abs() < 1e-9);
///
/// // Scaled: input in RPM, output in percent.
/// let torque = CubicBezier::new(0.33, 0.2, 0.66, 0.5)?.with_scale(7000.0, 100.0)?;
/// let pct = torque.value_at(3500.0);
/// assert!(pct > 0.0 && pct < 100.0);
/// # Ok::<(), engsim_curves::CurveError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveParams", into = "CurveParams")]
pub struct CubicBezier {
    params: CurveParams,
    cache: SampleCache,
}

impl CubicBezier {
    /// Build a normalized curve from its two interior control points.
    pub fn new(c1x: f64, c1y: f64, c2x: f64, c2y: f64) -> CurveResult<Self> {
        Self::from_params(CurveParams::new(c1x, c1y, c2x, c2y))
    }

    /// Build a curve from a full parameter set.
    pub fn from_params(params: CurveParams) -> CurveResult<Self> {
        params.validate()?;

        let cache = SampleCache::build(
            params.accuracy,
            (0.0, params.ay),
            (1.0, params.by),
            |t| bezier_point(&params, t),
        );

        Ok(Self { params, cache })
    }

    /// The straight diagonal from (0,0) to (1,1).
    pub fn linear() -> Self {
        let params = CurveParams::default();
        Self {
            cache: SampleCache::build(params.accuracy, (0.0, 0.0), (1.0, 1.0), |t| {
                bezier_point(&params, t)
            }),
            params,
        }
    }

    /// Rebuild with new scale factors.
    pub fn with_scale(self, scale_x: f64, scale_y: f64) -> CurveResult<Self> {
        Self::from_params(self.params.with_scale(scale_x, scale_y))
    }

    /// Rebuild with new anchor heights.
    pub fn with_anchors(self, ay: f64, by: f64) -> CurveResult<Self> {
        Self::from_params(self.params.with_anchors(ay, by))
    }

    /// Rebuild with a new sampling step.
    pub fn with_accuracy(self, accuracy: f64) -> CurveResult<Self> {
        Self::from_params(self.params.with_accuracy(accuracy))
    }

    /// Construction parameters.
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// The lookup cache backing [`Self::value_at`] and [`Self::inverse_at`].
    pub fn cache(&self) -> &SampleCache {
        &self.cache
    }

    /// Exact normalized point at parameter `t` (clamped to `[0,1]`).
    ///
    /// Uses B(t) = (1-t)³A + 3(1-t)²t·C1 + 3(1-t)t²·C2 + t³B with
    /// `A = (0, ay)` and `B = (1, by)`. The endpoints are returned verbatim so
    /// `point_at(0) == (0, ay)` and `point_at(1) == (1, by)` hold exactly.
    #[inline]
    pub fn point_at(&self, t: f64) -> (f64, f64) {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            (0.0, self.params.ay)
        } else if t >= 1.0 {
            (1.0, self.params.by)
        } else {
            bezier_point(&self.params, t)
        }
    }

    /// Approximate y for an x in engineering units ("getY").
    ///
    /// `x` is clamped to `[0, scale_x]`. Requires the curve to be monotonic in
    /// x, see [`Self::is_monotonic_x`].
    #[inline]
    pub fn value_at(&self, x: f64) -> f64 {
        let x = normalize(x, self.params.scale_x);
        self.cache.y_for_x(x) * self.params.scale_y
    }

    /// Approximate x for a y in engineering units ("getX").
    ///
    /// `y` is clamped to `[0, scale_y]`. Requires the curve to be monotonic in
    /// y, see [`Self::is_monotonic_y`].
    #[inline]
    pub fn inverse_at(&self, y: f64) -> f64 {
        let y = normalize(y, self.params.scale_y);
        self.cache.x_for_y(y) * self.params.scale_x
    }

    /// Whether [`Self::value_at`] is well defined.
    pub fn is_monotonic_x(&self) -> bool {
        self.cache.is_monotonic_x()
    }

    /// Whether [`Self::inverse_at`] is well defined.
    pub fn is_monotonic_y(&self) -> bool {
        self.cache.is_monotonic_y()
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::linear()
    }
}

impl TryFrom<CurveParams> for CubicBezier {
    type Error = CurveError;

    fn try_from(params: CurveParams) -> Result<Self, Self::Error> {
        Self::from_params(params)
    }
}

impl From<CubicBezier> for CurveParams {
    fn from(curve: CubicBezier) -> Self {
        curve.params
    }
}

#[inline]
fn normalize(value: f64, scale: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    (value / scale).clamp(0.0, 1.0)
}

#[inline]
fn bezier_point(p: &CurveParams, t: f64) -> (f64, f64) {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let t2 = t * t;

    let x = 3.0 * mt2 * t * p.c1x + 3.0 * mt * t2 * p.c2x + t2 * t;
    let y = mt2 * mt * p.ay + 3.0 * mt2 * t * p.c1y + 3.0 * mt * t2 * p.c2y + t2 * t * p.by;

    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn test_new_builds_default_cache() -> CurveResult<()> {
        let curve = CubicBezier::new(0.33, 0.2, 0.66, 0.5)?;
        assert_eq!(curve.cache().len(), 21);
        assert_eq!(curve.cache().samples()[0], (0.0, 0.0));
        assert_eq!(curve.cache().samples()[20], (1.0, 1.0));
        Ok(())
    }

    #[test]
    fn test_point_at_endpoints_are_exact() -> CurveResult<()> {
        let curve = CubicBezier::new(0.1, 0.9, 0.4, -0.3)?.with_anchors(0.25, 0.0)?;
        assert_eq!(curve.point_at(0.0), (0.0, 0.25));
        assert_eq!(curve.point_at(1.0), (1.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_point_at_clamps_parameter() {
        let curve = CubicBezier::linear();
        assert_eq!(curve.point_at(-3.0), (0.0, 0.0));
        assert_eq!(curve.point_at(7.0), (1.0, 1.0));
    }

    #[test]
    fn test_point_at_midpoint_formula() -> CurveResult<()> {
        let curve = CubicBezier::new(0.0, 1.0, 1.0, 0.0)?;
        let (x, y) = curve.point_at(0.5);
        // 3/8 c1 + 3/8 c2 + 1/8 B
        assert!((x - 0.5).abs() < 1e-12);
        assert!((y - 0.5).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_linear_value_and_inverse() {
        let curve = CubicBezier::linear();
        for i in 0..=20 {
            let x = f64::from(i) / 20.0;
            assert!((curve.value_at(x) - x).abs() < 1e-9, "value_at({x})");
            assert!((curve.inverse_at(x) - x).abs() < 1e-9, "inverse_at({x})");
        }
    }

    #[test]
    fn test_value_at_clamps_domain() {
        let curve = CubicBezier::linear();
        assert!(curve.value_at(-1.0).abs() < 1e-12);
        assert!((curve.value_at(2.0) - 1.0).abs() < 1e-12);
        assert!(curve.value_at(f64::NAN).abs() < 1e-12);
    }

    #[test]
    fn test_scaled_lookup() -> CurveResult<()> {
        let curve = CubicBezier::linear().with_scale(7000.0, 2.0)?;
        assert!((curve.value_at(3500.0) - 1.0).abs() < 1e-9);
        assert!((curve.inverse_at(1.0) - 3500.0).abs() < 1e-6);
        assert!((curve.value_at(9000.0) - 2.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_anchor_change_rebuilds_cache() -> CurveResult<()> {
        let rising = CubicBezier::new(0.33, 0.2, 0.66, 0.5)?;
        let falling = rising.clone().with_anchors(0.0, 0.0)?;

        assert!((rising.value_at(1.0) - 1.0).abs() < 1e-12);
        assert!(falling.value_at(1.0).abs() < 1e-12);
        assert_eq!(falling.cache().samples().last(), Some(&(1.0, 0.0)));
        assert!(falling.is_monotonic_x());
        assert!(!falling.is_monotonic_y());
        Ok(())
    }

    #[test]
    fn test_accuracy_controls_sample_count() -> CurveResult<()> {
        let coarse = CubicBezier::linear().with_accuracy(0.25)?;
        let fine = CubicBezier::linear().with_accuracy(0.01)?;
        assert_eq!(coarse.cache().len(), 5);
        assert_eq!(fine.cache().len(), 101);
        Ok(())
    }

    #[test]
    fn test_rejects_non_finite() {
        let result = CubicBezier::new(0.3, f64::NAN, 0.6, 0.6);
        assert!(matches!(
            result,
            Err(CurveError::NonFiniteParameter { name: "c1y", .. })
        ));

        let result = CubicBezier::linear().with_anchors(0.0, f64::INFINITY);
        assert!(matches!(
            result,
            Err(CurveError::NonFiniteParameter { name: "by", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_scale() {
        let result = CubicBezier::linear().with_scale(0.0, 1.0);
        assert!(matches!(
            result,
            Err(CurveError::NonPositiveScale { axis: "x", .. })
        ));

        let result = CubicBezier::linear().with_scale(1.0, -1.0);
        assert!(matches!(
            result,
            Err(CurveError::NonPositiveScale { axis: "y", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_accuracy() {
        assert!(matches!(
            CubicBezier::linear().with_accuracy(0.0),
            Err(CurveError::InvalidAccuracy(_))
        ));
        assert!(matches!(
            CubicBezier::linear().with_accuracy(0.6),
            Err(CurveError::InvalidAccuracy(_))
        ));
    }

    #[test]
    fn test_serialization_round_trip_rebuilds_cache() {
        let curve = must(CubicBezier::new(1.0, 0.09, 1.0, 0.07));
        let json = must(serde_json::to_string(&curve));
        assert!(json.contains("\"c1y\":0.09"));
        assert!(!json.contains("cache"));

        let back: CubicBezier = must(serde_json::from_str(&json));
        assert_eq!(curve, back);
    }

    #[test]
    fn test_deserialize_partial_params_uses_defaults() {
        let curve: CubicBezier = must(serde_json::from_str(
            r#"{"c1x":0.0,"c1y":0.67,"c2x":0.0,"c2y":0.67}"#,
        ));
        assert!((curve.params().scale_x - 1.0).abs() < f64::EPSILON);
        assert!((curve.params().by - 1.0).abs() < f64::EPSILON);
        assert_eq!(curve.cache().len(), 21);
    }

    #[test]
    fn test_deserialize_invalid_params_fails() {
        let result: Result<CubicBezier, _> =
            serde_json::from_str(r#"{"c1x":0.2,"c1y":0.2,"c2x":0.8,"c2y":0.8,"scale_x":-1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_is_linear() {
        assert_eq!(CubicBezier::default(), CubicBezier::linear());
        assert!(CubicBezier::linear().is_monotonic_x());
        assert!(CubicBezier::linear().is_monotonic_y());
    }
}
