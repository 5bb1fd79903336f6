//! Drivetrain configuration: gearbox, wheel, engine range and response curves.

use std::path::Path;

use engsim_curves::{CubicBezier, CurveParams};
use serde::{Deserialize, Serialize};

use crate::error::{DrivetrainError, DrivetrainResult};
use crate::gear::Gear;

/// Parameters of the four response curves.
///
/// - `torque`: normalized crankshaft RPM to spin-up rate
/// - `clutch`: pedal travel to disengagement (engagement is `1 - y`)
/// - `brake_force`: normalized crankshaft RPM to engine-braking strength
/// - `load`: normalized crankshaft RPM to drivetrain load on the engine
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSet {
    pub torque: CurveParams,
    pub clutch: CurveParams,
    pub brake_force: CurveParams,
    pub load: CurveParams,
}

impl CurveSet {
    /// Named entries, in a stable order, for validation and reporting.
    pub fn named(&self) -> [(&'static str, &CurveParams); 4] {
        [
            ("torque", &self.torque),
            ("clutch", &self.clutch),
            ("brake_force", &self.brake_force),
            ("load", &self.load),
        ]
    }
}

impl Default for CurveSet {
    fn default() -> Self {
        Self {
            // Torque falls back to zero at the rev ceiling.
            torque: CurveParams::new(0.33, 0.2, 0.66, 0.5).with_anchors(0.0, 0.0),
            clutch: CurveParams::new(1.0, 0.0, 0.65, 0.0),
            brake_force: CurveParams::new(1.0, 0.09, 1.0, 0.07),
            load: CurveParams::new(0.0, 0.67, 0.0, 0.67),
        }
    }
}

/// Static description of one simulated vehicle.
///
/// Every field has a default, so configuration files only need to name the
/// values they change.
///
/// # Example
///
/// ```
/// use engsim_drivetrain::DrivetrainConfig;
///
/// let config = DrivetrainConfig::from_yaml_str("rpm_max: 8000\ndifferential_ratio: 4.1\n")?;
/// assert_eq!(config.gear_ratios.len(), 7);
/// config.validate()?;
/// # Ok::<(), engsim_drivetrain::DrivetrainError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrivetrainConfig {
    /// Ratios laid out `[R, N, 1st, 2nd, ...]`.
    pub gear_ratios: Vec<f64>,
    pub differential_ratio: f64,
    /// Driven wheel radius in metres.
    pub wheel_radius: f64,
    /// Idle speed; zero throttle targets this RPM.
    pub rpm_min: f64,
    /// Rev ceiling; full throttle targets this RPM.
    pub rpm_max: f64,
    pub curves: CurveSet,
}

impl Default for DrivetrainConfig {
    fn default() -> Self {
        Self {
            gear_ratios: vec![-2.9, 0.0, 2.66, 1.78, 1.3, 1.0, 0.74],
            differential_ratio: 3.42,
            wheel_radius: 0.34,
            rpm_min: 800.0,
            rpm_max: 7000.0,
            curves: CurveSet::default(),
        }
    }
}

impl DrivetrainConfig {
    /// Parse from YAML. Missing fields keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> DrivetrainResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> DrivetrainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a file, choosing JSON for `.json` and YAML otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> DrivetrainResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        if is_json(path) {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }

    /// Emit as YAML.
    pub fn to_yaml_string(&self) -> DrivetrainResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Highest forward gear.
    pub fn top_gear(&self) -> Gear {
        Gear::top_for(self.gear_ratios.len())
    }

    /// Ratio of `gear`, or `None` if the gearbox has no such position.
    pub fn ratio(&self, gear: Gear) -> Option<f64> {
        gear.ratio_index()
            .and_then(|i| self.gear_ratios.get(i))
            .copied()
    }

    /// Check ranges and curve shapes.
    ///
    /// Curves are built here only to inspect them; [`crate::Drivetrain::new`]
    /// calls this before building its own copies.
    pub fn validate(&self) -> DrivetrainResult<()> {
        let invalid = |msg: String| Err(DrivetrainError::InvalidConfig(msg));

        let [reverse, neutral, forward @ ..] = self.gear_ratios.as_slice() else {
            return invalid(format!(
                "gear_ratios needs reverse, neutral and at least one forward gear, got {} entries",
                self.gear_ratios.len()
            ));
        };
        if forward.is_empty() {
            return invalid("gear_ratios has no forward gear".to_string());
        }
        if forward.len() > i8::MAX as usize {
            return invalid(format!("gear_ratios has too many forward gears: {}", forward.len()));
        }
        if !(reverse.is_finite() && *reverse < 0.0) {
            return invalid(format!("reverse ratio must be negative, got {reverse}"));
        }
        if *neutral != 0.0 {
            return invalid(format!("neutral ratio must be 0, got {neutral}"));
        }
        if let Some((i, r)) = forward
            .iter()
            .enumerate()
            .find(|(_, r)| !(r.is_finite() && **r > 0.0))
        {
            return invalid(format!("forward gear {} ratio must be positive, got {r}", i + 1));
        }
        if !(self.differential_ratio.is_finite() && self.differential_ratio > 0.0) {
            return invalid(format!(
                "differential_ratio must be positive, got {}",
                self.differential_ratio
            ));
        }
        if !(self.wheel_radius.is_finite() && self.wheel_radius > 0.0) {
            return invalid(format!(
                "wheel_radius must be positive, got {}",
                self.wheel_radius
            ));
        }
        if !(self.rpm_min.is_finite() && self.rpm_max.is_finite())
            || self.rpm_min < 0.0
            || self.rpm_min >= self.rpm_max
        {
            return invalid(format!(
                "rpm range must satisfy 0 <= rpm_min < rpm_max, got {}..{}",
                self.rpm_min, self.rpm_max
            ));
        }

        for (name, params) in self.curves.named() {
            build_curve(name, params)?;
        }

        Ok(())
    }
}

/// Build one response curve and require it to be usable for x lookups.
pub(crate) fn build_curve(name: &'static str, params: &CurveParams) -> DrivetrainResult<CubicBezier> {
    let curve = CubicBezier::from_params(*params)
        .map_err(|source| DrivetrainError::Curve { name, source })?;
    if !curve.is_monotonic_x() {
        return Err(DrivetrainError::NonMonotonicCurve(name));
    }
    Ok(curve)
}

pub(crate) fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
