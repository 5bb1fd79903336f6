//! The drivetrain model: four response curves driving one-pole filters.
//!
//! Instead of integrating torque and force, each tick eases the crankshaft
//! toward a throttle-dependent target at a rate read off the torque curve,
//! then couples it to the wheels through the clutch. The result is a
//! responsive, game-like feel rather than a physical simulation.

use engsim_curves::{CubicBezier, lerp};
use engsim_filters::{decay, one_pole};
use tracing::{debug, trace};

use crate::config::{DrivetrainConfig, build_curve};
use crate::error::DrivetrainResult;
use crate::gear::{Gear, ShiftIntent};
use crate::state::{DriverInput, DrivetrainState, GaugeReadout};
use crate::units::{kph_to_mps, mps_to_kph, rad_per_sec_to_rpm, rpm_to_rad_per_sec};

/// Crankshaft easing rate when the engine is above its target.
pub const ENGINE_DECEL_RATE: f64 = 0.03;
/// Share of torque left to spin up a free-revving engine (neutral or clutch out).
pub const FREE_REV_TORQUE: f64 = 0.15;
/// Crankshaft easing toward the clutch blend while driving.
pub const DRIVE_CRANK_EASE: f64 = 0.1;
/// Drivetrain easing toward the clutched crankshaft while driving.
pub const DRIVE_SHAFT_EASE: f64 = 0.2;
/// Crankshaft easing toward the wheels while slowing down.
pub const ENGINE_BRAKE_EASE: f64 = 0.15;
/// Per-tick velocity factor with the brake held.
pub const BRAKE_DECAY: f64 = 0.96;
/// Per-tick velocity factor when rolling in neutral.
pub const COAST_DECAY: f64 = 0.999;
/// Rolling friction with no engine braking at all.
pub const MIN_DRAG_DECAY: f64 = 0.99999;
/// Rolling friction with full engine braking.
pub const MAX_DRAG_DECAY: f64 = 0.99;
/// Engine-braking strength with the clutch fully out.
pub const DECOUPLED_ENGINE_BRAKE: f64 = 0.05;

/// A configured vehicle: gearbox, wheel, engine range and response curves.
///
/// Construct once per vehicle. All methods take `&self`; per-tick state is
/// passed in and returned as a [`DrivetrainState`] value.
///
/// # Example
///
/// ```
/// use engsim_drivetrain::{Drivetrain, DrivetrainConfig, DriverInput};
///
/// let drivetrain = Drivetrain::new(DrivetrainConfig::default())?;
/// let mut state = drivetrain.initial_state();
/// for _ in 0..100 {
///     state = drivetrain.update(&state, DriverInput::new(1.0, 0.0, false));
/// }
/// assert!(state.velocity > 0.0);
/// # Ok::<(), engsim_drivetrain::DrivetrainError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Drivetrain {
    config: DrivetrainConfig,
    torque: CubicBezier,
    clutch: CubicBezier,
    brake_force: CubicBezier,
    load: CubicBezier,
    top_gear: Gear,
    max_speed: f64,
}

impl Drivetrain {
    /// Validate `config` and build its curves.
    pub fn new(config: DrivetrainConfig) -> DrivetrainResult<Self> {
        config.validate()?;

        let curves = config.curves;
        let torque = build_curve("torque", &curves.torque)?;
        let clutch = build_curve("clutch", &curves.clutch)?;
        let brake_force = build_curve("brake_force", &curves.brake_force)?;
        let load = build_curve("load", &curves.load)?;

        let top_gear = config.top_gear();
        let top_ratio = config.ratio(top_gear).unwrap_or(1.0);

        let mut drivetrain = Self {
            config,
            torque,
            clutch,
            brake_force,
            load,
            top_gear,
            max_speed: 0.0,
        };
        drivetrain.max_speed = drivetrain.speed_from_rpm(
            drivetrain.config.rpm_max / top_ratio / drivetrain.config.differential_ratio,
        );

        debug!(
            "Drivetrain ready: {} forward gears, {}..{} rpm, top speed {:.1} km/h",
            top_gear.position(),
            drivetrain.config.rpm_min,
            drivetrain.config.rpm_max,
            drivetrain.max_speed
        );

        Ok(drivetrain)
    }

    pub fn config(&self) -> &DrivetrainConfig {
        &self.config
    }

    /// Highest forward gear.
    pub fn top_gear(&self) -> Gear {
        self.top_gear
    }

    /// Road speed at `rpm_max` in top gear, in km/h.
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// State of a vehicle at rest in first gear with the engine idling.
    pub fn initial_state(&self) -> DrivetrainState {
        DrivetrainState {
            gear: Gear::FIRST,
            crankshaft_rpm: self.config.rpm_min,
            drivetrain_rpm: 0.0,
            velocity: 0.0,
            throttle: 0.0,
            clutch: 0.0,
        }
    }

    /// Ratio for `gear`; a gear outside the gearbox reads as 0 like neutral.
    pub fn gear_ratio(&self, gear: Gear) -> f64 {
        self.config.ratio(gear).unwrap_or(0.0)
    }

    /// Wheel RPM produced by `rpm` at the gearbox input. Exactly 0 in neutral.
    pub fn output_rpm(&self, gear: Gear, rpm: f64) -> f64 {
        let ratio = self.gear_ratio(gear);
        if ratio.abs() < f64::EPSILON {
            0.0
        } else {
            rpm / (ratio * self.config.differential_ratio)
        }
    }

    /// Road speed in km/h for a wheel turning at `wheel_rpm`.
    pub fn speed_from_rpm(&self, wheel_rpm: f64) -> f64 {
        mps_to_kph(rpm_to_rad_per_sec(wheel_rpm) * self.config.wheel_radius)
    }

    /// Gearbox input RPM that produces `kph` in `gear`.
    pub fn rpm_from_speed(&self, gear: Gear, kph: f64) -> f64 {
        let wheel = rad_per_sec_to_rpm(kph_to_mps(kph) / self.config.wheel_radius);
        wheel * self.gear_ratio(gear) * self.config.differential_ratio
    }

    /// Move one gear toward `target`, if the clutch allows it.
    ///
    /// With the clutch engaged at or above the disengage threshold the state
    /// comes back unchanged. Otherwise the gear moves exactly one step toward
    /// `target`, never leaving `[R, top]`.
    pub fn change_gear(&self, state: &DrivetrainState, target: Gear) -> DrivetrainState {
        if !state.is_clutch_disengaged() {
            trace!(
                "Shift to {} refused: clutch engagement {:.3}",
                target, state.clutch
            );
            return *state;
        }

        let gear = state.gear.step_toward(target, self.top_gear);
        if gear != state.gear {
            debug!("Gear change {} -> {} (requested {})", state.gear, gear, target);
        }

        DrivetrainState { gear, ..*state }
    }

    /// Apply a discrete up/down shift event.
    pub fn shift(&self, state: &DrivetrainState, intent: ShiftIntent) -> DrivetrainState {
        self.change_gear(state, intent.target_from(state.gear))
    }

    /// Advance one fixed tick.
    pub fn update(&self, state: &DrivetrainState, input: DriverInput) -> DrivetrainState {
        let input = input.clamped();
        let rpm_min = self.config.rpm_min;
        let rpm_max = self.config.rpm_max;
        let gear = state.gear;

        let clutch = (1.0 - self.clutch.value_at(input.clutch_pedal)).clamp(0.0, 1.0);
        let target_rpm = lerp(rpm_min, rpm_max, input.throttle);

        let rate = if target_rpm > state.crankshaft_rpm {
            let normalized = state.crankshaft_rpm / rpm_max;
            let available = if gear.is_neutral() {
                FREE_REV_TORQUE
            } else {
                lerp(FREE_REV_TORQUE, 0.0, self.load.value_at(normalized) * clutch)
            };
            self.torque.value_at(normalized) * available
        } else {
            ENGINE_DECEL_RATE
        };

        let crank = one_pole(state.crankshaft_rpm, target_rpm, rate);
        let drivetrain_target = self.rpm_from_speed(gear, state.velocity);

        let next = if gear.is_neutral() {
            let velocity = decay(
                state.velocity,
                if input.brake { BRAKE_DECAY } else { COAST_DECAY },
            );
            DrivetrainState {
                crankshaft_rpm: crank,
                drivetrain_rpm: self.rpm_from_speed(gear, velocity),
                velocity,
                ..*state
            }
        } else if crank * clutch >= drivetrain_target && !input.brake {
            let blend = lerp(crank, drivetrain_target, clutch);
            let crankshaft_rpm = one_pole(crank, blend, DRIVE_CRANK_EASE);
            let drivetrain_rpm =
                one_pole(state.drivetrain_rpm, crankshaft_rpm * clutch, DRIVE_SHAFT_EASE);
            DrivetrainState {
                crankshaft_rpm,
                drivetrain_rpm,
                velocity: self.speed_from_rpm(self.output_rpm(gear, drivetrain_rpm)),
                ..*state
            }
        } else {
            let factor = if input.brake {
                BRAKE_DECAY
            } else {
                let engine_brake = lerp(
                    DECOUPLED_ENGINE_BRAKE,
                    self.brake_force.value_at(crank / rpm_max),
                    clutch,
                );
                lerp(MIN_DRAG_DECAY, MAX_DRAG_DECAY, engine_brake)
            };
            let drivetrain_rpm = decay(drivetrain_target, factor);
            let crankshaft_rpm =
                one_pole(crank, lerp(crank, drivetrain_target, clutch), ENGINE_BRAKE_EASE);
            DrivetrainState {
                crankshaft_rpm,
                drivetrain_rpm,
                velocity: self.speed_from_rpm(self.output_rpm(gear, drivetrain_rpm)),
                ..*state
            }
        };

        let next = DrivetrainState {
            throttle: input.throttle,
            clutch,
            ..next
        };

        trace!(
            gear = %next.gear,
            crankshaft_rpm = next.crankshaft_rpm,
            drivetrain_rpm = next.drivetrain_rpm,
            velocity = next.velocity,
            "tick"
        );

        next
    }

    /// Normalized gauge positions for `state`.
    pub fn gauges(&self, state: &DrivetrainState) -> GaugeReadout {
        let velocity = if self.max_speed > 0.0 {
            (state.velocity.abs() / self.max_speed).clamp(0.0, 1.0)
        } else {
            0.0
        };
        GaugeReadout {
            rpm: (state.crankshaft_rpm / self.config.rpm_max).clamp(0.0, 1.0),
            velocity,
        }
    }
}
