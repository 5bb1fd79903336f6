//! Property-Based Tests for the Drivetrain
//!
//! Gear state machine rules and per-tick numeric sanity across random input
//! sequences.

use engsim_drivetrain::{
    DriverInput, Drivetrain, DrivetrainConfig, DrivetrainState, Gear, ShiftIntent,
};

fn drivetrain() -> Result<Drivetrain, engsim_drivetrain::DrivetrainError> {
    Drivetrain::new(DrivetrainConfig::default())
}

fn state(gear: i8, clutch: f64) -> DrivetrainState {
    DrivetrainState {
        gear: Gear::new(gear),
        crankshaft_rpm: 2000.0,
        drivetrain_rpm: 1500.0,
        velocity: 40.0,
        throttle: 0.3,
        clutch,
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn shift_strategy() -> impl Strategy<Value = Option<ShiftIntent>> {
        prop_oneof![
            Just(None),
            Just(Some(ShiftIntent::Up)),
            Just(Some(ShiftIntent::Down)),
        ]
    }

    proptest! {
        #[test]
        fn engaged_clutch_blocks_gear_changes(
            gear in -1i8..=5,
            clutch in 0.05f64..=1.0,
            target in -10i8..=10,
        ) {
            let d = drivetrain().map_err(|e| TestCaseError::fail(e.to_string()))?;
            let before = state(gear, clutch);
            let after = d.change_gear(&before, Gear::new(target));
            prop_assert_eq!(after, before);
        }

        #[test]
        fn disengaged_clutch_moves_one_step(
            gear in -1i8..=5,
            clutch in 0.0f64..0.05,
            target in -10i8..=10,
        ) {
            let d = drivetrain().map_err(|e| TestCaseError::fail(e.to_string()))?;
            let before = state(gear, clutch);
            let after = d.change_gear(&before, Gear::new(target));

            let moved = i16::from(after.gear.position()) - i16::from(gear);
            prop_assert!(moved.abs() <= 1);
            prop_assert!(after.gear >= Gear::REVERSE && after.gear <= d.top_gear());
            if target > gear && gear < 5 {
                prop_assert_eq!(moved, 1);
            } else if target < gear && gear > -1 {
                prop_assert_eq!(moved, -1);
            } else {
                prop_assert_eq!(moved, 0);
            }
        }

        #[test]
        fn n_steps_need_n_calls(from in -1i8..=5, to in -1i8..=5) {
            let d = drivetrain().map_err(|e| TestCaseError::fail(e.to_string()))?;
            let distance = (i16::from(to) - i16::from(from)).unsigned_abs();
            let mut s = state(from, 0.0);
            for _ in 0..distance.saturating_sub(1) {
                s = d.change_gear(&s, Gear::new(to));
            }
            if distance > 0 {
                prop_assert_ne!(s.gear, Gear::new(to));
                s = d.change_gear(&s, Gear::new(to));
            }
            prop_assert_eq!(s.gear, Gear::new(to));
        }

        #[test]
        fn neutral_output_is_zero(rpm in -10_000.0f64..10_000.0) {
            let d = drivetrain().map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert!(d.output_rpm(Gear::NEUTRAL, rpm).abs() < f64::EPSILON);
        }

        #[test]
        fn neutral_coasting_follows_closed_form(v0 in 0.0f64..300.0, ticks in 1usize..400) {
            let d = drivetrain().map_err(|e| TestCaseError::fail(e.to_string()))?;
            let mut s = DrivetrainState {
                gear: Gear::NEUTRAL,
                velocity: v0,
                ..d.initial_state()
            };
            let input = DriverInput::new(0.0, 1.0, false);
            for _ in 0..ticks {
                s = d.update(&s, input);
            }
            let exponent = i32::try_from(ticks).map_err(|e| TestCaseError::fail(e.to_string()))?;
            let expected = v0 * 0.999f64.powi(exponent);
            prop_assert!((s.velocity - expected).abs() <= 1e-9 * v0.max(1.0));
        }

        #[test]
        fn random_drives_stay_finite_and_in_range(
            inputs in proptest::collection::vec(
                (0.0f64..=1.0, 0.0f64..=1.0, any::<bool>(), shift_strategy()),
                1..300,
            ),
        ) {
            let d = drivetrain().map_err(|e| TestCaseError::fail(e.to_string()))?;
            let mut s = d.initial_state();
            for (throttle, pedal, brake, shift) in inputs {
                s = d.update(&s, DriverInput::new(throttle, pedal, brake));
                if let Some(intent) = shift {
                    s = d.shift(&s, intent);
                }
                prop_assert!(s.crankshaft_rpm.is_finite());
                prop_assert!(s.drivetrain_rpm.is_finite());
                prop_assert!(s.velocity.is_finite());
                prop_assert!((0.0..=1.0).contains(&s.clutch));
                prop_assert!(s.gear >= Gear::REVERSE && s.gear <= d.top_gear());

                let gauges = d.gauges(&s);
                prop_assert!((0.0..=1.0).contains(&gauges.rpm));
                prop_assert!((0.0..=1.0).contains(&gauges.velocity));
            }
        }

        #[test]
        fn updates_are_deterministic(
            inputs in proptest::collection::vec((0.0f64..=1.0, 0.0f64..=1.0, any::<bool>()), 1..100),
        ) {
            let d = drivetrain().map_err(|e| TestCaseError::fail(e.to_string()))?;
            let mut a = d.initial_state();
            let mut b = d.initial_state();
            for (throttle, pedal, brake) in inputs {
                let input = DriverInput::new(throttle, pedal, brake);
                a = d.update(&a, input);
                b = d.update(&b, input);
            }
            prop_assert_eq!(a, b);
        }
    }
}
