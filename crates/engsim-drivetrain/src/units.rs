//! Unit conversions between shaft speeds and road speed.

use std::f64::consts::PI;

/// Revolutions per minute to radians per second.
#[inline]
pub fn rpm_to_rad_per_sec(rpm: f64) -> f64 {
    (rpm / 60.0) * (2.0 * PI)
}

/// Radians per second to revolutions per minute.
#[inline]
pub fn rad_per_sec_to_rpm(rad_per_sec: f64) -> f64 {
    (rad_per_sec * 60.0) / (2.0 * PI)
}

/// Kilometres per hour to metres per second.
#[inline]
pub fn kph_to_mps(kph: f64) -> f64 {
    (kph * 1000.0) / 3600.0
}

/// Metres per second to kilometres per hour.
#[inline]
pub fn mps_to_kph(mps: f64) -> f64 {
    (mps * 3600.0) / 1000.0
}
