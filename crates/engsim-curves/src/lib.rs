//! Response Curves for engsim
//!
//! This crate provides the curve primitive behind every nonlinearity of the
//! drivetrain simulator: torque response, clutch engagement, braking force and
//! engine load.
//!
//! # Overview
//!
//! - **[`CubicBezier`]**: a 2D cubic Bezier from `(0, ay)` to `(1, by)`, with
//!   optional scaling of domain and range into engineering units.
//! - **[`SampleCache`]**: samples taken once at construction; lookups
//!   binary-search it and interpolate linearly.
//! - **[`interp`]**: `lerp` and its inverse, shared with the other crates.
//!
//! # Precision
//!
//! Lookups are approximate by construction. With the default sampling step of
//! 0.05 the error is bounded by the curvature within one 5% bracket, in
//! exchange for `O(log n)` evaluation with no iteration.
//!
//! # Example
//!
//! ```
//! use engsim_curves::CubicBezier;
//!
//! let curve = CubicBezier::new(0.33, 0.2, 0.66, 0.5)?;
//!
//! let y = curve.value_at(0.5);
//! let x = curve.inverse_at(y);
//! assert!((x - 0.5).abs() < 0.05);
//! # Ok::<(), engsim_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bezier;
pub mod cache;
pub mod error;
pub mod interp;

pub use bezier::{CubicBezier, CurveParams};
pub use cache::SampleCache;
pub use error::{CurveError, CurveResult};
pub use interp::{lerp, lerp_weight};
