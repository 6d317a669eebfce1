//! Physical constants and unit factors used by the conversion chain.

/// Archimedes' constant, taken from the standard library
pub use std::f64::consts::PI;

/// Standard gravitational acceleration g0 (m/s²), exact by definition
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Centimeters to meters
pub const METERS_PER_CENTIMETER: f64 = 0.01;

/// Minutes to seconds
pub const SECONDS_PER_MINUTE: f64 = 60.0;
