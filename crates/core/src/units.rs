//! Semantic unit types for the centrifuge conversion chain
//!
//! Newtype wrappers keep centimeters apart from meters and revolutions per
//! minute apart from revolutions per second, so a step of the formula cannot
//! silently consume the wrong unit.
//!
//! # Design Philosophy
//! - Every quantity is an `f64` so the chain matches IEEE-754 double results exactly
//! - Deref to the raw value for arithmetic inside the formula
//! - Total ordering via `Ord` (NaN sorts above all other values)
//! - Explicit conversion methods between related units
//! - Serde support, serialized as the bare number
//!
//! # Usage
//! ```
//! use gforce_core::units::{Centimeters, Rpm};
//!
//! let radius = Centimeters::new(10.0);
//! assert_eq!(*radius.to_meters(), 0.1);
//!
//! let speed = Rpm::new(3000.0);
//! assert_eq!(*speed.to_revolutions_per_second(), 50.0);
//! ```

use crate::constants::{METERS_PER_CENTIMETER, SECONDS_PER_MINUTE, STANDARD_GRAVITY};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// Compare f64 values with total ordering
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// LENGTH TYPES
// ============================================================================

/// Rotor radius in centimeters, as entered on the bench
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Centimeters(f64);

impl Eq for Centimeters {}

impl PartialOrd for Centimeters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Centimeters {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Centimeters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Centimeters {
    /// Create a new length in centimeters. Sign and finiteness are checked by
    /// the calculator, not here.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Centimeters(value)
    }

    /// Convert to meters (`cm * 0.01`)
    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * METERS_PER_CENTIMETER)
    }
}

impl fmt::Display for Centimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cm", self.0)
    }
}

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Meters(f64);

impl Eq for Meters {}

impl PartialOrd for Meters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Meters {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Meters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} m", self.0)
    }
}

// ============================================================================
// ROTATIONAL SPEED TYPES
// ============================================================================

/// Rotational speed in revolutions per minute
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Rpm(f64);

impl Eq for Rpm {}

impl PartialOrd for Rpm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rpm {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Rpm {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Rpm {
    /// Create a new rotational speed in rpm
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Rpm(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to revolutions per second (`rpm / 60`)
    #[inline]
    #[must_use]
    pub fn to_revolutions_per_second(self) -> RevolutionsPerSecond {
        RevolutionsPerSecond(self.0 / SECONDS_PER_MINUTE)
    }
}

impl fmt::Display for Rpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} rpm", self.0)
    }
}

/// Rotational speed in revolutions per second (Hz)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct RevolutionsPerSecond(f64);

impl Deref for RevolutionsPerSecond {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl RevolutionsPerSecond {
    /// Create a new rotational speed in revolutions per second
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        RevolutionsPerSecond(value)
    }

    /// Convert to revolutions per minute
    #[inline]
    #[must_use]
    pub fn to_rpm(self) -> Rpm {
        Rpm(self.0 * SECONDS_PER_MINUTE)
    }
}

impl fmt::Display for RevolutionsPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} rev/s", self.0)
    }
}

// ============================================================================
// KINEMATIC TYPES
// ============================================================================

/// Tangential velocity in meters per second
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MetersPerSecond(f64);

impl Deref for MetersPerSecond {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MetersPerSecond {
    /// Create a new velocity in m/s
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MetersPerSecond(value)
    }
}

impl fmt::Display for MetersPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} m/s", self.0)
    }
}

/// Acceleration in meters per second squared
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MetersPerSecondSquared(f64);

impl Deref for MetersPerSecondSquared {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MetersPerSecondSquared {
    /// Create a new acceleration in m/s²
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MetersPerSecondSquared(value)
    }

    /// Express as a multiple of standard gravity
    #[inline]
    #[must_use]
    pub fn to_g_force(self) -> GForce {
        GForce(self.0 / STANDARD_GRAVITY)
    }
}

impl fmt::Display for MetersPerSecondSquared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} m/s²", self.0)
    }
}

/// Relative centrifugal force as a multiple of standard gravity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct GForce(f64);

impl Eq for GForce {}

impl PartialOrd for GForce {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GForce {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for GForce {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl GForce {
    /// Create a new g-force ratio
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        GForce(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert back to an absolute acceleration
    #[inline]
    #[must_use]
    pub fn to_acceleration(self) -> MetersPerSecondSquared {
        MetersPerSecondSquared(self.0 * STANDARD_GRAVITY)
    }
}

impl fmt::Display for GForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} g", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centimeters_to_meters() {
        let r = Centimeters(8.5).to_meters();
        assert!((r.0 - 0.085).abs() < 1e-12);
    }

    #[test]
    fn test_rpm_to_revolutions_per_second() {
        let rps = Rpm(3000.0).to_revolutions_per_second();
        assert_eq!(rps.0, 50.0);
        assert_eq!(rps.to_rpm(), Rpm(3000.0));
    }

    #[test]
    fn test_standard_gravity_is_one_g() {
        let g = MetersPerSecondSquared(9.80665).to_g_force();
        assert_eq!(g, GForce(1.0));
        assert_eq!(*GForce(2.0).to_acceleration(), 2.0 * 9.80665);
    }

    #[test]
    fn test_total_ordering_puts_nan_last() {
        let mut values = vec![GForce(f64::NAN), GForce(3.0), GForce(1.0)];
        values.sort();
        assert_eq!(values[0], GForce(1.0));
        assert_eq!(values[1], GForce(3.0));
        assert!(values[2].is_nan());
    }

    #[test]
    fn test_display_suffixes() {
        assert_eq!(Centimeters(10.0).to_string(), "10 cm");
        assert_eq!(Rpm(2999.6).to_string(), "3000 rpm");
        assert_eq!(GForce(1006.4195).to_string(), "1006.4 g");
        assert_eq!(MetersPerSecond(31.4159265).to_string(), "31.416 m/s");
    }
}
