//! Relative centrifugal force from rotor radius and speed
//!
//! The chain is evaluated step by step in the same order as the bench
//! formula, so results are bit-identical to a hand calculation in doubles:
//!
//! 1. `R = radius_cm * 0.01`
//! 2. `n = rpm / 60`
//! 3. `v = 2 * π * R * n`
//! 4. `a = v² / R`
//! 5. `g = a / g0`
//!
//! # Usage
//! ```
//! use gforce_core::calculator::compute_g_force;
//!
//! let g = compute_g_force(10.0, 3000.0).unwrap();
//! assert!((g - 1006.42).abs() < 0.01);
//! ```

use crate::constants::PI;
use crate::error::GForceError;
use crate::units::{
    Centimeters, GForce, Meters, MetersPerSecond, MetersPerSecondSquared, RevolutionsPerSecond,
    Rpm,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// One converted centrifuge setting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Rotor radius as entered
    pub radius: Centimeters,
    /// Rotor speed as entered
    pub rpm: Rpm,
    /// Resulting relative centrifugal force
    pub g_force: GForce,
}

/// Every intermediate quantity of the conversion chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown {
    /// Step 1: radius in meters
    pub radius: Meters,
    /// Step 2: revolutions per second
    pub revolutions: RevolutionsPerSecond,
    /// Step 3: tangential velocity at the rotor tip
    pub velocity: MetersPerSecond,
    /// Step 4: centripetal acceleration
    pub acceleration: MetersPerSecondSquared,
    /// Step 5: acceleration over standard gravity
    pub g_force: GForce,
}

/// Stateless g-force converter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GForceCalculator;

impl GForceCalculator {
    /// Create a calculator
    pub const fn new() -> Self {
        GForceCalculator
    }

    /// Convert a radius and speed into g-force.
    ///
    /// # Errors
    /// [`GForceError::DivisionByZero`] for a zero radius (or one too small to
    /// survive conversion to meters), and [`GForceError::InvalidInput`] for a
    /// negative radius, a negative speed, any non-finite value or a result
    /// too large to represent. Both inputs are checked for finiteness before
    /// either is checked for sign.
    pub fn compute(&self, radius: Centimeters, rpm: Rpm) -> Result<Measurement, GForceError> {
        let breakdown = self.breakdown(radius, rpm)?;
        debug!("Computed {} at {} and {}", breakdown.g_force, rpm, radius);
        Ok(Measurement {
            radius,
            rpm,
            g_force: breakdown.g_force,
        })
    }

    /// Run the conversion and keep every intermediate step.
    ///
    /// # Errors
    /// Same conditions as [`GForceCalculator::compute`].
    #[allow(clippy::unused_self)]
    pub fn breakdown(&self, radius: Centimeters, rpm: Rpm) -> Result<Breakdown, GForceError> {
        ensure_finite("radius", *radius)?;
        ensure_finite("rpm", *rpm)?;
        let radius_m = validate_radius(radius)?;
        validate_rpm(rpm)?;

        let revolutions = rpm.to_revolutions_per_second();
        let velocity = MetersPerSecond::new(2.0 * PI * *radius_m * *revolutions);
        let acceleration = MetersPerSecondSquared::new(velocity.powi(2) / *radius_m);
        let g_force = acceleration.to_g_force();
        ensure_in_range("g-force", *g_force)?;
        trace!(
            "R = {}, n = {}, v = {}, a = {}",
            radius_m,
            revolutions,
            velocity,
            acceleration
        );

        Ok(Breakdown {
            radius: radius_m,
            revolutions,
            velocity,
            acceleration,
            g_force,
        })
    }

    /// Speed needed to reach `target` at the given radius.
    ///
    /// Inverts `a = 4π²·R·n²`, so `n = sqrt(a / R) / 2π`.
    ///
    /// # Errors
    /// The radius rules of [`GForceCalculator::compute`] apply;
    /// a negative or non-finite target is [`GForceError::InvalidInput`].
    #[allow(clippy::unused_self)]
    pub fn rpm_for(&self, radius: Centimeters, target: GForce) -> Result<Rpm, GForceError> {
        ensure_finite("radius", *radius)?;
        ensure_finite("g-force", *target)?;
        let radius_m = validate_radius(radius)?;
        if *target < 0.0 {
            return Err(reject(format!(
                "g-force must not be negative, got {}",
                *target
            )));
        }

        let acceleration = target.to_acceleration();
        let revolutions =
            RevolutionsPerSecond::new((*acceleration / *radius_m).sqrt() / (2.0 * PI));
        let rpm = revolutions.to_rpm();
        ensure_in_range("rpm", *rpm)?;
        debug!("{} at {} requires {}", target, radius, rpm);
        Ok(rpm)
    }
}

/// Convert a radius in centimeters and a speed in rpm into g-force.
///
/// # Errors
/// [`GForceError::DivisionByZero`] when `radius_cm` is zero in meters;
/// [`GForceError::InvalidInput`] when either value is negative or not finite,
/// or the g-force overflows.
pub fn compute_g_force(radius_cm: f64, rpm: f64) -> Result<f64, GForceError> {
    GForceCalculator
        .compute(Centimeters::new(radius_cm), Rpm::new(rpm))
        .map(|m| m.g_force.value())
}

/// Rotor speed in rpm that produces `g_force` at `radius_cm`.
///
/// # Errors
/// Same radius rules as [`compute_g_force`]; a negative or non-finite
/// `g_force` is [`GForceError::InvalidInput`].
pub fn rpm_for_g_force(radius_cm: f64, g_force: f64) -> Result<f64, GForceError> {
    GForceCalculator
        .rpm_for(Centimeters::new(radius_cm), GForce::new(g_force))
        .map(Rpm::value)
}

fn ensure_finite(field: &str, value: f64) -> Result<(), GForceError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(reject(format!("{field} must be a finite number, got {value}")))
    }
}

fn ensure_in_range(field: &str, value: f64) -> Result<(), GForceError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(reject(format!("{field} result out of range")))
    }
}

/// Domain checks on a finite radius, returning it in meters.
fn validate_radius(radius: Centimeters) -> Result<Meters, GForceError> {
    // Matches -0.0 as well
    if *radius == 0.0 {
        debug!("Rejected zero radius");
        return Err(GForceError::DivisionByZero);
    }
    if *radius < 0.0 {
        return Err(reject(format!("radius must be positive, got {}", radius)));
    }
    let radius_m = radius.to_meters();
    if *radius_m == 0.0 {
        debug!("Radius {} underflows to zero meters", radius);
        return Err(GForceError::DivisionByZero);
    }
    Ok(radius_m)
}

fn validate_rpm(rpm: Rpm) -> Result<(), GForceError> {
    if *rpm < 0.0 {
        return Err(reject(format!("rpm must not be negative, got {}", *rpm)));
    }
    Ok(())
}

fn reject(msg: String) -> GForceError {
    debug!("Rejected input: {}", msg);
    GForceError::InvalidInput(msg)
}
