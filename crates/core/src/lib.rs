//! Centrifuge g-force conversion
//!
//! Converts a rotor radius (cm) and speed (rpm) into relative centrifugal
//! force, expressed as a multiple of standard gravity.
//!
//! ## Layout
//! - [`calculator`]: the pure conversion and its inverse
//! - [`units`]: typed quantities for each step of the chain
//! - [`constants`]: π, standard gravity and unit factors
//! - [`report`]: result text, decoupled from display
//! - [`console`]: prompting over any reader/writer

pub mod calculator;
pub mod console;
pub mod constants;
pub mod error;
pub mod report;
pub mod units;

pub use calculator::{compute_g_force, rpm_for_g_force, Breakdown, GForceCalculator, Measurement};
pub use console::Session;
pub use error::GForceError;
pub use units::{Centimeters, GForce, Rpm};
