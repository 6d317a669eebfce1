//! Interactive prompting over any reader/writer pair
//!
//! The binary wires this to stdin/stdout; tests drive it with in-memory
//! buffers.

use crate::calculator::{GForceCalculator, Measurement};
use crate::error::GForceError;
use crate::report;
use crate::units::{Centimeters, Rpm};
use std::io::{BufRead, Write};
use tracing::debug;

/// Question asked for the rotor radius
pub const RADIUS_QUESTION: &str = "What is the radius of centrifuge in cm? ";

/// Question asked for the rotor speed
pub const RPM_QUESTION: &str = "What rpm did you use? ";

/// Ask `question`, read one line and parse it as a number.
///
/// `field` names the value in error messages.
///
/// # Errors
/// [`GForceError::InvalidInput`] on end of input or text that is not a
/// number; [`GForceError::Io`] if the console fails.
pub fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    field: &str,
) -> Result<f64, GForceError> {
    writeln!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(GForceError::invalid(format!("no {field} was entered")));
    }
    parse_number(&line, field)
}

/// Parse user text as a number, ignoring surrounding whitespace.
///
/// # Errors
/// [`GForceError::InvalidInput`] quoting the text when it is not a number.
pub fn parse_number(text: &str, field: &str) -> Result<f64, GForceError> {
    let trimmed = text.trim();
    trimmed.parse::<f64>().map_err(|_| {
        GForceError::invalid(format!("{field} must be a number, got {trimmed:?}"))
    })
}

/// One interactive conversion: ask for whatever was not supplied up front,
/// compute, print the report.
pub struct Session<R, W> {
    input: R,
    output: W,
    calculator: GForceCalculator,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session reading answers from `input` and writing to `output`
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            calculator: GForceCalculator::new(),
        }
    }

    /// Use `preset` when given, otherwise prompt for the radius.
    ///
    /// # Errors
    /// See [`prompt_number`].
    pub fn radius(&mut self, preset: Option<f64>) -> Result<Centimeters, GForceError> {
        match preset {
            Some(value) => Ok(Centimeters::new(value)),
            None => prompt_number(&mut self.input, &mut self.output, RADIUS_QUESTION, "radius")
                .map(Centimeters::new),
        }
    }

    /// Use `preset` when given, otherwise prompt for the speed.
    ///
    /// # Errors
    /// See [`prompt_number`].
    pub fn rpm(&mut self, preset: Option<f64>) -> Result<Rpm, GForceError> {
        match preset {
            Some(value) => Ok(Rpm::new(value)),
            None => prompt_number(&mut self.input, &mut self.output, RPM_QUESTION, "rpm")
                .map(Rpm::new),
        }
    }

    /// Gather both inputs, convert and write the report.
    ///
    /// # Errors
    /// Any input, validation or console error; nothing is written after the
    /// first failure.
    pub fn run(
        &mut self,
        radius: Option<f64>,
        rpm: Option<f64>,
    ) -> Result<Measurement, GForceError> {
        let measurement = self.measure(radius, rpm)?;
        self.write(&report::render(&measurement))?;
        Ok(measurement)
    }

    /// Gather both inputs and convert, without writing the report.
    ///
    /// # Errors
    /// Any input, validation or console error.
    pub fn measure(
        &mut self,
        radius: Option<f64>,
        rpm: Option<f64>,
    ) -> Result<Measurement, GForceError> {
        let radius = self.radius(radius)?;
        let rpm = self.rpm(rpm)?;
        debug!("Session inputs: {} and {}", radius, rpm);
        self.calculator.compute(radius, rpm)
    }

    /// Write extra text after the report.
    ///
    /// # Errors
    /// [`GForceError::Io`] if the console fails.
    pub fn write(&mut self, text: &str) -> Result<(), GForceError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
