//! Error type shared by the calculator and the console session

use std::io;

/// Errors that can occur while converting a centrifuge setting
#[derive(Debug)]
pub enum GForceError {
    /// Non-numeric or out-of-domain input
    InvalidInput(String),
    /// Radius equal to zero, which would divide by zero in `v² / R`
    DivisionByZero,
    /// The console could not be read or written
    Io(io::Error),
}

impl GForceError {
    /// Build a [`GForceError::InvalidInput`] from any message
    pub fn invalid(msg: impl Into<String>) -> Self {
        GForceError::InvalidInput(msg.into())
    }
}

impl std::fmt::Display for GForceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GForceError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            GForceError::DivisionByZero => write!(
                f,
                "Division by zero: radius must be positive, a zero radius divides by zero"
            ),
            GForceError::Io(err) => write!(f, "Console I/O failed: {err}"),
        }
    }
}

impl std::error::Error for GForceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GForceError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GForceError {
    fn from(err: io::Error) -> Self {
        GForceError::Io(err)
    }
}
