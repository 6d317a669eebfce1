//! Text rendering of conversion results, independent of where it is displayed

use crate::calculator::{Breakdown, Measurement};
use crate::units::{Centimeters, GForce, Rpm};
use std::fmt::Write;

/// Result line: speed with no decimals, g-force with one.
pub fn format_message(rpm: Rpm, g_force: GForce) -> String {
    format!("The g-force at {:.0} rpm is {:.1} g", *rpm, *g_force)
}

/// Result line followed by one blank line, as printed on the console.
pub fn render(measurement: &Measurement) -> String {
    format!(
        "{}\n\n",
        format_message(measurement.rpm, measurement.g_force)
    )
}

/// Answer line for the inverse conversion.
pub fn format_required_rpm(radius: Centimeters, target: GForce, rpm: Rpm) -> String {
    format!("{} at {} requires {}", target, radius, rpm)
}

/// One line per step of the conversion chain.
pub fn format_breakdown(breakdown: &Breakdown) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "  radius:       {}", breakdown.radius);
    let _ = writeln!(out, "  revolutions:  {}", breakdown.revolutions);
    let _ = writeln!(out, "  velocity:     {}", breakdown.velocity);
    let _ = writeln!(out, "  acceleration: {}", breakdown.acceleration);
    let _ = writeln!(out, "  g-force:      {}", breakdown.g_force);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::GForceCalculator;

    #[test]
    fn test_message_rounding() {
        assert_eq!(
            format_message(Rpm::new(3000.0), GForce::new(1006.4195623469135)),
            "The g-force at 3000 rpm is 1006.4 g"
        );
        assert_eq!(
            format_message(Rpm::new(60.0), GForce::new(0.04025678249387654)),
            "The g-force at 60 rpm is 0.0 g"
        );
        assert_eq!(
            format_message(Rpm::new(1499.7), GForce::new(12.96)),
            "The g-force at 1500 rpm is 13.0 g"
        );
    }

    #[test]
    fn test_render_ends_with_blank_line() {
        let m = GForceCalculator::new()
            .compute(Centimeters::new(8.5), Rpm::new(4000.0))
            .unwrap();
        assert_eq!(render(&m), "The g-force at 4000 rpm is 1520.8 g\n\n");
    }

    #[test]
    fn test_required_rpm_line() {
        let line = format_required_rpm(
            Centimeters::new(10.0),
            GForce::new(1006.4195623469135),
            Rpm::new(3000.0000001),
        );
        assert_eq!(line, "1006.4 g at 10 cm requires 3000 rpm");
    }

    #[test]
    fn test_breakdown_lists_every_step() {
        let b = GForceCalculator::new()
            .breakdown(Centimeters::new(10.0), Rpm::new(3000.0))
            .unwrap();
        let text = format_breakdown(&b);
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("0.1000 m"));
        assert!(text.contains("50.000 rev/s"));
        assert!(text.contains("31.416 m/s"));
        assert!(text.contains("9869.6 m/s²"));
        assert!(text.contains("1006.4 g"));
    }
}
