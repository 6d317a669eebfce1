//! Physical properties and reference scenarios of the g-force conversion
//!
//! Reference values come from evaluating the five-step chain directly in
//! IEEE-754 doubles.

use approx::assert_relative_eq;
use gforce_core::{compute_g_force, rpm_for_g_force, GForceError};

const RADII_CM: [f64; 6] = [0.5, 1.0, 5.0, 8.5, 10.0, 25.0];
const SPEEDS_RPM: [f64; 6] = [0.0, 60.0, 500.0, 3000.0, 4000.0, 15000.0];

#[test]
fn test_g_force_is_never_negative() {
    for radius in RADII_CM {
        for rpm in SPEEDS_RPM {
            let g = compute_g_force(radius, rpm).unwrap();
            assert!(g >= 0.0, "g={g} for radius={radius}, rpm={rpm}");
        }
    }
}

#[test]
fn test_g_force_increases_with_speed() {
    for radius in RADII_CM {
        let mut previous = compute_g_force(radius, 1.0).unwrap();
        for rpm in [10.0, 100.0, 1000.0, 10000.0, 100000.0] {
            let g = compute_g_force(radius, rpm).unwrap();
            assert!(g > previous, "radius={radius}: {g} <= {previous} at {rpm} rpm");
            previous = g;
        }
    }
}

#[test]
fn test_g_force_increases_with_radius() {
    // v² / R with v proportional to R leaves g proportional to R
    let mut previous = compute_g_force(RADII_CM[0], 3000.0).unwrap();
    for radius in &RADII_CM[1..] {
        let g = compute_g_force(*radius, 3000.0).unwrap();
        assert!(g > previous, "{g} <= {previous} at {radius} cm");
        previous = g;
    }

    let g5 = compute_g_force(5.0, 3000.0).unwrap();
    let g10 = compute_g_force(10.0, 3000.0).unwrap();
    assert_relative_eq!(g10 / g5, 2.0, max_relative = 1e-12);
}

#[test]
fn test_g_force_scales_with_square_of_speed() {
    let g1 = compute_g_force(10.0, 1000.0).unwrap();
    let g3 = compute_g_force(10.0, 3000.0).unwrap();
    assert_relative_eq!(g3 / g1, 9.0, max_relative = 1e-12);
}

#[test]
fn test_zero_speed_gives_zero_for_any_radius() {
    for radius in RADII_CM {
        assert_eq!(compute_g_force(radius, 0.0).unwrap(), 0.0);
    }
}

#[test]
fn test_reference_scenarios() {
    assert_eq!(compute_g_force(10.0, 3000.0).unwrap(), 1006.4195623469135);
    assert_relative_eq!(
        compute_g_force(8.5, 4000.0).unwrap(),
        1520.8117831020033,
        max_relative = 1e-12
    );
    assert_eq!(compute_g_force(1.0, 0.0).unwrap(), 0.0);
}

#[test]
fn test_rejected_scenarios() {
    assert!(matches!(
        compute_g_force(-5.0, 100.0),
        Err(GForceError::InvalidInput(_))
    ));
    assert!(matches!(
        compute_g_force(0.0, 100.0),
        Err(GForceError::DivisionByZero)
    ));
    assert!(matches!(
        compute_g_force(5.0, -100.0),
        Err(GForceError::InvalidInput(_))
    ));
}

#[test]
fn test_inverse_round_trip() {
    for radius in RADII_CM {
        for rpm in &SPEEDS_RPM[1..] {
            let g = compute_g_force(radius, *rpm).unwrap();
            let back = rpm_for_g_force(radius, g).unwrap();
            assert_relative_eq!(back, *rpm, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_calculator_is_shareable_across_threads() {
    let handles: Vec<_> = (1..=4_i32)
        .map(|i| std::thread::spawn(move || compute_g_force(10.0, 1000.0 * f64::from(i))))
        .collect();
    let results: Vec<f64> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(results[2], compute_g_force(10.0, 3000.0).unwrap());
}
