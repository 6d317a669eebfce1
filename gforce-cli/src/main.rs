//! Centrifuge g-force calculator
//!
//! Asks for the rotor radius and speed (unless given as flags) and prints
//! the relative centrifugal force.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package gforce-cli
//! cargo run --package gforce-cli -- --radius 8.5 --rpm 4000
//! cargo run --package gforce-cli -- --radius 10 --target-g 1000
//! ```

use clap::Parser;
use gforce_core::{report, GForce, GForceCalculator, GForceError, Session};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Convert centrifuge rpm and rotor radius to g-force
#[derive(Parser, Debug)]
#[command(name = "gforce")]
#[command(about = "Centrifuge rpm to g-force converter", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Rotor radius in cm (prompted for when omitted)
    #[arg(short, long)]
    radius: Option<f64>,

    /// Rotor speed in rpm (prompted for when omitted)
    #[arg(short = 's', long)]
    rpm: Option<f64>,

    /// Solve for the rpm that reaches this g-force instead
    #[arg(short = 'g', long, conflicts_with_all = ["rpm", "json", "explain"])]
    target_g: Option<f64>,

    /// Also print each step of the conversion
    #[arg(long)]
    explain: bool,

    /// Print the measurement as JSON
    #[arg(long)]
    json: bool,

    /// Log debug output to stderr (ignored when `RUST_LOG` is set)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    let status = report_outcome(&run(&args, &mut session), &mut io::stderr());
    ExitCode::from(status)
}

/// Print a failed run as `error: <message>` and pick the exit status.
fn report_outcome<E: Write>(result: &Result<(), GForceError>, stderr: &mut E) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            // Nothing left to report to if stderr is gone
            let _ = writeln!(stderr, "error: {err}");
            1
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run<R: BufRead, W: Write>(args: &Args, session: &mut Session<R, W>) -> Result<(), GForceError> {
    if let Some(target) = args.target_g {
        let radius = session.radius(args.radius)?;
        let target = GForce::new(target);
        let rpm = GForceCalculator::new().rpm_for(radius, target)?;
        return session.write(&format!(
            "{}\n\n",
            report::format_required_rpm(radius, target, rpm)
        ));
    }

    let measurement = session.measure(args.radius, args.rpm)?;
    debug!("Measurement: {:?}", measurement);

    if args.json {
        let json = serde_json::to_string_pretty(&measurement).map_err(io::Error::from)?;
        return session.write(&format!("{json}\n"));
    }

    session.write(&report::render(&measurement))?;
    if args.explain {
        let breakdown = GForceCalculator::new().breakdown(measurement.radius, measurement.rpm)?;
        session.write(&report::format_breakdown(&breakdown))?;
    }
    Ok(())
}
