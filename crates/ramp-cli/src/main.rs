//! mini-ramp CLI
//!
//! Lays out a skateboard ramp built from pallets, prints its dimensions and
//! draws its side profile to an SVG file.
//!
//! # Usage
//!
//! ```bash
//! # Standard six-pallet ramp, drawn to ramp.svg
//! mini-ramp
//!
//! # Custom parameters and output
//! mini-ramp --config ramp.json --output profile.svg
//!
//! # Only print the dimensions
//! mini-ramp --report-only
//! ```

use std::path::PathBuf;
use std::process;

use ramp_core::Result;
use ramp_render::{Ramp, RampConfig, Report, SvgPen};
use tracing::debug;

fn print_usage() {
    eprintln!(
        r#"mini-ramp

USAGE:
    mini-ramp [--config <ramp.json>] [--output <ramp.svg>] [--report-only]

OPTIONS:
    --config <file>   Ramp parameters as JSON (defaults to the standard ramp)
    --output <file>   Where to write the drawing (default: ramp.svg)
    --report-only     Print the dimensions without drawing
    --help            Show this help message

Set RUST_LOG=debug to see the solved geometry.
"#
    );
}

#[derive(Debug)]
struct Options {
    config: Option<PathBuf>,
    output: PathBuf,
    report_only: bool,
}

enum Parsed {
    Run(Options),
    Help,
}

fn parse_args(args: &[String]) -> std::result::Result<Parsed, String> {
    let mut options = Options {
        config: None,
        output: PathBuf::from("ramp.svg"),
        report_only: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Parsed::Help),
            "--report-only" => options.report_only = true,
            "--config" => {
                let path = iter.next().ok_or("--config requires a file")?;
                options.config = Some(PathBuf::from(path));
            }
            "--output" | "-o" => {
                let path = iter.next().ok_or("--output requires a file")?;
                options.output = PathBuf::from(path);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(Parsed::Run(options))
}

fn run(options: &Options) -> Result<()> {
    let config = match &options.config {
        Some(path) => {
            debug!(path = %path.display(), "loading ramp config");
            RampConfig::from_file(path)?
        }
        None => RampConfig::default(),
    };

    // Solve and lay out everything before producing any output.
    let ramp = Ramp::new(config)?;
    let report = Report::from_ramp(&ramp);

    if !options.report_only {
        let mut pen = SvgPen::new(&options.output);
        ramp.draw(&mut pen)?;
    }

    print!("{report}");
    if !options.report_only {
        eprintln!();
        eprintln!("Drawing written to {}", options.output.display());
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Parsed::Run(options)) => options,
        Ok(Parsed::Help) => {
            print_usage();
            process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {e}\n");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
