//! beaconmap binary
//!
//! Usage:
//!   beaconmap <scan.json> [--profiles <profiles.json>] [--multi-key] [--no-sae] ...

use beaconmap_cli::{run, Args, MapperConfig};
use clap::Parser;

fn main() {
    beaconmap_logging::init(beaconmap_logging::DEFAULT_DIRECTIVES);

    let args = Args::parse();
    let config = match MapperConfig::from_env() {
        Ok(config) => args.apply(config),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    tracing::debug!(?config, "Resolved configuration");

    match run(&config, &args.scan, args.profiles.as_deref()) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
