//! Beaconmap CLI
//!
//! Reads a scan dump and an optional saved-profile snapshot, maps the scan to
//! canonical entry keys and renders one line per entry.
//!
//! # Configuration
//!
//! Environment variables set the defaults ([`config`]); command-line flags
//! override them ([`cli::Args`]).

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod report;

pub use cli::Args;
pub use config::MapperConfig;
pub use error::{Error, Result};

use beaconmap_entries::{network_entries, EnglishStrings, ProfileIndex};
use std::path::Path;
use tracing::info;

/// Run one mapping pass over files on disk and return the rendered report.
pub fn run(config: &MapperConfig, scan: &Path, profiles: Option<&Path>) -> Result<String> {
    let observations = input::load_observations(scan)?;
    let profiles: Option<ProfileIndex> = profiles.map(input::load_profiles).transpose()?;

    let map = config.mapper().map(&observations, profiles.as_ref());
    let entries = network_entries(&map, profiles.as_ref());
    info!(
        observations = observations.len(),
        entries = entries.len(),
        mode = ?config.mode,
        "Mapped scan dump"
    );
    Ok(report::render(&entries, &EnglishStrings, config.verbose))
}
