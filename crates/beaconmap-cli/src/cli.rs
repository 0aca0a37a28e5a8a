//! Command-line arguments.
//!
//! Flags override the environment configuration read by
//! [`MapperConfig::from_env`](crate::config::MapperConfig::from_env).

use crate::config::MapperConfig;
use beaconmap_entries::SelectionMode;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for beaconmap
#[derive(Parser, Debug)]
#[command(name = "beaconmap")]
#[command(about = "Group a Wi-Fi scan dump into canonical network entries")]
#[command(version)]
pub struct Args {
    /// Scan dump (JSON array of {ssid, capabilities, level})
    pub scan: PathBuf,

    /// Saved profiles (JSON array of {ssid, key_management, ...})
    #[arg(short, long, env = "BEACONMAP_PROFILES")]
    pub profiles: Option<PathBuf>,

    /// Attribute each beacon to every protocol it supports
    #[arg(long, conflicts_with = "single_selection")]
    pub multi_key: bool,

    /// Attribute each beacon to at most one entry
    #[arg(long)]
    pub single_selection: bool,

    /// Platform lacks WPA3-Personal (SAE)
    #[arg(long)]
    pub no_sae: bool,

    /// Platform lacks WPA3-Enterprise 192-bit
    #[arg(long)]
    pub no_suite_b: bool,

    /// Platform lacks Enhanced Open (OWE)
    #[arg(long)]
    pub no_owe: bool,

    /// Include diagnostic details per entry
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Apply flag overrides on top of `config`.
    pub fn apply(&self, mut config: MapperConfig) -> MapperConfig {
        if self.multi_key {
            config.mode = SelectionMode::MultiKey;
        }
        if self.single_selection {
            config.mode = SelectionMode::Single;
        }
        if self.no_sae {
            config.context.sae_supported = false;
        }
        if self.no_suite_b {
            config.context.suite_b_supported = false;
        }
        if self.no_owe {
            config.context.enhanced_open_supported = false;
        }
        config.verbose |= self.verbose;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::try_parse_from(["beaconmap", "scan.json", "--multi-key", "--no-sae", "-v"])
            .unwrap();
        let config = args.apply(MapperConfig::default());
        assert_eq!(config.mode, SelectionMode::MultiKey);
        assert!(!config.context.sae_supported);
        assert!(config.context.suite_b_supported);
        assert!(config.verbose);
    }

    #[test]
    fn single_selection_overrides_env_multi_key() {
        let args = Args::try_parse_from(["beaconmap", "scan.json", "--single-selection"]).unwrap();
        let env = MapperConfig {
            mode: SelectionMode::MultiKey,
            ..MapperConfig::default()
        };
        assert_eq!(args.apply(env).mode, SelectionMode::Single);
    }

    #[test]
    fn modes_conflict() {
        assert!(Args::try_parse_from([
            "beaconmap",
            "scan.json",
            "--multi-key",
            "--single-selection"
        ])
        .is_err());
    }

    #[test]
    fn scan_path_is_required() {
        assert!(Args::try_parse_from(["beaconmap"]).is_err());
    }
}
