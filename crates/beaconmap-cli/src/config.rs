//! Mapper configuration from the environment.

use crate::error::{Error, Result};
use beaconmap_entries::{CorrelationContext, EntryKeyMapper, SelectionMode};

pub const ENV_SAE_SUPPORTED: &str = "BEACONMAP_SAE_SUPPORTED";
pub const ENV_SUITE_B_SUPPORTED: &str = "BEACONMAP_SUITE_B_SUPPORTED";
pub const ENV_ENHANCED_OPEN_SUPPORTED: &str = "BEACONMAP_ENHANCED_OPEN_SUPPORTED";
pub const ENV_SINGLE_SELECTION: &str = "BEACONMAP_SINGLE_SELECTION";
pub const ENV_VERBOSE: &str = "BEACONMAP_VERBOSE";

/// Configuration for one beaconmap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapperConfig {
    pub mode: SelectionMode,
    pub context: CorrelationContext,
    /// Include diagnostic details in each entry's description.
    pub verbose: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Single,
            context: CorrelationContext::all_supported(),
            verbose: false,
        }
    }
}

impl MapperConfig {
    /// Read configuration from environment variables, with defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |var: &'static str, default: bool| -> Result<bool> {
            match lookup(var) {
                Some(value) => parse_bool(var, &value),
                None => Ok(default),
            }
        };

        let single = flag(ENV_SINGLE_SELECTION, defaults.mode == SelectionMode::Single)?;
        Ok(Self {
            mode: if single {
                SelectionMode::Single
            } else {
                SelectionMode::MultiKey
            },
            context: CorrelationContext {
                sae_supported: flag(ENV_SAE_SUPPORTED, defaults.context.sae_supported)?,
                suite_b_supported: flag(ENV_SUITE_B_SUPPORTED, defaults.context.suite_b_supported)?,
                enhanced_open_supported: flag(
                    ENV_ENHANCED_OPEN_SUPPORTED,
                    defaults.context.enhanced_open_supported,
                )?,
            },
            verbose: flag(ENV_VERBOSE, defaults.verbose)?,
        })
    }

    pub fn mapper(&self) -> EntryKeyMapper {
        EntryKeyMapper::new(self.mode, self.context)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidConfig {
            var,
            value: value.to_string(),
        }),
    }
}
