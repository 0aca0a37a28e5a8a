//! Saved credential profiles, as seen by the mapper.
//!
//! Profiles are owned by an external store. The mapper only asks whether a
//! profile exists for a given [`EntryKey`], so callers snapshot their store
//! into a [`ProfileIndex`] once per scan cycle.

use crate::key::EntryKey;
use beaconmap_security::{ProfileSecurity, SecurityProtocol};
use std::collections::HashMap;

/// User's metering override for a saved network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MeteredChoice {
    #[default]
    Auto,
    Metered,
    Unmetered,
}

/// A previously stored credential configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedProfile {
    pub network_name: String,
    pub protocol: SecurityProtocol,
    /// Opaque handle into the credential store. Never read by the mapper.
    pub credential_ref: Option<String>,
    pub auto_join: bool,
    pub metered: MeteredChoice,
}

impl SavedProfile {
    pub fn new(network_name: impl Into<String>, protocol: SecurityProtocol) -> Self {
        Self {
            network_name: network_name.into(),
            protocol,
            credential_ref: None,
            auto_join: true,
            metered: MeteredChoice::Auto,
        }
    }

    /// Build a profile whose protocol is resolved from its key management.
    pub fn from_security(network_name: impl Into<String>, security: &ProfileSecurity) -> Self {
        Self::new(network_name, security.protocol())
    }

    pub fn with_credential_ref(mut self, credential_ref: impl Into<String>) -> Self {
        self.credential_ref = Some(credential_ref.into());
        self
    }

    pub fn with_auto_join(mut self, auto_join: bool) -> Self {
        self.auto_join = auto_join;
        self
    }

    pub fn with_metered(mut self, metered: MeteredChoice) -> Self {
        self.metered = metered;
        self
    }

    pub fn key(&self) -> EntryKey {
        EntryKey::new(self.network_name.clone(), self.protocol)
    }
}

/// Saved profiles keyed by the entry they belong to.
pub type ProfileIndex = HashMap<EntryKey, SavedProfile>;

/// Index profiles by entry key. Profiles without a network name are skipped;
/// a later profile replaces an earlier one with the same key.
pub fn index_profiles<I>(profiles: I) -> ProfileIndex
where
    I: IntoIterator<Item = SavedProfile>,
{
    profiles
        .into_iter()
        .filter(|p| !p.network_name.is_empty())
        .map(|p| (p.key(), p))
        .collect()
}
