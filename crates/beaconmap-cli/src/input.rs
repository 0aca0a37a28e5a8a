//! Scan dump and saved-profile input files.
//!
//! Scan dump:
//!
//! ```json
//! [{ "ssid": "Cafe", "capabilities": "[OWE_TRANSITION][ESS]", "level": -52 }]
//! ```
//!
//! Saved profiles:
//!
//! ```json
//! [{ "ssid": "Home", "key_management": ["WPA_PSK"], "auto_join": true, "metered": "auto" }]
//! ```

use crate::error::{Error, Result};
use beaconmap_entries::{index_profiles, BeaconObservation, MeteredChoice, ProfileIndex, SavedProfile};
use beaconmap_security::{KeyManagement, ProfileSecurity};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// A saved profile as written in the profiles file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRecord {
    pub ssid: String,
    #[serde(default)]
    pub key_management: Vec<KeyManagement>,
    /// Whether a legacy WEP key is stored.
    #[serde(default)]
    pub wep_key: bool,
    #[serde(default = "default_auto_join")]
    pub auto_join: bool,
    #[serde(default)]
    pub metered: MeteredChoice,
    #[serde(default)]
    pub credential_ref: Option<String>,
}

fn default_auto_join() -> bool {
    true
}

impl ProfileRecord {
    /// Resolve the record's protocol and build a saved profile.
    pub fn into_profile(self) -> SavedProfile {
        let security = ProfileSecurity::new(self.key_management.iter().copied(), self.wep_key);
        let mut profile = SavedProfile::from_security(self.ssid, &security)
            .with_auto_join(self.auto_join)
            .with_metered(self.metered);
        profile.credential_ref = self.credential_ref;
        profile
    }
}

pub fn parse_observations(text: &str, origin: &str) -> Result<Vec<BeaconObservation>> {
    let observations: Vec<BeaconObservation> =
        serde_json::from_str(text).map_err(|source| Error::Json {
            origin: origin.to_string(),
            source,
        })?;
    let unnamed = observations.iter().filter(|o| o.network_name.is_empty()).count();
    if unnamed > 0 {
        debug!(unnamed, "Scan dump contains hidden networks; they will be skipped");
    }
    Ok(observations)
}

pub fn parse_profiles(text: &str, origin: &str) -> Result<ProfileIndex> {
    let records: Vec<ProfileRecord> = serde_json::from_str(text).map_err(|source| Error::Json {
        origin: origin.to_string(),
        source,
    })?;
    if records.iter().any(|r| r.ssid.is_empty()) {
        warn!("Ignoring saved profiles without an SSID");
    }
    Ok(index_profiles(records.into_iter().map(ProfileRecord::into_profile)))
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a scan dump from disk.
pub fn load_observations(path: &Path) -> Result<Vec<BeaconObservation>> {
    let observations = parse_observations(&read(path)?, &path.display().to_string())?;
    debug!(path = %path.display(), count = observations.len(), "Loaded scan dump");
    Ok(observations)
}

/// Load saved profiles from disk.
pub fn load_profiles(path: &Path) -> Result<ProfileIndex> {
    let profiles = parse_profiles(&read(path)?, &path.display().to_string())?;
    debug!(path = %path.display(), count = profiles.len(), "Loaded saved profiles");
    Ok(profiles)
}
