//! Shared fixtures for cross-crate scenario tests.

use beaconmap_entries::{
    index_profiles, BeaconObservation, CorrelationContext, EntryKey, EntryKeyMap, EntryKeyMapper,
    ProfileIndex, SavedProfile, SecurityProtocol, SelectionMode,
};

/// Common capability descriptors as seen in real scan dumps.
pub mod descriptors {
    pub const OPEN: &str = "[ESS]";
    pub const WEP: &str = "[WEP][ESS]";
    pub const PSK: &str = "[WPA2-PSK-CCMP][ESS]";
    pub const SAE: &str = "[RSN-SAE-CCMP][ESS]";
    pub const PSK_SAE: &str = "[WPA2-PSK-CCMP][RSN-PSK+SAE-CCMP][ESS]";
    pub const OWE: &str = "[RSN-OWE-CCMP][ESS]";
    pub const OWE_TRANSITION: &str = "[RSN-OWE_TRANSITION][ESS]";
    pub const EAP: &str = "[WPA2-EAP-CCMP][ESS]";
    pub const SUITE_B: &str = "[RSN-EAP_SUITE_B_192-GCMP-256][ESS]";
}

pub fn beacon(name: &str, descriptor: Option<&str>, level: i32) -> BeaconObservation {
    BeaconObservation::new(name, descriptor, level)
}

pub fn profiles(saved: &[(&str, SecurityProtocol)]) -> ProfileIndex {
    index_profiles(saved.iter().map(|(name, protocol)| SavedProfile::new(*name, *protocol)))
}

pub fn single(context: CorrelationContext) -> EntryKeyMapper {
    EntryKeyMapper::new(SelectionMode::Single, context)
}

pub fn multi(context: CorrelationContext) -> EntryKeyMapper {
    EntryKeyMapper::new(SelectionMode::MultiKey, context)
}

/// Sorted `(key, signal levels)` view of a mapping, for readable asserts.
pub fn summarize(map: &EntryKeyMap<'_>) -> Vec<(EntryKey, Vec<i32>)> {
    let mut summary: Vec<_> = map
        .iter()
        .map(|(key, observations)| {
            (
                key.clone(),
                observations.iter().map(|o| o.signal_level).collect(),
            )
        })
        .collect();
    summary.sort_by(|a, b| a.0.cmp(&b.0));
    summary
}
