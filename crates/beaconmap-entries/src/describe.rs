//! Short descriptions of a resolved network entry.
//!
//! These work on a [`NetworkEntry`], never on raw observations. Localized
//! labels come from a [`DisplayStrings`] implementation; verbosity is an
//! explicit argument.

use crate::key::EntryKey;
use crate::mapper::EntryKeyMap;
use crate::observation::{best_signal, BeaconObservation};
use crate::profile::{MeteredChoice, ProfileIndex, SavedProfile};

/// Localized labels used in entry descriptions.
pub trait DisplayStrings {
    fn auto_connect_disabled(&self) -> &str;
    fn metered(&self) -> &str;
    fn unmetered(&self) -> &str;
}

/// Built-in English labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishStrings;

impl DisplayStrings for EnglishStrings {
    fn auto_connect_disabled(&self) -> &str {
        "Automatic connection off"
    }

    fn metered(&self) -> &str {
        "Metered"
    }

    fn unmetered(&self) -> &str {
        "Unmetered"
    }
}

/// One user-selectable network, assembled from a mapping result.
#[derive(Debug, Clone)]
pub struct NetworkEntry<'a> {
    pub key: EntryKey,
    pub profile: Option<&'a SavedProfile>,
    pub best: Option<&'a BeaconObservation>,
    pub observation_count: usize,
}

impl<'a> NetworkEntry<'a> {
    pub fn new(
        key: EntryKey,
        observations: &[&'a BeaconObservation],
        profile: Option<&'a SavedProfile>,
    ) -> Self {
        Self {
            key,
            profile,
            best: best_signal(observations.iter().copied()),
            observation_count: observations.len(),
        }
    }

    pub fn is_saved(&self) -> bool {
        self.profile.is_some()
    }
}

/// Build entries from a mapping, sorted by encoded key text.
pub fn network_entries<'a>(
    map: &EntryKeyMap<'a>,
    profiles: Option<&'a ProfileIndex>,
) -> Vec<NetworkEntry<'a>> {
    let mut entries: Vec<_> = map
        .iter()
        .map(|(key, observations)| {
            let profile = profiles.and_then(|index| index.get(key));
            NetworkEntry::new(key.clone(), observations, profile)
        })
        .collect();
    entries.sort_by_cached_key(|entry| entry.key.to_string());
    entries
}

/// Empty unless the entry is saved with automatic connection turned off.
pub fn auto_connect_description(strings: &impl DisplayStrings, entry: &NetworkEntry<'_>) -> String {
    match entry.profile {
        Some(profile) if !profile.auto_join => strings.auto_connect_disabled().to_string(),
        _ => String::new(),
    }
}

pub fn metered_description(strings: &impl DisplayStrings, entry: &NetworkEntry<'_>) -> String {
    let Some(profile) = entry.profile else {
        return String::new();
    };
    match profile.metered {
        MeteredChoice::Metered => strings.metered().to_string(),
        MeteredChoice::Unmetered => strings.unmetered().to_string(),
        // No connection state is tracked, so automatic metering never shows.
        MeteredChoice::Auto => String::new(),
    }
}

/// No speed model exists, so this is always empty.
pub fn speed_description(_strings: &impl DisplayStrings, _entry: &NetworkEntry<'_>) -> String {
    String::new()
}

/// Diagnostic details, only when `verbose` is set.
pub fn verbose_description(entry: &NetworkEntry<'_>, verbose: bool) -> String {
    if !verbose {
        return String::new();
    }
    let mut parts = Vec::new();
    if let Some(best) = entry.best {
        let mut scan = format!("{{{}, {}", best.network_name, best.signal_level);
        if let Some(caps) = best.capability_descriptor.as_deref().filter(|c| !c.is_empty()) {
            scan.push_str(", ");
            scan.push_str(caps);
        }
        scan.push('}');
        parts.push(scan);
    }
    if entry.observation_count > 0 {
        parts.push(format!("[{} scans]", entry.observation_count));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use beaconmap_security::SecurityProtocol;

    fn entry<'a>(
        observations: &[&'a BeaconObservation],
        profile: Option<&'a SavedProfile>,
    ) -> NetworkEntry<'a> {
        NetworkEntry::new(EntryKey::new("Net", SecurityProtocol::Psk), observations, profile)
    }

    #[test]
    fn auto_connect_only_for_saved_disabled() {
        let strings = EnglishStrings;
        assert_eq!(auto_connect_description(&strings, &entry(&[], None)), "");

        let on = SavedProfile::new("Net", SecurityProtocol::Psk);
        assert_eq!(auto_connect_description(&strings, &entry(&[], Some(&on))), "");

        let off = on.clone().with_auto_join(false);
        assert_eq!(
            auto_connect_description(&strings, &entry(&[], Some(&off))),
            "Automatic connection off"
        );
    }

    #[test]
    fn metered_choices() {
        let strings = EnglishStrings;
        assert_eq!(metered_description(&strings, &entry(&[], None)), "");

        let auto = SavedProfile::new("Net", SecurityProtocol::Psk);
        assert_eq!(metered_description(&strings, &entry(&[], Some(&auto))), "");

        let metered = auto.clone().with_metered(MeteredChoice::Metered);
        assert_eq!(metered_description(&strings, &entry(&[], Some(&metered))), "Metered");

        let unmetered = auto.clone().with_metered(MeteredChoice::Unmetered);
        assert_eq!(metered_description(&strings, &entry(&[], Some(&unmetered))), "Unmetered");
    }

    #[test]
    fn speed_is_always_empty() {
        assert_eq!(speed_description(&EnglishStrings, &entry(&[], None)), "");
    }

    #[test]
    fn verbose_needs_flag() {
        let a = BeaconObservation::new("Net", Some("[WPA2-PSK-CCMP]"), -70);
        let b = BeaconObservation::new("Net", None, -40);
        let e = entry(&[&a, &b], None);
        assert_eq!(verbose_description(&e, false), "");
        assert_eq!(verbose_description(&e, true), "{Net, -40} [2 scans]");

        let c = entry(&[&a], None);
        assert_eq!(verbose_description(&c, true), "{Net, -70, [WPA2-PSK-CCMP]} [1 scans]");

        assert_eq!(verbose_description(&entry(&[], None), true), "");
    }

    #[test]
    fn entries_are_sorted_and_linked_to_profiles() {
        use crate::mapper::{EntryKeyMapper, SelectionMode};
        use crate::observation::CorrelationContext;
        use crate::profile::index_profiles;

        let batch = [
            BeaconObservation::new("B", Some("[WPA2-PSK-CCMP]"), -60),
            BeaconObservation::new("A", None, -50),
            BeaconObservation::new("B", Some("[WPA2-PSK-CCMP]"), -30),
        ];
        let profiles = index_profiles([SavedProfile::new("B", SecurityProtocol::Psk)]);
        let mapper = EntryKeyMapper::new(SelectionMode::Single, CorrelationContext::default());
        let map = mapper.map(&batch, Some(&profiles));

        let entries = network_entries(&map, Some(&profiles));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, EntryKey::new("A", SecurityProtocol::Open));
        assert!(!entries[0].is_saved());
        assert_eq!(entries[1].key, EntryKey::new("B", SecurityProtocol::Psk));
        assert!(entries[1].is_saved());
        assert_eq!(entries[1].observation_count, 2);
        assert_eq!(entries[1].best.map(|o| o.signal_level), Some(-30));
    }

    #[test]
    fn entries_follow_encoded_key_order() {
        use crate::mapper::{EntryKeyMapper, SelectionMode};
        use crate::observation::CorrelationContext;

        let batch = [
            BeaconObservation::new("A", Some("[ESS]"), -50),
            BeaconObservation::new("A", Some("[WPA2-EAP-CCMP]"), -60),
            BeaconObservation::new("A B", Some("[WEP]"), -70),
        ];
        let mapper = EntryKeyMapper::new(SelectionMode::Single, CorrelationContext::default());
        let map = mapper.map(&batch, None);

        let keys: Vec<String> = network_entries(&map, None)
            .iter()
            .map(|entry| entry.key.to_string())
            .collect();
        assert_eq!(
            keys,
            vec![
                "StandardWifiEntry:A B,WEP",
                "StandardWifiEntry:A,EAP",
                "StandardWifiEntry:A,NONE",
            ]
        );
    }
}
