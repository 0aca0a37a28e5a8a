//! Plain-text rendering of network entries.

use beaconmap_entries::{
    auto_connect_description, metered_description, speed_description, verbose_description,
    DisplayStrings, NetworkEntry,
};

/// One line per entry: key, scan count, best level, then any non-empty
/// descriptions separated by " / ".
pub fn render(entries: &[NetworkEntry<'_>], strings: &impl DisplayStrings, verbose: bool) -> String {
    let mut out = String::new();
    for entry in entries {
        let level = entry
            .best
            .map_or_else(|| "-".to_string(), |best| format!("{} dBm", best.signal_level));
        let saved = if entry.is_saved() { "saved" } else { "new" };
        out.push_str(&format!(
            "{}\t{}\t{} scans\t{}",
            entry.key, saved, entry.observation_count, level
        ));

        let descriptions: Vec<String> = [
            auto_connect_description(strings, entry),
            metered_description(strings, entry),
            speed_description(strings, entry),
            verbose_description(entry, verbose),
        ]
        .into_iter()
        .filter(|d| !d.is_empty())
        .collect();
        if !descriptions.is_empty() {
            out.push('\t');
            out.push_str(&descriptions.join(" / "));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use beaconmap_entries::{
        BeaconObservation, EnglishStrings, EntryKey, SavedProfile, SecurityProtocol,
    };

    #[test]
    fn renders_saved_and_new_entries() {
        let scan = BeaconObservation::new("Home", Some("[WPA2-PSK-CCMP]"), -42);
        let profile = SavedProfile::new("Home", SecurityProtocol::Psk).with_auto_join(false);
        let entries = vec![
            NetworkEntry::new(EntryKey::new("Cafe", SecurityProtocol::Owe), &[], None),
            NetworkEntry::new(EntryKey::new("Home", SecurityProtocol::Psk), &[&scan], Some(&profile)),
        ];

        let text = render(&entries, &EnglishStrings, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "StandardWifiEntry:Cafe,OWE\tnew\t0 scans\t-");
        assert_eq!(
            lines[1],
            "StandardWifiEntry:Home,PSK\tsaved\t1 scans\t-42 dBm\tAutomatic connection off"
        );
    }

    #[test]
    fn verbose_appends_details() {
        let scan = BeaconObservation::new("Net", None, -60);
        let entries = vec![NetworkEntry::new(EntryKey::new("Net", SecurityProtocol::Open), &[&scan], None)];
        let text = render(&entries, &EnglishStrings, true);
        assert!(text.ends_with("\t{Net, -60} [1 scans]\n"), "{text}");
    }
}
