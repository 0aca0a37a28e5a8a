//! Canonical network entry keys.
//!
//! An [`EntryKey`] is `(network name, protocol)`. Its textual form is
//!
//! ```text
//! StandardWifiEntry:<network name>,<protocol tag>
//! ```
//!
//! Protocol tags never contain a comma and decoding splits at the last one,
//! so a network name may contain commas or tag-like text without colliding
//! with any other key.

use beaconmap_security::{ParseError, SecurityProtocol};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix of every encoded entry key.
pub const ENTRY_KEY_PREFIX: &str = "StandardWifiEntry:";

/// Errors decoding an [`EntryKey`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryKeyError {
    #[error("entry key must start with \"StandardWifiEntry:\": {0:?}")]
    MissingPrefix(String),

    #[error("entry key has no protocol separator: {0:?}")]
    MissingSeparator(String),

    #[error("entry key has an empty network name")]
    EmptyName,

    #[error(transparent)]
    Protocol(#[from] ParseError),
}

/// Identity of one user-selectable network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryKey {
    network_name: String,
    protocol: SecurityProtocol,
}

impl EntryKey {
    pub fn new(network_name: impl Into<String>, protocol: SecurityProtocol) -> Self {
        Self {
            network_name: network_name.into(),
            protocol,
        }
    }

    pub fn network_name(&self) -> &str {
        &self.network_name
    }

    pub const fn protocol(&self) -> SecurityProtocol {
        self.protocol
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{},{}", ENTRY_KEY_PREFIX, self.network_name, self.protocol.tag())
    }
}

impl FromStr for EntryKey {
    type Err = EntryKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix(ENTRY_KEY_PREFIX)
            .ok_or_else(|| EntryKeyError::MissingPrefix(s.to_string()))?;
        let (name, tag) = body
            .rsplit_once(',')
            .ok_or_else(|| EntryKeyError::MissingSeparator(s.to_string()))?;
        if name.is_empty() {
            return Err(EntryKeyError::EmptyName);
        }
        Ok(Self::new(name, tag.parse()?))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EntryKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EntryKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use SecurityProtocol::*;

    #[test]
    fn display_format() {
        assert_eq!(EntryKey::new("Cafe", Owe).to_string(), "StandardWifiEntry:Cafe,OWE");
        assert_eq!(EntryKey::new("Cafe", Open).to_string(), "StandardWifiEntry:Cafe,NONE");
    }

    #[test]
    fn names_with_tag_like_text_stay_distinct() {
        // "a,PSK" + SAE must not collide with "a" + anything
        let tricky = EntryKey::new("a,PSK", Sae);
        let plain = EntryKey::new("a", Psk);
        assert_ne!(tricky.to_string(), plain.to_string());

        let decoded: EntryKey = tricky.to_string().parse().unwrap();
        assert_eq!(decoded, tricky);
        assert_eq!(decoded.network_name(), "a,PSK");
    }

    #[test]
    fn decode_errors() {
        assert!(matches!(
            "Cafe,OWE".parse::<EntryKey>(),
            Err(EntryKeyError::MissingPrefix(_))
        ));
        assert!(matches!(
            "StandardWifiEntry:Cafe".parse::<EntryKey>(),
            Err(EntryKeyError::MissingSeparator(_))
        ));
        assert_eq!(
            "StandardWifiEntry:,OWE".parse::<EntryKey>(),
            Err(EntryKeyError::EmptyName)
        );
        assert!(matches!(
            "StandardWifiEntry:Cafe,WPA9".parse::<EntryKey>(),
            Err(EntryKeyError::Protocol(_))
        ));
    }

    proptest! {
        #[test]
        fn encoding_is_injective(
            name_a in ".{1,16}",
            name_b in ".{1,16}",
            a in 0usize..7,
            b in 0usize..7,
        ) {
            let key_a = EntryKey::new(name_a, SecurityProtocol::ALL[a]);
            let key_b = EntryKey::new(name_b, SecurityProtocol::ALL[b]);
            prop_assert_eq!(key_a == key_b, key_a.to_string() == key_b.to_string());
            prop_assert_eq!(key_a.to_string().parse::<EntryKey>(), Ok(key_a));
        }
    }
}
