//! Security of a saved credential profile.
//!
//! A saved profile carries a set of allowed key-management schemes and,
//! for legacy networks, WEP keys. Exactly one [`SecurityProtocol`] is derived
//! from that, by first match:
//!
//! ```text
//! SAE → SAE
//! WPA_PSK → PSK
//! SUITE_B_192 → EAP Suite-B
//! WPA_EAP or IEEE8021X → EAP
//! OWE → OWE
//! WEP key present → WEP
//! otherwise → Open
//! ```

use crate::protocol::{ParseError, SecurityProtocol};
use std::fmt;
use std::str::FromStr;

/// A key-management scheme a saved profile allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum KeyManagement {
    #[cfg_attr(feature = "serde", serde(rename = "NONE"))]
    None = 0,
    #[cfg_attr(feature = "serde", serde(rename = "WPA_PSK"))]
    WpaPsk = 1,
    #[cfg_attr(feature = "serde", serde(rename = "WPA_EAP"))]
    WpaEap = 2,
    #[cfg_attr(feature = "serde", serde(rename = "IEEE8021X"))]
    Ieee8021x = 3,
    #[cfg_attr(feature = "serde", serde(rename = "SAE"))]
    Sae = 4,
    #[cfg_attr(feature = "serde", serde(rename = "OWE"))]
    Owe = 5,
    #[cfg_attr(feature = "serde", serde(rename = "SUITE_B_192"))]
    SuiteB192 = 6,
}

impl KeyManagement {
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::WpaPsk,
        Self::WpaEap,
        Self::Ieee8021x,
        Self::Sae,
        Self::Owe,
        Self::SuiteB192,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::WpaPsk => "WPA_PSK",
            Self::WpaEap => "WPA_EAP",
            Self::Ieee8021x => "IEEE8021X",
            Self::Sae => "SAE",
            Self::Owe => "OWE",
            Self::SuiteB192 => "SUITE_B_192",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for KeyManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for KeyManagement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.tag() == s)
            .ok_or_else(|| ParseError::UnknownKeyManagement(s.to_string()))
    }
}

/// The allowed key-management schemes of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AllowedKeyManagement(u8);

impl AllowedKeyManagement {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn with(self, scheme: KeyManagement) -> Self {
        Self(self.0 | scheme.bit())
    }

    pub const fn get(self, scheme: KeyManagement) -> bool {
        self.0 & scheme.bit() != 0
    }
}

impl FromIterator<KeyManagement> for AllowedKeyManagement {
    fn from_iter<I: IntoIterator<Item = KeyManagement>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

/// The security-relevant part of a saved profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileSecurity {
    pub key_management: AllowedKeyManagement,
    /// Whether the first legacy WEP key slot is populated.
    pub has_wep_key: bool,
}

impl ProfileSecurity {
    pub fn new(schemes: impl IntoIterator<Item = KeyManagement>, has_wep_key: bool) -> Self {
        Self {
            key_management: schemes.into_iter().collect(),
            has_wep_key,
        }
    }

    /// Derive the single protocol this profile connects with.
    pub fn protocol(&self) -> SecurityProtocol {
        resolve_profile_security(self)
    }
}

/// Derive the single protocol a saved profile connects with.
pub fn resolve_profile_security(profile: &ProfileSecurity) -> SecurityProtocol {
    let allowed = profile.key_management;
    if allowed.get(KeyManagement::Sae) {
        SecurityProtocol::Sae
    } else if allowed.get(KeyManagement::WpaPsk) {
        SecurityProtocol::Psk
    } else if allowed.get(KeyManagement::SuiteB192) {
        SecurityProtocol::EapSuiteB
    } else if allowed.get(KeyManagement::WpaEap) || allowed.get(KeyManagement::Ieee8021x) {
        SecurityProtocol::Eap
    } else if allowed.get(KeyManagement::Owe) {
        SecurityProtocol::Owe
    } else if profile.has_wep_key {
        SecurityProtocol::Wep
    } else {
        SecurityProtocol::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use KeyManagement::*;

    fn resolve<const N: usize>(schemes: [KeyManagement; N], wep: bool) -> SecurityProtocol {
        ProfileSecurity::new(schemes, wep).protocol()
    }

    #[test]
    fn single_scheme_profiles() {
        assert_eq!(resolve([Sae], false), SecurityProtocol::Sae);
        assert_eq!(resolve([WpaPsk], false), SecurityProtocol::Psk);
        assert_eq!(resolve([SuiteB192], false), SecurityProtocol::EapSuiteB);
        assert_eq!(resolve([WpaEap], false), SecurityProtocol::Eap);
        assert_eq!(resolve([Ieee8021x], false), SecurityProtocol::Eap);
        assert_eq!(resolve([Owe], false), SecurityProtocol::Owe);
        assert_eq!(resolve([None], false), SecurityProtocol::Open);
        assert_eq!(resolve([], false), SecurityProtocol::Open);
    }

    #[test]
    fn wep_key_only_matters_without_schemes() {
        assert_eq!(resolve([None], true), SecurityProtocol::Wep);
        assert_eq!(resolve([WpaPsk], true), SecurityProtocol::Psk);
        assert_eq!(resolve([Owe], true), SecurityProtocol::Owe);
    }

    #[test]
    fn precedence_between_schemes() {
        assert_eq!(resolve([WpaPsk, Sae], false), SecurityProtocol::Sae);
        assert_eq!(resolve([SuiteB192, WpaPsk], false), SecurityProtocol::Psk);
        assert_eq!(resolve([WpaEap, SuiteB192], false), SecurityProtocol::EapSuiteB);
        assert_eq!(resolve([Owe, Ieee8021x], false), SecurityProtocol::Eap);
    }

    #[test]
    fn key_management_tags_roundtrip() {
        for scheme in KeyManagement::ALL {
            assert_eq!(scheme.tag().parse::<KeyManagement>(), Ok(scheme));
        }
        assert!(matches!(
            "WPA3".parse::<KeyManagement>(),
            Err(ParseError::UnknownKeyManagement(_))
        ));
    }
}
