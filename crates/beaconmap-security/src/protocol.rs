//! Security protocols and small fixed sets of them.
//!
//! A [`ProtocolSet`] is a bitset over the seven [`SecurityProtocol`] variants.
//! Iteration always follows declaration order (Open, OWE, WEP, PSK, SAE, EAP,
//! EAP Suite-B), which is also the order the classifier reports them in.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing protocol or key-management tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The tag does not name a security protocol.
    #[error("unknown security protocol tag: {0:?}")]
    UnknownProtocol(String),

    /// The tag does not name a key-management scheme.
    #[error("unknown key management tag: {0:?}")]
    UnknownKeyManagement(String),
}

/// A security protocol a network can be joined with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SecurityProtocol {
    /// No security.
    Open = 0,
    /// Opportunistic Wireless Encryption (Enhanced Open).
    Owe = 1,
    /// Legacy WEP.
    Wep = 2,
    /// WPA/WPA2 pre-shared key.
    Psk = 3,
    /// WPA3 Simultaneous Authentication of Equals.
    Sae = 4,
    /// WPA/WPA2 enterprise.
    Eap = 5,
    /// WPA3 enterprise 192-bit mode.
    EapSuiteB = 6,
}

impl SecurityProtocol {
    /// Every protocol, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Open,
        Self::Owe,
        Self::Wep,
        Self::Psk,
        Self::Sae,
        Self::Eap,
        Self::EapSuiteB,
    ];

    /// Stable textual tag. Never contains a comma.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Open => "NONE",
            Self::Owe => "OWE",
            Self::Wep => "WEP",
            Self::Psk => "PSK",
            Self::Sae => "SAE",
            Self::Eap => "EAP",
            Self::EapSuiteB => "SUITE_B",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for SecurityProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SecurityProtocol {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.tag() == s)
            .ok_or_else(|| ParseError::UnknownProtocol(s.to_string()))
    }
}

/// A set of security protocols.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProtocolSet(u8);

impl ProtocolSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// A set holding exactly one protocol.
    pub const fn of(protocol: SecurityProtocol) -> Self {
        Self(protocol.bit())
    }

    /// This set with `protocol` added.
    pub const fn with(self, protocol: SecurityProtocol) -> Self {
        Self(self.0 | protocol.bit())
    }

    /// This set with `protocol` removed.
    pub const fn without(self, protocol: SecurityProtocol) -> Self {
        Self(self.0 & !protocol.bit())
    }

    /// Protocols in `self` that are not in `other`.
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Protocols in either set.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, protocol: SecurityProtocol) -> bool {
        self.0 & protocol.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate members in declaration order.
    pub fn iter(self) -> Iter {
        Iter { set: self, next: 0 }
    }
}

impl fmt::Debug for ProtocolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<SecurityProtocol> for ProtocolSet {
    fn from_iter<I: IntoIterator<Item = SecurityProtocol>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl<const N: usize> From<[SecurityProtocol; N]> for ProtocolSet {
    fn from(protocols: [SecurityProtocol; N]) -> Self {
        protocols.into_iter().collect()
    }
}

impl IntoIterator for ProtocolSet {
    type Item = SecurityProtocol;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the members of a [`ProtocolSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    set: ProtocolSet,
    next: usize,
}

impl Iterator for Iter {
    type Item = SecurityProtocol;

    fn next(&mut self) -> Option<SecurityProtocol> {
        while let Some(&protocol) = SecurityProtocol::ALL.get(self.next) {
            self.next += 1;
            if self.set.contains(protocol) {
                return Some(protocol);
            }
        }
        None
    }
}
