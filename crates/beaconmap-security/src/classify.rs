//! Beacon capability classification.
//!
//! A beacon's capability descriptor is an opaque token string such as
//! `[WPA2-PSK-CCMP][RSN-PSK+SAE-CCMP][ESS]`. Classification checks a fixed,
//! ordered table of token requirements and returns the protocol set of the
//! first rule whose tokens all appear in the descriptor:
//!
//! ```text
//!  1. PSK + SAE        → {PSK, SAE}
//!  2. OWE_TRANSITION   → {Open, OWE}
//!  3. OWE              → {OWE}
//!  4. WEP              → {WEP}
//!  5. SAE              → {SAE}
//!  6. PSK              → {PSK}
//!  7. EAP_SUITE_B_192  → {EAP Suite-B}
//!  8. EAP              → {EAP}
//!  otherwise           → {Open}
//! ```
//!
//! Token presence is substring presence, so `OWE_TRANSITION` also satisfies
//! `OWE` and `EAP_SUITE_B_192` also satisfies `EAP`. Order is what keeps those
//! apart.

use crate::protocol::{ProtocolSet, SecurityProtocol};

/// One row of the classification table.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    /// Tokens that must all be present.
    pub tokens: &'static [&'static str],
    /// Protocols reported when the rule matches.
    pub protocols: ProtocolSet,
}

/// The classification table, evaluated top to bottom.
pub const CLASSIFICATION_RULES: [ClassificationRule; 8] = [
    ClassificationRule {
        tokens: &["PSK", "SAE"],
        protocols: ProtocolSet::of(SecurityProtocol::Psk).with(SecurityProtocol::Sae),
    },
    ClassificationRule {
        tokens: &["OWE_TRANSITION"],
        protocols: ProtocolSet::of(SecurityProtocol::Open).with(SecurityProtocol::Owe),
    },
    ClassificationRule {
        tokens: &["OWE"],
        protocols: ProtocolSet::of(SecurityProtocol::Owe),
    },
    ClassificationRule {
        tokens: &["WEP"],
        protocols: ProtocolSet::of(SecurityProtocol::Wep),
    },
    ClassificationRule {
        tokens: &["SAE"],
        protocols: ProtocolSet::of(SecurityProtocol::Sae),
    },
    ClassificationRule {
        tokens: &["PSK"],
        protocols: ProtocolSet::of(SecurityProtocol::Psk),
    },
    ClassificationRule {
        tokens: &["EAP_SUITE_B_192"],
        protocols: ProtocolSet::of(SecurityProtocol::EapSuiteB),
    },
    ClassificationRule {
        tokens: &["EAP"],
        protocols: ProtocolSet::of(SecurityProtocol::Eap),
    },
];

/// Fallback when no rule matches or the descriptor is absent.
pub const FALLBACK: ProtocolSet = ProtocolSet::of(SecurityProtocol::Open);

impl ClassificationRule {
    fn matches(&self, descriptor: &str) -> bool {
        self.tokens.iter().all(|token| descriptor.contains(token))
    }
}

/// Classify a capability descriptor into the protocols it advertises.
///
/// Never returns an empty set.
///
/// # Examples
///
/// ```
/// use beaconmap_security::{classify, ProtocolSet, SecurityProtocol};
///
/// assert_eq!(classify(None), ProtocolSet::of(SecurityProtocol::Open));
/// assert_eq!(
///     classify(Some("[OWE_TRANSITION]")),
///     ProtocolSet::from([SecurityProtocol::Open, SecurityProtocol::Owe]),
/// );
/// ```
pub fn classify(descriptor: Option<&str>) -> ProtocolSet {
    let Some(descriptor) = descriptor else {
        return FALLBACK;
    };
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| rule.matches(descriptor))
        .map_or(FALLBACK, |rule| rule.protocols)
}
