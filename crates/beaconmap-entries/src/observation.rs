//! Beacon observations and platform capability gates.

use beaconmap_security::{classify, ProtocolSet, SecurityProtocol};

/// One beacon received during a scan cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeaconObservation {
    /// Network name (SSID). Empty for hidden networks.
    #[cfg_attr(feature = "serde", serde(rename = "ssid"))]
    pub network_name: String,
    /// Opaque capability token string, if the beacon carried one.
    #[cfg_attr(feature = "serde", serde(rename = "capabilities", default))]
    pub capability_descriptor: Option<String>,
    /// Received signal level (dBm).
    #[cfg_attr(feature = "serde", serde(rename = "level"))]
    pub signal_level: i32,
}

impl BeaconObservation {
    pub fn new(
        network_name: impl Into<String>,
        capability_descriptor: Option<&str>,
        signal_level: i32,
    ) -> Self {
        Self {
            network_name: network_name.into(),
            capability_descriptor: capability_descriptor.map(str::to_string),
            signal_level,
        }
    }

    /// Protocols this beacon advertises, before any platform gating.
    pub fn protocols(&self) -> ProtocolSet {
        classify(self.capability_descriptor.as_deref())
    }
}

/// Platform feature gates. Fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrelationContext {
    /// WPA3-Personal (SAE) is usable.
    pub sae_supported: bool,
    /// WPA3-Enterprise 192-bit is usable.
    pub suite_b_supported: bool,
    /// Enhanced Open (OWE) is usable.
    pub enhanced_open_supported: bool,
}

impl Default for CorrelationContext {
    fn default() -> Self {
        Self::all_supported()
    }
}

impl CorrelationContext {
    pub const fn all_supported() -> Self {
        Self {
            sae_supported: true,
            suite_b_supported: true,
            enhanced_open_supported: true,
        }
    }

    /// Protocols the platform cannot connect with.
    pub fn unsupported(&self) -> ProtocolSet {
        let mut unsupported = ProtocolSet::EMPTY;
        if !self.sae_supported {
            unsupported = unsupported.with(SecurityProtocol::Sae);
        }
        if !self.suite_b_supported {
            unsupported = unsupported.with(SecurityProtocol::EapSuiteB);
        }
        if !self.enhanced_open_supported {
            unsupported = unsupported.with(SecurityProtocol::Owe);
        }
        unsupported
    }

    /// Remove protocols the platform cannot connect with.
    pub fn filter(&self, protocols: ProtocolSet) -> ProtocolSet {
        protocols.difference(self.unsupported())
    }
}

/// Pick the observation with the strongest signal.
///
/// Ties go to the earliest observation. Returns `None` for an empty input.
pub fn best_signal<'a, I>(observations: I) -> Option<&'a BeaconObservation>
where
    I: IntoIterator<Item = &'a BeaconObservation>,
{
    observations.into_iter().fold(None, |best, candidate| match best {
        Some(current) if current.signal_level >= candidate.signal_level => Some(current),
        _ => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use SecurityProtocol::*;

    #[test]
    fn best_signal_empty_is_none() {
        let none: Vec<BeaconObservation> = vec![];
        assert!(best_signal(&none).is_none());
    }

    #[test]
    fn best_signal_picks_max() {
        let scans = vec![
            BeaconObservation::new("a", None, -70),
            BeaconObservation::new("a", None, -40),
            BeaconObservation::new("a", None, -90),
        ];
        assert_eq!(best_signal(&scans).map(|o| o.signal_level), Some(-40));
    }

    #[test]
    fn best_signal_ties_go_to_first() {
        let scans = vec![
            BeaconObservation::new("first", None, -50),
            BeaconObservation::new("second", None, -50),
        ];
        assert_eq!(best_signal(&scans).map(|o| o.network_name.as_str()), Some("first"));
    }

    #[test]
    fn best_signal_over_references() {
        let a = BeaconObservation::new("a", None, -60);
        let b = BeaconObservation::new("b", None, -30);
        let refs = vec![&a, &b];
        assert_eq!(best_signal(refs.iter().copied()), Some(&b));
    }

    #[test]
    fn context_filters_unsupported_protocols() {
        let ctx = CorrelationContext {
            sae_supported: false,
            suite_b_supported: false,
            enhanced_open_supported: false,
        };
        assert_eq!(ctx.filter(ProtocolSet::from([Psk, Sae])), ProtocolSet::of(Psk));
        assert_eq!(ctx.filter(ProtocolSet::from([Open, Owe])), ProtocolSet::of(Open));
        assert_eq!(ctx.filter(ProtocolSet::of(EapSuiteB)), ProtocolSet::EMPTY);
        assert_eq!(ctx.filter(ProtocolSet::of(Eap)), ProtocolSet::of(Eap));
    }

    #[test]
    fn default_context_supports_everything() {
        assert!(CorrelationContext::default().unsupported().is_empty());
    }

    #[test]
    fn observation_protocols_use_classifier() {
        assert_eq!(BeaconObservation::new("x", None, 0).protocols(), ProtocolSet::of(Open));
        assert_eq!(
            BeaconObservation::new("x", Some("[RSN-PSK+SAE-CCMP]"), 0).protocols(),
            ProtocolSet::from([Psk, Sae])
        );
    }
}
