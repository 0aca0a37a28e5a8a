//! Map a scan batch to canonical entry keys.
//!
//! One invocation sees one immutable batch of observations and one snapshot
//! of saved profiles. Nothing is cached between invocations: the mapping is
//! rebuilt from scratch every scan cycle.
//!
//! # Algorithm
//!
//! 1. Drop observations with an empty network name, group the rest by name.
//! 2. Per name, record which protocols are in range (ungated classification)
//!    and which have a saved profile.
//! 3. Per observation, remove protocols the platform cannot use, then pick
//!    protocols with the single-selection table or the multi-key rule
//!    (see [`crate::rules`]).
//! 4. Append the observation to every chosen `(name, protocol)` key.

use crate::key::EntryKey;
use crate::observation::{BeaconObservation, CorrelationContext};
use crate::profile::ProfileIndex;
use crate::rules::{multi_key_protocols, single_selection, Choice, NetworkPresence};
use beaconmap_security::{ProtocolSet, SecurityProtocol};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Observations attributed to each entry key, in batch order.
pub type EntryKeyMap<'a> = HashMap<EntryKey, Vec<&'a BeaconObservation>>;

/// How many keys an observation may be attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one key per observation, for presenting one choice per
    /// physical network.
    #[default]
    Single,
    /// Every protocol the observation supports, for automatic connection.
    MultiKey,
}

/// Maps scan batches to entry keys under fixed platform gates.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryKeyMapper {
    mode: SelectionMode,
    context: CorrelationContext,
}

impl EntryKeyMapper {
    pub fn new(mode: SelectionMode, context: CorrelationContext) -> Self {
        Self { mode, context }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn context(&self) -> &CorrelationContext {
        &self.context
    }

    /// Attribute every observation in the batch to zero or more entry keys.
    ///
    /// `profiles` is the caller's snapshot of saved profiles; `None` means
    /// nothing is saved.
    pub fn map<'a>(
        &self,
        observations: &'a [BeaconObservation],
        profiles: Option<&ProfileIndex>,
    ) -> EntryKeyMap<'a> {
        let mut groups: HashMap<&str, Vec<(&'a BeaconObservation, ProtocolSet)>> = HashMap::new();
        let mut unnamed = 0usize;
        for observation in observations {
            if observation.network_name.is_empty() {
                unnamed += 1;
                continue;
            }
            groups
                .entry(observation.network_name.as_str())
                .or_default()
                .push((observation, observation.protocols()));
        }

        let mut entries = EntryKeyMap::new();
        let mut coalesced = 0usize;
        for (&name, group) in &groups {
            let presence = network_presence(name, group, profiles);
            for &(observation, protocols) in group {
                let Some(chosen) = self.choose(name, observation, protocols, &presence) else {
                    coalesced += 1;
                    continue;
                };
                for protocol in chosen {
                    entries
                        .entry(EntryKey::new(name, protocol))
                        .or_default()
                        .push(observation);
                }
            }
        }

        debug!(
            mode = ?self.mode,
            observations = observations.len(),
            networks = groups.len(),
            unnamed,
            coalesced,
            entries = entries.len(),
            "Mapped scan batch to entry keys"
        );
        entries
    }

    /// Protocols for one observation, or `None` if it is coalesced away.
    fn choose(
        &self,
        name: &str,
        observation: &BeaconObservation,
        protocols: ProtocolSet,
        presence: &NetworkPresence,
    ) -> Option<ProtocolSet> {
        let gated = self.context.filter(protocols);
        let chosen = match self.mode {
            SelectionMode::MultiKey => multi_key_protocols(gated),
            SelectionMode::Single => match single_selection(presence, gated) {
                (_, Choice::Assign(chosen)) => chosen,
                (rule, Choice::Coalesce) => {
                    debug!(
                        network = name,
                        capabilities = ?observation.capability_descriptor,
                        rule,
                        "Coalesced observation into sibling entry"
                    );
                    return None;
                }
            },
        };
        if chosen.is_empty() {
            trace!(
                network = name,
                capabilities = ?observation.capability_descriptor,
                gated = ?gated,
                "Observation matched no entry key"
            );
        }
        Some(chosen)
    }
}

/// In-range and saved state for one network name.
fn network_presence(
    name: &str,
    group: &[(&BeaconObservation, ProtocolSet)],
    profiles: Option<&ProfileIndex>,
) -> NetworkPresence {
    let saved = |protocol: SecurityProtocol| {
        profiles.is_some_and(|index| index.contains_key(&EntryKey::new(name, protocol)))
    };
    let mut presence = NetworkPresence {
        psk_saved: saved(SecurityProtocol::Psk),
        sae_saved: saved(SecurityProtocol::Sae),
        open_saved: saved(SecurityProtocol::Open),
        owe_saved: saved(SecurityProtocol::Owe),
        ..NetworkPresence::default()
    };
    for &(_, protocols) in group {
        presence.observe(protocols);
    }
    presence
}

/// Map a scan batch to entry keys.
///
/// Shorthand for [`EntryKeyMapper::map`].
pub fn map_to_entry_keys<'a>(
    observations: &'a [BeaconObservation],
    mode: SelectionMode,
    profiles: Option<&ProfileIndex>,
    context: &CorrelationContext,
) -> EntryKeyMap<'a> {
    EntryKeyMapper::new(mode, *context).map(observations, profiles)
}
