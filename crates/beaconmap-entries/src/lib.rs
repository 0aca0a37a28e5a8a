//! Beaconmap Entries
//!
//! Coalesce the beacons seen in one scan cycle into canonical network
//! entries, keyed by `(network name, security protocol)`.
//!
//! # Core Insight
//!
//! One physical network can show up under several security advertisements:
//! a WPA2/WPA3 transition beacon, a WPA3-only beacon next to a WPA2-only one,
//! an Enhanced Open transition beacon. Users should see one choice, and that
//! choice should be the one their saved credentials can actually use.
//!
//! # Three Signals
//!
//! Every decision combines:
//! 1. What each beacon in range advertises ([`beaconmap_security::classify`])
//! 2. Which profiles are already saved ([`ProfileIndex`])
//! 3. What the platform supports ([`CorrelationContext`])
//!
//! # Two Modes
//!
//! - [`SelectionMode::Single`]: each observation lands on at most one key,
//!   chosen by an ordered rule table ([`rules::SINGLE_SELECTION_RULES`]).
//! - [`SelectionMode::MultiKey`]: each observation lands on every key it can
//!   connect with, and WPA3-only beacons also match WPA2 profiles.
//!
//! The mapping is a pure function of its inputs: no state survives between
//! calls.

mod describe;
mod key;
mod mapper;
mod observation;
mod profile;
pub mod rules;

pub use describe::{
    auto_connect_description, metered_description, network_entries, speed_description,
    verbose_description, DisplayStrings, EnglishStrings, NetworkEntry,
};
pub use key::{EntryKey, EntryKeyError, ENTRY_KEY_PREFIX};
pub use mapper::{map_to_entry_keys, EntryKeyMap, EntryKeyMapper, SelectionMode};
pub use observation::{best_signal, BeaconObservation, CorrelationContext};
pub use profile::{index_profiles, MeteredChoice, ProfileIndex, SavedProfile};

pub use beaconmap_security::{ProtocolSet, SecurityProtocol};
