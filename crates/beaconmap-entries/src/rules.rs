//! Protocol choice for a single observation.
//!
//! # Inputs
//!
//! - [`SecurityFlags`]: the transition shape of one observation's *gated*
//!   protocol set (PSK only, SAE only, PSK+SAE, OWE only, Open+OWE, Open only).
//! - [`NetworkPresence`]: for the observation's network name, which protocols
//!   are in range (from *ungated* classification of every observation of that
//!   name) and which have a saved profile.
//!
//! # Single selection
//!
//! [`SINGLE_SELECTION_RULES`] is evaluated top to bottom and the first rule
//! whose shape applies decides. The decision either assigns protocols or
//! coalesces the observation away because a sibling beacon of the same
//! network will be offered instead.
//!
//! ```text
//!  psk              !psk_saved && sae_saved && sae_in_range → drop, else PSK
//!  psk_sae          !psk_saved && sae_saved → SAE, else PSK
//!  sae              !psk_saved && (sae_saved || !psk_in_range) → SAE, else PSK
//!  owe              open_in_range && open_saved && !owe_saved → drop, else nothing
//!  owe_transition   owe_saved || !open_saved → OWE, else Open
//!  open             owe_in_range && (owe_saved || !open_saved) → drop, else Open
//!  other            full gated set
//! ```
//!
//! The `owe` row assigns nothing when it does not drop, so a lone OWE beacon
//! never produces an entry in single-selection mode.
//!
//! # Multi key
//!
//! [`multi_key_protocols`] keeps the whole gated set and adds PSK to SAE-only
//! beacons, since a PSK profile can be upgraded to SAE at connection time.

use beaconmap_security::{ProtocolSet, SecurityProtocol};

/// Transition shape of one observation's gated protocol set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SecurityFlags {
    pub is_psk: bool,
    pub is_sae: bool,
    pub is_psk_sae_transition: bool,
    pub is_owe: bool,
    pub is_owe_transition: bool,
    pub is_open: bool,
}

impl SecurityFlags {
    pub fn from_protocols(protocols: ProtocolSet) -> Self {
        let psk = protocols.contains(SecurityProtocol::Psk);
        let sae = protocols.contains(SecurityProtocol::Sae);
        let owe = protocols.contains(SecurityProtocol::Owe);
        let open = protocols.contains(SecurityProtocol::Open);
        Self {
            is_psk: psk && !sae,
            is_sae: sae && !psk,
            is_psk_sae_transition: psk && sae,
            is_owe: owe && !open,
            is_owe_transition: open && owe,
            is_open: open && !owe,
        }
    }
}

/// What is in range and what is saved for one network name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetworkPresence {
    pub psk_in_range: bool,
    pub sae_in_range: bool,
    pub owe_in_range: bool,
    pub open_in_range: bool,
    pub psk_saved: bool,
    pub sae_saved: bool,
    pub open_saved: bool,
    pub owe_saved: bool,
}

impl NetworkPresence {
    /// Record the ungated protocols of one in-range observation.
    pub fn observe(&mut self, protocols: ProtocolSet) {
        self.psk_in_range |= protocols.contains(SecurityProtocol::Psk);
        self.sae_in_range |= protocols.contains(SecurityProtocol::Sae);
        self.owe_in_range |= protocols.contains(SecurityProtocol::Owe);
        self.open_in_range |= protocols.contains(SecurityProtocol::Open);
    }
}

/// Outcome of the single-selection table for one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Attribute the observation to these protocols (possibly none).
    Assign(ProtocolSet),
    /// Leave the observation out; a sibling beacon represents the network.
    Coalesce,
}

impl Choice {
    const fn one(protocol: SecurityProtocol) -> Self {
        Self::Assign(ProtocolSet::of(protocol))
    }

    /// Protocols to attribute the observation to.
    pub fn protocols(self) -> ProtocolSet {
        match self {
            Self::Assign(protocols) => protocols,
            Self::Coalesce => ProtocolSet::EMPTY,
        }
    }
}

/// One row of the single-selection table.
#[derive(Debug, Clone, Copy)]
pub struct SelectionRule {
    pub name: &'static str,
    pub applies: fn(&SecurityFlags) -> bool,
    pub choose: fn(&NetworkPresence, ProtocolSet) -> Choice,
}

/// Single-selection rules, evaluated first match wins.
pub static SINGLE_SELECTION_RULES: [SelectionRule; 7] = [
    SelectionRule {
        name: "psk",
        applies: |f| f.is_psk,
        choose: choose_psk,
    },
    SelectionRule {
        name: "psk_sae",
        applies: |f| f.is_psk_sae_transition,
        choose: choose_psk_sae,
    },
    SelectionRule {
        name: "sae",
        applies: |f| f.is_sae,
        choose: choose_sae,
    },
    SelectionRule {
        name: "owe",
        applies: |f| f.is_owe,
        choose: choose_owe,
    },
    SelectionRule {
        name: "owe_transition",
        applies: |f| f.is_owe_transition,
        choose: choose_owe_transition,
    },
    SelectionRule {
        name: "open",
        applies: |f| f.is_open,
        choose: choose_open,
    },
    SelectionRule {
        name: "other",
        applies: |_| true,
        choose: |_, gated| Choice::Assign(gated),
    },
];

fn choose_psk(p: &NetworkPresence, _: ProtocolSet) -> Choice {
    if !p.psk_saved && p.sae_saved && p.sae_in_range {
        Choice::Coalesce
    } else {
        Choice::one(SecurityProtocol::Psk)
    }
}

fn choose_psk_sae(p: &NetworkPresence, _: ProtocolSet) -> Choice {
    if !p.psk_saved && p.sae_saved {
        Choice::one(SecurityProtocol::Sae)
    } else {
        Choice::one(SecurityProtocol::Psk)
    }
}

fn choose_sae(p: &NetworkPresence, _: ProtocolSet) -> Choice {
    if !p.psk_saved && (p.sae_saved || !p.psk_in_range) {
        Choice::one(SecurityProtocol::Sae)
    } else {
        Choice::one(SecurityProtocol::Psk)
    }
}

fn choose_owe(p: &NetworkPresence, _: ProtocolSet) -> Choice {
    if p.open_in_range && p.open_saved && !p.owe_saved {
        Choice::Coalesce
    } else {
        // Assigns nothing; lone OWE beacons yield no entry here.
        Choice::Assign(ProtocolSet::EMPTY)
    }
}

fn choose_owe_transition(p: &NetworkPresence, _: ProtocolSet) -> Choice {
    if p.owe_saved || !p.open_saved {
        Choice::one(SecurityProtocol::Owe)
    } else {
        Choice::one(SecurityProtocol::Open)
    }
}

fn choose_open(p: &NetworkPresence, _: ProtocolSet) -> Choice {
    if p.owe_in_range && (p.owe_saved || !p.open_saved) {
        Choice::Coalesce
    } else {
        Choice::one(SecurityProtocol::Open)
    }
}

/// Find the first single-selection rule that applies.
pub fn matching_rule(flags: &SecurityFlags) -> &'static SelectionRule {
    let last = SINGLE_SELECTION_RULES.len() - 1;
    SINGLE_SELECTION_RULES
        .iter()
        .find(|rule| (rule.applies)(flags))
        .unwrap_or(&SINGLE_SELECTION_RULES[last])
}

/// Choose protocols for one observation in single-selection mode.
pub fn single_selection(presence: &NetworkPresence, gated: ProtocolSet) -> (&'static str, Choice) {
    let rule = matching_rule(&SecurityFlags::from_protocols(gated));
    (rule.name, (rule.choose)(presence, gated))
}

/// Protocols for one observation in multi-key mode.
pub fn multi_key_protocols(gated: ProtocolSet) -> ProtocolSet {
    if SecurityFlags::from_protocols(gated).is_sae {
        gated.with(SecurityProtocol::Psk)
    } else {
        gated
    }
}
