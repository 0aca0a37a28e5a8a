//! Beaconmap Security
//!
//! Security protocol classification for Wi-Fi networks.
//!
//! # Two sources of truth
//!
//! The same network can be described two ways:
//! - A **beacon** in range advertises a capability descriptor, which may name
//!   several protocols at once (transition mode).
//! - A **saved profile** stores allowed key-management schemes, which always
//!   resolve to exactly one protocol.
//!
//! [`classify`] handles the first, [`resolve_profile_security`] the second.
//! Both are pure first-match decision tables with a total fallback to
//! [`SecurityProtocol::Open`], so neither ever fails.

mod classify;
mod profile;
mod protocol;

pub use classify::{classify, ClassificationRule, CLASSIFICATION_RULES, FALLBACK};
pub use profile::{resolve_profile_security, AllowedKeyManagement, KeyManagement, ProfileSecurity};
pub use protocol::{Iter, ParseError, ProtocolSet, SecurityProtocol};
