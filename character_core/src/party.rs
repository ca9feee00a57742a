//! Party membership back-reference
//!
//! Roster bookkeeping lives outside this crate; a character only remembers
//! which party it belongs to.

use serde::{Deserialize, Serialize};

/// Opaque identifier of a party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartyId(u64);

impl PartyId {
    pub fn new(raw: u64) -> Self {
        PartyId(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for PartyId {
    fn from(raw: u64) -> Self {
        PartyId(raw)
    }
}
