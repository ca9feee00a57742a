//! character_core - Character progression library for RPG entities
//!
//! This library provides:
//! - StatBlock: The six primary stats, clamped and observable
//! - AttributeSet: Derived attributes computed from stats and level
//! - Character: Level and experience progression driving both
//! - Race/Job: Stat modifiers, loadable from TOML
//! - Crystal: Elemental crystals with their own AP progression

pub mod attributes;
pub mod character;
pub mod config;
pub mod crystal;
pub mod element;
pub mod error;
pub mod party;
pub mod prelude;
pub mod source;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use attributes::{AttributeName, AttributeSet, Bound};
pub use character::{experience_for_level, Character, BASE_EXP, MAX_LEVEL};
pub use config::{default_library, GameConstants, ModifierLibrary};
pub use crystal::{Crystal, BASE_AP, MAX_CRYSTAL_LEVEL};
pub use element::Element;
pub use error::{BindError, CoreError, ErrorKind, Result};
pub use party::PartyId;
pub use source::{Job, Modifier, Race};
pub use stat_block::{
    StatBlock, StatChange, StatName, SubscriptionId, DEFAULT_STAT, MAX_STAT, STAT_COUNT,
};
pub use types::{Value, ValueKind};
