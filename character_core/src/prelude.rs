//! Prelude module for convenient imports
//!
//! ```rust
//! use character_core::prelude::*;
//! ```

// Core types
pub use crate::attributes::{AttributeName, AttributeSet};
pub use crate::stat_block::{StatBlock, StatName};
pub use crate::types::{Value, ValueKind};

// Progression
pub use crate::character::{Character, MAX_LEVEL};
pub use crate::crystal::Crystal;
pub use crate::element::Element;
pub use crate::party::PartyId;

// Modifiers
pub use crate::source::{Job, Modifier, Race};

// Errors
pub use crate::error::{BindError, CoreError, ErrorKind};

// Config
pub use crate::config::{default_library, GameConstants};
