//! Error types for character_core
//!
//! Rejected input is reported through [`CoreError`]. Out-of-bounds values for
//! stats and attributes are not errors: they are clamped by the owning
//! container.

use crate::attributes::AttributeName;
use crate::crystal::Crystal;
use crate::element::Element;
use crate::types::ValueKind;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, CoreError>;

/// Broad classification of a [`CoreError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong value type or otherwise unacceptable argument
    InvalidArgument,
    /// Unrecognized stat or attribute identifier
    UnknownName,
    /// A level outside its allowed range
    OutOfRange,
    /// Party membership call-outs
    Party,
    /// Crystal binding rules
    Crystal,
}

/// Errors raised by character_core operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("attribute `{attribute}` expects {expected} but got {found}")]
    TypeMismatch {
        attribute: AttributeName,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("unrecognized {kind} `{name}`")]
    UnknownName { kind: &'static str, name: String },

    #[error("{what} must be between {min} and {max}, got {value}")]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("character not currently in party")]
    NotInParty,

    #[error("character already in a party")]
    AlreadyInParty,

    #[error("crystal limit of {limit} reached")]
    CrystalLimitReached { limit: usize },

    #[error("level {level} is too low to bind another crystal (requires {required})")]
    LevelTooLowForCrystalBinding { level: u32, required: u32 },

    #[error("a {0} crystal is already bound")]
    SameElementCrystalAlreadyBound(Element),
}

impl CoreError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidArgument(_) | CoreError::TypeMismatch { .. } => {
                ErrorKind::InvalidArgument
            }
            CoreError::UnknownName { .. } => ErrorKind::UnknownName,
            CoreError::OutOfRange { .. } => ErrorKind::OutOfRange,
            CoreError::NotInParty | CoreError::AlreadyInParty => ErrorKind::Party,
            CoreError::CrystalLimitReached { .. }
            | CoreError::LevelTooLowForCrystalBinding { .. }
            | CoreError::SameElementCrystalAlreadyBound(_) => ErrorKind::Crystal,
        }
    }

    pub(crate) fn unknown_stat(name: &str) -> Self {
        CoreError::UnknownName {
            kind: "stat",
            name: name.to_string(),
        }
    }

    pub(crate) fn unknown_attribute(name: &str) -> Self {
        CoreError::UnknownName {
            kind: "attribute",
            name: name.to_string(),
        }
    }
}

/// A rejected crystal binding. The crystal is handed back to the caller.
#[derive(Error, Debug)]
#[error("{reason}")]
pub struct BindError {
    pub reason: CoreError,
    pub crystal: Crystal,
}

impl BindError {
    /// Recover the crystal that could not be bound
    pub fn into_crystal(self) -> Crystal {
        self.crystal
    }
}
