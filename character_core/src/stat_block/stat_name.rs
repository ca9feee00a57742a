//! StatName - The six base stats

use serde::{Deserialize, Serialize};

/// Identifier of a base stat
///
/// - `Con`: physical defense and health
/// - `Str`: physical attack and critical damage
/// - `Dex`: critical rate, evasion, accuracy and speed
/// - `Int`: magic power and magical critical damage
/// - `Men`: magical defense and mana
/// - `Wit`: magical critical rate, accuracy, evasion and casting speed
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StatName {
    Con,
    Str,
    Dex,
    Int,
    Men,
    Wit,
}

/// Number of base stats
pub const STAT_COUNT: usize = 6;

impl StatName {
    /// All stats in declaration order
    pub const ALL: [StatName; STAT_COUNT] = [
        StatName::Con,
        StatName::Str,
        StatName::Dex,
        StatName::Int,
        StatName::Men,
        StatName::Wit,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
