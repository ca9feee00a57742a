//! AttributeName - Identifiers of derived and transient attributes

use serde::{Deserialize, Serialize};

/// Identifier of a character attribute
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
pub enum AttributeName {
    Defense,
    TotalHealth,
    Attack,
    CriticalDamage,
    CriticalRate,
    AttackSpeed,
    Evasion,
    Accuracy,
    Speed,
    MagicPower,
    MagicCriticalDamage,
    MagicDefense,
    TotalMana,
    MagicCriticalRate,
    MagicAccuracy,
    MagicEvasion,
    CastingSpeed,
    // Transient
    Health,
    Mana,
}

/// Number of defined attributes
pub const ATTRIBUTE_COUNT: usize = 19;

impl AttributeName {
    /// All attributes in declaration order
    pub const ALL: [AttributeName; ATTRIBUTE_COUNT] = [
        AttributeName::Defense,
        AttributeName::TotalHealth,
        AttributeName::Attack,
        AttributeName::CriticalDamage,
        AttributeName::CriticalRate,
        AttributeName::AttackSpeed,
        AttributeName::Evasion,
        AttributeName::Accuracy,
        AttributeName::Speed,
        AttributeName::MagicPower,
        AttributeName::MagicCriticalDamage,
        AttributeName::MagicDefense,
        AttributeName::TotalMana,
        AttributeName::MagicCriticalRate,
        AttributeName::MagicAccuracy,
        AttributeName::MagicEvasion,
        AttributeName::CastingSpeed,
        AttributeName::Health,
        AttributeName::Mana,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The transient attribute capped by this total, if any
    pub fn transient(self) -> Option<AttributeName> {
        match self {
            AttributeName::TotalHealth => Some(AttributeName::Health),
            AttributeName::TotalMana => Some(AttributeName::Mana),
            _ => None,
        }
    }

    /// Whether this attribute is transient (health or mana)
    pub fn is_transient(self) -> bool {
        matches!(self, AttributeName::Health | AttributeName::Mana)
    }
}
