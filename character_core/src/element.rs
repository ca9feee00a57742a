//! Elements shared by races and crystals

use serde::{Deserialize, Serialize};

/// Elemental affinity
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Element {
    Fire,
    Water,
    Earth,
    Wind,
    Light,
    Dark,
}

impl Element {
    /// Get all elements
    pub fn all() -> &'static [Element] {
        &[
            Element::Fire,
            Element::Water,
            Element::Earth,
            Element::Wind,
            Element::Light,
            Element::Dark,
        ]
    }
}
