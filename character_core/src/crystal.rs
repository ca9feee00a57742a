//! Crystal - Elemental ability holders with their own AP progression
//!
//! A crystal levels up as it accumulates AP. The AP needed for the next
//! level grows by 1.5x (truncated) per level, the same curve characters use
//! for experience.

use crate::character::step_threshold;
use crate::element::Element;
use crate::error::{CoreError, Result};

/// Crystal level cap
pub const MAX_CRYSTAL_LEVEL: u32 = 10;

/// AP required to reach level 2
pub const BASE_AP: u64 = 45;

/// An elemental crystal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crystal {
    element: Element,
    level: u32,
    next_level: u64,
    ap: u64,
}

impl Crystal {
    /// Create a crystal of `element` at `level`
    pub fn new(element: Element, level: u32) -> Result<Self> {
        let mut crystal = Crystal {
            element,
            level: 1,
            next_level: BASE_AP,
            ap: 0,
        };
        crystal.set_level(level)?;
        Ok(crystal)
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// AP needed to reach the next level
    pub fn next_level(&self) -> u64 {
        self.next_level
    }

    /// AP earned in the current level
    pub fn ap(&self) -> u64 {
        self.ap
    }

    /// Set the crystal's level. Crystals never lose levels.
    pub fn set_level(&mut self, level: u32) -> Result<()> {
        if level == self.level {
            return Ok(());
        }

        if !(1..=MAX_CRYSTAL_LEVEL).contains(&level) {
            return Err(CoreError::OutOfRange {
                what: "crystal level",
                value: i64::from(level),
                min: 1,
                max: i64::from(MAX_CRYSTAL_LEVEL),
            });
        }

        if level < self.level {
            return Err(CoreError::InvalidArgument(format!(
                "crystal level must be greater or equal to {}",
                self.level
            )));
        }

        self.level = level;
        self.ap = 0;
        self.next_level = step_threshold(BASE_AP, level);
        Ok(())
    }

    /// Set the AP earned in the current level
    ///
    /// AP at or beyond `next_level` levels the crystal up, carrying the excess
    /// over. At the level cap the AP is pinned at `next_level`.
    pub fn set_ap(&mut self, ap: u64) {
        if ap < self.next_level {
            self.ap = ap;
            return;
        }

        let mut ap = ap;
        while ap >= self.next_level && self.level < MAX_CRYSTAL_LEVEL {
            ap -= self.next_level;
            self.level += 1;
            self.next_level = step_threshold(BASE_AP, self.level);
        }
        self.ap = ap.min(self.next_level);
    }

    /// Add AP to the crystal
    pub fn gain_ap(&mut self, amount: u64) {
        self.set_ap(self.ap.saturating_add(amount));
    }
}
