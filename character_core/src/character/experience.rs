//! Experience gain and loss
//!
//! Crossing `next_level` levels the character up, possibly several times in
//! one call; losing more experience than the current level holds levels it
//! down. Attributes are recalculated once, after the cascade settles, with
//! health and mana refilled.

use super::{Character, MAX_LEVEL};

/// Threshold after `level - 1` steps of 1.5x growth from `base`, truncating
/// at each step
pub(crate) fn step_threshold(base: u64, level: u32) -> u64 {
    (1..level).fold(base, |acc, _| acc.saturating_mul(3) / 2)
}

impl Character {
    /// Apply a signed experience change
    pub fn apply_experience(&mut self, delta: i64) {
        match delta {
            0 => {}
            d if d > 0 => self.add_experience(d.unsigned_abs()),
            d => self.subtract_experience(d.unsigned_abs()),
        }
    }

    /// Gain experience, levelling up as many times as it allows
    ///
    /// At the level cap any excess is pinned at `next_level`.
    pub fn add_experience(&mut self, amount: u64) {
        if amount == 0 {
            return;
        }

        let total = self.experience.saturating_add(amount);
        if total < self.next_level {
            self.experience = total;
            return;
        }

        let from = self.level;
        let mut remaining = total;
        while remaining >= self.next_level && self.level < MAX_LEVEL {
            remaining -= self.next_level;
            self.assign_level(self.level + 1);
        }

        self.recalculate(true);
        self.experience = remaining.min(self.next_level);

        tracing::debug!(
            from,
            to = self.level,
            experience = self.experience,
            "experience gain levelled up"
        );
    }

    /// Lose experience, levelling down when it runs out
    ///
    /// Each level lost refills experience to the lower level's `next_level`
    /// before the remainder is taken from it. Level 1 is a floor: experience
    /// there never goes below zero.
    pub fn subtract_experience(&mut self, amount: u64) {
        if amount <= self.experience {
            self.experience -= amount;
            return;
        }

        if self.level == 1 {
            self.experience = 0;
            return;
        }

        let from = self.level;
        let mut remaining = amount;
        while remaining >= self.experience && self.level > 1 {
            remaining -= self.experience;
            self.assign_level(self.level - 1);
            self.experience = self.next_level;
        }

        self.recalculate(true);
        self.experience = if remaining > self.experience {
            0
        } else {
            self.experience - remaining
        };

        tracing::debug!(
            from,
            to = self.level,
            experience = self.experience,
            "experience loss levelled down"
        );
    }
}
