//! Character - Level, experience and the stats/attributes they drive
//!
//! A character owns its base stats (defaults plus race and any other
//! modifiers it was built from), the effective stats (base plus job) and the
//! attributes computed from those and its level. Changing an effective stat,
//! the job or the level recalculates attributes straight away.

mod crystals;
mod experience;

pub(crate) use experience::step_threshold;

use crate::attributes::{AttributeName, AttributeSet};
use crate::config::GameConstants;
use crate::crystal::Crystal;
use crate::error::{CoreError, Result};
use crate::party::PartyId;
use crate::source::{Job, Modifier, Race};
use crate::stat_block::{StatBlock, StatName};
use crate::types::Value;
use std::cell::Cell;
use std::rc::Rc;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 50;

/// Experience needed to leave level 1
pub const BASE_EXP: u64 = 100;

/// Experience needed to advance from `level` to the next one
pub fn experience_for_level(level: u32) -> u64 {
    step_threshold(BASE_EXP, level)
}

/// A playable character
#[derive(Debug)]
pub struct Character {
    race: Option<Race>,
    job: Option<Job>,
    base_stats: StatBlock,
    stats: StatBlock,
    attributes: AttributeSet,
    level: u32,
    experience: u64,
    next_level: u64,
    crystals: Vec<Crystal>,
    party: Option<PartyId>,
    constants: GameConstants,
    // Raised by the subscription on `stats`
    stale: Rc<Cell<bool>>,
    recalculations: u64,
}

impl Character {
    /// Build a character from default stats plus every modifier's bonus
    pub fn new(modifiers: &[&dyn Modifier], level: u32) -> Result<Self> {
        let mut base_stats = StatBlock::new();
        for modifier in modifiers {
            modifier.apply(&mut base_stats);
        }
        Self::assemble(base_stats, None, None, level)
    }

    /// Build a character of the given race, optionally with a job
    pub fn from_race(race: Race, job: Option<Job>, level: u32) -> Result<Self> {
        let mut base_stats = StatBlock::new();
        race.apply(&mut base_stats);
        Self::assemble(base_stats, Some(race), job, level)
    }

    /// Use different game constants (crystal binding rules)
    pub fn with_constants(mut self, constants: GameConstants) -> Self {
        self.constants = constants;
        self
    }

    fn assemble(
        base_stats: StatBlock,
        race: Option<Race>,
        job: Option<Job>,
        level: u32,
    ) -> Result<Self> {
        check_level(level)?;

        let stats = base_stats.derive(job.as_ref().map(|j| j.stats()));
        let mut character = Character {
            race,
            job,
            base_stats,
            stats,
            attributes: AttributeSet::new(),
            level: 1,
            experience: 0,
            next_level: BASE_EXP,
            crystals: Vec::new(),
            party: None,
            constants: GameConstants::default(),
            stale: Rc::new(Cell::new(false)),
            recalculations: 0,
        };
        character.watch_stats();
        character.assign_level(level);
        character.recalculate(true);

        tracing::debug!(
            race = character.race.as_ref().map(|r| r.id()),
            job = character.job.as_ref().map(|j| j.id()),
            level,
            "character created"
        );
        Ok(character)
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Experience earned in the current level
    pub fn experience(&self) -> u64 {
        self.experience
    }

    /// Experience needed to reach the next level
    pub fn next_level(&self) -> u64 {
        self.next_level
    }

    pub fn race(&self) -> Option<&Race> {
        self.race.as_ref()
    }

    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    /// Stats before the job bonus
    pub fn base_stats(&self) -> &StatBlock {
        &self.base_stats
    }

    /// Effective stats, job bonus included
    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// Direct access to attributes, e.g. to spend health or mana
    pub fn attributes_mut(&mut self) -> &mut AttributeSet {
        &mut self.attributes
    }

    pub fn constants(&self) -> &GameConstants {
        &self.constants
    }

    /// Number of attribute recalculations performed so far
    pub fn recalculation_count(&self) -> u64 {
        self.recalculations
    }

    /// Jump to `level` with zero experience, refilling health and mana
    pub fn set_level(&mut self, level: u32) -> Result<()> {
        check_level(level)?;
        let from = self.level;
        self.assign_level(level);
        self.recalculate(true);
        tracing::debug!(from, to = level, "level set");
        Ok(())
    }

    /// Change the job (or drop it with `None`)
    ///
    /// Effective stats are rebuilt from the base stats; health and mana keep
    /// their current values within the new bounds.
    pub fn set_job(&mut self, job: Option<Job>) {
        self.stats = self.base_stats.derive(job.as_ref().map(|j| j.stats()));
        self.watch_stats();

        tracing::debug!(
            from = self.job.as_ref().map(|j| j.id()),
            to = job.as_ref().map(|j| j.id()),
            "job changed"
        );
        self.job = job;
        self.recalculate(false);
    }

    /// Set an effective stat, returning the stored (clamped) value
    ///
    /// Attributes are recalculated only if the stored value changed.
    pub fn set_stat(&mut self, stat: StatName, value: i32) -> i32 {
        let stored = self.stats.set(stat, value);
        self.refresh();
        stored
    }

    /// Set an effective stat by its string name
    pub fn set_stat_by_name(&mut self, name: &str, value: Value) -> Result<i32> {
        let stored = self.stats.set_by_name(name, value)?;
        self.refresh();
        Ok(stored)
    }

    /// Set an attribute, checked against its kind and bounds
    pub fn set_attribute(&mut self, name: AttributeName, value: impl Into<Value>) -> Result<Value> {
        self.attributes.set(name, value)
    }

    /// The party this character belongs to
    pub fn party(&self) -> Option<PartyId> {
        self.party
    }

    pub fn join_party(&mut self, party: PartyId) -> Result<()> {
        if self.party.is_some() {
            return Err(CoreError::AlreadyInParty);
        }
        self.party = Some(party);
        Ok(())
    }

    /// Leave the current party, returning its id
    pub fn leave_party(&mut self) -> Result<PartyId> {
        self.party.take().ok_or(CoreError::NotInParty)
    }

    fn watch_stats(&mut self) {
        let stale = Rc::clone(&self.stale);
        self.stats.subscribe(Box::new(move |change| {
            tracing::trace!(
                stat = %change.stat,
                old = change.old,
                new = change.new,
                "stat changed"
            );
            stale.set(true);
        }));
        self.stale.set(false);
    }

    fn refresh(&mut self) {
        if self.stale.replace(false) {
            self.recalculate(false);
        }
    }

    /// Move to `level` with zero experience, without recalculating
    fn assign_level(&mut self, level: u32) {
        self.level = level;
        self.experience = 0;
        self.next_level = experience_for_level(level);
    }

    fn recalculate(&mut self, reset_transients: bool) {
        self.attributes
            .recompute(&self.stats, self.level, reset_transients);
        self.recalculations += 1;
        tracing::trace!(level = self.level, reset_transients, "attributes recalculated");
    }
}

fn check_level(level: u32) -> Result<()> {
    if !(1..=MAX_LEVEL).contains(&level) {
        return Err(CoreError::OutOfRange {
            what: "level",
            value: i64::from(level),
            min: 1,
            max: i64::from(MAX_LEVEL),
        });
    }
    Ok(())
}
