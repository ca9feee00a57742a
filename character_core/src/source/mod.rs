//! Modifier - Trait and implementations for stat bonus providers

mod job;
mod race;

pub use job::Job;
pub use race::Race;

use crate::stat_block::StatBlock;

/// Anything that contributes bonus stats to a character (race, job, ...)
pub trait Modifier {
    /// Unique identifier for this modifier
    fn id(&self) -> &str;

    /// The bonus stats this modifier grants
    fn stats(&self) -> &StatBlock;

    /// Fold this modifier's bonus into `target`
    fn apply(&self, target: &mut StatBlock) {
        target.merge(self.stats());
    }
}
