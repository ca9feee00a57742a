//! Job - The role a character plays, with its stat bonuses

use crate::source::Modifier;
use crate::stat_block::StatBlock;

/// A character job (wizard, knight, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    id: String,
    stats: StatBlock,
}

impl Job {
    /// Create a new job
    pub fn new(id: impl Into<String>, stats: StatBlock) -> Self {
        Job {
            id: id.into(),
            stats,
        }
    }
}

impl Modifier for Job {
    fn id(&self) -> &str {
        &self.id
    }

    fn stats(&self) -> &StatBlock {
        &self.stats
    }
}
