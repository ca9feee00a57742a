//! Race and job library loading

use super::ConfigError;
use crate::element::Element;
use crate::source::{Job, Race};
use crate::stat_block::{StatBlock, StatName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

/// Raw TOML layout of the modifier library
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LibraryConfig {
    #[serde(default)]
    races: HashMap<String, RaceEntry>,
    #[serde(default)]
    jobs: HashMap<String, JobEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RaceEntry {
    #[serde(default)]
    elements: Vec<Element>,
    #[serde(default)]
    stats: HashMap<String, i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JobEntry {
    #[serde(default)]
    stats: HashMap<String, i32>,
}

/// Races and jobs keyed by id
#[derive(Debug, Clone, Default)]
pub struct ModifierLibrary {
    races: HashMap<String, Race>,
    jobs: HashMap<String, Job>,
}

impl ModifierLibrary {
    /// Get a race by id
    pub fn race(&self, id: &str) -> Option<&Race> {
        self.races.get(id)
    }

    /// Get a job by id
    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.get(id)
    }

    /// Iterate all races
    pub fn races(&self) -> impl Iterator<Item = &Race> {
        self.races.values()
    }

    /// Iterate all jobs
    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }

    fn from_config(config: LibraryConfig) -> Result<Self, ConfigError> {
        let mut races = HashMap::new();
        for (id, entry) in config.races {
            let race = Race::new(id.clone(), bonus_block(&id, &entry.stats)?)
                .with_elements(entry.elements)
                .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
            races.insert(id, race);
        }

        let mut jobs = HashMap::new();
        for (id, entry) in config.jobs {
            let stats = bonus_block(&id, &entry.stats)?;
            jobs.insert(id.clone(), Job::new(id, stats));
        }

        Ok(ModifierLibrary { races, jobs })
    }
}

fn bonus_block(owner: &str, stats: &HashMap<String, i32>) -> Result<StatBlock, ConfigError> {
    let mut block = StatBlock::zeroed();
    for (name, value) in stats {
        let stat = StatName::from_str(name).map_err(|_| {
            ConfigError::ValidationError(format!("unknown stat `{}` in `{}`", name, owner))
        })?;
        block.set(stat, *value);
    }
    Ok(block)
}

/// Load a modifier library from a TOML file
pub fn load_library(path: &Path) -> Result<ModifierLibrary, ConfigError> {
    let config: LibraryConfig = super::load_toml(path)?;
    ModifierLibrary::from_config(config)
}

/// Load a modifier library from a TOML string
pub fn parse_library(content: &str) -> Result<ModifierLibrary, ConfigError> {
    let config: LibraryConfig = super::parse_toml(content)?;
    ModifierLibrary::from_config(config)
}

/// Get the built-in races and jobs
pub fn default_library() -> ModifierLibrary {
    let toml = include_str!("../../config/modifiers.toml");
    parse_library(toml).unwrap_or_else(|err| {
        tracing::warn!("built-in modifier library failed to load: {}", err);
        ModifierLibrary::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Modifier;

    #[test]
    fn test_parse_library() {
        let toml = r#"
[races.golem]
elements = ["earth"]
stats = { con = 9 }

[jobs.bard]
stats = { wit = 2, men = 1 }
"#;

        let library = parse_library(toml).unwrap();
        let golem = library.race("golem").unwrap();
        assert_eq!(golem.stats().get(StatName::Con), 9);
        assert_eq!(golem.stats().get(StatName::Str), 0);
        assert!(golem.has_element(Element::Earth));

        let bard = library.job("bard").unwrap();
        assert_eq!(bard.id(), "bard");
        assert_eq!(bard.stats().get(StatName::Wit), 2);
    }

    #[test]
    fn test_duplicate_elements_fail_validation() {
        let toml = r#"
[races.twin]
elements = ["fire", "fire"]
"#;
        let err = parse_library(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_unknown_stat_fails_validation() {
        let toml = r#"
[jobs.gambler]
stats = { luck = 5 }
"#;
        assert!(matches!(
            parse_library(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_default_library_loads_all() {
        let library = default_library();
        assert_eq!(library.races().count(), 5);
        assert_eq!(library.jobs().count(), 6);

        for id in ["human", "elf", "dark_elf", "dwarf", "orc"] {
            assert!(library.race(id).is_some(), "Missing race: {}", id);
        }
        for id in ["wizard", "knight", "priest", "rogue", "archer", "monk"] {
            assert!(library.job(id).is_some(), "Missing job: {}", id);
        }

        let human = library.race("human").unwrap();
        assert_eq!(human.elements(), &[Element::Light, Element::Dark]);
        assert_eq!(library.job("knight").unwrap().stats().get(StatName::Con), 5);
    }
}
