//! Game constants configuration

use super::{parse_toml, ConfigError};
use serde::{Deserialize, Serialize};

/// Tunable game constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub binding: BindingConstants,
}

impl GameConstants {
    /// Parse and validate constants from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let constants: GameConstants = parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Check that the constants are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.binding.validate()
    }
}

/// Crystal binding rules
///
/// The n-th crystal (counting from zero) can be bound once the character
/// reaches `n * (level_cap / max_crystals)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConstants {
    /// Maximum number of crystals a character can hold
    #[serde(default = "default_max_crystals")]
    pub max_crystals: usize,
    /// Level the binding steps are spread across
    #[serde(default = "default_level_cap")]
    pub level_cap: u32,
}

impl Default for BindingConstants {
    fn default() -> Self {
        BindingConstants {
            max_crystals: default_max_crystals(),
            level_cap: default_level_cap(),
        }
    }
}

fn default_max_crystals() -> usize {
    3
}

fn default_level_cap() -> u32 {
    crate::character::MAX_LEVEL
}

impl BindingConstants {
    /// Levels between two consecutive binding slots
    pub fn level_step(&self) -> u32 {
        // validate() rules out a zero divisor
        self.level_cap / self.max_crystals.max(1) as u32
    }

    /// Level required to bind a crystal when `bound` are already held
    pub fn required_level(&self, bound: usize) -> u32 {
        (bound as u32).saturating_mul(self.level_step())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_crystals == 0 {
            return Err(ConfigError::ValidationError(
                "binding.max_crystals must be at least 1".to_string(),
            ));
        }
        if self.level_cap == 0 {
            return Err(ConfigError::ValidationError(
                "binding.level_cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
