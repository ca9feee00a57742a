//! Race - Permanent stat bonuses and elemental affinity

use crate::element::Element;
use crate::error::{CoreError, Result};
use crate::source::Modifier;
use crate::stat_block::StatBlock;

/// A character race
#[derive(Debug, Clone, PartialEq)]
pub struct Race {
    id: String,
    stats: StatBlock,
    /// Elements a character of this race receives bonuses for
    elements: Vec<Element>,
}

impl Race {
    /// Create a race without elemental affinity
    pub fn new(id: impl Into<String>, stats: StatBlock) -> Self {
        Race {
            id: id.into(),
            stats,
            elements: Vec::new(),
        }
    }

    /// Set the race's elements. Duplicates are rejected.
    pub fn with_elements(mut self, elements: Vec<Element>) -> Result<Self> {
        for (i, element) in elements.iter().enumerate() {
            if elements[..i].contains(element) {
                return Err(CoreError::InvalidArgument(format!(
                    "element `{}` listed twice for race `{}`",
                    element, self.id
                )));
            }
        }
        self.elements = elements;
        Ok(self)
    }

    /// The race's elements
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Whether the race has an affinity for `element`
    pub fn has_element(&self, element: Element) -> bool {
        self.elements.contains(&element)
    }
}

impl Modifier for Race {
    fn id(&self) -> &str {
        &self.id
    }

    fn stats(&self) -> &StatBlock {
        &self.stats
    }
}
