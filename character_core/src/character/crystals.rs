//! Crystal binding
//!
//! Slots open up as the character levels: the n-th crystal needs
//! `n * (level_cap / max_crystals)`, so the first one can be bound right away.

use super::Character;
use crate::crystal::Crystal;
use crate::element::Element;
use crate::error::{BindError, CoreError};

impl Character {
    /// Crystals bound to this character, in binding order
    pub fn crystals(&self) -> &[Crystal] {
        &self.crystals
    }

    /// The bound crystal of `element`, if any
    pub fn crystal(&self, element: Element) -> Option<&Crystal> {
        self.crystals.iter().find(|c| c.element() == element)
    }

    /// Bind a crystal to this character
    ///
    /// On rejection the crystal is returned inside the error.
    pub fn bind_crystal(&mut self, crystal: Crystal) -> Result<(), BindError> {
        if let Err(reason) = self.check_binding(crystal.element()) {
            tracing::debug!(element = %crystal.element(), %reason, "crystal binding rejected");
            return Err(BindError { reason, crystal });
        }

        tracing::debug!(
            element = %crystal.element(),
            level = crystal.level(),
            "crystal bound"
        );
        self.crystals.push(crystal);
        Ok(())
    }

    /// Remove the crystal of `element`, handing it back
    pub fn unbind_crystal(&mut self, element: Element) -> Option<Crystal> {
        let index = self.crystals.iter().position(|c| c.element() == element)?;
        tracing::debug!(element = %element, "crystal unbound");
        Some(self.crystals.remove(index))
    }

    /// Give AP to the bound crystal of `element`
    ///
    /// Returns false when no such crystal is bound.
    pub fn grant_crystal_ap(&mut self, element: Element, amount: u64) -> bool {
        match self.crystals.iter_mut().find(|c| c.element() == element) {
            Some(crystal) => {
                crystal.gain_ap(amount);
                true
            }
            None => false,
        }
    }

    fn check_binding(&self, element: Element) -> Result<(), CoreError> {
        let binding = &self.constants.binding;
        let bound = self.crystals.len();

        if bound >= binding.max_crystals {
            return Err(CoreError::CrystalLimitReached {
                limit: binding.max_crystals,
            });
        }

        let required = binding.required_level(bound);
        if self.level < required {
            return Err(CoreError::LevelTooLowForCrystalBinding {
                level: self.level,
                required,
            });
        }

        if self.crystal(element).is_some() {
            return Err(CoreError::SameElementCrystalAlreadyBound(element));
        }

        Ok(())
    }
}
