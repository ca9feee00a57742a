//! AttributeSet - Derived and transient attributes with symbolic bounds
//!
//! Values are computed from a [`StatBlock`] and a level through the static
//! definition table. Every write goes through [`AttributeSet::set`], which
//! clamps to the attribute's resolved bounds:
//!
//! 1. raise to the minimum if below it
//! 2. lower to the maximum if above it
//! 3. if a total shrank below its transient (`health`/`mana`), lower the
//!    transient to match
//!
//! Bounds that reference another attribute are resolved against that
//! attribute's current value on every write.

mod definition;
pub mod formulas;
mod name;

pub use definition::{definitions, AttributeDefinition, Bound};
pub use formulas::Formula;
pub use name::{AttributeName, ATTRIBUTE_COUNT};

use crate::error::{CoreError, Result};
use crate::stat_block::StatBlock;
use crate::types::Value;
use std::str::FromStr;

/// Current value of every attribute
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSet {
    values: [Value; ATTRIBUTE_COUNT],
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeSet {
    /// Create a set with every attribute at its minimum
    pub fn new() -> Self {
        let mut values = [Value::Int(0); ATTRIBUTE_COUNT];
        for def in definitions() {
            let min = match def.min {
                Bound::Literal(v) => v,
                // Referenced minima are not used by the table; seed at zero
                Bound::Reference(_) => 0.0,
            };
            values[def.name.index()] = Value::from_bound(def.kind, min);
        }
        AttributeSet { values }
    }

    /// Create a set computed from `stats` at `level`, with transients full
    pub fn computed(stats: &StatBlock, level: u32) -> Self {
        let mut set = Self::new();
        set.recompute(stats, level, true);
        set
    }

    /// Get an attribute's current value
    pub fn get(&self, name: AttributeName) -> Value {
        self.values[name.index()]
    }

    /// Get an integer attribute, or `None` for fractional ones
    pub fn get_int(&self, name: AttributeName) -> Option<i64> {
        self.get(name).as_int()
    }

    /// Get a fractional attribute, or `None` for integer ones
    pub fn get_float(&self, name: AttributeName) -> Option<f64> {
        self.get(name).as_float()
    }

    /// Get an attribute by its string name
    pub fn get_by_name(&self, name: &str) -> Result<Value> {
        let attribute = parse_name(name)?;
        Ok(self.get(attribute))
    }

    /// Set an attribute, clamping it to its bounds
    ///
    /// Fails with `TypeMismatch` if the value's kind differs from the
    /// attribute's defined kind, and with `InvalidArgument` for NaN or
    /// infinite values. Returns the stored value.
    pub fn set(&mut self, name: AttributeName, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        let def = name.definition();
        if value.kind() != def.kind {
            return Err(CoreError::TypeMismatch {
                attribute: name,
                expected: def.kind,
                found: value.kind(),
            });
        }
        if !value.as_f64().is_finite() {
            return Err(CoreError::InvalidArgument(format!(
                "attribute `{}` must be a finite number, got {}",
                name, value
            )));
        }

        let stored = self.clamp(def, value);
        self.values[name.index()] = stored;

        if let Some(transient) = name.transient() {
            self.reconcile_transient(transient, stored);
        }

        Ok(stored)
    }

    /// Set an attribute by its string name
    pub fn set_by_name(&mut self, name: &str, value: Value) -> Result<Value> {
        let attribute = parse_name(name)?;
        self.set(attribute, value)
    }

    /// Re-evaluate every formula against `stats` and `level`
    ///
    /// When `reset_transients` is set, health and mana are refilled to their
    /// totals after all formulas have been applied.
    ///
    /// # Panics
    ///
    /// Panics if a formula yields a value of the wrong kind. The definition
    /// table guarantees this cannot happen.
    pub fn recompute(&mut self, stats: &StatBlock, level: u32, reset_transients: bool) {
        for def in definitions() {
            if let Some(formula) = def.formula {
                self.apply(def.name, formula(stats, level));
            }
        }

        if reset_transients {
            self.apply(AttributeName::Health, self.get(AttributeName::TotalHealth));
            self.apply(AttributeName::Mana, self.get(AttributeName::TotalMana));
        }
    }

    /// Resolved `(min, max)` bounds of an attribute. `max` is infinite when
    /// the attribute is unbounded above.
    pub fn bounds(&self, name: AttributeName) -> (f64, f64) {
        let def = name.definition();
        let min = self.resolve(def.min);
        let max = def.max.map(|b| self.resolve(b)).unwrap_or(f64::INFINITY);
        (min, max)
    }

    /// Iterate attributes in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (AttributeName, Value)> + '_ {
        AttributeName::ALL.iter().map(move |name| (*name, self.get(*name)))
    }

    fn apply(&mut self, name: AttributeName, value: Value) {
        if let Err(err) = self.set(name, value) {
            panic!("attribute invariant violated while recomputing `{}`: {}", name, err);
        }
    }

    fn clamp(&self, def: &AttributeDefinition, value: Value) -> Value {
        let mut value = value;

        let min = self.resolve(def.min);
        if value.as_f64() < min {
            value = Value::from_bound(def.kind, min);
        }

        if let Some(max) = def.max {
            let max = self.resolve(max);
            if value.as_f64() > max {
                value = Value::from_bound(def.kind, max);
            }
        }

        value
    }

    fn resolve(&self, bound: Bound) -> f64 {
        match bound {
            Bound::Literal(v) => v,
            Bound::Reference(other) => self.get(other).as_f64(),
        }
    }

    fn reconcile_transient(&mut self, transient: AttributeName, total: Value) {
        if self.get(transient).as_f64() > total.as_f64() {
            self.values[transient.index()] = total;
        }
    }
}

fn parse_name(name: &str) -> Result<AttributeName> {
    AttributeName::from_str(name).map_err(|_| CoreError::unknown_attribute(name))
}
