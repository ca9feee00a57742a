//! Static attribute definitions: bounds, kinds and formulas

use super::formulas::{self, Formula};
use super::name::{AttributeName, ATTRIBUTE_COUNT};
use crate::types::ValueKind;

/// A bound on an attribute value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// A fixed number
    Literal(f64),
    /// The live value of another attribute
    Reference(AttributeName),
}

/// Definition of a single attribute
#[derive(Debug, Clone, Copy)]
pub struct AttributeDefinition {
    pub name: AttributeName,
    pub min: Bound,
    pub max: Option<Bound>,
    pub kind: ValueKind,
    pub formula: Option<Formula>,
}

impl AttributeDefinition {
    const fn integer(name: AttributeName, formula: Formula) -> Self {
        AttributeDefinition {
            name,
            min: Bound::Literal(0.0),
            max: None,
            kind: ValueKind::Integer,
            formula: Some(formula),
        }
    }

    const fn fractional(name: AttributeName, formula: Formula) -> Self {
        AttributeDefinition {
            name,
            min: Bound::Literal(0.0),
            max: None,
            kind: ValueKind::Fractional,
            formula: Some(formula),
        }
    }

    const fn transient(name: AttributeName, total: AttributeName) -> Self {
        AttributeDefinition {
            name,
            min: Bound::Literal(0.0),
            max: Some(Bound::Reference(total)),
            kind: ValueKind::Integer,
            formula: None,
        }
    }

    const fn capped(mut self, max: f64) -> Self {
        self.max = Some(Bound::Literal(max));
        self
    }
}

use AttributeName as A;

/// Every attribute, indexed by `AttributeName` discriminant
static DEFINITIONS: [AttributeDefinition; ATTRIBUTE_COUNT] = [
    AttributeDefinition::integer(A::Defense, formulas::defense),
    AttributeDefinition::integer(A::TotalHealth, formulas::total_health),
    AttributeDefinition::integer(A::Attack, formulas::attack),
    AttributeDefinition::fractional(A::CriticalDamage, formulas::critical_damage),
    AttributeDefinition::fractional(A::CriticalRate, formulas::critical_rate).capped(1.0),
    AttributeDefinition::integer(A::AttackSpeed, formulas::attack_speed),
    AttributeDefinition::fractional(A::Evasion, formulas::evasion).capped(1.0),
    AttributeDefinition::fractional(A::Accuracy, formulas::accuracy).capped(1.0),
    AttributeDefinition::integer(A::Speed, formulas::speed).capped(70.0),
    AttributeDefinition::integer(A::MagicPower, formulas::magic_power),
    AttributeDefinition::fractional(A::MagicCriticalDamage, formulas::magic_critical_damage),
    AttributeDefinition::integer(A::MagicDefense, formulas::magic_defense),
    AttributeDefinition::integer(A::TotalMana, formulas::total_mana),
    AttributeDefinition::fractional(A::MagicCriticalRate, formulas::magic_critical_rate)
        .capped(1.0),
    AttributeDefinition::fractional(A::MagicAccuracy, formulas::magic_accuracy).capped(1.0),
    AttributeDefinition::fractional(A::MagicEvasion, formulas::magic_evasion).capped(1.0),
    AttributeDefinition::integer(A::CastingSpeed, formulas::casting_speed),
    AttributeDefinition::transient(A::Health, A::TotalHealth),
    AttributeDefinition::transient(A::Mana, A::TotalMana),
];

impl AttributeName {
    /// The static definition of this attribute
    pub fn definition(self) -> &'static AttributeDefinition {
        &DEFINITIONS[self.index()]
    }
}

/// All attribute definitions in declaration order
pub fn definitions() -> &'static [AttributeDefinition] {
    &DEFINITIONS
}
