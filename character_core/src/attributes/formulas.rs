//! Attribute formulas
//!
//! Each formula is a pure function of the base stats and the character level.
//! Integer attributes are floored, fractional ones rounded to two decimals.

use crate::stat_block::{StatBlock, StatName};
use crate::types::Value;

/// A pure attribute formula
pub type Formula = fn(&StatBlock, u32) -> Value;

fn stat(stats: &StatBlock, name: StatName) -> f64 {
    f64::from(stats.get(name))
}

fn floor(value: f64) -> Value {
    Value::Int(value.floor() as i64)
}

fn round2(value: f64) -> Value {
    Value::Float((value * 100.0).round() / 100.0)
}

pub fn defense(stats: &StatBlock, level: u32) -> Value {
    let level = f64::from(level);
    floor(50.0 * (stat(stats, StatName::Con) / 10.0) * (1.0 + 0.2 * level))
}

pub fn total_health(stats: &StatBlock, level: u32) -> Value {
    let con = stat(stats, StatName::Con);
    let level = f64::from(level);
    floor(
        (con - 20.0) * 100.0 * (0.5 * (level / 4.0))
            + (con / 8.0) * (300.0 * (0.3 * (level / 2.0)))
            + (150.0 - level),
    )
}

pub fn attack(stats: &StatBlock, level: u32) -> Value {
    let level = f64::from(level);
    floor(40.0 * (stat(stats, StatName::Str) / 9.0) * (1.0 + 0.3 * level))
}

pub fn critical_damage(stats: &StatBlock, level: u32) -> Value {
    let level = f64::from(level);
    round2(1.0 + level / 50.0 + (stat(stats, StatName::Str) / 500.0) * level * 0.05)
}

pub fn critical_rate(stats: &StatBlock, level: u32) -> Value {
    let level = f64::from(level);
    round2(((level / 82.0 * 0.5) + stat(stats, StatName::Dex) / 400.0) * 0.7)
}

pub fn attack_speed(stats: &StatBlock, level: u32) -> Value {
    let dex = stat(stats, StatName::Dex);
    let level = f64::from(level);
    floor(dex * 5.0 + (dex - 15.0) * level * 0.55)
}

pub fn evasion(stats: &StatBlock, level: u32) -> Value {
    let level = f64::from(level);
    round2(stat(stats, StatName::Dex) / 200.0 + level / 500.0)
}

pub fn accuracy(stats: &StatBlock, level: u32) -> Value {
    let level = f64::from(level);
    round2(stat(stats, StatName::Dex) / 37.0 + level / 1000.0)
}

pub fn speed(stats: &StatBlock, level: u32) -> Value {
    let dex = stat(stats, StatName::Dex);
    let level = f64::from(level);
    floor(20.0 + (dex - 20.0) * 2.0 + level * 0.1 + dex * 0.02)
}

pub fn magic_power(stats: &StatBlock, level: u32) -> Value {
    let level = f64::from(level);
    floor(40.0 * (stat(stats, StatName::Int) / 6.0) * (1.0 + 0.3 * level))
}

pub fn magic_critical_damage(stats: &StatBlock, level: u32) -> Value {
    let level = f64::from(level);
    round2(1.0 + level / 55.0 + (stat(stats, StatName::Int) / 490.0) * level * 0.06)
}

pub fn magic_defense(stats: &StatBlock, level: u32) -> Value {
    let level = f64::from(level);
    floor(43.0 * (stat(stats, StatName::Men) / 7.0) * (1.0 + 0.28 * level))
}

pub fn total_mana(stats: &StatBlock, level: u32) -> Value {
    let men = stat(stats, StatName::Men);
    let level = f64::from(level);
    floor(
        (men - 20.0) * 100.0 * (0.5 * (level / 4.0))
            + (men / 8.0) * (300.0 * (0.2 * (level / 5.0)))
            + (150.0 - level),
    )
}

pub fn magic_critical_rate(stats: &StatBlock, level: u32) -> Value {
    let level = f64::from(level);
    round2(((level / 82.0 * 0.5) + stat(stats, StatName::Wit) / 400.0) * 0.4)
}

pub fn magic_accuracy(stats: &StatBlock, level: u32) -> Value {
    let level = f64::from(level);
    round2((20.0 + stat(stats, StatName::Wit) / 3.0) / 38.0 + level / 400.0)
}

pub fn magic_evasion(stats: &StatBlock, level: u32) -> Value {
    let level = f64::from(level);
    round2(stat(stats, StatName::Wit) / 175.0 + level / 400.0)
}

pub fn casting_speed(stats: &StatBlock, level: u32) -> Value {
    let wit = stat(stats, StatName::Wit);
    let level = f64::from(level);
    floor(wit * 12.54 + (wit - 20.0) * 0.65 * level + 3.0 * level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: Value) -> i64 {
        value.as_int().expect("integer formula")
    }

    fn float(value: Value) -> f64 {
        value.as_float().expect("fractional formula")
    }

    #[test]
    fn test_default_stats_level_one() {
        let stats = StatBlock::new();
        assert_eq!(int(defense(&stats, 1)), 120);
        assert_eq!(int(total_health(&stats, 1)), 261);
        assert_eq!(int(attack(&stats, 1)), 115);
        assert!((float(critical_damage(&stats, 1)) - 1.02).abs() < 1e-9);
        assert!((float(critical_rate(&stats, 1)) - 0.04).abs() < 1e-9);
        assert_eq!(int(attack_speed(&stats, 1)), 102);
        assert!((float(evasion(&stats, 1)) - 0.1).abs() < 1e-9);
        assert!((float(accuracy(&stats, 1)) - 0.54).abs() < 1e-9);
        assert_eq!(int(speed(&stats, 1)), 20);
        assert_eq!(int(magic_power(&stats, 1)), 173);
        assert!((float(magic_critical_damage(&stats, 1)) - 1.02).abs() < 1e-9);
        assert_eq!(int(magic_defense(&stats, 1)), 157);
        assert_eq!(int(total_mana(&stats, 1)), 179);
        assert!((float(magic_critical_rate(&stats, 1)) - 0.02).abs() < 1e-9);
        assert!((float(magic_accuracy(&stats, 1)) - 0.7).abs() < 1e-9);
        assert!((float(magic_evasion(&stats, 1)) - 0.12).abs() < 1e-9);
        assert_eq!(int(casting_speed(&stats, 1)), 253);
    }

    #[test]
    fn test_level_scaling() {
        let stats = StatBlock::new();
        // Level 2: 179 + 29 mana
        assert_eq!(int(total_mana(&stats, 2)), 208);
        assert_eq!(int(total_health(&stats, 2)), 373);
        assert_eq!(int(attack_speed(&stats, 2)), 105);

        assert_eq!(int(total_mana(&stats, 5)), 295);
        assert_eq!(int(attack_speed(&stats, 5)), 113);
        assert!((float(magic_critical_rate(&stats, 5)) - 0.03).abs() < 1e-9);

        assert_eq!(int(total_mana(&stats, 10)), 440);
        assert_eq!(int(attack_speed(&stats, 10)), 127);
        assert!((float(magic_critical_rate(&stats, 10)) - 0.04).abs() < 1e-9);
    }

    #[test]
    fn test_formulas_are_pure() {
        let stats = StatBlock::new().with(StatName::Dex, 37);
        assert_eq!(speed(&stats, 12), speed(&stats, 12));
        assert_eq!(accuracy(&stats, 50), accuracy(&stats, 50));
    }
}
