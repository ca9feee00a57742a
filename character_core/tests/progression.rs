//! Integration test: Build from library -> Gain experience -> Change job -> Bind crystals
//!
//! Walks a character through a typical progression using the built-in races
//! and jobs.

use character_core::prelude::*;
use character_core::experience_for_level;

fn total_health(character: &Character) -> i64 {
    character
        .attributes()
        .get_int(AttributeName::TotalHealth)
        .unwrap()
}

fn health(character: &Character) -> i64 {
    character.attributes().get_int(AttributeName::Health).unwrap()
}

#[test]
fn test_library_character_progression() {
    let library = default_library();
    let human = library.race("human").unwrap().clone();
    let wizard = library.job("wizard").unwrap().clone();

    let mut character = Character::from_race(human, Some(wizard), 1).unwrap();
    assert_eq!(character.base_stats().get(StatName::Int), 23);
    assert_eq!(character.stats().get(StatName::Int), 28);
    assert_eq!(health(&character), total_health(&character));

    // Spend some health, then level up: it is refilled
    let spent = total_health(&character) - 10;
    character.set_attribute(AttributeName::Health, spent).unwrap();
    let level_one_health = total_health(&character);

    character.add_experience(experience_for_level(1) + experience_for_level(2));
    assert_eq!(character.level(), 3);
    assert_eq!(character.experience(), 0);
    assert!(total_health(&character) > level_one_health);
    assert_eq!(health(&character), total_health(&character));
}

#[test]
fn test_job_change_keeps_spent_health() {
    let library = default_library();
    let dwarf = library.race("dwarf").unwrap().clone();
    let knight = library.job("knight").unwrap().clone();
    let rogue = library.job("rogue").unwrap().clone();

    let mut character = Character::from_race(dwarf, Some(knight), 5).unwrap();
    let knight_total = total_health(&character);
    character.set_attribute(AttributeName::Health, 100_i64).unwrap();

    // Rogue gives no constitution, so total health drops but stays above 100
    character.set_job(Some(rogue));
    assert_eq!(character.job().map(|j| j.id()), Some("rogue"));
    assert!(total_health(&character) < knight_total);
    assert_eq!(health(&character), 100);

    // Constitution edits flow through the new job's stats
    let before = total_health(&character);
    character.set_stat(StatName::Con, character.stats().get(StatName::Con) + 1);
    assert!(total_health(&character) > before);
}

#[test]
fn test_level_down_refills() {
    let mut character = Character::new(&[], 10).unwrap();
    character.set_attribute(AttributeName::Mana, 0_i64).unwrap();

    character.apply_experience(-5000);
    assert_eq!(character.level(), 7);
    assert_eq!(
        character.attributes().get(AttributeName::Mana),
        character.attributes().get(AttributeName::TotalMana)
    );
}

#[test]
fn test_crystal_gating_through_levels() {
    let mut character = Character::new(&[], 1).unwrap();

    character
        .bind_crystal(Crystal::new(Element::Fire, 1).unwrap())
        .unwrap();

    let err = character
        .bind_crystal(Crystal::new(Element::Water, 1).unwrap())
        .unwrap_err();
    assert_eq!(err.reason.kind(), ErrorKind::Crystal);
    let water = err.into_crystal();

    character.set_level(16).unwrap();
    character.bind_crystal(water).unwrap();

    character.set_level(32).unwrap();
    let err = character
        .bind_crystal(Crystal::new(Element::Fire, 1).unwrap())
        .unwrap_err();
    assert_eq!(
        err.reason,
        CoreError::SameElementCrystalAlreadyBound(Element::Fire)
    );

    character
        .bind_crystal(Crystal::new(Element::Light, 3).unwrap())
        .unwrap();
    let err = character
        .bind_crystal(Crystal::new(Element::Dark, 1).unwrap())
        .unwrap_err();
    assert_eq!(err.reason, CoreError::CrystalLimitReached { limit: 3 });

    let elements: Vec<Element> = character.crystals().iter().map(|c| c.element()).collect();
    assert_eq!(elements, vec![Element::Fire, Element::Water, Element::Light]);
}

#[test]
fn test_constants_from_toml() {
    let constants = GameConstants::from_toml("[binding]\nmax_crystals = 1\n").unwrap();
    let mut character = Character::new(&[], 50).unwrap().with_constants(constants);

    character
        .bind_crystal(Crystal::new(Element::Earth, 1).unwrap())
        .unwrap();
    let err = character
        .bind_crystal(Crystal::new(Element::Wind, 1).unwrap())
        .unwrap_err();
    assert_eq!(err.reason, CoreError::CrystalLimitReached { limit: 1 });
}

#[test]
fn test_string_keyed_access() {
    let mut character = Character::new(&[], 1).unwrap();

    assert_eq!(character.stats().get_by_name("dex").unwrap(), 20);
    character.set_stat_by_name("dex", Value::Int(35)).unwrap();
    assert_eq!(character.stats().get(StatName::Dex), 35);

    let accuracy = character.attributes().get_by_name("accuracy").unwrap();
    assert_eq!(accuracy.kind(), ValueKind::Fractional);

    let err = character.attributes().get_by_name("luck").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownName);
}

#[test]
fn test_party_back_reference() {
    let mut character = Character::new(&[], 1).unwrap();
    character.join_party(PartyId::new(1)).unwrap();
    assert!(character.join_party(PartyId::new(2)).is_err());
    assert_eq!(character.leave_party().unwrap(), PartyId::new(1));
    assert_eq!(character.leave_party().unwrap_err().kind(), ErrorKind::Party);
}
