//! Integration tests for whodunit-store
//!
//! These tests verify the full save/load/delete cycle for characters.

use whodunit_domain::traits::CharacterStore;
use whodunit_domain::{CharacterId, CharacterRecord, PackageId, QuestioningOption, Relationship};
use whodunit_store::SqliteStore;

fn sample_record() -> CharacterRecord {
    CharacterRecord {
        name: Some("MARY SMITH".to_string()),
        description: Some("A novelist".to_string()),
        background: Some("Grew up in the village".to_string()),
        whereabouts: None,
        introduction: Some("Good evening".to_string()),
        round1_statement: Some("I heard voices".to_string()),
        round2_statement: None,
        round3_statement: Some("John lied".to_string()),
        relationships: vec![
            Relationship::new("John", "old friend"),
            Relationship::new("Sarah", "rival"),
        ],
        secrets: vec!["First".to_string(), "Second".to_string(), "Third".to_string()],
        questioning_options: vec![QuestioningOption::new("John", "Where were you?")],
    }
}

#[test]
fn test_store_initialization() {
    let store = SqliteStore::new(":memory:");
    assert!(store.is_ok(), "Store should initialize successfully");
}

#[test]
fn test_save_and_get_character() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let package_id = PackageId::new();
    let record = sample_record();

    let saved = store.save_character(package_id, "MARY SMITH", &record).unwrap();
    assert_eq!(saved.package_id, package_id);
    assert_eq!(saved.record, record);

    let loaded = store.get_character(saved.id).unwrap().expect("character should exist");
    assert_eq!(loaded, saved);
}

#[test]
fn test_list_sections_keep_order() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let saved = store
        .save_character(PackageId::new(), "MARY SMITH", &sample_record())
        .unwrap();

    let loaded = store.get_character(saved.id).unwrap().unwrap();
    assert_eq!(loaded.record.secrets, vec!["First", "Second", "Third"]);
    assert_eq!(loaded.record.relationships[1].character, "Sarah");
}

#[test]
fn test_fallback_name_keeps_extracted_name_absent() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let record = CharacterRecord {
        background: Some("Retired".to_string()),
        ..Default::default()
    };

    let saved = store.save_character(PackageId::new(), "Inspector Grey", &record).unwrap();
    let loaded = store.get_character(saved.id).unwrap().unwrap();

    assert_eq!(loaded.name, "Inspector Grey");
    assert_eq!(loaded.record.name, None);
    assert!(loaded.record.secrets.is_empty());
}

#[test]
fn test_get_missing_character() {
    let store = SqliteStore::new(":memory:").unwrap();
    assert!(store.get_character(CharacterId::new()).unwrap().is_none());
}

#[test]
fn test_list_characters_by_package() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let package_a = PackageId::new();
    let package_b = PackageId::new();
    let record = CharacterRecord::default();

    store.save_character(package_a, "First", &record).unwrap();
    store.save_character(package_b, "Other", &record).unwrap();
    store.save_character(package_a, "Second", &record).unwrap();

    let names: Vec<String> = store
        .list_characters(package_a)
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["First", "Second"]);
    assert_eq!(store.count_characters(package_b).unwrap(), 1);
}

#[test]
fn test_delete_package_cascades() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let package_id = PackageId::new();
    let keep = PackageId::new();

    let doomed = store.save_character(package_id, "MARY SMITH", &sample_record()).unwrap();
    store.save_character(package_id, "JOHN DOE", &sample_record()).unwrap();
    store.save_character(keep, "SARAH", &sample_record()).unwrap();

    assert_eq!(store.delete_package(package_id).unwrap(), 2);
    assert!(store.get_character(doomed.id).unwrap().is_none());
    assert!(store.list_characters(package_id).unwrap().is_empty());
    assert_eq!(store.list_characters(keep).unwrap()[0].record.secrets.len(), 3);

    assert_eq!(store.delete_package(package_id).unwrap(), 0);
}

#[test]
fn test_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whodunit.db");
    let package_id = PackageId::new();

    let id = {
        let mut store = SqliteStore::new(&path).unwrap();
        store.save_character(package_id, "MARY SMITH", &sample_record()).unwrap().id
    };

    let store = SqliteStore::new(&path).unwrap();
    let loaded = store.get_character(id).unwrap().unwrap();
    assert_eq!(loaded.package_id, package_id);
    assert_eq!(loaded.record.questioning_options.len(), 1);
}
