//! Whodunit Storage Layer
//!
//! Implements the CharacterStore trait on SQLite.
//!
//! # Architecture
//!
//! - One `characters` row per stored guide, keyed by a UUIDv7 character id
//! - Child tables for relationships, secrets, and questioning options,
//!   ordered by `position` and removed with their character
//! - Package ids are plain columns; a package is simply every character
//!   sharing one id
//!
//! # Examples
//!
//! ```no_run
//! use whodunit_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for character operations
//! ```

#![warn(missing_docs)]

use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::debug;
use whodunit_domain::traits::CharacterStore;
use whodunit_domain::{
    Character, CharacterId, CharacterRecord, PackageId, QuestioningOption, Relationship,
};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Character not found
    #[error("Character not found: {0}")]
    NotFound(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

const CHARACTER_COLUMNS: &str = "id, package_id, name, extracted_name, description, background, \
     whereabouts, introduction, round1_statement, round2_statement, round3_statement, created_at";

/// SQLite-based implementation of CharacterStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use whodunit_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("whodunit.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Fetch a character or fail with `NotFound`
    pub fn require_character(&self, id: CharacterId) -> Result<Character, StoreError> {
        self.get_character(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Number of characters stored under a package
    pub fn count_characters(&self, package_id: PackageId) -> Result<usize, StoreError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM characters WHERE package_id = ?1",
            params![id_to_bytes(package_id.value())],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    fn insert_children(
        tx: &Transaction<'_>,
        id_bytes: &[u8],
        record: &CharacterRecord,
    ) -> Result<(), StoreError> {
        for (position, relationship) in record.relationships.iter().enumerate() {
            tx.execute(
                "INSERT INTO character_relationships (character_id, position, character, description)
                 VALUES (?1, ?2, ?3, ?4)",
                params![id_bytes, position as i64, &relationship.character, &relationship.description],
            )?;
        }

        for (position, secret) in record.secrets.iter().enumerate() {
            tx.execute(
                "INSERT INTO character_secrets (character_id, position, secret)
                 VALUES (?1, ?2, ?3)",
                params![id_bytes, position as i64, secret],
            )?;
        }

        for (position, option) in record.questioning_options.iter().enumerate() {
            tx.execute(
                "INSERT INTO character_questions (character_id, position, target, question)
                 VALUES (?1, ?2, ?3, ?4)",
                params![id_bytes, position as i64, &option.target, &option.question],
            )?;
        }

        Ok(())
    }

    /// Fill in the list sections of a character loaded from its main row
    fn load_children(&self, character: &mut Character) -> Result<(), StoreError> {
        let id_bytes = id_to_bytes(character.id.value());

        let mut stmt = self.conn.prepare(
            "SELECT character, description FROM character_relationships
             WHERE character_id = ?1 ORDER BY position",
        )?;
        character.record.relationships = stmt
            .query_map(params![&id_bytes], |row| {
                Ok(Relationship::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self.conn.prepare(
            "SELECT secret FROM character_secrets WHERE character_id = ?1 ORDER BY position",
        )?;
        character.record.secrets = stmt
            .query_map(params![&id_bytes], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;

        let mut stmt = self.conn.prepare(
            "SELECT target, question FROM character_questions
             WHERE character_id = ?1 ORDER BY position",
        )?;
        character.record.questioning_options = stmt
            .query_map(params![&id_bytes], |row| {
                Ok(QuestioningOption::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(())
    }
}

/// Convert an id to big-endian bytes for storage
fn id_to_bytes(value: u128) -> Vec<u8> {
    value.to_be_bytes().to_vec()
}

/// Convert stored bytes back to an id value
fn bytes_to_id(bytes: &[u8]) -> Result<u128, StoreError> {
    let arr: [u8; 16] = bytes.try_into().map_err(|_| {
        StoreError::InvalidData(format!("Expected 16 bytes for id, got {}", bytes.len()))
    })?;
    Ok(u128::from_be_bytes(arr))
}

/// Map a `characters` row (in `CHARACTER_COLUMNS` order) without its list sections
fn row_to_character(row: &Row<'_>) -> rusqlite::Result<Character> {
    let blob_id = |idx: usize| -> rusqlite::Result<u128> {
        let bytes: Vec<u8> = row.get(idx)?;
        bytes_to_id(&bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Blob, Box::new(e))
        })
    };

    let record = CharacterRecord {
        name: row.get(3)?,
        description: row.get(4)?,
        background: row.get(5)?,
        whereabouts: row.get(6)?,
        introduction: row.get(7)?,
        round1_statement: row.get(8)?,
        round2_statement: row.get(9)?,
        round3_statement: row.get(10)?,
        ..Default::default()
    };

    Ok(Character {
        id: CharacterId::from_value(blob_id(0)?),
        package_id: PackageId::from_value(blob_id(1)?),
        name: row.get(2)?,
        record,
        created_at: row.get::<_, i64>(11)? as u64,
    })
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl CharacterStore for SqliteStore {
    type Error = StoreError;

    fn save_character(
        &mut self,
        package_id: PackageId,
        name: &str,
        record: &CharacterRecord,
    ) -> Result<Character, Self::Error> {
        if name.trim().is_empty() {
            return Err(StoreError::InvalidData("character name is empty".to_string()));
        }

        let id = CharacterId::new();
        let id_bytes = id_to_bytes(id.value());
        let created_at = now_secs();

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO characters (id, package_id, name, extracted_name, description, background,
                 whereabouts, introduction, round1_statement, round2_statement, round3_statement, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                &id_bytes,
                id_to_bytes(package_id.value()),
                name,
                &record.name,
                &record.description,
                &record.background,
                &record.whereabouts,
                &record.introduction,
                &record.round1_statement,
                &record.round2_statement,
                &record.round3_statement,
                created_at as i64,
            ],
        )?;
        Self::insert_children(&tx, &id_bytes, record)?;
        tx.commit()?;

        debug!("Stored character '{}' ({}) in package {}", name, id, package_id);

        Ok(Character {
            id,
            package_id,
            name: name.to_string(),
            record: record.clone(),
            created_at,
        })
    }

    fn get_character(&self, id: CharacterId) -> Result<Option<Character>, Self::Error> {
        let sql = format!("SELECT {} FROM characters WHERE id = ?1", CHARACTER_COLUMNS);
        let character = self
            .conn
            .query_row(&sql, params![id_to_bytes(id.value())], row_to_character)
            .optional()?;

        match character {
            Some(mut character) => {
                self.load_children(&mut character)?;
                Ok(Some(character))
            }
            None => Ok(None),
        }
    }

    fn list_characters(&self, package_id: PackageId) -> Result<Vec<Character>, Self::Error> {
        let sql = format!(
            "SELECT {} FROM characters WHERE package_id = ?1 ORDER BY rowid",
            CHARACTER_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut characters = stmt
            .query_map(params![id_to_bytes(package_id.value())], row_to_character)?
            .collect::<Result<Vec<_>, _>>()?;

        for character in &mut characters {
            self.load_children(character)?;
        }

        Ok(characters)
    }

    fn delete_package(&mut self, package_id: PackageId) -> Result<usize, Self::Error> {
        let removed = self.conn.execute(
            "DELETE FROM characters WHERE package_id = ?1",
            params![id_to_bytes(package_id.value())],
        )?;
        debug!("Deleted {} character(s) from package {}", removed, package_id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_bytes_round_trip() {
        let value = CharacterId::new().value();
        assert_eq!(bytes_to_id(&id_to_bytes(value)).unwrap(), value);
    }

    #[test]
    fn test_bytes_to_id_wrong_length() {
        assert!(matches!(bytes_to_id(&[1, 2, 3]), Err(StoreError::InvalidData(_))));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let result = store.save_character(PackageId::new(), "  ", &CharacterRecord::default());
        assert!(matches!(result, Err(StoreError::InvalidData(_))));
    }

    #[test]
    fn test_require_character_not_found() {
        let store = SqliteStore::new(":memory:").unwrap();
        let result = store.require_character(CharacterId::new());
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
