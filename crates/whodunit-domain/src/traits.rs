//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{Character, CharacterId, CharacterRecord, PackageId};

/// Trait for turning raw guide text into a character record
///
/// Implemented by the application layer (whodunit-extractor).
/// Extraction never fails: missing patterns yield absent or empty fields.
pub trait CharacterExtractor {
    /// Extract a character record from one guide
    fn extract(&self, text: &str) -> CharacterRecord;
}

/// Trait for storing and retrieving characters
///
/// Implemented by the infrastructure layer (whodunit-store)
pub trait CharacterStore {
    /// Error type for store operations
    type Error;

    /// Persist a record under a package with its resolved name
    fn save_character(
        &mut self,
        package_id: PackageId,
        name: &str,
        record: &CharacterRecord,
    ) -> Result<Character, Self::Error>;

    /// Get a character by ID
    fn get_character(&self, id: CharacterId) -> Result<Option<Character>, Self::Error>;

    /// List a package's characters in insertion order
    fn list_characters(&self, package_id: PackageId) -> Result<Vec<Character>, Self::Error>;

    /// Remove every character of a package, returning how many were removed
    fn delete_package(&mut self, package_id: PackageId) -> Result<usize, Self::Error>;
}
