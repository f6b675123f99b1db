//! Identifiers for packages and stored characters
//!
//! Both are UUIDv7 values held as a raw `u128`:
//! - Chronological sortability (characters list in creation order)
//! - 128-bit uniqueness without coordination
//! - Standard string form for CLI arguments and logs

use std::fmt;

/// Identifier of a generated mystery package
///
/// Package ids are usually supplied by the caller (the application that sold
/// the package). [`PackageId::new`] mints a fresh one for local imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageId(u128);

impl PackageId {
    /// Generate a new UUIDv7-based PackageId
    ///
    /// # Examples
    ///
    /// ```
    /// use whodunit_domain::PackageId;
    ///
    /// let id = PackageId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a PackageId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a PackageId from its UUID string form
    ///
    /// Any UUID version is accepted since package ids may come from elsewhere.
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s.trim())
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid package id '{}': {}", s, e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for PackageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Identifier of a persisted character, assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharacterId(u128);

impl CharacterId {
    /// Generate a new UUIDv7-based CharacterId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a CharacterId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a CharacterId from its UUID string form
    ///
    /// # Examples
    ///
    /// ```
    /// use whodunit_domain::CharacterId;
    ///
    /// let id = CharacterId::new();
    /// let parsed = CharacterId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s.trim())
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid character id '{}': {}", s, e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_id_chronological() {
        let id1 = CharacterId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = CharacterId::new();

        assert!(id1 < id2, "Earlier UUIDv7 should be less than later UUIDv7");
    }

    #[test]
    fn test_package_id_accepts_foreign_uuid() {
        // v4 ids handed over by the web application must parse
        let id = PackageId::from_string("6f1c2a4e-8b3d-4f5a-9c7e-1d2b3a4c5e6f").unwrap();
        assert_eq!(id.to_string(), "6f1c2a4e-8b3d-4f5a-9c7e-1d2b3a4c5e6f");
    }

    #[test]
    fn test_package_id_trims_input() {
        let id = PackageId::new();
        let padded = format!("  {}\n", id);
        assert_eq!(PackageId::from_string(&padded).unwrap(), id);
    }

    #[test]
    fn test_invalid_ids() {
        assert!(PackageId::from_string("not-a-valid-uuid").is_err());
        assert!(CharacterId::from_string("").is_err());
    }
}
