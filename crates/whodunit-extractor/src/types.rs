//! Result types for ingestion

use whodunit_domain::{CharacterId, PackageId};

/// A character that was extracted and stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestedCharacter {
    /// ID assigned by the store
    pub id: CharacterId,

    /// Resolved name the character was stored under
    pub name: String,

    /// Whether the name came from the first-line fallback
    pub name_from_fallback: bool,
}

/// A guide that could not be ingested
#[derive(Debug, Clone)]
pub struct IngestFailure {
    /// Reason for failure
    pub reason: String,

    /// Start of the guide text that failed
    pub excerpt: String,
}

/// Outcome of ingesting a document that may hold several guides
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Package the characters were stored under
    pub package_id: PackageId,

    /// Number of guides the document was split into
    pub guides_found: usize,

    /// Characters that were stored
    pub created: Vec<IngestedCharacter>,

    /// Guides that failed
    pub failures: Vec<IngestFailure>,
}

impl IngestReport {
    /// True when every guide was stored
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
