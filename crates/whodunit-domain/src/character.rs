//! Character module - structured character guide data

use crate::{CharacterId, PackageId};

/// A relationship line from the "YOUR RELATIONSHIPS" section
///
/// Parsed from `Name: description`. A line without a colon keeps the whole
/// line as `character` and leaves `description` empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relationship {
    /// The other character
    pub character: String,

    /// How this character relates to them
    pub description: String,
}

impl Relationship {
    /// Create a new relationship
    pub fn new(character: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            description: description.into(),
        }
    }
}

/// A suggested in-game prompt letting this character question another
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestioningOption {
    /// Character being questioned
    pub target: String,

    /// The question, without its quotation marks
    pub question: String,
}

impl QuestioningOption {
    /// Create a new questioning option
    pub fn new(target: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            question: question.into(),
        }
    }
}

/// The structured result of parsing one character guide
///
/// A transient value object: built once per guide text and handed straight
/// to persistence. Optional prose sections are `None` when the section is
/// missing or empty, never `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterRecord {
    /// Name from the `<NAME> - CHARACTER GUIDE` header, if one was found
    pub name: Option<String>,

    /// Character description
    pub description: Option<String>,

    /// Background story
    pub background: Option<String>,

    /// Whereabouts at the time of the murder
    pub whereabouts: Option<String>,

    /// Introduction read aloud at the start of the party
    pub introduction: Option<String>,

    /// Statement for round one
    pub round1_statement: Option<String>,

    /// Statement for round two
    pub round2_statement: Option<String>,

    /// Statement for round three
    pub round3_statement: Option<String>,

    /// Relationships, in document order
    pub relationships: Vec<Relationship>,

    /// Secrets, one per line, in document order
    pub secrets: Vec<String>,

    /// Questioning options, in document order
    pub questioning_options: Vec<QuestioningOption>,
}

impl CharacterRecord {
    /// True when nothing at all was extracted
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Number of prose sections present
    pub fn section_count(&self) -> usize {
        self.prose_sections()
            .iter()
            .filter(|(_, value)| value.is_some())
            .count()
    }

    /// The seven prose sections with their field names, in guide order
    pub fn prose_sections(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("description", self.description.as_deref()),
            ("background", self.background.as_deref()),
            ("whereabouts", self.whereabouts.as_deref()),
            ("introduction", self.introduction.as_deref()),
            ("round1Statement", self.round1_statement.as_deref()),
            ("round2Statement", self.round2_statement.as_deref()),
            ("round3Statement", self.round3_statement.as_deref()),
        ]
    }
}

/// A character record persisted under a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    /// Store-assigned identifier
    pub id: CharacterId,

    /// Package the character belongs to
    pub package_id: PackageId,

    /// Resolved display name (extracted name or caller fallback)
    pub name: String,

    /// The record as extracted; `record.name` may be `None`
    pub record: CharacterRecord,

    /// When the character was stored (seconds since Unix epoch)
    pub created_at: u64,
}
