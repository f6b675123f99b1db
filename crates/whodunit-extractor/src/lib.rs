//! Whodunit Extractor
//!
//! Converts LLM-generated character guides into structured character records.
//!
//! # Overview
//!
//! The guide generator is instructed to emit a `<NAME> - CHARACTER GUIDE`
//! header followed by fixed all-caps section headings. The extractor finds
//! each heading, takes the text up to the next heading line, and parses the
//! list sections (relationships, secrets, questioning prompts) line by line.
//!
//! # Architecture
//!
//! ```text
//! Document → split_guides → SectionExtractor → CharacterRecord → CharacterStore
//! ```
//!
//! Extraction is pure and never fails. [`CharacterIngestor`] adds the caller
//! policy on top: a name fallback, length limits, and persistence.
//!
//! # Example Usage
//!
//! ```
//! use whodunit_extractor::{extract_character_info, extract_section};
//!
//! let guide = "MARY SMITH - CHARACTER GUIDE\n\
//!              YOUR RELATIONSHIPS:\n\
//!              John: old friend\n\
//!              YOUR SECRETS\n\
//!              You took the pearls.\n";
//!
//! let record = extract_character_info(guide);
//! assert_eq!(record.name.as_deref(), Some("MARY SMITH"));
//! assert_eq!(record.relationships[0].character, "John");
//! assert_eq!(record.secrets, vec!["You took the pearls."]);
//!
//! assert_eq!(
//!     extract_section(guide, "YOUR SECRETS").as_deref(),
//!     Some("You took the pearls.")
//! );
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod patterns;
mod section;
mod parser;
mod extractor;
mod types;
mod ingest;


pub use error::ExtractorError;
pub use config::{ExtractorConfig, SectionLabels};
pub use section::{extract_section, SectionLocator};
pub use parser::{
    extract_name, extract_questioning_options, parse_relationships, parse_secrets,
    split_guides,
};
pub use extractor::{extract_character_info, SectionExtractor};
pub use types::{IngestFailure, IngestReport, IngestedCharacter};
pub use ingest::{fallback_name, CharacterIngestor};
