//! Ingestion policy: extract, resolve a name, persist

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::extractor::SectionExtractor;
use crate::parser::split_guides;
use crate::types::{IngestFailure, IngestReport, IngestedCharacter};
use tracing::{debug, info, warn};
use whodunit_domain::traits::{CharacterExtractor, CharacterStore};
use whodunit_domain::{Character, PackageId};

const EXCERPT_CHARS: usize = 80;

/// Extracts guides and persists them into an injected [`CharacterStore`]
///
/// The extractor is pluggable; by default it is the label-driven
/// [`SectionExtractor`].
pub struct CharacterIngestor<S, E = SectionExtractor>
where
    S: CharacterStore,
    E: CharacterExtractor,
{
    extractor: E,
    store: S,
    max_text_length: usize,
}

impl<S> CharacterIngestor<S, SectionExtractor>
where
    S: CharacterStore,
    S::Error: std::fmt::Display,
{
    /// Create a new ingestor
    pub fn new(store: S, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        let max_text_length = config.max_text_length;
        Ok(Self {
            extractor: SectionExtractor::new(config)?,
            store,
            max_text_length,
        })
    }
}

impl<S, E> CharacterIngestor<S, E>
where
    S: CharacterStore,
    S::Error: std::fmt::Display,
    E: CharacterExtractor,
{
    /// Create an ingestor around any extractor
    pub fn with_extractor(store: S, extractor: E, max_text_length: usize) -> Self {
        Self {
            extractor,
            store,
            max_text_length,
        }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back
    pub fn into_store(self) -> S {
        self.store
    }

    /// Ingest a single character guide
    pub fn ingest(&mut self, package_id: PackageId, text: &str) -> Result<Character, ExtractorError> {
        self.ingest_guide(package_id, text).map(|(character, _)| character)
    }

    /// Split a document into guides and ingest each one
    ///
    /// A failing guide is recorded in the report; the rest still go through.
    pub fn ingest_document(&mut self, package_id: PackageId, text: &str) -> IngestReport {
        let guides = split_guides(text);
        info!(
            "Ingesting {} guide(s) into package {}",
            guides.len(),
            package_id
        );

        let mut created = Vec::new();
        let mut failures = Vec::new();

        for (idx, guide) in guides.iter().enumerate() {
            debug!("Processing guide {}/{}", idx + 1, guides.len());

            match self.ingest_guide(package_id, guide) {
                Ok((character, name_from_fallback)) => created.push(IngestedCharacter {
                    id: character.id,
                    name: character.name,
                    name_from_fallback,
                }),
                Err(e) => {
                    warn!("Failed to ingest guide {}: {}", idx + 1, e);
                    failures.push(IngestFailure {
                        reason: e.to_string(),
                        excerpt: excerpt(guide),
                    });
                }
            }
        }

        info!(
            "Ingestion complete: {} stored, {} failed",
            created.len(),
            failures.len()
        );

        IngestReport {
            package_id,
            guides_found: guides.len(),
            created,
            failures,
        }
    }

    fn ingest_guide(
        &mut self,
        package_id: PackageId,
        text: &str,
    ) -> Result<(Character, bool), ExtractorError> {
        let max = self.max_text_length;
        let length = text.chars().count();
        if length > max {
            return Err(ExtractorError::TextTooLong(length, max));
        }

        let record = self.extractor.extract(text);
        if record.is_empty() {
            warn!("Guide has no header and no recognised sections");
        }

        let (name, from_fallback) = match record.name.clone() {
            Some(name) => (name, false),
            None => {
                let name = fallback_name(text).ok_or(ExtractorError::MissingName)?;
                debug!("No guide header, falling back to first line '{}'", name);
                (name, true)
            }
        };

        let character = self
            .store
            .save_character(package_id, &name, &record)
            .map_err(|e| ExtractorError::Store(e.to_string()))?;

        Ok((character, from_fallback))
    }
}

/// First non-blank line with markdown heading and emphasis markers removed
pub fn fallback_name(text: &str) -> Option<String> {
    text.lines()
        .map(|line| line.trim().trim_start_matches('#').trim().trim_matches('*').trim())
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

fn excerpt(text: &str) -> String {
    let mut excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
    if text.chars().count() > EXCERPT_CHARS {
        excerpt.push_str("...");
    }
    excerpt
}
