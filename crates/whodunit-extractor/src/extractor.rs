//! Core section extractor

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::{extract_name, extract_questioning_options, parse_relationships, parse_secrets};
use crate::section::SectionLocator;
use std::sync::LazyLock;
use tracing::debug;
use whodunit_domain::traits::CharacterExtractor;
use whodunit_domain::CharacterRecord;

/// Turns one character guide into a [`CharacterRecord`]
///
/// Locators for every configured label are compiled once in [`new`](Self::new);
/// extraction itself is a pure function of the input text.
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    config: ExtractorConfig,
    description: SectionLocator,
    background: SectionLocator,
    whereabouts: SectionLocator,
    relationships: SectionLocator,
    secrets: SectionLocator,
    introduction: SectionLocator,
    round1: SectionLocator,
    round2: SectionLocator,
    round3: SectionLocator,
    questioning: SectionLocator,
}

impl SectionExtractor {
    /// Create a new extractor from a validated configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let labels = &config.labels;
        Ok(Self {
            description: SectionLocator::new(&labels.description)?,
            background: SectionLocator::new(&labels.background)?,
            whereabouts: SectionLocator::new(&labels.whereabouts)?,
            relationships: SectionLocator::new(&labels.relationships)?,
            secrets: SectionLocator::new(&labels.secrets)?,
            introduction: SectionLocator::new(&labels.introduction)?,
            round1: SectionLocator::new(&labels.round1)?,
            round2: SectionLocator::new(&labels.round2)?,
            round3: SectionLocator::new(&labels.round3)?,
            questioning: SectionLocator::new(&labels.questioning)?,
            config,
        })
    }

    /// The configuration this extractor was built from
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a full character record from one guide
    pub fn extract_character_info(&self, text: &str) -> CharacterRecord {
        let strip = self.config.strip_list_markers;

        let name = extract_name(text);
        if name.is_none() {
            debug!("No character guide header found");
        }

        let relationships = self
            .relationships
            .find(text)
            .map(|body| parse_relationships(body, strip))
            .unwrap_or_default();

        let secrets = self
            .secrets
            .find(text)
            .map(|body| parse_secrets(body, strip))
            .unwrap_or_default();

        let questioning_options = self
            .questioning
            .find(text)
            .map(extract_questioning_options)
            .unwrap_or_default();

        let record = CharacterRecord {
            name,
            description: self.prose(&self.description, text),
            background: self.prose(&self.background, text),
            whereabouts: self.prose(&self.whereabouts, text),
            introduction: self.prose(&self.introduction, text),
            round1_statement: self.prose(&self.round1, text),
            round2_statement: self.prose(&self.round2, text),
            round3_statement: self.prose(&self.round3, text),
            relationships,
            secrets,
            questioning_options,
        };

        debug!(
            "Extracted {} sections, {} relationships, {} secrets, {} questions",
            record.section_count(),
            record.relationships.len(),
            record.secrets.len(),
            record.questioning_options.len()
        );

        record
    }

    /// A prose section; missing and empty both map to `None`
    fn prose(&self, locator: &SectionLocator, text: &str) -> Option<String> {
        match locator.find(text) {
            Some(body) if !body.is_empty() => Some(body.to_string()),
            Some(_) => {
                debug!("Section '{}' is empty", locator.label());
                None
            }
            None => {
                debug!("Section '{}' not found", locator.label());
                None
            }
        }
    }
}

impl CharacterExtractor for SectionExtractor {
    fn extract(&self, text: &str) -> CharacterRecord {
        self.extract_character_info(text)
    }
}

static DEFAULT_EXTRACTOR: LazyLock<SectionExtractor> = LazyLock::new(|| {
    SectionExtractor::new(ExtractorConfig::default())
        .expect("default extractor configuration is valid")
});

/// Extract a character record using the default section labels
pub fn extract_character_info(text: &str) -> CharacterRecord {
    DEFAULT_EXTRACTOR.extract_character_info(text)
}
