//! Locate labelled sections in guide text
//!
//! A section starts on the line after its label and runs until the next
//! heading line (see [`HEADING_RE`](crate::patterns::HEADING_RE)) or the end
//! of the document. The heading test is a heuristic: an all-caps sentence in
//! a body ends the section early, and a heading with digits or punctuation
//! does not end it at all.

use crate::patterns::HEADING_RE;
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// A compiled locator for one section label
#[derive(Debug, Clone)]
pub struct SectionLocator {
    label: String,
    pattern: Regex,
}

impl SectionLocator {
    /// Compile a locator for `label`
    ///
    /// The label is matched literally and case-insensitively, optionally
    /// followed by a colon, then a line break (or the end of the text).
    pub fn new(label: &str) -> Result<Self, regex::Error> {
        let label = label.trim();
        let pattern = RegexBuilder::new(&format!(
            r"{}:?[ \t]*(?:\r?\n|$)",
            regex::escape(label)
        ))
        .case_insensitive(true)
        .build()?;

        Ok(Self {
            label: label.to_string(),
            pattern,
        })
    }

    /// The label this locator looks for
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Find the section body in `text`, trimmed
    ///
    /// Returns `None` when the label does not occur. A label that is present
    /// but followed directly by another heading yields `Some("")`.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        let label_match = self.pattern.find(text)?;
        Some(section_body(text, label_match.end()))
    }
}

/// Body text from `start` up to the next heading line, trimmed
fn section_body(text: &str, start: usize) -> &str {
    let rest = &text[start..];
    let end = HEADING_RE
        .find(rest)
        .map(|heading| heading.start())
        .unwrap_or(rest.len());
    rest[..end].trim()
}

/// Extract the body of the section labelled `label` from `text`
///
/// Compiles a one-off locator; reuse a [`SectionLocator`] (or a
/// [`SectionExtractor`](crate::SectionExtractor)) when scanning many guides.
pub fn extract_section(text: &str, label: &str) -> Option<String> {
    match SectionLocator::new(label) {
        Ok(locator) => locator.find(text).map(str::to_string),
        Err(e) => {
            warn!("Could not build locator for label '{}': {}", label, e);
            None
        }
    }
}
