//! Line-level parsers for guide headers and list sections

use crate::patterns::{GUIDE_HEADER_RE, LIST_MARKER_RE, QUESTION_RE};
use whodunit_domain::{QuestioningOption, Relationship};

/// Extract the character name from a `<NAME> - CHARACTER GUIDE` header
///
/// Returns `None` when no header line exists.
pub fn extract_name(text: &str) -> Option<String> {
    let caps = GUIDE_HEADER_RE.captures(text)?;
    let name = caps[1].trim().trim_matches('*').trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Find every `Ask <Target>: "<Question>"` prompt, in order
///
/// Straight and curly quotes are both accepted. No deduplication.
pub fn extract_questioning_options(text: &str) -> Vec<QuestioningOption> {
    QUESTION_RE
        .captures_iter(text)
        .map(|caps| QuestioningOption::new(caps[1].trim(), caps[2].trim()))
        .collect()
}

/// Parse `Name: description` lines; a line without a colon is all name
pub fn parse_relationships(body: &str, strip_list_markers: bool) -> Vec<Relationship> {
    non_blank_lines(body, strip_list_markers)
        .map(|line| match line.split_once(':') {
            Some((character, description)) => {
                Relationship::new(character.trim(), description.trim())
            }
            None => Relationship::new(line, ""),
        })
        .collect()
}

/// One secret per non-blank line
pub fn parse_secrets(body: &str, strip_list_markers: bool) -> Vec<String> {
    non_blank_lines(body, strip_list_markers)
        .map(str::to_string)
        .collect()
}

/// Split a multi-character document at each guide header
///
/// Every slice starts at its header line and runs to the next header. Text
/// before the first header is preamble and is dropped. Without any header
/// the whole text is treated as a single guide.
pub fn split_guides(text: &str) -> Vec<&str> {
    let starts: Vec<usize> = GUIDE_HEADER_RE.find_iter(text).map(|m| m.start()).collect();

    if starts.is_empty() {
        let trimmed = text.trim();
        return if trimmed.is_empty() { Vec::new() } else { vec![trimmed] };
    }

    starts
        .iter()
        .enumerate()
        .map(|(idx, &start)| {
            let end = starts.get(idx + 1).copied().unwrap_or(text.len());
            text[start..end].trim()
        })
        .collect()
}

fn non_blank_lines(body: &str, strip_list_markers: bool) -> impl Iterator<Item = &str> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(move |line| {
            if strip_list_markers {
                match LIST_MARKER_RE.find(line) {
                    Some(marker) => line[marker.end()..].trim_start(),
                    None => line,
                }
            } else {
                line
            }
        })
        .filter(|line| !line.is_empty())
}
