//! Regex patterns shared by the section and line parsers (compiled once)

use regex::Regex;
use std::sync::LazyLock;

/// A heading line: two or more all-caps words, optionally colon-terminated.
///
/// Case-sensitive on purpose. Digits and punctuation disqualify a line, so
/// `ROUND 1 STATEMENT` is not a heading.
pub(crate) static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*[A-Z]+(?:[ \t]+[A-Z]+)+[ \t]*:?[ \t]*\r?$").unwrap()
});

/// `<NAME> - CHARACTER GUIDE` header line; group 1 is the raw name.
///
/// Tolerates markdown heading/bold markers and en/em dashes. `CHARACTER GUIDE`
/// must end the line.
pub(crate) static GUIDE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t#*]*([^\n]+?)[ \t]*[-\u{2013}\u{2014}][ \t]*CHARACTER GUIDE[ \t*#:]*\r?$",
    )
    .unwrap()
});

/// `Ask <Target>: "<Question>"` with straight or curly quotes.
pub(crate) static QUESTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bAsk\s+([^:\n]+):\s*["\u{201C}\u{201D}]([^"\u{201C}\u{201D}]+)["\u{201C}\u{201D}]"#)
        .unwrap()
});

/// Leading bullet or numbered-list marker.
pub(crate) static LIST_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*+\u{2022}]|\d+[.)])[ \t]+").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_matches_caps_lines() {
        assert!(HEADING_RE.is_match("YOUR SECRETS"));
        assert!(HEADING_RE.is_match("YOUR SECRETS:"));
        assert!(HEADING_RE.is_match("  CHOOSE SOMEONE TO QUESTION  "));
        assert!(HEADING_RE.is_match("YOUR SECRETS\r"));
    }

    #[test]
    fn test_heading_rejects_non_headings() {
        // Single word
        assert!(!HEADING_RE.is_match("SECRETS"));
        // Mixed case
        assert!(!HEADING_RE.is_match("Your Secrets"));
        // Digits
        assert!(!HEADING_RE.is_match("ROUND 1 STATEMENT"));
        // Punctuation
        assert!(!HEADING_RE.is_match("MARY SMITH - CHARACTER GUIDE"));
    }

    #[test]
    fn test_heading_found_mid_document() {
        let text = "first line\nYOUR SECRETS\nmore";
        let m = HEADING_RE.find(text).unwrap();
        assert_eq!(m.as_str(), "YOUR SECRETS");
    }

    #[test]
    fn test_guide_header_variants() {
        let caps = GUIDE_HEADER_RE.captures("## **LADY ASHWORTH \u{2013} Character Guide**").unwrap();
        assert_eq!(&caps[1], "LADY ASHWORTH");

        let caps = GUIDE_HEADER_RE.captures("JEAN-LUC DUPONT - CHARACTER GUIDE").unwrap();
        assert_eq!(&caps[1], "JEAN-LUC DUPONT");

        let caps = GUIDE_HEADER_RE.captures("MARY SMITH - CHARACTER GUIDE:\r\n").unwrap();
        assert_eq!(&caps[1], "MARY SMITH");
    }

    #[test]
    fn test_guide_header_must_end_line() {
        assert!(!GUIDE_HEADER_RE.is_match("You wrote the host - character guide yourself."));
        assert!(!GUIDE_HEADER_RE.is_match("MARY SMITH - CHARACTER GUIDES"));
    }

    #[test]
    fn test_list_marker() {
        assert_eq!(LIST_MARKER_RE.replace("- John: friend", ""), "John: friend");
        assert_eq!(LIST_MARKER_RE.replace("12) secret", ""), "secret");
        assert_eq!(LIST_MARKER_RE.replace("-1 degrees", ""), "-1 degrees");
    }
}
