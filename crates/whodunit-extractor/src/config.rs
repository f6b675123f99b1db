//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Section headings the guide generator is instructed to emit
///
/// Labels are matched case-insensitively. Each default is itself a valid
/// heading (two or more all-caps words), so every section ends where the
/// next one begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionLabels {
    /// Character description
    pub description: String,
    /// Background story
    pub background: String,
    /// Whereabouts at the time of the murder
    pub whereabouts: String,
    /// Relationship list
    pub relationships: String,
    /// Secret list
    pub secrets: String,
    /// Party introduction
    pub introduction: String,
    /// Round one statement
    pub round1: String,
    /// Round two statement
    pub round2: String,
    /// Round three statement
    pub round3: String,
    /// Questioning prompts
    pub questioning: String,
}

impl SectionLabels {
    /// All labels paired with their field names
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("description", self.description.as_str()),
            ("background", self.background.as_str()),
            ("whereabouts", self.whereabouts.as_str()),
            ("relationships", self.relationships.as_str()),
            ("secrets", self.secrets.as_str()),
            ("introduction", self.introduction.as_str()),
            ("round1", self.round1.as_str()),
            ("round2", self.round2.as_str()),
            ("round3", self.round3.as_str()),
            ("questioning", self.questioning.as_str()),
        ]
        .into_iter()
    }
}

impl Default for SectionLabels {
    fn default() -> Self {
        Self {
            description: "CHARACTER DESCRIPTION".to_string(),
            background: "YOUR BACKGROUND".to_string(),
            whereabouts: "YOUR WHEREABOUTS".to_string(),
            relationships: "YOUR RELATIONSHIPS".to_string(),
            secrets: "YOUR SECRETS".to_string(),
            introduction: "YOUR INTRODUCTION".to_string(),
            round1: "ROUND ONE STATEMENT".to_string(),
            round2: "ROUND TWO STATEMENT".to_string(),
            round3: "ROUND THREE STATEMENT".to_string(),
            questioning: "CHOOSE SOMEONE TO QUESTION".to_string(),
        }
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Strip leading list markers (`-`, `*`, `1.`) from relationship and secret lines
    pub strip_list_markers: bool,

    /// Maximum guide length accepted for ingestion (characters)
    pub max_text_length: usize,

    /// Section headings to look for
    pub labels: SectionLabels,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        for (field, label) in self.labels.iter() {
            if label.trim().is_empty() {
                return Err(format!("label for '{}' cannot be empty", field));
            }
            if label.contains('\n') {
                return Err(format!("label for '{}' must be a single line", field));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            strip_list_markers: false,
            max_text_length: 50_000,
            labels: SectionLabels::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_max_text_length() {
        let mut config = ExtractorConfig::default();
        config.max_text_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_label_rejected() {
        let mut config = ExtractorConfig::default();
        config.labels.secrets = "   ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("secrets"));
    }

    #[test]
    fn test_multiline_label_rejected() {
        let mut config = ExtractorConfig::default();
        config.labels.background = "YOUR\nBACKGROUND".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ExtractorConfig::from_toml(
            r#"
            strip_list_markers = true

            [labels]
            secrets = "WHAT YOU ARE HIDING"
            "#,
        )
        .unwrap();

        assert!(config.strip_list_markers);
        assert_eq!(config.labels.secrets, "WHAT YOU ARE HIDING");
        assert_eq!(config.labels.background, "YOUR BACKGROUND");
        assert_eq!(config.max_text_length, 50_000);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_labels_iter_covers_every_section() {
        let labels = SectionLabels::default();
        assert_eq!(labels.iter().count(), 10);
    }
}
