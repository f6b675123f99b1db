//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use whodunit_domain::{Character, CharacterRecord};
use whodunit_extractor::IngestReport;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format freshly extracted records.
    pub fn format_records(&self, records: &[CharacterRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<Value> = records.iter().map(record_json).collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => {
                if records.is_empty() {
                    return Ok(self.colorize("No character guides found.", "yellow"));
                }
                let blocks: Vec<String> = records
                    .iter()
                    .map(|record| self.record_block(record.name.as_deref().unwrap_or("(unnamed)"), record))
                    .collect();
                Ok(blocks.join("\n\n"))
            }
            OutputFormat::Quiet => Ok(records
                .iter()
                .map(|r| r.name.clone().unwrap_or_default())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format stored characters.
    pub fn format_characters(&self, characters: &[Character]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<Value> = characters.iter().map(character_json).collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => Ok(self.format_characters_table(characters)),
            OutputFormat::Quiet => Ok(characters
                .iter()
                .map(|c| c.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a single stored character in full.
    pub fn format_character(&self, character: &Character) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&character_json(character))?),
            OutputFormat::Table => {
                let header = format!(
                    "ID: {}\nPackage: {}\n",
                    character.id, character.package_id
                );
                Ok(header + &self.record_block(&character.name, &character.record))
            }
            OutputFormat::Quiet => Ok(character.id.to_string()),
        }
    }

    /// Format an import report.
    pub fn format_report(&self, report: &IngestReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = json!({
                    "packageId": report.package_id.to_string(),
                    "guidesFound": report.guides_found,
                    "created": report.created.iter().map(|c| json!({
                        "id": c.id.to_string(),
                        "name": c.name,
                        "nameFromFallback": c.name_from_fallback,
                    })).collect::<Vec<_>>(),
                    "failures": report.failures.iter().map(|f| json!({
                        "reason": f.reason,
                        "excerpt": f.excerpt,
                    })).collect::<Vec<_>>(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut lines = vec![self.success(&format!(
                    "Imported {} of {} guide(s) into package {}",
                    report.created.len(),
                    report.guides_found,
                    report.package_id
                ))];
                for created in &report.created {
                    let note = if created.name_from_fallback {
                        " (name taken from first line)"
                    } else {
                        ""
                    };
                    lines.push(format!("  {} {}{}", created.id, created.name, note));
                }
                for failure in &report.failures {
                    lines.push(self.error(&format!("{}: {}", failure.reason, failure.excerpt)));
                }
                Ok(lines.join("\n"))
            }
            OutputFormat::Quiet => Ok(report
                .created
                .iter()
                .map(|c| c.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format stored characters as a table.
    fn format_characters_table(&self, characters: &[Character]) -> String {
        if characters.is_empty() {
            return self.colorize("No characters found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Sections", "Relationships", "Secrets", "Questions"]);

        for character in characters {
            builder.push_record([
                character.id.to_string()[..8].to_string(), // Truncate ID for readability
                character.name.clone(),
                character.record.section_count().to_string(),
                character.record.relationships.len().to_string(),
                character.record.secrets.len().to_string(),
                character.record.questioning_options.len().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Human-readable rendering of one record.
    fn record_block(&self, name: &str, record: &CharacterRecord) -> String {
        let mut out = vec![self.colorize(name, "cyan")];

        for (field, value) in record.prose_sections() {
            if let Some(value) = value {
                out.push(format!("{}:", self.colorize(field, "magenta")));
                out.extend(value.lines().map(|line| format!("  {}", line)));
            }
        }

        if !record.relationships.is_empty() {
            out.push(format!("{}:", self.colorize("relationships", "magenta")));
            for relationship in &record.relationships {
                out.push(format!("  - {}: {}", relationship.character, relationship.description));
            }
        }

        if !record.secrets.is_empty() {
            out.push(format!("{}:", self.colorize("secrets", "magenta")));
            out.extend(record.secrets.iter().map(|secret| format!("  - {}", secret)));
        }

        if !record.questioning_options.is_empty() {
            out.push(format!("{}:", self.colorize("questioningOptions", "magenta")));
            for option in &record.questioning_options {
                out.push(format!("  - Ask {}: \"{}\"", option.target, option.question));
            }
        }

        out.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// JSON shape of a record, using the field names the web application stores.
pub fn record_json(record: &CharacterRecord) -> Value {
    let mut value = json!({
        "name": record.name,
        "relationships": record.relationships.iter().map(|r| json!({
            "character": r.character,
            "description": r.description,
        })).collect::<Vec<_>>(),
        "secrets": record.secrets,
        "questioningOptions": record.questioning_options.iter().map(|q| json!({
            "target": q.target,
            "question": q.question,
        })).collect::<Vec<_>>(),
    });

    // Absent sections are omitted rather than written as null
    if let Value::Object(map) = &mut value {
        for (field, section) in record.prose_sections() {
            if let Some(section) = section {
                map.insert(field.to_string(), Value::String(section.to_string()));
            }
        }
        if record.name.is_none() {
            map.remove("name");
        }
    }

    value
}

fn character_json(character: &Character) -> Value {
    json!({
        "id": character.id.to_string(),
        "packageId": character.package_id.to_string(),
        "name": character.name,
        "createdAt": character.created_at,
        "record": record_json(&character.record),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use whodunit_domain::{CharacterId, PackageId, QuestioningOption, Relationship};

    fn create_test_record() -> CharacterRecord {
        CharacterRecord {
            name: Some("MARY SMITH".to_string()),
            background: Some("A novelist".to_string()),
            round1_statement: Some("I heard voices".to_string()),
            relationships: vec![Relationship::new("John", "old friend")],
            secrets: vec!["You owe money".to_string()],
            questioning_options: vec![QuestioningOption::new("John", "Where were you?")],
            ..Default::default()
        }
    }

    fn create_test_character() -> Character {
        Character {
            id: CharacterId::new(),
            package_id: PackageId::new(),
            name: "MARY SMITH".to_string(),
            record: create_test_record(),
            created_at: 12345678,
        }
    }

    #[test]
    fn test_record_json_shape() {
        let value = record_json(&create_test_record());
        assert_eq!(value["name"], "MARY SMITH");
        assert_eq!(value["round1Statement"], "I heard voices");
        assert_eq!(value["relationships"][0]["character"], "John");
        assert_eq!(value["questioningOptions"][0]["target"], "John");
        assert!(value.get("whereabouts").is_none());
    }

    #[test]
    fn test_record_json_without_name() {
        let value = record_json(&CharacterRecord::default());
        assert!(value.get("name").is_none());
        assert_eq!(value["secrets"], json!([]));
    }

    #[test]
    fn test_json_records() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_records(&[create_test_record()]).unwrap();
        assert!(output.contains("\"background\""));
        assert!(output.contains("questioningOptions"));
    }

    #[test]
    fn test_table_records() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_records(&[create_test_record()]).unwrap();
        assert!(output.starts_with("MARY SMITH"));
        assert!(output.contains("  - John: old friend"));
        assert!(output.contains("  - Ask John: \"Where were you?\""));
    }

    #[test]
    fn test_quiet_characters() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let character = create_test_character();
        let output = formatter.format_characters(&[character.clone()]).unwrap();
        assert_eq!(output, character.id.to_string());
    }

    #[test]
    fn test_characters_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_characters(&[create_test_character()]).unwrap();
        assert!(output.contains("Name"));
        assert!(output.contains("MARY SMITH"));
    }

    #[test]
    fn test_empty_characters() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_characters(&[]).unwrap();
        assert!(output.contains("No characters found"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
