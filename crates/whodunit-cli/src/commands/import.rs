//! Import command implementation.

use crate::cli::ImportArgs;
use crate::commands::read_inputs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use whodunit_domain::PackageId;
use whodunit_extractor::{CharacterIngestor, IngestReport};
use whodunit_store::SqliteStore;

/// Execute the import command.
pub fn execute_import(
    args: ImportArgs,
    config: &Config,
    store: SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    let package_id = parse_package(args.package.as_deref())?;
    let texts = read_inputs(&args.input)?;

    let mut ingestor = CharacterIngestor::new(store, config.extractor.clone())?;
    let report = import_texts(&mut ingestor, package_id, &texts);

    println!("{}", formatter.format_report(&report)?);

    if report.created.is_empty() && !report.failures.is_empty() {
        return Err(CliError::InvalidInput(
            "None of the guides could be imported".to_string(),
        ));
    }

    Ok(())
}

/// Use the given package id or mint a new one.
pub(crate) fn parse_package(package: Option<&str>) -> Result<PackageId> {
    match package {
        Some(id) => PackageId::from_string(id).map_err(CliError::InvalidInput),
        None => Ok(PackageId::new()),
    }
}

/// Ingest every text into one package and merge the per-text reports.
pub fn import_texts(
    ingestor: &mut CharacterIngestor<SqliteStore>,
    package_id: PackageId,
    texts: &[String],
) -> IngestReport {
    let mut merged = IngestReport {
        package_id,
        guides_found: 0,
        created: Vec::new(),
        failures: Vec::new(),
    };

    for text in texts {
        let report = ingestor.ingest_document(package_id, text);
        merged.guides_found += report.guides_found;
        merged.created.extend(report.created);
        merged.failures.extend(report.failures);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use whodunit_domain::traits::CharacterStore;
    use whodunit_extractor::ExtractorConfig;

    #[test]
    fn test_parse_package() {
        let id = PackageId::new();
        assert_eq!(parse_package(Some(&id.to_string())).unwrap(), id);
        assert!(parse_package(None).is_ok());
        assert!(matches!(parse_package(Some("nope")), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_import_texts_merges_reports() {
        let store = SqliteStore::new(":memory:").unwrap();
        let mut ingestor = CharacterIngestor::new(store, ExtractorConfig::default()).unwrap();
        let package_id = PackageId::new();

        let texts = vec![
            "MARY SMITH - CHARACTER GUIDE\nYOUR SECRETS\nOne.".to_string(),
            "JOHN DOE - CHARACTER GUIDE\nYOUR SECRETS\nTwo.".to_string(),
            "\n\n".to_string(),
        ];
        let report = import_texts(&mut ingestor, package_id, &texts);

        assert_eq!(report.guides_found, 2);
        assert_eq!(report.created.len(), 2);
        assert!(report.is_complete());
        assert_eq!(ingestor.store().list_characters(package_id).unwrap().len(), 2);
    }
}
