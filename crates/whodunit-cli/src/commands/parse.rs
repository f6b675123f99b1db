//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::commands::read_inputs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use tracing::info;
use whodunit_domain::CharacterRecord;
use whodunit_extractor::{split_guides, SectionExtractor};

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let texts = read_inputs(&args.input)?;
    let extractor = SectionExtractor::new(config.extractor.clone())?;

    let records = parse_texts(&texts, &extractor);
    info!("Parsed {} character guide(s)", records.len());

    let unnamed = records.iter().filter(|r| r.name.is_none()).count();
    if unnamed > 0 {
        eprintln!(
            "{}",
            formatter.warning(&format!("{} guide(s) have no CHARACTER GUIDE header", unnamed))
        );
    }

    println!("{}", formatter.format_records(&records)?);
    Ok(())
}

/// Split every text into guides and extract each one.
pub fn parse_texts(texts: &[String], extractor: &SectionExtractor) -> Vec<CharacterRecord> {
    texts
        .iter()
        .flat_map(|text| split_guides(text))
        .map(|guide| extractor.extract_character_info(guide))
        .collect()
}
