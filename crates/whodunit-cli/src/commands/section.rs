//! Section command implementation.

use crate::cli::SectionArgs;
use crate::error::{CliError, Result};
use std::fs;
use std::io::{self, Read};
use whodunit_extractor::extract_section;

/// Execute the section command.
pub fn execute_section(args: SectionArgs) -> Result<()> {
    let text = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(file_path) = &args.file {
        fs::read_to_string(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either --file or --stdin".to_string(),
        ));
    };

    let body = find_section(&text, &args.label)?;
    println!("{}", body);
    Ok(())
}

/// Section body, or `NotFound` when the label does not occur.
fn find_section(text: &str, label: &str) -> Result<String> {
    extract_section(text, label)
        .ok_or_else(|| CliError::NotFound(format!("section '{}'", label)))
}
