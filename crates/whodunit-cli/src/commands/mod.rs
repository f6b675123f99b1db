//! Command implementations.

pub mod config;
pub mod delete;
pub mod import;
pub mod list;
pub mod parse;
pub mod section;
pub mod show;

pub use self::config::execute_config;
pub use self::delete::execute_delete;
pub use self::import::execute_import;
pub use self::list::execute_list;
pub use self::parse::execute_parse;
pub use self::section::execute_section;
pub use self::show::execute_show;

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use std::fs;
use std::io::{self, Read};

/// Read guide text from every file argument and, if requested, stdin.
pub(crate) fn read_inputs(input: &InputArgs) -> Result<Vec<String>> {
    let mut texts = Vec::new();

    for path in &input.files {
        texts.push(fs::read_to_string(path)?);
    }

    if input.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        texts.push(buffer);
    }

    if texts.is_empty() {
        return Err(CliError::InvalidInput(
            "Must specify at least one file or --stdin".to_string(),
        ));
    }

    Ok(texts)
}
