//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use whodunit_domain::CharacterId;
use whodunit_store::SqliteStore;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, store: &SqliteStore, formatter: &Formatter) -> Result<()> {
    let id = CharacterId::from_string(&args.id).map_err(CliError::InvalidInput)?;
    let character = store.require_character(id)?;

    println!("{}", formatter.format_character(&character)?);
    Ok(())
}
