//! List command implementation.

use crate::cli::ListArgs;
use crate::commands::import::parse_package;
use crate::error::Result;
use crate::output::Formatter;
use whodunit_domain::traits::CharacterStore;
use whodunit_store::SqliteStore;

/// Execute the list command.
pub fn execute_list(args: ListArgs, store: &SqliteStore, formatter: &Formatter) -> Result<()> {
    let package_id = parse_package(Some(&args.package))?;
    let characters = store.list_characters(package_id)?;

    println!("{}", formatter.format_characters(&characters)?);
    Ok(())
}
