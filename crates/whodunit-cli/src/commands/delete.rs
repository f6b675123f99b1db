//! Delete command implementation.

use crate::cli::DeleteArgs;
use crate::commands::import::parse_package;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::io::{self, Write};
use whodunit_domain::traits::CharacterStore;
use whodunit_store::SqliteStore;

/// Execute the delete command.
pub fn execute_delete(
    args: DeleteArgs,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    let package_id = parse_package(Some(&args.package))?;

    let count = store.count_characters(package_id)?;
    if count == 0 {
        return Err(CliError::NotFound(format!("package {}", package_id)));
    }

    // Confirm deletion unless --yes is specified
    if !args.yes {
        print!(
            "About to delete {} character(s) from package {}. Continue? [y/N] ",
            count, package_id
        );
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;

        if !response.trim().eq_ignore_ascii_case("y") {
            println!("{}", formatter.info("Operation cancelled"));
            return Ok(());
        }
    }

    let removed = store.delete_package(package_id)?;
    println!(
        "{}",
        formatter.success(&format!("Deleted {} character(s) from package {}", removed, package_id))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use whodunit_domain::{CharacterRecord, PackageId};

    #[test]
    fn test_delete_with_yes() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let package_id = PackageId::new();
        store
            .save_character(package_id, "MARY SMITH", &CharacterRecord::default())
            .unwrap();

        let args = DeleteArgs {
            package: package_id.to_string(),
            yes: true,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        execute_delete(args, &mut store, &formatter).unwrap();

        assert_eq!(store.count_characters(package_id).unwrap(), 0);
    }

    #[test]
    fn test_delete_unknown_package() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let args = DeleteArgs {
            package: PackageId::new().to_string(),
            yes: true,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(matches!(
            execute_delete(args, &mut store, &formatter),
            Err(CliError::NotFound(_))
        ));
    }
}
