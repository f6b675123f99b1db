//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Whodunit CLI - Parse and store murder mystery character guides.
#[derive(Debug, Parser)]
#[command(name = "whodunit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "WHODUNIT_CONFIG")]
    pub config: Option<String>,

    /// Character database path
    #[arg(short, long, global = true, env = "WHODUNIT_DB")]
    pub database: Option<String>,

    /// Verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (names or IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract character records from guide text without storing them
    Parse(ParseArgs),

    /// Print the body of a single section
    Section(SectionArgs),

    /// Extract guides and store them under a package
    Import(ImportArgs),

    /// List the characters stored under a package
    List(ListArgs),

    /// Show one stored character
    Show(ShowArgs),

    /// Delete every character of a package
    Delete(DeleteArgs),

    /// Inspect or initialise the configuration file
    Config(ConfigArgs),
}

/// Input sources shared by commands that read guide text.
#[derive(Debug, Clone, clap::Args)]
pub struct InputArgs {
    /// Guide files to read
    pub files: Vec<String>,

    /// Read guide text from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the section command.
#[derive(Debug, Parser)]
pub struct SectionArgs {
    /// Section label (e.g. "YOUR BACKGROUND"), matched case-insensitively
    pub label: String,

    /// Guide file to read
    #[arg(short = 'i', long)]
    pub file: Option<String>,

    /// Read guide text from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the import command.
#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// Package ID to store under (a new one is generated if omitted)
    #[arg(short = 'P', long)]
    pub package: Option<String>,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Package ID
    pub package: String,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Character ID
    pub id: String,
}

/// Arguments for the delete command.
#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// Package ID
    pub package: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for config management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        let cli = Cli::parse_from(["whodunit", "parse", "mary.txt", "john.txt"]);
        match cli.command {
            Command::Parse(args) => {
                assert_eq!(args.input.files, vec!["mary.txt", "john.txt"]);
                assert!(!args.input.stdin);
            }
            _ => panic!("Expected Parse command"),
        }
    }

    #[test]
    fn test_section_command() {
        let cli = Cli::parse_from(["whodunit", "section", "YOUR SECRETS", "--stdin"]);
        match cli.command {
            Command::Section(args) => {
                assert_eq!(args.label, "YOUR SECRETS");
                assert!(args.stdin);
            }
            _ => panic!("Expected Section command"),
        }
    }

    #[test]
    fn test_import_with_package_and_global_flags() {
        let cli = Cli::parse_from([
            "whodunit",
            "import",
            "--package",
            "6f1c2a4e-8b3d-4f5a-9c7e-1d2b3a4c5e6f",
            "guides.txt",
            "--format",
            "json",
            "-vv",
        ]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Import(args) => {
                assert!(args.package.is_some());
                assert_eq!(args.input.files, vec!["guides.txt"]);
            }
            _ => panic!("Expected Import command"),
        }
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["whodunit", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["whodunit"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, crate::config::OutputFormat::Quiet);
    }
}
