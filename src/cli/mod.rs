//! CLI module for Symlist
//!
//! Provides command-line interface using clap derive macros.

pub mod commands;
pub mod output;

pub use output::{OutputContext, OutputFormat};

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{config::ConfigArgs, folder::FolderArgs, kinds::KindsArgs, list::ListArgs};

const LONG_ABOUT: &str = r#"
Symlist - print the symbol outline of a file or a whole folder

Each symbol is printed on its own line, indented with one tab per nesting
level, with its visibility, kind, name and (for functions and methods) a
best-effort return type:

    public Class Person
    	private Field name
    	public Method getName: String

EXAMPLES:
  symlist list src/main.rs                     # Outline of one file
  symlist list app.ts --symbols symbols.json   # Replay an LSP documentSymbol result
  symlist folder src --exclude "*.spec.ts"     # Outline of every file under src/
  symlist --format json folder src             # JSON envelope for tooling
  symlist kinds                                # Symbol kind labels
"#;

/// Symlist - symbol outlines for source files and folders
#[derive(Parser, Debug)]
#[command(name = "symlist")]
#[command(author, version, about, long_about = LONG_ABOUT)]
#[command(propagate_version = true)]
#[command(after_help = "Use 'symlist <COMMAND> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text, json); defaults to output.format from config
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Write the outline to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Verbose output (show debug info)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the symbols of one file
    List(ListArgs),

    /// List the symbols of every file in a folder
    Folder(FolderArgs),

    /// Show the symbol kind labels
    Kinds(KindsArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let cli = Cli::parse_from(["symlist", "list", "src/lib.rs", "--symbols", "-"]);
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.file, PathBuf::from("src/lib.rs"));
                assert_eq!(args.symbols.as_deref(), Some("-"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_parse_folder_with_globals() {
        let cli = Cli::parse_from([
            "symlist",
            "folder",
            "src",
            "--exclude",
            "*.spec.ts",
            "--exclude",
            "fixtures/",
            "--format",
            "json",
            "-v",
        ]);
        assert_eq!(cli.format.as_deref(), Some("json"));
        assert!(cli.verbose);
        match cli.command {
            Commands::Folder(args) => {
                assert_eq!(args.dir, PathBuf::from("src"));
                assert_eq!(args.exclude, vec!["*.spec.ts", "fixtures/"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
