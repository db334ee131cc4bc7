//! CLI argument definitions
//!
//! All Clap derive structs for doxnav command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Navigation-index tooling for generated documentation sites.
#[derive(Parser, Debug)]
#[command(name = "doxnav", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "DOXNAV_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the enum types of a navigation index.
    List(ListArgs),

    /// Show the members of one enum type in declaration order.
    Show(ShowArgs),

    /// Validate navigation data files.
    Validate(ValidateArgs),

    /// Convert a navigation index between representations.
    Convert(ConvertArgs),

    /// List the built-in navigation indexes.
    Catalog(CatalogArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Source Selection
// ============================================================================

/// Source selection shared by commands that read one index.
#[derive(Args, Debug)]
#[command(group = clap::ArgGroup::new("source").required(true).multiple(false))]
pub struct SourceArgs {
    /// Path to a navigation data file (.js, or .json for the JSON form).
    #[arg(short, long, group = "source")]
    pub input: Option<PathBuf>,

    /// Name of a built-in navigation index.
    #[arg(short, long, group = "source")]
    pub builtin: Option<String>,
}

// ============================================================================
// Command Arguments
// ============================================================================

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Index to read.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Enum type name to look up.
    pub type_name: String,

    /// Index to read.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Navigation data files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable strict validation (warnings become failures).
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `convert`.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Index to read.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Target representation.
    #[arg(long, value_enum)]
    pub to: Representation,

    /// Output file (stdout when omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the symbol name in the emitted data.
    #[arg(long)]
    pub symbol: Option<String>,
}

/// Arguments for `catalog`.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// On-disk representation of a navigation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Representation {
    /// The generator's `var <symbol> = [...];` form.
    Js,
    /// Plain JSON for machine consumption.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_with_input() {
        let cli = Cli::try_parse_from(["doxnav", "list", "--input", "nav.js"]);
        assert!(cli.is_ok(), "Failed to parse: {cli:?}");
    }

    #[test]
    fn test_list_with_builtin() {
        let cli = Cli::try_parse_from(["doxnav", "list", "--builtin", "nx_common"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_input_and_builtin_mutually_exclusive() {
        let cli = Cli::try_parse_from([
            "doxnav",
            "list",
            "--input",
            "nav.js",
            "--builtin",
            "nx_common",
        ]);
        assert!(cli.is_err(), "Expected mutual exclusion error");
    }

    #[test]
    fn test_list_requires_a_source() {
        let cli = Cli::try_parse_from(["doxnav", "list"]);
        assert!(cli.is_err(), "Expected missing source error");
    }

    #[test]
    fn test_show_takes_type_name() {
        let cli =
            Cli::try_parse_from(["doxnav", "show", "af_e", "--builtin", "nx_common"]).unwrap();
        if let Commands::Show(args) = cli.command {
            assert_eq!(args.type_name, "af_e");
            assert_eq!(args.source.builtin.as_deref(), Some("nx_common"));
            return;
        }
        panic!("Expected ShowArgs");
    }

    #[test]
    fn test_validate_requires_files() {
        let result = Cli::try_parse_from(["doxnav", "validate"]);
        assert!(result.is_err(), "Expected error for missing files");
    }

    #[test]
    fn test_validate_strict_flag() {
        let cli = Cli::try_parse_from(["doxnav", "validate", "--strict", "nav.js"]).unwrap();
        if let Commands::Validate(args) = cli.command {
            assert!(args.strict);
            assert_eq!(args.files.len(), 1);
            return;
        }
        panic!("Expected ValidateArgs");
    }

    #[test]
    fn test_convert_representations_parse() {
        for repr in ["js", "json"] {
            let cli = Cli::try_parse_from([
                "doxnav", "convert", "--input", "nav.js", "--to", repr,
            ]);
            assert!(cli.is_ok(), "Failed to parse --to {repr}");
        }
    }

    #[test]
    fn test_default_format_is_human() {
        let cli = Cli::try_parse_from(["doxnav", "catalog"]).unwrap();
        if let Commands::Catalog(args) = cli.command {
            assert_eq!(args.format, OutputFormat::Human);
            return;
        }
        panic!("Expected CatalogArgs");
    }

    #[test]
    fn test_color_choices_parse() {
        for variant in ["auto", "always", "never"] {
            let cli = Cli::try_parse_from(["doxnav", "--color", variant, "catalog"]);
            assert!(cli.is_ok(), "Failed to parse color={variant}");
        }
    }

    #[test]
    fn test_completions_shells_parse() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            let cli = Cli::try_parse_from(["doxnav", "completions", shell]);
            assert!(cli.is_ok(), "Failed to parse shell={shell}");
        }
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["doxnav", "-vvv", "catalog"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::try_parse_from(["doxnav", "--quiet", "catalog"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_help_output() {
        let result = Cli::try_parse_from(["doxnav", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let result = Cli::try_parse_from(["doxnav", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
