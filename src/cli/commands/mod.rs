//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod catalog;
pub mod completions;
pub mod convert;
pub mod list;
pub mod show;
pub mod validate;
pub mod version;

use std::fs;
use std::path::Path;

use crate::cli::args::{Cli, Commands, SourceArgs};
use crate::error::{DoxnavError, Result};
use crate::nav::model::NavIndex;
use crate::nav::reader;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List(args) => list::run(&args),
        Commands::Show(args) => show::run(&args),
        Commands::Validate(args) => validate::run(&args),
        Commands::Convert(args) => convert::run(&args),
        Commands::Catalog(args) => {
            catalog::run(&args);
            Ok(())
        }
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Loads the index selected by `--input` or `--builtin`.
pub(crate) fn load_source(source: &SourceArgs) -> Result<NavIndex> {
    if let Some(ref path) = source.input {
        return load_file(path);
    }

    // The source arg group guarantees exactly one of input/builtin is set.
    let name = source.builtin.as_deref().unwrap_or_default();
    tracing::debug!(builtin = name, "loading built-in index");
    match crate::catalog::find_index(name) {
        Some(builtin) => Ok(builtin.index()?),
        None => {
            if let Some(suggestion) = crate::catalog::suggest_index(name) {
                eprintln!("hint: closest built-in index is \"{suggestion}\"");
            }
            Err(DoxnavError::UnknownBuiltin {
                name: name.to_string(),
            })
        }
    }
}

/// Loads a navigation data file, picking the parser by extension.
pub(crate) fn load_file(path: &Path) -> Result<NavIndex> {
    tracing::debug!(path = %path.display(), "loading navigation data");

    let content = fs::read_to_string(path).map_err(|e| {
        DoxnavError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to read {}: {e}", path.display()),
        ))
    })?;

    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        Ok(reader::parse_json(&content)?)
    } else {
        Ok(reader::parse_js(&content)?)
    }
}
