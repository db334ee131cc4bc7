//! `convert` command handler.

use std::fs;

use crate::cli::args::{ConvertArgs, Representation};
use crate::error::{DoxnavError, Result};
use crate::nav::writer;

/// Convert the selected index and write it to stdout or `--output`.
///
/// Converting an unmodified index back to `js` reproduces the
/// generator's output byte-for-byte.
///
/// # Errors
///
/// Returns an error if the source cannot be loaded or the output cannot
/// be written.
pub fn run(args: &ConvertArgs) -> Result<()> {
    let mut index = super::load_source(&args.source)?;
    if let Some(ref symbol) = args.symbol {
        index.symbol = symbol.clone();
    }

    let rendered = match args.to {
        Representation::Js => writer::to_js(&index),
        Representation::Json => {
            let mut rendered = writer::to_json_pretty(&index)?;
            rendered.push('\n');
            rendered
        }
    };

    match args.output {
        Some(ref path) => {
            tracing::info!(path = %path.display(), "writing converted index");
            fs::write(path, rendered).map_err(DoxnavError::Io)?;
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
