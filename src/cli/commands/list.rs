//! `list` command handler.

use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::Result;

/// Print the enum types of the selected index.
///
/// # Errors
///
/// Returns an error if the source cannot be loaded.
pub fn run(args: &ListArgs) -> Result<()> {
    let index = super::load_source(&args.source)?;

    match args.format {
        OutputFormat::Human => {
            println!(
                "{} ({} types, {} members)",
                index.symbol,
                index.entries.len(),
                index.member_count()
            );
            for entry in &index.entries {
                println!("  {:<20} {} members", entry.name, entry.members.len());
            }
        }
        OutputFormat::Json => {
            let types: Vec<serde_json::Value> = index
                .entries
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "name": e.name,
                        "anchor": e.anchor.as_str(),
                        "members": e.members.len(),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::json!({ "symbol": index.symbol, "types": types })
            );
        }
    }

    Ok(())
}
