//! `show` command handler.

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::error::Result;

/// Print the members of one enum type in declaration order.
///
/// An unknown type is an empty result, not a failure: the command prints
/// nothing (human) or an empty member list (JSON), suggests a close name
/// on stderr, and exits 0.
///
/// # Errors
///
/// Returns an error if the source cannot be loaded.
pub fn run(args: &ShowArgs) -> Result<()> {
    let index = super::load_source(&args.source)?;
    let entry = index.entry(&args.type_name);

    if entry.is_none() {
        match index.suggest(&args.type_name) {
            Some(suggestion) => eprintln!(
                "no enum type \"{}\" in {}; closest is \"{suggestion}\"",
                args.type_name, index.symbol
            ),
            None => eprintln!("no enum type \"{}\" in {}", args.type_name, index.symbol),
        }
    }

    match args.format {
        OutputFormat::Human => {
            if let Some(entry) = entry {
                println!("{} ({})", entry.name, entry.anchor);
                for member in &entry.members {
                    println!("  {:<20} {}", member.name, member.anchor);
                }
            }
        }
        OutputFormat::Json => {
            let members: Vec<serde_json::Value> = entry
                .map(|e| e.members.as_slice())
                .unwrap_or_default()
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "name": m.name,
                        "anchor": m.anchor.as_str(),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::json!({
                    "symbol": index.symbol,
                    "type": args.type_name,
                    "found": entry.is_some(),
                    "members": members,
                })
            );
        }
    }

    Ok(())
}
