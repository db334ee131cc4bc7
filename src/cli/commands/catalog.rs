//! `catalog` command handler.

use crate::cli::args::{CatalogArgs, OutputFormat};

/// List the built-in navigation indexes.
pub fn run(args: &CatalogArgs) {
    let builtins = crate::catalog::list_indexes();

    match args.format {
        OutputFormat::Human => {
            for builtin in builtins {
                println!(
                    "{:<12} {:<14} {}",
                    builtin.name, builtin.header, builtin.description
                );
            }
        }
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = builtins
                .iter()
                .map(|b| {
                    serde_json::json!({
                        "name": b.name,
                        "header": b.header,
                        "description": b.description,
                    })
                })
                .collect();
            println!("{}", serde_json::Value::Array(rows));
        }
    }
}
