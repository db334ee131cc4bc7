//! `validate` command handler.

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::error::{DoxnavError, Result};
use crate::validate::{ValidationError, validate_index};

/// Validate each file and report findings.
///
/// Findings go to stderr; in JSON mode a machine-readable report goes to
/// stdout. Exit is non-zero when errors are found, or in strict mode when
/// any finding is present.
///
/// # Errors
///
/// Returns [`DoxnavError::Validation`] when failures were found.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let mut error_count = 0usize;
    let mut warning_count = 0usize;
    let mut files = Vec::new();

    tracing::info!(files = args.files.len(), strict = args.strict, "validating");

    for path in &args.files {
        match super::load_file(path) {
            Ok(index) => {
                let report = validate_index(&index, path);
                for finding in &report.errors {
                    eprintln!("ERROR {finding}");
                }
                for finding in &report.warnings {
                    eprintln!("WARNING {finding}");
                }
                error_count += report.errors.len();
                warning_count += report.warnings.len();
                files.push(serde_json::json!({
                    "path": path.display().to_string(),
                    "errors": report.errors.iter().map(finding_json).collect::<Vec<_>>(),
                    "warnings": report.warnings.iter().map(finding_json).collect::<Vec<_>>(),
                }));
            }
            Err(e) => {
                eprintln!("ERROR {}: {e}", path.display());
                error_count += 1;
                files.push(serde_json::json!({
                    "path": path.display().to_string(),
                    "errors": [{ "message": e.to_string() }],
                    "warnings": [],
                }));
            }
        }
    }

    if args.format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::json!({
                "files": files,
                "summary": {
                    "errors": error_count,
                    "warnings": warning_count,
                    "strict": args.strict,
                },
            })
        );
    } else if error_count == 0 && warning_count == 0 {
        eprintln!("Validation passed");
    } else {
        eprintln!("\n{error_count} error(s), {warning_count} warning(s)");
    }

    let failures = if args.strict {
        error_count + warning_count
    } else {
        error_count
    };

    if failures > 0 {
        return Err(DoxnavError::Validation { count: failures });
    }

    Ok(())
}

fn finding_json(finding: &ValidationError) -> serde_json::Value {
    serde_json::json!({
        "field": finding.field,
        "message": finding.message,
    })
}
