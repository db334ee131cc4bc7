//! Writers for the navigation-index representations.
//!
//! [`to_js`] reproduces the generator's own layout — 4-space entry rows,
//! 6-space member rows, `null` for empty member lists, no trailing
//! newline — so re-emitting an unmodified index is byte-identical to the
//! generator's output.

use super::model::NavIndex;

/// Renders the `var <symbol> = [...];` navigation data form.
#[must_use]
pub fn to_js(index: &NavIndex) -> String {
    let mut lines = Vec::new();
    lines.push(format!("var {} =", index.symbol));
    lines.push("[".to_string());

    let last_entry = index.entries.len().saturating_sub(1);
    for (i, entry) in index.entries.iter().enumerate() {
        let comma = if i == last_entry { "" } else { "," };
        let name = js_str(&entry.name);
        let anchor = js_str(entry.anchor.as_str());

        if entry.members.is_empty() {
            lines.push(format!("    [ {name}, {anchor}, null ]{comma}"));
            continue;
        }

        lines.push(format!("    [ {name}, {anchor}, ["));
        let last_member = entry.members.len() - 1;
        for (j, member) in entry.members.iter().enumerate() {
            let member_comma = if j == last_member { "" } else { "," };
            lines.push(format!(
                "      [ {}, {}, null ]{member_comma}",
                js_str(&member.name),
                js_str(member.anchor.as_str())
            ));
        }
        lines.push(format!("    ] ]{comma}"));
    }

    lines.push("];".to_string());
    lines.join("\n")
}

/// Renders the JSON representation.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn to_json(index: &NavIndex) -> serde_json::Result<String> {
    serde_json::to_string(index)
}

/// Renders the JSON representation with indentation.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn to_json_pretty(index: &NavIndex) -> serde_json::Result<String> {
    serde_json::to_string_pretty(index)
}

/// Quotes and escapes a string for the navdata layout.
fn js_str(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

// ============================================================================
// Tests
// ============================================================================
