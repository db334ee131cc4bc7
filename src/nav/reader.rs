//! Readers for the navigation-index representations.
//!
//! The generator binds each header's navigation array to a JS variable:
//!
//! ```text
//! var nx__common_8h =
//! [
//!     [ "af_e", "nx__common_8h.html#a3a66...", [
//!       [ "AF_START", "nx__common_8h.html#a3a66...f359...", null ],
//!       ...
//!     ] ],
//!     ...
//! ];
//! ```
//!
//! The payload between `=` and the trailing `;` is JSON; the prelude names
//! the symbol. [`parse_js`] understands that shape, [`parse_json`] the
//! plain JSON form emitted by [`writer::to_json`](super::writer::to_json).

use serde_json::Value;

use super::model::{Anchor, EnumEntry, EnumMember, NavIndex};
use crate::error::NavError;

/// Parses the `var <symbol> = [...];` navigation data form.
///
/// Rows with a `null` member list are read as enum types with no members;
/// the generator emits `null` instead of an empty array. Duplicate
/// enum-type names parse successfully and are left to validation.
///
/// # Errors
///
/// Returns [`NavError::MissingPrelude`] or [`NavError::MissingTerminator`]
/// when the binding shape is absent, [`NavError::Payload`] when the payload
/// is not JSON, and [`NavError::MalformedEntry`] /
/// [`NavError::MalformedMember`] when a row has the wrong shape.
pub fn parse_js(source: &str) -> Result<NavIndex, NavError> {
    let (symbol, payload) = split_prelude(source)?;
    let value: Value = serde_json::from_str(payload)?;
    index_from_value(symbol, &value)
}

/// Parses the JSON representation.
///
/// # Errors
///
/// Returns [`NavError::Payload`] if the source is not the serialized form
/// of a [`NavIndex`].
pub fn parse_json(source: &str) -> Result<NavIndex, NavError> {
    Ok(serde_json::from_str(source)?)
}

/// Splits `var <symbol> = <payload>;` into the symbol and the payload.
fn split_prelude(source: &str) -> Result<(String, &str), NavError> {
    let rest = source
        .trim_start()
        .strip_prefix("var")
        .filter(|r| r.starts_with(char::is_whitespace))
        .ok_or_else(|| NavError::MissingPrelude("expected `var` keyword".to_string()))?
        .trim_start();

    let symbol_end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    let symbol = &rest[..symbol_end];
    if symbol.is_empty() {
        return Err(NavError::MissingPrelude("missing symbol name".to_string()));
    }

    let payload = rest[symbol_end..]
        .trim_start()
        .strip_prefix('=')
        .ok_or_else(|| {
            NavError::MissingPrelude(format!("expected `=` after symbol \"{symbol}\""))
        })?
        .trim_end()
        .strip_suffix(';')
        .ok_or(NavError::MissingTerminator)?;

    Ok((symbol.to_string(), payload))
}

fn index_from_value(symbol: String, value: &Value) -> Result<NavIndex, NavError> {
    let rows = value.as_array().ok_or_else(|| NavError::MalformedEntry {
        index: 0,
        message: "top-level payload is not an array".to_string(),
    })?;

    let mut entries = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        entries.push(entry_from_value(index, row)?);
    }

    Ok(NavIndex { symbol, entries })
}

fn entry_from_value(index: usize, row: &Value) -> Result<EnumEntry, NavError> {
    let fields = row
        .as_array()
        .ok_or_else(|| malformed_entry(index, "entry is not an array"))?;
    if fields.len() != 3 {
        return Err(malformed_entry(
            index,
            &format!("expected 3 fields, got {}", fields.len()),
        ));
    }

    let name = fields[0]
        .as_str()
        .ok_or_else(|| malformed_entry(index, "name is not a string"))?;
    let anchor = fields[1]
        .as_str()
        .ok_or_else(|| malformed_entry(index, "anchor is not a string"))?;

    let members = match &fields[2] {
        Value::Null => Vec::new(),
        Value::Array(rows) => rows
            .iter()
            .enumerate()
            .map(|(i, row)| member_from_value(name, i, row))
            .collect::<Result<_, _>>()?,
        _ => {
            return Err(malformed_entry(
                index,
                "member list is neither an array nor null",
            ));
        }
    };

    Ok(EnumEntry {
        name: name.to_string(),
        anchor: Anchor::new(anchor),
        members,
    })
}

fn member_from_value(type_name: &str, index: usize, row: &Value) -> Result<EnumMember, NavError> {
    let fields = row
        .as_array()
        .ok_or_else(|| malformed_member(type_name, index, "member row is not an array"))?;
    if fields.len() != 3 {
        return Err(malformed_member(
            type_name,
            index,
            &format!("expected 3 fields, got {}", fields.len()),
        ));
    }

    let name = fields[0]
        .as_str()
        .ok_or_else(|| malformed_member(type_name, index, "name is not a string"))?;
    let anchor = fields[1]
        .as_str()
        .ok_or_else(|| malformed_member(type_name, index, "anchor is not a string"))?;
    if !fields[2].is_null() {
        return Err(malformed_member(type_name, index, "trailing field is not null"));
    }

    Ok(EnumMember {
        name: name.to_string(),
        anchor: Anchor::new(anchor),
    })
}

fn malformed_entry(index: usize, message: &str) -> NavError {
    NavError::MalformedEntry {
        index,
        message: message.to_string(),
    }
}

fn malformed_member(type_name: &str, index: usize, message: &str) -> NavError {
    NavError::MalformedMember {
        type_name: type_name.to_string(),
        index,
        message: message.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"var sample_8h =
[
    [ "color_e", "sample_8h.html#aa11", [
      [ "RED", "sample_8h.html#aa11b1", null ],
      [ "GREEN", "sample_8h.html#aa11b2", null ]
    ] ],
    [ "empty_e", "sample_8h.html#aa22", null ]
];"#;

    #[test]
    fn parse_sample_symbol_and_order() {
        let index = parse_js(SAMPLE).unwrap();
        assert_eq!(index.symbol, "sample_8h");
        assert_eq!(index.type_names(), vec!["color_e", "empty_e"]);
        let color = index.entry("color_e").unwrap();
        assert_eq!(color.member_names(), vec!["RED", "GREEN"]);
    }

    #[test]
    fn parse_null_member_list_is_empty() {
        let index = parse_js(SAMPLE).unwrap();
        let empty = index.entry("empty_e").unwrap();
        assert!(empty.members.is_empty());
    }

    #[test]
    fn parse_empty_member_array() {
        let index = parse_js(r#"var x = [ [ "a_e", "x.html#a1", [] ] ];"#).unwrap();
        assert!(index.entry("a_e").unwrap().members.is_empty());
    }

    #[test]
    fn parse_empty_index() {
        let index = parse_js("var x =\n[\n];").unwrap();
        assert_eq!(index.symbol, "x");
        assert!(index.entries.is_empty());
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        let index = parse_js("  \n var   x   = [] ;  ").unwrap();
        assert_eq!(index.symbol, "x");
    }

    #[test]
    fn parse_preserves_duplicate_type_names() {
        let source = r#"var x =
[
    [ "dup_e", "x.html#a1", null ],
    [ "dup_e", "x.html#a2", null ]
];"#;
        let index = parse_js(source).unwrap();
        assert_eq!(index.entries.len(), 2);
    }

    #[test]
    fn reject_missing_var_keyword() {
        let err = parse_js("nx__common_8h = [];").unwrap_err();
        assert!(matches!(err, NavError::MissingPrelude(_)));
    }

    #[test]
    fn reject_var_prefix_of_identifier() {
        let err = parse_js("variable = [];").unwrap_err();
        assert!(matches!(err, NavError::MissingPrelude(_)));
    }

    #[test]
    fn reject_missing_equals() {
        let err = parse_js("var x [];").unwrap_err();
        assert!(matches!(err, NavError::MissingPrelude(_)));
    }

    #[test]
    fn reject_missing_terminator() {
        let err = parse_js("var x = []").unwrap_err();
        assert!(matches!(err, NavError::MissingTerminator));
    }

    #[test]
    fn reject_bad_json_payload() {
        let err = parse_js("var x = [ [ ;").unwrap_err();
        assert!(matches!(err, NavError::Payload(_)));
    }

    #[test]
    fn reject_non_array_payload() {
        let err = parse_js("var x = {};").unwrap_err();
        assert!(matches!(err, NavError::MalformedEntry { .. }));
    }

    #[test]
    fn reject_short_entry() {
        let err = parse_js(r#"var x = [ [ "a_e", "x.html#a1" ] ];"#).unwrap_err();
        match err {
            NavError::MalformedEntry { index, message } => {
                assert_eq!(index, 0);
                assert!(message.contains("expected 3 fields"));
            }
            other => panic!("expected MalformedEntry, got {other}"),
        }
    }

    #[test]
    fn reject_non_string_entry_name() {
        let err = parse_js(r#"var x = [ [ 7, "x.html#a1", null ] ];"#).unwrap_err();
        assert!(matches!(err, NavError::MalformedEntry { .. }));
    }

    #[test]
    fn reject_member_with_non_null_tail() {
        let source = r#"var x =
[
    [ "a_e", "x.html#a1", [
      [ "A", "x.html#a1b1", "extra" ]
    ] ]
];"#;
        let err = parse_js(source).unwrap_err();
        match err {
            NavError::MalformedMember {
                type_name, index, ..
            } => {
                assert_eq!(type_name, "a_e");
                assert_eq!(index, 0);
            }
            other => panic!("expected MalformedMember, got {other}"),
        }
    }

    #[test]
    fn json_round_trip_through_parse_json() {
        let index = parse_js(SAMPLE).unwrap();
        let json = serde_json::to_string(&index).unwrap();
        let reparsed = parse_json(&json).unwrap();
        assert_eq!(reparsed, index);
    }

    #[test]
    fn parse_json_rejects_wrong_shape() {
        let err = parse_json(r#"{"symbol": 5}"#).unwrap_err();
        assert!(matches!(err, NavError::Payload(_)));
    }
}
