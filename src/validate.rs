//! Invariant validation for navigation indexes.
//!
//! Checks the properties a documentation site's sidebar relies on: unique
//! enum-type names, unique `(name, anchor)` member pairs, and anchors that
//! point into the generated pages. Anchors are opaque tokens, so shape
//! deviations are warnings rather than errors.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::nav::model::{Anchor, EnumEntry, NavIndex};

// ============================================================================
// Findings
// ============================================================================

/// A validation finding with file and field context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Path of the file the index was read from.
    pub path: String,
    /// Field the finding applies to (e.g. `af_e.members[2]`).
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n  \u{2192} {}: {}",
            self.path, self.field, self.message
        )
    }
}

/// Result of validating one navigation index.
#[derive(Debug, Default)]
pub struct IndexValidation {
    /// Invariant violations.
    pub errors: Vec<ValidationError>,
    /// Suspicious but tolerated findings.
    pub warnings: Vec<ValidationError>,
}

impl IndexValidation {
    /// Returns `true` if there are no findings at all.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Returns `true` if there are invariant violations.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validates one navigation index.
///
/// `path` is the file the index was read from and appears in every
/// finding. Member order itself is carried verbatim by the model and
/// needs no check here.
#[must_use]
pub fn validate_index(index: &NavIndex, path: &Path) -> IndexValidation {
    let path_str = path.display().to_string();
    let mut validation = IndexValidation::default();

    detect_duplicate_types(index, &path_str, &mut validation);

    for entry in &index.entries {
        check_anchor(&entry.anchor, &path_str, &entry.name, &mut validation);

        if entry.members.is_empty() {
            validation.warnings.push(ValidationError {
                path: path_str.clone(),
                field: entry.name.clone(),
                message: "enum type has no members".to_string(),
            });
        }

        check_members(entry, &path_str, &mut validation);
    }

    validation
}

/// Flags enum-type names that appear more than once.
fn detect_duplicate_types(index: &NavIndex, path: &str, validation: &mut IndexValidation) {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (i, entry) in index.entries.iter().enumerate() {
        if let Some(first) = seen.get(entry.name.as_str()) {
            validation.errors.push(ValidationError {
                path: path.to_string(),
                field: format!("entries[{i}]"),
                message: format!(
                    "duplicate enum type \"{}\", first seen at entries[{first}]",
                    entry.name
                ),
            });
        } else {
            seen.insert(&entry.name, i);
        }
    }
}

/// Checks member pair uniqueness and anchor consistency within one type.
fn check_members(entry: &EnumEntry, path: &str, validation: &mut IndexValidation) {
    let mut seen_pairs: HashMap<(&str, &str), usize> = HashMap::new();
    let mut seen_names: HashMap<&str, usize> = HashMap::new();

    for (i, member) in entry.members.iter().enumerate() {
        let field = format!("{}.members[{i}]", entry.name);

        check_anchor(&member.anchor, path, &field, validation);

        // Generated member fragments extend their enum's fragment, so a
        // member that breaks the pattern points somewhere unexpected.
        if let (Some(type_fragment), Some(member_fragment)) =
            (entry.anchor.fragment(), member.anchor.fragment())
        {
            if !member_fragment.starts_with(type_fragment) {
                validation.warnings.push(ValidationError {
                    path: path.to_string(),
                    field: field.clone(),
                    message: format!(
                        "member anchor does not extend the \"{}\" fragment",
                        entry.name
                    ),
                });
            }
        }

        let pair = (member.name.as_str(), member.anchor.as_str());
        if let Some(first) = seen_pairs.get(&pair) {
            validation.errors.push(ValidationError {
                path: path.to_string(),
                field,
                message: format!(
                    "duplicate (name, anchor) pair \"{}\", first seen at members[{first}]",
                    member.name
                ),
            });
        } else {
            seen_pairs.insert(pair, i);
            if let Some(first) = seen_names.get(member.name.as_str()) {
                validation.warnings.push(ValidationError {
                    path: path.to_string(),
                    field,
                    message: format!(
                        "member name \"{}\" shadows members[{first}] with a different anchor",
                        member.name
                    ),
                });
            } else {
                seen_names.insert(&member.name, i);
            }
        }
    }
}

/// Warns when an anchor does not look like `page.html#fragment`.
fn check_anchor(anchor: &Anchor, path: &str, field: &str, validation: &mut IndexValidation) {
    let well_formed = match (anchor.page(), anchor.fragment()) {
        (Some(page), Some(fragment)) => page.ends_with(".html") && !fragment.is_empty(),
        _ => false,
    };

    if !well_formed {
        validation.warnings.push(ValidationError {
            path: path.to_string(),
            field: field.to_string(),
            message: format!("anchor \"{anchor}\" does not look like page.html#fragment"),
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
