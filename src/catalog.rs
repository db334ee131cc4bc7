//! Built-in navigation indexes embedded at compile time.
//!
//! Ships the navigation data the tool is distributed with, enabling
//! zero-input usage: `doxnav show af_e --builtin nx_common`.

use crate::error::NavError;
use crate::nav::model::NavIndex;
use crate::nav::reader;

// ============================================================================
// Types
// ============================================================================

/// A navigation index embedded in the binary.
pub struct BuiltinIndex {
    /// Unique identifier (snake_case, e.g. "nx_common").
    pub name: &'static str,

    /// Header file the index was generated from.
    pub header: &'static str,

    /// Short human-readable description.
    pub description: &'static str,

    /// Raw navigation data (embedded at compile time).
    pub js: &'static str,
}

impl BuiltinIndex {
    /// Parses the embedded data into a [`NavIndex`].
    ///
    /// # Errors
    ///
    /// Returns a [`NavError`] if the embedded data is malformed; the test
    /// suite parses every built-in, so this does not happen for shipped
    /// binaries.
    pub fn index(&self) -> Result<NavIndex, NavError> {
        reader::parse_js(self.js)
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Registry of all built-in indexes.
static BUILTIN_INDEXES: &[BuiltinIndex] = &[BuiltinIndex {
    name: "nx_common",
    header: "nx_common.h",
    description: "Common enum types shared by the switch SDK interfaces",
    js: include_str!("../indexes/nx_common.js"),
}];

// ============================================================================
// Public API
// ============================================================================

/// Looks up a built-in index by exact name.
#[must_use]
pub fn find_index(name: &str) -> Option<&'static BuiltinIndex> {
    BUILTIN_INDEXES.iter().find(|b| b.name == name)
}

/// Lists all built-in indexes in registry order.
#[must_use]
pub fn list_indexes() -> &'static [BuiltinIndex] {
    BUILTIN_INDEXES
}

/// Returns all built-in index names in registry order.
#[must_use]
pub fn index_names() -> Vec<&'static str> {
    BUILTIN_INDEXES.iter().map(|b| b.name).collect()
}

/// Suggests a similar built-in name for typo correction.
///
/// Returns the closest match if its Damerau-Levenshtein distance is ≤ 3.
#[must_use]
pub fn suggest_index(input: &str) -> Option<String> {
    BUILTIN_INDEXES
        .iter()
        .map(|b| (b.name, strsim::damerau_levenshtein(input, b.name)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name.to_string())
}

// ============================================================================
// Tests
// ============================================================================
