//! Typed model of a per-header navigation index.
//!
//! A navigation index is the ordered table a documentation generator emits
//! for one header: enum types in declaration order, each with its member
//! constants in declaration order, every name paired with a hyperlink
//! anchor. The structure is built once and only read afterwards; there are
//! no update, insert, or delete operations.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Anchor
// ============================================================================

/// An opaque hyperlink anchor into the generated documentation pages.
///
/// Anchors conventionally look like `page.html#fragment`, but the model
/// imposes no shape on construction; validation reports deviations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Anchor(String);

impl Anchor {
    /// Wraps a raw anchor token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the page part (everything before the first `#`), if any.
    #[must_use]
    pub fn page(&self) -> Option<&str> {
        self.0.split_once('#').map(|(page, _)| page)
    }

    /// Returns the fragment part (everything after the first `#`), if any.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.0.split_once('#').map(|(_, fragment)| fragment)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Entries
// ============================================================================

/// One member constant of an enum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    /// Member identifier as declared.
    pub name: String,

    /// Link target for the member's documentation fragment.
    pub anchor: Anchor,
}

/// One enum type with its member constants in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumEntry {
    /// Enum type identifier as declared.
    pub name: String,

    /// Link target for the type's documentation fragment.
    pub anchor: Anchor,

    /// Member constants in declaration order.
    pub members: Vec<EnumMember>,
}

impl EnumEntry {
    /// Looks up a member by exact name.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Returns member names in declaration order.
    #[must_use]
    pub fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.name.as_str()).collect()
    }
}

// ============================================================================
// Index
// ============================================================================

/// A complete navigation index for one header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavIndex {
    /// The variable name binding the navigation array, derived by the
    /// generator from the header file name (e.g. `nx__common_8h`).
    pub symbol: String,

    /// Enum types in declaration order.
    pub entries: Vec<EnumEntry>,
}

impl NavIndex {
    /// Looks up an enum type by exact name.
    ///
    /// Absence is an empty result, not an error.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&EnumEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Returns enum type names in declaration order.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Total member count across all enum types.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.entries.iter().map(|e| e.members.len()).sum()
    }

    /// Suggests a close enum-type name for typo correction.
    ///
    /// Returns the closest name if its Damerau-Levenshtein distance is ≤ 3.
    #[must_use]
    pub fn suggest(&self, input: &str) -> Option<&str> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), strsim::damerau_levenshtein(input, &e.name)))
            .filter(|(_, dist)| *dist <= 3)
            .min_by_key(|(_, dist)| *dist)
            .map(|(name, _)| name)
    }
}

// ============================================================================
// Tests
// ============================================================================
