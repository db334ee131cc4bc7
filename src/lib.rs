//! doxnav — navigation-index tooling for generated documentation sites
//!
//! Models the per-header navigation data file a documentation generator
//! emits to drive a site's sidebar: enum types and their member constants
//! in declaration order, each paired with a hyperlink anchor. Provides
//! readers and writers for the on-disk representations, read-only lookup,
//! invariant validation, and a catalog of indexes embedded at compile time.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod nav;
pub mod observability;
pub mod validate;
