//! Navigation-index data model and its on-disk representations.

pub mod model;
pub mod reader;
pub mod writer;

pub use model::{Anchor, EnumEntry, EnumMember, NavIndex};
