//! Representation round-trip properties.

use proptest::prelude::*;

use doxnav::nav::model::{Anchor, EnumEntry, EnumMember, NavIndex};
use doxnav::nav::{reader, writer};

const NX_COMMON: &str = include_str!("fixtures/nx_common.js");

#[test]
fn generator_output_round_trips_byte_identically() {
    let index = reader::parse_js(NX_COMMON).unwrap();
    assert_eq!(writer::to_js(&index), NX_COMMON);
}

#[test]
fn generator_output_preserves_declaration_order() {
    let index = reader::parse_js(NX_COMMON).unwrap();

    let af = index.entry("af_e").unwrap();
    assert_eq!(
        af.member_names(),
        vec!["AF_START", "AF_IPV4", "AF_IPV6", "MAX_AF"]
    );

    let prio = index.entry("prio_e").unwrap();
    assert_eq!(
        prio.member_names(),
        vec!["LOW_PRIO", "MED_PRIO", "HIGH_PRIO", "NO_PRIO"]
    );
}

#[test]
fn json_form_round_trips_structure() {
    let index = reader::parse_js(NX_COMMON).unwrap();
    let json = writer::to_json(&index).unwrap();
    let reparsed = reader::parse_json(&json).unwrap();
    assert_eq!(reparsed, index);
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

fn anchor() -> impl Strategy<Value = Anchor> {
    "[a-z_][a-z0-9_]{0,7}\\.html#a[0-9a-f]{16}".prop_map(Anchor::new)
}

fn member() -> impl Strategy<Value = EnumMember> {
    (ident(), anchor()).prop_map(|(name, anchor)| EnumMember { name, anchor })
}

fn entry() -> impl Strategy<Value = EnumEntry> {
    (ident(), anchor(), proptest::collection::vec(member(), 0..6)).prop_map(
        |(name, anchor, members)| EnumEntry {
            name,
            anchor,
            members,
        },
    )
}

fn nav_index() -> impl Strategy<Value = NavIndex> {
    (ident(), proptest::collection::vec(entry(), 0..5))
        .prop_map(|(symbol, entries)| NavIndex { symbol, entries })
}

proptest! {
    #[test]
    fn js_round_trip(index in nav_index()) {
        let rendered = writer::to_js(&index);
        let reparsed = reader::parse_js(&rendered).expect("rendered navdata must parse");
        prop_assert_eq!(reparsed, index);
    }

    #[test]
    fn json_round_trip(index in nav_index()) {
        let rendered = writer::to_json(&index).expect("serialization must succeed");
        let reparsed = reader::parse_json(&rendered).expect("rendered JSON must parse");
        prop_assert_eq!(reparsed, index);
    }

    #[test]
    fn rewriting_is_idempotent(index in nav_index()) {
        let first = writer::to_js(&index);
        let reparsed = reader::parse_js(&first).expect("rendered navdata must parse");
        prop_assert_eq!(writer::to_js(&reparsed), first);
    }
}
