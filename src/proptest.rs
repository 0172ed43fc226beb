//! Proptest support
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module lets you generate arbitrary, valid
//! element trees.
//!
//! This can be enabled by adding the `proptest` feature to your
//! `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xmlbuild = { version = "0.1", features = ["proptest"] }
//! ```

use ahash::HashSet;
use proptest::prelude::*;

use crate::fixed::Element;

const ELEMENT_NAMES: &[&str] = &["plano", "curso", "fuc", "nome", "ects", "avaliacao"];
const ATTRIBUTE_NAMES: &[&str] = &["codigo", "nome", "peso"];
const TEXT: &str = "[a-zA-Z0-9 <>&\"'çã]{0,12}";
const VALUE: &str = "[a-zA-Z0-9<>&\"'%çã][a-zA-Z0-9 <>&\"'%çã]{0,8}";

fn arb_attributes() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (prop::sample::select(ATTRIBUTE_NAMES), VALUE),
        0..4,
    )
    .prop_map(|attributes| {
        let mut seen = HashSet::default();
        attributes
            .into_iter()
            .filter(|(name, _)| seen.insert(*name))
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    })
}

/// Generate an arbitrary element tree.
///
/// Names follow the name rule, attribute names are unique per element,
/// attribute values are not blank, and only leaves carry text. The
/// result can be turned into arena elements with
/// [`Element::build`](crate::fixed::Element::build), which never fails for
/// generated trees.
pub fn arb_element() -> impl Strategy<Value = Element> {
    let leaf = (prop::sample::select(ELEMENT_NAMES), TEXT, arb_attributes()).prop_map(
        |(name, text, attributes)| Element {
            name: name.to_string(),
            text,
            attributes,
            children: vec![],
        },
    );

    leaf.prop_recursive(
        6,  // levels deep
        64, // maximum size of 64 nodes
        6,  // up to 6 items per collection
        |inner| {
            (
                prop::sample::select(ELEMENT_NAMES),
                prop::collection::vec(inner, 0..6),
                arb_attributes(),
            )
                .prop_map(|(name, children, attributes)| Element {
                    name: name.to_string(),
                    text: String::new(),
                    attributes,
                    children,
                })
        },
    )
}
