//! A fixed representation of a tree of elements.
//!
//! Trees in [`XmlData`] are mutable and live in the arena. It is often
//! handier to write a tree down as a plain value first and turn it into
//! arena elements afterwards with [`Element::build`]. The `/` operator
//! appends children, which makes nested trees read top-down:
//!
//! ```rust
//! use xmlbuild::fixed::Element;
//! use xmlbuild::{TextOptions, XmlData};
//!
//! let plano = Element::new("plano")
//!     / Element::with_text("curso", "MEI")
//!     / (Element::new("fuc").attribute("codigo", "M4310")
//!         / vec![
//!             Element::with_text("nome", "PA"),
//!             Element::with_text("ects", "6.0"),
//!         ]);
//!
//! let mut data = XmlData::new();
//! let node = plano.build(&mut data)?;
//! assert_eq!(
//!     data.to_text(node, &TextOptions::compact()),
//!     r#"<plano><curso>MEI</curso><fuc codigo="M4310"><nome>PA</nome><ects>6.0</ects></fuc></plano>"#
//! );
//! # Ok::<(), xmlbuild::Error>(())
//! ```
//!
//! Nothing is checked until [`Element::build`], which goes through the
//! regular [`XmlData`] operations and fails the same way they do.

use std::ops::Div;

use crate::error::Error;
use crate::xmldata::XmlData;

/// A fixed representation of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Element {
    /// Name of element
    pub name: String,
    /// Text; empty for none
    pub text: String,
    /// Attributes as `(name, value)`, in order
    pub attributes: Vec<(String, String)>,
    /// Children
    pub children: Vec<Element>,
}

impl Element {
    /// An element without text, attributes or children.
    pub fn new(name: &str) -> Self {
        Element {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// An element with text.
    pub fn with_text(name: &str, text: &str) -> Self {
        Element {
            name: name.to_string(),
            text: text.to_string(),
            ..Default::default()
        }
    }

    /// Add an attribute.
    pub fn attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    /// Turn the fixed element into an unattached element in `data`.
    pub fn build(&self, data: &mut XmlData) -> Result<crate::Element, Error> {
        let element = data.new_text_element(&self.name, &self.text)?;
        for (name, value) in &self.attributes {
            data.add_attribute(element, name, value)?;
        }
        for child in &self.children {
            let child = child.build(data)?;
            data.append(element, child)?;
        }
        Ok(element)
    }

    /// Capture an element of `data` and its descendants.
    pub fn from_node(data: &XmlData, element: crate::Element) -> Self {
        Element {
            name: data.name(element).to_string(),
            text: data.text(element).to_string(),
            attributes: data.attributes(element).to_vec(),
            children: data
                .children(element)
                .map(|child| Element::from_node(data, child))
                .collect(),
        }
    }
}

impl Div<Element> for Element {
    type Output = Element;

    fn div(mut self, child: Element) -> Element {
        self.children.push(child);
        self
    }
}

impl Div<Vec<Element>> for Element {
    type Output = Element;

    fn div(mut self, children: Vec<Element>) -> Element {
        self.children.extend(children);
        self
    }
}

impl Div<&str> for Element {
    type Output = Element;

    fn div(mut self, name: &str) -> Element {
        self.children.push(Element::new(name));
        self
    }
}
