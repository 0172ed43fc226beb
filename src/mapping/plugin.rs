use crate::error::Error;
use crate::xmldata::{Element, XmlData};

/// Transforms a field's text before it becomes attribute value or element
/// text.
///
/// Formatters are pure: same input, same output, no side effects. Any
/// `Fn(&str) -> String` is a formatter.
pub trait TextFormatter {
    /// Format `text`.
    fn format(&self, text: &str) -> String;
}

impl<F> TextFormatter for F
where
    F: Fn(&str) -> String,
{
    fn format(&self, text: &str) -> String {
        self(text)
    }
}

/// Restructures an element after the mapper has built it.
///
/// An adapter only works with the built tree: it may move, detach or rename
/// elements, and returns the element that takes the place of the one it
/// was given. Any `Fn(&mut XmlData, Element) -> Result<Element, Error>` is
/// an adapter.
pub trait ElementAdapter {
    /// Adapt `element`, returning its replacement.
    fn adapt(&self, data: &mut XmlData, element: Element) -> Result<Element, Error>;
}

impl<F> ElementAdapter for F
where
    F: Fn(&mut XmlData, Element) -> Result<Element, Error>,
{
    fn adapt(&self, data: &mut XmlData, element: Element) -> Result<Element, Error> {
        self(data, element)
    }
}
