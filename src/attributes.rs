use crate::xmldata::{Attribute, Element, XmlData};
use crate::xmlvalue::{Value, ValueType};

/// Attributes of an element.
///
/// Behaves like a read-only ordered map from name to value, but the data is
/// stored in the tree as attribute nodes, so that each attribute has an
/// owner and can exist unattached.
///
/// Access is linear time. Insertion order is preserved.
#[derive(Debug)]
pub struct Attributes<'a> {
    data: &'a XmlData,
    element: Element,
}

impl<'a> Attributes<'a> {
    pub(crate) fn new(data: &'a XmlData, element: Element) -> Self {
        Attributes { data, element }
    }

    /// The attribute nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = Attribute> + 'a {
        let data = self.data;
        self.element
            .get()
            .children(data.arena())
            .take_while(move |n| data.value(*n).value_type() == ValueType::Attribute)
            .map(Attribute::new)
    }

    /// Get the attribute node with this name.
    pub fn get_node(&self, name: &str) -> Option<Attribute> {
        let data = self.data;
        self.nodes().find(|node| data.attribute_name(*node) == name)
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    /// Returns `true` if the element has no attributes.
    pub fn is_empty(&self) -> bool {
        self.nodes().next().is_none()
    }

    /// Return `true` if an attribute with this name exists.
    pub fn contains_key(&self, name: &str) -> bool {
        self.get_node(name).is_some()
    }

    /// The value of the attribute with this name.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        let node = self.get_node(name)?;
        Some(self.data.attribute_value(node))
    }

    /// An iterator over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let data = self.data;
        self.nodes().map(move |node| match data.value(node.get()) {
            Value::Attribute(attribute) => (attribute.name.as_str(), attribute.value.as_str()),
            Value::Element(_) => unreachable!(),
        })
    }

    /// An iterator over the names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().map(|(name, _)| name)
    }

    /// An iterator over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().map(|(_, value)| value)
    }

    /// Copies the attributes into a new `Vec<(String, String)>`.
    pub fn to_vec(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }
}
