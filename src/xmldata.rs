use indextree::{Arena, NodeId};

use crate::xmlvalue::{AttributeValue, ElementValue, Value};

pub(crate) type XmlArena = Arena<Value>;

/// An element in the XML tree.
///
/// This is a lightweight handle into [`XmlData`] and can be copied. Two
/// handles are equal when they refer to the same element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element(NodeId);

impl Element {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Element(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// An attribute, owned by at most one element.
///
/// Like [`Element`] this is a handle into [`XmlData`]; equality is
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute(NodeId);

impl Attribute {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Attribute(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// `XmlData` owns all elements and attributes in your program.
///
/// Trees are built, queried and changed through it; [`Element`] and
/// [`Attribute`] are handles into it. A tree is only reachable through
/// `&mut XmlData` for mutation, so concurrent access has to be arranged by
/// whoever owns it.
///
/// The functionality is split over several sections: creation, read-only
/// access, manipulation and serialization.
#[derive(Debug)]
pub struct XmlData {
    pub(crate) arena: XmlArena,
}

impl XmlData {
    /// Create an empty `XmlData`.
    pub fn new() -> Self {
        XmlData {
            arena: XmlArena::new(),
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &XmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut XmlArena {
        &mut self.arena
    }

    #[inline]
    pub(crate) fn value(&self, node_id: NodeId) -> &Value {
        self.arena[node_id].get()
    }

    pub(crate) fn element_value(&self, element: Element) -> &ElementValue {
        match self.value(element.get()) {
            Value::Element(value) => value,
            Value::Attribute(_) => unreachable!("element handle points at an attribute"),
        }
    }

    pub(crate) fn element_value_mut(&mut self, element: Element) -> &mut ElementValue {
        match self.arena[element.get()].get_mut() {
            Value::Element(value) => value,
            Value::Attribute(_) => unreachable!("element handle points at an attribute"),
        }
    }

    pub(crate) fn attribute_value_ref(&self, attribute: Attribute) -> &AttributeValue {
        match self.value(attribute.get()) {
            Value::Attribute(value) => value,
            Value::Element(_) => unreachable!("attribute handle points at an element"),
        }
    }

    pub(crate) fn attribute_value_mut(&mut self, attribute: Attribute) -> &mut AttributeValue {
        match self.arena[attribute.get()].get_mut() {
            Value::Attribute(value) => value,
            Value::Element(_) => unreachable!("attribute handle points at an element"),
        }
    }
}

impl Default for XmlData {
    fn default() -> Self {
        Self::new()
    }
}
