/// The type of a node in the arena.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) enum ValueType {
    /// Element; it has a name, text, attributes and children.
    Element,
    /// Attribute; it has a name and a value and belongs to at most one
    /// element.
    Attribute,
}

/// A value stored in the arena.
///
/// Attribute nodes live in the arena as children of their owning element,
/// ahead of its element children, so that the owner is simply the arena
/// parent. They are never reported as children.
#[derive(Debug, Clone)]
pub(crate) enum Value {
    Element(ElementValue),
    Attribute(AttributeValue),
}

impl Value {
    pub(crate) fn value_type(&self) -> ValueType {
        match self {
            Value::Element(_) => ValueType::Element,
            Value::Attribute(_) => ValueType::Attribute,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ElementValue {
    pub(crate) name: String,
    pub(crate) text: String,
}

impl ElementValue {
    pub(crate) fn new(name: String, text: String) -> Self {
        ElementValue { name, text }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AttributeValue {
    pub(crate) name: String,
    pub(crate) value: String,
}

impl AttributeValue {
    pub(crate) fn new(name: String, value: String) -> Self {
        AttributeValue { name, value }
    }
}
