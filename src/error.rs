use std::path::PathBuf;

/// Errors raised by tree manipulation, mapping and output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A name does not consist of lowercase ASCII letters only.
    #[error("name must contain only lowercase letters: {0:?}")]
    InvalidName(String),
    /// An attribute value is empty or whitespace only. Holds the attribute
    /// name.
    #[error("value of attribute {0:?} can't be blank")]
    EmptyValue(String),
    /// The element already has an attribute with this name.
    #[error("attribute {0:?} already exists in this element")]
    DuplicateAttribute(String),
    /// The element carries text and cannot get children. Holds the element
    /// name.
    #[error("element {0:?} has text and can't have children")]
    LeafHasText(String),
    /// The element has children and cannot get text. Holds the element name.
    #[error("element {0:?} has children and can't have text")]
    HasChildren(String),
    /// Illegal structural operation, such as appending an element under
    /// itself or one of its descendants.
    #[error("invalid tree operation: {0}")]
    Tree(#[from] indextree::NodeError),
    /// The type has no schema, or its schema has no element marker.
    #[error("{0} has no element mapping")]
    MissingMapping(String),
    /// The schema declares a field the object does not provide.
    #[error("{type_name} does not provide field {field:?}")]
    MissingField {
        /// Type being mapped.
        type_name: String,
        /// Field named in the schema.
        field: String,
    },
    /// The field's value cannot be mapped in the declared role, such as a
    /// sequence declared as an attribute.
    #[error("field {field:?} of {type_name} can't be mapped to an attribute")]
    UnsupportedField {
        /// Type being mapped.
        type_name: String,
        /// Field named in the schema.
        field: String,
    },
    /// No formatter registered under this key.
    #[error("unknown formatter {0:?}")]
    UnknownFormatter(String),
    /// No adapter registered under this key.
    #[error("unknown adapter {0:?}")]
    UnknownAdapter(String),
    /// The output directory does not exist or is not a directory.
    #[error("the path {0:?} doesn't exist")]
    DirectoryNotFound(PathBuf),
    /// IO error while writing output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
