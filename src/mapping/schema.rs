#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::value::Mappable;

/// What a field becomes in the mapped element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldRole {
    /// Not mapped.
    Excluded,
    /// One attribute, or one attribute per entry for mapping values.
    Attribute,
    /// A child element: a text element for scalars, a wrapper element for
    /// sequences and mappings.
    Element,
}

/// Mapping declaration for one field.
///
/// A field without a role is declared but produces no output, just like an
/// excluded one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldSchema {
    /// Field name, as understood by [`Mappable::field`].
    pub name: String,
    /// What the field becomes, if anything.
    #[cfg_attr(feature = "serde", serde(default))]
    pub role: Option<FieldRole>,
    /// Attribute or element name to use instead of the field name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rename: Option<String>,
    /// Key of a registered formatter applied to the field's text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub formatter: Option<String>,
}

impl FieldSchema {
    fn new(name: &str, role: Option<FieldRole>) -> Self {
        FieldSchema {
            name: name.to_string(),
            role,
            rename: None,
            formatter: None,
        }
    }

    /// A field mapped to an attribute.
    pub fn attribute(name: &str) -> Self {
        Self::new(name, Some(FieldRole::Attribute))
    }

    /// A field mapped to a child element.
    pub fn element(name: &str) -> Self {
        Self::new(name, Some(FieldRole::Element))
    }

    /// A field that is explicitly left out.
    pub fn excluded(name: &str) -> Self {
        Self::new(name, Some(FieldRole::Excluded))
    }

    /// A field without a role. It is silently dropped from the output.
    pub fn unmarked(name: &str) -> Self {
        Self::new(name, None)
    }

    /// Use `name` for the attribute or element instead of the field name.
    pub fn rename(mut self, name: &str) -> Self {
        self.rename = Some(name.to_string());
        self
    }

    /// Pass the field's text through the formatter registered under `key`.
    pub fn formatter(mut self, key: &str) -> Self {
        self.formatter = Some(key.to_string());
        self
    }

    /// The attribute or element name the field maps to.
    pub fn output_name(&self) -> &str {
        self.rename.as_deref().unwrap_or(&self.name)
    }
}

/// Marks a type as mappable to an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementMarker {
    /// Element name. Without it the simple type name is used.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
}

/// Mapping declaration for one type.
///
/// ```rust
/// use xmlbuild::mapping::{FieldSchema, TypeSchema};
///
/// let schema = TypeSchema::new("Fuc")
///     .element_named("fuc")
///     .attribute("codigo")
///     .element("nome")
///     .exclude("observacoes")
///     .field(FieldSchema::element("avaliacao"))
///     .adapter("flatten");
/// assert_eq!(schema.element_name(), Some("fuc"));
/// assert_eq!(schema.fields.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeSchema {
    /// Key the schema is registered under; matches
    /// [`Mappable::type_name`].
    pub type_name: String,
    /// Present if the type maps to an element at all.
    #[cfg_attr(feature = "serde", serde(default))]
    pub element: Option<ElementMarker>,
    /// Fields in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: Vec<FieldSchema>,
    /// Key of a registered adapter applied to the built element.
    #[cfg_attr(feature = "serde", serde(default))]
    pub adapter: Option<String>,
}

impl TypeSchema {
    /// An empty schema for the type with this name, without element marker.
    pub fn new(type_name: &str) -> Self {
        TypeSchema {
            type_name: type_name.to_string(),
            element: None,
            fields: Vec::new(),
            adapter: None,
        }
    }

    /// An empty schema keyed by the Rust type name of `T`, which is what
    /// [`Mappable::type_name`] returns unless overridden.
    pub fn of<T: Mappable>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    /// Mark the type as an element named after the type.
    pub fn element_marker(mut self) -> Self {
        self.element = Some(ElementMarker::default());
        self
    }

    /// Mark the type as an element with the given name.
    pub fn element_named(mut self, name: &str) -> Self {
        self.element = Some(ElementMarker {
            name: Some(name.to_string()),
        });
        self
    }

    /// Declare a field.
    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Declare an attribute field.
    pub fn attribute(self, name: &str) -> Self {
        self.field(FieldSchema::attribute(name))
    }

    /// Declare an element field.
    pub fn element(self, name: &str) -> Self {
        self.field(FieldSchema::element(name))
    }

    /// Declare an excluded field.
    pub fn exclude(self, name: &str) -> Self {
        self.field(FieldSchema::excluded(name))
    }

    /// Apply the adapter registered under `key` after building.
    pub fn adapter(mut self, key: &str) -> Self {
        self.adapter = Some(key.to_string());
        self
    }

    /// The element name, if the type has an element marker.
    pub fn element_name(&self) -> Option<&str> {
        let marker = self.element.as_ref()?;
        Some(
            marker
                .name
                .as_deref()
                .unwrap_or_else(|| simple_name(&self.type_name)),
        )
    }
}

/// The last path segment of a type name, without generic arguments.
pub(crate) fn simple_name(type_name: &str) -> &str {
    let without_generics = type_name.split('<').next().unwrap_or(type_name);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}
