//! Derive element trees from objects using declarative schemas.
//!
//! Each mappable type gets a [`TypeSchema`] saying what element it becomes
//! and, per field, whether the field turns into an attribute, a child
//! element, or nothing. Formatters and adapters are referenced from schemas
//! by key and registered on the [`Mapper`] alongside the schemas.
//!
//! ```rust
//! use xmlbuild::mapping::{FieldSchema, FieldValue, Mappable, Mapper, TypeSchema};
//! use xmlbuild::{TextOptions, XmlData};
//!
//! struct Componente {
//!     nome: &'static str,
//!     peso: u32,
//! }
//!
//! impl Mappable for Componente {
//!     fn field(&self, name: &str) -> Option<FieldValue<'_>> {
//!         match name {
//!             "nome" => Some(FieldValue::scalar(self.nome)),
//!             "peso" => Some(FieldValue::scalar(self.peso)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut mapper = Mapper::new();
//! mapper
//!     .register(
//!         TypeSchema::of::<Componente>()
//!             .element_named("componente")
//!             .attribute("nome")
//!             .field(FieldSchema::attribute("peso").formatter("percent")),
//!     )
//!     .register_formatter("percent", |text: &str| format!("{text}%"));
//!
//! let mut data = XmlData::new();
//! let element = mapper.map(&mut data, &Componente { nome: "Quizzes", peso: 20 })?;
//! assert_eq!(
//!     data.to_text(element, &TextOptions::compact()),
//!     r#"<componente nome="Quizzes" peso="20%"/>"#
//! );
//! # Ok::<(), xmlbuild::Error>(())
//! ```

mod plugin;
mod schema;
mod value;

use ahash::HashMap;

use crate::document::Document;
use crate::error::Error;
use crate::xmldata::{Element, XmlData};

pub use plugin::{ElementAdapter, TextFormatter};
pub use schema::{ElementMarker, FieldRole, FieldSchema, TypeSchema};
pub use value::{FieldValue, Mappable};

type BoxedFormatter = Box<dyn TextFormatter + Send + Sync>;
type BoxedAdapter = Box<dyn ElementAdapter + Send + Sync>;

/// Registry of type schemas, formatters and adapters; maps objects to
/// elements.
///
/// Registries are filled once and then only read while mapping.
#[derive(Default)]
pub struct Mapper {
    schemas: HashMap<String, TypeSchema>,
    formatters: HashMap<String, BoxedFormatter>,
    adapters: HashMap<String, BoxedAdapter>,
}

impl Mapper {
    /// Create a mapper with empty registries.
    pub fn new() -> Self {
        Mapper::default()
    }

    /// Register a schema under its type name, replacing any earlier one.
    pub fn register(&mut self, schema: TypeSchema) -> &mut Self {
        self.schemas.insert(schema.type_name.clone(), schema);
        self
    }

    /// Register a formatter under `key`.
    pub fn register_formatter(
        &mut self,
        key: &str,
        formatter: impl TextFormatter + Send + Sync + 'static,
    ) -> &mut Self {
        self.formatters.insert(key.to_string(), Box::new(formatter));
        self
    }

    /// Register an adapter under `key`.
    pub fn register_adapter(
        &mut self,
        key: &str,
        adapter: impl ElementAdapter + Send + Sync + 'static,
    ) -> &mut Self {
        self.adapters.insert(key.to_string(), Box::new(adapter));
        self
    }

    /// The schema registered for a type name.
    pub fn schema(&self, type_name: &str) -> Option<&TypeSchema> {
        self.schemas.get(type_name)
    }

    /// Build the element tree for `instance`.
    ///
    /// The element is named after the schema's element marker. Fields are
    /// handled in declaration order:
    ///
    /// - excluded and unmarked fields produce nothing;
    /// - attribute fields add one attribute, or one per entry for mapping
    ///   values;
    /// - element fields add a text element for scalars, and a wrapper
    ///   element for sequences (holding each item, mapped recursively) and
    ///   for mappings (holding a text element per entry).
    ///
    /// Finally the schema's adapter, if any, replaces the built element.
    ///
    /// Fails with [`Error::MissingMapping`] if the object's type, or the
    /// type of any object in a sequence, has no schema with an element
    /// marker, and with [`Error::MissingField`] if the object does not
    /// provide a declared field. Element name rules apply as usual. On
    /// failure the partly built tree is released from `data`. The object
    /// graph must be acyclic.
    pub fn map(&self, data: &mut XmlData, instance: &dyn Mappable) -> Result<Element, Error> {
        let type_name = instance.type_name();
        let schema = self
            .schemas
            .get(type_name)
            .ok_or_else(|| Error::MissingMapping(type_name.to_string()))?;
        let name = schema
            .element_name()
            .ok_or_else(|| Error::MissingMapping(type_name.to_string()))?;
        tracing::trace!(type_name, element = name, "mapping object");

        let element = data.new_element(name)?;
        let result = self
            .map_fields(data, element, schema, instance)
            .and_then(|()| self.adapt(data, element, schema, type_name));
        if result.is_err() {
            // nothing refers to the partly built tree
            data.free(element);
        }
        result
    }

    /// Map `instance` and make the result the root of a new document.
    pub fn map_document(&self, data: &mut XmlData, instance: &dyn Mappable) -> Result<Document, Error> {
        let root = self.map(data, instance)?;
        let mut document = Document::new();
        document.set_root_element(data, root);
        Ok(document)
    }

    fn map_fields(
        &self,
        data: &mut XmlData,
        element: Element,
        schema: &TypeSchema,
        instance: &dyn Mappable,
    ) -> Result<(), Error> {
        let type_name = instance.type_name();
        for field in &schema.fields {
            let role = match field.role {
                Some(role @ (FieldRole::Attribute | FieldRole::Element)) => role,
                Some(FieldRole::Excluded) | None => continue,
            };
            let value = instance
                .field(&field.name)
                .ok_or_else(|| Error::MissingField {
                    type_name: type_name.to_string(),
                    field: field.name.clone(),
                })?;
            if role == FieldRole::Attribute {
                self.map_attribute(data, element, field, value, type_name)?;
            } else {
                self.map_element(data, element, field, value)?;
            }
        }
        Ok(())
    }

    fn adapt(
        &self,
        data: &mut XmlData,
        element: Element,
        schema: &TypeSchema,
        type_name: &str,
    ) -> Result<Element, Error> {
        match &schema.adapter {
            Some(key) => {
                let adapter = self
                    .adapters
                    .get(key)
                    .ok_or_else(|| Error::UnknownAdapter(key.clone()))?;
                tracing::trace!(type_name, adapter = key.as_str(), "adapting element");
                adapter.adapt(data, element)
            }
            None => Ok(element),
        }
    }

    fn map_attribute(
        &self,
        data: &mut XmlData,
        element: Element,
        field: &FieldSchema,
        value: FieldValue<'_>,
        type_name: &str,
    ) -> Result<(), Error> {
        match value {
            FieldValue::Scalar(text) => {
                let text = self.format(field, text)?;
                data.add_attribute(element, field.output_name(), &text)?;
            }
            FieldValue::Mapping(entries) => {
                for (key, text) in entries {
                    let text = self.format(field, text)?;
                    data.add_attribute(element, &key, &text)?;
                }
            }
            FieldValue::Sequence(_) => {
                return Err(Error::UnsupportedField {
                    type_name: type_name.to_string(),
                    field: field.name.clone(),
                })
            }
        }
        Ok(())
    }

    fn map_element(
        &self,
        data: &mut XmlData,
        element: Element,
        field: &FieldSchema,
        value: FieldValue<'_>,
    ) -> Result<(), Error> {
        match value {
            FieldValue::Scalar(text) => {
                let text = self.format(field, text)?;
                data.append_element(element, field.output_name(), &text, &[])?;
            }
            FieldValue::Sequence(items) => {
                let wrapper = data.append_element(element, field.output_name(), "", &[])?;
                for item in items {
                    let child = self.map(data, item)?;
                    if let Err(e) = data.append(wrapper, child) {
                        data.free(child);
                        return Err(e);
                    }
                }
            }
            FieldValue::Mapping(entries) => {
                let wrapper = data.append_element(element, field.output_name(), "", &[])?;
                for (key, text) in entries {
                    let text = self.format(field, text)?;
                    data.append_element(wrapper, &key, &text, &[])?;
                }
            }
        }
        Ok(())
    }

    fn format(&self, field: &FieldSchema, text: String) -> Result<String, Error> {
        match &field.formatter {
            Some(key) => {
                let formatter = self
                    .formatters
                    .get(key)
                    .ok_or_else(|| Error::UnknownFormatter(key.clone()))?;
                Ok(formatter.format(&text))
            }
            None => Ok(text),
        }
    }
}
