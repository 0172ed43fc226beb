use std::fmt::Display;

/// The current value of a field, as read by the mapper.
pub enum FieldValue<'a> {
    /// A single value in its canonical string form.
    Scalar(String),
    /// An ordered sequence of objects, each mapped on its own.
    Sequence(Vec<&'a dyn Mappable>),
    /// Ordered key/value entries.
    Mapping(Vec<(String, String)>),
}

impl<'a> FieldValue<'a> {
    /// A scalar from anything that displays.
    pub fn scalar(value: impl Display) -> Self {
        FieldValue::Scalar(value.to_string())
    }

    /// A sequence from a slice of mappable objects.
    pub fn sequence<T: Mappable>(items: &'a [T]) -> Self {
        FieldValue::Sequence(items.iter().map(|item| item as &dyn Mappable).collect())
    }

    /// A mapping from key/value pairs, keeping their order.
    pub fn mapping<K: Display, V: Display>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        FieldValue::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}

impl std::fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            FieldValue::Sequence(items) => f
                .debug_tuple("Sequence")
                .field(&items.iter().map(|item| item.type_name()).collect::<Vec<_>>())
                .finish(),
            FieldValue::Mapping(entries) => f.debug_tuple("Mapping").field(entries).finish(),
        }
    }
}

/// An object the [`Mapper`](super::Mapper) can turn into an element.
///
/// The mapper looks up the [`TypeSchema`](super::TypeSchema) registered
/// under [`Mappable::type_name`] and asks the object for the value of each
/// declared field.
///
/// ```rust
/// use xmlbuild::mapping::{FieldValue, Mappable};
///
/// struct Componente {
///     nome: String,
///     peso: u32,
/// }
///
/// impl Mappable for Componente {
///     fn type_name(&self) -> &str {
///         "componente"
///     }
///
///     fn field(&self, name: &str) -> Option<FieldValue<'_>> {
///         match name {
///             "nome" => Some(FieldValue::scalar(&self.nome)),
///             "peso" => Some(FieldValue::scalar(self.peso)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Mappable {
    /// Key of the schema describing this object's type.
    ///
    /// Defaults to the Rust type name, which is also the key used by
    /// [`TypeSchema::of`](super::TypeSchema::of).
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// The current value of a field, or `None` if there is no such field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}
