//! Build, query and render XML trees, and derive them from objects.
//!
//! All elements and attributes live in an [`XmlData`]; [`Element`] and
//! [`Attribute`] are lightweight handles into it. A [`Document`] holds at
//! most one root element and offers whole-tree operations by name. The
//! [`mapping`] module turns objects into element trees using declarative
//! schemas, and [`fixed`] lets you write trees down as plain values.
//!
//! ```rust
//! use xmlbuild::{Document, XmlData};
//!
//! let mut data = XmlData::new();
//! let mut doc = Document::new();
//! let plano = data.new_element("plano")?;
//! doc.set_root_element(&mut data, plano);
//! let fuc = data.append_element(plano, "fuc", "", &[])?;
//! data.add_attribute(fuc, "codigo", "M4310")?;
//!
//! doc.rename_attributes_by_name(&mut data, "fuc", "codigo", "code")?;
//! assert_eq!(
//!     doc.to_text(&data, false),
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<plano>\n\t<fuc code=\"M4310\"/>\n</plano>\n"
//! );
//! # Ok::<(), xmlbuild::Error>(())
//! ```
#![forbid(unsafe_code)]

mod access;
mod attributes;
mod creation;
mod document;
mod entity;
mod error;
pub mod fixed;
mod manipulation;
pub mod mapping;
mod name;
mod output;
#[cfg(feature = "proptest")]
pub mod proptest;
mod serialize;
mod xmldata;
mod xmlvalue;

pub use attributes::Attributes;
pub use document::{Document, GENERATED_FILE_NAME};
pub use error::Error;
pub use name::is_valid_name;
pub use output::TextOptions;
pub use xmldata::{Attribute, Element, XmlData};
