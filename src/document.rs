use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::name::{validate_name, validate_value};
use crate::output::TextOptions;
use crate::serialize::Painter;
use crate::xmldata::{Element, XmlData};

/// File name used by [`Document::to_file`] when there is no root element.
pub const GENERATED_FILE_NAME: &str = "generated_xml.xml";

/// An XML document: at most one root element.
///
/// The elements themselves live in an [`XmlData`], which every operation
/// takes as an argument. All name arguments are checked against the name
/// rule before anything else happens. Operations on a document without a
/// root do nothing.
///
/// The document only keeps a handle to its root. If the root is later
/// appended under another element, the document still works from the root
/// down: it renders the root at depth zero and computes paths starting at
/// the root, ignoring whatever is above it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    root: Option<Element>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Document { root: None }
    }

    /// The root element, if any.
    pub fn root_element(&self) -> Option<Element> {
        self.root
    }

    /// Make `element` the root, replacing the previous root.
    ///
    /// The element is detached from its parent if it has one. The previous
    /// root stays in `data` as an unattached tree.
    pub fn set_root_element(&mut self, data: &mut XmlData, element: Element) {
        data.detach(element);
        if let Some(previous) = self.root.replace(element) {
            tracing::debug!(previous = data.name(previous), "replacing root element");
        }
    }

    /// Clear the root element, returning it.
    pub fn remove_root_element(&mut self) -> Option<Element> {
        self.root.take()
    }

    /// Render the document with the XML prolog.
    ///
    /// ```rust
    /// use xmlbuild::{Document, XmlData};
    ///
    /// let mut data = XmlData::new();
    /// let mut doc = Document::new();
    /// let plano = data.new_element("plano")?;
    /// doc.set_root_element(&mut data, plano);
    /// data.append_element(plano, "curso", "MEI", &[])?;
    /// assert_eq!(
    ///     doc.to_text(&data, false),
    ///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<plano>\n\t<curso>MEI</curso>\n</plano>\n"
    /// );
    /// # Ok::<(), xmlbuild::Error>(())
    /// ```
    pub fn to_text(&self, data: &XmlData, color: bool) -> String {
        let mut painter = Painter::new(color);
        painter.punctuation("<");
        painter.name("?xml version");
        painter.punctuation("=\"1.0\"");
        painter.name(" encoding");
        painter.punctuation("=\"UTF-8\"");
        painter.name("?>");
        painter.plain("\n");
        if let Some(root) = self.root {
            let options = TextOptions {
                color,
                ..TextOptions::plain()
            };
            data.render(root, 0, &options, &mut painter);
        }
        painter.finish()
    }

    /// Visit all elements in document order. See [`XmlData::accept`].
    pub fn accept<F>(&self, data: &XmlData, visitor: F)
    where
        F: FnMut(Element) -> bool,
    {
        if let Some(root) = self.root {
            data.accept(root, visitor);
        }
    }

    /// Visit all elements in document order, allowing changes. See
    /// [`XmlData::accept_mut`].
    pub fn accept_mut<F>(&self, data: &mut XmlData, visitor: F) -> Result<(), Error>
    where
        F: FnMut(&mut XmlData, Element) -> Result<bool, Error>,
    {
        match self.root {
            Some(root) => data.accept_mut(root, visitor),
            None => Ok(()),
        }
    }

    /// Rename every element called `old_name` to `new_name`.
    pub fn rename_elements_by_name(
        &self,
        data: &mut XmlData,
        old_name: &str,
        new_name: &str,
    ) -> Result<(), Error> {
        validate_name(old_name)?;
        validate_name(new_name)?;
        self.accept_mut(data, |data, element| {
            if data.name(element) == old_name {
                data.set_name(element, new_name)?;
            }
            Ok(true)
        })
    }

    /// Add an attribute to every element called `element_name`.
    ///
    /// This is not transactional. Elements are visited in document order;
    /// if one of them already has an attribute called `attribute_name` the
    /// operation stops with [`Error::DuplicateAttribute`], and the elements
    /// visited before it keep the attribute that was added to them.
    ///
    /// ```rust
    /// use xmlbuild::{Document, Error, XmlData};
    ///
    /// let mut data = XmlData::new();
    /// let mut doc = Document::new();
    /// let plano = data.new_element("plano")?;
    /// doc.set_root_element(&mut data, plano);
    /// let first = data.append_element(plano, "fuc", "", &[])?;
    /// let second = data.append_element(plano, "fuc", "", &[])?;
    /// data.add_attribute(second, "codigo", "B")?;
    ///
    /// let result = doc.add_attribute_to_element(&mut data, "fuc", "codigo", "A");
    /// assert!(matches!(result, Err(Error::DuplicateAttribute(_))));
    /// assert_eq!(data.get_attribute(first, "codigo"), Some("A"));
    /// # Ok::<(), xmlbuild::Error>(())
    /// ```
    pub fn add_attribute_to_element(
        &self,
        data: &mut XmlData,
        element_name: &str,
        attribute_name: &str,
        attribute_value: &str,
    ) -> Result<(), Error> {
        validate_name(element_name)?;
        validate_name(attribute_name)?;
        validate_value(attribute_name, attribute_value)?;
        self.accept_mut(data, |data, element| {
            if data.name(element) == element_name {
                data.add_attribute(element, attribute_name, attribute_value)?;
            }
            Ok(true)
        })
    }

    /// Rename the attributes called `old_name` to `new_name` on every element
    /// called `element_name`.
    ///
    /// Like [`Document::add_attribute_to_element`] this stops at the first
    /// element that already has an attribute called `new_name`.
    pub fn rename_attributes_by_name(
        &self,
        data: &mut XmlData,
        element_name: &str,
        old_name: &str,
        new_name: &str,
    ) -> Result<(), Error> {
        validate_name(element_name)?;
        validate_name(old_name)?;
        validate_name(new_name)?;
        self.accept_mut(data, |data, element| {
            if data.name(element) == element_name {
                let matching = data
                    .attributes(element)
                    .nodes()
                    .filter(|attribute| data.attribute_name(*attribute) == old_name)
                    .collect::<Vec<_>>();
                for attribute in matching {
                    data.set_attribute_name(attribute, new_name)?;
                }
            }
            Ok(true)
        })
    }

    /// Remove every element called `name`.
    ///
    /// If the root element has this name, the document loses its root.
    /// Otherwise every descendant with this name is detached from its parent.
    /// Removed elements are released from `data` together with their
    /// descendants, so handles to them must not be used afterwards.
    ///
    /// ```rust
    /// use xmlbuild::{Document, XmlData};
    ///
    /// let mut data = XmlData::new();
    /// let mut doc = Document::new();
    /// let plano = data.new_element("plano")?;
    /// doc.set_root_element(&mut data, plano);
    /// let fuc = data.append_element(plano, "fuc", "", &[])?;
    /// data.append_element(fuc, "nome", "PA", &[])?;
    ///
    /// doc.remove_element_by_name(&mut data, "fuc")?;
    /// assert!(!data.has_children(plano));
    /// assert_eq!(data.node_count(), 1);
    /// # Ok::<(), xmlbuild::Error>(())
    /// ```
    pub fn remove_element_by_name(&mut self, data: &mut XmlData, name: &str) -> Result<(), Error> {
        validate_name(name)?;
        if let Some(root) = self.root {
            if data.name(root) == name {
                self.remove_root_element();
                data.free(root);
                return Ok(());
            }
        }
        self.accept_mut(data, |data, element| {
            let matching = data
                .children(element)
                .filter(|child| data.name(*child) == name)
                .collect::<Vec<_>>();
            for child in matching {
                data.free(child);
            }
            Ok(true)
        })
    }

    /// Remove the attribute called `attribute_name` from every element
    /// called `element_name`. Removed attributes are released from `data`.
    pub fn remove_attribute_by_name(
        &self,
        data: &mut XmlData,
        element_name: &str,
        attribute_name: &str,
    ) -> Result<(), Error> {
        validate_name(element_name)?;
        validate_name(attribute_name)?;
        self.accept_mut(data, |data, element| {
            if data.name(element) == element_name {
                let matching = data
                    .attributes(element)
                    .nodes()
                    .filter(|attribute| data.attribute_name(*attribute) == attribute_name)
                    .collect::<Vec<_>>();
                for attribute in matching {
                    data.free_attribute(attribute);
                }
            }
            Ok(true)
        })
    }

    /// All elements whose path ends with `suffix`, in document order.
    ///
    /// Paths start at the root element. This compares strings, not path
    /// segments: `"c/fuc"` matches an element with path `"plano/abc/fuc"`.
    pub fn get_elements_by_path(&self, data: &XmlData, suffix: &str) -> Vec<Element> {
        let Some(root) = self.root else {
            return Vec::new();
        };
        let mut found = Vec::new();
        data.accept(root, |element| {
            if data.path_from(root, element).ends_with(suffix) {
                found.push(element);
            }
            true
        });
        found
    }

    /// The name of the file [`Document::to_file`] writes.
    pub fn file_name(&self, data: &XmlData) -> String {
        match self.root {
            Some(root) => format!("{}_xml.xml", data.name(root)),
            None => GENERATED_FILE_NAME.to_string(),
        }
    }

    /// Write the document, without color, to a file in `directory`.
    ///
    /// The file is called `<root name>_xml.xml`, or `generated_xml.xml` for
    /// a document without root. Fails with [`Error::DirectoryNotFound`] if
    /// `directory` does not exist or is not a directory. Returns the path of
    /// the written file.
    pub fn to_file(&self, data: &XmlData, directory: impl AsRef<Path>) -> Result<PathBuf, Error> {
        let directory = directory.as_ref();
        if !directory.is_dir() {
            return Err(Error::DirectoryNotFound(directory.to_path_buf()));
        }
        let path = directory.join(self.file_name(data));
        fs::write(&path, self.to_text(data, false))?;
        tracing::debug!(path = %path.display(), "wrote document");
        Ok(path)
    }
}
