use crate::error::Error;
use crate::name::{is_blank, validate_name, validate_value};
use crate::xmldata::{Attribute, Element, XmlData};

/// Manipulation of the tree structure.
///
/// This maintains the element invariants:
/// - Element and attribute names consist of lowercase letters only.
/// - An element with text cannot get children, and an element with
///   children cannot get text.
/// - Attribute names are unique within an element.
/// - An element has at most one parent. Adding an element that is
///   already attached elsewhere moves it.
///
/// Removing an element or attribute detaches it; the handle stays valid and
/// can be attached again. Use [`XmlData::free`] and
/// [`XmlData::free_attribute`] to release nodes that are no longer needed.
impl XmlData {
    /// Append a child to the end of the children of the given parent.
    ///
    /// If `child` already has a parent it is moved. Fails with
    /// [`Error::LeafHasText`] if `parent` carries text, and with
    /// [`Error::Tree`] if `child` is `parent` or one of its ancestors.
    pub fn append(&mut self, parent: Element, child: Element) -> Result<(), Error> {
        self.check_can_have_children(parent)?;
        parent.get().checked_append(child.get(), self.arena_mut())?;
        Ok(())
    }

    /// Append several children in order.
    ///
    /// Stops at the first failure; children appended before it stay.
    pub fn append_all(&mut self, parent: Element, children: &[Element]) -> Result<(), Error> {
        for child in children {
            self.append(parent, *child)?;
        }
        Ok(())
    }

    /// Create an element and append it to the given parent.
    ///
    /// See [`XmlData::create_element`] for the failure modes.
    pub fn append_element(
        &mut self,
        parent: Element,
        name: &str,
        text: &str,
        attributes: &[Attribute],
    ) -> Result<Element, Error> {
        self.create_element(Some(parent), name, text, attributes)
    }

    /// Detach an element (and its descendants) from its parent.
    ///
    /// It becomes the top of a tree of its own.
    pub fn detach(&mut self, element: Element) {
        element.get().detach(self.arena_mut());
    }

    /// Detach an element and release it, its attributes and its descendants
    /// from the arena.
    ///
    /// Handles to released nodes must not be used afterwards; accessing them
    /// panics. Releasing an element twice does nothing.
    ///
    /// ```rust
    /// let mut data = xmlbuild::XmlData::new();
    /// let plano = data.new_element("plano")?;
    /// let fuc = data.append_element(plano, "fuc", "", &[])?;
    /// data.add_attribute(fuc, "codigo", "M4310")?;
    /// assert_eq!(data.node_count(), 3);
    ///
    /// data.free(fuc);
    /// assert_eq!(data.node_count(), 1);
    /// assert!(!data.has_children(plano));
    /// # Ok::<(), xmlbuild::Error>(())
    /// ```
    pub fn free(&mut self, element: Element) {
        element.get().remove_subtree(self.arena_mut());
    }

    /// Detach an attribute from its owner and release it from the arena.
    ///
    /// Like [`XmlData::free`], the handle must not be used afterwards.
    pub fn free_attribute(&mut self, attribute: Attribute) {
        attribute.get().remove_subtree(self.arena_mut());
    }

    /// Remove a child from a parent. Does nothing if `child` is not a child
    /// of `parent`.
    pub fn remove_child(&mut self, parent: Element, child: Element) {
        if self.parent(child) == Some(parent) {
            self.detach(child);
        }
    }

    /// Remove every child with the given name whose attributes include all
    /// of the `(name, value)` pairs in `attribute_filter`.
    ///
    /// ```rust
    /// use xmlbuild::{TextOptions, XmlData};
    ///
    /// let mut data = XmlData::new();
    /// let plano = data.new_element("plano")?;
    /// let a = data.append_element(plano, "fuc", "", &[])?;
    /// data.add_attribute(a, "codigo", "A")?;
    /// let b = data.append_element(plano, "fuc", "", &[])?;
    /// data.add_attribute(b, "codigo", "B")?;
    ///
    /// data.remove_children_by_name(plano, "fuc", &[("codigo", "B")])?;
    /// assert_eq!(data.children(plano).collect::<Vec<_>>(), vec![a]);
    /// # Ok::<(), xmlbuild::Error>(())
    /// ```
    pub fn remove_children_by_name(
        &mut self,
        parent: Element,
        name: &str,
        attribute_filter: &[(&str, &str)],
    ) -> Result<(), Error> {
        validate_name(name)?;
        let matching = self
            .children(parent)
            .filter(|child| self.name(*child) == name)
            .filter(|child| {
                let attributes = self.attributes(*child);
                attribute_filter.iter().all(|(filter_name, filter_value)| {
                    attributes
                        .iter()
                        .any(|(key, value)| key == *filter_name && value == *filter_value)
                })
            })
            .collect::<Vec<_>>();
        for child in matching {
            self.detach(child);
        }
        Ok(())
    }

    /// Rename an element.
    pub fn set_name(&mut self, element: Element, name: &str) -> Result<(), Error> {
        validate_name(name)?;
        self.element_value_mut(element).name = name.to_string();
        Ok(())
    }

    /// Set the text of an element.
    ///
    /// Fails with [`Error::HasChildren`] if the text is not blank and the
    /// element has children.
    pub fn set_text(&mut self, element: Element, text: &str) -> Result<(), Error> {
        if !is_blank(text) && self.has_children(element) {
            return Err(Error::HasChildren(self.name(element).to_string()));
        }
        self.element_value_mut(element).text = text.to_string();
        Ok(())
    }

    /// Create an attribute and add it to an element.
    ///
    /// Fails with [`Error::DuplicateAttribute`] if the element already has an
    /// attribute with this name; the element is left unchanged.
    ///
    /// ```rust
    /// let mut data = xmlbuild::XmlData::new();
    /// let fuc = data.new_element("fuc")?;
    /// data.add_attribute(fuc, "codigo", "M4310")?;
    /// assert!(data.add_attribute(fuc, "codigo", "A4545").is_err());
    /// assert_eq!(data.get_attribute(fuc, "codigo"), Some("M4310"));
    /// # Ok::<(), xmlbuild::Error>(())
    /// ```
    pub fn add_attribute(
        &mut self,
        element: Element,
        name: &str,
        value: &str,
    ) -> Result<Attribute, Error> {
        validate_name(name)?;
        validate_value(name, value)?;
        if self.attributes(element).contains_key(name) {
            return Err(Error::DuplicateAttribute(name.to_string()));
        }
        let attribute = self.new_attribute(name, value)?;
        self.append_attribute(element, attribute)?;
        Ok(attribute)
    }

    /// Add an existing attribute to an element, after its other attributes.
    ///
    /// An attribute owned by another element is moved. Fails with
    /// [`Error::DuplicateAttribute`] if the element already has a different
    /// attribute with the same name.
    pub fn append_attribute(&mut self, element: Element, attribute: Attribute) -> Result<(), Error> {
        if self.owner(attribute) == Some(element) {
            return Ok(());
        }
        let name = self.attribute_name(attribute);
        if self.attributes(element).contains_key(name) {
            return Err(Error::DuplicateAttribute(name.to_string()));
        }
        let last = self.attributes(element).nodes().last();
        match last {
            Some(last) => last
                .get()
                .checked_insert_after(attribute.get(), self.arena_mut())?,
            None => element
                .get()
                .checked_prepend(attribute.get(), self.arena_mut())?,
        }
        Ok(())
    }

    /// Move an attribute to a new owner, or detach it with `None`.
    pub fn set_attribute_owner(
        &mut self,
        attribute: Attribute,
        owner: Option<Element>,
    ) -> Result<(), Error> {
        match owner {
            Some(element) => self.append_attribute(element, attribute),
            None => {
                attribute.get().detach(self.arena_mut());
                Ok(())
            }
        }
    }

    /// Remove all attributes with this name from an element.
    ///
    /// Removed attributes are detached and have no owner anymore. Does
    /// nothing if there is no such attribute.
    pub fn remove_attribute(&mut self, element: Element, name: &str) -> Result<(), Error> {
        validate_name(name)?;
        let matching = self
            .attributes(element)
            .nodes()
            .filter(|node| self.attribute_name(*node) == name)
            .collect::<Vec<_>>();
        for attribute in matching {
            attribute.get().detach(self.arena_mut());
        }
        Ok(())
    }

    /// Remove exactly this attribute from an element. Does nothing if the
    /// element does not own it.
    pub fn remove_attribute_node(&mut self, element: Element, attribute: Attribute) {
        if self.owner(attribute) == Some(element) {
            attribute.get().detach(self.arena_mut());
        }
    }

    /// Change the value of the first attribute with this name. Does nothing
    /// if there is no such attribute.
    pub fn change_attribute(&mut self, element: Element, name: &str, value: &str) -> Result<(), Error> {
        validate_name(name)?;
        validate_value(name, value)?;
        if let Some(attribute) = self.attributes(element).get_node(name) {
            self.attribute_value_mut(attribute).value = value.to_string();
        }
        Ok(())
    }

    /// Rename an attribute.
    ///
    /// Fails with [`Error::DuplicateAttribute`] if its owner already has
    /// another attribute with the new name.
    pub fn set_attribute_name(&mut self, attribute: Attribute, name: &str) -> Result<(), Error> {
        validate_name(name)?;
        if let Some(owner) = self.owner(attribute) {
            let clash = self
                .attributes(owner)
                .nodes()
                .any(|other| other != attribute && self.attribute_name(other) == name);
            if clash {
                return Err(Error::DuplicateAttribute(name.to_string()));
            }
        }
        self.attribute_value_mut(attribute).name = name.to_string();
        Ok(())
    }

    /// Set the value of an attribute. Blank values are rejected.
    pub fn set_attribute_value(&mut self, attribute: Attribute, value: &str) -> Result<(), Error> {
        validate_value(self.attribute_name(attribute), value)?;
        self.attribute_value_mut(attribute).value = value.to_string();
        Ok(())
    }

    /// Visit an element and its descendants in document order, allowing the
    /// visitor to change the tree.
    ///
    /// Like [`XmlData::accept`], the visitor decides whether to descend into
    /// the visited element. Children are looked up after the visitor
    /// returns, so changes it makes to them are seen by the traversal.
    ///
    /// The first error returned by the visitor stops the traversal and is
    /// returned. Changes made before it are kept: this is not transactional.
    pub fn accept_mut<F>(&mut self, element: Element, mut visitor: F) -> Result<(), Error>
    where
        F: FnMut(&mut XmlData, Element) -> Result<bool, Error>,
    {
        let mut stack = vec![element];
        while let Some(current) = stack.pop() {
            if visitor(self, current)? {
                stack.extend(self.reverse_children(current));
            }
        }
        Ok(())
    }
}
