use crate::error::Error;
use crate::name::{is_blank, validate_name, validate_value};
use crate::xmldata::{Attribute, Element, XmlData};
use crate::xmlvalue::{AttributeValue, ElementValue, Value};

/// ## Creation
impl XmlData {
    /// Create a new, unattached element without text.
    ///
    /// ```rust
    /// use xmlbuild::{TextOptions, XmlData};
    ///
    /// let mut data = XmlData::new();
    /// let plano = data.new_element("plano")?;
    /// assert_eq!(data.to_text(plano, &TextOptions::compact()), "<plano/>");
    /// # Ok::<(), xmlbuild::Error>(())
    /// ```
    pub fn new_element(&mut self, name: &str) -> Result<Element, Error> {
        self.create_element(None, name, "", &[])
    }

    /// Create a new, unattached element with text.
    pub fn new_text_element(&mut self, name: &str, text: &str) -> Result<Element, Error> {
        self.create_element(None, name, text, &[])
    }

    /// Create an element, optionally appending it to `parent` and moving
    /// `attributes` onto it.
    ///
    /// Fails with [`Error::InvalidName`] for an illegal name,
    /// [`Error::LeafHasText`] if `parent` carries text and
    /// [`Error::DuplicateAttribute`] if two of `attributes` share a name.
    /// Nothing is created when it fails.
    ///
    /// ```rust
    /// use xmlbuild::{TextOptions, XmlData};
    ///
    /// let mut data = XmlData::new();
    /// let plano = data.new_element("plano")?;
    /// let codigo = data.new_attribute("codigo", "M4310")?;
    /// let fuc = data.create_element(Some(plano), "fuc", "", &[codigo])?;
    /// assert_eq!(data.parent(fuc), Some(plano));
    /// assert_eq!(
    ///     data.to_text(plano, &TextOptions::compact()),
    ///     r#"<plano><fuc codigo="M4310"/></plano>"#
    /// );
    /// # Ok::<(), xmlbuild::Error>(())
    /// ```
    pub fn create_element(
        &mut self,
        parent: Option<Element>,
        name: &str,
        text: &str,
        attributes: &[Attribute],
    ) -> Result<Element, Error> {
        validate_name(name)?;
        if let Some(parent) = parent {
            self.check_can_have_children(parent)?;
        }
        for (i, attribute) in attributes.iter().enumerate() {
            let attribute_name = self.attribute_name(*attribute);
            if attributes[..i]
                .iter()
                .any(|earlier| self.attribute_name(*earlier) == attribute_name)
            {
                return Err(Error::DuplicateAttribute(attribute_name.to_string()));
            }
        }

        let element = Element::new(self.arena_mut().new_node(Value::Element(ElementValue::new(
            name.to_string(),
            text.to_string(),
        ))));
        for attribute in attributes {
            // cannot clash: the element is fresh and the names are distinct
            self.append_attribute(element, *attribute)?;
        }
        if let Some(parent) = parent {
            self.append(parent, element)?;
        }
        Ok(element)
    }

    /// Create a new attribute that is not owned by any element.
    ///
    /// Attach it with [`XmlData::append_attribute`] or
    /// [`XmlData::set_attribute_owner`].
    pub fn new_attribute(&mut self, name: &str, value: &str) -> Result<Attribute, Error> {
        validate_name(name)?;
        validate_value(name, value)?;
        Ok(Attribute::new(self.arena_mut().new_node(Value::Attribute(
            AttributeValue::new(name.to_string(), value.to_string()),
        ))))
    }

    pub(crate) fn check_can_have_children(&self, element: Element) -> Result<(), Error> {
        let value = self.element_value(element);
        if is_blank(&value.text) {
            Ok(())
        } else {
            Err(Error::LeafHasText(value.name.clone()))
        }
    }
}
