use crate::attributes::Attributes;
use crate::xmldata::{Attribute, Element, XmlData};
use crate::xmlvalue::{Value, ValueType};

/// ## Read-only access
impl XmlData {
    /// The name of an element.
    pub fn name(&self, element: Element) -> &str {
        &self.element_value(element).name
    }

    /// The text of an element. Empty if it has none.
    pub fn text(&self, element: Element) -> &str {
        &self.element_value(element).text
    }

    /// Number of live elements and attributes, attached or not.
    ///
    /// Released nodes are not counted; their slots are reused by new nodes.
    pub fn node_count(&self) -> usize {
        self.arena().live_count()
    }

    /// Get parent element.
    ///
    /// Returns [`None`] if the element is unattached or the top of a tree.
    ///
    /// ```rust
    /// let mut data = xmlbuild::XmlData::new();
    /// let plano = data.new_element("plano")?;
    /// let fuc = data.append_element(plano, "fuc", "", &[])?;
    /// assert_eq!(data.parent(fuc), Some(plano));
    /// assert_eq!(data.parent(plano), None);
    /// # Ok::<(), xmlbuild::Error>(())
    /// ```
    pub fn parent(&self, element: Element) -> Option<Element> {
        self.arena()[element.get()].parent().map(Element::new)
    }

    /// Iterator over the child elements, in order.
    ///
    /// Attributes are not children.
    pub fn children(&self, element: Element) -> impl Iterator<Item = Element> + '_ {
        element
            .get()
            .children(self.arena())
            .filter(move |n| self.value(*n).value_type() == ValueType::Element)
            .map(Element::new)
    }

    /// Iterator over the child elements, last first.
    pub fn reverse_children(&self, element: Element) -> impl Iterator<Item = Element> + '_ {
        element
            .get()
            .children(self.arena())
            .rev()
            .take_while(move |n| self.value(*n).value_type() == ValueType::Element)
            .map(Element::new)
    }

    /// Returns true if the element has at least one child element.
    pub fn has_children(&self, element: Element) -> bool {
        self.children(element).next().is_some()
    }

    /// Get index of a child.
    ///
    /// Returns [`None`] if `child` is not a child of `parent`.
    pub fn child_index(&self, parent: Element, child: Element) -> Option<usize> {
        if self.parent(child) != Some(parent) {
            return None;
        }
        self.children(parent).position(|n| n == child)
    }

    /// The attributes of an element, in insertion order.
    ///
    /// ```rust
    /// let mut data = xmlbuild::XmlData::new();
    /// let fuc = data.new_element("fuc")?;
    /// data.add_attribute(fuc, "codigo", "M4310")?;
    /// data.add_attribute(fuc, "nome", "PA")?;
    /// let attributes = data.attributes(fuc);
    /// assert_eq!(attributes.get("codigo"), Some("M4310"));
    /// assert_eq!(attributes.keys().collect::<Vec<_>>(), vec!["codigo", "nome"]);
    /// # Ok::<(), xmlbuild::Error>(())
    /// ```
    pub fn attributes(&self, element: Element) -> Attributes {
        Attributes::new(self, element)
    }

    /// Get the value of the first attribute with this name.
    pub fn get_attribute(&self, element: Element, name: &str) -> Option<&str> {
        self.attributes(element).get(name)
    }

    /// The name of an attribute.
    pub fn attribute_name(&self, attribute: Attribute) -> &str {
        &self.attribute_value_ref(attribute).name
    }

    /// The value of an attribute.
    pub fn attribute_value(&self, attribute: Attribute) -> &str {
        &self.attribute_value_ref(attribute).value
    }

    /// The element that owns an attribute, if any.
    pub fn owner(&self, attribute: Attribute) -> Option<Element> {
        self.arena()[attribute.get()].parent().map(Element::new)
    }

    /// Iterator over the ancestors of an element, starting with the element
    /// itself.
    pub fn ancestors(&self, element: Element) -> impl Iterator<Item = Element> + '_ {
        element.get().ancestors(self.arena()).map(Element::new)
    }

    /// Number of ancestors. Zero for the top of a tree.
    pub fn depth(&self, element: Element) -> usize {
        self.ancestors(element).count() - 1
    }

    /// The names from the top of the tree down to this element, joined by
    /// `/`.
    ///
    /// ```rust
    /// let mut data = xmlbuild::XmlData::new();
    /// let plano = data.new_element("plano")?;
    /// let fuc = data.append_element(plano, "fuc", "", &[])?;
    /// assert_eq!(data.path(plano), "plano");
    /// assert_eq!(data.path(fuc), "plano/fuc");
    /// # Ok::<(), xmlbuild::Error>(())
    /// ```
    pub fn path(&self, element: Element) -> String {
        let mut names = self
            .ancestors(element)
            .map(|ancestor| self.name(ancestor))
            .collect::<Vec<_>>();
        names.reverse();
        names.join("/")
    }

    /// Like [`XmlData::path`], but starting at `top` instead of the top of the
    /// tree. Falls back to the full path if `top` is not an ancestor.
    pub(crate) fn path_from(&self, top: Element, element: Element) -> String {
        let mut names = Vec::new();
        for ancestor in self.ancestors(element) {
            names.push(self.name(ancestor));
            if ancestor == top {
                break;
            }
        }
        names.reverse();
        names.join("/")
    }

    /// Iterator over the element and its descendant elements, in document
    /// order (pre-order depth-first).
    pub fn descendants(&self, element: Element) -> impl Iterator<Item = Element> + '_ {
        element
            .get()
            .descendants(self.arena())
            .filter(move |n| matches!(self.value(*n), Value::Element(_)))
            .map(Element::new)
    }

    /// Visit an element and its descendants in document order.
    ///
    /// The visitor returns `true` to descend into the children of the
    /// visited element, `false` to skip them. Traversal keeps an explicit
    /// stack, so deep trees do not grow the call stack.
    ///
    /// ```rust
    /// let mut data = xmlbuild::XmlData::new();
    /// let a = data.new_element("a")?;
    /// let b = data.append_element(a, "b", "", &[])?;
    /// data.append_element(b, "c", "", &[])?;
    /// let d = data.append_element(a, "d", "", &[])?;
    ///
    /// let mut seen = Vec::new();
    /// data.accept(a, |element| {
    ///     seen.push(element);
    ///     element != b
    /// });
    /// assert_eq!(seen, vec![a, b, d]);
    /// # Ok::<(), xmlbuild::Error>(())
    /// ```
    pub fn accept<F>(&self, element: Element, mut visitor: F)
    where
        F: FnMut(Element) -> bool,
    {
        let mut stack = vec![element];
        while let Some(current) = stack.pop() {
            if visitor(current) {
                stack.extend(self.reverse_children(current));
            }
        }
    }
}
