use indextree::NodeEdge;
use std::io::Write;

use crate::entity::{serialize_attribute, serialize_text};
use crate::error::Error;
use crate::name::is_blank;
use crate::output::{ansi, TextOptions};
use crate::xmldata::{Attribute, Element, XmlData};
use crate::xmlvalue::Value;

/// Accumulates rendered markup, coloring spans when asked to.
pub(crate) struct Painter {
    out: String,
    color: bool,
}

impl Painter {
    pub(crate) fn new(color: bool) -> Self {
        Painter {
            out: String::new(),
            color,
        }
    }

    fn span(&mut self, code: &str, s: &str) {
        if self.color {
            self.out.push_str(code);
            self.out.push_str(s);
            self.out.push_str(ansi::RESET);
        } else {
            self.out.push_str(s);
        }
    }

    pub(crate) fn punctuation(&mut self, s: &str) {
        self.span(ansi::PUNCTUATION, s);
    }

    pub(crate) fn name(&mut self, s: &str) {
        self.span(ansi::NAME, s);
    }

    pub(crate) fn plain(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

/// ## Serialization
impl XmlData {
    /// Render an element and its descendants as XML text.
    ///
    /// An element without text and children is self-closing. Indentation is
    /// one tab per depth level, counted from the top of the tree the element
    /// is in. Rendering the same tree twice gives the same text.
    ///
    /// Text is escaped on output (`&`, `<` and `>`), as are attribute values
    /// (`&`, `<` and `"`): an element with text `A & B` renders as
    /// `<nome>A &amp; B</nome>`. The stored values are left as they are.
    ///
    /// ```rust
    /// use xmlbuild::{TextOptions, XmlData};
    ///
    /// let mut data = XmlData::new();
    /// let plano = data.new_element("plano")?;
    /// data.append_element(plano, "curso", "MEI", &[])?;
    /// assert_eq!(
    ///     data.to_text(plano, &TextOptions::plain()),
    ///     "<plano>\n\t<curso>MEI</curso>\n</plano>\n"
    /// );
    /// assert_eq!(
    ///     data.to_text(plano, &TextOptions::compact()),
    ///     "<plano><curso>MEI</curso></plano>"
    /// );
    /// # Ok::<(), xmlbuild::Error>(())
    /// ```
    pub fn to_text(&self, element: Element, options: &TextOptions) -> String {
        let mut painter = Painter::new(options.color);
        self.render(element, self.depth(element), options, &mut painter);
        painter.finish()
    }

    /// Write an element as XML text.
    pub fn write(
        &self,
        element: Element,
        options: &TextOptions,
        w: &mut impl Write,
    ) -> Result<(), Error> {
        w.write_all(self.to_text(element, options).as_bytes())?;
        Ok(())
    }

    /// Render a single attribute as `name="value"`.
    pub fn attribute_to_text(&self, attribute: Attribute, color: bool) -> String {
        let mut painter = Painter::new(color);
        self.render_attribute(attribute, &mut painter);
        painter.finish()
    }

    pub(crate) fn render(
        &self,
        element: Element,
        mut depth: usize,
        options: &TextOptions,
        painter: &mut Painter,
    ) {
        for edge in element.get().traverse(self.arena()) {
            match edge {
                NodeEdge::Start(node_id) => {
                    if let Value::Element(_) = self.value(node_id) {
                        self.render_start(Element::new(node_id), depth, options, painter);
                        depth += 1;
                    }
                }
                NodeEdge::End(node_id) => {
                    if let Value::Element(_) = self.value(node_id) {
                        depth -= 1;
                        self.render_end(Element::new(node_id), depth, options, painter);
                    }
                }
            }
        }
    }

    fn is_self_closing(&self, element: Element) -> bool {
        is_blank(self.text(element)) && !self.has_children(element)
    }

    fn render_start(
        &self,
        element: Element,
        depth: usize,
        options: &TextOptions,
        painter: &mut Painter,
    ) {
        if options.indent {
            painter.plain(&"\t".repeat(depth));
        }
        painter.punctuation("<");
        painter.name(self.name(element));
        for attribute in self.attributes(element).nodes() {
            painter.plain(" ");
            self.render_attribute(attribute, painter);
        }
        if self.is_self_closing(element) {
            painter.punctuation("/>");
            return;
        }
        painter.punctuation(">");
        painter.plain(&serialize_text(self.text(element)));
        if self.has_children(element) && options.newline {
            painter.plain("\n");
        }
    }

    fn render_end(&self, element: Element, depth: usize, options: &TextOptions, painter: &mut Painter) {
        if !self.is_self_closing(element) {
            if self.has_children(element) && options.indent {
                painter.plain(&"\t".repeat(depth));
            }
            painter.punctuation("</");
            painter.name(self.name(element));
            painter.punctuation(">");
        }
        if options.newline {
            painter.plain("\n");
        }
    }

    fn render_attribute(&self, attribute: Attribute, painter: &mut Painter) {
        painter.name(self.attribute_name(attribute));
        painter.punctuation("=\"");
        painter.plain(&serialize_attribute(self.attribute_value(attribute)));
        painter.punctuation("\"");
    }
}
