//! Minimal element tree for the XML exports
//!
//! Emitters build a tree of [`Element`]s and serialise it in one pass, so
//! no emitter deals with escaping or indentation.

use std::fmt::{self, Write};

/// A child of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attributes: Vec::new(), children: Vec::new() }
    }

    /// Element holding a single text node.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).text(text)
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn child(mut self, child: Element) -> Self {
        self.push(child);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Insert `child` before the existing child at `index`.
    pub fn insert(&mut self, index: usize, child: Element) {
        let index = index.min(self.children.len());
        self.children.insert(index, Node::Element(child));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// First child element called `name`.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.elements().find(|e| e.name == name)
    }

    /// Concatenated text of the direct text children.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    fn write_to(&self, out: &mut impl Write, depth: usize) -> fmt::Result {
        let indent = " ".repeat(depth);
        write!(out, "{}<{}", indent, self.name)?;
        for (name, value) in &self.attributes {
            write!(out, " {}=\"{}\"", name, escape_attribute(value))?;
        }

        if self.children.is_empty() {
            return writeln!(out, "/>");
        }

        if self.children.iter().all(|node| matches!(node, Node::Text(_))) {
            return writeln!(out, ">{}</{}>", escape_text(&self.text_content()), self.name);
        }

        writeln!(out, ">")?;
        for node in &self.children {
            match node {
                Node::Element(child) => child.write_to(out, depth + 1)?,
                Node::Text(text) => writeln!(out, "{} {}", indent, escape_text(text))?,
            }
        }
        writeln!(out, "{}</{}>", indent, self.name)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, 0)
    }
}

/// Serialise `root` as a complete document with an XML declaration.
pub fn to_document(root: &Element) -> String {
    format!("<?xml version='1.0' encoding='utf-8'?>\n{}", root)
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_nested_elements_with_one_space_indent() {
        let root = Element::new("gpx")
            .attr("version", "1.1")
            .child(Element::new("metadata").child(Element::with_text("name", "run")))
            .child(Element::new("trk"));

        assert_eq!(
            to_document(&root),
            "<?xml version='1.0' encoding='utf-8'?>\n\
             <gpx version=\"1.1\">\n \
             <metadata>\n  \
             <name>run</name>\n \
             </metadata>\n \
             <trk/>\n\
             </gpx>\n"
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let element = Element::with_text("note", "a < b & c").attr("title", "\"quoted\" 'x'");
        assert_eq!(
            element.to_string(),
            "<note title=\"&quot;quoted&quot; &apos;x&apos;\">a &lt; b &amp; c</note>\n"
        );
    }

    #[test]
    fn insert_places_children_first() {
        let mut point = Element::new("Trackpoint").child(Element::with_text("Cadence", "80"));
        point.insert(0, Element::with_text("Time", "2014-07-21T06:00:00Z"));
        let names: Vec<&str> = point.elements().map(Element::name).collect();
        assert_eq!(names, vec!["Time", "Cadence"]);
        assert_eq!(point.find("Cadence").map(Element::text_content), Some("80".to_string()));
    }

    #[test]
    fn set_attr_replaces_existing_values() {
        let mut element = Element::new("Activity").attr("Sport", "Other");
        element.set_attr("Sport", "Running");
        assert_eq!(element.attribute("Sport"), Some("Running"));
        assert!(!element.has_children());
    }
}
