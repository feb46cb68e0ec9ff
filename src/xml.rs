//! Owned XML element tree.
//!
//! Project files are parsed with `roxmltree` and then copied into an owned
//! [`XmlNode`] tree so the document no longer borrows the file buffer. Only
//! elements, their attributes and their text survive the copy; comments,
//! processing instructions and the declaration are dropped.

use thiserror::Error;

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("malformed XML")]
    Syntax(#[from] roxmltree::Error),
}

/// An element with its attributes, text content and child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    tag_name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlNode>,
}

impl XmlNode {
    /// Parse a document and return its root element.
    pub fn parse(content: &str) -> Result<Self, XmlError> {
        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);

        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let document = roxmltree::Document::parse_with_options(content, options)?;

        Ok(Self::from_element(document.root_element()))
    }

    fn from_element(node: roxmltree::Node<'_, '_>) -> Self {
        let attributes = node
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect();

        let mut text = String::new();
        let mut children = Vec::new();
        for child in node.children() {
            if child.is_element() {
                children.push(Self::from_element(child));
            } else if child.is_text() {
                if let Some(t) = child.text() {
                    text.push_str(t);
                }
            }
        }

        Self {
            tag_name: node.tag_name().name().to_string(),
            attributes,
            text: text.trim().to_string(),
            children,
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Trimmed text directly inside this element, excluding child elements.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// First direct child with the given tag.
    pub fn child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.tag_name == tag)
    }

    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.tag_name == tag)
    }

    /// Text of the first direct child with the given tag, if it has any.
    pub fn child_text(&self, tag: &str) -> Option<&str> {
        self.child(tag)
            .map(XmlNode::text)
            .filter(|text| !text.is_empty())
    }

    /// All descendants with the given tag, in document (pre-order) order.
    pub fn descendants_named<'a>(&'a self, tag: &str) -> Vec<&'a XmlNode> {
        let mut found = Vec::new();
        self.collect_descendants(tag, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, tag: &str, found: &mut Vec<&'a XmlNode>) {
        for child in &self.children {
            if child.tag_name == tag {
                found.push(child);
            }
            child.collect_descendants(tag, found);
        }
    }
}
