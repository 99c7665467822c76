//! HTML element tree
//!
//! This module defines the node types that Markdown blocks and spans are
//! converted into. The tree is strictly owned: each parent holds its
//! children by value, so there is no sharing and no cycles.

use indexmap::IndexMap;

/// Element attributes, rendered in insertion order.
pub type Attributes = IndexMap<String, String>;

/// A node in the HTML element tree
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    /// An element with no element children (raw text or a single value)
    Leaf(LeafNode),

    /// An element containing one or more child nodes
    Parent(ParentNode),
}

/// A leaf element holding a text value.
///
/// A leaf with no tag renders its value as-is, with no wrapping element.
/// The `value` field is optional so a half-built node is representable,
/// but every constructor sets it; serializing a leaf without a value is a
/// contract violation, not an input error.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    /// Tag name (e.g. "b"), or `None` for raw text passthrough
    pub tag: Option<String>,

    /// Text content
    pub value: Option<String>,

    /// Attributes in insertion order
    pub attrs: Attributes,
}

impl LeafNode {
    /// Create a leaf with an optional tag and no attributes
    pub fn new(tag: Option<&str>, value: &str) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: Some(value.to_string()),
            attrs: Attributes::new(),
        }
    }

    /// Create an untagged leaf (raw text)
    pub fn text(value: &str) -> Self {
        Self::new(None, value)
    }

    /// Create a tagged leaf
    pub fn element(tag: &str, value: &str) -> Self {
        Self::new(Some(tag), value)
    }

    /// Create a tagged leaf with attributes
    pub fn element_with_attrs(tag: &str, value: &str, attrs: Vec<(&str, &str)>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            value: Some(value.to_string()),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// A parent element containing child nodes.
///
/// The `tag` field is optional for the same reason as `LeafNode::value`;
/// serialization requires it, together with a non-empty child list.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentNode {
    /// Tag name (e.g. "div")
    pub tag: Option<String>,

    /// Child nodes in document order
    pub children: Vec<HtmlNode>,

    /// Attributes in insertion order
    pub attrs: Attributes,
}

impl ParentNode {
    /// Create a parent with the given children and no attributes
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children,
            attrs: Attributes::new(),
        }
    }

    /// Create a parent with attributes
    pub fn with_attrs(tag: &str, children: Vec<HtmlNode>, attrs: Vec<(&str, &str)>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children,
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Add a child node
    pub fn add_child(&mut self, child: HtmlNode) {
        self.children.push(child);
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// Render attributes as ` key="value"` pairs in insertion order.
///
/// An empty map renders as an empty string. Values are emitted verbatim,
/// without escaping; callers must not put quotes in attribute values.
pub fn attributes_to_string(attrs: &Attributes) -> String {
    let mut result = String::new();
    for (name, value) in attrs {
        result.push(' ');
        result.push_str(name);
        result.push_str("=\"");
        result.push_str(value);
        result.push('"');
    }
    result
}
