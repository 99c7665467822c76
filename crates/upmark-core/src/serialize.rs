//! HTML node tree serialization
//!
//! Converts an [`HtmlNode`] tree into an HTML string. Text and attribute
//! values are emitted verbatim, without HTML escaping.

use crate::node::{attributes_to_string, HtmlNode, LeafNode, ParentNode};

/// Error type for node serialization.
///
/// All variants indicate a construction bug in the caller, not a problem
/// with user input: nodes produced by the `upmark` assembler always
/// satisfy the serialization contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SerializeError {
    /// A leaf node has no value
    #[error("leaf node has no value")]
    MissingValue,

    /// A parent node has no tag
    #[error("parent node has no tag")]
    MissingTag,

    /// A parent node has no children
    #[error("parent node has no children")]
    EmptyChildren,
}

/// Serialize a node tree to an HTML string
pub fn serialize(node: &HtmlNode) -> Result<String, SerializeError> {
    let mut output = String::with_capacity(256);
    serialize_node(node, &mut output)?;
    Ok(output)
}

fn serialize_node(node: &HtmlNode, out: &mut String) -> Result<(), SerializeError> {
    match node {
        HtmlNode::Leaf(leaf) => serialize_leaf(leaf, out),
        HtmlNode::Parent(parent) => serialize_parent(parent, out),
    }
}

fn serialize_leaf(leaf: &LeafNode, out: &mut String) -> Result<(), SerializeError> {
    let value = leaf.value.as_deref().ok_or(SerializeError::MissingValue)?;

    match leaf.tag.as_deref() {
        // Untagged leaves are raw text passthrough
        None => out.push_str(value),
        Some(tag) => {
            out.push('<');
            out.push_str(tag);
            out.push_str(&attributes_to_string(&leaf.attrs));
            out.push('>');
            out.push_str(value);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }

    Ok(())
}

fn serialize_parent(parent: &ParentNode, out: &mut String) -> Result<(), SerializeError> {
    let tag = parent.tag.as_deref().ok_or(SerializeError::MissingTag)?;
    if parent.children.is_empty() {
        return Err(SerializeError::EmptyChildren);
    }

    out.push('<');
    out.push_str(tag);
    out.push_str(&attributes_to_string(&parent.attrs));
    out.push('>');
    for child in &parent.children {
        serialize_node(child, out)?;
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Attributes;

    #[test]
    fn test_leaf_p() {
        let node = LeafNode::element("p", "Hello, world!").into();
        assert_eq!(serialize(&node).unwrap(), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_leaf_a_with_href() {
        let node =
            LeafNode::element_with_attrs("a", "Click me!", vec![("href", "https://www.google.com")])
                .into();
        assert_eq!(
            serialize(&node).unwrap(),
            "<a href=\"https://www.google.com\">Click me!</a>"
        );
    }

    #[test]
    fn test_leaf_no_tag_is_raw_text() {
        let node = LeafNode::text("This is just text").into();
        assert_eq!(serialize(&node).unwrap(), "This is just text");
    }

    #[test]
    fn test_leaf_no_value_fails() {
        let node = HtmlNode::Leaf(LeafNode {
            tag: Some("span".to_string()),
            value: None,
            attrs: Attributes::new(),
        });
        assert_eq!(serialize(&node), Err(SerializeError::MissingValue));
    }

    #[test]
    fn test_parent_with_children() {
        let node = ParentNode::new("div", vec![LeafNode::element("span", "child").into()]).into();
        assert_eq!(serialize(&node).unwrap(), "<div><span>child</span></div>");
    }

    #[test]
    fn test_parent_with_grandchildren() {
        let grandchild = LeafNode::element("b", "grandchild").into();
        let child = ParentNode::new("span", vec![grandchild]).into();
        let node = ParentNode::new("div", vec![child]).into();
        assert_eq!(
            serialize(&node).unwrap(),
            "<div><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn test_parent_multi_child() {
        let node = ParentNode::new(
            "div",
            vec![
                LeafNode::element("span", "child1").into(),
                LeafNode::element("span", "child2").into(),
            ],
        )
        .into();
        assert_eq!(
            serialize(&node).unwrap(),
            "<div><span>child1</span><span>child2</span></div>"
        );
    }

    #[test]
    fn test_parent_no_children_fails() {
        let node = ParentNode::new("p", vec![]).into();
        assert_eq!(serialize(&node), Err(SerializeError::EmptyChildren));
    }

    #[test]
    fn test_parent_no_tag_fails() {
        let node = HtmlNode::Parent(ParentNode {
            tag: None,
            children: vec![LeafNode::element("span", "child").into()],
            attrs: Attributes::new(),
        });
        assert_eq!(serialize(&node), Err(SerializeError::MissingTag));
    }

    #[test]
    fn test_img_leaf_has_no_text_in_closing() {
        let node = LeafNode::element_with_attrs("img", "", vec![("src", "cat.png"), ("alt", "A cat")])
            .into();
        assert_eq!(
            serialize(&node).unwrap(),
            "<img src=\"cat.png\" alt=\"A cat\"></img>"
        );
    }
}
