//! Document assembler
//!
//! Orchestrates the pipeline: segments the document into blocks,
//! classifies and normalizes each one, tokenizes the text into inline
//! spans and assembles the resulting nodes under a root `div` container.

use upmark_core::{HtmlNode, LeafNode, ParentNode};

use crate::block::{classify, html_tag, normalize, split_blocks, BlockType};
use crate::inline::{tokenize, Span};
use crate::Result;

/// Convert a Markdown document to a single HTML node tree.
///
/// The root is always a `div` parent with one child per block. A document
/// with no blocks yields an empty root container, which is a valid node
/// but fails serialization with `EmptyChildren`.
///
/// # Errors
///
/// Returns [`crate::UpmarkError::UnmatchedDelimiter`] when inline
/// delimiters are unbalanced anywhere in the document; no partial tree is
/// produced.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let mut block_nodes = Vec::new();

    for block in split_blocks(markdown) {
        let block_type = classify(&block);
        let tag = html_tag(&block, block_type);
        let text = normalize(&block, block_type);

        let children = match block_type {
            // Code block text is kept verbatim, no inline tokenization
            BlockType::Code => vec![LeafNode::element("code", &text).into()],
            BlockType::UnorderedList | BlockType::OrderedList => list_items(&text)?,
            _ => text_to_children(&text)?,
        };

        block_nodes.push(ParentNode::new(&tag, children).into());
    }

    Ok(ParentNode::new("div", block_nodes).into())
}

/// Convert a Markdown document straight to an HTML string
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    let node = markdown_to_html_node(markdown)?;
    Ok(upmark_core::serialize(&node)?)
}

/// Convert normalized block text to inline HTML nodes.
///
/// Marker-only lines (a bare `>` or `-`) normalize to empty text and
/// yield no spans; they still get an empty-text leaf so every block node
/// satisfies the serialization contract.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    let spans = tokenize(text)?;
    if spans.is_empty() {
        return Ok(vec![LeafNode::text("").into()]);
    }
    Ok(spans.into_iter().map(span_to_html_node).collect())
}

/// Convert a list-type block of text into its `li` child nodes.
///
/// Each line is tokenized independently and wrapped in its own `li`
/// parent.
fn list_items(text: &str) -> Result<Vec<HtmlNode>> {
    text.split('\n')
        .map(|line| Ok(ParentNode::new("li", text_to_children(line)?).into()))
        .collect()
}

/// Convert an inline span to its HTML node
pub fn span_to_html_node(span: Span) -> HtmlNode {
    match span {
        Span::Text(text) => LeafNode::text(&text).into(),
        Span::Bold(text) => LeafNode::element("b", &text).into(),
        Span::Italic(text) => LeafNode::element("i", &text).into(),
        Span::Code(text) => LeafNode::element("code", &text).into(),
        Span::Link { text, url } => {
            LeafNode::element_with_attrs("a", &text, vec![("href", url.as_str())]).into()
        }
        Span::Image { alt, url } => {
            LeafNode::element_with_attrs("img", "", vec![("src", url.as_str()), ("alt", alt.as_str())])
                .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UpmarkError;
    use upmark_core::{serialize, SerializeError};

    fn render(md: &str) -> String {
        markdown_to_html(md).unwrap()
    }

    #[test]
    fn test_paragraphs() {
        let md = "\nThis is **bolded** paragraph\ntext in a p\ntag here\n\nThis is another paragraph with _italic_ text and `code` here\n\n";
        assert_eq!(
            render(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn test_codeblock() {
        let md = "\n```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```\n";
        assert_eq!(
            render(md),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn test_headings() {
        let md = "\n# This is an h1\n\n### This is an h3\n\n###### This is an h6\n";
        assert_eq!(
            render(md),
            "<div><h1>This is an h1</h1><h3>This is an h3</h3><h6>This is an h6</h6></div>"
        );
    }

    #[test]
    fn test_heading_with_inline_code() {
        assert_eq!(
            render("# Heading\n\npara with `code`"),
            "<div><h1>Heading</h1><p>para with <code>code</code></p></div>"
        );
    }

    #[test]
    fn test_quote_keeps_internal_newline() {
        assert_eq!(
            render("> L1\n> L2"),
            "<div><blockquote>L1\nL2</blockquote></div>"
        );
    }

    #[test]
    fn test_unordered_list() {
        let md = "\n- list item 1\n- list item 2\n";
        assert_eq!(
            render(md),
            "<div><ul><li>list item 1</li><li>list item 2</li></ul></div>"
        );
    }

    #[test]
    fn test_ordered_list() {
        let md = "\n1. list item 1\n2. list item 2\n";
        assert_eq!(
            render(md),
            "<div><ol><li>list item 1</li><li>list item 2</li></ol></div>"
        );
    }

    #[test]
    fn test_list_items_with_inline_markup() {
        assert_eq!(
            render("- plain item\n- **bold** item"),
            "<div><ul><li>plain item</li><li><b>bold</b> item</li></ul></div>"
        );
    }

    #[test]
    fn test_link_and_image_in_paragraph() {
        assert_eq!(
            render("see [docs](https://example.com) and ![logo](logo.png)"),
            "<div><p>see <a href=\"https://example.com\">docs</a> and <img src=\"logo.png\" alt=\"logo\"></img></p></div>"
        );
    }

    #[test]
    fn test_marker_only_quote_renders_empty_block() {
        assert_eq!(render(">"), "<div><blockquote></blockquote></div>");
    }

    #[test]
    fn test_marker_only_list_item_renders_empty_item() {
        assert_eq!(
            render("- a\n- \n- b"),
            "<div><ul><li>a</li><li></li><li>b</li></ul></div>"
        );
    }

    #[test]
    fn test_unmatched_delimiter_aborts_document() {
        let err = markdown_to_html("fine paragraph\n\nbroken **paragraph").unwrap_err();
        assert!(matches!(err, UpmarkError::UnmatchedDelimiter(d) if d == "**"));
    }

    #[test]
    fn test_empty_document_builds_empty_root() {
        let node = markdown_to_html_node("").unwrap();
        assert!(matches!(&node, upmark_core::HtmlNode::Parent(p) if p.children.is_empty()));
        assert_eq!(
            serialize(&node),
            Err(SerializeError::EmptyChildren)
        );
    }
}
