//! # upmark
//!
//! Convert Markdown documents to an HTML node tree.
//!
//! ## Design
//!
//! Conversion runs as a two-stage pipeline over an in-memory document
//! string:
//!
//! 1. **Blocks**: the document is split on blank lines and each block is
//!    classified (paragraph, heading, code fence, quote, list) and stripped
//!    of its block-level syntax ([`block`]).
//! 2. **Spans**: the block text is tokenized into typed inline spans
//!    (bold, italic, inline code, links, images) by repeated delimiter
//!    splitting ([`inline`]).
//!
//! The spans are then converted to [`upmark_core::HtmlNode`] leaves,
//! wrapped per block, and collected under a root `div` container which
//! serializes to the final HTML string.
//!
//! Not a CommonMark implementation: nested lists, tables, footnotes and
//! escaping rules are out of scope.
//!
//! ## Example
//!
//! ```rust
//! let html = upmark::markdown_to_html("# Hello\n\nSome **bold** text").unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>");
//! ```

pub mod block;
mod convert;
pub mod inline;

pub use block::{classify, html_tag, normalize, split_blocks, BlockType};
pub use convert::{markdown_to_html, markdown_to_html_node, span_to_html_node};
pub use inline::{extract_images, extract_links, tokenize, Span};

/// Error type for upmark conversions
#[derive(Debug, thiserror::Error)]
pub enum UpmarkError {
    /// An inline delimiter appears an odd number of times.
    ///
    /// This is the only error reachable from malformed input; it aborts
    /// conversion of the whole document.
    #[error("unmatched delimiter: {0}")]
    UnmatchedDelimiter(String),

    /// A node failed the serialization contract (a construction bug)
    #[error(transparent)]
    Serialize(#[from] upmark_core::SerializeError),
}

pub type Result<T> = std::result::Result<T, UpmarkError>;
