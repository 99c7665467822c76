//! upmark-core - HTML node tree and serialization
//!
//! This crate provides the element tree that `upmark` assembles Markdown
//! documents into, along with its HTML serialization.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──upmark──▶ ┌───────────────┐
//!                             │               │
//!                             │ HtmlNode tree │ ──▶ HTML String
//! hand-built nodes ──────────▶│               │
//!                             └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use upmark_core::{HtmlNode, LeafNode, ParentNode, serialize};
//!
//! let tree: HtmlNode = ParentNode::new(
//!     "p",
//!     vec![
//!         LeafNode::text("Hello ").into(),
//!         LeafNode::element("b", "World").into(),
//!     ],
//! )
//! .into();
//!
//! assert_eq!(serialize(&tree).unwrap(), "<p>Hello <b>World</b></p>");
//! ```

mod node;
mod serialize;

pub use node::{attributes_to_string, Attributes, HtmlNode, LeafNode, ParentNode};
pub use serialize::{serialize, SerializeError};
