//! Block classifier and segmenter
//!
//! Splits a document into blocks on blank-line boundaries and classifies
//! each block by its leading syntax. Classification and segmentation are
//! independent of the inline tokenizer.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,6}\s+").unwrap());

const FENCE: &str = "```";

/// Structural type of a document block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a Markdown document into blocks of text.
///
/// Blocks are separated by blank lines (two consecutive newlines). Each
/// block is trimmed of surrounding whitespace and empty blocks are
/// dropped, so no block ever contains a blank line.
pub fn split_blocks(document: &str) -> Vec<String> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Determine the block type of a block of text.
///
/// Checks run in precedence order, first match wins: heading, code fence,
/// quote, unordered list, ordered list, paragraph. Ordered lists require
/// strict 1-based sequential numbering with no gaps.
pub fn classify(block: &str) -> BlockType {
    if HEADING_PATTERN.is_match(block) {
        return BlockType::Heading;
    }

    // Opening and closing fences must not overlap
    if block.starts_with(FENCE) && block.ends_with(FENCE) && block.len() >= 2 * FENCE.len() {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block.split('\n').collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }

    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockType::UnorderedList;
    }

    let is_ordered = lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)));
    if is_ordered {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// Normalize block text, removing any block-level markdown.
///
/// Code blocks keep their internal newlines verbatim; paragraphs collapse
/// internal newlines to single spaces; quotes and lists drop the per-line
/// marker and trim each line, rejoining with newlines.
pub fn normalize(block: &str, block_type: BlockType) -> String {
    match block_type {
        // Drop the opening fence plus its newline and the closing fence.
        // The start offset must be counted in chars, not bytes: the first
        // character after the fence may be multibyte.
        BlockType::Code => {
            let start = block
                .char_indices()
                .nth(4)
                .map(|(i, _)| i)
                .unwrap_or(block.len());
            block
                .get(start..block.len().saturating_sub(3))
                .unwrap_or_default()
                .to_string()
        }

        BlockType::Quote | BlockType::UnorderedList | BlockType::OrderedList => block
            .split('\n')
            .map(strip_line_marker)
            .collect::<Vec<&str>>()
            .join("\n"),

        BlockType::Heading => block.trim_start_matches('#').trim().to_string(),

        BlockType::Paragraph => block.replace('\n', " ").trim().to_string(),
    }
}

/// Drop the first whitespace-delimited token (the `>`, `-` or `N.` marker)
fn strip_line_marker(line: &str) -> &str {
    match line.split_once(' ') {
        Some((_, rest)) => rest.trim(),
        None => "",
    }
}

/// Returns the HTML tag corresponding with the block type.
///
/// Heading levels are counted from the original block's leading `#` run,
/// so the block passed here must be the raw block, not the normalized
/// text.
pub fn html_tag(block: &str, block_type: BlockType) -> String {
    match block_type {
        BlockType::Paragraph => "p".to_string(),
        BlockType::Heading => {
            let level = block.chars().take_while(|&c| c == '#').count();
            format!("h{level}")
        }
        BlockType::Code => "pre".to_string(),
        BlockType::Quote => "blockquote".to_string(),
        BlockType::UnorderedList => "ul".to_string(),
        BlockType::OrderedList => "ol".to_string(),
    }
}
