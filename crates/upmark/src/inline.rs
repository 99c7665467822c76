//! Inline span tokenizer
//!
//! Turns raw inline text into an ordered sequence of typed spans. The
//! tokenizer runs a fixed sequence of passes, each folding over the whole
//! current span list: delimiter splits for bold, inline code and italic,
//! then regex extraction for images and links. Non-text spans pass through
//! later passes untouched, so styled content is never re-tokenized.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Result, UpmarkError};

/// Alt/link text excludes brackets, URLs exclude parentheses. Matching is
/// non-overlapping and left-to-right.
static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// A typed unit of inline content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Plain text
    Text(String),

    /// Bold text (`**`-delimited)
    Bold(String),

    /// Italic text (`_`-delimited)
    Italic(String),

    /// Inline code (backtick-delimited)
    Code(String),

    /// Link with display text and URL
    Link { text: String, url: String },

    /// Image with alt text and URL
    Image { alt: String, url: String },
}

/// Tokenize inline text into typed spans.
///
/// Empty input yields an empty sequence. The image pass must run before
/// the link pass: link syntax is a textual subset of image syntax, so the
/// reverse order would misparse `![alt](url)` as a link with a stray `!`.
///
/// # Errors
///
/// Returns [`UpmarkError::UnmatchedDelimiter`] if `**`, `` ` `` or `_`
/// appears an odd number of times in a plain-text span.
pub fn tokenize(text: &str) -> Result<Vec<Span>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let spans = vec![Span::Text(text.to_string())];
    let spans = split_spans_delimiter(spans, "**", Span::Bold)?;
    let spans = split_spans_delimiter(spans, "`", Span::Code)?;
    let spans = split_spans_delimiter(spans, "_", Span::Italic)?;
    let spans = split_spans_image(spans);
    let spans = split_spans_link(spans);
    Ok(spans)
}

/// Split every text span on an inline delimiter.
///
/// Splitting must produce an odd number of parts (an even delimiter
/// count); parts alternate outside/inside the delimiter starting outside,
/// inside parts become spans of the target kind, and empty parts are
/// dropped.
fn split_spans_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    wrap: fn(String) -> Span,
) -> Result<Vec<Span>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let Span::Text(text) = span else {
            result.push(span);
            continue;
        };

        let parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(UpmarkError::UnmatchedDelimiter(delimiter.to_string()));
        }

        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 1 {
                result.push(wrap(part.to_string()));
            } else {
                result.push(Span::Text(part.to_string()));
            }
        }
    }

    Ok(result)
}

/// Extract image spans from every text span
fn split_spans_image(spans: Vec<Span>) -> Vec<Span> {
    split_spans_pattern(spans, &IMAGE_PATTERN, |alt, url| Span::Image { alt, url })
}

/// Extract link spans from every text span
fn split_spans_link(spans: Vec<Span>) -> Vec<Span> {
    split_spans_pattern(spans, &LINK_PATTERN, |text, url| Span::Link { text, url })
}

/// Extract pattern matches from text spans, keeping surrounding text.
///
/// For each match the preceding text (if non-empty) is emitted as a text
/// span followed by the extracted span; trailing text after the last match
/// is emitted last. A span with no matches is passed through unchanged.
fn split_spans_pattern(
    spans: Vec<Span>,
    pattern: &Regex,
    make: fn(String, String) -> Span,
) -> Vec<Span> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let Span::Text(text) = span else {
            result.push(span);
            continue;
        };

        let mut rest = 0;
        for caps in pattern.captures_iter(&text) {
            let matched = caps.get(0).unwrap();
            if matched.start() > rest {
                result.push(Span::Text(text[rest..matched.start()].to_string()));
            }
            result.push(make(caps[1].to_string(), caps[2].to_string()));
            rest = matched.end();
        }

        if rest == 0 {
            result.push(Span::Text(text));
        } else if rest < text.len() {
            result.push(Span::Text(text[rest..].to_string()));
        }
    }

    result
}

/// Extract all `(alt, url)` pairs of image syntax from raw text
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    IMAGE_PATTERN
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Extract all `(text, url)` pairs of link syntax from raw text
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    LINK_PATTERN
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}
