//! ITT (iTunes Timed Text) document parsing.
//!
//! Extracts caption paragraphs from TTML documents: the `p` elements
//! carrying `begin`/`end` timing attributes and inline text. Styling,
//! layout, and region metadata are ignored; nested `span` text is kept.

use crate::error::Result;
use roxmltree::{Document, Node};
use std::path::Path;

/// Namespace URIs recognized as TTML caption documents.
///
/// iTunes emits the standard TTML namespace; the two `ttaf1` URIs cover
/// legacy DFXP documents still produced by some vendor tools.
pub const TTML_NAMESPACES: &[&str] = &[
    "http://www.w3.org/ns/ttml",
    "http://www.w3.org/2006/10/ttaf1",
    "http://www.w3.org/2006/04/ttaf1",
];

/// One caption paragraph extracted from a TTML document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Caption {
    /// 1-based position among all caption paragraphs in document order,
    /// counted before untimed paragraphs are dropped
    pub position: usize,
    /// Begin timestamp, verbatim from the source attribute
    pub begin: String,
    /// End timestamp, verbatim from the source attribute
    pub end: String,
    /// Concatenated inline text, trimmed
    pub text: String,
}

impl Caption {
    /// Create a caption entry.
    pub fn new(
        position: usize,
        begin: impl Into<String>,
        end: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            position,
            begin: begin.into(),
            end: end.into(),
            text: text.into(),
        }
    }
}

/// Read an ITT file and extract its caption paragraphs.
pub fn parse_file(path: &Path) -> Result<Vec<Caption>> {
    let xml = std::fs::read_to_string(path)?;
    parse(&xml)
}

/// Parse a TTML document and extract caption paragraphs in document order.
///
/// Paragraphs missing `begin` or `end` timing are dropped but still count
/// toward the positions of later paragraphs. A document whose `p` elements
/// all live in an unrecognized namespace yields no captions and a warning
/// naming that namespace.
pub fn parse(xml: &str) -> Result<Vec<Caption>> {
    let doc = Document::parse(xml)?;

    let mut captions = Vec::new();
    let mut position = 0;
    let mut foreign_ns: Option<String> = None;

    for paragraph in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "p")
    {
        let namespace = paragraph.tag_name().namespace();

        if !is_ttml_namespace(namespace) {
            foreign_ns.get_or_insert_with(|| namespace.unwrap_or_default().to_string());
            continue;
        }

        position += 1;

        let begin = paragraph.attribute("begin").filter(|v| !v.is_empty());
        let end = paragraph.attribute("end").filter(|v| !v.is_empty());

        let (Some(begin), Some(end)) = (begin, end) else {
            tracing::debug!(position, "dropping caption paragraph without begin/end timing");
            continue;
        };

        captions.push(Caption {
            position,
            begin: begin.to_string(),
            end: end.to_string(),
            text: paragraph_text(paragraph),
        });
    }

    if captions.is_empty()
        && let Some(namespace) = foreign_ns
    {
        tracing::warn!(
            namespace = %namespace,
            "found paragraph elements outside the known TTML namespaces; no captions extracted"
        );
    }

    Ok(captions)
}

/// Check a namespace URI against the known TTML namespaces.
fn is_ttml_namespace(namespace: Option<&str>) -> bool {
    namespace.is_some_and(|uri| TTML_NAMESPACES.contains(&uri))
}

/// Concatenate every descendant text node of a paragraph, trimmed.
///
/// Nested `span` text is included in place; `br` elements contribute
/// nothing. No whitespace is inserted between adjacent nodes.
fn paragraph_text(paragraph: Node<'_, '_>) -> String {
    let text: String = paragraph
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();

    text.trim().to_string()
}
