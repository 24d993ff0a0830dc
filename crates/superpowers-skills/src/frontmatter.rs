//! Header block parser for skill documents.
//!
//! A header is a `---` line at the very top of the document, any number of
//! `key: value` lines, and a closing `---` line. Only `name` and
//! `description` are read; everything else in the block is ignored.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use superpowers_types::SkillMetadata;

const MARKER: &str = "---";

static FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+):\s*(.*)$").expect("field pattern is valid"));

/// Split a document into `(header, body)`.
///
/// Returns `None` when the document does not open with a marker line or the
/// block is never closed. `header` excludes both marker lines; `body` is
/// everything after the closing marker line, untouched.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let text = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = text.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim() != MARKER {
        return None;
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if line.trim() == MARKER {
            return Some((&text[header_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

/// Parse `name` and `description` out of a document's header block.
pub fn parse_frontmatter(content: &str) -> SkillMetadata {
    let Some((header, _)) = split_frontmatter(content) else {
        return SkillMetadata::default();
    };

    let mut metadata = SkillMetadata::default();
    for line in header.lines() {
        let Some(caps) = FIELD_RE.captures(line.trim_end()) else {
            continue;
        };
        let value = unquote(caps[2].trim());
        let value = (!value.is_empty()).then(|| value.to_string());
        match &caps[1] {
            "name" => metadata.name = value,
            "description" => metadata.description = value,
            _ => {}
        }
    }
    metadata
}

/// Read a skill document and parse its header block.
///
/// An unreadable file yields empty metadata.
pub fn extract_frontmatter(path: &Path) -> SkillMetadata {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_frontmatter(&content),
        Err(e) => {
            tracing::debug!(path = %path.display(), "Could not read skill document: {e}");
            SkillMetadata::default()
        }
    }
}

/// Remove the leading header block, if there is one.
pub fn strip_frontmatter(content: &str) -> &str {
    match split_frontmatter(content) {
        Some((_, body)) => body,
        None => content,
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|s| s.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
