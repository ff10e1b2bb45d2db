//! Parsing of pasted location lists.
//!
//! Each line has the shape `url[, name]`. The URL part may also be a full
//! `<iframe ...>` embed snippet copied from the map share dialog, in which case
//! the address is lifted out of its `src` attribute. Lines that do not resolve
//! to an embeddable panorama URL are dropped without complaint.
use crate::constants::{DEFAULT_LOCATION_NAME, EMBED_MARKER, IFRAME_PREFIX};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SRC_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"src="([^"]+)""#).expect("src attribute pattern is valid"));

/// One candidate panorama with the real name it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub url: String,
    pub name: String,
}

impl Location {
    #[must_use]
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }

    /// Whether the URL points at an embeddable panorama.
    #[must_use]
    pub fn is_embeddable(&self) -> bool {
        is_embed_url(&self.url)
    }
}

#[must_use]
pub fn is_embed_url(url: &str) -> bool {
    !url.is_empty() && url.contains(EMBED_MARKER)
}

/// Pull the address out of an `<iframe src="...">` snippet.
///
/// Returns `None` when the snippet carries no `src` attribute.
#[must_use]
pub fn extract_embed_src(snippet: &str) -> Option<String> {
    SRC_ATTR
        .captures(snippet)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace("&amp;", "&"))
}

/// Parse a single `url[, name]` line. Returns `None` for anything that is not
/// an embeddable panorama.
#[must_use]
pub fn parse_line(line: &str) -> Option<Location> {
    let (prefix, suffix) = match line.split_once(',') {
        Some((head, tail)) => (head, Some(tail)),
        None => (line, None),
    };

    let mut url = prefix.trim().to_string();
    if url.starts_with(IFRAME_PREFIX) {
        if let Some(src) = extract_embed_src(&url) {
            url = src;
        }
    }

    let name = suffix
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_LOCATION_NAME)
        .to_string();

    is_embed_url(&url).then(|| Location { url, name })
}

/// Turn raw multi-line text into the list of valid candidates, in input order.
#[must_use]
pub fn parse_locations(raw_text: &str) -> Vec<Location> {
    raw_text.lines().filter_map(parse_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iframe_snippet_is_unwrapped_and_unescaped() {
        let parsed = parse_locations(
            r#"<iframe src="https://google.com/maps/embed?x=1&amp;y=2"></iframe>, Plaza"#,
        );
        assert_eq!(
            parsed,
            vec![Location::new("https://google.com/maps/embed?x=1&y=2", "Plaza")]
        );
    }

    #[test]
    fn missing_name_uses_default() {
        let parsed = parse_locations("https://google.com/maps/embed?x=1");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, DEFAULT_LOCATION_NAME);
    }

    #[test]
    fn blank_name_after_comma_uses_default() {
        let parsed = parse_locations("https://google.com/maps/embed?x=1,   ");
        assert_eq!(parsed[0].name, DEFAULT_LOCATION_NAME);
    }

    #[test]
    fn name_keeps_inner_commas() {
        let parsed = parse_locations("https://google.com/maps/embed?pb=1 , Santiago, Chile ");
        assert_eq!(parsed[0].url, "https://google.com/maps/embed?pb=1");
        assert_eq!(parsed[0].name, "Santiago, Chile");
    }

    #[test]
    fn lines_without_marker_are_dropped() {
        let text = "\n\
            https://example.com/maps, Nope\n\
            garbage line\n\
            https://www.google.com/maps/embed?pb=abc, Yes\n\
            <iframe width=\"600\"></iframe>, No src\n";
        let parsed = parse_locations(text);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Yes");
    }

    #[test]
    fn iframe_without_src_falls_back_to_prefix() {
        assert!(extract_embed_src("<iframe width=\"1\">").is_none());
        // The prefix itself contains the marker, so the whole snippet is kept.
        let parsed = parse_line("<iframe data-x=google.com/maps/embed>, Odd");
        assert_eq!(
            parsed.map(|loc| loc.url),
            Some("<iframe data-x=google.com/maps/embed>".to_string())
        );
    }

    #[test]
    fn windows_line_endings_are_tolerated() {
        let parsed = parse_locations(
            "https://google.com/maps/embed?a=1, Uno\r\nhttps://google.com/maps/embed?a=2\r\n",
        );
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "Uno");
        assert_eq!(parsed[1].url, "https://google.com/maps/embed?a=2");
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_locations("").is_empty());
        assert!(parse_locations("\n\n").is_empty());
        assert!(!Location::new("", "x").is_embeddable());
    }
}
