//! Document-level `d` attribute scanning.
//!
//! Pulls the raw path-data strings out of an SVG document without parsing
//! XML. Attribute values are double-quoted with no embedded quotes, which
//! makes a single regex sufficient and keeps the scan allocation-free.

use std::sync::LazyLock;

use regex::Regex;

/// A `d="..."` attribute value. The word boundary keeps `id="..."` and
/// friends out of the match.
static D_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\bd="([^"]*)""#).unwrap());

/// Iterate the path-data strings of every `d` attribute in the document.
pub fn path_data(document: &str) -> impl Iterator<Item = &str> {
    D_ATTR
        .captures_iter(document)
        .map(|cap| cap.get(1).unwrap().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_all_d_attributes() {
        let doc = r#"<svg><path d="M1 2"/><path fill="red" d="L3 4"/></svg>"#;
        let found: Vec<_> = path_data(doc).collect();
        assert_eq!(found, vec!["M1 2", "L3 4"]);
    }

    #[test]
    fn test_ignores_id_attribute() {
        let doc = r#"<svg><g id="layer1"><path d="M1 2"/></g></svg>"#;
        let found: Vec<_> = path_data(doc).collect();
        assert_eq!(found, vec!["M1 2"]);
    }

    #[test]
    fn test_multiline_attribute_value() {
        let doc = "<path d=\"M1 2\nL3 4\"/>";
        let found: Vec<_> = path_data(doc).collect();
        assert_eq!(found, vec!["M1 2\nL3 4"]);
    }

    #[test]
    fn test_no_d_attributes() {
        assert_eq!(path_data("<svg width=\"10\"/>").count(), 0);
    }
}
