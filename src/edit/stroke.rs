//! Stroke attribute retouching.
//!
//! Rewrites `stroke-width` values and six-digit hex `stroke` colors across
//! a document. Only attribute syntax is touched; `style="..."` properties
//! and named colors pass through unchanged.

use std::sync::LazyLock;

use regex::Regex;

static STROKE_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"stroke-width="[^"]*""#).unwrap());

static STROKE_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"stroke="#[0-9a-fA-F]{6}""##).unwrap());

/// Replace every `stroke-width` attribute value.
///
/// Widths are written with two decimals, the format the upstream SVG
/// exporter uses (`stroke-width="8.00"`).
pub fn replace_stroke_width(svg: &str, width: f64) -> String {
    let replacement = format!(r#"stroke-width="{width:.2}""#);
    STROKE_WIDTH.replace_all(svg, replacement.as_str()).into_owned()
}

/// Replace every six-digit hex `stroke` color with `hex`.
///
/// `hex` must already be normalized to `#rrggbb` (see
/// [`super::color::normalize_hex_color`]). Named colors and shorthand hex
/// are left alone, matching the narrow contract of the rewrite.
pub fn replace_stroke_color(svg: &str, hex: &str) -> String {
    let replacement = format!(r#"stroke="{hex}""#);
    STROKE_COLOR.replace_all(svg, replacement.as_str()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_stroke_width() {
        let svg = r#"<path stroke-width="2.00"/><path stroke-width="1.5"/>"#;
        let result = replace_stroke_width(svg, 8.0);
        assert_eq!(
            result,
            r#"<path stroke-width="8.00"/><path stroke-width="8.00"/>"#
        );
    }

    #[test]
    fn test_replace_stroke_color() {
        let svg = r##"<path stroke="#1a2b3c"/><path stroke="#FFEEDD"/>"##;
        let result = replace_stroke_color(svg, "#f4f1ea");
        assert_eq!(
            result,
            r##"<path stroke="#f4f1ea"/><path stroke="#f4f1ea"/>"##
        );
    }

    #[test]
    fn test_named_and_shorthand_colors_untouched() {
        let svg = r##"<path stroke="red"/><path stroke="#abc"/>"##;
        assert_eq!(replace_stroke_color(svg, "#f4f1ea"), svg);
    }

    #[test]
    fn test_stroke_width_does_not_match_stroke() {
        let svg = r##"<path stroke="#112233" stroke-width="2.00"/>"##;
        let result = replace_stroke_width(svg, 4.0);
        assert!(result.contains(r##"stroke="#112233""##));
        assert!(result.contains(r#"stroke-width="4.00""#));
    }

    #[test]
    fn test_idempotent_rewrites() {
        let svg = r##"<path stroke="#112233" stroke-width="2.00"/>"##;
        let once = replace_stroke_color(&replace_stroke_width(svg, 8.0), "#f4f1ea");
        let twice = replace_stroke_color(&replace_stroke_width(&once, 8.0), "#f4f1ea");
        assert_eq!(once, twice);
    }
}
