//! viewBox rewriting.
//!
//! Replaces the value of an existing `viewBox` attribute, or inserts one
//! after `<svg` when the document has none. String surgery only: the
//! document is never parsed as XML, so comments, entities and unknown
//! attributes pass through untouched.

use crate::svg::BoundingBox;

use super::aspect::strip_preserve_aspect_ratio;

/// Replace the `viewBox` attribute value in an SVG string.
///
/// When no `viewBox` exists, one is inserted directly after the `<svg` tag
/// name. A document without an `<svg>` tag is returned unchanged.
pub fn replace_viewbox(svg: &str, new_viewbox: &str) -> String {
    if let Some(start) = svg.find("viewBox=\"") {
        let attr_start = start + 9; // len of 'viewBox="'
        if let Some(end) = svg[attr_start..].find('"') {
            return format!(
                "{}viewBox=\"{}\"{}",
                &svg[..start],
                new_viewbox,
                &svg[attr_start + end + 1..]
            );
        }
    }

    // No viewBox found, add one after <svg
    if let Some(svg_tag_end) = svg.find("<svg") {
        let insert_pos = svg_tag_end + 4;
        if let Some(space_or_gt) = svg[insert_pos..].find([' ', '>']) {
            let insert_pos = insert_pos + space_or_gt;
            return format!(
                "{} viewBox=\"{}\"{}",
                &svg[..insert_pos],
                new_viewbox,
                &svg[insert_pos..]
            );
        }
    }

    svg.to_string()
}

/// Set the `viewBox` to the given bounds, padded by `margin` on all sides.
pub fn set_viewbox_to_bounds(
    svg: &str,
    bounds: &BoundingBox,
    margin: f64,
    precision: usize,
) -> String {
    let padded = BoundingBox {
        min_x: bounds.min_x - margin,
        max_x: bounds.max_x + margin,
        min_y: bounds.min_y - margin,
        max_y: bounds.max_y + margin,
    };
    replace_viewbox(svg, &padded.to_viewbox(precision))
}

/// Ensure `preserveAspectRatio="none"` follows the `viewBox` attribute.
///
/// Any existing `preserveAspectRatio` is stripped first so the attribute is
/// never duplicated.
pub fn stretch(svg: &str) -> String {
    let svg = strip_preserve_aspect_ratio(svg);

    if let Some(start) = svg.find("viewBox=\"") {
        let attr_start = start + 9;
        if let Some(end) = svg[attr_start..].find('"') {
            let after_attr = attr_start + end + 1;
            return format!(
                "{} preserveAspectRatio=\"none\"{}",
                &svg[..after_attr],
                &svg[after_attr..]
            );
        }
    }

    svg
}
