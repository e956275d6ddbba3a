//! preserveAspectRatio removal.
//!
//! Exported SVGs sometimes end up with a stray (or duplicated)
//! `preserveAspectRatio="none"` that stretches the image when embedded.
//! Stripping the attribute restores default scaling.

use std::sync::LazyLock;

use regex::Regex;

/// The attribute plus its leading whitespace, any value.
static PRESERVE_ASPECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+preserveAspectRatio="[^"]*""#).unwrap());

/// Remove every `preserveAspectRatio` attribute from the document.
pub fn strip_preserve_aspect_ratio(svg: &str) -> String {
    PRESERVE_ASPECT.replace_all(svg, "").into_owned()
}
