//! Editing commands: crop, stroke, fix.
//!
//! Each command is a thin shell around a pure transform from
//! [`crate::edit`]; the file plumbing is shared via
//! [`crate::cli::common::apply_edit`].

use anyhow::{Result, bail};

use crate::cli::args::{CropArgs, EditIoArgs, StrokeArgs};
use crate::cli::common::apply_edit;
use crate::config::ToolConfig;
use crate::debug;
use crate::edit::aspect::strip_preserve_aspect_ratio;
use crate::edit::color::normalize_hex_color;
use crate::edit::stroke::{replace_stroke_color, replace_stroke_width};
use crate::edit::viewbox::{replace_viewbox, set_viewbox_to_bounds, stretch};
use crate::svg::document_bounds;

/// Rewrite the viewBox of all input files
pub fn run_crop(args: &CropArgs, io: &EditIoArgs, config: &ToolConfig) -> Result<()> {
    let precision = config.bounds.precision;
    let margin = args.margin.unwrap_or(config.crop.margin);
    let do_stretch = args.stretch || config.crop.stretch;

    if !margin.is_finite() || margin < 0.0 {
        bail!("--margin must be a non-negative number, got {margin}");
    }

    let explicit = match &args.viewbox {
        Some(value) => Some(validate_viewbox_value(value)?),
        None if args.fit => None,
        None => bail!("pass either --viewbox \"x y w h\" or --fit"),
    };

    apply_edit(io, "crop", |document| {
        let rewritten = match &explicit {
            Some(value) => replace_viewbox(document, value),
            None => {
                let bounds = document_bounds(document)?;
                debug!("crop"; "fitted bounds {}", bounds.to_viewbox(precision));
                set_viewbox_to_bounds(document, &bounds, margin, precision)
            }
        };

        Ok(if do_stretch {
            stretch(&rewritten)
        } else {
            rewritten
        })
    })
}

/// Rewrite stroke attributes of all input files
pub fn run_stroke(args: &StrokeArgs, io: &EditIoArgs, config: &ToolConfig) -> Result<()> {
    let width = args.width.or(config.stroke.width);
    let color = args.color.as_ref().or(config.stroke.color.as_ref());

    if width.is_none() && color.is_none() {
        bail!("nothing to do: pass --width and/or --hex (or set them in svgbox.toml)");
    }

    if let Some(width) = width
        && (!width.is_finite() || width <= 0.0)
    {
        bail!("--width must be a positive number, got {width}");
    }

    let color = match color {
        Some(raw) => match normalize_hex_color(raw) {
            Some(hex) => Some(hex),
            None => bail!("--hex must be a six-digit hex color like #f4f1ea, got `{raw}`"),
        },
        None => None,
    };

    apply_edit(io, "stroke", |document| {
        let mut result = match width {
            Some(width) => replace_stroke_width(document, width),
            None => document.to_string(),
        };
        if let Some(hex) = &color {
            result = replace_stroke_color(&result, hex);
        }
        Ok(result)
    })
}

/// Strip preserveAspectRatio from all input files
pub fn run_fix(io: &EditIoArgs) -> Result<()> {
    apply_edit(io, "fix", |document| {
        Ok(strip_preserve_aspect_ratio(document))
    })
}

/// Check that a `--viewbox` value is four finite numbers; the original
/// spelling is preserved in the output.
fn validate_viewbox_value(value: &str) -> Result<String> {
    let parts: Vec<f64> = value
        .split_whitespace()
        .filter_map(|p| p.parse().ok())
        .collect();

    if parts.len() != 4 || parts.iter().any(|n| !n.is_finite()) {
        bail!("--viewbox must be four numbers like \"0 0 100 100\", got `{value}`");
    }
    if parts[2] < 0.0 || parts[3] < 0.0 {
        bail!("--viewbox width and height must be non-negative, got `{value}`");
    }

    Ok(value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_svg(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn io_args(path: PathBuf) -> EditIoArgs {
        EditIoArgs {
            paths: vec![path],
            output: None,
            dry: false,
        }
    }

    #[test]
    fn test_validate_viewbox_value() {
        assert_eq!(
            validate_viewbox_value("0.00 80.00 1376.00 600.00").unwrap(),
            "0.00 80.00 1376.00 600.00"
        );
        assert!(validate_viewbox_value("0 0 100").is_err());
        assert!(validate_viewbox_value("a b c d").is_err());
        assert!(validate_viewbox_value("0 0 -1 100").is_err());
    }

    #[test]
    fn test_crop_explicit_viewbox_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_svg(
            &dir,
            "a.svg",
            r#"<svg viewBox="0.00 0.00 1376.00 768.00"><path d="M0 80"/></svg>"#,
        );

        let args = CropArgs {
            viewbox: Some("0.00 80.00 1376.00 600.00".to_string()),
            fit: false,
            margin: None,
            stretch: false,
        };
        run_crop(&args, &io_args(path.clone()), &ToolConfig::default()).unwrap();

        let result = std::fs::read_to_string(&path).unwrap();
        assert!(result.contains(r#"viewBox="0.00 80.00 1376.00 600.00""#));
        assert!(!result.contains("preserveAspectRatio"));
    }

    #[test]
    fn test_crop_fit_with_stretch() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_svg(
            &dir,
            "a.svg",
            r#"<svg viewBox="0 0 1000 1000"><path d="M0 80 L1376 200"/></svg>"#,
        );

        let args = CropArgs {
            viewbox: None,
            fit: true,
            margin: None,
            stretch: true,
        };
        run_crop(&args, &io_args(path.clone()), &ToolConfig::default()).unwrap();

        let result = std::fs::read_to_string(&path).unwrap();
        assert!(result.contains(r#"viewBox="0.00 80.00 1376.00 120.00""#));
        assert!(result.contains(r#"preserveAspectRatio="none""#));
    }

    #[test]
    fn test_crop_requires_a_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_svg(&dir, "a.svg", "<svg/>");

        let args = CropArgs {
            viewbox: None,
            fit: false,
            margin: None,
            stretch: false,
        };
        assert!(run_crop(&args, &io_args(path), &ToolConfig::default()).is_err());
    }

    #[test]
    fn test_crop_fit_fails_without_coordinates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_svg(&dir, "a.svg", r#"<svg width="10"/>"#);

        let args = CropArgs {
            viewbox: None,
            fit: true,
            margin: None,
            stretch: false,
        };
        let result = run_crop(&args, &io_args(path), &ToolConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_stroke_rewrites_width_and_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_svg(
            &dir,
            "a.svg",
            r##"<path stroke="#112233" stroke-width="2.00"/>"##,
        );

        let args = StrokeArgs {
            width: Some(8.0),
            color: Some("#F4F1EA".to_string()),
        };
        run_stroke(&args, &io_args(path.clone()), &ToolConfig::default()).unwrap();

        let result = std::fs::read_to_string(&path).unwrap();
        assert_eq!(result, r##"<path stroke="#f4f1ea" stroke-width="8.00"/>"##);
    }

    #[test]
    fn test_stroke_defaults_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_svg(&dir, "a.svg", r#"<path stroke-width="1.00"/>"#);

        let mut config = ToolConfig::default();
        config.stroke.width = Some(4.0);
        let args = StrokeArgs {
            width: None,
            color: None,
        };
        run_stroke(&args, &io_args(path.clone()), &config).unwrap();

        let result = std::fs::read_to_string(&path).unwrap();
        assert!(result.contains(r#"stroke-width="4.00""#));
    }

    #[test]
    fn test_stroke_without_any_replacement_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_svg(&dir, "a.svg", "<svg/>");

        let args = StrokeArgs {
            width: None,
            color: None,
        };
        assert!(run_stroke(&args, &io_args(path), &ToolConfig::default()).is_err());
    }

    #[test]
    fn test_fix_strips_preserve_aspect_ratio() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_svg(
            &dir,
            "a.svg",
            r#"<svg viewBox="0 0 10 10" preserveAspectRatio="none"/>"#,
        );

        run_fix(&io_args(path.clone())).unwrap();

        let result = std::fs::read_to_string(&path).unwrap();
        assert_eq!(result, r#"<svg viewBox="0 0 10 10"/>"#);
    }
}
