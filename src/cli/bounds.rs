//! Bounding box estimation command.
//!
//! Reports one box per input file (text or JSON), plus an optional union
//! across all inputs with `--merge`. A file with no extractable coordinates
//! is reported as such, never as a degenerate box.

use anyhow::Result;
use serde::Serialize;

use crate::cli::args::BoundsArgs;
use crate::cli::common::{collect_paths, read_document};
use crate::config::ToolConfig;
use crate::debug;
use crate::svg::{BoundingBox, document_bounds};
use crate::utils::plural_count;

/// Per-file result, serialized as-is in `--json` mode.
#[derive(Debug, Serialize)]
struct BoundsReport {
    path: String,
    #[serde(flatten)]
    bounds: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    viewbox: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl BoundsReport {
    fn found(path: String, bounds: BoundingBox, precision: usize) -> Self {
        Self {
            path,
            viewbox: Some(bounds.to_viewbox(precision)),
            bounds: Some(bounds),
            error: None,
        }
    }

    fn empty(path: String, reason: String) -> Self {
        Self {
            path,
            bounds: None,
            viewbox: None,
            error: Some(reason),
        }
    }

    fn text_line(&self, precision: usize) -> String {
        match (&self.bounds, &self.viewbox) {
            (Some(b), Some(vb)) => format!(
                "{}: x {:.p$}..{:.p$} y {:.p$}..{:.p$} viewBox \"{}\"",
                self.path,
                b.min_x,
                b.max_x,
                b.min_y,
                b.max_y,
                vb,
                p = precision,
            ),
            _ => format!(
                "{}: {}",
                self.path,
                self.error.as_deref().unwrap_or("no coordinates found")
            ),
        }
    }
}

/// JSON envelope used when `--merge` is requested.
#[derive(Debug, Serialize)]
struct MergedOutput {
    files: Vec<BoundsReport>,
    total: BoundsReport,
}

/// Estimate bounding boxes for all input files
pub fn run(args: &BoundsArgs, config: &ToolConfig) -> Result<()> {
    let paths = collect_paths(&args.paths)?;
    let precision = args.precision.unwrap_or(config.bounds.precision);

    debug!("bounds"; "scanning {}", plural_count(paths.len(), "file"));

    let mut reports = Vec::with_capacity(paths.len());
    let mut merged: Option<BoundingBox> = None;

    for path in &paths {
        let document = read_document(path)?;
        let display = path.display().to_string();

        let report = match document_bounds(&document) {
            Ok(bounds) => {
                merged = Some(merged.map_or(bounds, |m| m.merge(bounds)));
                BoundsReport::found(display, bounds, precision)
            }
            Err(e) => BoundsReport::empty(display, e.to_string()),
        };
        reports.push(report);
    }

    let total = args.merge.then(|| match merged {
        Some(bounds) => BoundsReport::found("total".to_string(), bounds, precision),
        None => BoundsReport::empty("total".to_string(), "no coordinates found".to_string()),
    });

    if args.json {
        print_json(reports, total, args.pretty)?;
    } else {
        for report in &reports {
            println!("{}", report.text_line(precision));
        }
        if let Some(total) = total {
            println!("{}", total.text_line(precision));
        }
    }

    Ok(())
}

fn print_json(
    reports: Vec<BoundsReport>,
    total: Option<BoundsReport>,
    pretty: bool,
) -> Result<()> {
    let formatted = match total {
        Some(total) => {
            let output = MergedOutput {
                files: reports,
                total,
            };
            if pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            }
        }
        None => {
            if pretty {
                serde_json::to_string_pretty(&reports)?
            } else {
                serde_json::to_string(&reports)?
            }
        }
    };

    println!("{}", formatted);
    Ok(())
}
