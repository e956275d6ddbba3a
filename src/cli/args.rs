//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// svgbox CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: svgbox.toml)
    #[arg(short = 'C', long, default_value = "svgbox.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate the coordinate bounding box of SVG path data
    #[command(visible_alias = "b")]
    Bounds {
        #[command(flatten)]
        args: BoundsArgs,
    },

    /// Rewrite the viewBox attribute
    #[command(visible_alias = "c")]
    Crop {
        #[command(flatten)]
        args: CropArgs,

        #[command(flatten)]
        io: EditIoArgs,
    },

    /// Rewrite stroke-width and stroke color attributes
    #[command(visible_alias = "s")]
    Stroke {
        #[command(flatten)]
        args: StrokeArgs,

        #[command(flatten)]
        io: EditIoArgs,
    },

    /// Strip preserveAspectRatio attributes
    #[command(visible_alias = "f")]
    Fix {
        #[command(flatten)]
        io: EditIoArgs,
    },
}

/// Bounds command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BoundsArgs {
    /// SVG files to scan. Use `-` to read paths from stdin.
    #[arg(value_name = "PATH", required = true, value_hint = clap::ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    /// Output JSON instead of text
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,

    /// Also report the union across all input files
    #[arg(short, long)]
    pub merge: bool,

    /// Decimal places in reported values (overrides config)
    #[arg(short = 'n', long)]
    pub precision: Option<usize>,
}

/// Crop command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CropArgs {
    /// Explicit viewBox value, e.g. "0.00 80.00 1376.00 600.00"
    #[arg(short = 'b', long, value_name = "RECT", conflicts_with = "fit")]
    pub viewbox: Option<String>,

    /// Fit the viewBox to the computed coordinate bounding box
    #[arg(short, long)]
    pub fit: bool,

    /// Padding around the fitted bounds (overrides config)
    #[arg(short, long, requires = "fit")]
    pub margin: Option<f64>,

    /// Append preserveAspectRatio="none" after the viewBox
    #[arg(short, long)]
    pub stretch: bool,
}

/// Stroke command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct StrokeArgs {
    /// Replacement stroke width (overrides config)
    #[arg(short, long)]
    pub width: Option<f64>,

    /// Replacement stroke color as six-digit hex (overrides config)
    #[arg(short = 'c', long = "hex", value_name = "HEX")]
    pub color: Option<String>,
}

/// Shared I/O arguments for the editing commands.
///
/// Edits rewrite files in place by default; `--output` redirects a single
/// input, `--dry` prints the transformed document instead of writing.
#[derive(clap::Args, Debug, Clone)]
pub struct EditIoArgs {
    /// SVG files to edit. Use `-` to read paths from stdin.
    #[arg(value_name = "PATH", required = true, value_hint = clap::ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    /// Write the result here instead of editing in place (single input only)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Print the transformed document to stdout without writing
    #[arg(short, long)]
    pub dry: bool,
}
