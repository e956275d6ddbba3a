//! svgbox - estimate SVG path bounding boxes and retouch attributes.

mod cli;
mod config;
mod edit;
mod logger;
mod svg;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ToolConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = ToolConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Bounds { args } => cli::bounds::run(args, &config),
        Commands::Crop { args, io } => cli::edit::run_crop(args, io, &config),
        Commands::Stroke { args, io } => cli::edit::run_stroke(args, io, &config),
        Commands::Fix { io } => cli::edit::run_fix(io),
    }
}
