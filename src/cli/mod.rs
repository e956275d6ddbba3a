//! Command-line interface module.

mod args;
pub mod bounds;
pub mod common;
pub mod edit;

pub use args::{BoundsArgs, Cli, Commands, CropArgs, EditIoArgs, StrokeArgs};
