//! Pure document transforms.
//!
//! Every edit is an explicit `&str -> String` function with no hidden state;
//! the read-modify-write plumbing lives in the CLI layer so the substitution
//! logic stays deterministic and testable on its own.
//!
//! # Modules
//!
//! - [`viewbox`]: viewBox replacement/insertion and stretch mode
//! - [`aspect`]: preserveAspectRatio stripping
//! - [`stroke`]: stroke-width and stroke color substitution
//! - [`color`]: hex color parsing and normalization

pub mod aspect;
pub mod color;
pub mod stroke;
pub mod viewbox;
