//! SVG path-data parsing and bounding box estimation.
//!
//! Everything here is a pure transformation over an in-memory string; file
//! reads and writes live at the CLI boundary.
//!
//! # Modules
//!
//! - [`path`]: path-data tokenizer and per-command coordinate extraction
//! - [`scan`]: `d="..."` attribute scanning over a whole document
//! - [`bounds`]: min/max aggregation into a [`bounds::BoundingBox`]
//!
//! # Pipeline
//!
//! ```text
//! SVG document
//!       │
//!       ▼
//!  ┌────────┐
//!  │  scan  │ ──► d attribute values
//!  └───┬────┘
//!      ▼
//!  ┌────────┐
//!  │  path  │ ──► tokenize + extract (x, y) pairs
//!  └───┬────┘
//!      ▼
//!  ┌────────┐
//!  │ bounds │ ──► component-wise min/max union
//!  └────────┘
//! ```

pub mod bounds;
pub mod path;
pub mod scan;

pub use bounds::{BoundingBox, BoundsError, document_bounds};
