//! Bounding box aggregation.
//!
//! Folds the points recovered from every `d` attribute of a document into
//! the component-wise min/max union. The box is always derived, recomputed
//! per invocation rather than cached.

use serde::Serialize;
use thiserror::Error;

use super::path::{Point, path_points};
use super::scan::path_data;

/// Errors from bounding box aggregation.
#[derive(Debug, Error, PartialEq)]
pub enum BoundsError {
    /// The document has no `d` attributes, or none of them carry an
    /// extractable coordinate. Distinct from a degenerate (zero-area) box.
    #[error("no coordinates found")]
    NoCoordinatesFound,
}

/// The minimal axis-aligned rectangle containing a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// A box covering exactly one point.
    pub const fn from_point(p: Point) -> Self {
        Self {
            min_x: p.x,
            max_x: p.x,
            min_y: p.y,
            max_y: p.y,
        }
    }

    /// Grow the box to include a point.
    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    /// Union of two boxes.
    pub fn merge(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Fold a point sequence into a box. `None` when the sequence is empty.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let mut bounds = Self::from_point(points.next()?);
        for p in points {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Format as a `viewBox` value: `"min_x min_y width height"`.
    pub fn to_viewbox(&self, precision: usize) -> String {
        format!(
            "{:.p$} {:.p$} {:.p$} {:.p$}",
            self.min_x,
            self.min_y,
            self.width(),
            self.height(),
            p = precision,
        )
    }
}

/// Bounding box of a single path-data string.
pub fn path_bounds(d: &str) -> Option<BoundingBox> {
    BoundingBox::from_points(path_points(d))
}

/// Bounding box across every `d` attribute in a document.
///
/// Each attribute is extracted independently; the result is the union of
/// all per-attribute point sets.
pub fn document_bounds(document: &str) -> Result<BoundingBox, BoundsError> {
    path_data(document)
        .filter_map(path_bounds)
        .reduce(BoundingBox::merge)
        .ok_or(BoundsError::NoCoordinatesFound)
}
