use glam::DVec2;

use crate::common::Bounds;
use crate::error::{Axis, ChordError};

/// An axis-aligned rectangular cell of the model, given by its minimum and
/// maximum corners. The cell is closed: its edges belong to it.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
  /// The corner with the smallest coordinates, `(x1, y1)`.
  pub min: DVec2,
  /// The corner with the largest coordinates, `(x2, y2)`.
  pub max: DVec2,
}

impl Cell {
  /// Creates a cell from the corners `(x1, y1)` and `(x2, y2)`. The corners
  /// are used as given: `x1 <= x2` and `y1 <= y2` must hold, or crossings
  /// will silently be wrong. Use [`Cell::try_new`] to have this checked.
  pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
    Self { min: DVec2::new(x1, y1), max: DVec2::new(x2, y2) }
  }

  /// Same as [`Cell::new`], but rejects non-finite coordinates and inverted
  /// corners. Degenerate cells (zero width or height) are allowed.
  pub fn try_new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, ChordError> {
    for (name, value) in [("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)] {
      if !value.is_finite() {
        return Err(ChordError::NonFiniteCoordinate { name, value });
      }
    }
    if x1 > x2 {
      return Err(ChordError::InvertedCell { axis: Axis::X, min: x1, max: x2 });
    }
    if y1 > y2 {
      return Err(ChordError::InvertedCell { axis: Axis::Y, min: y1, max: y2 });
    }
    Ok(Self::new(x1, y1, x2, y2))
  }

  pub fn bounds(&self) -> Bounds {
    Bounds { min: self.min, max: self.max }
  }

  /// Returns true if `point` is inside the cell or on one of its edges.
  pub fn contains(&self, point: DVec2) -> bool {
    self.bounds().contains(point)
  }
}

#[cfg(test)]
#[path = "cell_test.rs"]
mod test;
