use glam::DVec2;

use crate::{
  cell::Cell,
  common::{exactly_equal, Bounds},
  ray::{Orientation, Ray},
  ChordTime,
};

/// The most candidate points any ray can produce: four edge crossings plus
/// the source and the receiver.
pub const MAX_CANDIDATES: usize = 6;

/// A fixed-capacity list of points, kept on the stack.
#[derive(Clone, Copy, Debug)]
pub struct PointBuffer {
  points: [DVec2; MAX_CANDIDATES],
  len: usize,
}

impl PointBuffer {
  pub const fn new() -> Self {
    Self { points: [DVec2::ZERO; MAX_CANDIDATES], len: 0 }
  }

  /// Appends `point`. Panics if the buffer is full, which the candidate
  /// generation never does.
  pub fn push(&mut self, point: DVec2) {
    assert!(self.len < MAX_CANDIDATES, "point buffer is full");
    self.points[self.len] = point;
    self.len += 1;
  }

  /// Appends `point` unless an exactly equal point is already present.
  /// Returns whether the point was added.
  pub fn push_unique(&mut self, point: DVec2) -> bool {
    if self.as_slice().iter().any(|&existing| exactly_equal(existing, point)) {
      return false;
    }
    self.push(point);
    true
  }

  pub fn as_slice(&self) -> &[DVec2] {
    &self.points[..self.len]
  }
}

impl Default for PointBuffer {
  fn default() -> Self {
    Self::new()
  }
}

/// The part of a ray inside a cell.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chord {
  pub start: DVec2,
  pub end: DVec2,
}

impl Chord {
  pub fn length(&self) -> f64 {
    self.start.distance(self.end)
  }
}

/// How a ray crosses a cell.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossing {
  /// Exactly two distinct points of the ray were found on or inside the cell.
  Chord(Chord),
  /// The ray misses the cell, or touches it at a single point.
  NoOverlap,
  /// More than two distinct points were found, usually because the same
  /// boundary point was computed two ways with different rounding.
  Ambiguous,
}

impl Crossing {
  /// Finds where `ray` crosses `cell`.
  pub fn find(cell: &Cell, ray: &Ray) -> Crossing {
    let ray_bounds = ray.bounds();
    if !ray_bounds.overlaps(&cell.bounds()) {
      return Crossing::NoOverlap;
    }

    let candidates = candidate_points(cell, ray);
    let accepted = accept_points(cell, &ray_bounds, candidates.as_slice());
    Crossing::from_accepted(accepted.as_slice())
  }

  /// Classifies a crossing by its accepted points.
  pub(crate) fn from_accepted(accepted: &[DVec2]) -> Crossing {
    match accepted {
      [start, end] => Crossing::Chord(Chord { start: *start, end: *end }),
      [] | [_] => Crossing::NoOverlap,
      _ => Crossing::Ambiguous,
    }
  }

  /// Converts the crossing to a travel time through a cell with `slowness`.
  pub fn travel_time(&self, slowness: f64) -> ChordTime {
    match self {
      Crossing::Chord(chord) => ChordTime::Time(chord.length() * slowness),
      Crossing::NoOverlap => ChordTime::NoOverlap,
      Crossing::Ambiguous => ChordTime::Ambiguous,
    }
  }
}

/// Computes the points that may lie on both the ray and the cell: where the
/// ray's line meets the lines of the cell's edges, plus the ray's own
/// endpoints (so rays starting or ending inside the cell are covered). None
/// of these are filtered yet.
pub fn candidate_points(cell: &Cell, ray: &Ray) -> PointBuffer {
  let mut candidates = PointBuffer::new();
  let Ray { source, receiver } = *ray;

  match ray.orientation() {
    Orientation::Vertical => {
      candidates.push(receiver);
      candidates.push(DVec2::new(receiver.x, source.y));
      candidates.push(DVec2::new(receiver.x, cell.min.y));
      candidates.push(DVec2::new(receiver.x, cell.max.y));
    }
    Orientation::Horizontal => {
      candidates.push(receiver);
      candidates.push(DVec2::new(source.x, receiver.y));
      candidates.push(DVec2::new(cell.min.x, receiver.y));
      candidates.push(DVec2::new(cell.max.x, receiver.y));
    }
    Orientation::Oblique { slope, intercept } => {
      candidates.push(DVec2::new(cell.min.x, slope * cell.min.x + intercept));
      candidates.push(DVec2::new(cell.max.x, slope * cell.max.x + intercept));
      candidates.push(DVec2::new((cell.min.y - intercept) / slope, cell.min.y));
      candidates.push(DVec2::new((cell.max.y - intercept) / slope, cell.max.y));
      candidates.push(source);
      candidates.push(receiver);
    }
  }

  candidates
}

/// Keeps the candidates that are inside both the cell and `ray_bounds`,
/// dropping exact duplicates. The order of first appearance is preserved.
pub fn accept_points(cell: &Cell, ray_bounds: &Bounds, candidates: &[DVec2]) -> PointBuffer {
  let mut accepted = PointBuffer::new();
  for &point in candidates {
    if cell.contains(point) && ray_bounds.contains(point) {
      accepted.push_unique(point);
    }
  }
  accepted
}

#[cfg(test)]
#[path = "crossing_test.rs"]
mod test;
