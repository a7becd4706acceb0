#![doc = include_str!("../README.md")]

mod cell;
mod common;
mod crossing;
mod error;
mod ray;

#[cfg(feature = "debug")]
pub mod debug;

pub use glam::DVec2;

pub use cell::Cell;
pub use common::Bounds;
pub use crossing::{Chord, Crossing};
pub use error::{Axis, ChordError};
pub use ray::{Orientation, Ray};

/// The travel time of a ray through a single cell.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChordTime {
  /// The ray crosses the cell along a chord; the value is the chord length
  /// times the cell's slowness. This can legitimately be zero (e.g. for a zero
  /// slowness), which is distinct from `NoOverlap`.
  Time(f64),
  /// The ray contributes nothing to this cell.
  NoOverlap,
  /// The crossing could not be resolved to a single chord. The caller decides
  /// how to handle the cell.
  Ambiguous,
}

impl ChordTime {
  /// The sentinel returned by [`compute_chord_travel_time`] for
  /// [`ChordTime::NoOverlap`].
  pub const NO_OVERLAP_SENTINEL: f64 = 0.0;
  /// The sentinel returned by [`compute_chord_travel_time`] for
  /// [`ChordTime::Ambiguous`].
  pub const AMBIGUOUS_SENTINEL: f64 = -1.0;

  /// The travel time, if the ray crosses the cell along a chord.
  pub fn time(&self) -> Option<f64> {
    match self {
      ChordTime::Time(time) => Some(*time),
      _ => None,
    }
  }

  pub fn is_ambiguous(&self) -> bool {
    matches!(self, ChordTime::Ambiguous)
  }

  /// The contribution of this cell to a summed travel time: the time of a
  /// chord, or zero if there is no overlap. An ambiguous crossing is an
  /// error, so a driver can write `total += time.time_or_zero()?` when it
  /// wants ambiguity to abort the sum.
  pub fn time_or_zero(&self) -> Result<f64, ChordError> {
    match self {
      ChordTime::Time(time) => Ok(*time),
      ChordTime::NoOverlap => Ok(0.0),
      ChordTime::Ambiguous => Err(ChordError::AmbiguousCrossing),
    }
  }

  /// Encodes the result as a single number: the time itself, `0.0` for no
  /// overlap and `-1.0` for an ambiguous crossing.
  pub fn to_sentinel(&self) -> f64 {
    match self {
      ChordTime::Time(time) => *time,
      ChordTime::NoOverlap => Self::NO_OVERLAP_SENTINEL,
      ChordTime::Ambiguous => Self::AMBIGUOUS_SENTINEL,
    }
  }

  /// Decodes a value produced by [`ChordTime::to_sentinel`]. A time of zero
  /// cannot be told apart from no overlap, so `0.0` always decodes to
  /// [`ChordTime::NoOverlap`], and `-1.0` always to
  /// [`ChordTime::Ambiguous`].
  #[allow(clippy::float_cmp)]
  pub fn from_sentinel(value: f64) -> Self {
    if value == Self::AMBIGUOUS_SENTINEL {
      ChordTime::Ambiguous
    } else if value == Self::NO_OVERLAP_SENTINEL {
      ChordTime::NoOverlap
    } else {
      ChordTime::Time(value)
    }
  }
}

/// Computes the travel time of `ray` through `cell`, whose slowness is
/// `slowness`, assuming the ray is a straight line.
///
/// The ray meets the cell in a chord if exactly two distinct points of the
/// ray are found on or inside the cell. The points considered are where the
/// ray's line crosses the lines of the cell's edges, and the ray's endpoints.
/// All comparisons are exact, see the crate documentation for the
/// consequences.
pub fn chord_travel_time(slowness: f64, cell: &Cell, ray: &Ray) -> ChordTime {
  let crossing = Crossing::find(cell, ray);
  if crossing == Crossing::Ambiguous {
    tracing::trace!(?cell, ?ray, "ray crossing of cell is ambiguous");
  }
  crossing.travel_time(slowness)
}

/// Same as [`chord_travel_time`], with the cell given as the corners
/// `(cell_x1, cell_y1)` and `(cell_x2, cell_y2)` and the result encoded as a
/// plain number: the travel time, `0.0` if the ray does not contribute, or
/// `-1.0` if the crossing is ambiguous.
#[allow(clippy::too_many_arguments)]
pub fn compute_chord_travel_time(
  slowness: f64,
  cell_x1: f64,
  cell_y1: f64,
  cell_x2: f64,
  cell_y2: f64,
  src_x: f64,
  src_y: f64,
  rec_x: f64,
  rec_y: f64,
) -> f64 {
  chord_travel_time(
    slowness,
    &Cell::new(cell_x1, cell_y1, cell_x2, cell_y2),
    &Ray::new(DVec2::new(src_x, src_y), DVec2::new(rec_x, rec_y)),
  )
  .to_sentinel()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
