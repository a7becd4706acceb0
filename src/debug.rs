use glam::DVec2;

use crate::{
  cell::Cell,
  crossing::{accept_points, candidate_points, Crossing},
  ray::Ray,
  ChordTime,
};

/// Internal data that is used to classify a crossing.
#[derive(Debug, Clone, PartialEq)]
pub enum DebugData {
  /// The bounds of the ray did not overlap the cell, so no points were
  /// computed.
  Rejected,
  /// Points were computed and filtered.
  Classified {
    /// Every candidate point, in the order it was generated.
    candidates: Vec<DVec2>,
    /// The candidates inside both the cell and the ray's bounds, without
    /// exact duplicates.
    accepted: Vec<DVec2>,
  },
}

/// Same as [`crate::chord_travel_time`], but also returns the points the
/// result was derived from.
pub fn chord_travel_time_with_debug(
  slowness: f64,
  cell: &Cell,
  ray: &Ray,
) -> (ChordTime, DebugData) {
  let ray_bounds = ray.bounds();
  if !ray_bounds.overlaps(&cell.bounds()) {
    return (ChordTime::NoOverlap, DebugData::Rejected);
  }

  let candidates = candidate_points(cell, ray);
  let accepted = accept_points(cell, &ray_bounds, candidates.as_slice());
  let time = Crossing::from_accepted(accepted.as_slice()).travel_time(slowness);

  (
    time,
    DebugData::Classified {
      candidates: candidates.as_slice().to_vec(),
      accepted: accepted.as_slice().to_vec(),
    },
  )
}

#[cfg(test)]
#[path = "debug_test.rs"]
mod test;
