use glam::DVec2;

use crate::cell::Cell;
use crate::error::{Axis, ChordError};

#[test]
fn new_keeps_corners_as_given() {
  let cell = Cell::new(1.0, 2.0, 3.0, 4.0);
  assert_eq!(cell.min, DVec2::new(1.0, 2.0));
  assert_eq!(cell.max, DVec2::new(3.0, 4.0));

  // Not normalized.
  let inverted = Cell::new(3.0, 2.0, 1.0, 4.0);
  assert_eq!(inverted.min, DVec2::new(3.0, 2.0));
}

#[test]
fn try_new_accepts_ordered_and_degenerate_cells() {
  assert_eq!(Cell::try_new(0.0, 0.0, 1.0, 1.0), Ok(Cell::new(0.0, 0.0, 1.0, 1.0)));
  assert_eq!(Cell::try_new(2.0, 0.0, 2.0, 1.0), Ok(Cell::new(2.0, 0.0, 2.0, 1.0)));
}

#[test]
fn try_new_rejects_inverted_cells() {
  assert_eq!(
    Cell::try_new(1.0, 0.0, 0.0, 1.0),
    Err(ChordError::InvertedCell { axis: Axis::X, min: 1.0, max: 0.0 })
  );
  assert_eq!(
    Cell::try_new(0.0, 5.0, 1.0, 1.0),
    Err(ChordError::InvertedCell { axis: Axis::Y, min: 5.0, max: 1.0 })
  );
}

#[test]
fn try_new_rejects_non_finite_coordinates() {
  assert_eq!(
    Cell::try_new(0.0, 0.0, f64::INFINITY, 1.0),
    Err(ChordError::NonFiniteCoordinate { name: "x2", value: f64::INFINITY })
  );
  assert!(matches!(
    Cell::try_new(0.0, f64::NAN, 1.0, 1.0),
    Err(ChordError::NonFiniteCoordinate { name: "y1", .. })
  ));
}

#[test]
fn errors_describe_the_problem() {
  assert_eq!(
    Cell::try_new(0.0, 5.0, 1.0, 1.0).unwrap_err().to_string(),
    "cell is inverted along y: min 5 > max 1"
  );
  assert_eq!(
    ChordError::AmbiguousCrossing.to_string(),
    "ray crossing of the cell is ambiguous"
  );
}

#[test]
fn contains_includes_edges() {
  let cell = Cell::new(0.0, 0.0, 1.0, 2.0);

  assert!(cell.contains(DVec2::new(0.5, 1.5)));
  assert!(cell.contains(DVec2::new(1.0, 2.0)));
  assert!(cell.contains(DVec2::new(0.0, 0.7)));
  assert!(!cell.contains(DVec2::new(0.5, 2.5)));
  assert!(!cell.contains(DVec2::new(-0.5, 1.0)));
}
