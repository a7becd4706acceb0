use thiserror::Error;

/// An axis of the model plane.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
  X,
  Y,
}

impl std::fmt::Display for Axis {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Axis::X => f.write_str("x"),
      Axis::Y => f.write_str("y"),
    }
  }
}

/// Errors from checked construction, and from turning an ambiguous crossing
/// into a number.
#[derive(Debug, Error, PartialEq)]
pub enum ChordError {
  /// A cell coordinate was NaN or infinite.
  #[error("cell coordinate `{name}` is not finite: {value}")]
  NonFiniteCoordinate { name: &'static str, value: f64 },

  /// The cell's minimum corner is past its maximum corner along `axis`.
  #[error("cell is inverted along {axis}: min {min} > max {max}")]
  InvertedCell { axis: Axis, min: f64, max: f64 },

  /// More than two distinct points of the ray were found on the cell, so the
  /// chord cannot be resolved.
  #[error("ray crossing of the cell is ambiguous")]
  AmbiguousCrossing,
}
