use glam::DVec2;

use crate::common::Bounds;

/// A straight ray path between a source and a receiver. Only the segment
/// between the two points is part of the ray. The endpoints may coincide.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
  pub source: DVec2,
  pub receiver: DVec2,
}

/// How a ray's supporting line is described.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Orientation {
  /// The endpoints have exactly the same x coordinate. A ray whose endpoints
  /// coincide is also vertical.
  Vertical,
  /// The endpoints have exactly the same y coordinate (and different x).
  Horizontal,
  /// Any other ray, described by the line `y = slope * x + intercept`.
  Oblique { slope: f64, intercept: f64 },
}

impl Ray {
  pub const fn new(source: DVec2, receiver: DVec2) -> Self {
    Self { source, receiver }
  }

  /// The box with the ray as its diagonal. A point on the ray's line is on
  /// the ray itself iff it is inside these bounds.
  pub fn bounds(&self) -> Bounds {
    Bounds::from_points(self.source, self.receiver)
  }

  /// Classifies the ray. The vertical and horizontal tests are exact: a ray
  /// that is only nearly vertical is oblique, with a slope that may be huge.
  #[allow(clippy::float_cmp)]
  pub fn orientation(&self) -> Orientation {
    let delta = self.receiver - self.source;
    if delta.x == 0.0 {
      Orientation::Vertical
    } else if delta.y == 0.0 {
      Orientation::Horizontal
    } else {
      let slope = delta.y / delta.x;
      Orientation::Oblique { slope, intercept: self.source.y - slope * self.source.x }
    }
  }

  /// The distance between source and receiver.
  pub fn length(&self) -> f64 {
    self.source.distance(self.receiver)
  }

  /// The same path travelled from the receiver to the source.
  pub fn reversed(&self) -> Self {
    Self { source: self.receiver, receiver: self.source }
  }
}

#[cfg(test)]
#[path = "ray_test.rs"]
mod test;
