use glam::DVec2;

/// Returns true if `a` and `b` have exactly the same coordinates. There is no
/// tolerance: two computations of the same point that differ in the last bit
/// are different points. Every point comparison in the crate goes through
/// here.
#[allow(clippy::float_cmp)]
pub fn exactly_equal(a: DVec2, b: DVec2) -> bool {
  a.x == b.x && a.y == b.y
}

/// A closed, axis-aligned box.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bounds {
  pub min: DVec2,
  pub max: DVec2,
}

impl Bounds {
  /// The smallest box containing both `a` and `b`.
  pub fn from_points(a: DVec2, b: DVec2) -> Self {
    Self { min: a.min(b), max: a.max(b) }
  }

  /// Returns true if the boxes share at least one point. Touching edges count
  /// as overlapping.
  pub fn overlaps(&self, other: &Bounds) -> bool {
    !(other.max.x < self.min.x
      || other.min.x > self.max.x
      || other.max.y < self.min.y
      || other.min.y > self.max.y)
  }

  /// Returns true if `point` is inside the box or on its boundary.
  pub fn contains(&self, point: DVec2) -> bool {
    point.x >= self.min.x
      && point.x <= self.max.x
      && point.y >= self.min.y
      && point.y <= self.max.y
  }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod test;
