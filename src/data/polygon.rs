use ordered_float::NotNan;
use std::convert::TryFrom;

use crate::data::Point;
use crate::predicates::winding_number;
use crate::Error;

/// A closed polygon ring: an outer contour or a hole.
///
/// The last point repeats the first. The duplicate is kept so the ring can be
/// walked edge by edge, but it never becomes a mesh vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryLoop {
  pub(crate) points: Vec<Point<f64, 2>>,
}

impl BoundaryLoop {
  /// Validate and wrap a closed ring.
  ///
  /// # Errors
  ///
  /// * [`Error::NanCoordinate`] if any coordinate is NaN or infinite.
  /// * [`Error::OpenLoop`] if the last point differs from the first.
  /// * [`Error::InsufficientVertices`] if fewer than three distinct points remain.
  pub fn new(points: Vec<Point<f64, 2>>) -> Result<BoundaryLoop, Error> {
    let ring = BoundaryLoop::new_unchecked(points);
    ring.validate()?;
    Ok(ring)
  }

  pub fn new_unchecked(points: Vec<Point<f64, 2>>) -> BoundaryLoop {
    BoundaryLoop { points }
  }

  /// Build a ring from an open point sequence, appending the closing point.
  pub fn from_open(mut points: Vec<Point<f64, 2>>) -> Result<BoundaryLoop, Error> {
    if let Some(&first) = points.first() {
      points.push(first);
    }
    BoundaryLoop::new(points)
  }

  pub fn validate(&self) -> Result<(), Error> {
    for pt in &self.points {
      Point::<NotNan<f64>, 2>::try_from(*pt).map_err(|_| Error::NanCoordinate)?;
      if !pt.is_finite() {
        return Err(Error::NanCoordinate);
      }
    }
    match (self.points.first(), self.points.last()) {
      (Some(first), Some(last)) if first == last => {}
      (None, None) => return Err(Error::InsufficientVertices),
      _ => return Err(Error::OpenLoop),
    }
    let open = self.vertices();
    let mut distinct: Vec<&Point<f64, 2>> = Vec::with_capacity(open.len());
    for pt in open {
      if !distinct.contains(&pt) {
        distinct.push(pt);
      }
    }
    if distinct.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    Ok(())
  }

  /// Every point of the ring, closing duplicate included.
  pub fn points(&self) -> &[Point<f64, 2>] {
    &self.points
  }

  /// The points that become mesh vertices: the ring without its closing duplicate.
  pub fn vertices(&self) -> &[Point<f64, 2>] {
    match self.points.len() {
      0 => &self.points,
      n => &self.points[..n - 1],
    }
  }

  pub fn iter_edges(&self) -> impl Iterator<Item = (&Point<f64, 2>, &Point<f64, 2>)> + '_ {
    self.points.windows(2).map(|w| (&w[0], &w[1]))
  }

  /// Winding number of the ring around `pt`. Zero means outside.
  pub fn winding_number(&self, pt: &Point<f64, 2>) -> i32 {
    winding_number(self.iter_edges(), pt)
  }

  pub fn contains(&self, pt: &Point<f64, 2>) -> bool {
    self.winding_number(pt) != 0
  }

  pub fn signed_area(&self) -> f64 {
    self
      .iter_edges()
      .map(|(p, q)| p[0] * q[1] - q[0] * p[1])
      .sum::<f64>()
      / 2.0
  }
}

/// Winding numbers of `pt` summed over `loops`.
///
/// Counter-clockwise rings add one around their interior, clockwise rings
/// subtract one. A point is in the meshed region when the sum is exactly 1:
/// inside a counter-clockwise outer ring and not inside a clockwise hole.
pub fn winding_sum(loops: &[BoundaryLoop], pt: &Point<f64, 2>) -> i32 {
  loops.iter().map(|ring| ring.winding_number(pt)).sum()
}
