// This module contains strategies and fixtures for:
//  * points
//  * seeded point clouds
//  * boundary loops
// A Strategy is a way to generate a shrinkable value.
use crate::data::{BoundaryLoop, Point};

use array_init::array_init;
use proptest::prelude::*;
use rand::Rng;
use rand::SeedableRng;

///////////////////////////////////////////////////////////////////////////////
// Points

const COORD_RANGE: std::ops::Range<f64> = -1.0e3..1.0e3;

/// Points with finite coordinates in a range where squared distances cannot overflow.
pub fn any_finite() -> impl Strategy<Value = Point<f64, 2>> {
  (COORD_RANGE, COORD_RANGE).prop_map(|(x, y)| Point::new([x, y]))
}

/// `n` points drawn uniformly from `[0, 100)^2` with a fixed seed.
pub fn random_cloud(n: usize, seed: u64) -> Vec<Point<f64, 2>> {
  let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
  (0..n)
    .map(|_| {
      let unit: Point<f64, 2> = rng.gen();
      Point::new(array_init(|i| unit[i] * 100.0))
    })
    .collect()
}

///////////////////////////////////////////////////////////////////////////////
// Loops

/// Closed axis-aligned square, counter-clockwise.
pub fn square(x0: f64, y0: f64, side: f64) -> BoundaryLoop {
  BoundaryLoop::new_unchecked(vec![
    Point::new([x0, y0]),
    Point::new([x0 + side, y0]),
    Point::new([x0 + side, y0 + side]),
    Point::new([x0, y0 + side]),
    Point::new([x0, y0]),
  ])
}

/// The same ring walked the other way round.
pub fn reversed(ring: BoundaryLoop) -> BoundaryLoop {
  let mut points = ring.points().to_vec();
  points.reverse();
  BoundaryLoop::new_unchecked(points)
}

/// Squares with a side between 1 and 20, anchored near the origin.
pub fn any_square() -> impl Strategy<Value = BoundaryLoop> {
  (-10i32..10, -10i32..10, 1i32..20)
    .prop_map(|(x, y, side)| square(f64::from(x), f64::from(y), f64::from(side)))
}
