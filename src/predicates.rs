//! Geometric predicates used by the mesher.
use crate::data::Point;
use crate::Orientation;

/// Whether `p` lies inside or on the circumcircle of `a`, `b`, `c`.
///
/// The circumcenter is found by intersecting the perpendicular bisectors of
/// `ab` and `bc`. When one of those edges is horizontal (its end points'
/// y-coordinates differ by less than `epsilon`) its bisector is vertical and
/// the other bisector is used to solve for the center instead. A triangle
/// whose three vertices share the same y-coordinate has no usable
/// circumcircle and never contains anything.
///
/// The radius is measured to `b`. The result depends only on the argument
/// order and is reproducible bit for bit.
///
/// # Examples
///
/// ```rust
/// # use iterative_mesher::data::Point;
/// # use iterative_mesher::predicates::in_circumcircle;
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([2.0, 0.0]);
/// let c = Point::new([0.0, 2.0]);
/// assert!(in_circumcircle(&Point::new([1.0, 1.0]), &a, &b, &c, 1e-6));
/// assert!(in_circumcircle(&Point::new([2.0, 2.0]), &a, &b, &c, 1e-6));
/// assert!(!in_circumcircle(&Point::new([3.0, 3.0]), &a, &b, &c, 1e-6));
/// ```
pub fn in_circumcircle(
  p: &Point<f64, 2>,
  a: &Point<f64, 2>,
  b: &Point<f64, 2>,
  c: &Point<f64, 2>,
  epsilon: f64,
) -> bool {
  match circumcircle(a, b, c, epsilon) {
    Some((center, radius_sq)) => p.squared_euclidean_distance(&center) <= radius_sq,
    None => false,
  }
}

/// Circumcenter and squared circumradius of `a`, `b`, `c`, or `None` for a
/// horizontal degenerate triangle. See [`in_circumcircle`].
///
/// Collinear but non-horizontal input produces non-finite values, which make
/// every containment test fail.
pub fn circumcircle(
  a: &Point<f64, 2>,
  b: &Point<f64, 2>,
  c: &Point<f64, 2>,
  epsilon: f64,
) -> Option<(Point<f64, 2>, f64)> {
  let [x1, y1] = a.array;
  let [x2, y2] = b.array;
  let [x3, y3] = c.array;

  let flat_ab = (y1 - y2).abs() < epsilon;
  let flat_bc = (y2 - y3).abs() < epsilon;

  let (xc, yc) = match (flat_ab, flat_bc) {
    (true, true) => return None,
    (true, false) => {
      let m2 = -(x3 - x2) / (y3 - y2);
      let mx2 = (x2 + x3) / 2.0;
      let my2 = (y2 + y3) / 2.0;
      let xc = (x2 + x1) / 2.0;
      (xc, m2 * (xc - mx2) + my2)
    }
    (false, true) => {
      let m1 = -(x2 - x1) / (y2 - y1);
      let mx1 = (x1 + x2) / 2.0;
      let my1 = (y1 + y2) / 2.0;
      let xc = (x3 + x2) / 2.0;
      (xc, m1 * (xc - mx1) + my1)
    }
    (false, false) => {
      let m1 = -(x2 - x1) / (y2 - y1);
      let m2 = -(x3 - x2) / (y3 - y2);
      let mx1 = (x1 + x2) / 2.0;
      let mx2 = (x2 + x3) / 2.0;
      let my1 = (y1 + y2) / 2.0;
      let my2 = (y2 + y3) / 2.0;
      let xc = (m1 * mx1 - m2 * mx2 + my2 - my1) / (m1 - m2);
      (xc, m1 * (xc - mx1) + my1)
    }
  };

  let center = Point::new([xc, yc]);
  Some((center, b.squared_euclidean_distance(&center)))
}

/// Winding number of a closed ring of edges around `pt`.
///
/// An edge crossing the horizontal line through `pt` upwards with `pt` on its
/// left counts +1; crossing downwards with `pt` on its right counts -1.
pub fn winding_number<'a, I>(edges: I, pt: &Point<f64, 2>) -> i32
where
  I: IntoIterator<Item = (&'a Point<f64, 2>, &'a Point<f64, 2>)>,
{
  let y = pt[1];
  let mut wn = 0;
  for (src, dst) in edges {
    if src[1] <= y {
      if dst[1] > y && is_left(src, dst, pt) > 0.0 {
        wn += 1;
      }
    } else if dst[1] <= y && is_left(src, dst, pt) < 0.0 {
      wn -= 1;
    }
  }
  wn
}

// Twice the signed area of (a, b, p). Positive if p is left of a->b.
fn is_left(a: &Point<f64, 2>, b: &Point<f64, 2>, p: &Point<f64, 2>) -> f64 {
  (b[0] - a[0]) * (p[1] - a[1]) - (p[0] - a[0]) * (b[1] - a[1])
}

/// Exact orientation of three points, using adaptive precision arithmetic.
pub fn orientation(p: &Point<f64, 2>, q: &Point<f64, 2>, r: &Point<f64, 2>) -> Orientation {
  let orient = geometry_predicates::predicates::orient2d(p.array, q.array, r.array);
  if orient > 0.0 {
    Orientation::CounterClockWise
  } else if orient < 0.0 {
    Orientation::ClockWise
  } else {
    Orientation::CoLinear
  }
}
