use super::{DirectedIndexEdge, Point};

/// Position of a vertex in the mesher's vertex list.
///
/// The index is the vertex's identity: it never changes once assigned, and
/// edges and faces refer to vertices only through it.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Default)]
pub struct VertIdx(pub usize);
impl std::fmt::Debug for VertIdx {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(fmt, "v{}", self.0)
  }
}

/// An ordered triple of vertex indices.
#[derive(PartialEq, Eq, Clone, Copy, Default)]
pub struct Face {
  pub vertices: [VertIdx; 3],
}

impl std::fmt::Debug for Face {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    let [a, b, c] = self.vertices;
    write!(fmt, "Face({}, {}, {})", a.0, b.0, c.0)
  }
}

impl Face {
  pub fn new(a: VertIdx, b: VertIdx, c: VertIdx) -> Face {
    Face {
      vertices: [a, b, c],
    }
  }

  pub fn contains(&self, v: VertIdx) -> bool {
    self.vertices.contains(&v)
  }

  /// The three edges `(v1,v2)`, `(v2,v3)`, `(v3,v1)`.
  pub fn edges(&self) -> [DirectedIndexEdge; 3] {
    let [a, b, c] = self.vertices;
    [
      DirectedIndexEdge::new(a, b),
      DirectedIndexEdge::new(b, c),
      DirectedIndexEdge::new(c, a),
    ]
  }

  /// The two vertices of the face other than `v`.
  pub fn others(&self, v: VertIdx) -> impl Iterator<Item = VertIdx> + '_ {
    self.vertices.iter().copied().filter(move |&u| u != v)
  }

  pub fn view<'a>(&self, vertices: &'a [Point<f64, 2>]) -> TriangleView<'a> {
    let [a, b, c] = self.vertices;
    TriangleView([&vertices[a.0], &vertices[b.0], &vertices[c.0]])
  }
}

/// Borrowed coordinates of a triangle.
#[derive(Debug, Clone, Copy)]
pub struct TriangleView<'a>(pub [&'a Point<f64, 2>; 3]);

impl<'a> TriangleView<'a> {
  pub fn new(pts: [&'a Point<f64, 2>; 3]) -> TriangleView<'a> {
    TriangleView(pts)
  }

  pub fn centroid(&self) -> Point<f64, 2> {
    let [a, b, c] = self.0;
    Point::new([(a[0] + b[0] + c[0]) / 3.0, (a[1] + b[1] + c[1]) / 3.0])
  }

  pub fn signed_area(&self) -> f64 {
    self.signed_area_2x() / 2.0
  }

  pub fn signed_area_2x(&self) -> f64 {
    let [a, b, c] = self.0;
    let (ax, ay) = (a[0], a[1]);
    let (bx, by) = (b[0], b[1]);
    let (cx, cy) = (c[0], c[1]);
    ax * by - bx * ay + bx * cy - cx * by + cx * ay - ax * cy
    // x1*y2 - x2*y1 +
    // x2*y3 - x3*y2 +
    // x3*y1 - x1*y3
  }

  /// Squared lengths of `(v1,v2)`, `(v2,v3)` and `(v3,v1)`.
  pub fn squared_edge_lengths(&self) -> [f64; 3] {
    let [a, b, c] = self.0;
    [
      a.squared_euclidean_distance(b),
      b.squared_euclidean_distance(c),
      c.squared_euclidean_distance(a),
    ]
  }

  /// Shape regularity `(l2+l3-l1)(l3+l1-l2)(l1+l2-l3) / (l1*l2*l3)`.
  ///
  /// One for an equilateral triangle, zero for a degenerate one.
  pub fn quality(&self) -> f64 {
    let [l1, l2, l3] = self.squared_edge_lengths().map(f64::sqrt);
    (l2 + l3 - l1) * (l3 + l1 - l2) * (l1 + l2 - l3) / (l1 * l2 * l3)
  }
}
