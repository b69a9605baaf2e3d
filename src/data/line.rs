use super::{IndexEdge, Point, VertIdx};

/// Undirected mesh edge with its squared length cached.
///
/// Two lines are equal when they join the same pair of vertices, whatever
/// the endpoint order or the cached length.
#[derive(Debug, Clone, Copy)]
pub struct MeshLine {
  pub edge: IndexEdge,
  pub squared_length: f64,
}

impl MeshLine {
  pub fn new(a: VertIdx, b: VertIdx, vertices: &[Point<f64, 2>]) -> MeshLine {
    MeshLine {
      edge: IndexEdge::new(a, b),
      squared_length: vertices[a.0].squared_euclidean_distance(&vertices[b.0]),
    }
  }

  pub fn length(&self) -> f64 {
    self.squared_length.sqrt()
  }

  pub fn is_endpoint(&self, v: VertIdx) -> bool {
    self.edge.contains(v)
  }

  /// The `count - 1` interior points splitting the line into `count` equal parts.
  pub fn division_points<'a>(
    &self,
    vertices: &'a [Point<f64, 2>],
    count: usize,
  ) -> impl Iterator<Item = Point<f64, 2>> + 'a {
    let a = vertices[self.edge.min.0];
    let b = vertices[self.edge.max.0];
    (1..count).map(move |i| a.lerp(&b, i as f64 / count as f64))
  }
}

impl PartialEq for MeshLine {
  fn eq(&self, other: &MeshLine) -> bool {
    self.edge == other.edge
  }
}
impl Eq for MeshLine {}

impl std::hash::Hash for MeshLine {
  fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
    self.edge.hash(state)
  }
}
