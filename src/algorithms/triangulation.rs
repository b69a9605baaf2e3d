// Bowyer-Watson incremental insertion:
//   http://paulbourke.net/papers/triangulate/
use std::collections::HashMap;
use std::ops::Range;

use crate::data::{
  winding_sum, BoundaryLoop, DirectedIndexEdge, Face, IndexEdge, Point, VertIdx,
};
use crate::predicates::in_circumcircle;
use crate::progress::PhaseReporter;
use crate::utils::{SparseIndex, SparseVec};
use crate::Error;

/// How far the scaffold triangle reaches past the bounding box, in units of
/// the box's larger side.
pub const SUPER_TRIANGLE_SCALE: f64 = 20.0;

const SUPER_BASE: usize = usize::MAX - 2;

impl VertIdx {
  /// The three scaffold vertices live at the top of the index space so that
  /// real vertices keep their position in the vertex list as their index.
  pub fn is_super(self) -> bool {
    self.0 >= SUPER_BASE
  }
}

impl Face {
  pub fn is_super(&self) -> bool {
    self.vertices.iter().any(|v| v.is_super())
  }
}

/// A Delaunay triangulation that grows one vertex at a time.
///
/// The triangulation is enclosed in a scaffold triangle that is large enough
/// to contain every vertex. Faces touching the scaffold are part of the
/// working set but are never reported by [`Triangulation::real_faces`] or
/// [`Triangulation::trimmed_faces`].
pub struct Triangulation {
  vertices: Vec<Point<f64, 2>>,
  scaffold: [Point<f64, 2>; 3],
  faces: SparseVec<Face>,
  epsilon: f64,
}

impl Triangulation {
  /// Start a triangulation enclosing `vertices`. No vertex is inserted yet.
  ///
  /// Later vertices must fall inside the bounding box of these.
  pub fn new(vertices: Vec<Point<f64, 2>>, epsilon: f64) -> Triangulation {
    let scaffold = super_triangle(&vertices);
    let mut faces = SparseVec::new();
    faces.push(Face::new(
      VertIdx(SUPER_BASE),
      VertIdx(SUPER_BASE + 1),
      VertIdx(SUPER_BASE + 2),
    ));
    Triangulation {
      vertices,
      scaffold,
      faces,
      epsilon,
    }
  }

  pub fn vertices(&self) -> &[Point<f64, 2>] {
    &self.vertices
  }

  pub fn into_vertices(self) -> Vec<Point<f64, 2>> {
    self.vertices
  }

  pub fn point(&self, v: VertIdx) -> &Point<f64, 2> {
    if v.is_super() {
      &self.scaffold[v.0 - SUPER_BASE]
    } else {
      &self.vertices[v.0]
    }
  }

  /// Queue vertices for insertion. Returns the index range they occupy.
  pub fn extend<I>(&mut self, points: I) -> Range<usize>
  where
    I: IntoIterator<Item = Point<f64, 2>>,
  {
    let start = self.vertices.len();
    self.vertices.extend(points);
    start..self.vertices.len()
  }

  /// Insert every vertex from `start` to the end of the vertex list.
  pub fn insert_from(&mut self, start: usize, reporter: &mut PhaseReporter) -> Result<(), Error> {
    let end = self.vertices.len();
    for (done, v) in (start..end).enumerate() {
      self.insert(VertIdx(v))?;
      reporter.step(done + 1)?;
    }
    log::trace!(
      "inserted {} vertices, {} faces in working set",
      end.saturating_sub(start),
      self.faces.len()
    );
    Ok(())
  }

  /// Insert a single vertex, re-triangulating the cavity it opens up.
  ///
  /// # Errors
  ///
  /// [`Error::NoTriangulation`] if no circumcircle contains the vertex, which
  /// happens when the only candidate faces are degenerate.
  pub fn insert(&mut self, v: VertIdx) -> Result<(), Error> {
    let p = self.vertices[v.0];
    let cavity: Vec<SparseIndex> = self
      .faces
      .iter_indexed()
      .filter(|(_, face)| self.circumcircle_contains(face, &p))
      .map(|(idx, _)| idx)
      .collect();
    if cavity.is_empty() {
      log::warn!("vertex {:?} at {:?} is outside every circumcircle", v, p);
      return Err(Error::NoTriangulation);
    }
    let mut edges = Vec::with_capacity(cavity.len() * 3);
    for idx in cavity {
      edges.extend(self.faces.remove(idx).edges());
    }
    for edge in star_boundary(&edges) {
      self.faces.push(Face::new(edge.src, edge.dst, v));
    }
    Ok(())
  }

  fn circumcircle_contains(&self, face: &Face, p: &Point<f64, 2>) -> bool {
    let [a, b, c] = face.vertices;
    in_circumcircle(p, self.point(a), self.point(b), self.point(c), self.epsilon)
  }

  /// Every face in the working set, scaffold faces included.
  pub fn faces(&self) -> impl Iterator<Item = &Face> + '_ {
    self.faces.iter()
  }

  /// Faces whose three corners are real vertices.
  pub fn real_faces(&self) -> impl Iterator<Item = Face> + '_ {
    self.faces.iter().filter(|face| !face.is_super()).copied()
  }

  /// Real faces whose centroid has a winding number sum of exactly 1 over
  /// `loops`.
  ///
  /// Outer rings run counter-clockwise and holes clockwise. Without loops
  /// every real face is kept.
  pub fn trimmed_faces(&self, loops: &[BoundaryLoop]) -> Vec<Face> {
    self
      .real_faces()
      .filter(|face| {
        loops.is_empty() || winding_sum(loops, &face.view(&self.vertices).centroid()) == 1
      })
      .collect()
  }
}

/// Edges of the cavity outline, in the order they were encountered.
///
/// An edge shared by two removed faces occurs once in each direction and
/// cancels out. What is left is the outline of the cavity.
fn star_boundary(edges: &[DirectedIndexEdge]) -> Vec<DirectedIndexEdge> {
  let mut seen: HashMap<IndexEdge, usize> = HashMap::with_capacity(edges.len());
  for &edge in edges {
    *seen.entry(IndexEdge::from(edge)).or_insert(0) += 1;
  }
  edges
    .iter()
    .copied()
    .filter(|&edge| seen[&IndexEdge::from(edge)] == 1)
    .collect()
}

/// Counter-clockwise triangle around the bounding box of `vertices`.
fn super_triangle(vertices: &[Point<f64, 2>]) -> [Point<f64, 2>; 3] {
  let mut min = [f64::INFINITY; 2];
  let mut max = [f64::NEG_INFINITY; 2];
  for pt in vertices {
    for i in 0..2 {
      min[i] = min[i].min(pt[i]);
      max[i] = max[i].max(pt[i]);
    }
  }
  if vertices.is_empty() {
    min = [0.0; 2];
    max = [0.0; 2];
  }
  let dmax = (max[0] - min[0]).max(max[1] - min[1]);
  let dmax = if dmax > 0.0 { dmax } else { 1.0 };
  let xmid = (min[0] + max[0]) / 2.0;
  let ymid = (min[1] + max[1]) / 2.0;
  let reach = SUPER_TRIANGLE_SCALE * dmax;
  [
    Point::new([xmid - reach, ymid - dmax]),
    Point::new([xmid + reach, ymid - dmax]),
    Point::new([xmid, ymid + reach]),
  ]
}
