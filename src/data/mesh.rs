use super::{Face, Point};

/// The finished mesh: plain coordinate and index arrays.
///
/// `elements` index into `nodes`. Each element lists its corners in the
/// reverse of the order they are stored in while meshing.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh {
  pub nodes: Vec<[f64; 2]>,
  pub elements: Vec<[usize; 3]>,
}

impl Mesh {
  /// Copy `vertices` and `faces` out into a standalone mesh. Neither input is
  /// modified.
  pub fn from_faces(vertices: &[Point<f64, 2>], faces: &[Face]) -> Mesh {
    Mesh {
      nodes: vertices.iter().map(|pt| pt.array).collect(),
      elements: faces
        .iter()
        .map(|face| {
          let [a, b, c] = face.vertices;
          [c.0, b.0, a.0]
        })
        .collect(),
    }
  }

  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn element_count(&self) -> usize {
    self.elements.len()
  }

  /// Corner coordinates of element `idx`, or `None` if it is out of range.
  pub fn element_points(&self, idx: usize) -> Option<[[f64; 2]; 3]> {
    let [a, b, c] = *self.elements.get(idx)?;
    Some([*self.nodes.get(a)?, *self.nodes.get(b)?, *self.nodes.get(c)?])
  }

  /// Every element refers to existing nodes.
  pub fn is_valid(&self) -> bool {
    self
      .elements
      .iter()
      .all(|element| element.iter().all(|&i| i < self.nodes.len()))
  }
}
