use crate::data::{Face, Point};
use crate::predicates::orientation;

/// Edge length and shape figures of a finished mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshQuality {
  pub min_squared_edge: f64,
  pub max_squared_edge: f64,
  /// Worst [shape regularity](crate::data::TriangleView::quality) of any
  /// element. One means every element is equilateral.
  pub min_quality: f64,
  /// Elements with zero or clockwise area.
  pub inverted: usize,
}

impl MeshQuality {
  /// Scan `faces` once. An empty face list yields infinite minima and zero
  /// maxima.
  pub fn measure(vertices: &[Point<f64, 2>], faces: &[Face]) -> MeshQuality {
    let mut quality = MeshQuality {
      min_squared_edge: f64::INFINITY,
      max_squared_edge: 0.0,
      min_quality: f64::INFINITY,
      inverted: 0,
    };
    for face in faces {
      let view = face.view(vertices);
      for len in view.squared_edge_lengths() {
        quality.min_squared_edge = quality.min_squared_edge.min(len);
        quality.max_squared_edge = quality.max_squared_edge.max(len);
      }
      quality.min_quality = quality.min_quality.min(view.quality());
      let [a, b, c] = view.0;
      if !orientation(a, b, c).is_ccw() {
        quality.inverted += 1;
      }
    }
    quality
  }

  pub fn min_edge(&self) -> f64 {
    self.min_squared_edge.sqrt()
  }

  pub fn max_edge(&self) -> f64 {
    self.max_squared_edge.sqrt()
  }
}
