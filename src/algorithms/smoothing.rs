use std::collections::{HashMap, HashSet};

use crate::data::{Face, IndexEdge, Point, VertIdx};
use crate::progress::{PhaseReporter, Progress};
use crate::{Error, MesherConfig, SmoothingMode};

/// Relax vertex positions without touching connectivity.
///
/// Vertices below `fixed` are never moved, nor (when
/// [`MesherConfig::pin_mesh_boundary`] is set) are vertices on an edge that
/// only one face uses. Every other vertex is replaced, in index order and in
/// place, by the weighted average of its incident faces as selected by
/// [`MesherConfig::smoothing`]. A vertex with no usable weight keeps its
/// position.
///
/// Runs [`MesherConfig::passes`] passes, each reported as `"smoothing pass N"`.
pub fn smooth(
  vertices: &mut [Point<f64, 2>],
  faces: &[Face],
  fixed: usize,
  config: &MesherConfig,
  progress: &mut dyn Progress,
) -> Result<(), Error> {
  let incident = incident_faces(vertices.len(), faces);
  let pinned = if config.pin_mesh_boundary {
    outline_vertices(faces)
  } else {
    HashSet::new()
  };
  let fixed = fixed.min(vertices.len());

  for pass in 1..=config.passes {
    let mut reporter = PhaseReporter::new(
      &mut *progress,
      format!("smoothing pass {}", pass),
      vertices.len() - fixed,
    );
    let mut moved = 0;
    let mut skipped = 0;
    for (done, v) in (fixed..vertices.len()).enumerate() {
      let vert = VertIdx(v);
      if !pinned.contains(&vert) {
        match relaxed_position(vertices, faces, &incident[v], vert, config.smoothing) {
          Some(pt) => {
            vertices[v] = pt;
            moved += 1;
          }
          None => skipped += 1,
        }
      }
      reporter.step(done + 1)?;
    }
    reporter.finish()?;
    if skipped > 0 {
      log::warn!(
        "smoothing pass {}: {} vertices have no incident area and were left in place",
        pass,
        skipped
      );
    }
    log::debug!("smoothing pass {}: {} vertices moved", pass, moved);
  }
  Ok(())
}

fn incident_faces(vertex_count: usize, faces: &[Face]) -> Vec<Vec<usize>> {
  let mut incident = vec![Vec::new(); vertex_count];
  for (idx, face) in faces.iter().enumerate() {
    for v in face.vertices {
      incident[v.0].push(idx);
    }
  }
  incident
}

/// Endpoints of edges that belong to a single face.
fn outline_vertices(faces: &[Face]) -> HashSet<VertIdx> {
  let mut uses: HashMap<IndexEdge, usize> = HashMap::new();
  for face in faces {
    for edge in face.edges() {
      *uses.entry(edge.into()).or_insert(0) += 1;
    }
  }
  uses
    .into_iter()
    .filter(|&(_, count)| count == 1)
    .flat_map(|(edge, _)| [edge.min, edge.max])
    .collect()
}

fn relaxed_position(
  vertices: &[Point<f64, 2>],
  faces: &[Face],
  incident: &[usize],
  v: VertIdx,
  mode: SmoothingMode,
) -> Option<Point<f64, 2>> {
  let mut sum = [0.0; 2];
  let mut weight = 0.0;
  for &idx in incident {
    let face = &faces[idx];
    match mode {
      SmoothingMode::Points => {
        for other in face.others(v) {
          let pt = &vertices[other.0];
          sum[0] += pt[0];
          sum[1] += pt[1];
          weight += 1.0;
        }
      }
      SmoothingMode::Area => {
        let view = face.view(vertices);
        let centroid = view.centroid();
        let area = view.signed_area();
        for _ in face.others(v) {
          sum[0] += centroid[0] * area;
          sum[1] += centroid[1] * area;
          weight += area;
        }
      }
    }
  }
  if weight == 0.0 {
    return None;
  }
  let pt = Point::new([sum[0] / weight, sum[1] / weight]);
  if pt.is_finite() {
    Some(pt)
  } else {
    None
  }
}
