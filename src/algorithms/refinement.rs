use std::collections::{HashMap, HashSet};

use super::triangulation::Triangulation;
use crate::data::{BoundaryLoop, Face, MeshLine, Point, VertIdx};
use crate::progress::{PhaseReporter, Progress};
use crate::{Error, MesherConfig};

/// What the refinement loop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefinementStats {
  /// Iterations run, including a final one that found nothing to add.
  pub iterations: usize,
  pub points_added: usize,
  /// Points accepted by the last iteration run. Zero means the loop stopped
  /// because nothing more could be added, not because the budget ran out.
  pub last_iteration_added: usize,
}

/// Split over-long edges until every edge is short enough, the pass budget
/// runs out, or an iteration finds no point it is allowed to add.
///
/// Points are inserted into `tri` incrementally. Each iteration reports its
/// progress as `"refinement iteration N"`.
pub fn refine(
  tri: &mut Triangulation,
  loops: &[BoundaryLoop],
  config: &MesherConfig,
  progress: &mut dyn Progress,
) -> Result<RefinementStats, Error> {
  let mut stats = RefinementStats::default();
  for iteration in 1..=config.passes {
    let faces = tri.trimmed_faces(loops);
    if faces.is_empty() {
      log::warn!("refinement iteration {}: no faces left", iteration);
      return Err(Error::NoTriangulation);
    }
    let lines = over_length_lines(&faces, tri.vertices(), config.element_size);
    let accepted = propose_points(&lines, tri.vertices(), config);
    let added = accepted.len();

    let range = tri.extend(accepted);
    let mut reporter = PhaseReporter::new(
      &mut *progress,
      format!("refinement iteration {}", iteration),
      range.len(),
    );
    tri.insert_from(range.start, &mut reporter)?;
    reporter.finish()?;

    log::debug!(
      "refinement iteration {}: {} over-length lines, {} points added",
      iteration,
      lines.len(),
      added
    );
    stats.iterations = iteration;
    stats.points_added += added;
    stats.last_iteration_added = added;
    if added == 0 {
      break;
    }
  }
  Ok(stats)
}

/// Distinct edges of `faces` longer than `size`, in the order they are first
/// met.
pub fn over_length_lines(faces: &[Face], vertices: &[Point<f64, 2>], size: f64) -> Vec<MeshLine> {
  let limit = size * size;
  let mut seen = HashSet::new();
  let mut lines = Vec::new();
  for face in faces {
    for edge in face.edges() {
      let line = MeshLine::new(edge.src, edge.dst, vertices);
      if line.squared_length > limit && seen.insert(line.edge) {
        lines.push(line);
      }
    }
  }
  lines
}

/// Evenly spaced division points on `lines` that keep their distance from
/// every vertex and from each other.
///
/// A line of length `l` is cut into `ceil(l / size)` parts. A division point
/// is accepted when every vertex other than the line's own endpoints, and
/// every point accepted before it, is farther away than
/// [`MesherConfig::min_spacing`].
pub fn propose_points(
  lines: &[MeshLine],
  vertices: &[Point<f64, 2>],
  config: &MesherConfig,
) -> Vec<Point<f64, 2>> {
  let size = config.element_size;
  let min_spacing = config.min_spacing();
  let mut grid = SpacingGrid::new(size.max(min_spacing), vertices);
  let mut accepted = Vec::new();
  for line in lines {
    let count = (line.length() / size).ceil() as usize;
    for candidate in line.division_points(vertices, count) {
      let nearest = grid.nearest(&candidate, line);
      if nearest > min_spacing * min_spacing {
        grid.insert(candidate);
        accepted.push(candidate);
      } else {
        log::trace!("rejected {:?}, nearest vertex at {}", candidate, nearest.sqrt());
      }
    }
  }
  accepted
}

/// Uniform bucket grid over the vertex list and the points accepted so far.
///
/// The cell side equals the search window, so a query only needs the 3x3
/// block of cells around the query point.
struct SpacingGrid {
  window: f64,
  points: Vec<Point<f64, 2>>,
  cells: HashMap<(i64, i64), Vec<usize>>,
}

impl SpacingGrid {
  fn new(window: f64, vertices: &[Point<f64, 2>]) -> SpacingGrid {
    let mut grid = SpacingGrid {
      window,
      points: Vec::with_capacity(vertices.len()),
      cells: HashMap::new(),
    };
    for &pt in vertices {
      grid.insert(pt);
    }
    grid
  }

  fn key(&self, pt: &Point<f64, 2>) -> (i64, i64) {
    (
      (pt[0] / self.window).floor() as i64,
      (pt[1] / self.window).floor() as i64,
    )
  }

  fn insert(&mut self, pt: Point<f64, 2>) {
    let key = self.key(&pt);
    self.cells.entry(key).or_default().push(self.points.len());
    self.points.push(pt);
  }

  /// Squared distance from `pt` to the closest point inside its window,
  /// skipping the endpoints of `line`. Infinite if there is none.
  fn nearest(&self, pt: &Point<f64, 2>, line: &MeshLine) -> f64 {
    let (kx, ky) = self.key(pt);
    let mut best = f64::INFINITY;
    for cx in kx - 1..=kx + 1 {
      for cy in ky - 1..=ky + 1 {
        let bucket = match self.cells.get(&(cx, cy)) {
          Some(bucket) => bucket,
          None => continue,
        };
        for &idx in bucket {
          if line.is_endpoint(VertIdx(idx)) {
            continue;
          }
          let other = &self.points[idx];
          if (other[0] - pt[0]).abs() > self.window || (other[1] - pt[1]).abs() > self.window {
            continue;
          }
          best = best.min(pt.squared_euclidean_distance(other));
        }
      }
    }
    best
  }
}
