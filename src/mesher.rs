use crate::algorithms::{refine, smooth, MeshQuality, RefinementStats, Triangulation};
use crate::data::{BoundaryLoop, Face, Mesh, Point};
use crate::progress::{PhaseReporter, Progress};
use crate::{Error, MesherConfig};

/// Meshes the region bounded by a set of loops.
///
/// Loops are accumulated first, then [`BasicMesher::triangulate_iteratively`]
/// runs the whole pipeline: Delaunay triangulation of the loop points,
/// adaptive refinement towards the configured element size, smoothing, and
/// export. A face is part of the region when the winding numbers of its
/// centroid sum to 1 over all loops: outer loops run counter-clockwise and
/// holes clockwise.
///
/// ```rust
/// # use iterative_mesher::{BasicMesher, MesherConfig, SmoothingMode};
/// # use iterative_mesher::data::Point;
/// let mut mesher = BasicMesher::new(MesherConfig::new(5.0, 0, SmoothingMode::Area))?;
/// mesher.add_loop(vec![
///   Point::new([0.0, 0.0]),
///   Point::new([10.0, 0.0]),
///   Point::new([10.0, 10.0]),
///   Point::new([0.0, 10.0]),
///   Point::new([0.0, 0.0]),
/// ])?;
/// let mesh = mesher.triangulate_iteratively(&mut ())?;
/// assert_eq!(mesh.node_count(), 4);
/// assert_eq!(mesh.element_count(), 2);
/// # Ok::<(), iterative_mesher::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BasicMesher {
  config: MesherConfig,
  loops: Vec<BoundaryLoop>,
}

/// Counters and figures describing one meshing run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshingReport {
  pub refinement_iterations: usize,
  pub points_added: usize,
  /// Points accepted by the last refinement iteration.
  pub last_iteration_added: usize,
  pub smoothing_passes: usize,
  pub quality: MeshQuality,
}

/// Vertices and faces after smoothing, before export.
///
/// The first `boundary_count` vertices are the loop points in the order the
/// loops were added. The rest were introduced by refinement.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshState {
  vertices: Vec<Point<f64, 2>>,
  faces: Vec<Face>,
  boundary_count: usize,
  refinement: RefinementStats,
  smoothing_passes: usize,
}

impl MeshState {
  pub fn vertices(&self) -> &[Point<f64, 2>] {
    &self.vertices
  }

  pub fn faces(&self) -> &[Face] {
    &self.faces
  }

  pub fn boundary_count(&self) -> usize {
    self.boundary_count
  }

  pub fn quality(&self) -> MeshQuality {
    MeshQuality::measure(&self.vertices, &self.faces)
  }

  pub fn export(&self) -> Mesh {
    Mesh::from_faces(&self.vertices, &self.faces)
  }

  pub fn report(&self) -> MeshingReport {
    MeshingReport {
      refinement_iterations: self.refinement.iterations,
      points_added: self.refinement.points_added,
      last_iteration_added: self.refinement.last_iteration_added,
      smoothing_passes: self.smoothing_passes,
      quality: self.quality(),
    }
  }
}

impl BasicMesher {
  /// # Errors
  ///
  /// Fails if `config` does not [validate](MesherConfig::validate).
  pub fn new(config: MesherConfig) -> Result<BasicMesher, Error> {
    config.validate()?;
    Ok(BasicMesher {
      config,
      loops: Vec::new(),
    })
  }

  pub fn config(&self) -> &MesherConfig {
    &self.config
  }

  pub fn loops(&self) -> &[BoundaryLoop] {
    &self.loops
  }

  /// Add a closed loop. The last point must repeat the first.
  pub fn add_loop(&mut self, points: Vec<Point<f64, 2>>) -> Result<(), Error> {
    let ring = BoundaryLoop::new(points)?;
    self.loops.push(ring);
    Ok(())
  }

  pub fn add_boundary_loop(&mut self, ring: BoundaryLoop) -> Result<(), Error> {
    ring.validate()?;
    self.loops.push(ring);
    Ok(())
  }

  /// Mesh the loops added so far.
  ///
  /// # Errors
  ///
  /// * [`Error::NoTriangulation`] if the loops enclose no face.
  /// * [`Error::Cancelled`] if `progress` asked to stop.
  pub fn triangulate_iteratively(&self, progress: &mut dyn Progress) -> Result<Mesh, Error> {
    Ok(self.build(progress)?.export())
  }

  /// Like [`BasicMesher::triangulate_iteratively`], together with a summary
  /// of the run.
  pub fn triangulate_with_report(
    &self,
    progress: &mut dyn Progress,
  ) -> Result<(Mesh, MeshingReport), Error> {
    let state = self.build(progress)?;
    Ok((state.export(), state.report()))
  }

  /// Run the pipeline up to, but not including, export.
  pub fn build(&self, progress: &mut dyn Progress) -> Result<MeshState, Error> {
    let vertices: Vec<Point<f64, 2>> = self
      .loops
      .iter()
      .flat_map(|ring| ring.vertices().iter().copied())
      .collect();
    let boundary_count = vertices.len();
    if boundary_count < 3 {
      log::warn!("nothing to mesh: {} boundary vertices", boundary_count);
      return Err(Error::NoTriangulation);
    }
    log::debug!(
      "triangulating {} vertices from {} loops",
      boundary_count,
      self.loops.len()
    );

    let mut tri = Triangulation::new(vertices, self.config.circle_epsilon);
    let mut reporter = PhaseReporter::new(&mut *progress, "triangulating".to_string(), boundary_count);
    tri.insert_from(0, &mut reporter)?;
    reporter.finish()?;

    let refinement = refine(&mut tri, &self.loops, &self.config, progress)?;

    let faces = tri.trimmed_faces(&self.loops);
    if faces.is_empty() {
      log::warn!("no face lies inside exactly one loop");
      return Err(Error::NoTriangulation);
    }
    let mut vertices = tri.into_vertices();
    smooth(&mut vertices, &faces, boundary_count, &self.config, progress)?;
    log::debug!(
      "meshed {} vertices into {} faces",
      vertices.len(),
      faces.len()
    );

    Ok(MeshState {
      vertices,
      faces,
      boundary_count,
      refinement,
      smoothing_passes: self.config.passes,
    })
  }
}
