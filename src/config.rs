use crate::Error;

/// Minimum spacing between an accepted refinement point and any existing
/// vertex, as a fraction of the element size.
pub const DEFAULT_SPACING_TOLERANCE: f64 = 0.86;

/// Two y-coordinates closer than this are treated as equal by the
/// circumcircle construction.
pub const DEFAULT_CIRCLE_EPSILON: f64 = 1e-6;

/// How smoothing averages the triangles around a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmoothingMode {
  /// Plain average of the neighbouring vertices, one unit of weight per
  /// incident triangle reference.
  Points,
  /// Average of incident triangle centroids, weighted by triangle area.
  #[default]
  Area,
}

/// Parameters of a [`BasicMesher`](crate::BasicMesher).
///
/// ```rust
/// # use iterative_mesher::{MesherConfig, SmoothingMode};
/// let config = MesherConfig::default()
///   .with_element_size(0.5)
///   .with_passes(5)
///   .with_smoothing(SmoothingMode::Points);
/// assert!(config.validate().is_ok());
/// assert!(MesherConfig::default().with_element_size(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MesherConfig {
  /// Target edge length.
  pub element_size: f64,
  /// Budget shared by refinement iterations and smoothing passes.
  pub passes: usize,
  pub smoothing: SmoothingMode,
  pub spacing_tolerance: f64,
  pub circle_epsilon: f64,
  /// Also keep refinement points that sit on the outline of the mesh in
  /// place while smoothing. Off by default, so only loop points are fixed.
  pub pin_mesh_boundary: bool,
}

impl Default for MesherConfig {
  fn default() -> Self {
    MesherConfig {
      element_size: 1.0,
      passes: 3,
      smoothing: SmoothingMode::Area,
      spacing_tolerance: DEFAULT_SPACING_TOLERANCE,
      circle_epsilon: DEFAULT_CIRCLE_EPSILON,
      pin_mesh_boundary: false,
    }
  }
}

impl MesherConfig {
  pub fn new(element_size: f64, passes: usize, smoothing: SmoothingMode) -> MesherConfig {
    MesherConfig {
      element_size,
      passes,
      smoothing,
      ..MesherConfig::default()
    }
  }

  #[must_use]
  pub fn with_element_size(self, element_size: f64) -> Self {
    MesherConfig {
      element_size,
      ..self
    }
  }

  #[must_use]
  pub fn with_passes(self, passes: usize) -> Self {
    MesherConfig { passes, ..self }
  }

  #[must_use]
  pub fn with_smoothing(self, smoothing: SmoothingMode) -> Self {
    MesherConfig { smoothing, ..self }
  }

  #[must_use]
  pub fn with_spacing_tolerance(self, spacing_tolerance: f64) -> Self {
    MesherConfig {
      spacing_tolerance,
      ..self
    }
  }

  #[must_use]
  pub fn with_circle_epsilon(self, circle_epsilon: f64) -> Self {
    MesherConfig {
      circle_epsilon,
      ..self
    }
  }

  #[must_use]
  pub fn with_pin_mesh_boundary(self, pin_mesh_boundary: bool) -> Self {
    MesherConfig {
      pin_mesh_boundary,
      ..self
    }
  }

  pub fn validate(&self) -> Result<(), Error> {
    if !(self.element_size.is_finite() && self.element_size > 0.0) {
      return Err(Error::InvalidElementSize);
    }
    if !(self.spacing_tolerance.is_finite() && self.spacing_tolerance > 0.0) {
      return Err(Error::InvalidTolerance);
    }
    if !(self.circle_epsilon.is_finite() && self.circle_epsilon > 0.0) {
      return Err(Error::InvalidTolerance);
    }
    Ok(())
  }

  /// Refinement points must be farther than this from every other vertex.
  pub fn min_spacing(&self) -> f64 {
    self.element_size * self.spacing_tolerance
  }
}
