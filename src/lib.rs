//! Iterative Delaunay meshing of planar regions.
//!
//! A region is described by closed boundary loops: an outer contour plus
//! any number of holes. [`BasicMesher`] triangulates the loop points,
//! splits edges longer than the target element size, relaxes the inserted
//! vertices, and hands back a plain [`Mesh`] of nodes and triangles.
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]

pub mod algorithms;
mod config;
pub mod data;
mod mesher;
mod orientation;
pub mod predicates;
mod progress;
mod utils;

pub use algorithms::MeshQuality;
pub use config::{MesherConfig, SmoothingMode, DEFAULT_CIRCLE_EPSILON, DEFAULT_SPACING_TOLERANCE};
pub use data::Mesh;
pub use mesher::{BasicMesher, MeshState, MeshingReport};
pub use orientation::Orientation;
pub use progress::{CancelToken, Cancellable, Progress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InvalidElementSize,
  InvalidTolerance,
  InsufficientVertices,
  /// The last point of a loop does not repeat the first.
  OpenLoop,
  NanCoordinate,
  /// The loops do not enclose any triangle.
  NoTriangulation,
  Cancelled,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidElementSize => write!(f, "Element size must be finite and positive"),
      Error::InvalidTolerance => write!(f, "Tolerances must be finite and positive"),
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::OpenLoop => write!(f, "Loop is not closed"),
      Error::NanCoordinate => write!(f, "Coordinate is NaN or infinite"),
      Error::NoTriangulation => write!(f, "No triangulation possible"),
      Error::Cancelled => write!(f, "Meshing was cancelled"),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
