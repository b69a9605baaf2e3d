mod directed_edge;
mod line;
mod mesh;
pub(crate) mod point;
pub mod polygon;
mod triangle;

pub use directed_edge::*;
pub use line::MeshLine;
pub use mesh::Mesh;
pub use point::Point;
pub use triangle::*;

#[doc(inline)]
pub use crate::data::polygon::{winding_sum, BoundaryLoop};
