pub mod quality;
pub mod refinement;
pub mod smoothing;
pub mod triangulation;

#[doc(inline)]
pub use quality::MeshQuality;

#[doc(inline)]
pub use refinement::{refine, RefinementStats};

#[doc(inline)]
pub use smoothing::smooth;

#[doc(inline)]
pub use triangulation::Triangulation;
