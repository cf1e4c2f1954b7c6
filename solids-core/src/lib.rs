/// Solids3D Core Library - Parametric solid generation and projection
///
/// This library provides the stateless core of the solids visualizer:
/// mesh construction for a fixed catalog of solids, rotation state,
/// perspective projection to screen space, and the per-solid fact table
/// (element counts, volume and surface-area formulas).

pub mod error;
pub mod facts;
pub mod projection;
pub mod solid;
pub mod transform;

// Re-export commonly used types
pub use error::GeometryError;
pub use facts::SolidFacts;
pub use projection::{project, Point2D};
pub use solid::{generate, Family, Mesh, SolidKind};
pub use transform::RotationState;
