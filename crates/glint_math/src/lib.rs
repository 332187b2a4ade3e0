// Re-export glam for convenience
pub use glam::*;

/// Scene-space vector type.
///
/// Double precision: the intersection and self-hit tolerances below are far
/// smaller than an f32 ulp at typical scene coordinates.
pub type Vec3 = glam::DVec3;

/// Tolerance shared by the parallel-ray test, crossing deduplication,
/// shadow self-hit rejection and the reflected-ray origin offset.
pub const EPSILON: f64 = 1e-6;

// Glint math types
pub mod color;
mod ray;
pub use color::Color;
pub use ray::{Ray, RayT, Segment, SegmentT};
