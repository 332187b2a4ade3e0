//! Glint Core - scene model for the glint ray tracer.
//!
//! This crate provides:
//!
//! - **Geometry**: `Triangle` with Möller-Trumbore intersection, the
//!   `ClippingVolume` that bounds every traced ray, and a cuboid builder
//! - **Scene objects**: `Model` (triangles + Phong `Material`), `PointLight`,
//!   `Camera` and `ImagePlane`
//! - **Scene description**: a JSON document that assembles all of the above
//!
//! # Example
//!
//! ```ignore
//! use glint_core::SceneDescription;
//!
//! let scene = SceneDescription::load("scene.json")?.into_scene()?;
//! println!("{} models, {} triangles", scene.models().len(), scene.triangle_count());
//! ```

pub mod camera;
pub mod clipping;
pub mod description;
pub mod error;
pub mod light;
pub mod mesh;
pub mod model;
pub mod scene;
pub mod triangle;

// Re-export commonly used types
pub use camera::{Camera, ImagePlane};
pub use clipping::ClippingVolume;
pub use description::SceneDescription;
pub use error::{SceneError, SceneResult};
pub use light::PointLight;
pub use model::{Material, Model};
pub use scene::{Hit, Scene};
pub use triangle::{Intersection, Triangle};
