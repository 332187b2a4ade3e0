//! Errors raised while assembling a scene.
//!
//! Every variant is a malformed-input condition detected at construction
//! time; nothing here is produced while rendering.

use glint_math::Vec3;
use thiserror::Error;

/// Errors that can occur while building or loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Degenerate triangle (zero area): {0}, {1}, {2}")]
    DegenerateTriangle(Vec3, Vec3, Vec3),

    #[error("Image plane needs at least one row and one column, got {rows}x{columns}")]
    EmptyImagePlane { rows: u32, columns: u32 },

    #[error("Image plane corners are collinear or coincident")]
    DegenerateImagePlane,

    #[error("Clipping volume size must be positive on every axis, got {0}")]
    InvalidVolume(Vec3),

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene description error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;
