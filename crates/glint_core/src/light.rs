use glint_math::{color, Color, Vec3};
use serde::{Deserialize, Serialize};

/// A point light.
///
/// Only the RGB channels of `intensity` take part in lighting; alpha is
/// carried along and ignored.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Vec3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    /// A white light of unit intensity.
    pub fn white(position: Vec3) -> Self {
        Self::new(position, color::WHITE)
    }
}
