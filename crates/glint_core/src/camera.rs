//! Eye point and image plane sampler.

use glint_math::{Ray, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// The viewer: every primary ray starts at `eye`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: Vec3,
}

impl Camera {
    pub fn new(eye: Vec3) -> Self {
        Self { eye }
    }

    /// Primary ray from the eye through a point on the image plane.
    pub fn ray_through(&self, sample: Vec3) -> Ray {
        Ray::new(self.eye, sample)
    }
}

/// A rectangle in world space divided into a `rows x columns` pixel grid.
///
/// Row 0 is the top edge (top-left to top-right), column 0 the left edge
/// (top-left to bottom-left).
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePlane {
    top_left: Vec3,
    rows: u32,
    columns: u32,

    // Cached computed values
    row_step: Vec3,
    column_step: Vec3,
}

impl ImagePlane {
    /// Create an image plane from three corners and a pixel resolution.
    pub fn new(
        top_left: Vec3,
        top_right: Vec3,
        bottom_left: Vec3,
        rows: u32,
        columns: u32,
    ) -> SceneResult<Self> {
        if rows == 0 || columns == 0 {
            return Err(SceneError::EmptyImagePlane { rows, columns });
        }

        let down = bottom_left - top_left;
        let across = top_right - top_left;
        if down.cross(across).try_normalize().is_none() {
            return Err(SceneError::DegenerateImagePlane);
        }

        Ok(Self {
            top_left,
            rows,
            columns,
            row_step: down / rows as f64,
            column_step: across / columns as f64,
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// World-space center of pixel (row, column).
    pub fn sample_center(&self, row: u32, column: u32) -> Vec3 {
        self.top_left
            + (row as f64 + 0.5) * self.row_step
            + (column as f64 + 0.5) * self.column_step
    }
}
