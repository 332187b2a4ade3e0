//! The immutable scene handed to the renderer.
//!
//! A `Scene` owns everything a render pass reads: models, lights, the camera
//! and image plane, the clipping volume and the global ambient intensity.
//! Nothing in it changes while pixels are being resolved, so it is shared
//! across worker threads by reference.

use glint_math::{color, Color, Ray, Segment, SegmentT, Vec3, EPSILON};

use crate::camera::{Camera, ImagePlane};
use crate::clipping::ClippingVolume;
use crate::light::PointLight;
use crate::model::{Material, Model};
use crate::triangle::Triangle;

/// Closest surface along a segment.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub model: &'a Model,
    pub triangle: &'a Triangle,
    /// Fraction along the segment that was searched
    pub t: SegmentT,
    /// World-space hit point
    pub point: Vec3,
}

impl<'a> Hit<'a> {
    pub fn material(&self) -> &'a Material {
        self.model.material()
    }
}

/// Scene description consumed by the render pass.
#[derive(Debug, Clone)]
pub struct Scene {
    models: Vec<Model>,
    lights: Vec<PointLight>,
    camera: Camera,
    image_plane: ImagePlane,
    volume: ClippingVolume,
    ambient: Color,
}

impl Scene {
    /// Create an empty scene (no models, no lights, white ambient light).
    pub fn new(camera: Camera, image_plane: ImagePlane, volume: ClippingVolume) -> Self {
        Self {
            models: Vec::new(),
            lights: Vec::new(),
            camera,
            image_plane,
            volume,
            ambient: color::WHITE,
        }
    }

    /// Set the global ambient light intensity.
    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn add_model(&mut self, model: Model) {
        self.models.push(model);
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn image_plane(&self) -> &ImagePlane {
        &self.image_plane
    }

    pub fn volume(&self) -> &ClippingVolume {
        &self.volume
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    /// Total number of triangles across all models.
    pub fn triangle_count(&self) -> usize {
        self.models.iter().map(|m| m.triangles().len()).sum()
    }

    /// Unclipped ray from the eye through the center of pixel (row, column).
    pub fn primary_ray(&self, row: u32, column: u32) -> Ray {
        self.camera
            .ray_through(self.image_plane.sample_center(row, column))
    }

    /// Closest hit across every model within the segment's `[0, 1]` range.
    pub fn nearest_hit(&self, segment: &Segment) -> Option<Hit<'_>> {
        let mut closest: Option<Hit<'_>> = None;

        for model in &self.models {
            if let Some((triangle, t)) = model.nearest_hit(segment) {
                if closest.map_or(true, |best| t < best.t) {
                    closest = Some(Hit {
                        model,
                        triangle,
                        t,
                        point: segment.at(t),
                    });
                }
            }
        }

        closest
    }

    /// Whether anything lies on the segment strictly past its start.
    ///
    /// Hits at a fraction of EPSILON or less are the surface the segment
    /// starts on and do not count.
    pub fn occluded(&self, segment: &Segment) -> bool {
        self.models.iter().any(|m| m.blocks(segment, EPSILON))
    }
}
