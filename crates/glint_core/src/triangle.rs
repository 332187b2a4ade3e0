//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use glint_math::{Color, Ray, RayT, Vec3, EPSILON};

use crate::error::{SceneError, SceneResult};

/// A planar triangle with cached edges and face normal.
///
/// The face normal is `(v1 - v0) x (v2 - v0)` and is left unnormalized. Its
/// orientation decides which side of the triangle is lit: the diffuse term
/// uses `-dot(L, N)`, so a face is lit from the side the normal points *away*
/// from.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Surface color
    color: Color,
    /// Pre-computed edges `v1 - v0` and `v2 - v0`
    edge_u: Vec3,
    edge_v: Vec3,
    /// Pre-computed face normal (not unit length)
    normal: Vec3,
}

/// A ray/triangle hit: raw ray parameter plus barycentric weights.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Intersection {
    pub t: RayT,
    pub u: f64,
    pub v: f64,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// Fails if the vertices span no area, since such a triangle has no
    /// normal to shade with.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, color: Color) -> SceneResult<Self> {
        let edge_u = v1 - v0;
        let edge_v = v2 - v0;
        let normal = edge_u.cross(edge_v);

        if normal.try_normalize().is_none() {
            return Err(SceneError::DegenerateTriangle(v0, v1, v2));
        }

        Ok(Self {
            v0,
            v1,
            v2,
            color,
            edge_u,
            edge_v,
            normal,
        })
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Face normal `U x V`, unnormalized.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Face normal scaled to unit length.
    pub fn unit_normal(&self) -> Vec3 {
        // Non-zero by construction
        self.normal.normalize()
    }

    pub fn centroid(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }

    /// Move the triangle by `offset`, refreshing the cached edges and normal.
    pub fn translate(&mut self, offset: Vec3) {
        self.v0 += offset;
        self.v1 += offset;
        self.v2 += offset;
        self.edge_u = self.v1 - self.v0;
        self.edge_v = self.v2 - self.v0;
        self.normal = self.edge_u.cross(self.edge_v);
    }

    /// Möller-Trumbore ray-triangle intersection.
    ///
    /// Returns the raw parameter along `ray` without any range filtering;
    /// negative values and values past the target are reported as-is. Rays
    /// parallel to the triangle's plane never intersect.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let direction = ray.direction();

        let p = direction.cross(self.edge_v);
        let det = self.edge_u.dot(p);

        // Ray is parallel to triangle
        if det.abs() < EPSILON {
            return None;
        }

        let inv = 1.0 / det;
        let s = ray.origin - self.v0;
        let u = s.dot(p) * inv;

        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(self.edge_u);
        let v = direction.dot(q) * inv;

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = self.edge_v.dot(q) * inv;

        Some(Intersection { t: RayT(t), u, v })
    }
}
