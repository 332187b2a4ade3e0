//! Rendering volume used to bound every traced ray.
//!
//! The volume is a closed axis-aligned box made of 12 triangles. Clipping a
//! ray against it produces a [`Segment`] whose own `[0, 1]` range is exactly
//! the visible part of the ray, which is what makes the `[0, 1]` filter in
//! the hit search mean "inside the volume".

use glint_math::{color, Ray, RayT, Segment, Vec3, EPSILON};

use crate::error::SceneResult;
use crate::mesh::cuboid;
use crate::triangle::Triangle;

/// Axis-aligned box that every primary and reflected ray is clipped to.
#[derive(Debug, Clone)]
pub struct ClippingVolume {
    origin: Vec3,
    size: Vec3,
    triangles: Vec<Triangle>,
}

impl ClippingVolume {
    /// Create a volume spanning `origin` to `origin + size`.
    pub fn new(origin: Vec3, size: Vec3) -> SceneResult<Self> {
        // Colour is irrelevant, the volume is never shaded
        let triangles = cuboid(origin, size, color::BLACK)?;
        Ok(Self {
            origin,
            size,
            triangles,
        })
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// Check whether `point` lies inside or on the box, with EPSILON slack.
    pub fn contains(&self, point: Vec3) -> bool {
        let min = self.origin - Vec3::splat(EPSILON);
        let max = self.origin + self.size + Vec3::splat(EPSILON);
        point.cmpge(min).all() && point.cmple(max).all()
    }

    /// Parameters at which the infinite line through `ray` crosses the box
    /// boundary, ascending and without duplicates.
    ///
    /// A ray passing exactly through a box edge or corner is reported by
    /// every triangle sharing it; values within EPSILON count as one.
    pub fn crossings(&self, ray: &Ray) -> Vec<RayT> {
        let mut ts: Vec<f64> = self
            .triangles
            .iter()
            .filter_map(|tri| tri.intersect(ray))
            .map(|hit| hit.t.0)
            .collect();
        ts.sort_by(f64::total_cmp);
        ts.dedup_by(|later, earlier| (*later - *earlier).abs() < EPSILON);
        ts.into_iter().map(RayT).collect()
    }

    /// Reduce the line through `ray` to the chord lying inside the volume.
    ///
    /// - no crossing: `None`
    /// - one crossing (grazing a face): a zero-length segment at that point
    /// - otherwise: the segment from the first to the last crossing point
    pub fn clip(&self, ray: &Ray) -> Option<Segment> {
        let crossings = self.crossings(ray);
        let (first, last) = (crossings.first()?, crossings.last()?);

        if crossings.len() == 1 {
            return Some(Segment::degenerate(ray.at(*first)));
        }

        Some(Segment::between(ray.at(*first), ray.at(*last)))
    }

    /// Like [`clip`](Self::clip), but only the part of the chord at or beyond
    /// the ray origin (`t >= 0`).
    ///
    /// When the origin is inside the volume the segment starts at the origin.
    /// Returns `None` when the whole volume lies behind the origin.
    pub fn clip_ahead(&self, ray: &Ray) -> Option<Segment> {
        let crossings = self.crossings(ray);
        let (first, last) = (crossings.first()?, crossings.last()?);

        if last.0 < 0.0 {
            return None;
        }

        if crossings.len() == 1 {
            return Some(Segment::degenerate(ray.at(*last)));
        }

        let start = RayT(first.0.max(0.0));
        Some(Segment::between(ray.at(start), ray.at(*last)))
    }
}
