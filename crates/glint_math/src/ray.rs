use crate::Vec3;

/// A directed ray from `origin` towards `target`.
///
/// The parameter domain is `at(0) == origin` and `at(1) == target`, so any
/// parameter produced against this ray is only meaningful for this exact
/// origin/target pair. Rays are infinite lines for intersection purposes;
/// use a [`Segment`] when only the `[0, 1]` part should count.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub target: Vec3,
}

impl Ray {
    /// Create a ray from `origin` through `target`.
    pub fn new(origin: Vec3, target: Vec3) -> Self {
        Self { origin, target }
    }

    /// `target - origin`, not normalized.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.target - self.origin
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: RayT) -> Vec3 {
        self.origin + self.direction() * t.0
    }
}

/// Raw intersection parameter along a [`Ray`], unbounded in either direction.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct RayT(pub f64);

/// Fraction along a [`Segment`], always within `[0, 1]` when produced by a
/// hit search.
///
/// Deliberately not comparable with [`RayT`]: a segment built by clipping has
/// a different parametrization than the ray it came from.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct SegmentT(f64);

impl SegmentT {
    /// Accept a raw parameter measured against a segment's own ray if it lies
    /// within `[lower, 1]`.
    #[inline]
    pub fn within(t: RayT, lower: f64) -> Option<SegmentT> {
        if t.0 >= lower && t.0 <= 1.0 {
            Some(SegmentT(t.0))
        } else {
            None
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// A ray whose `[0, 1]` parameter range is the only part that matters.
///
/// Segments come from clipping a ray to the rendering volume, or are built
/// explicitly between two known points (a hit point and a light).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    ray: Ray,
}

impl Segment {
    /// Segment from `start` to `end`.
    pub fn between(start: Vec3, end: Vec3) -> Self {
        Self {
            ray: Ray::new(start, end),
        }
    }

    /// Zero-length segment at `point`.
    pub fn degenerate(point: Vec3) -> Self {
        Self::between(point, point)
    }

    /// The underlying ray, for intersection tests.
    #[inline]
    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    #[inline]
    pub fn start(&self) -> Vec3 {
        self.ray.origin
    }

    #[inline]
    pub fn end(&self) -> Vec3 {
        self.ray.target
    }

    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.ray.direction()
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    #[inline]
    pub fn at(&self, t: SegmentT) -> Vec3 {
        self.ray.at(RayT(t.0))
    }

    /// Move the start forward by `fraction` of the direction, keeping the end.
    pub fn advance_start(&self, fraction: f64) -> Segment {
        Segment::between(self.ray.at(RayT(fraction)), self.ray.target)
    }
}
