//! Scene objects: triangle bundles sharing one Phong material.

use glint_math::{Segment, SegmentT, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::triangle::Triangle;

/// Phong material constants shared by every triangle of a model.
///
/// `reflectivity` blends the surface color with the mirrored scene: 0 shows
/// only the surface, 1 is a perfect mirror whose own color is invisible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
    pub reflectivity: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: 0.2,
            diffuse: 0.8,
            specular: 0.5,
            shininess: 32.0,
            reflectivity: 0.0,
        }
    }
}

impl Material {
    /// Check that every constant is finite and reflectivity is in [0, 1].
    pub fn validate(&self) -> SceneResult<()> {
        let values = [
            ("ambient", self.ambient),
            ("diffuse", self.diffuse),
            ("specular", self.specular),
            ("shininess", self.shininess),
            ("reflectivity", self.reflectivity),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(SceneError::InvalidMaterial(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if self.reflectivity > 1.0 {
            return Err(SceneError::InvalidMaterial(format!(
                "reflectivity must be in [0, 1], got {}",
                self.reflectivity
            )));
        }
        Ok(())
    }

    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }
}

/// An ordered collection of triangles with one material.
#[derive(Debug, Clone)]
pub struct Model {
    name: String,
    triangles: Vec<Triangle>,
    material: Material,
}

impl Model {
    /// Create a model, validating its material.
    pub fn new(
        name: impl Into<String>,
        triangles: Vec<Triangle>,
        material: Material,
    ) -> SceneResult<Self> {
        material.validate()?;
        Ok(Self {
            name: name.into(),
            triangles,
            material,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Move every triangle by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        for tri in &mut self.triangles {
            tri.translate(offset);
        }
    }

    /// Closest triangle hit within the segment's `[0, 1]` range.
    ///
    /// Brute force: every triangle is tested. Only meaningful for a segment
    /// (clipped ray), never a raw unclipped ray.
    pub fn nearest_hit(&self, segment: &Segment) -> Option<(&Triangle, SegmentT)> {
        let mut closest: Option<(&Triangle, SegmentT)> = None;

        for tri in &self.triangles {
            let Some(t) = fraction(tri, segment, 0.0) else {
                continue;
            };
            if closest.map_or(true, |(_, best)| t < best) {
                closest = Some((tri, t));
            }
        }

        closest
    }

    /// Whether any triangle is hit at a fraction in `(lower, 1]`.
    pub fn blocks(&self, segment: &Segment, lower: f64) -> bool {
        self.triangles.iter().any(|tri| {
            fraction(tri, segment, lower)
                .is_some_and(|t| t.value() > lower)
        })
    }
}

/// Hit fraction of `tri` along `segment`, if it lies in `[lower, 1]`.
fn fraction(tri: &Triangle, segment: &Segment, lower: f64) -> Option<SegmentT> {
    let hit = tri.intersect(segment.ray())?;
    SegmentT::within(hit.t, lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::color;

    fn wall(z: f64) -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, -1.0, z),
            Vec3::new(1.0, -1.0, z),
            Vec3::new(0.0, 1.0, z),
            color::rgb(z.abs() / 10.0, 0.0, 0.0),
        )
        .unwrap()
    }

    fn model() -> Model {
        Model::new(
            "walls",
            vec![wall(3.0), wall(1.0), wall(2.0), wall(-1.0)],
            Material::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_nearest_hit_picks_smallest_fraction() {
        let model = model();
        let seg = Segment::between(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0));

        let (tri, t) = model.nearest_hit(&seg).unwrap();
        assert_eq!(tri.vertices()[0].z, 1.0);
        assert!((t.value() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_hit_stays_in_segment() {
        let model = model();

        // Walls at z=1,2,3 lie beyond the end, z=-1 behind the start
        let seg = Segment::between(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.5));
        assert!(model.nearest_hit(&seg).is_none());

        let seg = Segment::between(Vec3::new(0.0, 0.0, 1.5), Vec3::new(0.0, 0.0, 5.0));
        let (tri, t) = model.nearest_hit(&seg).unwrap();
        assert_eq!(tri.vertices()[0].z, 2.0);
        assert!((0.0..=1.0).contains(&t.value()));
    }

    #[test]
    fn test_blocks_ignores_start_surface() {
        let model = Model::new("wall", vec![wall(0.0)], Material::default()).unwrap();

        // Segment starts on the wall itself
        let seg = Segment::between(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0));
        assert!(!model.blocks(&seg, 1e-6));

        let seg = Segment::between(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 5.0));
        assert!(model.blocks(&seg, 1e-6));
    }

    #[test]
    fn test_translate_moves_all_triangles() {
        let mut model = model();
        model.translate(Vec3::new(0.0, 0.0, 10.0));

        let zs: Vec<f64> = model.triangles().iter().map(|t| t.vertices()[0].z).collect();
        assert_eq!(zs, vec![13.0, 11.0, 12.0, 9.0]);
    }

    #[test]
    fn test_material_validation() {
        assert!(Material::default().validate().is_ok());

        let mirror = Material {
            reflectivity: 1.5,
            ..Default::default()
        };
        assert!(matches!(mirror.validate(), Err(SceneError::InvalidMaterial(_))));

        let negative = Material {
            diffuse: -0.1,
            ..Default::default()
        };
        assert!(Model::new("bad", Vec::new(), negative).is_err());
    }
}
