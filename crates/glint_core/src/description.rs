//! JSON scene description.
//!
//! A description is the plain-data form of a [`Scene`]: everything is
//! validated when it is turned into a scene, not when it is parsed.
//!
//! ```json
//! {
//!   "camera": { "eye": [0.0, 0.0, -10.0] },
//!   "image_plane": {
//!     "top_left": [-1.0, 1.0, -5.0], "top_right": [1.0, 1.0, -5.0],
//!     "bottom_left": [-1.0, -1.0, -5.0], "rows": 500, "columns": 500
//!   },
//!   "volume": { "origin": [-5.0, -5.0, -5.0], "size": [10.0, 10.0, 10.0] },
//!   "lights": [ { "position": [0.0, 0.0, -3.0], "intensity": [1.0, 1.0, 1.0, 1.0] } ],
//!   "models": [
//!     { "material": { "diffuse": 0.7 },
//!       "shape": { "cuboid": { "origin": [-0.5, -0.5, -0.5], "size": [1.0, 1.0, 1.0],
//!                              "color": [1.0, 0.0, 0.0, 1.0] } } }
//!   ]
//! }
//! ```

use std::path::Path;

use glint_math::{color, Color, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, ImagePlane};
use crate::clipping::ClippingVolume;
use crate::error::SceneResult;
use crate::light::PointLight;
use crate::mesh::cuboid;
use crate::model::{Material, Model};
use crate::scene::Scene;
use crate::triangle::Triangle;

/// Top-level scene document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub camera: Camera,
    pub image_plane: ImagePlaneDescription,
    pub volume: VolumeDescription,
    /// Global ambient light intensity
    #[serde(default = "default_ambient")]
    pub ambient: Color,
    #[serde(default)]
    pub lights: Vec<PointLight>,
    #[serde(default)]
    pub models: Vec<ModelDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePlaneDescription {
    pub top_left: Vec3,
    pub top_right: Vec3,
    pub bottom_left: Vec3,
    pub rows: u32,
    pub columns: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeDescription {
    pub origin: Vec3,
    pub size: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescription {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub material: Material,
    /// Offset applied to every triangle after the shape is built
    #[serde(default)]
    pub translate: Option<Vec3>,
    pub shape: ShapeDescription,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeDescription {
    /// Axis-aligned box spanning `origin` to `origin + size`
    Cuboid {
        origin: Vec3,
        size: Vec3,
        color: Color,
    },
    /// Explicit triangle list
    Triangles(Vec<TriangleDescription>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleDescription {
    pub vertices: [Vec3; 3],
    pub color: Color,
}

fn default_ambient() -> Color {
    color::WHITE
}

impl SceneDescription {
    /// Parse a description from a JSON string.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON description file.
    pub fn load<P: AsRef<Path>>(path: P) -> SceneResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let description = Self::from_json_str(&json)?;
        log::info!(
            "Loaded scene description {} ({} models, {} lights)",
            path.display(),
            description.models.len(),
            description.lights.len()
        );
        Ok(description)
    }

    /// Serialize back to pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the description and build the scene.
    pub fn into_scene(self) -> SceneResult<Scene> {
        let plane = &self.image_plane;
        let image_plane = ImagePlane::new(
            plane.top_left,
            plane.top_right,
            plane.bottom_left,
            plane.rows,
            plane.columns,
        )?;
        let volume = ClippingVolume::new(self.volume.origin, self.volume.size)?;

        let mut scene = Scene::new(self.camera, image_plane, volume).with_ambient(self.ambient);

        for (index, desc) in self.models.into_iter().enumerate() {
            let name = desc.name.unwrap_or_else(|| format!("model_{}", index));
            let triangles = match desc.shape {
                ShapeDescription::Cuboid {
                    origin,
                    size,
                    color,
                } => cuboid(origin, size, color)?,
                ShapeDescription::Triangles(list) => list
                    .into_iter()
                    .map(|t| Triangle::new(t.vertices[0], t.vertices[1], t.vertices[2], t.color))
                    .collect::<SceneResult<Vec<_>>>()?,
            };

            let mut model = Model::new(name, triangles, desc.material)?;
            if let Some(offset) = desc.translate {
                model.translate(offset);
            }
            log::debug!(
                "Built model '{}' with {} triangles",
                model.name(),
                model.triangles().len()
            );
            scene.add_model(model);
        }

        for light in self.lights {
            scene.add_light(light);
        }

        Ok(scene)
    }

    /// Built-in scene: a red cube and a small blue block over a half-mirror
    /// floor, lit by two point lights.
    pub fn demo() -> Self {
        let solid = Material {
            ambient: 0.2,
            diffuse: 0.8,
            specular: 0.6,
            shininess: 40.0,
            reflectivity: 0.0,
        };
        let mirror = Material {
            ambient: 0.2,
            diffuse: 0.5,
            specular: 0.3,
            shininess: 10.0,
            reflectivity: 0.5,
        };

        Self {
            camera: Camera::new(Vec3::new(0.0, 0.5, -10.0)),
            image_plane: ImagePlaneDescription {
                top_left: Vec3::new(-1.0, 1.5, -5.0),
                top_right: Vec3::new(1.0, 1.5, -5.0),
                bottom_left: Vec3::new(-1.0, -0.5, -5.0),
                rows: 500,
                columns: 500,
            },
            volume: VolumeDescription {
                origin: Vec3::splat(-5.0),
                size: Vec3::splat(10.0),
            },
            ambient: color::rgb(0.5, 0.5, 0.5),
            lights: vec![
                PointLight::white(Vec3::new(1.5, 3.0, -4.0)),
                PointLight::new(Vec3::new(-3.0, 2.0, -2.0), color::rgb(0.4, 0.4, 0.5)),
            ],
            models: vec![
                ModelDescription {
                    name: Some("floor".into()),
                    material: mirror,
                    translate: None,
                    shape: ShapeDescription::Cuboid {
                        origin: Vec3::new(-4.0, -1.2, -4.0),
                        size: Vec3::new(8.0, 0.2, 8.0),
                        color: color::rgb(0.7, 0.7, 0.7),
                    },
                },
                ModelDescription {
                    name: Some("cube".into()),
                    material: solid,
                    translate: Some(Vec3::new(-0.3, 0.0, 0.5)),
                    shape: ShapeDescription::Cuboid {
                        origin: Vec3::splat(-0.5),
                        size: Vec3::ONE,
                        color: color::rgb(0.9, 0.15, 0.1),
                    },
                },
                ModelDescription {
                    name: Some("block".into()),
                    material: solid,
                    translate: None,
                    shape: ShapeDescription::Cuboid {
                        origin: Vec3::new(0.6, -0.95, -1.0),
                        size: Vec3::new(0.6, 0.6, 0.6),
                        color: color::rgb(0.1, 0.3, 0.9),
                    },
                },
            ],
        }
    }
}
