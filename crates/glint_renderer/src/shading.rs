//! Shading resolver: Phong lighting, hard shadows and mirror reflection.
//!
//! Resolution is a pure recursive function of the segment, the remaining
//! reflection depth and the immutable scene.

use glint_core::{Hit, Scene};
use glint_math::color::{blend, with_alpha};
use glint_math::{Color, Ray, Segment, Vec3, EPSILON};

use crate::error::{RenderError, RenderResult};

/// Default cap on reflection recursion.
pub const MAX_DEPTH: u32 = 10;

/// Light attenuation `1 / (A + B*d + C*d^2)`.
const ATTENUATION_CONSTANT: f64 = 1.0;
const ATTENUATION_LINEAR: f64 = 0.05;
const ATTENUATION_QUADRATIC: f64 = 0.05;

/// Compute the color seen along an already clipped segment.
///
/// Returns `Ok(None)` when nothing is hit, leaving the pixel at its
/// background. `depth` is the number of reflection bounces still allowed.
pub fn resolve_color(scene: &Scene, segment: &Segment, depth: u32) -> RenderResult<Option<Color>> {
    let Some(hit) = scene.nearest_hit(segment) else {
        return Ok(None);
    };

    let material = hit.material();
    let base = hit.triangle.color();

    let blended = if material.is_reflective() && depth > 0 {
        let reflected = match reflected_segment(scene, segment, &hit) {
            Some(next) => resolve_color(scene, &next, depth - 1)?,
            None => None,
        };
        // Nothing seen in the mirror: the surface shows its own color
        blend(base, reflected.unwrap_or(base), material.reflectivity)
    } else {
        base
    };

    let light = direct_light(scene, &hit)?;
    Ok(Some(with_alpha(blended * light, 1.0)))
}

/// Mirror the incoming segment at the hit point and clip it to the volume.
///
/// The start is pushed EPSILON along the new direction so the surface that
/// was just hit is not found again.
fn reflected_segment(scene: &Scene, incoming: &Segment, hit: &Hit<'_>) -> Option<Segment> {
    let n = hit.triangle.unit_normal();
    let d = incoming.direction();
    let r = d - 2.0 * d.dot(n) * n;

    let ray = Ray::new(hit.point, hit.point + r);
    scene
        .volume()
        .clip_ahead(&ray)
        .map(|segment| segment.advance_start(EPSILON))
}

/// Ambient plus the diffuse and specular contribution of every light that
/// can see the hit point.
///
/// Diffuse uses `max(-dot(L, N), 0)` with the face normal `U x V`: a face is
/// lit from the side its normal points away from.
pub fn direct_light(scene: &Scene, hit: &Hit<'_>) -> RenderResult<Color> {
    let material = hit.material();
    let mut total = scene.ambient() * material.ambient;

    let n = hit.triangle.unit_normal();

    for light in scene.lights() {
        let shadow = Segment::between(hit.point, light.position);
        if scene.occluded(&shadow) {
            continue;
        }

        let to_light = light.position - hit.point;
        let distance = to_light.length();
        let l = unit(to_light, "light", hit.point)?;
        let r = unit(2.0 * l.dot(n) * n - l, "reflected light", hit.point)?;
        let v = unit(scene.camera().eye - hit.point, "view", hit.point)?;

        let attenuation = 1.0
            / (ATTENUATION_CONSTANT
                + ATTENUATION_LINEAR * distance
                + ATTENUATION_QUADRATIC * distance * distance);

        let diffuse = material.diffuse * attenuation * (-l.dot(n)).max(0.0);
        let specular =
            material.specular * attenuation * r.dot(v).max(0.0).powf(material.shininess);

        total += light.intensity * (diffuse + specular);
    }

    Ok(total)
}

fn unit(v: Vec3, what: &'static str, point: Vec3) -> RenderResult<Vec3> {
    v.try_normalize()
        .ok_or(RenderError::DegenerateVector { what, point })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{
        Camera, ClippingVolume, ImagePlane, Material, Model, PointLight, Triangle,
    };
    use glint_math::color;

    /// Two triangles `a b c` and `a c d`.
    fn quad(a: Vec3, b: Vec3, c: Vec3, d: Vec3, color: Color) -> Vec<Triangle> {
        vec![
            Triangle::new(a, b, c, color).unwrap(),
            Triangle::new(a, c, d, color).unwrap(),
        ]
    }

    fn empty_scene(eye: Vec3) -> Scene {
        let plane = ImagePlane::new(
            Vec3::new(-1.0, 1.0, -5.0),
            Vec3::new(1.0, 1.0, -5.0),
            Vec3::new(-1.0, -1.0, -5.0),
            1,
            1,
        )
        .unwrap();
        // Off-centre so no test ray runs along a face diagonal of the volume
        let volume = ClippingVolume::new(Vec3::new(-4.0, -5.0, -6.0), Vec3::new(10.0, 11.0, 12.0)).unwrap();
        Scene::new(Camera::new(eye), plane, volume)
    }

    const FLOOR_COLOR: Color = color::rgb(0.8, 0.6, 0.4);

    /// Floor at y = -1 with its normal pointing down (-Y).
    fn floor() -> Model {
        let triangles = quad(
            Vec3::new(-3.0, -1.0, -3.0),
            Vec3::new(3.0, -1.0, -3.0),
            Vec3::new(3.0, -1.0, 3.0),
            Vec3::new(-3.0, -1.0, 3.0),
            FLOOR_COLOR,
        );
        Model::new("floor", triangles, Material::default()).unwrap()
    }

    /// Opaque slab at y = 2 between the floor and a light above it.
    fn occluder() -> Model {
        let triangles = quad(
            Vec3::new(-2.0, 2.0, -2.0),
            Vec3::new(2.0, 2.0, -2.0),
            Vec3::new(2.0, 2.0, 2.0),
            Vec3::new(-2.0, 2.0, 2.0),
            color::rgb(0.0, 1.0, 0.0),
        );
        Model::new("occluder", triangles, Material::default()).unwrap()
    }

    /// Segment landing on the floor at (1, -1, -1).
    fn floor_segment() -> Segment {
        Segment::between(Vec3::new(2.0, 0.0, -1.0), Vec3::new(0.0, -2.0, -1.0))
    }

    fn floor_color(with_light: Option<Vec3>, with_occluder: bool) -> Color {
        let mut scene = empty_scene(Vec3::new(0.0, 5.0, -10.0));
        scene.add_model(floor());
        if with_occluder {
            scene.add_model(occluder());
        }
        if let Some(position) = with_light {
            scene.add_light(PointLight::white(position));
        }
        resolve_color(&scene, &floor_segment(), MAX_DEPTH)
            .unwrap()
            .expect("segment hits the floor")
    }

    #[test]
    fn test_no_hit_gives_no_color() {
        let scene = empty_scene(Vec3::new(0.0, 0.0, -10.0));
        let color = resolve_color(&scene, &floor_segment(), MAX_DEPTH).unwrap();
        assert!(color.is_none());
    }

    #[test]
    fn test_ambient_only_without_lights() {
        let color = floor_color(None, false);
        let ambient = Material::default().ambient;

        assert!((color.x - FLOOR_COLOR.x * ambient).abs() < 1e-12);
        assert!((color.y - FLOOR_COLOR.y * ambient).abs() < 1e-12);
        assert!((color.z - FLOOR_COLOR.z * ambient).abs() < 1e-12);
        assert_eq!(color.w, 1.0);
    }

    #[test]
    fn test_light_on_far_side_of_normal_lights_the_face() {
        let unlit = floor_color(None, false);

        // Normal points down; a light above is on the side it points away from
        let above = floor_color(Some(Vec3::new(1.0, 4.0, -1.0)), false);
        assert!(above.x > unlit.x && above.y > unlit.y && above.z > unlit.z);

        // A light below, on the normal's side, adds nothing
        let below = floor_color(Some(Vec3::new(1.0, -4.0, -1.0)), false);
        assert_eq!(below, unlit);
    }

    #[test]
    fn test_occluder_removes_diffuse_and_specular() {
        let light = Some(Vec3::new(1.0, 4.0, -1.0));

        let lit = floor_color(light, false);
        let shadowed = floor_color(light, true);
        let ambient_only = floor_color(None, true);

        assert!(lit.x > shadowed.x);
        // Exactly the ambient term survives
        assert_eq!(shadowed, ambient_only);
    }

    #[test]
    fn test_attenuation_and_diffuse_value() {
        // Light straight above the hit point at distance 5: L = +Y, N = -Y,
        // attenuation = 1 / (1 + 0.25 + 1.25) = 0.4
        let color = floor_color(Some(Vec3::new(1.0, 4.0, -1.0)), false);
        let m = Material::default();

        // R = 2(L.N)N - L = +Y; V = normalize((0, 5, -10) - hit) = (-1, 6, -9) / sqrt(118)
        let r_dot_v = 6.0 / 118f64.sqrt();
        let expected = m.ambient + m.diffuse * 0.4 + m.specular * 0.4 * r_dot_v.powf(m.shininess);
        assert!((color.x - FLOOR_COLOR.x * expected).abs() < 1e-12);
        assert!((color.y - FLOOR_COLOR.y * expected).abs() < 1e-12);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let light = Some(Vec3::new(1.0, 4.0, -1.0));
        let a = floor_color(light, false);
        let b = floor_color(light, false);
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
        assert_eq!(a.z.to_bits(), b.z.to_bits());
    }

    #[test]
    fn test_non_reflective_ignores_depth() {
        let mut scene = empty_scene(Vec3::new(0.0, 5.0, -10.0));
        scene.add_model(floor());
        scene.add_light(PointLight::white(Vec3::new(1.0, 4.0, -1.0)));

        let shallow = resolve_color(&scene, &floor_segment(), 0).unwrap();
        let deep = resolve_color(&scene, &floor_segment(), MAX_DEPTH).unwrap();
        assert_eq!(shallow, deep);
    }

    const CEILING_COLOR: Color = color::rgb(0.1, 0.7, 0.3);
    const MIRROR_COLOR: Color = color::rgb(0.9, 0.9, 0.2);

    /// A 45 degree perfect mirror through the origin (plane y = z) sending
    /// +Z rays up, and a colored ceiling at y = 3. No lights; all ambient
    /// terms are 1 so ambient light passes colors through unchanged.
    fn mirror_scene() -> Scene {
        let mut scene = empty_scene(Vec3::new(0.0, 0.0, -10.0));
        let passthrough = Material {
            ambient: 1.0,
            ..Default::default()
        };

        let mirror = quad(
            Vec3::new(-2.0, -2.0, -2.0),
            Vec3::new(3.0, -2.0, -2.0),
            Vec3::new(3.0, 2.0, 2.0),
            Vec3::new(-2.0, 2.0, 2.0),
            MIRROR_COLOR,
        );
        let ceiling = quad(
            Vec3::new(-2.0, 3.0, -2.0),
            Vec3::new(3.0, 3.0, -2.0),
            Vec3::new(3.0, 3.0, 2.0),
            Vec3::new(-2.0, 3.0, 2.0),
            CEILING_COLOR,
        );

        scene.add_model(
            Model::new(
                "mirror",
                mirror,
                Material {
                    reflectivity: 1.0,
                    ..passthrough
                },
            )
            .unwrap(),
        );
        scene.add_model(Model::new("ceiling", ceiling, passthrough).unwrap());
        scene
    }

    fn primary_segment(scene: &Scene) -> Segment {
        let ray = scene.primary_ray(0, 0);
        scene.volume().clip_ahead(&ray).unwrap()
    }

    fn assert_color_eq(a: Color, b: Color) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9 && (a.z - b.z).abs() < 1e-9,
            "{:?} != {:?}",
            a,
            b
        );
        assert_eq!(a.w, b.w);
    }

    #[test]
    fn test_perfect_mirror_shows_facing_surface() {
        let scene = mirror_scene();
        let color = resolve_color(&scene, &primary_segment(&scene), MAX_DEPTH)
            .unwrap()
            .unwrap();

        assert_color_eq(color, CEILING_COLOR);
    }

    #[test]
    fn test_exhausted_depth_falls_back_to_base_color() {
        let scene = mirror_scene();
        let segment = primary_segment(&scene);

        let flat = resolve_color(&scene, &segment, 0).unwrap().unwrap();
        assert_color_eq(flat, MIRROR_COLOR);

        let one_bounce = resolve_color(&scene, &segment, 1).unwrap().unwrap();
        assert_color_eq(one_bounce, CEILING_COLOR);
    }

    #[test]
    fn test_mirror_seeing_nothing_keeps_base_color() {
        let mut scene = mirror_scene();
        // Rebuild without the ceiling
        let mirror = scene.models()[0].clone();
        scene = empty_scene(scene.camera().eye);
        scene.add_model(mirror);

        let color = resolve_color(&scene, &primary_segment(&scene), MAX_DEPTH)
            .unwrap()
            .unwrap();
        assert_color_eq(color, MIRROR_COLOR);
    }

    #[test]
    fn test_half_mirror_blends() {
        let mut scene = empty_scene(Vec3::new(0.0, 0.0, -10.0));
        let source = mirror_scene();
        let mirror = source.models()[0].triangles().to_vec();
        let half = Material {
            ambient: 1.0,
            reflectivity: 0.5,
            ..Default::default()
        };
        scene.add_model(Model::new("half", mirror, half).unwrap());
        scene.add_model(source.models()[1].clone());

        let color = resolve_color(&scene, &primary_segment(&scene), MAX_DEPTH)
            .unwrap()
            .unwrap();
        let expected = blend(MIRROR_COLOR, CEILING_COLOR, 0.5);
        assert_color_eq(color, expected);
    }

    #[test]
    fn test_light_on_surface_is_an_error() {
        let mut scene = empty_scene(Vec3::new(0.0, 5.0, -10.0));
        scene.add_model(floor());
        // Exactly at the hit point
        scene.add_light(PointLight::white(Vec3::new(1.0, -1.0, -1.0)));

        let result = resolve_color(&scene, &floor_segment(), MAX_DEPTH);
        assert!(matches!(
            result,
            Err(RenderError::DegenerateVector { what: "light", .. })
        ));
    }
}
