//! Cuboid triangulation shared by the clipping volume and cuboid models.

use glint_math::{Color, Vec3};

use crate::error::{SceneError, SceneResult};
use crate::triangle::Triangle;

/// Corner quads of a unit cube; corner index bits are x = 1, y = 2, z = 4.
const FACES: [[usize; 4]; 6] = [
    [0, 2, 6, 4], // -X
    [1, 3, 7, 5], // +X
    [0, 1, 5, 4], // -Y
    [2, 3, 7, 6], // +Y
    [0, 1, 3, 2], // -Z
    [4, 5, 7, 6], // +Z
];

/// Build the 12 triangles of an axis-aligned box spanning `origin` to
/// `origin + size`.
///
/// Every face normal points into the box, which is the orientation the
/// lighting model expects for a solid lit from outside.
pub fn cuboid(origin: Vec3, size: Vec3, color: Color) -> SceneResult<Vec<Triangle>> {
    if !(size.x > 0.0 && size.y > 0.0 && size.z > 0.0) {
        return Err(SceneError::InvalidVolume(size));
    }

    let corner = |i: usize| {
        origin
            + Vec3::new(
                if i & 1 != 0 { size.x } else { 0.0 },
                if i & 2 != 0 { size.y } else { 0.0 },
                if i & 4 != 0 { size.z } else { 0.0 },
            )
    };
    let center = origin + size * 0.5;

    let mut triangles = Vec::with_capacity(12);
    for face in FACES {
        let [a, b, c, d] = face.map(&corner);
        triangles.push(inward(a, b, c, center, color)?);
        triangles.push(inward(a, c, d, center, color)?);
    }

    Ok(triangles)
}

/// Triangle over `a, b, c`, rewound if needed so its normal faces `center`.
fn inward(a: Vec3, b: Vec3, c: Vec3, center: Vec3, color: Color) -> SceneResult<Triangle> {
    let outward = (b - a).cross(c - a).dot((a + b + c) / 3.0 - center) > 0.0;
    if outward {
        Triangle::new(a, c, b, color)
    } else {
        Triangle::new(a, b, c, color)
    }
}
