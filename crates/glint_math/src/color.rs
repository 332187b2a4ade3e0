//! RGBA colors.
//!
//! Colors are plain `DVec4`s (`x, y, z, w` = `r, g, b, a`), so glam's
//! component-wise `*`, `+` and scalar `*` do the lighting arithmetic.
//! Channels are not clamped; that happens only when the frame buffer is
//! exported. Serialized as a `[r, g, b, a]` array.

use glam::DVec4;

pub type Color = DVec4;

pub const BLACK: Color = rgb(0.0, 0.0, 0.0);
pub const WHITE: Color = rgb(1.0, 1.0, 1.0);

/// Create an opaque color.
pub const fn rgb(r: f64, g: f64, b: f64) -> Color {
    DVec4::new(r, g, b, 1.0)
}

/// Mix `(1 - weight) * base + weight * other` over RGB.
///
/// Alpha is taken from `base`.
pub fn blend(base: Color, other: Color, weight: f64) -> Color {
    with_alpha(base.lerp(other, weight), base.w)
}

/// Copy of `color` with a replaced alpha channel.
#[inline]
pub fn with_alpha(color: Color, a: f64) -> Color {
    color.truncate().extend(a)
}
