//! Output pixel grid.

use std::path::Path;

use glint_math::Color;

use crate::bucket::BucketResult;
use crate::error::RenderResult;

/// A `rows x columns` grid of colors, row-major, row 0 at the top.
///
/// Every cell starts at the background color; pixels whose ray hits nothing
/// are simply never written.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    rows: u32,
    columns: u32,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    /// Create a frame buffer filled with `background`.
    pub fn new(rows: u32, columns: u32, background: Color) -> Self {
        Self {
            rows,
            columns,
            pixels: vec![background; rows as usize * columns as usize],
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    fn index(&self, row: u32, column: u32) -> usize {
        row as usize * self.columns as usize + column as usize
    }

    /// Get the pixel at (row, column).
    pub fn get(&self, row: u32, column: u32) -> Color {
        self.pixels[self.index(row, column)]
    }

    /// Set the pixel at (row, column).
    pub fn set(&mut self, row: u32, column: u32, color: Color) {
        let index = self.index(row, column);
        self.pixels[index] = color;
    }

    /// Copy a rendered bucket into place, skipping pixels that saw nothing.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        let mut colors = result.pixels.iter();

        for row in bucket.row..bucket.row + bucket.rows {
            for column in bucket.column..bucket.column + bucket.columns {
                if let Some(Some(color)) = colors.next() {
                    self.set(row, column, *color);
                }
            }
        }
    }

    /// Convert to 8-bit RGBA bytes, clamping each channel to [0, 1].
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba8(*color));
        }
        bytes
    }

    /// Write the frame buffer as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            &self.to_rgba8(),
            self.columns,
            self.rows,
            image::ColorType::Rgba8,
        )?;
        log::info!("Saved {}x{} image to {}", self.columns, self.rows, path.display());
        Ok(())
    }
}

#[inline]
fn channel_to_u8(x: f64) -> u8 {
    (255.0 * x.clamp(0.0, 1.0)).round() as u8
}

/// Convert a color to 8-bit RGBA.
pub fn color_to_rgba8(color: Color) -> [u8; 4] {
    color.to_array().map(channel_to_u8)
}
