//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that can be rendered
//! independently and in parallel using rayon. Buckets never overlap, so
//! each one owns its own frame buffer cells.

use glint_core::Scene;
use glint_math::Color;

use crate::error::RenderResult;
use crate::renderer::{render_pixel, RenderConfig};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Row of the bucket's top-left pixel
    pub row: u32,
    /// Column of the bucket's top-left pixel
    pub column: u32,
    /// Height of the bucket in pixels
    pub rows: u32,
    /// Width of the bucket in pixels
    pub columns: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(row: u32, column: u32, rows: u32, columns: u32, index: usize) -> Self {
        Self {
            row,
            column,
            rows,
            columns,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Tile a `rows x columns` image into buckets of at most `bucket_size`
/// pixels per side, in row-major order. Edge buckets are cropped.
pub fn generate_buckets(rows: u32, columns: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);
    let mut buckets = Vec::new();

    let mut row: u32 = 0;
    while row < rows {
        let mut column: u32 = 0;
        while column < columns {
            let bh = size.min(rows - row);
            let bw = size.min(columns - column);
            buckets.push(Bucket::new(row, column, bh, bw, buckets.len()));
            column = column.saturating_add(size);
        }
        row = row.saturating_add(size);
    }

    buckets
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order; `None` where the ray hit nothing
    pub pixels: Vec<Option<Color>>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Option<Color>>) -> Self {
        Self { bucket, pixels }
    }
}

/// Render every pixel of a bucket.
pub fn render_bucket(
    bucket: &Bucket,
    scene: &Scene,
    config: &RenderConfig,
) -> RenderResult<BucketResult> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count());

    for local_row in 0..bucket.rows {
        for local_column in 0..bucket.columns {
            let row = bucket.row + local_row;
            let column = bucket.column + local_column;
            pixels.push(render_pixel(scene, row, column, config)?);
        }
    }

    log::debug!(
        "Bucket {} at ({}, {}) done, {} hits",
        bucket.index,
        bucket.row,
        bucket.column,
        pixels.iter().filter(|p| p.is_some()).count()
    );

    Ok(BucketResult::new(*bucket, pixels))
}
