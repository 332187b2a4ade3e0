//! Render pass.
//!
//! Implements single-sample ray tracing with:
//! - One primary ray through each pixel center, clipped to the volume
//! - Recursive mirror reflection with configurable depth
//! - Parallel bucket rendering

use std::time::Instant;

use glint_core::Scene;
use glint_math::{color, Color};
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, DEFAULT_BUCKET_SIZE};
use crate::error::RenderResult;
use crate::framebuffer::FrameBuffer;
use crate::shading::{resolve_color, MAX_DEPTH};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum reflection depth
    pub max_depth: u32,
    /// Color of pixels whose ray hits nothing
    pub background: Color,
    /// Side length of a render bucket in pixels
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            background: color::BLACK,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Resolve the color of a single pixel.
///
/// `None` means the pixel's ray missed the volume or every surface in it.
pub fn render_pixel(
    scene: &Scene,
    row: u32,
    column: u32,
    config: &RenderConfig,
) -> RenderResult<Option<Color>> {
    let ray = scene.primary_ray(row, column);
    match scene.volume().clip_ahead(&ray) {
        Some(segment) => resolve_color(scene, &segment, config.max_depth),
        None => Ok(None),
    }
}

/// Render the entire scene to a frame buffer.
///
/// Buckets are rendered in parallel on the current rayon pool; each returns
/// its own pixels, which are then copied into non-overlapping regions of the
/// frame buffer. The first error aborts the pass.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderResult<FrameBuffer> {
    let plane = scene.image_plane();
    let (rows, columns) = (plane.rows(), plane.columns());
    let buckets = generate_buckets(rows, columns, config.bucket_size);

    log::info!(
        "Rendering {}x{} ({} buckets, {} triangles, {} lights, depth {})",
        columns,
        rows,
        buckets.len(),
        scene.triangle_count(),
        scene.lights().len(),
        config.max_depth
    );
    let start = Instant::now();

    let results = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, scene, config))
        .collect::<RenderResult<Vec<_>>>()?;

    let mut image = FrameBuffer::new(rows, columns, config.background);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

/// Render on a dedicated pool of `threads` workers.
pub fn render_with_threads(
    scene: &Scene,
    config: &RenderConfig,
    threads: usize,
) -> RenderResult<FrameBuffer> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;
    log::debug!("Using {} render threads", pool.current_num_threads());
    pool.install(|| render(scene, config))
}
