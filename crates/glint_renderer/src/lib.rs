//! Glint Renderer - CPU ray tracing
//!
//! One ray per pixel through the image plane, clipped to the rendering
//! volume, shaded with Phong lighting, hard shadows and recursive mirror
//! reflection. Buckets of pixels are rendered in parallel with rayon.

mod bucket;
mod error;
mod framebuffer;
mod renderer;
mod shading;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use error::{RenderError, RenderResult};
pub use framebuffer::FrameBuffer;
pub use renderer::{render, render_pixel, render_with_threads, RenderConfig};
pub use shading::{direct_light, resolve_color, MAX_DEPTH};

/// Re-export the scene types the renderer consumes
pub use glint_core::{Scene, SceneDescription};
pub use glint_math::{Color, Vec3};
