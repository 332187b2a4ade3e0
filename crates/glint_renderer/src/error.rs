use glint_math::Vec3;
use thiserror::Error;

/// Errors that abort a render pass or its export.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A shading direction had zero length, e.g. a light or the eye lying
    /// exactly on a surface. The scene is malformed; no NaN is produced.
    #[error("Zero-length {what} direction at {point}")]
    DegenerateVector { what: &'static str, point: Vec3 },

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
