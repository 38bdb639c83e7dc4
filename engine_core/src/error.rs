//! Error types for the engine utilities.

use thiserror::Error;

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised when constructing or resizing geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Width or height was negative, NaN, or infinite.
    #[error("invalid extent {width}x{height}: width and height must be finite and non-negative")]
    InvalidExtent { width: f32, height: f32 },
}
