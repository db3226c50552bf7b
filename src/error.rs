//! Error types for the sketch engine.

use thiserror::Error;

/// Errors that can occur while driving the sketch engine.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("rendering failed: {0}")]
    Render(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] cairo::IoError),

    #[error("surface readback failed: {0}")]
    Readback(#[from] cairo::BorrowError),

    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("unrecognized color '{0}'")]
    InvalidColor(String),
}
