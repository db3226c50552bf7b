//! Rendering primitives and raster surfaces (Cairo-based).
//!
//! This module defines the drawing types used by the sketch engine:
//! - [`Color`]: RGBA color representation with palette constants and parsing
//! - [`Surface`] / [`SurfaceSet`]: the committed and preview raster layers
//! - Rendering routines for the pen and shape tools

pub mod color;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use render::{draw_circle, draw_rect, stroke_segment};
pub use surface::{Surface, SurfaceSet};

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, RED, TRANSPARENT, WHITE};
