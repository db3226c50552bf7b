//! Layered raster sketching engine.
//!
//! Two stacked ARGB surfaces - a durable committed layer and an ephemeral
//! preview layer - driven by a pointer gesture state machine with pen,
//! eraser, line, rectangle, and circle tools. The committed layer exports as
//! PNG bytes or data URLs.

pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod input;
pub mod panel;
pub mod script;
pub mod sketch;
pub mod util;

pub use config::SketchConfig;
pub use error::SketchError;
pub use sketch::Sketch;
