//! Pointer-script records for replaying gestures against a widget.
//!
//! Scripts are JSON arrays of tagged records, e.g.:
//!
//! ```json
//! [
//!   {"event": "tool", "name": "rectangle"},
//!   {"event": "press", "x": 10, "y": 10},
//!   {"event": "motion", "x": 50, "y": 30},
//!   {"event": "release", "x": 50, "y": 30}
//! ]
//! ```
//!
//! The CLI binary replays a script through a [`Sketch`] and writes the
//! committed layer as PNG; integration tests use the same path.

use serde::{Deserialize, Serialize};

use crate::draw::Color;
use crate::error::SketchError;
use crate::sketch::Sketch;

/// One replayable script record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ScriptEvent {
    /// Pointer press at the given coordinates
    Press { x: i32, y: i32 },
    /// Pointer motion
    Motion { x: i32, y: i32 },
    /// Pointer release
    Release { x: i32, y: i32 },
    /// Select a tool by name
    Tool { name: String },
    /// Set the stroke color (hex or palette name)
    StrokeColor { value: String },
    /// Set the fill color (hex or palette name)
    FillColor { value: String },
    /// Set the line width
    Width { value: f64 },
    /// Erase the committed layer
    Clear,
}

/// Applies script events to a widget in order.
///
/// Stops at the first failing event; unknown tool names and unparseable
/// colors are errors here (a script is authored input, unlike configuration
/// which falls back silently).
pub fn run_script(sketch: &mut Sketch, events: &[ScriptEvent]) -> Result<(), SketchError> {
    for event in events {
        match event {
            ScriptEvent::Press { x, y } => sketch.input_mut().on_pointer_press(*x, *y)?,
            ScriptEvent::Motion { x, y } => sketch.input_mut().on_pointer_motion(*x, *y)?,
            ScriptEvent::Release { x, y } => sketch.input_mut().on_pointer_release(*x, *y)?,
            ScriptEvent::Tool { name } => sketch.set_tool_by_name(name)?,
            ScriptEvent::StrokeColor { value } => {
                let color = Color::parse(value)
                    .ok_or_else(|| SketchError::InvalidColor(value.clone()))?;
                sketch.set_stroke_color(color);
            }
            ScriptEvent::FillColor { value } => {
                let color = Color::parse(value)
                    .ok_or_else(|| SketchError::InvalidColor(value.clone()))?;
                sketch.set_fill_color(color);
            }
            ScriptEvent::Width { value } => sketch.set_line_width(*value),
            ScriptEvent::Clear => sketch.clear()?,
        }
    }
    Ok(())
}
