//! Input handling and the drawing tool state machine.
//!
//! This module translates host pointer events into drawing actions. It
//! maintains the active tool, the style state (stroke/fill colors, line
//! width), and the gesture state machine driving the preview and committed
//! layers.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use state::{GestureState, InputState};
pub use tool::Tool;
