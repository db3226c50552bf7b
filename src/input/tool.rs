//! Drawing tool selection.

/// Drawing tool selection.
///
/// The active tool determines what the gesture handler paints while the
/// pointer drags. Tools persist across gestures until explicitly changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default)
    Pen,
    /// Erases committed pixels under the pointer
    Eraser,
    /// Straight line - between start and end points
    Line,
    /// Rectangle - from corner to corner
    Rectangle,
    /// Circle - center at the start point, radius to the pointer
    Circle,
}

impl Tool {
    /// Whether the preview is cleared and redrawn from the gesture start on
    /// every move (draggable shapes) instead of accumulated incrementally.
    pub fn is_draggable(self) -> bool {
        matches!(self, Tool::Line | Tool::Rectangle | Tool::Circle)
    }

    /// Parses a tool from its lowercase name, as used by `set_tool("…")`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pen" => Some(Tool::Pen),
            "eraser" => Some(Tool::Eraser),
            "line" => Some(Tool::Line),
            "rectangle" => Some(Tool::Rectangle),
            "circle" => Some(Tool::Circle),
            _ => None,
        }
    }

    /// The tool's canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Eraser => "eraser",
            Tool::Line => "line",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
        }
    }
}
