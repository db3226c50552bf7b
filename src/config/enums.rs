//! Configuration enum types.

use serde::{Deserialize, Serialize};

/// Control panel placement along a canvas edge.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToolsPosition {
    /// Vertical strip on the left edge
    Left,
    /// Vertical strip on the right edge (default)
    #[default]
    Right,
    /// Horizontal strip along the top edge
    Top,
    /// Horizontal strip along the bottom edge
    Bottom,
}

impl ToolsPosition {
    /// Parses a position from its lowercase name.
    ///
    /// Unknown names yield `None`; callers fall back to the default rather
    /// than failing.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(ToolsPosition::Left),
            "right" => Some(ToolsPosition::Right),
            "top" => Some(ToolsPosition::Top),
            "bottom" => Some(ToolsPosition::Bottom),
            _ => None,
        }
    }

    /// Whether the strip runs vertically (left/right placement).
    pub fn is_vertical(self) -> bool {
        matches!(self, ToolsPosition::Left | ToolsPosition::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_only() {
        assert_eq!(ToolsPosition::from_name("left"), Some(ToolsPosition::Left));
        assert_eq!(
            ToolsPosition::from_name("bottom"),
            Some(ToolsPosition::Bottom)
        );
        assert_eq!(ToolsPosition::from_name("center"), None);
    }

    #[test]
    fn orientation_follows_placement() {
        assert!(ToolsPosition::Left.is_vertical());
        assert!(ToolsPosition::Right.is_vertical());
        assert!(!ToolsPosition::Top.is_vertical());
        assert!(!ToolsPosition::Bottom.is_vertical());
    }
}
