//! Generic pointer event types, decoupled from any host toolkit.

/// A pointer event delivered by the embedding host.
///
/// Hosts map their native mouse/touch/stylus events to these values; the
/// engine assumes a single-pointer model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer button pressed at the given surface coordinates.
    Press { x: i32, y: i32 },
    /// Pointer moved while (possibly) dragging.
    Motion { x: i32, y: i32 },
    /// Pointer button released.
    Release { x: i32, y: i32 },
}
