//! Drawing state machine and interaction state management.

use super::events::PointerEvent;
use super::tool::Tool;
use crate::draw::{self, Color, SurfaceSet};
use crate::error::SketchError;
use crate::util;

/// Current gesture state machine.
///
/// Tracks whether the user is idle or mid-drag. Transitions occur on
/// pointer press and release; at most one gesture is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    /// No gesture in progress - waiting for a pointer press
    Idle,
    /// Pointer button held down, shape in progress
    Dragging {
        /// X coordinate where the pointer was pressed
        start_x: i32,
        /// Y coordinate where the pointer was pressed
        start_y: i32,
        /// Most recently sampled pointer X coordinate
        last_x: i32,
        /// Most recently sampled pointer Y coordinate
        last_y: i32,
    },
}

/// Interaction controller: surfaces, style state, and the gesture machine.
///
/// Owns the committed/preview layer pair and the mutable tool/style state,
/// and processes pointer events to update both. Style state is mutated only
/// through the setter methods, which the control panel (or the embedding
/// host) invokes.
pub struct InputState {
    /// The committed and preview raster layers
    pub layers: SurfaceSet,
    /// Currently selected drawing tool
    tool: Tool,
    /// Current stroke color
    stroke_color: Color,
    /// Current fill color (rectangle and circle tools)
    fill_color: Color,
    /// Current line width in pixels, also the eraser square side
    line_width: f64,
    /// Current gesture state machine
    state: GestureState,
}

impl InputState {
    /// Creates a controller with the given layers and style defaults.
    ///
    /// The initial tool is the pen.
    pub fn with_defaults(
        layers: SurfaceSet,
        stroke_color: Color,
        fill_color: Color,
        line_width: f64,
    ) -> Self {
        Self {
            layers,
            tool: Tool::Pen,
            stroke_color,
            fill_color,
            line_width,
            state: GestureState::Idle,
        }
    }

    /// Routes a pointer event to the matching transition function.
    pub fn handle_event(&mut self, event: PointerEvent) -> Result<(), SketchError> {
        match event {
            PointerEvent::Press { x, y } => self.on_pointer_press(x, y),
            PointerEvent::Motion { x, y } => self.on_pointer_motion(x, y),
            PointerEvent::Release { x, y } => self.on_pointer_release(x, y),
        }
    }

    /// Processes a pointer press.
    ///
    /// From Idle: clears the preview layer, records the gesture origin, and
    /// transitions to Dragging. A press while already dragging is ignored
    /// (single-pointer model).
    pub fn on_pointer_press(&mut self, x: i32, y: i32) -> Result<(), SketchError> {
        if !matches!(self.state, GestureState::Idle) {
            return Ok(());
        }

        self.layers.preview().clear()?;
        self.state = GestureState::Dragging {
            start_x: x,
            start_y: y,
            last_x: x,
            last_y: y,
        };
        log::debug!("gesture started at ({x}, {y}) with {:?}", self.tool);
        Ok(())
    }

    /// Processes pointer motion.
    ///
    /// While dragging, dispatches to the active tool's rendering routine:
    /// draggable shapes clear the preview and redraw from the gesture start,
    /// the pen strokes an incremental segment, and the eraser punches the
    /// committed layer directly with no preview step. Motion while idle is a
    /// no-op.
    pub fn on_pointer_motion(&mut self, x: i32, y: i32) -> Result<(), SketchError> {
        let GestureState::Dragging {
            start_x,
            start_y,
            last_x,
            last_y,
        } = self.state
        else {
            return Ok(());
        };

        match self.tool {
            Tool::Pen => {
                let ctx = self.layers.preview().context()?;
                draw::stroke_segment(
                    &ctx,
                    last_x,
                    last_y,
                    x,
                    y,
                    self.stroke_color,
                    self.line_width,
                );
            }
            Tool::Eraser => {
                // Bypasses the preview/commit separation: mutates the
                // committed layer immediately and continuously while
                // dragging. Out-of-bounds squares are clipped by the layer.
                self.layers.committed().clear_rect(
                    x as f64,
                    y as f64,
                    self.line_width,
                    self.line_width,
                )?;
            }
            Tool::Line => {
                self.layers.preview().clear()?;
                let ctx = self.layers.preview().context()?;
                draw::stroke_segment(
                    &ctx,
                    start_x,
                    start_y,
                    x,
                    y,
                    self.stroke_color,
                    self.line_width,
                );
            }
            Tool::Rectangle => {
                self.layers.preview().clear()?;
                let ctx = self.layers.preview().context()?;
                let bounds = util::rect_bounds(start_x, start_y, x, y);
                draw::draw_rect(
                    &ctx,
                    bounds.x,
                    bounds.y,
                    bounds.width,
                    bounds.height,
                    self.stroke_color,
                    self.fill_color,
                    self.line_width,
                );
            }
            Tool::Circle => {
                self.layers.preview().clear()?;
                let ctx = self.layers.preview().context()?;
                let radius = util::distance(start_x, start_y, x, y);
                draw::draw_circle(
                    &ctx,
                    start_x,
                    start_y,
                    radius,
                    self.stroke_color,
                    self.fill_color,
                    self.line_width,
                );
            }
        }

        self.state = GestureState::Dragging {
            start_x,
            start_y,
            last_x: x,
            last_y: y,
        };
        Ok(())
    }

    /// Processes a pointer release.
    ///
    /// Composites the preview layer's pixel content onto the committed layer
    /// at the same origin, clears the preview, and returns to Idle. A
    /// release with no active gesture (stray event) is a safe no-op.
    pub fn on_pointer_release(&mut self, _x: i32, _y: i32) -> Result<(), SketchError> {
        if !matches!(self.state, GestureState::Dragging { .. }) {
            return Ok(());
        }

        self.layers.commit_preview()?;
        self.state = GestureState::Idle;
        log::debug!("gesture committed");
        Ok(())
    }

    /// Selects the active drawing tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// The active drawing tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Sets the stroke color.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    /// The current stroke color.
    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Sets the fill color.
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    /// The current fill color.
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Sets the line width.
    ///
    /// Membership in the configured size set is the caller's contract; any
    /// positive width is accepted here.
    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    /// The current line width.
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// The current gesture state.
    pub fn gesture(&self) -> GestureState {
        self.state
    }

    /// Returns true while a drag gesture is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};

    fn make_state() -> InputState {
        let layers = SurfaceSet::new(64, 64).unwrap();
        InputState::with_defaults(layers, BLACK, WHITE, 4.0)
    }

    #[test]
    fn press_starts_a_gesture_and_release_ends_it() {
        let mut state = make_state();
        assert!(!state.is_dragging());

        state.on_pointer_press(10, 10).unwrap();
        assert_eq!(
            state.gesture(),
            GestureState::Dragging {
                start_x: 10,
                start_y: 10,
                last_x: 10,
                last_y: 10,
            }
        );

        state.on_pointer_release(20, 20).unwrap();
        assert!(!state.is_dragging());
    }

    #[test]
    fn stray_release_is_a_no_op() {
        let mut state = make_state();
        state.on_pointer_release(30, 30).unwrap();
        assert_eq!(state.gesture(), GestureState::Idle);
    }

    #[test]
    fn press_while_dragging_is_ignored() {
        let mut state = make_state();
        state.on_pointer_press(5, 5).unwrap();
        state.on_pointer_press(40, 40).unwrap();

        assert_eq!(
            state.gesture(),
            GestureState::Dragging {
                start_x: 5,
                start_y: 5,
                last_x: 5,
                last_y: 5,
            }
        );
    }

    #[test]
    fn motion_while_idle_draws_nothing() {
        let mut state = make_state();
        state.on_pointer_motion(32, 32).unwrap();
        assert_eq!(
            state.layers.preview_mut().pixel(32, 32).unwrap(),
            Some((0, 0, 0, 0))
        );
    }

    #[test]
    fn motion_tracks_the_last_point() {
        let mut state = make_state();
        state.on_pointer_press(10, 10).unwrap();
        state.on_pointer_motion(20, 15).unwrap();

        assert_eq!(
            state.gesture(),
            GestureState::Dragging {
                start_x: 10,
                start_y: 10,
                last_x: 20,
                last_y: 15,
            }
        );
    }

    #[test]
    fn pen_draws_on_preview_not_committed_until_release() {
        let mut state = make_state();
        state.on_pointer_press(10, 32).unwrap();
        state.on_pointer_motion(50, 32).unwrap();

        let (_, _, _, preview_alpha) = state.layers.preview_mut().pixel(30, 32).unwrap().unwrap();
        assert_eq!(preview_alpha, 255);
        assert_eq!(
            state.layers.committed_mut().pixel(30, 32).unwrap(),
            Some((0, 0, 0, 0))
        );

        state.on_pointer_release(50, 32).unwrap();

        let (_, _, _, committed_alpha) =
            state.layers.committed_mut().pixel(30, 32).unwrap().unwrap();
        assert_eq!(committed_alpha, 255);
        assert_eq!(
            state.layers.preview_mut().pixel(30, 32).unwrap(),
            Some((0, 0, 0, 0))
        );
    }

    #[test]
    fn eraser_mutates_committed_on_every_motion() {
        let mut state = make_state();
        {
            let ctx = state.layers.committed().context().unwrap();
            ctx.set_source_rgba(1.0, 0.0, 0.0, 1.0);
            ctx.paint().unwrap();
        }

        state.set_tool(Tool::Eraser);
        state.set_line_width(8.0);
        state.on_pointer_press(20, 20).unwrap();
        state.on_pointer_motion(20, 20).unwrap();

        // Hole appears immediately, before any release.
        assert_eq!(
            state.layers.committed_mut().pixel(22, 22).unwrap(),
            Some((0, 0, 0, 0))
        );
        // Preview stays untouched.
        assert_eq!(
            state.layers.preview_mut().pixel(22, 22).unwrap(),
            Some((0, 0, 0, 0))
        );
        // Pixels outside the square keep their color.
        assert_eq!(
            state.layers.committed_mut().pixel(40, 40).unwrap(),
            Some((255, 0, 0, 255))
        );
    }

    #[test]
    fn draggable_tool_redraws_preview_without_trailing_artifacts() {
        let mut state = make_state();
        state.set_tool(Tool::Line);
        state.on_pointer_press(10, 10).unwrap();
        state.on_pointer_motion(50, 10).unwrap();
        state.on_pointer_motion(10, 50).unwrap();

        // The first preview stroke along y=10 must be gone after the redraw.
        assert_eq!(
            state.layers.preview_mut().pixel(40, 10).unwrap(),
            Some((0, 0, 0, 0))
        );
        // The current segment toward (10, 50) is present.
        let (_, _, _, alpha) = state.layers.preview_mut().pixel(10, 49).unwrap().unwrap();
        assert!(alpha > 0);
    }
}
