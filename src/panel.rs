//! Control panel model: tool strip layout, hit testing, visibility.
//!
//! Replaces the original widget's DOM tool strip with an explicit model. The
//! panel lays its controls out along one canvas edge, maps click points to
//! commands, and tracks the active tool so a renderer can highlight it. It
//! carries no drawing semantics of its own; the host routes the resulting
//! [`PanelCommand`] into the interaction controller.

use crate::config::{SketchConfig, ToolsPosition};
use crate::draw::Color;
use crate::input::Tool;
use crate::util::Rect;

/// Edge length of one square control cell, in pixels.
const CELL: i32 = 36;
/// Gap between cells and from the canvas edge, in pixels.
const PADDING: i32 = 4;

/// A command produced by clicking a panel control.
///
/// State-changing commands are applied to the controller by the facade;
/// `Save` is returned to the host, which decides what to do with the
/// exported image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelCommand {
    /// Erase the committed layer
    Clear,
    /// Make the given tool active
    SelectTool(Tool),
    /// Export/download the current image
    Save,
    /// Set the stroke color from the palette
    SetStrokeColor(Color),
    /// Set the fill color from the palette
    SetFillColor(Color),
    /// Set the line width from the size options
    SetLineWidth(f64),
}

#[derive(Debug, Clone, Copy)]
struct PanelEntry {
    command: PanelCommand,
    rect: Rect,
}

/// The control panel: placement, visibility, and hit regions.
pub struct Panel {
    position: ToolsPosition,
    visible: bool,
    active_tool: Tool,
    entries: Vec<PanelEntry>,
    canvas_width: i32,
    canvas_height: i32,
    sketch_palette: Vec<Color>,
    fill_palette: Vec<Color>,
    sizes: Vec<f64>,
}

impl Panel {
    /// Builds the panel from configuration and the canvas dimensions.
    pub fn new(config: &SketchConfig, canvas_width: i32, canvas_height: i32) -> Self {
        let mut panel = Self {
            position: config.tools_position,
            visible: !config.hide_tools,
            active_tool: Tool::Pen,
            entries: Vec::new(),
            canvas_width,
            canvas_height,
            sketch_palette: config.sketch_palette(),
            fill_palette: config.fill_palette(),
            sizes: config.sizes.clone(),
        };
        panel.rebuild();
        panel
    }

    /// Lays the controls out along the configured edge.
    ///
    /// Control order mirrors the widget's strip: clear, tools, save, stroke
    /// swatches, fill swatches, size options. Cells run along the edge with
    /// a fixed pitch; overflow past the canvas edge simply hit-tests nowhere
    /// useful.
    fn rebuild(&mut self) {
        let mut commands = vec![
            PanelCommand::Clear,
            PanelCommand::SelectTool(Tool::Pen),
            PanelCommand::SelectTool(Tool::Eraser),
            PanelCommand::SelectTool(Tool::Line),
            PanelCommand::SelectTool(Tool::Rectangle),
            PanelCommand::SelectTool(Tool::Circle),
            PanelCommand::Save,
        ];
        commands.extend(
            self.sketch_palette
                .iter()
                .map(|&c| PanelCommand::SetStrokeColor(c)),
        );
        commands.extend(
            self.fill_palette
                .iter()
                .map(|&c| PanelCommand::SetFillColor(c)),
        );
        commands.extend(self.sizes.iter().map(|&s| PanelCommand::SetLineWidth(s)));

        let cross = match self.position {
            ToolsPosition::Left | ToolsPosition::Top => PADDING,
            ToolsPosition::Right => self.canvas_width - CELL - PADDING,
            ToolsPosition::Bottom => self.canvas_height - CELL - PADDING,
        };

        self.entries = commands
            .into_iter()
            .enumerate()
            .map(|(i, command)| {
                let main = PADDING + i as i32 * (CELL + PADDING);
                let rect = if self.position.is_vertical() {
                    Rect::new(cross, main, CELL, CELL)
                } else {
                    Rect::new(main, cross, CELL, CELL)
                };
                PanelEntry { command, rect }
            })
            .collect();
    }

    /// Relays out after a canvas resize.
    pub fn set_canvas_size(&mut self, width: i32, height: i32) {
        self.canvas_width = width;
        self.canvas_height = height;
        self.rebuild();
    }

    /// Moves the strip to a different edge.
    pub fn set_position(&mut self, position: ToolsPosition) {
        self.position = position;
        self.rebuild();
    }

    /// The current strip placement.
    pub fn position(&self) -> ToolsPosition {
        self.position
    }

    /// Makes the panel visible.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hides the panel; a hidden panel hit-tests to nothing.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the panel is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Records which tool control should render highlighted.
    pub fn set_active_tool(&mut self, tool: Tool) {
        self.active_tool = tool;
    }

    /// The highlighted tool control.
    pub fn active_tool(&self) -> Tool {
        self.active_tool
    }

    /// Maps a click point to the command of the control under it.
    pub fn command_at(&self, x: i32, y: i32) -> Option<PanelCommand> {
        if !self.visible {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.rect.contains(x, y))
            .map(|entry| entry.command)
    }

    /// The hit rectangle of a control, for renderers.
    pub fn control_rect(&self, command: PanelCommand) -> Option<Rect> {
        self.entries
            .iter()
            .find(|entry| entry.command == command)
            .map(|entry| entry.rect)
    }
}
