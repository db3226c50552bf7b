//! Public sketch widget facade.

use crate::config::{SketchConfig, ToolsPosition};
use crate::draw::{Color, SurfaceSet};
use crate::error::SketchError;
use crate::export;
use crate::input::{InputState, PointerEvent, Tool};
use crate::panel::{Panel, PanelCommand};

/// A sketch widget instance.
///
/// Owns the two raster layers, the interaction controller, and the control
/// panel model. Instances are fully isolated; any number may coexist and
/// there is no process-wide state.
pub struct Sketch {
    input: InputState,
    panel: Panel,
    config: SketchConfig,
}

impl Sketch {
    /// Creates a widget with the given configuration and pixel dimensions.
    ///
    /// Malformed configuration values fall back to defaults (see
    /// [`SketchConfig::validate_and_clamp`]); only invalid dimensions or a
    /// failed surface allocation produce an error.
    pub fn new(mut config: SketchConfig, width: i32, height: i32) -> Result<Self, SketchError> {
        config.validate_and_clamp();

        let layers = SurfaceSet::new(width, height)?;
        let input = InputState::with_defaults(
            layers,
            config.sketch_default(),
            config.fill_default(),
            config.initial_width(),
        );
        let panel = Panel::new(&config, width, height);

        Ok(Self {
            input,
            panel,
            config,
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> i32 {
        self.input.layers.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> i32 {
        self.input.layers.height()
    }

    /// Routes a pointer event into the gesture state machine.
    pub fn handle_event(&mut self, event: PointerEvent) -> Result<(), SketchError> {
        self.input.handle_event(event)
    }

    /// Resizes both layers to new pixel dimensions.
    ///
    /// Committed content is discarded - both layers come back blank at the
    /// new size. This mirrors the upstream widget's behavior; resize is a
    /// capacity change, not a transform.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), SketchError> {
        self.input.layers.resize(width, height)?;
        self.panel.set_canvas_size(width, height);
        Ok(())
    }

    /// Erases the committed layer to transparent.
    ///
    /// The preview layer is unaffected; outside an active gesture it is
    /// already empty.
    pub fn clear(&mut self) -> Result<(), SketchError> {
        self.input.layers.committed().clear()
    }

    /// The current image as a `data:image/png;base64,…` URL.
    pub fn image_url(&self) -> Result<String, SketchError> {
        export::image_url(self.input.layers.committed())
    }

    /// The current image as an octet-stream download URL.
    pub fn download_url(&self) -> Result<String, SketchError> {
        export::download_url(self.input.layers.committed())
    }

    /// The current image as raw PNG bytes.
    pub fn png_bytes(&self) -> Result<Vec<u8>, SketchError> {
        self.input.layers.committed().png_bytes()
    }

    /// Selects the active drawing tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.input.set_tool(tool);
        self.panel.set_active_tool(tool);
    }

    /// Selects a tool by its lowercase name.
    ///
    /// Unknown names leave the active tool unchanged and return an error.
    pub fn set_tool_by_name(&mut self, name: &str) -> Result<(), SketchError> {
        let tool =
            Tool::from_name(name).ok_or_else(|| SketchError::UnknownTool(name.to_string()))?;
        self.set_tool(tool);
        Ok(())
    }

    /// The active drawing tool.
    pub fn tool(&self) -> Tool {
        self.input.tool()
    }

    /// Sets the stroke color.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.input.set_stroke_color(color);
    }

    /// Sets the fill color.
    pub fn set_fill_color(&mut self, color: Color) {
        self.input.set_fill_color(color);
    }

    /// Sets the line width.
    pub fn set_line_width(&mut self, width: f64) {
        self.input.set_line_width(width);
    }

    /// Hides the control panel.
    pub fn hide_tools(&mut self) {
        self.panel.hide();
    }

    /// Shows the control panel.
    pub fn show_tools(&mut self) {
        self.panel.show();
    }

    /// Moves the control panel to a different canvas edge.
    pub fn change_tools_position(&mut self, position: ToolsPosition) {
        self.panel.set_position(position);
    }

    /// Moves the control panel by position name.
    ///
    /// Invalid names are ignored with a warning - no layout change applied.
    pub fn change_tools_position_by_name(&mut self, name: &str) {
        match ToolsPosition::from_name(name) {
            Some(position) => self.panel.set_position(position),
            None => log::warn!("Ignoring unknown tools position '{name}'"),
        }
    }

    /// Hit-tests a click against the panel and applies the command.
    ///
    /// Returns the command so the host can react to `Save` (the engine does
    /// not decide where an export goes). Clicks that miss the panel, or
    /// arrive while it is hidden, return `None`.
    pub fn click_panel(&mut self, x: i32, y: i32) -> Result<Option<PanelCommand>, SketchError> {
        let Some(command) = self.panel.command_at(x, y) else {
            return Ok(None);
        };

        match command {
            PanelCommand::Clear => self.clear()?,
            PanelCommand::SelectTool(tool) => self.set_tool(tool),
            PanelCommand::SetStrokeColor(color) => self.set_stroke_color(color),
            PanelCommand::SetFillColor(color) => self.set_fill_color(color),
            PanelCommand::SetLineWidth(width) => self.set_line_width(width),
            PanelCommand::Save => {}
        }
        Ok(Some(command))
    }

    /// The interaction controller (gesture state, style state, layers).
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Mutable access to the interaction controller.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// The control panel model.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// The validated configuration this widget was built with.
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }
}
