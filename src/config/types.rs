//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Color palette settings.
///
/// Palettes are what the control panel offers as swatches; the engine does
/// not enforce membership when a color is set directly. Entries are color
/// strings - `#rrggbb` / `#rgb` hex or a palette name (red, blue, green,
/// black, white, transparent).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ColorsConfig {
    /// Fill color swatches offered by the panel
    #[serde(default = "default_palette")]
    pub fill_colors: Vec<String>,

    /// Stroke color swatches offered by the panel
    #[serde(default = "default_palette")]
    pub sketch_colors: Vec<String>,

    /// Initial fill color
    #[serde(default = "default_fill_color")]
    pub fill_default_color: String,

    /// Initial stroke color
    #[serde(default = "default_sketch_color")]
    pub sketch_default_color: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            fill_colors: default_palette(),
            sketch_colors: default_palette(),
            fill_default_color: default_fill_color(),
            sketch_default_color: default_sketch_color(),
        }
    }
}

fn default_palette() -> Vec<String> {
    ["red", "blue", "green", "black", "white", "transparent"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_fill_color() -> String {
    "#ffffff".to_string()
}

fn default_sketch_color() -> String {
    "#000000".to_string()
}
