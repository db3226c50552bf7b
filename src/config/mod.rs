//! Configuration support for the sketch engine.
//!
//! Construction-time options cover the allowed line widths, the color
//! palettes and defaults offered to the control panel, and the panel's
//! placement and initial visibility. Options deserialize from TOML; a
//! missing file or missing fields yield defaults, and malformed values are
//! corrected with a logged warning rather than failing construction.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ToolsPosition;
pub use types::ColorsConfig;

use crate::draw::{self, Color};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Sketch widget configuration.
///
/// # Example TOML
/// ```toml
/// sizes = [2.0, 4.0, 6.0]
/// tools_position = "left"
/// hide_tools = false
///
/// [colors]
/// sketch_default_color = "#000000"
/// fill_default_color = "#ffffff"
/// sketch_colors = ["red", "blue", "#222222"]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SketchConfig {
    /// Ordered sequence of allowed line-width values
    #[serde(default = "default_sizes")]
    pub sizes: Vec<f64>,

    /// Color palettes and default colors
    #[serde(default)]
    pub colors: ColorsConfig,

    /// Control panel placement
    #[serde(default)]
    pub tools_position: ToolsPosition,

    /// Whether the control panel starts hidden
    #[serde(default)]
    pub hide_tools: bool,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            colors: ColorsConfig::default(),
            tools_position: ToolsPosition::default(),
            hide_tools: false,
        }
    }
}

fn default_sizes() -> Vec<f64> {
    (1..=10).map(|s| s as f64).collect()
}

impl SketchConfig {
    /// Loads configuration from a TOML file, or returns defaults if the
    /// file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid TOML syntax.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: SketchConfig = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Corrects invalid configuration values in place.
    ///
    /// Malformed entries fall back to defaults with a logged warning; this
    /// never fails:
    /// - non-positive or non-finite sizes are dropped
    /// - an empty size list falls back to the default 1..=10 run
    /// - unparseable palette entries are dropped
    /// - unparseable default colors fall back to black/white
    pub fn validate_and_clamp(&mut self) {
        let valid_sizes: Vec<f64> = self
            .sizes
            .iter()
            .copied()
            .filter(|s| {
                let ok = s.is_finite() && *s > 0.0;
                if !ok {
                    warn!("Dropping invalid line width {s}");
                }
                ok
            })
            .collect();

        if valid_sizes.is_empty() {
            warn!("No valid line widths configured, using default 1..=10");
            self.sizes = default_sizes();
        } else {
            self.sizes = valid_sizes;
        }

        self.colors.sketch_colors.retain(|entry| {
            let ok = Color::parse(entry).is_some();
            if !ok {
                warn!("Dropping unrecognized sketch color '{entry}'");
            }
            ok
        });
        self.colors.fill_colors.retain(|entry| {
            let ok = Color::parse(entry).is_some();
            if !ok {
                warn!("Dropping unrecognized fill color '{entry}'");
            }
            ok
        });

        if Color::parse(&self.colors.sketch_default_color).is_none() {
            warn!(
                "Unrecognized sketch default color '{}', using #000000",
                self.colors.sketch_default_color
            );
            self.colors.sketch_default_color = "#000000".to_string();
        }
        if Color::parse(&self.colors.fill_default_color).is_none() {
            warn!(
                "Unrecognized fill default color '{}', using #ffffff",
                self.colors.fill_default_color
            );
            self.colors.fill_default_color = "#ffffff".to_string();
        }
    }

    /// The initial line width: first entry of the configured size list.
    pub fn initial_width(&self) -> f64 {
        self.sizes.first().copied().unwrap_or(1.0)
    }

    /// The resolved initial stroke color.
    pub fn sketch_default(&self) -> Color {
        Color::parse(&self.colors.sketch_default_color).unwrap_or(draw::BLACK)
    }

    /// The resolved initial fill color.
    pub fn fill_default(&self) -> Color {
        Color::parse(&self.colors.fill_default_color).unwrap_or(draw::WHITE)
    }

    /// The resolved stroke palette, skipping unparseable entries.
    pub fn sketch_palette(&self) -> Vec<Color> {
        self.colors
            .sketch_colors
            .iter()
            .filter_map(|s| Color::parse(s))
            .collect()
    }

    /// The resolved fill palette, skipping unparseable entries.
    pub fn fill_palette(&self) -> Vec<Color> {
        self.colors
            .fill_colors
            .iter()
            .filter_map(|s| Color::parse(s))
            .collect()
    }
}
