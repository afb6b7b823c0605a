//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/sketchpad/config.toml`. Settings
//! cover drawing defaults, window geometry, and UI preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::canvas::Tool;
use crate::draw::color::{self, Color};

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("failed to read config from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config from {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black,
    /// lightgreen
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped to predefined RGBA values using
    /// [`color::name_to_color`]. Unknown color names default to black with a
    /// warning. RGB arrays are converted from 0-255 range to 0.0-1.0 range
    /// with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => color::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{name}', using black");
                color::BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}

/// Drawing-related settings.
///
/// Controls the appearance of shapes and which tool, if any, is preselected
/// when the window opens.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Stroke color - either a named color or an RGB array like `[0, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Outline thickness in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Interior fill for ellipses
    #[serde(default = "default_ellipse_fill")]
    pub ellipse_fill: ColorSpec,

    /// Tool preselected at startup ("dot", "line", "rectangle", "ellipse").
    /// When unset, no tool is active until one is picked from the menu.
    #[serde(default)]
    pub default_tool: Option<String>,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            ellipse_fill: default_ellipse_fill(),
            default_tool: None,
        }
    }
}

impl DrawingConfig {
    /// The tool to preselect at startup, if a valid one is configured.
    pub fn initial_tool(&self) -> Option<Tool> {
        self.default_tool.as_deref().and_then(Tool::from_name)
    }
}

/// Window geometry settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window width in logical pixels (valid range: 200 - 4096)
    #[serde(default = "default_window_side")]
    pub width: f32,

    /// Window height in logical pixels (valid range: 200 - 4096)
    #[serde(default = "default_window_side")]
    pub height: f32,

    /// Allow resizing the window
    #[serde(default)]
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_side(),
            height: default_window_side(),
            resizable: false,
        }
    }
}

/// UI display preferences.
#[derive(Debug, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the status bar displaying the selected tool
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status(),
        }
    }
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thickness() -> f64 {
    2.0
}

fn default_ellipse_fill() -> ColorSpec {
    ColorSpec::Name("lightgreen".to_string())
}

fn default_window_side() -> f32 {
    500.0
}

fn default_show_status() -> bool {
    true
}

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_thickness = 2.0
/// ellipse_fill = [144, 238, 144]
/// default_tool = "line"
///
/// [window]
/// width = 500
/// height = 500
/// resizable = false
///
/// [ui]
/// show_status_bar = true
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Drawing defaults (colors, thickness, preselected tool)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Window geometry
    #[serde(default)]
    pub window: WindowConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged; an unknown `default_tool` is dropped.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1.0 - 20.0
    /// - `window.width` / `window.height`: 200 - 4096
    fn validate_and_clamp(&mut self) {
        if !(1.0..=20.0).contains(&self.drawing.default_thickness) {
            warn!(
                "Invalid default_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = self.drawing.default_thickness.clamp(1.0, 20.0);
        }

        if !(200.0..=4096.0).contains(&self.window.width) {
            warn!(
                "Invalid window width {:.0}, clamping to 200-4096 range",
                self.window.width
            );
            self.window.width = self.window.width.clamp(200.0, 4096.0);
        }
        if !(200.0..=4096.0).contains(&self.window.height) {
            warn!(
                "Invalid window height {:.0}, clamping to 200-4096 range",
                self.window.height
            );
            self.window.height = self.window.height.clamp(200.0, 4096.0);
        }

        if let Some(name) = &self.drawing.default_tool {
            if Tool::from_name(name).is_none() {
                warn!("Unknown default_tool '{name}', starting with no tool selected");
                self.drawing.default_tool = None;
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("sketchpad").join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// no file exists there.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if a
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here: the caller
    /// asked for this path specifically.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config =
            toml::from_str(&config_str).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {config:?}");

        Ok(config)
    }
}
