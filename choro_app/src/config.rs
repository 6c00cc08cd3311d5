// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! YAML configuration.
//!
//! Every field has a default, so an empty document (or no file at all) reproduces the
//! stock layout: a 640×460 map at scale 800 beside a 544×460 chart, five blue classes,
//! and one-second transitions.

use std::path::{Path, PathBuf};

use kurbo::Rect;
use peniko::Color;
use peniko::color::{Srgb, parse_color as parse_css_color};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading or resolving a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The YAML is malformed or has unknown fields.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// A color is not valid CSS.
    #[error("invalid color {text:?}: {reason}")]
    Color {
        /// The configured text.
        text: String,
        /// Why the parser rejected it.
        reason: String,
    },
    /// No color classes were configured.
    #[error("at least one color class is required")]
    NoColorClasses,
    /// An explicit attribute list was configured but is empty.
    #[error("the attribute list is empty")]
    NoAttributes,
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Input files.
    pub data: DataConfig,
    /// Selectable attributes in order. When unset, every non-`NAME` CSV column is used.
    pub attributes: Option<Vec<String>>,
    /// Page size used for label placement.
    pub viewport: ViewportConfig,
    /// Map surface.
    pub map: MapConfig,
    /// Chart surface.
    pub chart: ChartConfig,
    /// Paints.
    pub colors: ColorConfig,
    /// Attribute-change animation.
    pub transition: TransitionConfig,
    /// Floating info label.
    pub label: LabelConfig,
    /// Attribute dropdown.
    pub selector: SelectorConfig,
}

impl Config {
    /// Load from a YAML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_str(&content)
    }

    /// Load from a YAML string.
    pub fn load_from_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as a map.
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the fields that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attributes.as_ref().is_some_and(Vec::is_empty) {
            return Err(ConfigError::NoAttributes);
        }
        self.colors.resolve().map(drop)
    }
}

/// Input files and the topology object to decode.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// Attribute table.
    pub csv: PathBuf,
    /// Region topology.
    pub topology: PathBuf,
    /// Object inside the topology holding the regions.
    pub object: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv: PathBuf::from("data/MentalDistress_65orOlder.csv"),
            topology: PathBuf::from("data/US_States.topojson"),
            object: "US_States".into(),
        }
    }
}

/// The page the two surfaces are laid out in.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    /// Page width; labels flip left near this edge.
    pub width: f64,
    /// Page height.
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Map surface geometry.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
    /// Projection scale.
    pub scale: f64,
    /// Outline width of unhighlighted regions.
    pub stroke_width: f64,
    /// Whether to draw the class legend.
    pub legend: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 460.0,
            scale: 800.0,
            stroke_width: 0.5,
            legend: true,
        }
    }
}

/// Chart surface geometry.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
    /// Space left of the bars (holds the axis).
    pub left_padding: f64,
    /// Space right of the bars.
    pub right_padding: f64,
    /// Space above and below the bars.
    pub top_bottom_padding: f64,
    /// Horizontal gap between bars.
    pub bar_gap: f64,
    /// Fixed value domain of the bar heights and the axis.
    pub domain: [f64; 2],
    /// Approximate number of axis ticks.
    pub tick_count: usize,
    /// Vertical center of the title.
    pub title_y: f64,
    /// Title font size.
    pub title_font_size: f64,
}

impl ChartConfig {
    /// Width available to the bars.
    pub fn inner_width(&self) -> f64 {
        self.width - self.left_padding - self.right_padding
    }

    /// Height available to the bars.
    pub fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.top_bottom_padding
    }

    /// The rectangle the bars are drawn in.
    pub fn plot(&self) -> Rect {
        Rect::new(
            self.left_padding,
            self.top_bottom_padding,
            self.left_padding + self.inner_width(),
            self.top_bottom_padding + self.inner_height(),
        )
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 544.0,
            height: 460.0,
            left_padding: 30.0,
            right_padding: 3.0,
            top_bottom_padding: 5.0,
            bar_gap: 3.0,
            domain: [0.0, 13.0],
            tick_count: 10,
            title_y: 30.0,
            title_font_size: 18.0,
        }
    }
}

/// Paints, as CSS color strings (`#045a8d`, `grey`, `rgb(..)`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Class colors, lowest class first.
    pub classes: Vec<String>,
    /// Fill for regions and bars without a value.
    pub no_data: String,
    /// Outline of unhighlighted regions.
    pub region_stroke: String,
    /// Outline of the hovered region and bar.
    pub highlight: String,
    /// Outline width of the hovered region and bar.
    pub highlight_width: f64,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            classes: ["#f1eef6", "#bdc9e1", "#74a9cf", "#2b8cbe", "#045a8d"]
                .map(String::from)
                .to_vec(),
            no_data: "#ccc".into(),
            region_stroke: "#fff".into(),
            highlight: "#f00".into(),
            highlight_width: 2.0,
        }
    }
}

impl ColorConfig {
    /// Parses every color.
    pub fn resolve(&self) -> Result<Palette, ConfigError> {
        if self.classes.is_empty() {
            return Err(ConfigError::NoColorClasses);
        }
        Ok(Palette {
            classes: self
                .classes
                .iter()
                .map(|c| parse_color(c))
                .collect::<Result<_, _>>()?,
            no_data: parse_color(&self.no_data)?,
            region_stroke: parse_color(&self.region_stroke)?,
            highlight: parse_color(&self.highlight)?,
            highlight_width: self.highlight_width,
        })
    }
}

/// Resolved paints.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Class colors, lowest class first.
    pub classes: Vec<Color>,
    /// Fill for no data.
    pub no_data: Color,
    /// Outline of unhighlighted regions.
    pub region_stroke: Color,
    /// Outline of the hovered elements.
    pub highlight: Color,
    /// Outline width of the hovered elements.
    pub highlight_width: f64,
}

/// Attribute-change animation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    /// Duration of every transition.
    pub duration_ms: f64,
    /// Extra delay per bar rank.
    pub stagger_ms: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000.0,
            stagger_ms: 20.0,
        }
    }
}

/// Floating info label.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
    /// Font size of the value line.
    pub value_font_size: f64,
    /// Font size of the name line.
    pub name_font_size: f64,
    /// Inner padding.
    pub padding: f64,
    /// Appended to the value.
    pub suffix: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            value_font_size: 18.0,
            name_font_size: 12.0,
            padding: 6.0,
            suffix: "%".into(),
        }
    }
}

/// Attribute dropdown.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    /// Disabled first option.
    pub placeholder: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            placeholder: "Select Year".into(),
        }
    }
}

/// Parses a CSS color: hex, a named color, or a functional notation such as `rgb(..)`.
pub fn parse_color(text: &str) -> Result<Color, ConfigError> {
    parse_css_color(text.trim())
        .map(|color| color.to_alpha_color::<Srgb>())
        .map_err(|err| ConfigError::Color {
            text: text.to_owned(),
            reason: err.to_string(),
        })
}
