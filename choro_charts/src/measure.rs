// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement for guide and label layout.
//!
//! Marks carry unshaped text. Anything that has to reserve room for text (axis gutters,
//! legend boxes, the floating info label) asks a [`TextMeasurer`] instead.

/// Measures single lines of text.
pub trait TextMeasurer {
    /// Extent of `text` set in `style`.
    fn measure(&self, text: &str, style: TextStyle) -> TextMetrics;
}

/// The parts of a text style that affect its extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Bold weight.
    pub bold: bool,
}

impl TextStyle {
    /// Regular weight at `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            bold: false,
        }
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

/// Extent of one measured line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance.
    pub advance_width: f64,
    /// Baseline to top.
    pub ascent: f64,
    /// Baseline to bottom.
    pub descent: f64,
}

impl TextMetrics {
    /// Height of the line box.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// A width and a height in scene coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Estimates extents from character counts.
///
/// Glyphs average 0.6em (0.65em bold); the line box is 1em with the baseline at 0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: TextStyle) -> TextMetrics {
        let glyph = style.font_size * if style.bold { 0.65 } else { 0.6 };
        TextMetrics {
            advance_width: glyph * text.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}
