// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart titles.
//!
//! The bar chart's title names the active attribute. It keeps its id across attribute
//! changes, so a change shows up as a text update rather than an exit and an enter.

extern crate alloc;

use alloc::string::String;

use choro_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::Point;
use peniko::Brush;
use peniko::color::palette::css;

use crate::z_order;

/// A single line of bold text centered on a point.
#[derive(Clone, Debug)]
pub struct TitleSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Title text (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
}

impl TitleSpec {
    /// A 12px black title.
    pub fn new(id: MarkId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            font_size: 12.0,
            fill: Brush::Solid(css::BLACK),
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// The title mark, centered on `center`.
    pub fn mark(&self, center: Point) -> Mark {
        Mark::builder(self.id)
            .text(center, self.text.clone())
            .z_index(z_order::TITLES)
            .font_size(self.font_size)
            .fill(self.fill.clone())
            .anchor(TextAnchor::Middle)
            .baseline(TextBaseline::Middle)
            .build()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use choro_core::MarkPayload;

    use super::*;

    #[test]
    fn title_is_centered_on_its_point() {
        let mark = TitleSpec::new(MarkId::from_raw(1), "2016")
            .with_font_size(18.0)
            .mark(Point::new(272.0, 30.0));
        let MarkPayload::Text(t) = &mark.payload else {
            panic!("expected text");
        };
        assert_eq!(t.pos, Point::new(272.0, 30.0));
        assert_eq!(t.anchor, TextAnchor::Middle);
        assert_eq!(t.text, "2016");
    }

    #[test]
    fn font_size_and_fill_reach_the_mark() {
        let mark = TitleSpec::new(MarkId::from_raw(7), "2015")
            .with_font_size(18.0)
            .mark(Point::ZERO);
        assert_eq!(mark.id, MarkId::from_raw(7));
        assert_eq!(mark.z_index, z_order::TITLES);
        let MarkPayload::Text(t) = &mark.payload else {
            panic!("expected text");
        };
        assert_eq!(t.font_size, 18.0);
        assert_eq!(t.fill, Brush::Solid(css::BLACK));
    }
}
