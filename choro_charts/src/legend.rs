// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class legends: one color swatch and label per row.
//!
//! [`LegendSpec::quantile`] builds a row per class of a [`ScaleQuantile`], labeled with the
//! class extent. Extra rows (such as a "No data" swatch) are appended with
//! [`LegendSpec::with_item`].

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use choro_core::{Mark, MarkId, Stroke, TextAnchor, TextBaseline};
use kurbo::{Point, Rect};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::measure::{Size, TextMeasurer, TextStyle};
use crate::scale::ScaleQuantile;
use crate::z_order;

/// Id offset of row labels from the legend base id.
const LABEL_OFFSET: u64 = 1000;

/// One legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// Text beside the swatch.
    pub label: String,
    /// Swatch color.
    pub color: Color,
}

impl LegendItem {
    /// A row labeled `label` with a `color` swatch.
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// A vertical list of swatches, measured before it is placed.
#[derive(Clone, Debug)]
pub struct LegendSpec {
    /// Swatches use ids from this base; labels use a fixed offset from it.
    pub id_base: u64,
    /// Swatch side length.
    pub swatch_size: f64,
    /// Gap between rows.
    pub row_gap: f64,
    /// Gap between a swatch and its label.
    pub label_gap: f64,
    /// Label size.
    pub font_size: f64,
    /// Label paint.
    pub text_fill: Brush,
    /// Swatch outline paint.
    pub swatch_stroke: Brush,
    /// Rows, top to bottom.
    pub items: Vec<LegendItem>,
}

impl LegendSpec {
    /// A legend with 12px swatches and 10px labels.
    pub fn new(id_base: u64, items: Vec<LegendItem>) -> Self {
        Self {
            id_base,
            swatch_size: 12.0,
            row_gap: 4.0,
            label_gap: 6.0,
            font_size: 10.0,
            text_fill: Brush::Solid(css::BLACK),
            swatch_stroke: Brush::Solid(Color::from_rgb8(0x99, 0x99, 0x99)),
            items,
        }
    }

    /// One row per class of `scale`, labeled `"{lo} - {hi}"` with `format` applied to each
    /// bound. A scale fit to no values has no rows.
    pub fn quantile(
        id_base: u64,
        scale: &ScaleQuantile<Color>,
        format: impl Fn(f64) -> String,
    ) -> Self {
        let items = scale
            .range()
            .iter()
            .enumerate()
            .filter_map(|(class, color)| {
                let (lo, hi) = scale.invert_extent(class)?;
                Some(LegendItem::new(
                    format!("{} - {}", format(lo), format(hi)),
                    *color,
                ))
            })
            .collect();
        Self::new(id_base, items)
    }

    /// Appends a row.
    pub fn with_item(mut self, item: LegendItem) -> Self {
        self.items.push(item);
        self
    }

    fn row_height(&self, measurer: &dyn TextMeasurer) -> f64 {
        let line = measurer.measure("0", TextStyle::new(self.font_size)).line_height();
        self.swatch_size.max(line)
    }

    /// The legend's extent.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> Size {
        if self.items.is_empty() {
            return Size::default();
        }
        let widest = self
            .items
            .iter()
            .map(|item| {
                measurer
                    .measure(&item.label, TextStyle::new(self.font_size))
                    .advance_width
            })
            .fold(0.0, f64::max);
        let rows = self.items.len() as f64;
        Size::new(
            self.swatch_size + self.label_gap + widest,
            rows * self.row_height(measurer) + (rows - 1.0) * self.row_gap,
        )
    }

    /// Swatch and label marks with the legend's top-left corner at `origin`.
    pub fn marks(&self, origin: Point, measurer: &dyn TextMeasurer) -> Vec<Mark> {
        let row_height = self.row_height(measurer);
        let mut out = Vec::with_capacity(2 * self.items.len());
        for (i, item) in self.items.iter().enumerate() {
            let top = origin.y + i as f64 * (row_height + self.row_gap);
            let swatch_top = top + 0.5 * (row_height - self.swatch_size);
            let i = i as u64;
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base + i))
                    .rect(Rect::new(
                        origin.x,
                        swatch_top,
                        origin.x + self.swatch_size,
                        swatch_top + self.swatch_size,
                    ))
                    .z_index(z_order::LEGEND_SWATCHES)
                    .fill(item.color)
                    .stroke(Stroke::solid(self.swatch_stroke.clone(), 0.5))
                    .build(),
            );
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base + LABEL_OFFSET + i))
                    .text(
                        (
                            origin.x + self.swatch_size + self.label_gap,
                            top + 0.5 * row_height,
                        ),
                        item.label.clone(),
                    )
                    .z_index(z_order::LEGEND_LABELS)
                    .font_size(self.font_size)
                    .fill(self.text_fill.clone())
                    .anchor(TextAnchor::Start)
                    .baseline(TextBaseline::Middle)
                    .build(),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use choro_core::MarkPayload;

    use super::*;
    use crate::format::format_value;
    use crate::measure::HeuristicTextMeasurer;

    #[test]
    fn one_row_per_quantile_class() {
        let scale = ScaleQuantile::new([1.0, 2.0, 3.0, 4.0], vec![css::WHITE, css::BLACK]);
        let spec = LegendSpec::quantile(1, &scale, |v| format_value(v, 1));
        let labels: Vec<&str> = spec.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["1 - 2.5", "2.5 - 4"]);
        assert_eq!(spec.marks(Point::ZERO, &HeuristicTextMeasurer).len(), 4);
    }

    #[test]
    fn a_scale_without_values_has_no_rows() {
        let scale = ScaleQuantile::new([f64::NAN], vec![css::WHITE, css::BLACK]);
        let spec = LegendSpec::quantile(1, &scale, |v| format_value(v, 1));
        assert!(spec.items.is_empty());
        assert_eq!(spec.measure(&HeuristicTextMeasurer), Size::default());
    }

    #[test]
    fn marks_stay_inside_the_measured_box() {
        let measurer = HeuristicTextMeasurer;
        let spec = LegendSpec::new(
            1,
            vec![
                LegendItem::new("0.5 - 7", css::BLACK),
                LegendItem::new("No data", css::LIGHT_GRAY),
            ],
        );
        let size = spec.measure(&measurer);
        let origin = Point::new(10.0, 20.0);
        let bounds = Rect::from_origin_size(origin, (size.width, size.height));

        for mark in spec.marks(origin, &measurer) {
            match &mark.payload {
                MarkPayload::Rect(r) => assert_eq!(bounds.union(r.rect), bounds),
                MarkPayload::Text(t) => {
                    let w = measurer.measure(&t.text, TextStyle::new(t.font_size)).advance_width;
                    assert!(t.pos.x + w <= bounds.x1 + 1e-9);
                    assert!(t.pos.y > bounds.y0 && t.pos.y < bounds.y1);
                }
                MarkPayload::Path(_) => unreachable!(),
            }
        }
    }
}
