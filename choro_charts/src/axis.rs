// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The value axis beside the ranked bars.
//!
//! The axis shares its [`ScaleLinear`] with the bars, so both read the same plot-local
//! coordinates and only the plot's top edge is added when marks are emitted.

extern crate alloc;

use alloc::vec::Vec;

use choro_core::{Mark, MarkId, Stroke, TextAnchor, TextBaseline};
use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use crate::format::format_tick_with_step;
use crate::lines::rule_mark;
use crate::scale::ScaleLinear;
use crate::z_order;

/// Id offset of tick rules from the axis base id.
const TICK_OFFSET: u64 = 1;
/// Id offset of tick labels from the axis base id.
const LABEL_OFFSET: u64 = 1000;

/// A vertical axis drawn along the left edge of a plot.
#[derive(Clone, Debug)]
pub struct AxisSpec {
    /// The domain line uses this id; ticks and labels use fixed offsets from it.
    pub id_base: u64,
    /// Plot-local scale: data values to offsets from the plot's top edge.
    pub scale: ScaleLinear,
    /// Approximate number of ticks.
    pub tick_count: usize,
    /// Tick length, pointing away from the plot.
    pub tick_size: f64,
    /// Gap between a tick and its label.
    pub tick_padding: f64,
    /// Domain line and tick stroke.
    pub stroke: Stroke,
    /// Tick label paint.
    pub label_fill: Brush,
    /// Tick label size.
    pub font_size: f64,
}

impl AxisSpec {
    /// A left axis over `scale` with ten ticks.
    pub fn left(id_base: u64, scale: ScaleLinear) -> Self {
        Self {
            id_base,
            scale,
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
            stroke: Stroke::solid(css::BLACK, 1.0),
            label_fill: Brush::Solid(css::BLACK),
            font_size: 10.0,
        }
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Tick values and the step between them.
    fn ticks(&self) -> (Vec<f64>, f64) {
        let ticks = self.scale.ticks(self.tick_count);
        let step = ticks
            .windows(2)
            .map(|w| (w[1] - w[0]).abs())
            .fold(f64::INFINITY, f64::min);
        (ticks, if step.is_finite() { step } else { 0.0 })
    }

    /// Domain line, ticks and labels for `plot`.
    ///
    /// Ticks mapping outside the plot are skipped.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        let x = plot.x0;
        let tick_end = x - self.tick_size.abs();
        let label_x = tick_end - self.tick_padding.max(0.0);
        let (ticks, step) = self.ticks();

        let mut out = Vec::with_capacity(1 + 2 * ticks.len());
        out.push(rule_mark(
            MarkId::from_raw(self.id_base),
            Point::new(x, plot.y0),
            Point::new(x, plot.y1),
            self.stroke.clone(),
            z_order::AXIS_RULES,
        ));

        for (i, v) in ticks.into_iter().enumerate() {
            let y = plot.y0 + self.scale.map(v);
            if y < plot.y0 - 1e-9 || y > plot.y1 + 1e-9 {
                continue;
            }
            let i = i as u64;
            out.push(rule_mark(
                MarkId::from_raw(self.id_base + TICK_OFFSET + i),
                Point::new(x, y),
                Point::new(tick_end, y),
                self.stroke.clone(),
                z_order::AXIS_RULES,
            ));
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base + LABEL_OFFSET + i))
                    .text((label_x, y), format_tick_with_step(v, step))
                    .z_index(z_order::AXIS_LABELS)
                    .anchor(TextAnchor::End)
                    .baseline(TextBaseline::Middle)
                    .font_size(self.font_size)
                    .fill(self.label_fill.clone())
                    .build(),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use choro_core::MarkPayload;

    use super::*;

    fn labels(marks: &[Mark]) -> Vec<(&str, Point)> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some((t.text.as_str(), t.pos)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn zero_sits_at_the_plot_bottom_and_the_maximum_at_the_top() {
        let plot = Rect::new(30.0, 5.0, 541.0, 455.0);
        let axis = AxisSpec::left(100, ScaleLinear::new((0.0, 13.0), (450.0, 0.0)));
        let marks = axis.marks(plot);

        let labels = labels(&marks);
        assert_eq!(labels.len(), 14);
        let (_, zero) = labels.iter().find(|(t, _)| *t == "0").unwrap();
        let (_, top) = labels.iter().find(|(t, _)| *t == "13").unwrap();
        assert!((zero.y - 455.0).abs() < 1e-9);
        assert!((top.y - 5.0).abs() < 1e-9);
        assert!(zero.x < plot.x0);
    }

    #[test]
    fn ids_are_stable_across_calls() {
        let plot = Rect::new(30.0, 5.0, 541.0, 455.0);
        let axis = AxisSpec::left(100, ScaleLinear::new((0.0, 13.0), (450.0, 0.0)));
        let a: Vec<_> = axis.marks(plot).iter().map(|m| m.id).collect();
        let b: Vec<_> = axis.marks(plot).iter().map(|m| m.id).collect();
        assert_eq!(a, b);
        assert_eq!(a[0], MarkId::from_raw(100));
        assert!(a.contains(&MarkId::from_raw(1100)));
    }
}
