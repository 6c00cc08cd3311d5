// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ranked bar geometry.

use choro_core::{Mark, MarkId, Stroke};
use kurbo::Rect;
use peniko::Brush;

use crate::scale::ScaleLinear;

/// Vertical bars laid out by rank across a plot rectangle.
///
/// Slot `rank` spans `plot.width() / count` starting at `plot.x0`; each bar is one slot wide
/// minus `gap`. Heights come from `y_scale`, whose range runs from the plot height (value at
/// the baseline) to `0` (top). Bars without a value have zero height on the baseline.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Id namespace; bar ids are `MarkId::for_row(namespace, row)`.
    pub namespace: u64,
    /// Plot rectangle in scene coordinates.
    pub plot: Rect,
    /// Number of bar slots.
    pub count: usize,
    /// Horizontal gap subtracted from each slot.
    pub gap: f64,
    /// Maps values to plot-local y (`plot.height()` at the baseline, `0` at the top).
    pub y_scale: ScaleLinear,
    /// Rendering order hint (`choro_core::Mark::z_index`).
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates a bar spec with a 3px gap.
    pub fn new(namespace: u64, plot: Rect, count: usize, y_scale: ScaleLinear) -> Self {
        Self {
            namespace,
            plot,
            count,
            gap: 3.0,
            y_scale,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the gap between bars.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Width of one slot.
    pub fn slot_width(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.plot.width() / self.count as f64
        }
    }

    /// Stable id of the bar for source row `row`.
    pub fn id(&self, row: usize) -> MarkId {
        MarkId::for_row(self.namespace, row)
    }

    /// Geometry of the bar at `rank` showing `value`.
    pub fn rect(&self, rank: usize, value: Option<f64>) -> Rect {
        let slot = self.slot_width();
        let x = self.plot.x0 + rank as f64 * slot;
        let w = (slot - self.gap).max(0.0);
        let h_total = self.plot.height();
        let local_y = value.map_or(h_total, |v| self.y_scale.map(v));
        let h = (h_total - local_y).max(0.0);
        let y = self.plot.y0 + h_total - h;
        Rect::new(x, y, x + w, y + h)
    }

    /// Builds the bar mark for source row `row`.
    pub fn mark(&self, row: usize, rect: Rect, fill: impl Into<Brush>, stroke: Stroke) -> Mark {
        Mark::builder(self.id(row))
            .rect(rect)
            .z_index(self.z_index)
            .fill(fill)
            .stroke(stroke)
            .build()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn spec(count: usize) -> BarMarkSpec {
        // 600 wide chart, 30 left / 3 right padding, 460 tall with 5px top/bottom.
        let plot = Rect::new(30.0, 5.0, 597.0, 455.0);
        BarMarkSpec::new(2, plot, count, ScaleLinear::new((0.0, 13.0), (450.0, 0.0)))
    }

    #[test]
    fn bar_geometry_follows_rank_and_value() {
        let bars = spec(3);
        let r = bars.rect(1, Some(13.0));
        assert!((r.x0 - (30.0 + 189.0)).abs() < 1e-9);
        assert!((r.width() - 186.0).abs() < 1e-9);
        assert!((r.y0 - 5.0).abs() < 1e-9);
        assert!((r.height() - 450.0).abs() < 1e-9);

        let half = bars.rect(0, Some(6.5));
        assert!((half.height() - 225.0).abs() < 1e-9);
        assert!((half.y1 - 455.0).abs() < 1e-9);
    }

    #[test]
    fn zero_and_missing_values_sit_on_the_baseline() {
        let bars = spec(4);
        let zero = bars.rect(2, Some(0.0));
        let missing = bars.rect(3, None);
        assert_eq!(zero.height(), 0.0);
        assert_eq!(missing.height(), 0.0);
        assert_eq!(zero.y0, 455.0);
    }

    #[test]
    fn ids_follow_rows_not_ranks() {
        let bars = spec(2);
        let m = bars.mark(1, bars.rect(0, Some(1.0)), peniko::color::palette::css::WHITE, Stroke::none());
        assert_eq!(m.id, MarkId::for_row(2, 1));
    }
}
