// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke-only marks: axis lines, ticks and plot frames.

use choro_core::{Mark, MarkId, Stroke};
use kurbo::{BezPath, Point, Rect};
use peniko::Color;

use crate::z_order;

/// A segment from `from` to `to`. Rules have no fill area, so they never hit-test.
pub fn rule_mark(id: MarkId, from: Point, to: Point, stroke: Stroke, z_index: i32) -> Mark {
    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to(to);
    Mark::builder(id)
        .path(path)
        .z_index(z_index)
        .fill(Color::TRANSPARENT)
        .stroke(stroke)
        .build()
}

/// An unfilled outline of `rect`, drawn above the series it surrounds.
pub fn frame_mark(id: MarkId, rect: Rect, stroke: Stroke) -> Mark {
    Mark::builder(id)
        .rect(rect)
        .z_index(z_order::FRAME)
        .fill(Color::TRANSPARENT)
        .stroke(stroke)
        .build()
}
