// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for generated marks.
//!
//! Renderers sort by `(z_index, MarkId)`, so marks within one layer keep a deterministic order.

/// Filled series marks (map shapes, bars).
pub const SERIES_FILL: i32 = 0;
/// A highlighted series mark, lifted so its outline is not covered by neighbors.
pub const SERIES_HIGHLIGHT: i32 = 5;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Chart frame outline.
pub const FRAME: i32 = 55;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
/// Chart-level titles.
pub const TITLES: i32 = 80;
