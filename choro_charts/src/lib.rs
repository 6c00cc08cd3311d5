// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for choropleth views.
//!
//! This crate sits between the data layer and `choro_core`:
//! - **Scales** map data values into colors or screen coordinates. [`ScaleQuantile`] is the
//!   classed color scale of a choropleth; [`ScaleLinear`] positions bars.
//! - **Guides** (axis, title, legend) and **series** (ranked bars) are emitted as
//!   `choro_core::Mark`s with stable ids.
//!
//! Text shaping is out of scope; layout uses a [`TextMeasurer`].

#![no_std]

extern crate alloc;

mod axis;
mod bar_mark;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod legend;
mod lines;
mod measure;
mod scale;
mod title;
mod z_order;

pub use axis::AxisSpec;
pub use bar_mark::BarMarkSpec;
pub use format::{format_tick_with_step, format_value};
pub use legend::{LegendItem, LegendSpec};
pub use lines::{frame_mark, rule_mark};
pub use measure::{HeuristicTextMeasurer, Size, TextMeasurer, TextMetrics, TextStyle};
pub use scale::{ScaleLinear, ScaleQuantile};
pub use title::TitleSpec;
pub use z_order::*;
