// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained marks for choropleth views.
//!
//! This crate is the small runtime the views render into:
//! - **Marks** are stable-identity drawables (rects, paths, text) with resolved geometry and
//!   paint.
//! - A [`Scene`] keeps the last set of marks per surface and turns a new set into
//!   [`MarkDiff`]s (enter/update/exit), which renderers apply.
//! - A [`Timeline`] holds at most one transition per [`MarkId`]. Scheduling on a busy id
//!   supersedes the running transition, starting from its sampled state.
//!
//! Time is supplied by the host (milliseconds); nothing here owns a clock.

#![no_std]

extern crate alloc;

mod mark;
mod scene;
mod timeline;

pub use mark::{
    Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, PathPayload, RectPayload, Stroke,
    TextAnchor, TextBaseline, TextPayload,
};
pub use scene::{MarkDiff, Scene};
pub use timeline::{Easing, Timeline, Timing, Transition, Tween, lerp_color};
