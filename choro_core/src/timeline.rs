// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed transitions.
//!
//! A [`Timeline`] holds at most one [`Transition`] per [`MarkId`]. Scheduling on an id that
//! already animates cancels the old transition and starts the new one from wherever the old
//! one was at that instant, so a burst of attribute changes never snaps or stacks.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;
use peniko::Color;

use crate::mark::MarkId;

/// The animatable part of a mark: optional rectangle geometry and a solid fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Rectangle geometry, for rect marks.
    pub rect: Option<Rect>,
    /// Solid fill color.
    pub fill: Color,
}

impl Tween {
    /// A fill-only state.
    pub fn fill(fill: Color) -> Self {
        Self { rect: None, fill }
    }

    /// A rectangle + fill state.
    pub fn rect(rect: Rect, fill: Color) -> Self {
        Self {
            rect: Some(rect),
            fill,
        }
    }

    /// Interpolates towards `other` at `t` in `[0, 1]`.
    ///
    /// If only one side has geometry, geometry jumps to `other`'s.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let rect = match (self.rect, other.rect) {
            (Some(a), Some(b)) => Some(Rect::new(
                lerp(a.x0, b.x0, t),
                lerp(a.y0, b.y0, t),
                lerp(a.x1, b.x1, t),
                lerp(a.y1, b.y1, t),
            )),
            (_, b) => b,
        };
        Self {
            rect,
            fill: lerp_color(self.fill, other.fill, t),
        }
    }
}

/// Easing curve applied to linear progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start and end (cubic in-out).
    #[default]
    CubicInOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let t = t * 2.0;
                if t <= 1.0 {
                    t * t * t / 2.0
                } else {
                    let t = t - 2.0;
                    (t * t * t + 2.0) / 2.0
                }
            }
        }
    }
}

/// Delay, duration, and easing of a transition, in host time units (milliseconds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// Wait before the transition starts moving.
    pub delay: f64,
    /// Time from start to end once moving.
    pub duration: f64,
    /// Easing curve.
    pub easing: Easing,
}

impl Timing {
    /// A transition of `duration` with no delay and the default easing.
    pub fn new(duration: f64) -> Self {
        Self {
            delay: 0.0,
            duration,
            easing: Easing::default(),
        }
    }

    /// Sets the delay.
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Sets the easing.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// A scheduled interpolation between two [`Tween`] states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// State at the start.
    pub from: Tween,
    /// State at the end.
    pub to: Tween,
    /// Host time at which the transition was scheduled.
    pub scheduled_at: f64,
    /// Delay, duration, and easing.
    pub timing: Timing,
}

impl Transition {
    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: f64) -> f64 {
        let elapsed = now - self.scheduled_at - self.timing.delay;
        if elapsed <= 0.0 {
            return 0.0;
        }
        if self.timing.duration <= 0.0 {
            return 1.0;
        }
        (elapsed / self.timing.duration).min(1.0)
    }

    /// The interpolated state at `now`.
    pub fn sample(&self, now: f64) -> Tween {
        let t = self.timing.easing.apply(self.progress(now));
        self.from.lerp(&self.to, t)
    }

    /// Returns `true` once the end state has been reached.
    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Active transitions, at most one per mark.
#[derive(Debug, Default)]
pub struct Timeline {
    active: HashMap<MarkId, Transition>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of running transitions.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` if nothing is animating.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns `true` if `id` is animating.
    pub fn contains(&self, id: MarkId) -> bool {
        self.active.contains_key(&id)
    }

    /// Animates `id` towards `to`.
    ///
    /// The start state is the running transition's sample at `now` if `id` is already
    /// animating, otherwise `current`. The superseded transition is returned.
    pub fn schedule(
        &mut self,
        id: MarkId,
        current: Tween,
        to: Tween,
        now: f64,
        timing: Timing,
    ) -> Option<Transition> {
        let from = self
            .active
            .get(&id)
            .map_or(current, |running| running.sample(now));
        self.active.insert(
            id,
            Transition {
                from,
                to,
                scheduled_at: now,
                timing,
            },
        )
    }

    /// Returns the state of `id` at `now`, if it is animating.
    pub fn sample(&self, id: MarkId, now: f64) -> Option<Tween> {
        self.active.get(&id).map(|t| t.sample(now))
    }

    /// Samples every running transition at `now`, sorted by id.
    ///
    /// Transitions that finish at `now` are sampled at their end state and then dropped.
    pub fn advance(&mut self, now: f64) -> Vec<(MarkId, Tween)> {
        let mut out: Vec<(MarkId, Tween)> = self
            .active
            .iter()
            .map(|(id, t)| (*id, t.sample(now)))
            .collect();
        out.sort_unstable_by_key(|(id, _)| *id);
        self.active.retain(|_, t| !t.is_finished(now));
        out
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolates two colors channel-wise in 8-bit sRGB.
pub fn lerp_color(a: Color, b: Color, t: f64) -> Color {
    let a = a.to_rgba8();
    let b = b.to_rgba8();
    let channel = |x: u8, y: u8| -> u8 {
        let v = lerp(f64::from(x), f64::from(y), t).clamp(0.0, 255.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "clamped to the u8 range before the cast"
        )]
        {
            (v + 0.5) as u8
        }
    };
    Color::from_rgba8(
        channel(a.r, b.r),
        channel(a.g, b.g),
        channel(a.b, b.b),
        channel(a.a, b.a),
    )
}
