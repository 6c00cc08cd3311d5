// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for tick labels, legend breakpoints and info labels.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value using just enough decimals to distinguish ticks `step` apart.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return String::new();
    }
    let decimals = decimals_for_step(step);
    let s = format!("{v:.decimals$}");
    // Avoid "-0".
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        return String::from(&s[1..]);
    }
    s
}

/// Formats a data value the way it appeared in the source table.
///
/// Integers print without decimals; other values print with at most `max_decimals` digits and
/// no trailing zeros.
pub fn format_value(v: f64, max_decimals: usize) -> String {
    if !v.is_finite() {
        return String::new();
    }
    if v == v.round() && v.abs() < 1e15 {
        return format!("{v:.0}");
    }
    let s = format!("{v:.max_decimals$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        &s
    };
    String::from(s)
}

fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 0;
    }
    let d = (-step.log10()).ceil().clamp(0.0, 12.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to a small non-negative range"
    )]
    {
        d as usize
    }
}
