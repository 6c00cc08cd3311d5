// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales.
//!
//! - [`ScaleLinear`] maps a continuous domain onto a continuous range (bar heights, axes).
//! - [`ScaleQuantile`] maps values onto a discrete, ordered range using quantile breakpoints
//!   of a sample domain (choropleth classes).

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// Values outside the domain extrapolate; a degenerate domain maps everything to the
    /// start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns "nice" tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step = nice_step(span / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).ceil() * step;
    let stop = (max / step).floor() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A quantile scale: `k` ordered outputs, each covering one `1/k` slice of a sample.
///
/// The domain is a sample of values (not an extent). Non-finite samples are ignored. The
/// `k - 1` thresholds are the R-7 quantiles of the sorted sample at `1/k, 2/k, ...`. A value
/// maps to the output at its bisect-right position among the thresholds, so a value equal
/// to a threshold belongs to the upper class.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleQuantile<T> {
    domain: Vec<f64>,
    thresholds: Vec<f64>,
    range: Vec<T>,
}

impl<T> ScaleQuantile<T> {
    /// Fits a scale to `samples` with the ordered outputs `range`.
    pub fn new(samples: impl IntoIterator<Item = f64>, range: Vec<T>) -> Self {
        let mut domain: Vec<f64> = samples.into_iter().filter(|v| v.is_finite()).collect();
        domain.sort_by(f64::total_cmp);
        let k = range.len();
        let thresholds = if domain.is_empty() || k < 2 {
            Vec::new()
        } else {
            (1..k)
                .map(|i| quantile_sorted(&domain, i as f64 / k as f64))
                .collect()
        };
        Self {
            domain,
            thresholds,
            range,
        }
    }

    /// Returns the output class index for `value`.
    ///
    /// `None` for non-finite values, an empty sample, or an empty range.
    pub fn bucket(&self, value: f64) -> Option<usize> {
        if !value.is_finite() || self.domain.is_empty() || self.range.is_empty() {
            return None;
        }
        Some(self.thresholds.partition_point(|t| *t <= value))
    }

    /// Maps `value` to its output.
    pub fn map(&self, value: f64) -> Option<&T> {
        self.bucket(value).and_then(|i| self.range.get(i))
    }

    /// The sorted, finite sample the scale was fit to.
    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    /// The class breakpoints (`range.len() - 1` values, or none for an empty sample).
    pub fn quantiles(&self) -> &[f64] {
        &self.thresholds
    }

    /// The ordered outputs.
    pub fn range(&self) -> &[T] {
        &self.range
    }

    /// Returns the `[lo, hi]` extent of values mapping to class `bucket`.
    ///
    /// The outer classes are bounded by the sample's minimum and maximum.
    pub fn invert_extent(&self, bucket: usize) -> Option<(f64, f64)> {
        let (&min, &max) = (self.domain.first()?, self.domain.last()?);
        if bucket >= self.range.len() {
            return None;
        }
        let lo = if bucket == 0 {
            min
        } else {
            *self.thresholds.get(bucket - 1)?
        };
        let hi = self.thresholds.get(bucket).copied().unwrap_or(max);
        Some((lo, hi))
    }
}

/// R-7 quantile (linear interpolation between closest ranks) of a sorted, non-empty slice.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 || p <= 0.0 {
        return sorted[0];
    }
    if p >= 1.0 {
        return sorted[n - 1];
    }
    let h = (n - 1) as f64 * p;
    let lo = h.floor();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "0 <= h < n - 1, so the floor fits in usize"
    )]
    let i = lo as usize;
    let a = sorted[i];
    let b = sorted[i + 1];
    a + (b - a) * (h - lo)
}
