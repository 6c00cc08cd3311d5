// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales derived from the data and the configuration.

use choro_charts::{ScaleLinear, ScaleQuantile};
use choro_data::RecordTable;
use peniko::Color;

use crate::config::ChartConfig;

/// A quantile color scale fit to every record's value of `attribute`.
///
/// Records without a value are left out of the sample.
pub fn color_scale(records: &RecordTable, attribute: &str, classes: &[Color]) -> ScaleQuantile<Color> {
    ScaleQuantile::new(records.values(attribute).flatten(), classes.to_vec())
}

/// The color for `value`, or `no_data` when there is none.
pub fn fill_for(scale: &ScaleQuantile<Color>, value: Option<f64>, no_data: Color) -> Color {
    value
        .and_then(|v| scale.map(v))
        .copied()
        .unwrap_or(no_data)
}

/// The fixed bar-height scale: the configured domain onto `[inner_height, 0]`.
///
/// Plot-local, so bars and the axis add the top padding themselves.
pub fn position_scale(chart: &ChartConfig) -> ScaleLinear {
    ScaleLinear::new(
        (chart.domain[0], chart.domain[1]),
        (chart.inner_height(), 0.0),
    )
}
