// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ranked bar chart surface.

use choro_charts::{
    AxisSpec, BarMarkSpec, SERIES_HIGHLIGHT, ScaleLinear, ScaleQuantile, Size, TitleSpec,
    frame_mark,
};
use choro_core::{Mark, MarkId, Stroke};
use choro_data::{Ranking, RecordTable};
use kurbo::{Point, Rect};
use peniko::Color;

use crate::config::{ChartConfig, Palette};
use crate::interaction::Interaction;
use crate::scales::fill_for;

/// Id namespace of bars.
pub const BAR_NAMESPACE: u64 = 2;

const AXIS_ID_BASE: u64 = 100;
const FRAME_ID: MarkId = MarkId::from_raw(50);
const TITLE_ID: MarkId = MarkId::from_raw(60);

/// One bar per record, ordered by rank, over a fixed left axis.
#[derive(Clone, Debug)]
pub struct ChartView {
    config: ChartConfig,
    bars: BarMarkSpec,
    axis: AxisSpec,
}

impl ChartView {
    /// Lays out `count` bar slots sized by `position`.
    pub fn new(config: &ChartConfig, count: usize, position: ScaleLinear) -> Self {
        let bars =
            BarMarkSpec::new(BAR_NAMESPACE, config.plot(), count, position).with_gap(config.bar_gap);
        let axis = AxisSpec::left(AXIS_ID_BASE, position).with_tick_count(config.tick_count);
        Self {
            config: *config,
            bars,
            axis,
        }
    }

    /// Surface size.
    pub fn size(&self) -> Size {
        Size::new(self.config.width, self.config.height)
    }

    /// Stable id of the bar for record `row`.
    pub fn id(row: usize) -> MarkId {
        MarkId::for_row(BAR_NAMESPACE, row)
    }

    /// Geometry of the bar at `rank` showing `value`.
    pub fn bar_rect(&self, rank: usize, value: Option<f64>) -> Rect {
        self.bars.rect(rank, value)
    }

    /// One bar per record, placed by `ranking`, filled by `scale`, outlined per the hover
    /// state.
    pub fn bar_marks(
        &self,
        records: &RecordTable,
        values: &[Option<f64>],
        ranking: &Ranking,
        scale: &ScaleQuantile<Color>,
        palette: &Palette,
        interaction: &Interaction,
    ) -> Vec<Mark> {
        records
            .iter()
            .zip(values)
            .enumerate()
            .filter_map(|(row, (record, value))| {
                let rank = ranking.rank_of(row)?;
                let rect = self.bar_rect(rank, *value);
                let fill = fill_for(scale, *value, palette.no_data);
                if interaction.is_highlighted(record.name()) {
                    let stroke = Stroke::solid(palette.highlight, palette.highlight_width);
                    let mut mark = self.bars.mark(row, rect, fill, stroke);
                    mark.z_index = SERIES_HIGHLIGHT;
                    Some(mark)
                } else {
                    Some(self.bars.mark(row, rect, fill, Stroke::none()))
                }
            })
            .collect()
    }

    /// The axis, the frame around the plot, and the title naming `attribute`.
    pub fn decoration_marks(&self, attribute: &str) -> Vec<Mark> {
        let plot = self.config.plot();
        let mut out = self.axis.marks(plot);
        out.push(frame_mark(
            FRAME_ID,
            plot,
            Stroke::solid(Color::from_rgb8(0x99, 0x99, 0x99), 1.0),
        ));
        out.push(
            TitleSpec::new(TITLE_ID, attribute)
                .with_font_size(self.config.title_font_size)
                .mark(Point::new(0.5 * self.config.width, self.config.title_y)),
        );
        out
    }
}
