// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The choropleth map surface.

use choro_charts::{
    LegendItem, LegendSpec, SERIES_FILL, SERIES_HIGHLIGHT, ScaleQuantile, Size, TextMeasurer,
    format_value,
};
use choro_core::{Mark, MarkId, Stroke};
use choro_data::JoinedRegion;
use choro_geo::{AlbersUsa, PathGenerator};
use kurbo::{BezPath, Point};
use peniko::Color;

use crate::config::{MapConfig, Palette};
use crate::interaction::Interaction;
use crate::scales::fill_for;

/// Id namespace of region shapes.
pub const SHAPE_NAMESPACE: u64 = 1;

const LEGEND_ID_BASE: u64 = 100;
const LEGEND_MARGIN: f64 = 10.0;

/// Projected region outlines plus the class legend.
///
/// Paths are projected once, when the view is built; attribute changes only touch fills.
#[derive(Clone, Debug)]
pub struct MapView {
    config: MapConfig,
    paths: Vec<BezPath>,
}

impl MapView {
    /// Projects every region with an [`AlbersUsa`] centered on the surface.
    pub fn new(regions: &[JoinedRegion], config: &MapConfig) -> Self {
        let projection = AlbersUsa::new(config.scale, 0.5 * config.width, 0.5 * config.height);
        let generator = PathGenerator::new(projection);
        let paths: Vec<BezPath> = regions.iter().map(|r| generator.region(&r.region)).collect();
        let empty = paths.iter().filter(|p| p.elements().is_empty()).count();
        if empty > 0 {
            tracing::debug!(empty, "regions with nothing to draw");
        }
        Self {
            config: *config,
            paths,
        }
    }

    /// Surface size.
    pub fn size(&self) -> Size {
        Size::new(self.config.width, self.config.height)
    }

    /// Stable id of the shape for region `row`.
    pub fn id(row: usize) -> MarkId {
        MarkId::for_row(SHAPE_NAMESPACE, row)
    }

    /// The projected outline of region `row`.
    pub fn path(&self, row: usize) -> Option<&BezPath> {
        self.paths.get(row)
    }

    /// The fill of `region` for `attribute`.
    pub fn fill(
        region: &JoinedRegion,
        attribute: &str,
        scale: &ScaleQuantile<Color>,
        palette: &Palette,
    ) -> Color {
        fill_for(scale, region.value(attribute), palette.no_data)
    }

    /// One shape per region, filled for `attribute`, outlined per the hover state.
    pub fn shape_marks(
        &self,
        regions: &[JoinedRegion],
        attribute: &str,
        scale: &ScaleQuantile<Color>,
        palette: &Palette,
        interaction: &Interaction,
    ) -> Vec<Mark> {
        regions
            .iter()
            .zip(&self.paths)
            .enumerate()
            .map(|(row, (region, path))| {
                let (stroke, z_index) = if interaction.is_highlighted(region.name()) {
                    (
                        Stroke::solid(palette.highlight, palette.highlight_width),
                        SERIES_HIGHLIGHT,
                    )
                } else {
                    (
                        Stroke::solid(palette.region_stroke, self.config.stroke_width),
                        SERIES_FILL,
                    )
                };
                Mark::builder(Self::id(row))
                    .path(path.clone())
                    .z_index(z_index)
                    .fill(Self::fill(region, attribute, scale, palette))
                    .stroke(stroke)
                    .build()
            })
            .collect()
    }

    /// The class legend in the bottom-right corner, with a trailing "No data" row.
    pub fn legend_marks(
        &self,
        scale: &ScaleQuantile<Color>,
        palette: &Palette,
        measurer: &dyn TextMeasurer,
    ) -> Vec<Mark> {
        if !self.config.legend {
            return Vec::new();
        }
        let spec = LegendSpec::quantile(LEGEND_ID_BASE, scale, |v| format_value(v, 1))
            .with_item(LegendItem::new("No data", palette.no_data));
        let size = spec.measure(measurer);
        let origin = Point::new(
            self.config.width - size.width - LEGEND_MARGIN,
            self.config.height - size.height - LEGEND_MARGIN,
        );
        spec.marks(origin, measurer)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use choro_charts::HeuristicTextMeasurer;
    use choro_core::{MarkPayload, TextPayload};
    use choro_geo::Region;
    use kurbo::Shape;
    use peniko::Brush;

    use super::*;
    use crate::config::ColorConfig;

    fn square(name: &str, lon: f64, lat: f64, value: Option<f64>) -> JoinedRegion {
        let ring = vec![
            Point::new(lon, lat),
            Point::new(lon + 3.0, lat),
            Point::new(lon + 3.0, lat + 3.0),
            Point::new(lon, lat + 3.0),
            Point::new(lon, lat),
        ];
        let mut values = BTreeMap::new();
        if let Some(v) = value {
            values.insert("2015".to_owned(), Some(v));
        }
        JoinedRegion {
            region: Region {
                name: name.into(),
                properties: serde_json::Map::new(),
                polygons: vec![vec![ring]].into(),
            },
            values,
        }
    }

    fn regions() -> Vec<JoinedRegion> {
        vec![
            square("Wisconsin", -91.0, 43.0, Some(10.5)),
            square("Iowa", -96.0, 40.5, Some(8.2)),
            square("Michigan", -86.0, 42.0, None),
        ]
    }

    fn palette() -> Palette {
        ColorConfig::default().resolve().unwrap()
    }

    fn fill_of(mark: &Mark) -> Brush {
        mark.payload.fill().clone()
    }

    #[test]
    fn every_region_gets_a_projected_shape() {
        let regions = regions();
        let view = MapView::new(&regions, &MapConfig::default());
        for row in 0..regions.len() {
            let path = view.path(row).unwrap();
            let b = path.bounding_box();
            assert!(b.x0 >= 0.0 && b.x1 <= 640.0 && b.y0 >= 0.0 && b.y1 <= 460.0, "{b:?}");
        }
        let wisconsin = view.path(0).unwrap().bounding_box();
        let iowa = view.path(1).unwrap().bounding_box();
        assert!(wisconsin.center().x > iowa.center().x);
    }

    #[test]
    fn fills_follow_classes_and_no_data_is_neutral() {
        let regions = regions();
        let palette = palette();
        let scale = ScaleQuantile::new([10.5, 8.2], vec![palette.classes[0], palette.classes[4]]);
        let view = MapView::new(&regions, &MapConfig::default());
        let marks = view.shape_marks(&regions, "2015", &scale, &palette, &Interaction::new());
        assert_eq!(marks.len(), 3);
        assert_eq!(fill_of(&marks[0]), Brush::Solid(palette.classes[4]));
        assert_eq!(fill_of(&marks[1]), Brush::Solid(palette.classes[0]));
        assert_eq!(fill_of(&marks[2]), Brush::Solid(palette.no_data));
        assert!(marks.iter().all(|m| m.z_index == SERIES_FILL));
    }

    #[test]
    fn legend_lists_classes_then_no_data() {
        let palette = palette();
        let scale = ScaleQuantile::new([1.0, 2.0, 3.0, 4.0, 5.0], palette.classes.clone());
        let view = MapView::new(&[], &MapConfig::default());
        let marks = view.legend_marks(&scale, &palette, &HeuristicTextMeasurer);
        let labels: Vec<&str> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(TextPayload { text, .. }) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], "1 - 1.8");
        assert_eq!(labels[5], "No data");
        for m in &marks {
            if let Some(b) = m.payload.bounds() {
                assert!(b.x1 <= 640.0 && b.y1 <= 460.0, "{b:?}");
            }
        }
    }
}
