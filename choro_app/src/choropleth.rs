// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coordinator behind both views.
//!
//! [`Choropleth`] owns the joined data, the active attribute, both scales, the hover state
//! and the running transitions. Hosts feed it attribute changes and pointer events, call
//! [`Choropleth::frame`] on every animation tick, and apply the returned diffs to their
//! surfaces.

use std::collections::HashMap;

use choro_charts::{HeuristicTextMeasurer, ScaleLinear, ScaleQuantile, Size};
use choro_core::{Mark, MarkDiff, MarkId, MarkPayload, Scene, Timeline, Timing, Tween};
use choro_data::{
    AttributeError, AttributeSet, AttributeStore, JoinReport, JoinedRegion, Ranking,
    RecordTable, SortOrder, join,
};
use kurbo::Point;
use peniko::{Brush, Color};
use thiserror::Error;

use crate::chart_view::{BAR_NAMESPACE, ChartView};
use crate::config::{Config, ConfigError, Palette};
use crate::interaction::{Datum, InfoLabel, Interaction, PointerEvent, Target};
use crate::loader::LoadedData;
use crate::map_view::{MapView, SHAPE_NAMESPACE};
use crate::scales::{color_scale, position_scale};
use crate::selector::{Dropdown, SelectError};

/// Why the views could not be set up.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// No usable attribute list.
    #[error("no usable attributes")]
    Attributes(#[from] AttributeError),
}

/// Which surface a position is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    /// The map.
    Map,
    /// The bar chart.
    Chart,
}

/// Mark changes produced by one [`Choropleth::frame`].
#[derive(Debug, Default)]
pub struct Frame {
    /// Changes to the map surface.
    pub map: Vec<MarkDiff>,
    /// Changes to the chart surface.
    pub chart: Vec<MarkDiff>,
}

impl Frame {
    /// Returns `true` if neither surface changed.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty() && self.chart.is_empty()
    }
}

/// A choropleth map and a ranked bar chart, kept in step.
#[derive(Debug)]
pub struct Choropleth {
    config: Config,
    palette: Palette,
    measurer: HeuristicTextMeasurer,
    store: AttributeStore,
    selector: Dropdown,
    records: RecordTable,
    regions: Vec<JoinedRegion>,
    report: JoinReport,
    values: Vec<Option<f64>>,
    ranking: Ranking,
    color: ScaleQuantile<Color>,
    position: ScaleLinear,
    map: MapView,
    chart: ChartView,
    interaction: Interaction,
    timeline: Timeline,
    map_scene: Scene,
    chart_scene: Scene,
}

impl Choropleth {
    /// Joins `data` and lays out both views for the first attribute.
    ///
    /// Attributes come from `config.attributes`, or from the CSV header when unset.
    pub fn new(config: Config, data: LoadedData) -> Result<Self, BuildError> {
        let palette = config.colors.resolve()?;
        let attributes = match &config.attributes {
            Some(names) => AttributeSet::new(names.iter().map(String::as_str))?,
            None => AttributeSet::new(data.records.attribute_columns())?,
        };
        let (regions, report) = join(data.regions, &data.records, &attributes);
        let selector = Dropdown::new(config.selector.placeholder.clone(), &attributes);
        let store = AttributeStore::new(attributes);

        let position = position_scale(&config.chart);
        let map = MapView::new(&regions, &config.map);
        let chart = ChartView::new(&config.chart, data.records.len(), position);

        let mut app = Self {
            palette,
            measurer: HeuristicTextMeasurer,
            store,
            selector,
            records: data.records,
            regions,
            report,
            values: Vec::new(),
            ranking: Ranking::new(&[], SortOrder::Desc),
            color: ScaleQuantile::new([], Vec::new()),
            position,
            map,
            chart,
            interaction: Interaction::new(),
            timeline: Timeline::new(),
            map_scene: Scene::new(),
            chart_scene: Scene::new(),
            config,
        };
        app.refresh();
        tracing::info!(
            attribute = app.store.active(),
            regions = app.regions.len(),
            records = app.records.len(),
            "views ready"
        );
        Ok(app)
    }

    /// Makes `value` the active attribute and animates both views towards it.
    ///
    /// Bars move and recolor with a per-rank delay; shapes recolor. Anything already
    /// animating continues from where it is. The placeholder and unknown values are
    /// refused and change nothing.
    pub fn change_attribute(&mut self, value: &str, now: f64) -> Result<(), SelectError> {
        self.selector.select(value)?;
        self.store
            .select(value)
            .map_err(|_| SelectError::Unknown(value.to_owned()))?;
        self.refresh();
        tracing::debug!(attribute = value, now, "attribute changed");

        let transition = self.config.transition;
        let attribute = self.store.active();

        let shapes = self.map.shape_marks(
            &self.regions,
            attribute,
            &self.color,
            &self.palette,
            &self.interaction,
        );
        for target in &shapes {
            schedule(
                &mut self.timeline,
                &self.map_scene,
                target,
                now,
                Timing::new(transition.duration_ms),
            );
        }

        let bars = self.chart.bar_marks(
            &self.records,
            &self.values,
            &self.ranking,
            &self.color,
            &self.palette,
            &self.interaction,
        );
        for target in &bars {
            let rank = self.ranking.rank_of(target.id.row()).unwrap_or(0);
            #[allow(
                clippy::cast_precision_loss,
                reason = "ranks are far below 2^52"
            )]
            let delay = transition.stagger_ms * rank as f64;
            schedule(
                &mut self.timeline,
                &self.chart_scene,
                target,
                now,
                Timing::new(transition.duration_ms).with_delay(delay),
            );
        }
        Ok(())
    }

    /// Dispatches one pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Over { target, position } => self.pointer_over(target, position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Out { target } => self.pointer_out(target),
        }
    }

    /// Highlights the region behind `target` on both views and shows its label.
    ///
    /// Targets without a resolvable region are ignored.
    pub fn pointer_over(&mut self, target: Target, position: Point) {
        let attribute = self.store.active();
        let Some((key, value)) = self
            .datum(target)
            .and_then(|d| d.key().map(|key| (key, d.value(attribute))))
        else {
            tracing::trace!(?target, "pointer over an element without a region");
            return;
        };
        let label = InfoLabel::new(key, value, &self.config.label, &self.measurer);
        self.interaction
            .over(label, position, self.config.viewport.width);
    }

    /// Moves the label with the pointer.
    pub fn pointer_move(&mut self, position: Point) {
        self.interaction
            .moved(position, self.config.viewport.width);
    }

    /// Clears the highlight of the region behind `target` and removes the label.
    pub fn pointer_out(&mut self, target: Target) {
        let key = self.datum(target).and_then(|d| d.key());
        self.interaction.out(key.as_ref());
    }

    /// The pointer-sensitive element under `position` on `surface`.
    pub fn hit_test(&self, surface: Surface, position: Point) -> Option<Target> {
        match surface {
            Surface::Map => self
                .map_scene
                .hit(position, |m| m.id.namespace() == SHAPE_NAMESPACE)
                .map(|m| Target::Shape(m.id.row())),
            Surface::Chart => self
                .chart_scene
                .hit(position, |m| m.id.namespace() == BAR_NAMESPACE)
                .map(|m| Target::Bar(m.id.row())),
        }
    }

    /// Advances transitions to `now` and returns what changed on each surface.
    pub fn frame(&mut self, now: f64) -> Frame {
        let sampled: HashMap<MarkId, Tween> = self.timeline.advance(now).into_iter().collect();
        let attribute = self.store.active();

        let mut map_marks = self.map.shape_marks(
            &self.regions,
            attribute,
            &self.color,
            &self.palette,
            &self.interaction,
        );
        map_marks.extend(
            self.map
                .legend_marks(&self.color, &self.palette, &self.measurer),
        );

        let mut chart_marks = self.chart.bar_marks(
            &self.records,
            &self.values,
            &self.ranking,
            &self.color,
            &self.palette,
            &self.interaction,
        );
        chart_marks.extend(self.chart.decoration_marks(attribute));

        for mark in map_marks.iter_mut().chain(chart_marks.iter_mut()) {
            if let Some(tween) = sampled.get(&mark.id) {
                apply_tween(mark, tween);
            }
        }

        Frame {
            map: self.map_scene.tick(map_marks),
            chart: self.chart_scene.tick(chart_marks),
        }
    }

    /// Returns `true` while any transition is running.
    pub fn is_animating(&self) -> bool {
        !self.timeline.is_empty()
    }

    /// The running transitions.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The active attribute.
    pub fn active_attribute(&self) -> &str {
        self.store.active()
    }

    /// The selectable attributes.
    pub fn attributes(&self) -> &AttributeSet {
        self.store.attributes()
    }

    /// The dropdown state.
    pub fn dropdown(&self) -> &Dropdown {
        &self.selector
    }

    /// Hover state.
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// The floating label, if one is shown.
    pub fn label(&self) -> Option<&InfoLabel> {
        self.interaction.label()
    }

    /// Regions in topology order, with joined values.
    pub fn regions(&self) -> &[JoinedRegion] {
        &self.regions
    }

    /// Records in file order.
    pub fn records(&self) -> &RecordTable {
        &self.records
    }

    /// Outcome of the join.
    pub fn report(&self) -> &JoinReport {
        &self.report
    }

    /// Region index of `name`.
    pub fn region_row(&self, name: &str) -> Option<usize> {
        self.regions.iter().position(|r| r.name() == name)
    }

    /// Record index of `name`. The last record wins when names repeat.
    pub fn record_row(&self, name: &str) -> Option<usize> {
        self.records.iter().rposition(|r| r.name() == name)
    }

    /// Bar order for the active attribute.
    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    /// The color scale for the active attribute.
    pub fn color_scale(&self) -> &ScaleQuantile<Color> {
        &self.color
    }

    /// The fixed bar-height scale.
    pub fn position_scale(&self) -> &ScaleLinear {
        &self.position
    }

    /// The resolved colors.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The map surface as of the last frame.
    pub fn map_scene(&self) -> &Scene {
        &self.map_scene
    }

    /// The chart surface as of the last frame.
    pub fn chart_scene(&self) -> &Scene {
        &self.chart_scene
    }

    /// The map view.
    pub fn map_view(&self) -> &MapView {
        &self.map
    }

    /// Map surface size.
    pub fn map_size(&self) -> Size {
        self.map.size()
    }

    /// Chart surface size.
    pub fn chart_size(&self) -> Size {
        self.chart.size()
    }

    /// The configuration in effect.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn refresh(&mut self) {
        let attribute = self.store.active();
        self.values = self.records.values(attribute).collect();
        self.ranking = Ranking::new(&self.values, SortOrder::Desc);
        self.color = color_scale(&self.records, attribute, &self.palette.classes);
        if self.color.domain().is_empty() {
            tracing::warn!(attribute, "attribute has no values; every region is no data");
        }
    }

    fn datum(&self, target: Target) -> Option<Datum<'_>> {
        match target {
            Target::Shape(row) => self.regions.get(row).map(Datum::Region),
            Target::Bar(row) => self.records.get(row).map(Datum::Record),
        }
    }
}

/// Animates `target` from what `scene` currently shows.
fn schedule(timeline: &mut Timeline, scene: &Scene, target: &Mark, now: f64, timing: Timing) {
    let Some(to) = tween_of(target) else {
        return;
    };
    let from = scene.get(target.id).and_then(tween_of).unwrap_or(to);
    timeline.schedule(target.id, from, to, now, timing);
}

fn tween_of(mark: &Mark) -> Option<Tween> {
    let Brush::Solid(fill) = mark.payload.fill() else {
        return None;
    };
    match &mark.payload {
        MarkPayload::Rect(r) => Some(Tween::rect(r.rect, *fill)),
        MarkPayload::Path(_) => Some(Tween::fill(*fill)),
        MarkPayload::Text(_) => None,
    }
}

fn apply_tween(mark: &mut Mark, tween: &Tween) {
    match &mut mark.payload {
        MarkPayload::Rect(r) => {
            if let Some(rect) = tween.rect {
                r.rect = rect;
            }
            r.fill = Brush::Solid(tween.fill);
        }
        MarkPayload::Path(p) => p.fill = Brush::Solid(tween.fill),
        MarkPayload::Text(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use choro_charts::SERIES_HIGHLIGHT;
    use choro_core::Stroke;
    use choro_geo::Topology;
    use kurbo::{Rect, Shape};

    use super::*;

    const TOPOLOGY: &str = r#"{
        "type": "Topology",
        "arcs": [
            [[-91, 43], [-88, 43], [-88, 46], [-91, 46], [-91, 43]],
            [[-96, 40.5], [-93, 40.5], [-93, 43.5], [-96, 43.5], [-96, 40.5]],
            [[-97, 44], [-94, 44], [-94, 47], [-97, 47], [-97, 44]],
            [[-86, 42], [-83, 42], [-83, 45], [-86, 45], [-86, 42]]
        ],
        "objects": {
            "US_States": {
                "type": "GeometryCollection",
                "geometries": [
                    { "type": "Polygon", "arcs": [[0]], "properties": { "NAME": "Wisconsin" } },
                    { "type": "Polygon", "arcs": [[1]], "properties": { "NAME": "Iowa" } },
                    { "type": "Polygon", "arcs": [[2]], "properties": { "NAME": "Minnesota" } },
                    { "type": "Polygon", "arcs": [[3]], "properties": { "NAME": "Michigan" } }
                ]
            }
        }
    }"#;

    const CSV: &str = "NAME,2015,2016\nWisconsin,10.5,7.0\nIowa,8.2,9.1\nMinnesota,9.0,\n";

    const WISCONSIN: usize = 0;
    const IOWA: usize = 1;
    const MINNESOTA: usize = 2;
    const MICHIGAN: usize = 3;

    fn data() -> LoadedData {
        LoadedData {
            records: RecordTable::from_csv_reader(CSV.as_bytes()).unwrap(),
            regions: Topology::from_json(TOPOLOGY)
                .unwrap()
                .features("US_States")
                .unwrap(),
        }
    }

    fn app() -> Choropleth {
        let mut app = Choropleth::new(Config::default(), data()).unwrap();
        app.frame(0.0);
        app
    }

    /// Frames until every transition has retired, then once more so scenes hold targets.
    fn settle(app: &mut Choropleth, mut now: f64) -> f64 {
        while app.is_animating() {
            now += 16.0;
            app.frame(now);
        }
        now += 16.0;
        app.frame(now);
        now
    }

    fn shape(app: &Choropleth, row: usize) -> &Mark {
        app.map_scene().get(MapView::id(row)).unwrap()
    }

    fn bar(app: &Choropleth, row: usize) -> &Mark {
        app.chart_scene().get(ChartView::id(row)).unwrap()
    }

    fn bar_rect(app: &Choropleth, row: usize) -> Rect {
        match &bar(app, row).payload {
            MarkPayload::Rect(r) => r.rect,
            other => panic!("expected a rect, got {other:?}"),
        }
    }

    fn stroke(mark: &Mark) -> &Stroke {
        mark.payload.stroke().unwrap()
    }

    fn is_highlighted(app: &Choropleth, mark: &Mark) -> bool {
        stroke(mark).brush == Brush::Solid(app.palette().highlight)
            && mark.z_index == SERIES_HIGHLIGHT
    }

    #[test]
    fn higher_values_get_higher_classes() {
        let app = app();
        let classes = &app.palette().classes;
        assert_eq!(app.active_attribute(), "2015");
        assert_eq!(shape(&app, WISCONSIN).payload.fill(), &Brush::Solid(classes[4]));
        assert_eq!(shape(&app, MINNESOTA).payload.fill(), &Brush::Solid(classes[2]));
        assert_eq!(shape(&app, IOWA).payload.fill(), &Brush::Solid(classes[0]));
        assert_eq!(
            shape(&app, MICHIGAN).payload.fill(),
            &Brush::Solid(app.palette().no_data)
        );
        assert_eq!(app.report().unmatched_regions, ["Michigan"]);
    }

    #[test]
    fn unnamed_geometry_renders_as_no_data() {
        let topology = TOPOLOGY.replace(r#""properties": { "NAME": "Michigan" }"#, r#""properties": {}"#);
        assert_ne!(topology, TOPOLOGY);
        let data = LoadedData {
            records: RecordTable::from_csv_reader(CSV.as_bytes()).unwrap(),
            regions: Topology::from_json(&topology)
                .unwrap()
                .features("US_States")
                .unwrap(),
        };
        let mut app = Choropleth::new(Config::default(), data).unwrap();
        app.frame(0.0);

        assert_eq!(app.regions().len(), 4);
        assert_eq!(
            shape(&app, MICHIGAN).payload.fill(),
            &Brush::Solid(app.palette().no_data)
        );
        assert_eq!(
            shape(&app, WISCONSIN).payload.fill(),
            &Brush::Solid(app.palette().classes[4])
        );
        assert_eq!(app.report().unmatched_regions, [""]);

        app.pointer_over(Target::Shape(MICHIGAN), Point::new(100.0, 100.0));
        assert!(app.label().is_none());
        assert!(app.interaction().highlighted().is_none());
    }

    #[test]
    fn bars_start_sorted_by_descending_value() {
        let app = app();
        let wisconsin = app.record_row("Wisconsin").unwrap();
        let minnesota = app.record_row("Minnesota").unwrap();
        let iowa = app.record_row("Iowa").unwrap();
        assert!(bar_rect(&app, wisconsin).x0 < bar_rect(&app, minnesota).x0);
        assert!(bar_rect(&app, minnesota).x0 < bar_rect(&app, iowa).x0);
        assert_eq!(bar_rect(&app, wisconsin).y1, 455.0);
    }

    #[test]
    fn attribute_change_animates_then_resorts() {
        let mut app = app();
        let before = bar_rect(&app, 0);
        app.change_attribute("2016", 0.0).unwrap();
        assert!(app.is_animating());

        app.frame(500.0);
        let mid = bar_rect(&app, 0);
        assert_ne!(mid, before);

        settle(&mut app, 500.0);
        let after = bar_rect(&app, 0);
        assert_ne!(mid, after);

        // 2016: Iowa 9.1, Wisconsin 7.0, Minnesota no data.
        let (wisconsin, iowa, minnesota) = (0, 1, 2);
        assert!(bar_rect(&app, iowa).x0 < bar_rect(&app, wisconsin).x0);
        assert!(bar_rect(&app, wisconsin).x0 < bar_rect(&app, minnesota).x0);
        assert_eq!(bar_rect(&app, minnesota).height(), 0.0);
        assert_eq!(
            shape(&app, MINNESOTA).payload.fill(),
            &Brush::Solid(app.palette().no_data)
        );
        assert_eq!(app.dropdown().selected(), Some("2016"));

        let title = app
            .chart_scene()
            .sorted()
            .into_iter()
            .find_map(|m| match &m.payload {
                MarkPayload::Text(t) if t.text == "2016" => Some(t.text.clone()),
                _ => None,
            });
        assert_eq!(title.as_deref(), Some("2016"));
    }

    #[test]
    fn switching_back_restores_the_first_coloring() {
        let mut app = app();
        let snapshot = |app: &Choropleth| -> Vec<Mark> {
            app.map_scene()
                .sorted()
                .into_iter()
                .chain(app.chart_scene().sorted())
                .cloned()
                .collect()
        };
        let first = snapshot(&app);

        app.change_attribute("2016", 0.0).unwrap();
        let now = settle(&mut app, 0.0);
        assert_ne!(snapshot(&app), first);

        app.change_attribute("2015", now).unwrap();
        settle(&mut app, now);
        assert_eq!(snapshot(&app), first);
    }

    #[test]
    fn a_new_change_supersedes_the_running_transition() {
        let mut app = app();
        let start = bar_rect(&app, 0);
        let bars = app.records().len();
        let shapes = app.regions().len();

        app.change_attribute("2016", 0.0).unwrap();
        app.frame(500.0);
        let mid = bar_rect(&app, 0);

        app.change_attribute("2015", 500.0).unwrap();
        assert_eq!(app.timeline().len(), bars + shapes);
        let resumed = app
            .timeline()
            .sample(ChartView::id(0), 500.0)
            .and_then(|t| t.rect)
            .unwrap();
        assert!((resumed.y0 - mid.y0).abs() < 1e-9);
        assert!((resumed.x0 - mid.x0).abs() < 1e-9);

        settle(&mut app, 500.0);
        assert_eq!(bar_rect(&app, 0), start);
    }

    #[test]
    fn hovering_highlights_one_region_on_both_views() {
        let mut app = app();
        app.pointer_over(Target::Shape(WISCONSIN), Point::new(400.0, 300.0));
        app.frame(1.0);

        for row in 0..app.regions().len() {
            assert_eq!(is_highlighted(&app, shape(&app, row)), row == WISCONSIN);
        }
        let wisconsin = app.record_row("Wisconsin").unwrap();
        for row in 0..app.records().len() {
            assert_eq!(is_highlighted(&app, bar(&app, row)), row == wisconsin);
        }
        let label = app.label().unwrap();
        assert_eq!(label.value, "10.5%");
        assert_eq!(label.name, "Wisconsin");

        app.pointer_move(Point::new(420.0, 310.0));
        assert_eq!(app.label().unwrap().position, Point::new(430.0, 235.0));

        app.pointer_out(Target::Shape(WISCONSIN));
        app.frame(2.0);
        assert!(app.label().is_none());
        assert!(app.interaction().highlighted().is_none());
        for row in 0..app.regions().len() {
            assert!(!is_highlighted(&app, shape(&app, row)));
        }
        for row in 0..app.records().len() {
            assert!(!is_highlighted(&app, bar(&app, row)));
        }
    }

    #[test]
    fn hovering_a_bar_highlights_its_shape() {
        let mut app = app();
        let iowa = app.record_row("Iowa").unwrap();
        app.handle_pointer(PointerEvent::Over {
            target: Target::Bar(iowa),
            position: Point::new(100.0, 100.0),
        });
        app.frame(1.0);
        assert!(is_highlighted(&app, shape(&app, IOWA)));
        assert!(!is_highlighted(&app, shape(&app, WISCONSIN)));
        assert_eq!(app.label().unwrap().value, "8.2%");

        // Hovering a region without a record still labels it.
        app.handle_pointer(PointerEvent::Out {
            target: Target::Bar(iowa),
        });
        app.pointer_over(Target::Shape(MICHIGAN), Point::new(100.0, 100.0));
        assert_eq!(app.label().unwrap().value, "No data");
        assert_eq!(app.interaction().highlighted().unwrap().as_str(), "Michigan");
    }

    #[test]
    fn unresolvable_targets_are_ignored() {
        let mut app = app();
        app.pointer_over(Target::Bar(99), Point::new(10.0, 10.0));
        assert!(app.label().is_none());
        assert!(app.interaction().highlighted().is_none());

        app.pointer_over(Target::Shape(WISCONSIN), Point::new(10.0, 10.0));
        app.pointer_out(Target::Shape(99));
        // The label always goes; the highlight stays with its own key.
        assert!(app.label().is_none());
        assert!(app.interaction().is_highlighted("Wisconsin"));
    }

    #[test]
    fn placeholder_and_unknown_attributes_change_nothing() {
        let mut app = app();
        assert_eq!(
            app.change_attribute("Select Year", 0.0),
            Err(SelectError::Placeholder("Select Year".into()))
        );
        assert_eq!(
            app.change_attribute("1999", 0.0),
            Err(SelectError::Unknown("1999".into()))
        );
        assert_eq!(app.active_attribute(), "2015");
        assert!(!app.is_animating());
        assert!(app.frame(1.0).is_empty());
    }

    #[test]
    fn hit_testing_finds_shapes_and_bars() {
        let app = app();
        let center = app
            .map_view()
            .path(WISCONSIN)
            .unwrap()
            .bounding_box()
            .center();
        assert_eq!(
            app.hit_test(Surface::Map, center),
            Some(Target::Shape(WISCONSIN))
        );
        assert_eq!(app.hit_test(Surface::Map, Point::new(1.0, 1.0)), None);

        let wisconsin = app.record_row("Wisconsin").unwrap();
        assert_eq!(
            app.hit_test(Surface::Chart, bar_rect(&app, wisconsin).center()),
            Some(Target::Bar(wisconsin))
        );
    }

    #[test]
    fn configured_attributes_replace_the_header() {
        let config = Config {
            attributes: Some(vec!["2016".into(), "2030".into()]),
            ..Config::default()
        };
        let mut app = Choropleth::new(config, data()).unwrap();
        assert_eq!(app.active_attribute(), "2016");

        app.change_attribute("2030", 0.0).unwrap();
        settle(&mut app, 0.0);
        let no_data = Brush::Solid(app.palette().no_data);
        for row in 0..app.regions().len() {
            assert_eq!(shape(&app, row).payload.fill(), &no_data);
        }
    }
}
