// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A retained SVG surface fed by mark diffs.
//!
//! Hosts keep one [`SvgScene`] per view and apply every [`Frame`](crate::Frame) to it. The
//! surface only stores resolved payloads, so serializing never consults the data.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Write as _};

use choro_core::{MarkDiff, MarkId, MarkPayload, Stroke, TextAnchor, TextBaseline};
use kurbo::Rect;
use peniko::Brush;

/// The marks of one surface, kept up to date by applying [`MarkDiff`]s.
#[derive(Debug, Default)]
pub struct SvgScene {
    /// Keyed by paint order.
    marks: BTreeMap<(i32, MarkId), MarkPayload>,
    z_of: BTreeMap<MarkId, i32>,
    view_box: Option<Rect>,
    class: Option<String>,
}

impl SvgScene {
    /// Creates an empty surface of `width` × `height`.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            view_box: Some(Rect::new(0.0, 0.0, width, height)),
            ..Self::default()
        }
    }

    /// Sets the `class` attribute of the root element.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Number of marks on the surface.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the surface is empty.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Applies enters, updates and exits in order.
    pub fn apply_diffs(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter {
                    id, z_index, new, ..
                } => self.put(*id, *z_index, new),
                MarkDiff::Update {
                    id,
                    new_z_index,
                    new,
                    ..
                } => self.put(*id, *new_z_index, new),
                MarkDiff::Exit { id, .. } => self.take(*id),
            }
        }
    }

    fn put(&mut self, id: MarkId, z_index: i32, payload: &MarkPayload) {
        self.take(id);
        self.z_of.insert(id, z_index);
        self.marks.insert((z_index, id), payload.clone());
    }

    fn take(&mut self, id: MarkId) {
        if let Some(z) = self.z_of.remove(&id) {
            self.marks.remove(&(z, id));
        }
    }

    /// Serializes the surface, painting in `(z_index, id)` order.
    ///
    /// Without a fixed size the view box is fitted to the content plus a 10px margin.
    pub fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box
            .or_else(|| self.content_bounds().map(|b| b.inflate(10.0, 10.0)))
            .unwrap_or(Rect::new(0.0, 0.0, 100.0, 100.0));

        let mut out = String::from(r#"<svg xmlns="http://www.w3.org/2000/svg""#);
        if let Some(class) = &self.class {
            attr(&mut out, "class", escape_xml(class));
        }
        attr(
            &mut out,
            "viewBox",
            format_args!(
                "{} {} {} {}",
                view_box.x0,
                view_box.y0,
                view_box.width(),
                view_box.height()
            ),
        );
        attr(&mut out, "width", view_box.width());
        attr(&mut out, "height", view_box.height());
        out.push_str(">\n");

        for payload in self.marks.values() {
            write_element(&mut out, payload);
        }
        out.push_str("</svg>\n");
        out
    }

    fn content_bounds(&self) -> Option<Rect> {
        self.marks
            .values()
            .filter_map(MarkPayload::bounds)
            .reduce(|a, b| a.union(b))
    }
}

fn write_element(out: &mut String, payload: &MarkPayload) {
    match payload {
        MarkPayload::Rect(r) => {
            out.push_str("<rect");
            attr(out, "x", r.rect.x0);
            attr(out, "y", r.rect.y0);
            attr(out, "width", r.rect.width());
            attr(out, "height", r.rect.height());
            paint(out, "fill", &r.fill);
            stroke(out, &r.stroke);
            out.push_str("/>\n");
        }
        MarkPayload::Path(p) => {
            if p.path.elements().is_empty() {
                return;
            }
            out.push_str("<path");
            attr(out, "d", p.path.to_svg());
            paint(out, "fill", &p.fill);
            stroke(out, &p.stroke);
            out.push_str("/>\n");
        }
        MarkPayload::Text(t) => {
            out.push_str("<text");
            attr(out, "x", t.pos.x);
            attr(out, "y", t.pos.y);
            attr(out, "font-size", t.font_size);
            attr(
                out,
                "text-anchor",
                match t.anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                },
            );
            attr(
                out,
                "dominant-baseline",
                match t.baseline {
                    TextBaseline::Alphabetic => "alphabetic",
                    TextBaseline::Middle => "central",
                    TextBaseline::Hanging => "hanging",
                },
            );
            if t.angle != 0.0 {
                attr(
                    out,
                    "transform",
                    format_args!("rotate({} {} {})", t.angle, t.pos.x, t.pos.y),
                );
            }
            paint(out, "fill", &t.fill);
            let _ = writeln!(out, ">{}</text>", escape_xml(&t.text));
        }
    }
}

fn attr(out: &mut String, name: &str, value: impl Display) {
    let _ = write!(out, r#" {name}="{value}""#);
}

/// Writes `name` (and `name-opacity` when translucent). Non-solid brushes paint nothing.
fn paint(out: &mut String, name: &str, brush: &Brush) {
    let Brush::Solid(color) = brush else {
        attr(out, name, "none");
        return;
    };
    let c = color.to_rgba8();
    attr(out, name, format_args!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b));
    if c.a != u8::MAX {
        attr(
            out,
            &format!("{name}-opacity"),
            f64::from(c.a) / f64::from(u8::MAX),
        );
    }
}

fn stroke(out: &mut String, stroke: &Stroke) {
    if stroke.is_visible() {
        paint(out, "stroke", &stroke.brush);
        attr(out, "stroke-width", stroke.width);
    }
}

struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

/// Escapes `s` for use in element text and attribute values.
pub(crate) fn escape_xml(s: &str) -> String {
    Escaped(s).to_string()
}

#[cfg(test)]
mod tests {
    use choro_core::{Mark, Scene};
    use kurbo::BezPath;
    use peniko::Color;
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn diffs_drive_the_serialized_document() {
        let mut scene = Scene::new();
        let mut svg = SvgScene::new(200.0, 100.0).with_class("chart");

        let bar = |h: f64, fill: Color| {
            Mark::builder(MarkId::from_raw(1))
                .rect(Rect::new(10.0, 100.0 - h, 20.0, 100.0))
                .fill(fill)
                .stroke(Stroke::solid(css::RED, 2.0))
                .build()
        };
        let title = Mark::builder(MarkId::from_raw(2))
            .text((100.0, 10.0), "A & B")
            .anchor(TextAnchor::Middle)
            .build();

        svg.apply_diffs(&scene.tick([bar(50.0, css::BLACK), title.clone()]));
        let doc = svg.to_svg_string();
        assert!(doc.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="chart" viewBox="0 0 200 100""#
        ));
        assert!(doc.contains(
            r##"<rect x="10" y="50" width="10" height="50" fill="#000000" stroke="#ff0000" stroke-width="2"/>"##
        ));
        assert!(doc.contains(r#"text-anchor="middle""#));
        assert!(doc.contains(">A &amp; B</text>"));

        svg.apply_diffs(&scene.tick([bar(80.0, css::WHITE)]));
        let doc = svg.to_svg_string();
        assert!(doc.contains(r#"y="20""#));
        assert!(!doc.contains("<text"));
        assert_eq!(svg.len(), 1);
    }

    #[test]
    fn paint_order_follows_z_index_and_survives_restacking() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.line_to((10.0, 10.0));
        path.close_path();
        let shape = |id: u64, z: i32, fill: Color| {
            Mark::builder(MarkId::from_raw(id))
                .path(path.clone())
                .z_index(z)
                .fill(fill)
                .build()
        };

        let mut scene = Scene::new();
        let mut svg = SvgScene::default();
        svg.apply_diffs(&scene.tick([shape(1, 5, css::RED), shape(2, 0, Color::TRANSPARENT)]));
        let doc = svg.to_svg_string();
        let transparent = doc.find(r#"fill-opacity="0""#).unwrap();
        let red = doc.find(r##"fill="#ff0000""##).unwrap();
        assert!(transparent < red);
        assert!(doc.contains(r#"viewBox="-10 -10 30 30""#));

        // Lowering the red shape moves it below the other one.
        svg.apply_diffs(&scene.tick([shape(1, -1, css::RED), shape(2, 0, Color::TRANSPARENT)]));
        let doc = svg.to_svg_string();
        assert_eq!(svg.len(), 2);
        assert!(doc.find(r##"fill="#ff0000""##).unwrap() < doc.find(r#"fill-opacity="0""#).unwrap());
    }

    #[test]
    fn escaping_covers_markup_and_quotes() {
        assert_eq!(escape_xml(r#"<a href="x">O'Brien & co</a>"#), "&lt;a href=&quot;x&quot;&gt;O&#39;Brien &amp; co&lt;/a&gt;");
    }
}
