// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark types and the mark builder.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::color::palette::css;
use peniko::{Brush, Color};

/// Stable identity for a mark across frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Wraps a raw id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives an id for the `row`-th datum of a namespace.
    ///
    /// Identity follows the datum, not its drawing order, so re-sorting a view keeps ids.
    pub const fn for_row(namespace: u64, row: usize) -> Self {
        Self((namespace << 32) | row as u64)
    }

    /// Returns the namespace this id was derived from with [`MarkId::for_row`].
    pub const fn namespace(self) -> u64 {
        self.0 >> 32
    }

    /// Returns the row this id was derived from with [`MarkId::for_row`].
    pub const fn row(self) -> usize {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "rows are created from usize values that fit in 32 bits"
        )]
        {
            (self.0 & 0xFFFF_FFFF) as usize
        }
    }
}

/// The kind of a mark, independent of its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// An axis-aligned rectangle.
    Rect,
    /// An arbitrary path.
    Path,
    /// A single line of text.
    Text,
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor point.
    #[default]
    Start,
    /// Text is centered on the anchor point.
    Middle,
    /// Text ends at the anchor point.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor point is on the alphabetic baseline.
    #[default]
    Alphabetic,
    /// The anchor point is on the vertical middle of the line.
    Middle,
    /// The anchor point is at the top of the line.
    Hanging,
}

/// Stroke paint and width. A width of zero means "not stroked".
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub width: f64,
}

impl Stroke {
    /// A solid stroke.
    pub fn solid(brush: impl Into<Brush>, width: f64) -> Self {
        Self {
            brush: brush.into(),
            width,
        }
    }

    /// No stroke.
    pub fn none() -> Self {
        Self {
            brush: Brush::Solid(Color::TRANSPARENT),
            width: 0.0,
        }
    }

    /// Returns `true` if this stroke paints anything.
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::none()
    }
}

/// A resolved rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Outline.
    pub stroke: Stroke,
}

/// A resolved path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Outline.
    pub stroke: Stroke,
}

/// A resolved (unshaped) line of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// What a mark draws.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// See [`RectPayload`].
    Rect(RectPayload),
    /// See [`PathPayload`].
    Path(PathPayload),
    /// See [`TextPayload`].
    Text(TextPayload),
}

impl MarkPayload {
    /// Returns the payload kind.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Geometric bounds, if known without text measurement.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Path(p) => {
                if p.path.elements().is_empty() {
                    None
                } else {
                    Some(p.path.bounding_box())
                }
            }
            Self::Text(_) => None,
        }
    }

    /// Returns the fill paint.
    pub fn fill(&self) -> &Brush {
        match self {
            Self::Rect(r) => &r.fill,
            Self::Path(p) => &p.fill,
            Self::Text(t) => &t.fill,
        }
    }

    /// Returns the stroke, if this payload kind has one.
    pub fn stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Rect(r) => Some(&r.stroke),
            Self::Path(p) => Some(&p.stroke),
            Self::Text(_) => None,
        }
    }

    /// Returns `true` if `pt` is inside the filled area.
    ///
    /// Paths use the nonzero winding rule. Text never hits.
    pub fn contains(&self, pt: Point) -> bool {
        match self {
            Self::Rect(r) => r.rect.contains(pt),
            Self::Path(p) => p.path.contains(pt),
            Self::Text(_) => false,
        }
    }
}

/// A stable-identity drawable.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable id.
    pub id: MarkId,
    /// Paint order; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// What to draw.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder::new(id)
    }

    /// Returns the payload kind.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }
}

#[derive(Clone, Debug)]
enum Geometry {
    Rect(Rect),
    Path(BezPath),
    Text(Point, String),
}

/// Builder for [`Mark`].
///
/// Defaults: an empty rect at the origin, black fill, no stroke, z-index 0, 12px
/// start-anchored alphabetic text.
#[derive(Clone, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    z_index: i32,
    geometry: Geometry,
    fill: Brush,
    stroke: Stroke,
    font_size: f64,
    angle: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
}

impl MarkBuilder {
    fn new(id: MarkId) -> Self {
        Self {
            id,
            z_index: 0,
            geometry: Geometry::Rect(Rect::ZERO),
            fill: Brush::Solid(css::BLACK),
            stroke: Stroke::none(),
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
        }
    }

    /// Draws a rectangle.
    pub fn rect(mut self, rect: Rect) -> Self {
        self.geometry = Geometry::Rect(rect);
        self
    }

    /// Draws a path.
    pub fn path(mut self, path: BezPath) -> Self {
        self.geometry = Geometry::Path(path);
        self
    }

    /// Draws a line of text anchored at `pos`.
    pub fn text(mut self, pos: impl Into<Point>, text: impl Into<String>) -> Self {
        self.geometry = Geometry::Text(pos.into(), text.into());
        self
    }

    /// Sets the paint order.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline.
    pub fn stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the font size (text only).
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the rotation in degrees (text only).
    pub fn angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the horizontal anchor (text only).
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the baseline (text only).
    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        let payload = match self.geometry {
            Geometry::Rect(rect) => MarkPayload::Rect(RectPayload {
                rect,
                fill: self.fill,
                stroke: self.stroke,
            }),
            Geometry::Path(path) => MarkPayload::Path(PathPayload {
                path,
                fill: self.fill,
                stroke: self.stroke,
            }),
            Geometry::Text(pos, text) => MarkPayload::Text(TextPayload {
                pos,
                text,
                font_size: self.font_size,
                angle: self.angle,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill,
            }),
        };
        Mark {
            id: self.id,
            z_index: self.z_index,
            payload,
        }
    }
}
