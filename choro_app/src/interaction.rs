// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state shared by the map and the chart.
//!
//! Map shapes carry joined regions and bars carry records. Both resolve to a [`RegionKey`]
//! through [`Datum::key`], and highlighting is keyed on that alone, so hovering either view
//! lights up the same region in both.

use choro_charts::{Size, TextMeasurer, TextStyle};
use choro_data::{JoinedRegion, Record};
use kurbo::Point;

use crate::config::LabelConfig;

/// The join key of a region, as shown on both views.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionKey(String);

impl RegionKey {
    /// The region name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// What a view element is bound to.
#[derive(Clone, Copy, Debug)]
pub enum Datum<'a> {
    /// A map shape.
    Region(&'a JoinedRegion),
    /// A chart bar.
    Record(&'a Record),
}

impl Datum<'_> {
    /// The key shared across views; `None` for elements without a usable name.
    pub fn key(&self) -> Option<RegionKey> {
        let name = match self {
            Self::Region(region) => region.name(),
            Self::Record(record) => record.name(),
        };
        (!name.is_empty()).then(|| RegionKey(name.to_owned()))
    }

    /// The element's value of `attribute`.
    pub fn value(&self, attribute: &str) -> Option<f64> {
        match self {
            Self::Region(region) => region.value(attribute),
            Self::Record(record) => record.value(attribute),
        }
    }
}

/// A pointer-sensitive element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// The map shape of the region at this index.
    Shape(usize),
    /// The bar of the record at this index.
    Bar(usize),
}

/// Pointer input, in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer entered `target`.
    Over {
        /// The element entered.
        target: Target,
        /// Pointer position.
        position: Point,
    },
    /// The pointer moved.
    Move {
        /// Pointer position.
        position: Point,
    },
    /// The pointer left `target`.
    Out {
        /// The element left.
        target: Target,
    },
}

/// The floating label describing the hovered region.
#[derive(Clone, Debug, PartialEq)]
pub struct InfoLabel {
    /// Region the label describes.
    pub key: RegionKey,
    /// First line: the active value, or "No data".
    pub value: String,
    /// Second line: the region name.
    pub name: String,
    /// Measured size, padding included.
    pub size: Size,
    /// Top-left corner in page coordinates.
    pub position: Point,
}

impl InfoLabel {
    /// Builds and measures the label for `key` showing `value`.
    pub fn new(
        key: RegionKey,
        value: Option<f64>,
        style: &LabelConfig,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let value = match value {
            Some(v) => format!(
                "{}{}",
                choro_charts::format_value(v, 2),
                style.suffix
            ),
            None => "No data".to_owned(),
        };
        let name = key.as_str().to_owned();
        let top = measurer.measure(&value, TextStyle::new(style.value_font_size).with_bold(true));
        let bottom = measurer.measure(&name, TextStyle::new(style.name_font_size));
        let pad = style.padding.max(0.0);
        let size = Size::new(
            top.advance_width.max(bottom.advance_width) + 2.0 * pad,
            top.line_height() + bottom.line_height() + 2.0 * pad,
        );
        Self {
            key,
            value,
            name,
            size,
            position: Point::ZERO,
        }
    }
}

/// Where to put a label of `size` for a pointer at `pointer`.
///
/// The label sits up and to the right of the pointer. It flips to the left when it would
/// cross `viewport_width`, and below the pointer near the top of the page.
pub fn place_label(pointer: Point, size: Size, viewport_width: f64) -> Point {
    let x = if pointer.x > viewport_width - size.width - 20.0 {
        pointer.x - size.width - 10.0
    } else {
        pointer.x + 10.0
    };
    let y = if pointer.y < 75.0 {
        pointer.y + 25.0
    } else {
        pointer.y - 75.0
    };
    Point::new(x, y)
}

/// Highlight and label state. At most one region is highlighted and at most one label
/// exists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interaction {
    highlighted: Option<RegionKey>,
    label: Option<InfoLabel>,
}

impl Interaction {
    /// Creates an idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlights `label.key` and shows `label` at `pointer`, replacing any previous label.
    pub fn over(&mut self, mut label: InfoLabel, pointer: Point, viewport_width: f64) {
        label.position = place_label(pointer, label.size, viewport_width);
        self.highlighted = Some(label.key.clone());
        self.label = Some(label);
    }

    /// Moves the label with the pointer. No-op without a label.
    pub fn moved(&mut self, pointer: Point, viewport_width: f64) {
        if let Some(label) = &mut self.label {
            label.position = place_label(pointer, label.size, viewport_width);
        }
    }

    /// Clears the highlight of `key` (when it is the highlighted one) and removes the label.
    pub fn out(&mut self, key: Option<&RegionKey>) {
        if key.is_some() && key == self.highlighted.as_ref() {
            self.highlighted = None;
        }
        self.label = None;
    }

    /// The highlighted region.
    pub fn highlighted(&self) -> Option<&RegionKey> {
        self.highlighted.as_ref()
    }

    /// Returns `true` if `name` is the highlighted region.
    pub fn is_highlighted(&self, name: &str) -> bool {
        self.highlighted.as_ref().is_some_and(|k| k.as_str() == name)
    }

    /// The label, if one is shown.
    pub fn label(&self) -> Option<&InfoLabel> {
        self.label.as_ref()
    }
}
