// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static HTML export of the current state.

use std::fmt::Write as _;

use crate::interaction::InfoLabel;
use crate::selector::Dropdown;
use crate::svg::escape_xml;

/// Everything one page shows.
#[derive(Clone, Copy, Debug)]
pub struct Page<'a> {
    /// Document title.
    pub title: &'a str,
    /// The attribute dropdown.
    pub dropdown: &'a Dropdown,
    /// Serialized map surface.
    pub map_svg: &'a str,
    /// Serialized chart surface.
    pub chart_svg: &'a str,
    /// The floating label, if shown.
    pub label: Option<&'a InfoLabel>,
}

const STYLE: &str = "\
body { font-family: sans-serif; margin: 0; }
.dropdown { position: absolute; top: 30px; left: 30px; z-index: 10; font-size: 1em; }
.map, .chart { display: inline-block; vertical-align: top; margin-top: 70px; }
.infolabel { position: absolute; background: #fff; border: 1px solid #999; padding: 6px; pointer-events: none; }
.infolabel h1 { margin: 0; font-size: 18px; }
.labelname { font-size: 12px; }
";

/// Renders `page` as a standalone HTML document.
pub fn render_page(page: &Page<'_>) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_xml(page.title));
    let _ = writeln!(out, "<style>\n{STYLE}</style>\n</head>\n<body>");

    out.push_str("<select class=\"dropdown\">\n");
    for option in page.dropdown.options() {
        out.push_str("<option");
        if let Some(value) = option.value {
            let _ = write!(out, " value=\"{}\"", escape_xml(value));
        } else {
            out.push_str(" class=\"titleOption\"");
        }
        if option.disabled {
            out.push_str(" disabled");
        }
        if option.selected {
            out.push_str(" selected");
        }
        let _ = writeln!(out, ">{}</option>", escape_xml(option.label));
    }
    out.push_str("</select>\n");

    let _ = writeln!(out, "<div class=\"map\">\n{}</div>", page.map_svg);
    let _ = writeln!(out, "<div class=\"chart\">\n{}</div>", page.chart_svg);

    if let Some(label) = page.label {
        let _ = writeln!(
            out,
            "<div class=\"infolabel\" id=\"{}_label\" style=\"left: {}px; top: {}px;\">\
             <h1>{}</h1><div class=\"labelname\">{}</div></div>",
            escape_xml(&label.key.as_str().replace(' ', "_")),
            label.position.x,
            label.position.y,
            escape_xml(&label.value),
            escape_xml(&label.name),
        );
    }

    out.push_str("</body>\n</html>\n");
    out
}
