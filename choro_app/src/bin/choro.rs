// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loads a CSV and a topology, applies an attribute and an optional hover, and writes the
//! resulting page as static HTML.
//!
//! ```bash
//! choro --csv data/MentalDistress_65orOlder.csv --topology data/US_States.topojson \
//!     --attribute 2017 --hover Wisconsin --out choro.html
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use choro_app::{Choropleth, Config, DataSources, Frame, Page, SvgScene, Target, render_page};
use clap::Parser;
use kurbo::Shape;

/// Frame step while settling transitions, in milliseconds.
const FRAME_MS: f64 = 16.0;

#[derive(Parser, Debug)]
#[command(name = "choro")]
#[command(about = "Render a coordinated choropleth map and ranked bar chart to HTML")]
struct Cli {
    /// YAML configuration; defaults apply when omitted
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Attribute table (overrides the configuration)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Region topology (overrides the configuration)
    #[arg(long)]
    topology: Option<PathBuf>,

    /// Attribute to show instead of the first one
    #[arg(long, short)]
    attribute: Option<String>,

    /// Region to hover in the exported page
    #[arg(long)]
    hover: Option<String>,

    /// Output HTML file
    #[arg(long, short, default_value = "choro.html")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("choro=info,choro_app=info,choro_data=info")
            }),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(csv) = cli.csv {
        config.data.csv = csv;
    }
    if let Some(topology) = cli.topology {
        config.data.topology = topology;
    }

    let sources = DataSources::from(&config.data);
    let data = match choro_app::load(&sources).await {
        Ok(data) => data,
        Err(err) => {
            tracing::error!(error = %err, "nothing to render");
            return Err(err).context("loading input data");
        }
    };

    let mut app = Choropleth::new(config, data).context("setting up the views")?;
    let mut map = SvgScene::new(app.map_size().width, app.map_size().height).with_class("map");
    let mut chart =
        SvgScene::new(app.chart_size().width, app.chart_size().height).with_class("chart");
    let mut apply = |frame: Frame| {
        map.apply_diffs(&frame.map);
        chart.apply_diffs(&frame.chart);
    };

    let mut now = 0.0;
    apply(app.frame(now));

    if let Some(attribute) = &cli.attribute {
        app.change_attribute(attribute, now)
            .with_context(|| format!("selecting attribute {attribute:?}"))?;
        while app.is_animating() {
            now += FRAME_MS;
            apply(app.frame(now));
        }
    }

    if let Some(name) = &cli.hover {
        match app.region_row(name) {
            Some(row) => {
                let center = app
                    .map_view()
                    .path(row)
                    .map(|p| p.bounding_box().center())
                    .unwrap_or_default();
                app.pointer_over(Target::Shape(row), center);
                now += FRAME_MS;
                apply(app.frame(now));
            }
            None => tracing::warn!(region = %name, "no such region to hover"),
        }
    }

    let map_svg = map.to_svg_string();
    let chart_svg = chart.to_svg_string();
    let html = render_page(&Page {
        title: app.active_attribute(),
        dropdown: app.dropdown(),
        map_svg: &map_svg,
        chart_svg: &chart_svg,
        label: app.label(),
    });
    tokio::fs::write(&cli.out, html)
        .await
        .with_context(|| format!("writing {}", cli.out.display()))?;
    tracing::info!(out = %cli.out.display(), attribute = app.active_attribute(), "page written");
    Ok(())
}
