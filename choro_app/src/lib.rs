// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A choropleth map and a ranked bar chart over the same attribute table.
//!
//! The pieces, bottom up:
//! - [`config`]: YAML configuration with defaults for every layout constant.
//! - [`loader`]: reads the CSV and the topology concurrently.
//! - [`scales`]: the quantile color scale and the fixed bar-height scale.
//! - [`map_view`] and [`chart_view`]: turn data into stable-identity marks.
//! - [`interaction`] and [`selector`]: hover state and the attribute dropdown.
//! - [`Choropleth`]: the coordinator; owns all of the above plus running transitions.
//! - [`svg`] and [`html`]: serialize surfaces and pages for static export.
//!
//! Both views render from the same active attribute and the same [`RegionKey`], so a
//! change in either is reflected in the other on the next [`Choropleth::frame`].

pub mod chart_view;
pub mod choropleth;
pub mod config;
pub mod html;
pub mod interaction;
pub mod loader;
pub mod map_view;
pub mod scales;
pub mod selector;
pub mod svg;

pub use choropleth::{BuildError, Choropleth, Frame, Surface};
pub use config::{Config, ConfigError, Palette};
pub use html::{Page, render_page};
pub use interaction::{Datum, InfoLabel, Interaction, PointerEvent, RegionKey, Target};
pub use loader::{DataSources, LoadError, LoadedData, load};
pub use selector::{Dropdown, SelectError};
pub use svg::SvgScene;
