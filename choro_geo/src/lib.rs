// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region geometry for choropleth maps.
//!
//! - [`Topology`] decodes a TopoJSON document (quantized, delta-encoded arcs) into named
//!   [`Region`]s made of longitude/latitude rings.
//! - [`AlbersUsa`] is the composite equal-area projection for the United States: a conic
//!   for the lower 48 states plus Alaska and Hawaii insets.
//! - [`PathGenerator`] turns projected regions into `kurbo::BezPath`s.

mod error;
mod path;
mod projection;
mod topojson;

pub use error::GeoError;
pub use path::PathGenerator;
pub use projection::{AlbersUsa, ConicEqualArea, Projection};
pub use topojson::{Polygon, Region, Ring, Topology, Transform};
