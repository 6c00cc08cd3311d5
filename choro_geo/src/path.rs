// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path generation from projected regions.

use kurbo::BezPath;

use crate::{Polygon, Projection, Region};

/// Turns lon/lat geometry into screen-space paths through a [`Projection`].
///
/// Every ring becomes one closed subpath of straight segments. Rings that project to fewer
/// than three positions are dropped.
#[derive(Clone, Copy, Debug)]
pub struct PathGenerator<P> {
    projection: P,
}

impl<P: Projection> PathGenerator<P> {
    /// Creates a generator for `projection`.
    pub fn new(projection: P) -> Self {
        Self { projection }
    }

    /// The path of every polygon of `region`. Empty for null geometries.
    pub fn region(&self, region: &Region) -> BezPath {
        let mut path = BezPath::new();
        for polygon in &region.polygons {
            self.append_polygon(&mut path, polygon);
        }
        path
    }

    fn append_polygon(&self, path: &mut BezPath, polygon: &Polygon) {
        for ring in polygon {
            let points = self.projection.project_ring(ring);
            let [first, rest @ ..] = points.as_slice() else {
                continue;
            };
            if points.len() < 3 {
                continue;
            }
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
            path.close_path();
        }
    }
}
