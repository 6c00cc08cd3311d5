// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map projections.
//!
//! [`ConicEqualArea`] is Albers' equal-area conic on a sphere, with a rotation, a center,
//! a scale and a translation. [`AlbersUsa`] composes three of them.

use std::f64::consts::{PI, TAU};

use kurbo::{Point, Rect};

/// Maps longitude/latitude (degrees) to screen coordinates (y down).
pub trait Projection {
    /// Projects one position. `None` if the position is outside the projection's domain.
    fn project(&self, lon: f64, lat: f64) -> Option<Point>;

    /// Projects a whole ring; positions that do not project are dropped.
    fn project_ring(&self, ring: &[Point]) -> Vec<Point> {
        ring.iter().filter_map(|p| self.project(p.x, p.y)).collect()
    }
}

/// Albers' conic equal-area projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConicEqualArea {
    n: f64,
    c: f64,
    r0: f64,
    /// Longitude rotation in radians.
    rotate: f64,
    /// Center in raw projected units.
    center: (f64, f64),
    scale: f64,
    translate: (f64, f64),
}

impl ConicEqualArea {
    /// Creates a projection with standard `parallels` (degrees), rotation `rotate` (degrees of
    /// longitude added before projecting), and `center` (degrees, in the rotated frame).
    ///
    /// Scale is 1 and translation is zero until set.
    pub fn new(parallels: (f64, f64), rotate: f64, center: (f64, f64)) -> Self {
        let sy0 = parallels.0.to_radians().sin();
        let n = 0.5 * (sy0 + parallels.1.to_radians().sin());
        let c = 1.0 + sy0 * (2.0 * n - sy0);
        let r0 = c.sqrt() / n;
        let mut out = Self {
            n,
            c,
            r0,
            rotate: rotate.to_radians(),
            center: (0.0, 0.0),
            scale: 1.0,
            translate: (0.0, 0.0),
        };
        out.center = out.raw(center.0.to_radians(), center.1.to_radians());
        out
    }

    /// Sets the scale factor.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the screen position of the center.
    pub fn with_translate(mut self, x: f64, y: f64) -> Self {
        self.translate = (x, y);
        self
    }

    fn raw(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let r = (self.c - 2.0 * self.n * phi.sin()).max(0.0).sqrt() / self.n;
        let a = lambda * self.n;
        (r * a.sin(), self.r0 - r * a.cos())
    }
}

impl Projection for ConicEqualArea {
    fn project(&self, lon: f64, lat: f64) -> Option<Point> {
        if !lon.is_finite() || !lat.is_finite() {
            return None;
        }
        let mut lambda = lon.to_radians() + self.rotate;
        if lambda > PI {
            lambda -= TAU;
        } else if lambda < -PI {
            lambda += TAU;
        }
        let (x, y) = self.raw(lambda, lat.to_radians());
        Some(Point::new(
            self.translate.0 + self.scale * (x - self.center.0),
            self.translate.1 - self.scale * (y - self.center.1),
        ))
    }
}

/// A composite conic equal-area projection of the United States.
///
/// The lower 48 states use a conic with parallels 29.5° and 45.5°. Alaska (at 0.35 scale) and
/// Hawaii are inset below the southwest of the lower 48. A position is routed to the first
/// sub-projection whose inset rectangle contains its projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlbersUsa {
    lower48: ConicEqualArea,
    alaska: ConicEqualArea,
    hawaii: ConicEqualArea,
    lower48_extent: Rect,
    alaska_extent: Rect,
    hawaii_extent: Rect,
}

impl AlbersUsa {
    /// Creates the projection with scale `k` centered on `(x, y)`.
    pub fn new(k: f64, x: f64, y: f64) -> Self {
        Self {
            lower48: ConicEqualArea::new((29.5, 45.5), 96.0, (-0.6, 38.7))
                .with_scale(k)
                .with_translate(x, y),
            alaska: ConicEqualArea::new((55.0, 65.0), 154.0, (-2.0, 58.5))
                .with_scale(0.35 * k)
                .with_translate(x - 0.307 * k, y + 0.201 * k),
            hawaii: ConicEqualArea::new((8.0, 18.0), 157.0, (-3.0, 19.9))
                .with_scale(k)
                .with_translate(x - 0.205 * k, y + 0.212 * k),
            lower48_extent: Rect::new(x - 0.455 * k, y - 0.238 * k, x + 0.455 * k, y + 0.238 * k),
            alaska_extent: Rect::new(x - 0.425 * k, y + 0.120 * k, x - 0.214 * k, y + 0.234 * k),
            hawaii_extent: Rect::new(x - 0.214 * k, y + 0.166 * k, x - 0.115 * k, y + 0.234 * k),
        }
    }

    /// The lower 48, Alaska and Hawaii sub-projections with their inset rectangles.
    pub fn parts(&self) -> [(&ConicEqualArea, Rect); 3] {
        [
            (&self.lower48, self.lower48_extent),
            (&self.alaska, self.alaska_extent),
            (&self.hawaii, self.hawaii_extent),
        ]
    }

    /// Returns the sub-projection responsible for a position.
    pub fn route(&self, lon: f64, lat: f64) -> Option<&ConicEqualArea> {
        self.parts().into_iter().find_map(|(p, extent)| {
            let pt = p.project(lon, lat)?;
            contains_closed(extent, pt).then_some(p)
        })
    }
}

impl Projection for AlbersUsa {
    fn project(&self, lon: f64, lat: f64) -> Option<Point> {
        self.route(lon, lat)?.project(lon, lat)
    }

    /// Projects a ring with a single sub-projection, picked from the first routable position.
    ///
    /// Keeping one sub-projection per ring stops a shape from tearing across insets.
    fn project_ring(&self, ring: &[Point]) -> Vec<Point> {
        let Some(part) = ring.iter().find_map(|p| self.route(p.x, p.y)) else {
            return Vec::new();
        };
        part.project_ring(ring)
    }
}

fn contains_closed(r: Rect, p: Point) -> bool {
    p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(p: Point, x: f64, y: f64, tol: f64) -> bool {
        (p.x - x).abs() < tol && (p.y - y).abs() < tol
    }

    #[test]
    fn lower48_matches_reference_projection() {
        let albers = AlbersUsa::new(1070.0, 480.0, 250.0);
        let sf = albers.project(-122.4194, 37.7749).unwrap();
        assert!(close(sf, 107.43, 214.14, 0.01), "{sf:?}");
    }

    #[test]
    fn lower48_points_stay_inside_the_lower48_inset() {
        let albers = AlbersUsa::new(800.0, 300.0, 230.0);
        let (_, extent) = albers.parts()[0];
        for (lon, lat) in [(-98.0, 38.5), (-89.5, 44.5), (-69.0, 45.0), (-80.2, 25.8)] {
            let p = albers.project(lon, lat).unwrap();
            assert!(contains_closed(extent, p), "{lon},{lat} -> {p:?}");
        }
        let wisconsin = albers.project(-89.5, 44.5).unwrap();
        let iowa = albers.project(-93.5, 42.0).unwrap();
        assert!(wisconsin.x > iowa.x, "Wisconsin is east of Iowa");
        assert!(wisconsin.y < iowa.y, "and north of it");
    }

    #[test]
    fn alaska_and_hawaii_route_to_their_insets() {
        let albers = AlbersUsa::new(1070.0, 480.0, 250.0);
        let [_, (alaska, ak_extent), (hawaii, hi_extent)] = albers.parts();

        let anchorage = albers.project(-149.9, 61.2).unwrap();
        assert!(contains_closed(ak_extent, anchorage));
        assert_eq!(albers.route(-149.9, 61.2), Some(alaska));

        let honolulu = albers.project(-157.86, 21.31).unwrap();
        assert!(contains_closed(hi_extent, honolulu));
        assert_eq!(albers.route(-157.86, 21.31), Some(hawaii));
    }

    #[test]
    fn positions_outside_every_inset_do_not_project() {
        let albers = AlbersUsa::new(1070.0, 480.0, 250.0);
        assert_eq!(albers.project(2.35, 48.85), None);
        assert_eq!(albers.project(f64::NAN, 40.0), None);
    }

    #[test]
    fn rings_use_one_sub_projection() {
        let albers = AlbersUsa::new(1070.0, 480.0, 250.0);
        // A ring starting in Alaska that strays outside the inset keeps every vertex.
        let ring = vec![
            Point::new(-150.0, 61.0),
            Point::new(-130.0, 61.0),
            Point::new(-130.0, 55.0),
            Point::new(-150.0, 61.0),
        ];
        assert_eq!(albers.project_ring(&ring).len(), 4);
    }
}
