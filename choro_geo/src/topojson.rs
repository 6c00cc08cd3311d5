// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TopoJSON decoding.
//!
//! Geometries in a topology reference shared arcs by index. A negative index `~i` (that is,
//! `-i - 1`) means arc `i` traversed backwards. When a `transform` is present, arc positions
//! are quantized integers, delta-encoded against the previous position in the arc.

use std::collections::BTreeMap;

use kurbo::Point;
use serde::Deserialize;
use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::GeoError;

/// A closed ring of positions; `x` is longitude and `y` latitude, in degrees.
pub type Ring = Vec<Point>;

/// A polygon: one exterior ring followed by zero or more holes.
pub type Polygon = Vec<Ring>;

/// The quantization transform of a topology.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Transform {
    /// Per-axis scale.
    pub scale: [f64; 2],
    /// Per-axis translation.
    pub translate: [f64; 2],
}

#[derive(Clone, Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    arcs: Value,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometries: Vec<RawGeometry>,
}

/// A decoded TopoJSON topology.
#[derive(Clone, Debug, Deserialize)]
pub struct Topology {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    transform: Option<Transform>,
    arcs: Vec<Vec<Vec<f64>>>,
    objects: BTreeMap<String, RawGeometry>,
}

/// A named region: one feature of a topology object.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    /// The `NAME` property; the join key.
    pub name: String,
    /// Every property of the geometry, `NAME` included.
    pub properties: Map<String, Value>,
    /// Polygons in longitude/latitude. Empty for null geometries.
    pub polygons: SmallVec<[Polygon; 1]>,
}

impl Topology {
    /// Parses a topology from JSON text.
    pub fn from_json(text: &str) -> Result<Self, GeoError> {
        let topology: Self = serde_json::from_str(text)?;
        if topology.kind != "Topology" {
            return Err(GeoError::NotATopology(topology.kind));
        }
        Ok(topology)
    }

    /// Decodes the object `name` into one [`Region`] per geometry.
    ///
    /// A `GeometryCollection` yields its members in order; a single geometry yields one region.
    pub fn features(&self, name: &str) -> Result<Vec<Region>, GeoError> {
        let object = self
            .objects
            .get(name)
            .ok_or_else(|| GeoError::MissingObject(name.to_owned()))?;
        let arcs = self.decode_arcs();
        let members = match object.kind.as_deref() {
            Some("GeometryCollection") => object.geometries.iter().collect(),
            _ => vec![object],
        };
        members
            .into_iter()
            .enumerate()
            .map(|(i, g)| region(&arcs, i, g))
            .collect()
    }

    /// Absolute arc positions, with the transform applied and delta encoding undone.
    fn decode_arcs(&self) -> Vec<Vec<Point>> {
        self.arcs
            .iter()
            .map(|arc| {
                let positions = arc.iter().filter(|p| p.len() >= 2).map(|p| (p[0], p[1]));
                match self.transform {
                    Some(t) => {
                        let (mut x, mut y) = (0.0, 0.0);
                        positions
                            .map(|(dx, dy)| {
                                x += dx;
                                y += dy;
                                Point::new(
                                    x * t.scale[0] + t.translate[0],
                                    y * t.scale[1] + t.translate[1],
                                )
                            })
                            .collect()
                    }
                    None => positions.map(|(x, y)| Point::new(x, y)).collect(),
                }
            })
            .collect()
    }
}

fn region(arcs: &[Vec<Point>], index: usize, geometry: &RawGeometry) -> Result<Region, GeoError> {
    let properties = geometry.properties.clone().unwrap_or_default();
    let name = match properties.get("NAME").and_then(Value::as_str) {
        Some(name) => name.to_owned(),
        None => {
            tracing::debug!(index, "geometry has no NAME; it joins no record");
            String::new()
        }
    };

    let polygons = match geometry.kind.as_deref() {
        None => SmallVec::new(),
        Some("Polygon") => {
            let rings: Vec<Vec<i64>> = serde_json::from_value(geometry.arcs.clone())?;
            smallvec::smallvec![polygon(arcs, &rings)?]
        }
        Some("MultiPolygon") => {
            let polys: Vec<Vec<Vec<i64>>> = serde_json::from_value(geometry.arcs.clone())?;
            polys
                .iter()
                .map(|rings| polygon(arcs, rings))
                .collect::<Result<_, _>>()?
        }
        Some(other) => return Err(GeoError::UnsupportedGeometry(other.to_owned())),
    };

    Ok(Region {
        name,
        properties,
        polygons,
    })
}

fn polygon(arcs: &[Vec<Point>], rings: &[Vec<i64>]) -> Result<Polygon, GeoError> {
    rings.iter().map(|r| ring(arcs, r)).collect()
}

/// Stitches arcs into one ring, dropping the point shared by consecutive arcs.
fn ring(arcs: &[Vec<Point>], indices: &[i64]) -> Result<Ring, GeoError> {
    let mut out: Ring = Vec::new();
    for &index in indices {
        let (i, reversed) = if index < 0 {
            (!index, true)
        } else {
            (index, false)
        };
        let arc = usize::try_from(i)
            .ok()
            .and_then(|i| arcs.get(i))
            .ok_or(GeoError::ArcIndex {
                index: i,
                len: arcs.len(),
            })?;
        out.pop();
        if reversed {
            out.extend(arc.iter().rev());
        } else {
            out.extend(arc.iter());
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two unit squares sharing the edge x = 1, quantized on a 1/10 grid.
    const SQUARES: &str = r#"{
        "type": "Topology",
        "transform": { "scale": [0.1, 0.1], "translate": [-100, 40] },
        "arcs": [
            [[10, 0], [0, 10]],
            [[10, 10], [-10, 0], [0, -10], [10, 0]],
            [[10, 0], [10, 0], [0, 10], [-10, 0]]
        ],
        "objects": {
            "US_States": {
                "type": "GeometryCollection",
                "geometries": [
                    { "type": "Polygon", "arcs": [[0, 1]], "properties": { "NAME": "West" } },
                    { "type": "MultiPolygon", "arcs": [[[2, -1]]], "properties": { "NAME": "East", "FIPS": "02" } },
                    { "type": null, "properties": { "NAME": "Nowhere" } }
                ]
            }
        }
    }"#;

    fn approx(a: Point, b: (f64, f64)) -> bool {
        (a.x - b.0).abs() < 1e-9 && (a.y - b.1).abs() < 1e-9
    }

    #[test]
    fn transform_and_delta_decoding_produce_absolute_positions() {
        let topology = Topology::from_json(SQUARES).unwrap();
        let regions = topology.features("US_States").unwrap();
        assert_eq!(regions.len(), 3);

        let west = &regions[0];
        assert_eq!(west.name, "West");
        let ring = &west.polygons[0][0];
        // Arc 0 then arc 1 without the shared joint.
        assert_eq!(ring.len(), 5);
        assert!(approx(ring[0], (-99.0, 40.0)));
        assert!(approx(ring[1], (-99.0, 41.0)));
        assert!(approx(ring[2], (-100.0, 41.0)));
        assert!(approx(ring[4], (-99.0, 40.0)));
    }

    #[test]
    fn negative_indices_reverse_shared_arcs() {
        let topology = Topology::from_json(SQUARES).unwrap();
        let regions = topology.features("US_States").unwrap();
        let east = &regions[1];
        assert_eq!(east.properties.get("FIPS").and_then(Value::as_str), Some("02"));
        let ring = &east.polygons[0][0];
        assert!(approx(ring[0], (-99.0, 40.0)));
        assert!(approx(ring[2], (-98.0, 41.0)));
        // Reversed arc 0 runs from (-99, 41) back down to the start.
        assert!(approx(ring[3], (-99.0, 41.0)));
        assert!(approx(*ring.last().unwrap(), (-99.0, 40.0)));
        assert_eq!(ring.len(), 5);
    }

    #[test]
    fn null_geometries_become_empty_regions() {
        let topology = Topology::from_json(SQUARES).unwrap();
        let regions = topology.features("US_States").unwrap();
        assert_eq!(regions[2].name, "Nowhere");
        assert!(regions[2].polygons.is_empty());
    }

    #[test]
    fn unnamed_geometries_decode_with_an_empty_name() {
        let unnamed = SQUARES.replace(r#""properties": { "NAME": "East", "FIPS": "02" }"#, r#""properties": {}"#);
        assert_ne!(unnamed, SQUARES);
        let topology = Topology::from_json(&unnamed).unwrap();
        let regions = topology.features("US_States").unwrap();
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0].name, "West");
        assert_eq!(regions[1].name, "");
        assert_eq!(regions[1].polygons[0][0].len(), 5);

        let numbered = SQUARES.replace(r#""NAME": "Nowhere""#, r#""NAME": 7"#);
        let regions = Topology::from_json(&numbered).unwrap().features("US_States").unwrap();
        assert_eq!(regions[2].name, "");
    }

    #[test]
    fn missing_object_and_bad_arcs_are_errors() {
        let topology = Topology::from_json(SQUARES).unwrap();
        assert!(matches!(
            topology.features("counties"),
            Err(GeoError::MissingObject(_))
        ));

        let bad = SQUARES.replace("[[0, 1]]", "[[0, 7]]");
        let topology = Topology::from_json(&bad).unwrap();
        assert!(matches!(
            topology.features("US_States"),
            Err(GeoError::ArcIndex { index: 7, len: 3 })
        ));
    }

    #[test]
    fn non_topology_documents_are_rejected() {
        let err = Topology::from_json(r#"{"type":"FeatureCollection","arcs":[],"objects":{}}"#);
        assert!(matches!(err, Err(GeoError::NotATopology(_))));
        assert!(matches!(Topology::from_json("{"), Err(GeoError::Json(_))));
    }
}
