// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised while decoding a topology.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The document is not valid JSON or does not have the shape of a topology.
    #[error("invalid topology: {0}")]
    Json(#[from] serde_json::Error),
    /// The document's `type` is not `Topology`.
    #[error("expected a Topology, found {0:?}")]
    NotATopology(String),
    /// The requested object is missing from `objects`.
    #[error("topology has no object named {0:?}")]
    MissingObject(String),
    /// A geometry type other than `Polygon`, `MultiPolygon`, or `GeometryCollection`.
    #[error("unsupported geometry type {0:?}")]
    UnsupportedGeometry(String),
    /// A geometry references an arc that does not exist.
    #[error("arc index {index} out of range ({len} arcs)")]
    ArcIndex {
        /// The (decoded) arc index.
        index: i64,
        /// Number of arcs in the topology.
        len: usize,
    },
}
