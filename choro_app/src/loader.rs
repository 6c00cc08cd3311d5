// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concurrent loading of the attribute table and the region topology.

use std::path::{Path, PathBuf};

use choro_data::{RecordError, RecordTable};
use choro_geo::{GeoError, Region, Topology};
use thiserror::Error;

use crate::config::DataConfig;

/// Where to read the two inputs from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataSources {
    /// Attribute table (CSV).
    pub csv: PathBuf,
    /// Region topology (TopoJSON).
    pub topology: PathBuf,
    /// Object inside the topology holding the regions.
    pub object: String,
}

impl From<&DataConfig> for DataSources {
    fn from(config: &DataConfig) -> Self {
        Self {
            csv: config.csv.clone(),
            topology: config.topology.clone(),
            object: config.object.clone(),
        }
    }
}

/// Both inputs, parsed.
#[derive(Clone, Debug)]
pub struct LoadedData {
    /// Attribute records in file order.
    pub records: RecordTable,
    /// Decoded regions in topology order.
    pub regions: Vec<Region>,
}

/// Why loading failed. Any failure aborts the whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        /// The file that failed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The CSV is malformed or has no `NAME` column.
    #[error("failed to parse records from {}", path.display())]
    Records {
        /// The CSV file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: RecordError,
    },
    /// The topology is malformed or lacks the requested object.
    #[error("failed to decode regions from {}", path.display())]
    Regions {
        /// The topology file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: GeoError,
    },
}

/// Reads and parses both inputs.
///
/// The two reads run concurrently and the first failure wins; nothing is returned unless
/// both inputs read and parse.
pub async fn load(sources: &DataSources) -> Result<LoadedData, LoadError> {
    let (csv_text, topology_text) =
        tokio::try_join!(read(&sources.csv), read(&sources.topology))?;

    let records =
        RecordTable::from_csv_reader(csv_text.as_bytes()).map_err(|source| LoadError::Records {
            path: sources.csv.clone(),
            source,
        })?;
    let regions = Topology::from_json(&topology_text)
        .and_then(|topology| topology.features(&sources.object))
        .map_err(|source| LoadError::Regions {
            path: sources.topology.clone(),
            source,
        })?;

    tracing::info!(
        records = records.len(),
        regions = regions.len(),
        object = %sources.object,
        "loaded inputs"
    );
    Ok(LoadedData { records, regions })
}

async fn read(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })
}
