// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attaching attribute values to regions.

use std::collections::BTreeMap;

use choro_geo::Region;
use hashbrown::HashMap;

use crate::{AttributeSet, RecordTable};

/// A region with the values of every attribute attached.
///
/// Regions without a matching record have no values ("unaugmented") and report no data for
/// every attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct JoinedRegion {
    /// The decoded region.
    pub region: Region,
    /// Parsed value per attribute name; `None` for no data.
    pub values: BTreeMap<String, Option<f64>>,
}

impl JoinedRegion {
    /// The region name (join key).
    pub fn name(&self) -> &str {
        &self.region.name
    }

    /// The value of `attr`, or `None` for no data.
    pub fn value(&self, attr: &str) -> Option<f64> {
        self.values.get(attr).copied().flatten()
    }

    /// Returns `true` if a record was joined to this region.
    pub fn is_augmented(&self) -> bool {
        !self.values.is_empty()
    }
}

/// What the join matched and what it skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JoinReport {
    /// Regions that received values.
    pub matched: usize,
    /// Names of regions with no record.
    pub unmatched_regions: Vec<String>,
    /// Names of records with no region.
    pub unmatched_records: Vec<String>,
    /// Names that appear on more than one record; the last such record was used.
    pub duplicate_records: Vec<String>,
}

/// Joins `records` onto `regions` by exact, case-sensitive name.
///
/// Regions without a name never match.
///
/// Every attribute in `attributes` is written to each matching region, parsed per
/// [`crate::parse_number`]. When several records share a name the last one in file order
/// wins. Region order is preserved.
pub fn join(
    regions: Vec<Region>,
    records: &RecordTable,
    attributes: &AttributeSet,
) -> (Vec<JoinedRegion>, JoinReport) {
    let mut report = JoinReport::default();

    let mut by_name: HashMap<&str, usize> = HashMap::new();
    for (row, record) in records.iter().enumerate() {
        if by_name.insert(record.name(), row).is_some() {
            tracing::warn!(name = record.name(), row, "duplicate record; using the later row");
            report.duplicate_records.push(record.name().to_owned());
        }
    }

    for attr in attributes.iter() {
        if !records.has_column(attr) {
            tracing::warn!(attribute = attr, "attribute has no CSV column; treating as no data");
        }
    }

    let mut used = vec![false; records.len()];
    let joined = regions
        .into_iter()
        .map(|region| {
            let row = if region.name.is_empty() {
                None
            } else {
                by_name.get(region.name.as_str())
            };
            let values = match row {
                Some(&row) => {
                    used[row] = true;
                    report.matched += 1;
                    let record = records.get(row);
                    attributes
                        .iter()
                        .map(|attr| (attr.to_owned(), record.and_then(|r| r.value(attr))))
                        .collect()
                }
                None => {
                    tracing::debug!(name = %region.name, "region has no record");
                    report.unmatched_regions.push(region.name.clone());
                    BTreeMap::new()
                }
            };
            JoinedRegion { region, values }
        })
        .collect();

    for (&name, &row) in &by_name {
        if !used[row] {
            tracing::debug!(name, "record has no region");
            report.unmatched_records.push(name.to_owned());
        }
    }
    report.unmatched_records.sort();

    tracing::info!(
        matched = report.matched,
        unmatched_regions = report.unmatched_regions.len(),
        unmatched_records = report.unmatched_records.len(),
        duplicates = report.duplicate_records.len(),
        "joined records to regions"
    );
    (joined, report)
}
