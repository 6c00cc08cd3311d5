// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabular attribute data for choropleth maps.
//!
//! - [`RecordTable`] reads per-region attribute values from CSV.
//! - [`AttributeStore`] holds the selectable attributes and the active one.
//! - [`join`] attaches parsed values to decoded regions by name.
//! - [`Ranking`] orders rows by value for the ranked bar chart.
//!
//! Missing, empty, non-numeric, and non-finite values are all "no data" and surface as
//! `None`. Zero is a value like any other.

mod attribute;
mod join;
mod rank;
mod record;

pub use attribute::{AttributeError, AttributeSet, AttributeStore};
pub use join::{JoinReport, JoinedRegion, join};
pub use rank::{Ranking, SortOrder};
pub use record::{NAME_COLUMN, Record, RecordError, RecordTable, parse_number};
