// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSV attribute records.

use std::collections::BTreeMap;
use std::io;

use thiserror::Error;

/// The column holding region names.
pub const NAME_COLUMN: &str = "NAME";

/// Errors raised while reading a record table.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The CSV could not be read or is malformed.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    /// The header row has no `NAME` column.
    #[error("CSV header has no {NAME_COLUMN} column")]
    MissingNameColumn,
}

/// One CSV row: a region name and the raw text of every other column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    name: String,
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Creates a record from a name and `(column, text)` pairs.
    pub fn new<I, K, V>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The region name (join key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw text of column `attr`.
    pub fn raw(&self, attr: &str) -> Option<&str> {
        self.fields.get(attr).map(String::as_str)
    }

    /// The parsed value of column `attr`; `None` for no data.
    pub fn value(&self, attr: &str) -> Option<f64> {
        self.raw(attr).and_then(parse_number)
    }
}

/// Parses a table cell into a value.
///
/// Surrounding whitespace and one trailing `%` are ignored. Empty, non-numeric, and
/// non-finite text is no data.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = text.strip_suffix('%').unwrap_or(text).trim_end();
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Records in file order, with the header row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordTable {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl RecordTable {
    /// Reads a header row with a `NAME` column followed by data rows.
    ///
    /// Cells are trimmed. Short rows leave the missing columns absent.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, RecordError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
        let name_col = headers
            .iter()
            .position(|h| h == NAME_COLUMN)
            .ok_or(RecordError::MissingNameColumn)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let name = row.get(name_col).unwrap_or_default();
            let fields = headers
                .iter()
                .zip(row.iter())
                .enumerate()
                .filter(|(i, _)| *i != name_col)
                .map(|(_, (h, v))| (h.as_str(), v));
            records.push(Record::new(name, fields));
        }
        tracing::debug!(rows = records.len(), columns = headers.len(), "read CSV");
        Ok(Self { headers, records })
    }

    /// Builds a table from records already in memory.
    pub fn from_records(headers: Vec<String>, records: Vec<Record>) -> Self {
        Self { headers, records }
    }

    /// The header row, `NAME` included.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Every column except `NAME`, in file order.
    pub fn attribute_columns(&self) -> impl Iterator<Item = &str> {
        self.headers
            .iter()
            .map(String::as_str)
            .filter(|h| *h != NAME_COLUMN)
    }

    /// Returns `true` if the header row has `column`.
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `row`.
    pub fn get(&self, row: usize) -> Option<&Record> {
        self.records.get(row)
    }

    /// Iterates over records in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Parsed values of `attr`, one per record, in file order.
    pub fn values<'a>(&'a self, attr: &'a str) -> impl Iterator<Item = Option<f64>> + 'a {
        self.records.iter().map(move |r| r.value(attr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
NAME,2015,2016
Wisconsin,10.5,9.8
Iowa, 8.2 ,
Vermont,n/a,0
";

    #[test]
    fn reads_names_and_raw_fields() {
        let table = RecordTable::from_csv_reader(CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.headers(), ["NAME", "2015", "2016"]);
        assert_eq!(table.attribute_columns().collect::<Vec<_>>(), ["2015", "2016"]);

        let iowa = table.get(1).unwrap();
        assert_eq!(iowa.name(), "Iowa");
        assert_eq!(iowa.raw("2015"), Some("8.2"));
        assert_eq!(iowa.value("2015"), Some(8.2));
        assert_eq!(iowa.raw("NAME"), None);
    }

    #[test]
    fn empty_and_non_numeric_cells_are_no_data_but_zero_is_data() {
        let table = RecordTable::from_csv_reader(CSV.as_bytes()).unwrap();
        let v2016: Vec<_> = table.values("2016").collect();
        assert_eq!(v2016, [Some(9.8), None, Some(0.0)]);
        let v2015: Vec<_> = table.values("2015").collect();
        assert_eq!(v2015, [Some(10.5), Some(8.2), None]);
        assert_eq!(table.values("2030").flatten().count(), 0);
    }

    #[test]
    fn parse_number_accepts_percent_and_rejects_non_finite() {
        assert_eq!(parse_number(" 12.5% "), Some(12.5));
        assert_eq!(parse_number("0"), Some(0.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn missing_name_column_is_an_error() {
        let err = RecordTable::from_csv_reader("STATE,2015\nIowa,8.2\n".as_bytes());
        assert!(matches!(err, Err(RecordError::MissingNameColumn)));
    }
}
