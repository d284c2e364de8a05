//! The aligned, date-keyed comparison table.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::models::field::Field;

/// Dates (ascending, unique) by symbol columns (input order), no missing cells.
///
/// Once [`is_indexed`](Self::is_indexed) is set, every column starts at exactly 100.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesTable {
    field: Field,
    dates: Vec<NaiveDate>,
    columns: IndexMap<String, Vec<f64>>,
    indexed: bool,
}

impl SeriesTable {
    /// Callers guarantee every column has `dates.len()` values.
    pub(crate) fn from_parts(
        field: Field,
        dates: Vec<NaiveDate>,
        columns: IndexMap<String, Vec<f64>>,
    ) -> Self {
        debug_assert!(columns.values().all(|c| c.len() == dates.len()));
        Self {
            field,
            dates,
            columns,
            indexed: false,
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn columns(&self) -> &IndexMap<String, Vec<f64>> {
        &self.columns
    }

    pub fn column(&self, symbol: &str) -> Option<&[f64]> {
        self.columns.get(symbol).map(Vec::as_slice)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Number of rows (dates).
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    pub(crate) fn columns_mut(&mut self) -> impl Iterator<Item = (&String, &mut Vec<f64>)> {
        self.columns.iter_mut()
    }

    pub(crate) fn mark_indexed(&mut self) {
        self.indexed = true;
    }
}
