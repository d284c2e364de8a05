use std::collections::BTreeSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::models::{field::Field, series_table::SeriesTable};
use crate::series::FieldColumn;

/// Outer-joins the columns on date, then keeps only the dates where every
/// column has a finite value.
///
/// Column order follows `columns`; a repeated symbol keeps its first position
/// and its last data.
pub fn align_columns(field: Field, columns: Vec<(String, FieldColumn)>) -> SeriesTable {
    let by_symbol: IndexMap<String, FieldColumn> = columns.into_iter().collect();

    let all_dates: BTreeSet<_> = by_symbol
        .values()
        .flat_map(|column| column.keys().copied())
        .collect();

    let mut dates = Vec::with_capacity(all_dates.len());
    let mut aligned: IndexMap<String, Vec<f64>> = by_symbol
        .keys()
        .map(|symbol| (symbol.clone(), Vec::with_capacity(all_dates.len())))
        .collect();

    let mut dropped = 0usize;
    for date in all_dates {
        let row: Option<Vec<f64>> = by_symbol
            .values()
            .map(|column| column.get(&date).copied().flatten().filter(|v| v.is_finite()))
            .collect();

        let Some(row) = row else {
            dropped += 1;
            continue;
        };

        dates.push(date);
        for (values, value) in aligned.values_mut().zip(row) {
            values.push(value);
        }
    }

    if dropped > 0 {
        debug!(dropped, kept = dates.len(), "dropped incomplete rows");
    }

    SeriesTable::from_parts(field, dates, aligned)
}
