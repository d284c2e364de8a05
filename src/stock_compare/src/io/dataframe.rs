use polars::prelude::*;

use crate::models::series_table::SeriesTable;

/// Name of the leading date column in exported frames.
pub const DATE_COLUMN: &str = "Date";

/// Converts a comparison table into a polars frame: one `Date` column followed
/// by one `f64` column per symbol, in table order.
pub fn table_to_dataframe(table: &SeriesTable) -> PolarsResult<DataFrame> {
    let mut columns = Vec::with_capacity(table.columns().len() + 1);
    columns.push(Column::new(DATE_COLUMN.into(), table.dates()));

    for (symbol, values) in table.columns() {
        columns.push(Column::new(symbol.as_str().into(), values.as_slice()));
    }

    DataFrame::new(columns)
}
