use snafu::ensure;

use crate::errors::{BuildError, ZeroBaseSnafu};
use crate::models::series_table::SeriesTable;

/// Divides every column by its first value and scales to 100.
///
/// The first row is pinned to exactly 100. Fails without touching the table if
/// any column starts at zero.
pub fn index_to_base(table: &mut SeriesTable) -> Result<(), BuildError> {
    for (symbol, values) in table.columns() {
        if let Some(&base) = values.first() {
            ensure!(base != 0.0, ZeroBaseSnafu { symbol });
        }
    }

    for (_, values) in table.columns_mut() {
        let Some(&base) = values.first() else {
            continue;
        };
        for value in values.iter_mut() {
            *value = *value / base * 100.0;
        }
        values[0] = 100.0;
    }

    table.mark_indexed();
    Ok(())
}
