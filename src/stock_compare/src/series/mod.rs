//! Builds the comparison table: fetch every symbol, pick one field, align on
//! date and (for prices) index each column to 100.

pub mod align;
pub mod rescale;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use snafu::{ResultExt, ensure};
use tracing::{debug, info, instrument, warn};

use crate::errors::{
    BuildError, EmptyAfterAlignmentSnafu, RetrievalFailedSnafu, UnknownFieldSnafu,
};
use crate::io::dataframe::table_to_dataframe;
use crate::models::{
    bar::BarSeries,
    field::{Field, PriceField},
    request_params::SeriesRequest,
    series_table::SeriesTable,
};
use crate::providers::HistoryProvider;

/// One symbol's selected field, keyed by date.
pub type FieldColumn = BTreeMap<NaiveDate, Option<f64>>;

/// Volume mode wins; otherwise the price type must name a known column.
pub fn resolve_field(request: &SeriesRequest) -> Result<Field, BuildError> {
    if request.volume {
        return Ok(Field::Volume);
    }
    let price = request
        .price_type
        .parse::<PriceField>()
        .context(UnknownFieldSnafu)?;
    Ok(Field::Price(price))
}

/// Pulls `field` out of a fetched series. A date seen twice keeps its last value.
pub fn extract_column(series: &BarSeries, field: Field) -> FieldColumn {
    series.column(field).collect()
}

pub struct SeriesBuilder<'a, P: HistoryProvider + ?Sized> {
    provider: &'a P,
}

impl<'a, P: HistoryProvider + ?Sized> SeriesBuilder<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Runs the whole pipeline for one request.
    ///
    /// The field is resolved before anything is fetched, symbols are fetched one
    /// at a time in input order, and the first provider failure aborts the
    /// request.
    #[instrument(skip(self, request), fields(symbols = ?request.symbols, volume = request.volume))]
    pub async fn build(&self, request: &SeriesRequest) -> Result<SeriesTable, BuildError> {
        let field = resolve_field(request)?;
        let window = request.window();

        let mut columns = Vec::with_capacity(request.symbols.len());
        for symbol in &request.symbols {
            debug!(%symbol, ?window, "fetching history");
            let series = self
                .provider
                .fetch(symbol, &window)
                .await
                .context(RetrievalFailedSnafu { symbol })?;
            debug!(%symbol, bars = series.bars.len(), "history received");
            columns.push((symbol.clone(), extract_column(&series, field)));
        }

        let mut table = align::align_columns(field, columns);
        ensure!(
            !table.is_empty(),
            EmptyAfterAlignmentSnafu {
                symbols: table.columns().len()
            }
        );

        match table_to_dataframe(&table) {
            Ok(df) => info!("aligned {field} data:\n{df}"),
            Err(err) => warn!(error = %err, "could not render aligned table"),
        }

        if !field.is_volume() {
            rescale::index_to_base(&mut table)?;
        }

        Ok(table)
    }
}
