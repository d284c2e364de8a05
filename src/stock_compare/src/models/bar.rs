//! Canonical in-memory representation of a daily bar (OHLCV).
//!
//! This is the shape every [`HistoryProvider`](crate::providers::HistoryProvider)
//! hands back, regardless of the vendor behind it.

use chrono::NaiveDate;

use crate::models::field::{Field, PriceField};

/// A single daily bar.
///
/// Providers may leave any value empty for a given day (halted sessions,
/// partial vendor rows); those cells stay `None` rather than being guessed.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Exchange-local trading date.
    pub date: NaiveDate,

    /// Opening price.
    pub open: Option<f64>,

    /// Highest price of the session.
    pub high: Option<f64>,

    /// Lowest price of the session.
    pub low: Option<f64>,

    /// Closing price.
    pub close: Option<f64>,

    /// Shares traded during the session.
    pub volume: Option<f64>,
}

impl Bar {
    /// Returns the value of the requested field for this bar.
    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::Price(PriceField::Open) => self.open,
            Field::Price(PriceField::High) => self.high,
            Field::Price(PriceField::Low) => self.low,
            Field::Price(PriceField::Close) => self.close,
            Field::Volume => self.volume,
        }
    }
}

/// The full retrieved record for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// The symbol this data represents (e.g., "AAPL").
    pub symbol: String,
    /// Bars in the order the provider returned them.
    pub bars: Vec<Bar>,
}

impl BarSeries {
    pub fn new(symbol: impl Into<String>, bars: Vec<Bar>) -> Self {
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    /// Projects the series onto a single field, keeping missing cells.
    pub fn column(&self, field: Field) -> impl Iterator<Item = (NaiveDate, Option<f64>)> + '_ {
        self.bars.iter().map(move |bar| (bar.date, bar.value(field)))
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
