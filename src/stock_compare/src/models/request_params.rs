use serde::{Deserialize, Serialize};

use crate::models::date_range::{DateRange, HistoryWindow};

/// Everything needed to build one comparison table.
///
/// `price_type` is kept as the caller typed it; it is resolved against the
/// known price columns when the table is built, so an unknown name surfaces
/// as a build error rather than being dropped silently.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeriesRequest {
    /// Symbols in the order their columns should appear (e.g. `["AAPL", "MSFT"]`).
    pub symbols: Vec<String>,

    /// Explicit window; `None` asks for the trailing year.
    pub range: Option<DateRange>,

    /// Price column name (`Open`, `High`, `Low`, `Close`). Ignored in volume mode.
    pub price_type: String,

    /// Chart raw daily volume instead of indexed prices.
    pub volume: bool,
}

impl SeriesRequest {
    pub fn new(symbols: Vec<String>) -> Self {
        Self {
            symbols,
            range: None,
            price_type: "Close".to_string(),
            volume: false,
        }
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_price_type(mut self, price_type: impl Into<String>) -> Self {
        self.price_type = price_type.into();
        self
    }

    pub fn with_volume(mut self, volume: bool) -> Self {
        self.volume = volume;
        self
    }

    pub fn window(&self) -> HistoryWindow {
        self.range.into()
    }
}
