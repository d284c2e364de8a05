use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An explicit calendar window: `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// `start` was not strictly before `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl fmt::Display for InvalidDateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "start date {} must be before end date {}",
            self.start, self.end
        )
    }
}

impl std::error::Error for InvalidDateRange {}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidDateRange> {
        if start >= end {
            return Err(InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// What a provider is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryWindow {
    /// An explicit start/end pair.
    Range(DateRange),
    /// The last twelve months, as the provider defines them.
    TrailingYear,
}

impl HistoryWindow {
    /// Label used where a window is shown to a person.
    pub const TRAILING_YEAR_LABEL: &'static str = "1 year";
}

impl From<Option<DateRange>> for HistoryWindow {
    fn from(range: Option<DateRange>) -> Self {
        range.map_or(HistoryWindow::TrailingYear, HistoryWindow::Range)
    }
}
