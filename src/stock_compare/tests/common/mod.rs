#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use stock_compare::models::bar::{Bar, BarSeries};
use stock_compare::models::date_range::HistoryWindow;
use stock_compare::providers::{ApiSnafu, HistoryProvider, ProviderError};

/// Serves canned series and records every call it receives.
#[derive(Default)]
pub struct FakeProvider {
    series: HashMap<String, Vec<Bar>>,
    failing: HashMap<String, String>,
    pub calls: Mutex<Vec<(String, HistoryWindow)>>,
}

impl FakeProvider {
    pub fn with_series(mut self, symbol: &str, bars: Vec<Bar>) -> Self {
        self.series.insert(symbol.to_string(), bars);
        self
    }

    pub fn failing(mut self, symbol: &str, message: &str) -> Self {
        self.failing.insert(symbol.to_string(), message.to_string());
        self
    }

    pub fn called_symbols(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(s, _)| s.clone())
            .collect()
    }
}

#[async_trait]
impl HistoryProvider for FakeProvider {
    async fn fetch(&self, symbol: &str, window: &HistoryWindow) -> Result<BarSeries, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((symbol.to_string(), *window));

        if let Some(message) = self.failing.get(symbol) {
            return ApiSnafu { message: message.as_str() }.fail();
        }
        let bars = self.series.get(symbol).cloned().unwrap_or_default();
        Ok(BarSeries::new(symbol, bars))
    }
}

/// Business days starting Monday 2024-01-08.
pub fn day(n: usize) -> NaiveDate {
    let start = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
    let mut date = start;
    let mut left = n;
    while left > 0 {
        date = date.succ_opt().unwrap();
        if date.weekday().number_from_monday() <= 5 {
            left -= 1;
        }
    }
    date
}

/// Bars where every price column equals `close`, one per business day.
pub fn closes(values: &[Option<f64>]) -> Vec<Bar> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Bar {
            date: day(i),
            open: *v,
            high: *v,
            low: *v,
            close: *v,
            volume: v.map(|x| x * 1_000.0),
        })
        .collect()
}

pub fn all(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

pub fn approx_eq(left: &[f64], right: &[f64]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(a, b)| (a - b).abs() < 1e-9)
}
