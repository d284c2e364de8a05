use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use chrono_tz::Tz;
use reqwest::StatusCode;
use serde::Deserialize;
use snafu::{OptionExt, ResultExt};
use tracing::warn;

use crate::models::bar::{Bar, BarSeries};
use crate::models::date_range::HistoryWindow;
use crate::providers::{ApiSnafu, DecodeSnafu, NoDataSnafu, ProviderError};

#[derive(Deserialize, Debug)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Deserialize, Debug)]
pub struct ChartEnvelope {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Deserialize, Debug)]
pub struct ChartResult {
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug, Default)]
pub struct ChartMeta {
    #[serde(rename = "exchangeTimezoneName")]
    pub exchange_timezone_name: Option<String>,
    #[serde(rename = "gmtoffset")]
    pub gmt_offset: Option<i32>,
}

#[derive(Deserialize, Debug)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteColumns>,
}

#[derive(Deserialize, Debug, Default)]
pub struct QuoteColumns {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

/// Maps provider timestamps onto exchange-local calendar dates.
enum SessionClock {
    Zone(Tz),
    Offset(FixedOffset),
}

impl SessionClock {
    fn from_meta(meta: &ChartMeta) -> Self {
        if let Some(name) = meta.exchange_timezone_name.as_deref() {
            match name.parse::<Tz>() {
                Ok(tz) => return SessionClock::Zone(tz),
                Err(_) => warn!(timezone = name, "unknown exchange timezone, using gmtoffset"),
            }
        }
        let offset = meta
            .gmt_offset
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix());
        SessionClock::Offset(offset)
    }

    fn date_of(&self, ts: i64) -> Option<NaiveDate> {
        let utc = DateTime::from_timestamp(ts, 0)?;
        Some(match self {
            SessionClock::Zone(tz) => utc.with_timezone(tz).date_naive(),
            SessionClock::Offset(offset) => utc.with_timezone(offset).date_naive(),
        })
    }
}

fn cell(column: &[Option<f64>], i: usize) -> Option<f64> {
    column.get(i).copied().flatten().filter(|v| v.is_finite())
}

impl ChartResult {
    /// Zips the columnar payload into bars. Short or null columns become
    /// missing cells; timestamps outside chrono's range are skipped.
    pub fn into_bar_series(self, symbol: &str) -> BarSeries {
        let clock = SessionClock::from_meta(&self.meta);
        let quote = self.indicators.quote.into_iter().next().unwrap_or_default();

        let bars = self
            .timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let date = clock.date_of(ts)?;
                Some(Bar {
                    date,
                    open: cell(&quote.open, i),
                    high: cell(&quote.high, i),
                    low: cell(&quote.low, i),
                    close: cell(&quote.close, i),
                    volume: cell(&quote.volume, i),
                })
            })
            .collect();

        BarSeries::new(symbol, bars)
    }
}

/// Turns one chart response into a series, or the provider error it reports.
///
/// Yahoo answers unknown symbols with a 404 that still carries a normal error
/// envelope, so the body is inspected before the status. Bars outside an
/// explicit window (by exchange-local date) are dropped.
pub fn decode_chart(
    symbol: &str,
    window: &HistoryWindow,
    status: StatusCode,
    body: &str,
) -> Result<BarSeries, ProviderError> {
    let parsed = serde_json::from_str::<ChartResponse>(body);
    if !status.is_success() {
        let message = match parsed.ok().and_then(|r| r.chart.error) {
            Some(err) => format!("{}: {}", err.code, err.description),
            None => format!("HTTP {status}: {}", body.chars().take(200).collect::<String>()),
        };
        return ApiSnafu { message }.fail();
    }

    let chart = parsed.context(DecodeSnafu)?.chart;
    if let Some(err) = chart.error {
        return ApiSnafu {
            message: format!("{}: {}", err.code, err.description),
        }
        .fail();
    }

    let result = chart
        .result
        .and_then(|results| results.into_iter().next())
        .context(NoDataSnafu { symbol })?;

    let mut series = result.into_bar_series(symbol);
    if let HistoryWindow::Range(range) = window {
        series.bars.retain(|bar| range.contains(bar.date));
    }
    if series.is_empty() {
        return NoDataSnafu { symbol }.fail();
    }

    Ok(series)
}
