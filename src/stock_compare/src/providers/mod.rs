//! Provider abstraction for daily history sources.
//!
//! [`HistoryProvider`] is the single seam between the table builder and the
//! outside world: one call per symbol, returning that symbol's complete
//! [`BarSeries`] for the requested [`HistoryWindow`]. The Yahoo Finance
//! implementation lives in [`yahoo`]; tests substitute deterministic fakes.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use stock_compare::models::{bar::BarSeries, date_range::HistoryWindow};
//! use stock_compare::providers::{HistoryProvider, ProviderError};
//!
//! struct EmptyProvider;
//!
//! #[async_trait]
//! impl HistoryProvider for EmptyProvider {
//!     async fn fetch(
//!         &self,
//!         symbol: &str,
//!         _window: &HistoryWindow,
//!     ) -> Result<BarSeries, ProviderError> {
//!         Ok(BarSeries::new(symbol, vec![]))
//!     }
//! }
//! ```

pub mod yahoo;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::{bar::BarSeries, date_range::HistoryWindow};

/// Fetches the full daily record of one symbol.
///
/// Implementations must not retry on their own; a failure is reported once
/// and the caller decides what it means for the whole request.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Returns every bar the provider has for `symbol` inside `window`.
    async fn fetch(&self, symbol: &str, window: &HistoryWindow)
    -> Result<BarSeries, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `HistoryProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API returned an error payload or a non-success status.
    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        backtrace: Backtrace,
    },

    /// The response body did not have the expected shape.
    #[snafu(display("Failed to decode provider response: {source}"))]
    Decode {
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// The provider answered, but had nothing for this symbol.
    #[snafu(display("No data returned for {symbol}"))]
    NoData {
        symbol: String,
        backtrace: Backtrace,
    },
}
