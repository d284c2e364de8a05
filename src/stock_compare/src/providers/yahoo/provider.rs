use std::num::NonZeroU32;
use std::time::Duration;

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use reqwest::Client;
use snafu::ResultExt;
use tracing::{debug, instrument};

use crate::{
    config::ProviderSettings,
    models::{bar::BarSeries, date_range::HistoryWindow},
    providers::{
        ClientBuildSnafu, HistoryProvider, ProviderError, ProviderInitError, ReqwestSnafu,
        yahoo::{params::construct_params, response::decode_chart},
    },
};

pub struct YahooProvider {
    client: Client,
    base_url: String,
    limiter: DefaultDirectRateLimiter,
}

impl YahooProvider {
    /// Creates a new Yahoo provider from the `[provider]` config section.
    ///
    /// No credentials are needed; Yahoo does expect a browser-like user agent.
    pub fn new(settings: &ProviderSettings) -> Result<Self, ProviderInitError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context(ClientBuildSnafu)?;

        let per_second = NonZeroU32::new(settings.requests_per_second).unwrap_or(nonzero!(1u32));

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            limiter: RateLimiter::direct(Quota::per_second(per_second)),
        })
    }

    fn symbol_url(&self, symbol: &str) -> String {
        format!("{}/{}", self.base_url, symbol.trim())
    }
}

#[async_trait]
impl HistoryProvider for YahooProvider {
    #[instrument(skip(self), fields(provider = "yahoo"))]
    async fn fetch(
        &self,
        symbol: &str,
        window: &HistoryWindow,
    ) -> Result<BarSeries, ProviderError> {
        self.limiter.until_ready().await;

        let query = construct_params(window);
        let response = self
            .client
            .get(self.symbol_url(symbol))
            .query(&query)
            .send()
            .await
            .context(ReqwestSnafu)?;

        let status = response.status();
        let body = response.text().await.context(ReqwestSnafu)?;
        debug!(%status, bytes = body.len(), "chart response received");

        let series = decode_chart(symbol, window, status, &body)?;
        debug!(bars = series.bars.len(), "history decoded");
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_symbol_urls_without_double_slashes() {
        let settings = ProviderSettings {
            base_url: "https://query1.finance.yahoo.com/v8/finance/chart/".to_string(),
            ..ProviderSettings::default()
        };
        let provider = YahooProvider::new(&settings).unwrap();

        assert_eq!(
            provider.symbol_url(" BRK-B "),
            "https://query1.finance.yahoo.com/v8/finance/chart/BRK-B"
        );
    }

    #[test]
    fn zero_rate_falls_back_to_one_per_second() {
        let settings = ProviderSettings {
            requests_per_second: 0,
            ..ProviderSettings::default()
        };
        assert!(YahooProvider::new(&settings).is_ok());
    }
}
