use super::util::{http_client, with_retry};
use crate::core::config::RetryConfig;
use crate::core::ppp::ExchangeRateMapping;
use crate::core::provider::is_usable_factor;
use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Fetches the latest USD based exchange rates from open.er-api.com.
pub struct OpenErApiClient {
    base_url: String,
    retry: RetryConfig,
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: String,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    #[serde(default)]
    rates: HashMap<String, f64>,
}

impl OpenErApiClient {
    pub fn new(base_url: &str, retry: RetryConfig) -> Self {
        OpenErApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            retry,
        }
    }

    #[instrument(name = "OpenErApiRatesFetch", skip(self))]
    pub async fn fetch_rates(&self) -> Result<ExchangeRateMapping> {
        let url = format!("{}/v6/latest/USD", self.base_url);
        debug!("Requesting exchange rates from {}", url);

        let client = http_client()?;
        let response = with_retry(
            || async { client.get(&url).send().await?.error_for_status() },
            self.retry,
        )
        .await
        .with_context(|| format!("Exchange rate request failed for {url}"))?;

        let data: LatestRatesResponse = response
            .json()
            .await
            .context("Failed to parse exchange rate response")?;

        if data.result != "success" {
            return Err(anyhow!(
                "Exchange rate service returned {}: {}",
                data.result,
                data.error_type.as_deref().unwrap_or("unknown error")
            ));
        }

        let rates: ExchangeRateMapping = data
            .rates
            .into_iter()
            .filter(|(_, rate)| is_usable_factor(*rate))
            .collect();
        if rates.is_empty() {
            return Err(anyhow!("Exchange rate response contains no rates"));
        }
        debug!(count = rates.len(), "Fetched exchange rates");
        Ok(rates)
    }
}
