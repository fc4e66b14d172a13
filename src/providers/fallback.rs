//! Fixed datasets and the provider that substitutes them when live data is
//! unavailable.

use crate::core::ppp::{ExchangeRateMapping, PppMapping};
use crate::core::provider::DataProvider;
use crate::core::registry;
use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

/// Sample PPP factors, keyed by ISO alpha-3 codes (`EUR` is the euro area).
const SAMPLE_PPP: [(&str, f64); 11] = [
    ("USA", 1.0),
    ("IND", 21.5),
    ("GBR", 0.78),
    ("JPN", 102.5),
    ("AUS", 1.45),
    ("CAN", 1.3),
    ("EUR", 0.83),
    ("CHN", 4.2),
    ("DEU", 0.83),
    ("FRA", 0.85),
    ("BRA", 2.3),
];

/// Sample units per USD.
const SAMPLE_RATES: [(&str, f64); 9] = [
    ("USD", 1.0),
    ("INR", 83.12),
    ("GBP", 0.76),
    ("JPY", 149.5),
    ("AUD", 1.52),
    ("CAD", 1.37),
    ("EUR", 0.92),
    ("CNY", 7.24),
    ("BRL", 5.05),
];

/// Serves the built-in sample datasets.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticProvider;

#[async_trait]
impl DataProvider for StaticProvider {
    async fn fetch_ppp_mapping(&self, countries: &[String]) -> Result<PppMapping> {
        Ok(SAMPLE_PPP
            .iter()
            .map(|(code, value)| (registry::normalize_country_code(code), *value))
            .filter(|(code, _)| countries.contains(code))
            .collect())
    }

    async fn fetch_exchange_rate_mapping(&self) -> Result<ExchangeRateMapping> {
        Ok(SAMPLE_RATES
            .iter()
            .map(|(code, rate)| (code.to_string(), *rate))
            .collect())
    }
}

/// Uses `primary`, and answers from `secondary` whenever `primary` fails.
///
/// Failures of the primary are logged and never returned.
pub struct FallbackProvider<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackProvider<P, S>
where
    P: DataProvider,
    S: DataProvider,
{
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

#[async_trait]
impl<P, S> DataProvider for FallbackProvider<P, S>
where
    P: DataProvider,
    S: DataProvider,
{
    async fn fetch_ppp_mapping(&self, countries: &[String]) -> Result<PppMapping> {
        match self.primary.fetch_ppp_mapping(countries).await {
            Ok(ppp) => {
                info!("Successfully fetched PPP data for {} countries", ppp.len());
                Ok(ppp)
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Error fetching PPP data, using sample PPP data instead");
                self.secondary.fetch_ppp_mapping(countries).await
            }
        }
    }

    async fn fetch_exchange_rate_mapping(&self) -> Result<ExchangeRateMapping> {
        match self.primary.fetch_exchange_rate_mapping().await {
            Ok(rates) => {
                info!(
                    "Successfully fetched exchange rates for {} currencies",
                    rates.len()
                );
                Ok(rates)
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Error fetching exchange rates, using sample exchange rates instead");
                self.secondary.fetch_exchange_rate_mapping().await
            }
        }
    }
}
