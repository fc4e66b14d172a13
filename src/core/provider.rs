//! Data source abstractions for PPP factors and exchange rates.

use crate::core::ppp::{ExchangeRateMapping, PppMapping};
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetches PPP factors keyed by alpha-2 country code.
    ///
    /// Only `countries` are required to be present in the result, but extra
    /// keys are allowed. Every value is finite and strictly positive.
    async fn fetch_ppp_mapping(&self, countries: &[String]) -> Result<PppMapping>;

    /// Fetches units of currency per one USD, keyed by currency code.
    async fn fetch_exchange_rate_mapping(&self) -> Result<ExchangeRateMapping>;
}

/// Returns true for values that can be used as a divisor or a rate.
pub fn is_usable_factor(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// A snapshot of the data needed to run conversions.
#[derive(Debug, Clone, Default)]
pub struct MarketData {
    pub ppp: PppMapping,
    pub rates: ExchangeRateMapping,
}

impl MarketData {
    /// Fetches PPP factors, then exchange rates.
    pub async fn load(provider: &dyn DataProvider, countries: &[String]) -> Result<Self> {
        let ppp = provider.fetch_ppp_mapping(countries).await?;
        debug!(count = ppp.len(), "Loaded PPP factors");
        let rates = provider.fetch_exchange_rate_mapping().await?;
        debug!(count = rates.len(), "Loaded exchange rates");
        Ok(Self { ppp, rates })
    }

    /// Countries that have a PPP factor, in display order.
    pub fn countries(&self) -> Vec<String> {
        self.ppp.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingProvider {
        calls: Mutex<Vec<&'static str>>,
    }

    #[async_trait]
    impl DataProvider for RecordingProvider {
        async fn fetch_ppp_mapping(&self, countries: &[String]) -> Result<PppMapping> {
            self.calls.lock().unwrap().push("ppp");
            Ok(countries.iter().map(|c| (c.clone(), 2.0)).collect())
        }

        async fn fetch_exchange_rate_mapping(&self) -> Result<ExchangeRateMapping> {
            self.calls.lock().unwrap().push("rates");
            Ok(ExchangeRateMapping::from([("USD".to_string(), 1.0)]))
        }
    }

    #[tokio::test]
    async fn test_load_fetches_ppp_then_rates() {
        let provider = RecordingProvider {
            calls: Mutex::new(Vec::new()),
        };
        let countries = vec!["US".to_string(), "IN".to_string()];

        let data = MarketData::load(&provider, &countries).await.unwrap();

        assert_eq!(*provider.calls.lock().unwrap(), vec!["ppp", "rates"]);
        assert_eq!(data.countries(), vec!["IN".to_string(), "US".to_string()]);
        assert_eq!(data.rates.get("USD"), Some(&1.0));
    }

    #[test]
    fn test_is_usable_factor() {
        assert!(is_usable_factor(0.78));
        assert!(!is_usable_factor(0.0));
        assert!(!is_usable_factor(-1.0));
        assert!(!is_usable_factor(f64::NAN));
        assert!(!is_usable_factor(f64::INFINITY));
    }
}
