use super::open_er_api::OpenErApiClient;
use super::world_bank::WorldBankClient;
use crate::core::config::AppConfig;
use crate::core::ppp::{ExchangeRateMapping, PppMapping};
use crate::core::provider::DataProvider;
use anyhow::Result;
use async_trait::async_trait;

/// Live data: PPP factors from the World Bank, rates from open.er-api.com.
pub struct RemoteProvider {
    ppp_client: WorldBankClient,
    rate_client: OpenErApiClient,
}

impl RemoteProvider {
    pub fn new(ppp_client: WorldBankClient, rate_client: OpenErApiClient) -> Self {
        Self {
            ppp_client,
            rate_client,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let providers = &config.providers;
        Self::new(
            WorldBankClient::new(
                providers.world_bank_base_url(),
                providers.ppp_year(),
                config.retry,
            ),
            OpenErApiClient::new(providers.exchange_rates_base_url(), config.retry),
        )
    }
}

#[async_trait]
impl DataProvider for RemoteProvider {
    async fn fetch_ppp_mapping(&self, countries: &[String]) -> Result<PppMapping> {
        self.ppp_client.fetch_ppp(countries).await
    }

    async fn fetch_exchange_rate_mapping(&self) -> Result<ExchangeRateMapping> {
        self.rate_client.fetch_rates().await
    }
}
