use super::util::{http_client, with_retry};
use crate::core::config::RetryConfig;
use crate::core::ppp::PppMapping;
use crate::core::provider::is_usable_factor;
use crate::core::registry;
use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::{debug, instrument};

const PPP_INDICATOR: &str = "PA.NUS.PPP";
const PAGE_SIZE: u32 = 300;

/// Fetches the PPP conversion factor indicator from the World Bank API.
pub struct WorldBankClient {
    base_url: String,
    year: u16,
    retry: RetryConfig,
}

/// The API answers with `[page_info, entries]`, or `[{"message": ...}]` on
/// errors, which fails to parse here.
#[derive(Debug, Deserialize)]
struct WorldBankResponse(IgnoredAny, Option<Vec<IndicatorEntry>>);

#[derive(Debug, Deserialize)]
struct IndicatorEntry {
    country: EntryCountry,
    value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct EntryCountry {
    id: String,
}

impl WorldBankClient {
    pub fn new(base_url: &str, year: u16, retry: RetryConfig) -> Self {
        WorldBankClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            year,
            retry,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v2/country/all/indicator/{}?format=json&per_page={}&date={}",
            self.base_url, PPP_INDICATOR, PAGE_SIZE, self.year
        )
    }

    #[instrument(name = "WorldBankPppFetch", skip(self, countries), fields(year = self.year))]
    pub async fn fetch_ppp(&self, countries: &[String]) -> Result<PppMapping> {
        let url = self.url();
        debug!("Requesting PPP data from {}", url);

        let client = http_client()?;
        let response = with_retry(
            || async { client.get(&url).send().await?.error_for_status() },
            self.retry,
        )
        .await
        .with_context(|| format!("PPP request failed for {url}"))?;

        let text = response
            .text()
            .await
            .context("Failed to read PPP response")?;
        let data: WorldBankResponse =
            serde_json::from_str(&text).context("Failed to parse PPP response")?;
        let entries = data
            .1
            .ok_or_else(|| anyhow!("PPP response contains no entries"))?;
        debug!(entries = entries.len(), "Received World Bank entries");

        let ppp: PppMapping = entries
            .into_iter()
            .filter_map(|entry| {
                let value = entry.value.filter(|v| is_usable_factor(*v))?;
                let code = registry::normalize_country_code(&entry.country.id);
                countries.contains(&code).then_some((code, value))
            })
            .collect();

        if ppp.is_empty() {
            return Err(anyhow!(
                "No PPP data reported for {} in {}",
                countries.join(", "),
                self.year
            ));
        }
        debug!(count = ppp.len(), "Fetched PPP factors");
        Ok(ppp)
    }
}
