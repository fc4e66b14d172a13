use crate::core::registry::{self, DEFAULT_COUNTRIES};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const WORLD_BANK_BASE_URL: &str = "https://api.worldbank.org";
pub const EXCHANGE_RATES_BASE_URL: &str = "https://open.er-api.com";
pub const DEFAULT_PPP_YEAR: u16 = 2022;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WorldBankConfig {
    pub base_url: String,
    #[serde(default = "default_ppp_year")]
    pub year: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExchangeRatesConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProvidersConfig {
    pub world_bank: Option<WorldBankConfig>,
    pub exchange_rates: Option<ExchangeRatesConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            world_bank: Some(WorldBankConfig {
                base_url: WORLD_BANK_BASE_URL.to_string(),
                year: DEFAULT_PPP_YEAR,
            }),
            exchange_rates: Some(ExchangeRatesConfig {
                base_url: EXCHANGE_RATES_BASE_URL.to_string(),
            }),
        }
    }
}

impl ProvidersConfig {
    pub fn world_bank_base_url(&self) -> &str {
        self.world_bank
            .as_ref()
            .map_or(WORLD_BANK_BASE_URL, |p| &p.base_url)
    }

    pub fn ppp_year(&self) -> u16 {
        self.world_bank.as_ref().map_or(DEFAULT_PPP_YEAR, |p| p.year)
    }

    pub fn exchange_rates_base_url(&self) -> &str {
        self.exchange_rates
            .as_ref()
            .map_or(EXCHANGE_RATES_BASE_URL, |p| &p.base_url)
    }
}

/// Retry policy for remote requests. `attempts` counts retries after the
/// first request.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct RetryConfig {
    pub attempts: usize,
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            attempts: 2,
            delay_ms: 500,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(
        default = "default_countries",
        deserialize_with = "deserialize_countries"
    )]
    pub countries: Vec<String>,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub offline: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            providers: ProvidersConfig::default(),
            countries: default_countries(),
            retry: RetryConfig::default(),
            offline: false,
        }
    }
}

fn default_ppp_year() -> u16 {
    DEFAULT_PPP_YEAR
}

fn default_countries() -> Vec<String> {
    DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect()
}

fn deserialize_countries<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    let mut countries: Vec<String> = Vec::with_capacity(raw.len());
    for code in raw.iter().map(|c| registry::normalize_country_code(c)) {
        if !code.is_empty() && !countries.contains(&code) {
            countries.push(code);
        }
    }
    Ok(countries)
}

impl AppConfig {
    /// Loads the config from the default location, or the defaults if no
    /// config file has been created yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        debug!("Loading default config");
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "pppx", "pppx")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
providers:
  world_bank:
    base_url: "http://example.com/wb"
    year: 2021
  exchange_rates:
    base_url: "http://example.com/fx"
countries: ["us", "IND", "DE", "US"]
retry:
  attempts: 0
  delay_ms: 10
offline: true
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.providers.world_bank_base_url(), "http://example.com/wb");
        assert_eq!(config.providers.ppp_year(), 2021);
        assert_eq!(
            config.providers.exchange_rates_base_url(),
            "http://example.com/fx"
        );
        assert_eq!(config.countries, vec!["US", "IN", "DE"]);
        assert_eq!(
            config.retry,
            RetryConfig {
                attempts: 0,
                delay_ms: 10
            }
        );
        assert!(config.offline);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.providers.world_bank_base_url(), WORLD_BANK_BASE_URL);
        assert_eq!(config.providers.ppp_year(), DEFAULT_PPP_YEAR);
        assert_eq!(config.countries.len(), DEFAULT_COUNTRIES.len());
        assert!(!config.offline);
    }

    #[test]
    fn test_missing_provider_sections_fall_back_to_defaults() {
        let yaml_str = r#"
providers:
  world_bank:
    base_url: "http://example.com/wb"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.providers.ppp_year(), DEFAULT_PPP_YEAR);
        assert!(config.providers.exchange_rates.is_none());
        assert_eq!(
            config.providers.exchange_rates_base_url(),
            EXCHANGE_RATES_BASE_URL
        );
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "countries: [JP, GB]").unwrap();

        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.countries, vec!["JP", "GB"]);
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = AppConfig::load_from_path(dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_from_invalid_yaml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "countries: {{not: a list}}").unwrap();

        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
