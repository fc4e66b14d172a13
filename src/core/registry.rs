//! Static country and currency lookup tables.
//!
//! Country codes are ISO 3166-1 alpha-2, upper case. The euro area aggregate
//! uses the World Bank id `XC`.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Countries fetched when the configuration does not name any.
pub const DEFAULT_COUNTRIES: [&str; 9] = ["IN", "US", "GB", "JP", "AU", "CA", "DE", "FR", "BR"];

struct CountryInfo {
    name: &'static str,
    currency: &'static str,
    symbol: &'static str,
}

static COUNTRIES: LazyLock<HashMap<&'static str, CountryInfo>> = LazyLock::new(|| {
    [
        ("US", "United States", "USD", "$"),
        ("IN", "India", "INR", "₹"),
        ("GB", "United Kingdom", "GBP", "£"),
        ("JP", "Japan", "JPY", "¥"),
        ("AU", "Australia", "AUD", "A$"),
        ("CA", "Canada", "CAD", "C$"),
        ("DE", "Germany", "EUR", "€"),
        ("FR", "France", "EUR", "€"),
        ("CN", "China", "CNY", "¥"),
        ("BR", "Brazil", "BRL", "R$"),
        ("XC", "Euro area", "EUR", "€"),
    ]
    .into_iter()
    .map(|(code, name, currency, symbol)| {
        (
            code,
            CountryInfo {
                name,
                currency,
                symbol,
            },
        )
    })
    .collect()
});

static ALPHA3_TO_ALPHA2: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("USA", "US"),
        ("IND", "IN"),
        ("GBR", "GB"),
        ("JPN", "JP"),
        ("AUS", "AU"),
        ("CAN", "CA"),
        ("CHN", "CN"),
        ("DEU", "DE"),
        ("FRA", "FR"),
        ("BRA", "BR"),
        ("EMU", "XC"),
        // Legacy datasets key the euro area by its currency.
        ("EUR", "XC"),
    ])
});

/// Returns the currency used by `country_code`.
///
/// Codes missing from the table are returned unchanged, so callers can pass a
/// currency code directly for currencies that have no country entry.
pub fn currency_code_for(country_code: &str) -> String {
    COUNTRIES
        .get(country_code)
        .map_or_else(|| country_code.to_string(), |c| c.currency.to_string())
}

/// Returns the display symbol for the currency of `country_code`, or an empty
/// string if unknown.
pub fn currency_symbol_for(country_code: &str) -> &'static str {
    COUNTRIES.get(country_code).map_or("", |c| c.symbol)
}

pub fn country_name_for(country_code: &str) -> Option<&'static str> {
    COUNTRIES.get(country_code).map(|c| c.name)
}

/// Maps a country code from any supported scheme to the canonical alpha-2 form.
pub fn normalize_country_code(code: &str) -> String {
    let upper = code.trim().to_uppercase();
    ALPHA3_TO_ALPHA2
        .get(upper.as_str())
        .map_or(upper, |alpha2| alpha2.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_for_known_countries() {
        assert_eq!(currency_code_for("US"), "USD");
        assert_eq!(currency_code_for("IN"), "INR");
        assert_eq!(currency_code_for("BR"), "BRL");
        assert_eq!(currency_code_for("CN"), "CNY");
    }

    #[test]
    fn test_euro_countries_share_currency() {
        assert_eq!(currency_code_for("DE"), "EUR");
        assert_eq!(currency_code_for("FR"), "EUR");
        assert_eq!(currency_code_for("XC"), "EUR");
    }

    #[test]
    fn test_currency_code_for_unknown_is_identity() {
        assert_eq!(currency_code_for("ZZ"), "ZZ");
        assert_eq!(currency_code_for("CHF"), "CHF");
        assert_eq!(currency_code_for(""), "");
    }

    #[test]
    fn test_currency_symbol_for() {
        assert_eq!(currency_symbol_for("IN"), "₹");
        assert_eq!(currency_symbol_for("AU"), "A$");
        assert_eq!(currency_symbol_for("FR"), "€");
        assert_eq!(currency_symbol_for("ZZ"), "");
    }

    #[test]
    fn test_normalize_country_code() {
        assert_eq!(normalize_country_code("USA"), "US");
        assert_eq!(normalize_country_code("deu"), "DE");
        assert_eq!(normalize_country_code(" in "), "IN");
        assert_eq!(normalize_country_code("EUR"), "XC");
        assert_eq!(normalize_country_code("ZZZ"), "ZZZ");
    }

    #[test]
    fn test_default_countries_are_registered() {
        for code in DEFAULT_COUNTRIES {
            assert!(country_name_for(code).is_some(), "{code} has no entry");
            assert_ne!(currency_code_for(code), code);
        }
    }
}
