//! Purchasing power parity conversion.
use crate::core::registry;
use std::collections::BTreeMap;
use thiserror::Error;

/// PPP conversion factor (local currency units per international dollar) by
/// country code.
pub type PppMapping = BTreeMap<String, f64>;

/// Units of currency per one USD, by currency code.
pub type ExchangeRateMapping = BTreeMap<String, f64>;

#[derive(Debug, Error, PartialEq)]
pub enum ConversionError {
    #[error("Amount must be a positive number, got {0}")]
    InvalidAmount(f64),

    #[error("PPP data not available for {}", .countries.join(", "))]
    MissingPppData { countries: Vec<String> },

    #[error("Exchange rates not available for {}", .currencies.join(", "))]
    MissingExchangeRate { currencies: Vec<String> },
}

fn missing(keys: [&str; 2], present: impl Fn(&str) -> bool) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for key in keys {
        if !present(key) && !out.iter().any(|k| k == key) {
            out.push(key.to_string());
        }
    }
    out
}

/// Converts `amount` in the source country's currency into the amount with
/// the same purchasing power in the target country's currency.
///
/// Both countries must have a PPP factor, and both of their currencies must
/// have an exchange rate. The rates are only checked for presence: the result
/// is `amount / ppp[source] * ppp[target]`.
pub fn convert(
    amount: f64,
    source: &str,
    target: &str,
    ppp: &PppMapping,
    rates: &ExchangeRateMapping,
) -> Result<f64, ConversionError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ConversionError::InvalidAmount(amount));
    }

    let countries = missing([source, target], |c| ppp.contains_key(c));
    if !countries.is_empty() {
        return Err(ConversionError::MissingPppData { countries });
    }

    let source_currency = registry::currency_code_for(source);
    let target_currency = registry::currency_code_for(target);
    let currencies = missing([source_currency.as_str(), target_currency.as_str()], |c| {
        rates.contains_key(c)
    });
    if !currencies.is_empty() {
        return Err(ConversionError::MissingExchangeRate { currencies });
    }

    let usd_ppp_value = amount / ppp[source];
    Ok(usd_ppp_value * ppp[target])
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub source: String,
    pub target: String,
}

/// A converted amount together with what is needed to display it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub amount: f64,
    pub source_currency: String,
    pub source_symbol: &'static str,
    pub target_currency: String,
    pub target_symbol: &'static str,
}

impl ConversionRequest {
    pub fn new(amount: f64, source: &str, target: &str) -> Self {
        Self {
            amount,
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    pub fn evaluate(
        &self,
        ppp: &PppMapping,
        rates: &ExchangeRateMapping,
    ) -> Result<ConversionResult, ConversionError> {
        let amount = convert(self.amount, &self.source, &self.target, ppp, rates)?;
        Ok(ConversionResult {
            amount,
            source_currency: registry::currency_code_for(&self.source),
            source_symbol: registry::currency_symbol_for(&self.source),
            target_currency: registry::currency_code_for(&self.target),
            target_symbol: registry::currency_symbol_for(&self.target),
        })
    }
}
