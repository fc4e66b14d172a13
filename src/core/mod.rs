//! Core business logic abstractions

pub mod config;
pub mod log;
pub mod ppp;
pub mod provider;
pub mod registry;

// Re-export main types for cleaner imports
pub use ppp::{
    ConversionError, ConversionRequest, ConversionResult, ExchangeRateMapping, PppMapping, convert,
};
pub use provider::{DataProvider, MarketData};
