use super::compare::write_result;
use crate::core::registry;
use crate::core::{ConversionRequest, MarketData};
use anyhow::Result;
use std::io::Write;
use tracing::debug;

/// Converts a single amount given on the command line.
pub fn run<W: Write>(
    data: &MarketData,
    amount: f64,
    source: &str,
    target: &str,
    output: &mut W,
) -> Result<()> {
    let request = ConversionRequest::new(
        amount,
        &registry::normalize_country_code(source),
        &registry::normalize_country_code(target),
    );
    debug!(?request, "Converting");

    let result = request.evaluate(&data.ppp, &data.rates)?;
    write_result(output, &request, &result)
}
