//! Interactive comparison: pick two countries and an amount, print the
//! amount with the same purchasing power.

use super::ui;
use crate::core::registry;
use crate::core::{ConversionRequest, ConversionResult, MarketData};
use anyhow::{Result, bail};
use std::io::{BufRead, Write};

/// Line oriented prompts that re-ask until the answer is valid.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(
            self.output,
            "\n{} ",
            ui::style_text(prompt, ui::StyleType::Prompt)
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input closed before a value was entered");
        }
        Ok(line.trim().to_string())
    }

    fn complain(&mut self, message: &str) -> Result<()> {
        writeln!(
            self.output,
            "{}",
            ui::style_text(message, ui::StyleType::Error)
        )?;
        Ok(())
    }

    /// Asks for a 1-based index into `countries`.
    pub fn select_country<'a>(&mut self, prompt: &str, countries: &'a [String]) -> Result<&'a str> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=countries.len()).contains(&n) => return Ok(countries[n - 1].as_str()),
                Ok(_) => self.complain("Invalid country number. Please try again.")?,
                Err(_) => self.complain("Please enter a valid number!")?,
            }
        }
    }

    pub fn read_amount(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<f64>() {
                Ok(amount) if amount.is_finite() && amount > 0.0 => return Ok(amount),
                Ok(_) => self.complain("Please enter a positive amount.")?,
                Err(_) => self.complain("Please enter a valid number!")?,
            }
        }
    }
}

fn country_label(code: &str) -> String {
    match registry::country_name_for(code) {
        Some(name) => format!("{code} ({name})"),
        None => code.to_string(),
    }
}

pub fn write_countries<W: Write>(out: &mut W, countries: &[String]) -> Result<()> {
    writeln!(
        out,
        "\n{}",
        ui::style_text("Available countries for comparison:", ui::StyleType::Title)
    )?;
    for (i, country) in countries.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, country_label(country))?;
    }
    Ok(())
}

pub fn write_result<W: Write>(
    out: &mut W,
    request: &ConversionRequest,
    result: &ConversionResult,
) -> Result<()> {
    writeln!(
        out,
        "\n{}",
        ui::style_text("Results:", ui::StyleType::Title)
    )?;
    writeln!(
        out,
        "{} in {} has the purchasing power of:",
        ui::format_amount(result.source_symbol, request.amount),
        request.source
    )?;
    let converted = ui::format_amount(result.target_symbol, result.amount);
    writeln!(
        out,
        "{} in {} {}",
        ui::style_text(&converted, ui::StyleType::Value),
        request.target,
        ui::style_text("(based on PPP)", ui::StyleType::Subtle)
    )?;
    Ok(())
}

/// Runs the interactive flow against already loaded data.
///
/// Conversion failures are reported to the user; only I/O errors and closed
/// input end the flow with an error.
pub fn run<R: BufRead, W: Write>(data: &MarketData, input: R, output: W) -> Result<()> {
    let countries = data.countries();
    let mut prompter = Prompter::new(input, output);

    writeln!(
        prompter.output(),
        "\n{}",
        ui::style_text("PPP Comparison Tool", ui::StyleType::Title)
    )?;
    if countries.is_empty() {
        bail!("No PPP data available for any country");
    }
    write_countries(prompter.output(), &countries)?;

    let source = prompter.select_country("Select a country number:", &countries)?;
    let target = prompter.select_country(
        "Select second country (final result will be displayed in this country's currency):",
        &countries,
    )?;
    let amount = prompter.read_amount(&format!(
        "Enter amount in ({}):",
        registry::currency_symbol_for(source)
    ))?;

    let request = ConversionRequest::new(amount, source, target);
    match request.evaluate(&data.ppp, &data.rates) {
        Ok(result) => write_result(prompter.output(), &request, &result)?,
        Err(e) => {
            let message = format!("Error occurred while calculating PPP: {e}");
            prompter.complain(&message)?;
        }
    }
    Ok(())
}
