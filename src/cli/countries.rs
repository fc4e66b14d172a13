use super::ui;
use crate::core::MarketData;
use crate::core::registry;
use comfy_table::{Cell, CellAlignment, Table};

/// Builds a table of every country with a PPP factor.
pub fn countries_table(data: &MarketData) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Country"),
        ui::header_cell("PPP Factor"),
        ui::header_cell("Currency"),
        ui::header_cell("Rate (per USD)"),
    ]);

    for (code, factor) in &data.ppp {
        let currency = registry::currency_code_for(code);
        let symbol = registry::currency_symbol_for(code);
        let currency_display = if symbol.is_empty() {
            currency.clone()
        } else {
            format!("{currency} ({symbol})")
        };
        let rate = data.rates.get(&currency).copied();

        table.add_row(vec![
            Cell::new(code),
            Cell::new(registry::country_name_for(code).unwrap_or("N/A")),
            Cell::new(format!("{factor:.4}")).set_alignment(CellAlignment::Right),
            Cell::new(currency_display),
            ui::format_optional_cell(rate, |r| format!("{r:.4}")),
        ]);
    }
    table
}

pub fn run(data: &MarketData) {
    if data.ppp.is_empty() {
        println!("No PPP data available for any country.");
        return;
    }
    println!("{}", countries_table(data));
}
