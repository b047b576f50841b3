//! CLI command for inspecting exchange rates

use clap::Args;
use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use super::calculate::RateArgs;
use crate::config::Settings;
use crate::error::CostResult;
use crate::models::{Currency, ExchangeRateTable};
use crate::rates::{RateLookup, RateSource};
use crate::services::conversion_rate;

/// Arguments for the rates command
#[derive(Args, Debug, Clone)]
pub struct RatesArgs {
    #[command(flatten)]
    pub rates: RateArgs,
}

/// One row of the rate table
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct RateRow {
    #[tabled(rename = "Currency")]
    pub currency: String,
    #[tabled(rename = "Symbol")]
    pub symbol: String,
    #[tabled(rename = "Source Rate")]
    pub raw: String,
    #[tabled(rename = "Per USD")]
    pub per_usd: String,
}

/// Build one row per supported currency
pub fn rate_rows(table: &ExchangeRateTable) -> Vec<RateRow> {
    Currency::ALL
        .iter()
        .map(|&currency| RateRow {
            currency: currency.code().to_string(),
            symbol: currency.symbol().to_string(),
            raw: table
                .rate_for(currency)
                .map(|rate| format!("{:.6}", rate))
                .unwrap_or_else(|| "-".to_string()),
            per_usd: format!("{:.6}", conversion_rate(table, currency)),
        })
        .collect()
}

fn describe_source(lookup: &RateLookup) -> String {
    match (lookup.source, lookup.fetched_at) {
        (RateSource::Unavailable, _) => "unavailable (1:1 fallback)".to_string(),
        (_, Some(at)) => format!("fetched {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
        (_, None) => "static".to_string(),
    }
}

/// Handle the rates command
pub fn handle_rates_command(settings: &Settings, args: RatesArgs) -> CostResult<()> {
    let lookup = args.rates.lookup(settings);

    println!("Exchange Rates");
    println!("==============");
    println!("Source: {}", describe_source(&lookup));
    println!();

    let mut table = Table::new(rate_rows(&lookup.table));
    table
        .with(Style::rounded())
        .modify(Columns::new(2..), Alignment::right());
    println!("{}", table);

    if lookup.table.is_empty() {
        println!();
        println!("No rates available; amounts are shown unconverted.");
    }

    Ok(())
}
