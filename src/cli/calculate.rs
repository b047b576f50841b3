//! CLI command for cost calculation
//!
//! Collects usage flags, resolves exchange rates and prints the cost report.

use clap::Args;
use serde::Serialize;

use crate::config::Settings;
use crate::error::{CostError, CostResult};
use crate::models::{BillingCycle, Currency, CustomService, RateOverride, UsageInputs};
use crate::rates::{build_rate_service, RateLookup, RateProvider, RateService};
use crate::reports::{ChartSeries, CostReport, TrendPoint};
use crate::services::{CalculationRequest, CostCalculator};

/// Exchange rate options shared by every command that converts amounts
#[derive(Args, Debug, Clone, Default)]
pub struct RateArgs {
    /// Skip the rate fetch (amounts stay in USD unless --rate is given)
    #[arg(long)]
    pub offline: bool,

    /// Manual exchange rate, repeatable (e.g. --rate USD=1 --rate EUR=0.92)
    #[arg(long = "rate", value_name = "CODE=VALUE")]
    pub overrides: Vec<RateOverride>,

    /// Access key for the exchange rate API
    #[arg(long, env = "SAAS_COST_ACCESS_KEY", hide_env_values = true)]
    pub access_key: Option<String>,
}

impl RateArgs {
    /// Build the rate service for these options
    pub fn service(&self, settings: &Settings) -> RateService<Box<dyn RateProvider>> {
        let mut rate_settings = settings.rates.clone();
        if let Some(key) = &self.access_key {
            rate_settings.access_key = Some(key.clone());
        }
        build_rate_service(&rate_settings, self.offline, &self.overrides)
    }

    /// Resolve rates for these options
    pub fn lookup(&self, settings: &Settings) -> RateLookup {
        let lookup = self.service(settings).rates();
        if let Some(warning) = &lookup.warning {
            eprintln!("Warning: {}", warning);
        }
        lookup
    }
}

/// Usage and display options for one calculation
#[derive(Args, Debug, Clone)]
pub struct CalculationArgs {
    /// Number of users
    #[arg(long, default_value_t = UsageInputs::DEFAULT_USERS)]
    pub users: u64,

    /// Number of API calls
    #[arg(long, default_value_t = UsageInputs::DEFAULT_API_CALLS)]
    pub api_calls: u64,

    /// Storage in GB
    #[arg(long, default_value_t = UsageInputs::DEFAULT_STORAGE_GB, value_parser = parse_non_negative)]
    pub storage: f64,

    /// Emails sent
    #[arg(long, default_value_t = UsageInputs::DEFAULT_EMAILS)]
    pub emails: u64,

    /// Revenue in USD
    #[arg(long, default_value_t = UsageInputs::DEFAULT_REVENUE, value_parser = parse_non_negative)]
    pub revenue: f64,

    /// Billing cycle: monthly or yearly (defaults to the configured cycle)
    #[arg(long)]
    pub cycle: Option<BillingCycle>,

    /// Display currency: USD, EUR, INR, GBP or JPY (defaults to the configured currency)
    #[arg(long)]
    pub currency: Option<Currency>,

    /// Custom service, repeatable, at most 10 (e.g. --service Analytics:20:0.01)
    #[arg(long = "service", value_name = "NAME:FIXED:PER_USER")]
    pub services: Vec<CustomService>,

    #[command(flatten)]
    pub rates: RateArgs,
}

impl CalculationArgs {
    /// Build a validated calculation request
    pub fn to_request(&self, settings: &Settings) -> CostResult<CalculationRequest> {
        let request = CalculationRequest {
            usage: UsageInputs {
                users: self.users,
                api_calls: self.api_calls,
                storage_gb: self.storage,
                revenue: self.revenue,
                emails: self.emails,
            },
            custom_services: self.services.clone(),
            cycle: self.cycle.unwrap_or(settings.default_cycle),
            currency: self.currency.unwrap_or(settings.default_currency),
        };
        request.validate()?;
        Ok(request)
    }

    /// Run the whole pipeline and return the report
    pub fn run(&self, settings: &Settings) -> CostResult<CostReport> {
        let request = self.to_request(settings)?;
        let lookup = self.rates.lookup(settings);
        Ok(CostCalculator::new(settings.pricing).calculate(&request, &lookup.table))
    }
}

fn parse_non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if value.is_nan() || value < 0.0 {
        return Err(format!("'{}' must be zero or greater", s));
    }
    Ok(value)
}

/// Arguments for the calc command
#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub calculation: CalculationArgs,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable report
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a CostReport,
    total: f64,
    chart: ChartSeries,
    monthly_trend: Vec<TrendPoint>,
    notice: Option<String>,
}

/// Handle the calc command
pub fn handle_calc_command(settings: &Settings, args: CalcArgs) -> CostResult<()> {
    let report = args.calculation.run(settings)?;

    if args.json {
        let json = JsonReport {
            report: &report,
            total: report.total(),
            chart: report.chart_series(),
            monthly_trend: report.monthly_trend(),
            notice: report.notice(),
        };
        let text = serde_json::to_string_pretty(&json)
            .map_err(|e| CostError::Json(format!("Failed to serialize report: {}", e)))?;
        println!("{}", text);
    } else {
        print!("{}", report.format_terminal());
    }

    Ok(())
}
