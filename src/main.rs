use anyhow::Result;
use clap::{Parser, Subcommand};

use saas_cost_cli::cli::{
    handle_calc_command, handle_export_command, handle_rates_command, CalcArgs, ExportCommands,
    RateArgs, RatesArgs,
};
use saas_cost_cli::config::{CostPaths, Settings};
use saas_cost_cli::logging;

#[derive(Parser)]
#[command(
    name = "saascost",
    version,
    about = "Terminal-based SaaS cost calculator",
    long_about = "Estimates the operating cost of a SaaS product from users, API calls, \
                  storage, emails and revenue share plus your own services. Shows the \
                  result per billing cycle in USD, EUR, INR, GBP or JPY and exports it \
                  to CSV or PDF."
)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate costs and print the report
    #[command(alias = "calculate")]
    Calc(CalcArgs),

    /// Export the cost table to a file
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current exchange rates
    Rates(RatesArgs),

    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui(RateArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tui = matches!(cli.command, Some(Commands::Tui(_)));
    logging::init_tracing(logging::default_level(cli.verbose, tui));

    // Initialize paths and settings
    let paths = CostPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Calc(args)) => handle_calc_command(&settings, args)?,
        Some(Commands::Export(cmd)) => handle_export_command(&settings, cmd)?,
        Some(Commands::Rates(args)) => handle_rates_command(&settings, args)?,
        Some(Commands::Tui(rate_args)) => {
            saas_cost_cli::tui::run_tui(&settings, &paths, rate_args.service(&settings))?;
        }
        Some(Commands::Init) => {
            println!("Initializing SaaS Cost Calculator at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
            println!("Exports directory:   {}", paths.exports_dir().display());
            println!();
            println!("Run 'saascost calc' to compute costs with the default usage.");
        }
        Some(Commands::Config) => {
            println!("SaaS Cost Calculator Configuration");
            println!("==================================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!("Initialized:       {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Default currency: {}", settings.default_currency);
            println!("  Default cycle:    {}", settings.default_cycle);
            println!("  Rate endpoint:    {}", settings.rates.endpoint);
            println!(
                "  Access key:       {}",
                if settings.rates.access_key.is_some() {
                    "set"
                } else {
                    "not set"
                }
            );
            println!("  Rate cache TTL:   {}s", settings.rates.cache_ttl_secs);
            println!("  Request timeout:  {}s", settings.rates.timeout_secs);
            println!();
            println!("Unit prices (USD):");
            println!("  Per user:         {}", settings.pricing.per_user);
            println!("  Per API call:     {}", settings.pricing.per_api_call);
            println!("  Per storage GB:   {}", settings.pricing.per_storage_gb);
            println!("  Per email:        {}", settings.pricing.per_email);
            println!("  Revenue share:    {}", settings.pricing.revenue_share);
        }
        None => {
            println!("SaaS Cost Calculator - estimate what your SaaS costs to run");
            println!();
            println!("Run 'saascost --help' for usage information.");
            println!("Run 'saascost tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}
