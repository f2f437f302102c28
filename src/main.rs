use anyhow::Context;
use clap::{Parser, Subcommand};
use commands::{InvestorSpec, handle_cap_table, handle_summary, parse_investor_spec};
use configuration::OutputFormat;
use session::Session;
use std::io::{self, Write};
use std::path::PathBuf;

mod commands;
mod error;
mod render;
mod session;

/// The main entry point for the SAFE fundraising calculator.
fn main() -> anyhow::Result<()> {
    // Allow SAFE_CALC__* overrides to come from a .env file.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = configuration::load_settings(cli.config.as_deref())
        .context("Failed to load settings")?;
    let _log_guard = configuration::init_tracing(&settings.logging)?;
    let format = cli.format.unwrap_or(settings.display.format);

    match cli.command {
        Commands::Summary(args) => {
            let out = handle_summary(&args.investors, &settings.display, format)?;
            println!("{out}");
        }
        Commands::CapTable(args) => {
            let out = handle_cap_table(&args.investors, &settings.display, format)?;
            println!("{out}");
        }
        Commands::Session => {
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            Session::new(&settings.display, format).run(stdin.lock(), &mut stdout)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Calculate fundraising totals and cap tables for multiple investors.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file to read (defaults to ./safe-calc.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format; overrides `display.format` from the settings.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Total the investment amounts, split into pre-money and post-money.
    Summary(InvestorArgs),
    /// Compute ownership percentages and share counts, plus the company remainder.
    CapTable(InvestorArgs),
    /// Edit a roster interactively and calculate on demand.
    Session,
}

#[derive(Parser)]
struct InvestorArgs {
    /// An investor as `name,amount[,type[,equity]]`, where type is `pre` or `post`.
    /// Repeat for each investor; order is preserved.
    #[arg(long = "investor", short = 'i', value_parser = parse_investor_spec)]
    investors: Vec<InvestorSpec>,
}
