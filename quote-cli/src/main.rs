use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{debug, info};

use quote_cli::cli::{CatalogArgs, Cli, Command, QuoteArgs};
use quote_cli::{logging, render};
use quote_core::{PricingDefaults, compute_quote, quote_number};
use quote_data::{catalog, settings};

// ─── subcommands ─────────────────────────────────────────────────────────────

fn run_quote(
    args: &QuoteArgs,
    defaults: &PricingDefaults,
) -> Result<()> {
    let catalog = args
        .catalog
        .as_deref()
        .map(|path| {
            catalog::load_from_file(path)
                .with_context(|| format!("Failed to load price list: {}", path.display()))
        })
        .transpose()?;

    let input = args.to_input(defaults, catalog.as_ref())?;
    let quote = compute_quote(&input, defaults);

    let number = args.customer.as_deref().map(|name| {
        let date = args.date.unwrap_or_else(|| Local::now().date_naive());
        quote_number(&defaults.quote_prefix, name, date)
    });
    if let Some(number) = &number {
        info!(quote_number = %number, "issued quote");
    }

    print!(
        "{}",
        render::render_quote(&quote, args.view, args.format, number.as_deref())?
    );
    Ok(())
}

fn run_catalog(args: &CatalogArgs) -> Result<()> {
    let catalog = catalog::load_from_file(&args.catalog)
        .with_context(|| format!("Failed to load price list: {}", args.catalog.display()))?;

    print!("{}", render::render_catalog(&catalog, args.supplier.as_deref()));
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_file.as_deref(), cli.verbose)?;

    let defaults = match &cli.settings {
        Some(path) => settings::load_from_file(path)
            .with_context(|| format!("Failed to load settings: {}", path.display()))?,
        None => PricingDefaults::default(),
    };
    debug!(?defaults, "pricing defaults");

    match &cli.command {
        Command::Quote(args) => run_quote(args, &defaults),
        Command::Catalog(args) => run_catalog(args),
    }
}
