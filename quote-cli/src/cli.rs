//! Command-line definition for `solar-quote` and its translation into a
//! [`QuoteInput`].

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tracing::debug;

use quote_core::calculations::custom_product;
use quote_core::{
    ExtraCostKind, ExtraCostToggles, ExtraPanels, ExtraWire, IncentiveConfig, IncentiveMode,
    Location, MarginSource, PricingDefaults, PricingMode, Product, QuoteInput, RateConfig,
    StructureSurcharge,
};
use quote_data::Catalog;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Prices rooftop solar systems and prints quotations.
#[derive(Debug, Parser)]
#[command(name = "solar-quote", version, about, long_about = None)]
pub struct Cli {
    /// Pricing settings file (TOML). Built-in defaults apply when omitted.
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log computation steps. `RUST_LOG` takes precedence when set.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Price one system and print the quotation.
    Quote(QuoteArgs),
    /// List the packages in a price list.
    Catalog(CatalogArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// What the customer sees: no incentive or retained margin.
    Customer,
    /// Every figure, including the incentive split.
    Sales,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Price list CSV.
    #[arg(long)]
    pub catalog: PathBuf,

    /// Only list this supplier's packages.
    #[arg(long)]
    pub supplier: Option<String>,
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    // --- product ---
    /// Price list CSV to select the package from.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Supplier name as written in the price list.
    #[arg(long, requires = "catalog")]
    pub supplier: Option<String>,

    /// System capacity in kWp. For a listed package this must match the
    /// price list; for a custom system it is rounded up to whole modules.
    #[arg(long)]
    pub kwp: Decimal,

    #[arg(long, default_value_t = 1, value_parser = parse_phase)]
    pub phase: u8,

    /// Module wattage for a custom system.
    #[arg(long, conflicts_with = "supplier")]
    pub module_wattage: Option<u32>,

    /// System price. Required for a custom system; overrides the listed
    /// price for a package.
    #[arg(long)]
    pub price: Option<Decimal>,

    // --- tax ---
    /// `inclusive` reverses tax out of the price; `exclusive-split` adds it
    /// in two brackets.
    #[arg(long, default_value = "inclusive", value_parser = parse_mode)]
    pub mode: PricingMode,

    /// Composite rate for inclusive pricing, in percent.
    #[arg(long)]
    pub inclusive_rate: Option<Decimal>,

    /// Share of the subtotal taxed at `--rate-a`, in percent.
    #[arg(long)]
    pub share: Option<Decimal>,

    #[arg(long)]
    pub rate_a: Option<Decimal>,

    #[arg(long)]
    pub rate_b: Option<Decimal>,

    // --- extra costs ---
    /// Add a raised structure at RATE per watt.
    #[arg(long, value_name = "RATE", num_args = 0..=1, default_missing_value = "5")]
    pub structure: Option<Decimal>,

    /// Add COUNT panels beyond the package.
    #[arg(long, value_name = "COUNT")]
    pub extra_panels: Option<Decimal>,

    #[arg(long, default_value = "15000")]
    pub panel_price: Decimal,

    /// Add METERS of cable beyond the package allowance.
    #[arg(long, value_name = "METERS")]
    pub extra_wire: Option<Decimal>,

    #[arg(long, default_value = "50")]
    pub wire_rate: Decimal,

    /// Site is outside the base area. An optional FEE replaces the listed
    /// logistics fee.
    #[arg(long, value_name = "FEE")]
    pub out_of_area: Option<Option<Decimal>>,

    // --- margin and incentive ---
    /// Markup added to the system price and treated as margin.
    #[arg(long)]
    pub markup: Option<Decimal>,

    /// Treat one extra-cost line as the margin instead of a markup.
    #[arg(long, value_parser = parse_extra_cost_kind, conflicts_with = "markup")]
    pub margin_from: Option<ExtraCostKind>,

    /// Salesperson incentive as a percentage of the margin.
    #[arg(long)]
    pub incentive_percent: Option<Decimal>,

    /// Salesperson incentive as a fixed amount, capped at the margin.
    #[arg(long, conflicts_with = "incentive_percent")]
    pub incentive_fixed: Option<Decimal>,

    // --- totals ---
    #[arg(long, default_value = "0")]
    pub discount: Decimal,

    #[arg(long)]
    pub central_subsidy: Option<Decimal>,

    #[arg(long)]
    pub state_subsidy: Option<Decimal>,

    // --- output ---
    #[arg(long, value_enum, default_value_t = View::Customer)]
    pub view: View,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Customer name; prints a quote number built from its initials.
    #[arg(long)]
    pub customer: Option<String>,

    /// Quote date (YYYY-MM-DD). Defaults to today.
    #[arg(long, requires = "customer")]
    pub date: Option<NaiveDate>,
}

fn parse_phase(s: &str) -> Result<u8, String> {
    match s.trim() {
        "1" => Ok(1),
        "3" => Ok(3),
        other => Err(format!("phase must be 1 or 3, got '{other}'")),
    }
}

fn parse_mode(s: &str) -> Result<PricingMode, String> {
    PricingMode::parse(s)
        .ok_or_else(|| format!("unknown mode '{s}': expected inclusive or exclusive-split"))
}

fn parse_extra_cost_kind(s: &str) -> Result<ExtraCostKind, String> {
    ExtraCostKind::parse(s).ok_or_else(|| {
        format!("unknown extra cost '{s}': expected structure, panels, wire or logistics")
    })
}

// ─── input assembly ──────────────────────────────────────────────────────────

impl QuoteArgs {
    /// Builds the engine input from the parsed flags.
    ///
    /// Rates not given on the command line come from `defaults`. Rate flags
    /// that belong to the other pricing mode are rejected.
    pub fn to_input(
        &self,
        defaults: &PricingDefaults,
        catalog: Option<&Catalog>,
    ) -> Result<QuoteInput> {
        let product = self.product(catalog)?;

        let mut input = QuoteInput::new(Some(product), self.rates(defaults)?);
        if self.supplier.is_some() {
            input.price_override = self.price;
        }
        input.extras = self.extras();
        input.incentive = self.incentive();
        input.discount = self.discount;
        input.central_subsidy = self.central_subsidy;
        input.state_subsidy = self.state_subsidy;

        debug!(?input, "built quote input");
        Ok(input)
    }

    fn product(
        &self,
        catalog: Option<&Catalog>,
    ) -> Result<Product> {
        if let Some(supplier) = &self.supplier {
            let Some(catalog) = catalog else {
                bail!("--supplier needs a price list loaded with --catalog");
            };
            return catalog
                .find(supplier, self.kwp, self.phase)
                .cloned()
                .with_context(|| {
                    format!(
                        "no {} package of {} kWp ({}-phase) in the price list",
                        supplier, self.kwp, self.phase
                    )
                });
        }

        let wattage = self
            .module_wattage
            .context("a custom system needs --module-wattage (or pick a package with --supplier)")?;
        let price = self.price.context("a custom system needs --price")?;

        Ok(custom_product(self.kwp, wattage, self.phase, price))
    }

    fn rates(
        &self,
        defaults: &PricingDefaults,
    ) -> Result<RateConfig> {
        match self.mode {
            PricingMode::Inclusive => {
                let split_flags = [
                    ("--share", self.share),
                    ("--rate-a", self.rate_a),
                    ("--rate-b", self.rate_b),
                ];
                if let Some((flag, _)) = split_flags.iter().find(|(_, value)| value.is_some()) {
                    bail!("{flag} only applies with --mode exclusive-split");
                }
                Ok(RateConfig::Composite {
                    rate_percent: self.inclusive_rate.unwrap_or(defaults.composite_rate_percent),
                })
            }
            PricingMode::ExclusiveSplit => {
                if self.inclusive_rate.is_some() {
                    bail!("--inclusive-rate only applies with --mode inclusive");
                }
                Ok(RateConfig::Split {
                    share_percent: self.share.unwrap_or(defaults.split_rate.share_percent),
                    rate_a_percent: self.rate_a.unwrap_or(defaults.split_rate.rate_a_percent),
                    rate_b_percent: self.rate_b.unwrap_or(defaults.split_rate.rate_b_percent),
                })
            }
        }
    }

    fn extras(&self) -> ExtraCostToggles {
        ExtraCostToggles {
            structure: self.structure.map(|rate_per_watt| StructureSurcharge { rate_per_watt }),
            extra_panels: self.extra_panels.map(|count| ExtraPanels {
                count,
                price_per_panel: self.panel_price,
            }),
            extra_wire: self.extra_wire.map(|length_meters| ExtraWire {
                length_meters,
                rate_per_meter: self.wire_rate,
            }),
            location: match self.out_of_area {
                Some(fee) => Location::OutOfArea { fee },
                None => Location::BaseArea,
            },
        }
    }

    fn incentive(&self) -> IncentiveConfig {
        let mode = match (self.incentive_fixed, self.incentive_percent) {
            (Some(amount), _) => IncentiveMode::Fixed(amount),
            (None, Some(percent)) => IncentiveMode::Percent(percent),
            (None, None) => IncentiveMode::Percent(Decimal::ZERO),
        };
        let margin = match self.margin_from {
            Some(kind) => MarginSource::ExtraCost(kind),
            None => MarginSource::Markup(self.markup.unwrap_or(Decimal::ZERO)),
        };

        IncentiveConfig { mode, margin }
    }
}
