//! Text and JSON output for quotes and price lists.

use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;

use quote_core::QuoteBreakdown;
use quote_data::Catalog;

use crate::cli::{OutputFormat, View};

#[derive(Serialize)]
struct QuoteDocument<'a, V> {
    #[serde(skip_serializing_if = "Option::is_none")]
    quote_number: Option<&'a str>,
    empty: bool,
    #[serde(flatten)]
    quote: V,
}

/// Renders `quote` in the requested view and format.
pub fn render_quote(
    quote: &QuoteBreakdown,
    view: View,
    format: OutputFormat,
    quote_number: Option<&str>,
) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(quote, view, quote_number),
        OutputFormat::Text => Ok(render_text(quote, view, quote_number)),
    }
}

fn render_json(
    quote: &QuoteBreakdown,
    view: View,
    quote_number: Option<&str>,
) -> Result<String> {
    let json = match view {
        View::Customer => serde_json::to_string_pretty(&QuoteDocument {
            quote_number,
            empty: quote.empty,
            quote: quote.customer_view(),
        })?,
        View::Sales => serde_json::to_string_pretty(&QuoteDocument {
            quote_number,
            empty: quote.empty,
            quote: quote.sales_view(),
        })?,
    };
    Ok(json)
}

fn render_text(
    quote: &QuoteBreakdown,
    view: View,
    quote_number: Option<&str>,
) -> String {
    let mut out = String::new();

    if let Some(number) = quote_number {
        let _ = writeln!(out, "Quote No: {number}");
    }

    if quote.empty {
        out.push_str("No system selected.\n");
        return out;
    }

    let _ = match view {
        View::Customer => write!(out, "{}", quote.customer_view()),
        View::Sales => write!(out, "{}", quote.sales_view()),
    };
    out
}

/// Renders the price list as a table, optionally for one supplier.
pub fn render_catalog(
    catalog: &Catalog,
    supplier: Option<&str>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16}{:>8}{:>7}{:>8}{:>5}{:>12}{:>7}",
        "supplier", "kWp", "phase", "module", "qty", "price", "wire"
    );

    let entries: Vec<_> = match supplier {
        Some(name) => catalog.by_supplier(name).collect(),
        None => catalog.entries().iter().collect(),
    };

    for p in entries {
        let _ = writeln!(
            out,
            "{:<16}{:>8.2}{:>7}{:>8}{:>5}{:>12.2}{:>7}",
            p.supplier.as_deref().unwrap_or("-"),
            p.capacity_kw,
            p.phase,
            p.module_wattage,
            p.module_count,
            p.base_price,
            p.wire_meters.normalize(),
        );
    }
    out
}
