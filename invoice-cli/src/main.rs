use std::path::PathBuf;

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use tracing::{debug, info, warn};

use invoice_cli::{config, csv_loader, logging, report};
use invoice_core::{
    GstInclusion, InvoiceSession, InvoiceStore, MemoryStore, suggest_invoice_number,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// New Zealand tax invoice generator.
///
/// Loads line items from CSV, works out the subtotal, GST and total, and
/// prints either a preview or, when the config carries the business, client
/// and invoice records, the full invoice.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// CSV file of line items. Without it the invoice holds one blank item.
    #[arg(long)]
    items: Option<PathBuf>,

    /// TOML config with settings and invoice records.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show prices exclusive of GST.
    #[arg(long)]
    exclude_gst: bool,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `invoice_core=trace`. `RUST_LOG` wins.
    #[arg(long)]
    log_level: Option<String>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref());
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let app_config = match &cli.config {
        Some(path) => config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => config::AppConfig::default(),
    };

    let mut store = MemoryStore::new();
    if let Some(included) = app_config.include_gst {
        store.save_gst_preference(included)?;
    }
    let mut session = InvoiceSession::with_settings(store, app_config.settings.clone());

    if cli.exclude_gst {
        session.set_gst_inclusion(GstInclusion::Excluded)?;
    }

    if let Some(path) = &cli.items {
        let items = csv_loader::load_from_file(path)
            .with_context(|| format!("loading items {}", path.display()))?;
        if items.is_empty() {
            warn!(path = %path.display(), "items file has no rows");
        }
        session.items_mut().clear();
        for item in items.iter().cloned() {
            session.add_item(item);
        }
    }
    debug!(
        items = session.items().len(),
        gst = ?session.gst_inclusion(),
        columns = ?session.columns(),
        "session ready"
    );

    if app_config.has_records() {
        let profile = app_config.profile().unwrap_or_default();
        let client = app_config.client.clone().unwrap_or_default();
        let mut details = app_config.invoice.clone().unwrap_or_default();
        if details.number.trim().is_empty() {
            if let Some(date) = details.date {
                details.number =
                    suggest_invoice_number(&session.settings().invoice_prefix, date.year(), 1);
                info!(number = %details.number, "no invoice number configured; using suggestion");
            }
        }

        let document = session
            .generate(&profile, &client, &details)
            .context("cannot generate invoice")?;
        println!("{}", report::render_document(&document));
    } else {
        info!("no invoice records configured; printing preview");
        println!(
            "{}",
            report::render_preview(&session.item_table(), &session.summary_lines())
        );
    }

    Ok(())
}
