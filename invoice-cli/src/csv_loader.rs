//! CSV loader for invoice line items.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter and unused
//! columns may be left out entirely. Every value is read as raw text and
//! coerced the way the invoice form coerces typed input: blank or
//! non-numeric amounts count as zero, an unreadable date is left empty.
//!
//! | Column        | Used by  | Notes                                        |
//! |---------------|----------|----------------------------------------------|
//! | `kind`        | both     | `generic` or `hourly`; blank means `generic` |
//! | `description` | both     |                                              |
//! | `date`        | hourly   | `YYYY-MM-DD`                                 |
//! | `quantity`    | generic  |                                              |
//! | `unit_price`  | generic  | a leading `$` and commas are accepted        |
//! | `hours`       | hourly   | decimals allowed, e.g. `2.5`                 |
//! | `rate`        | hourly   |                                              |
//!
//! ### Example
//!
//! ```csv
//! kind,description,date,quantity,unit_price,hours,rate
//! generic,Website licence,,1,500,,
//! hourly,Training,2026-01-12,,,2.5,80
//! ```

use std::path::Path;

use invoice_core::{InvoiceItem, ItemCollection, ItemKind};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    kind: String,
    description: String,
    date: String,
    quantity: String,
    unit_price: String,
    hours: String,
    rate: String,
}

/// Errors that can occur while loading line items from CSV.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV is structurally invalid (ragged rows, bad quoting, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `kind` cell named neither item kind. `row` is 1-based, header
    /// excluded.
    #[error("unrecognised item kind '{kind}' on row {row}")]
    InvalidKind { kind: String, row: usize },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<InvoiceItem, CsvLoadError> {
    let kind: ItemKind = row.kind.parse().map_err(|_| CsvLoadError::InvalidKind {
        kind: row.kind.clone(),
        row: row_number,
    })?;

    Ok(match kind {
        ItemKind::Generic => {
            InvoiceItem::generic_from_input(&row.description, &row.quantity, &row.unit_price)
        }
        ItemKind::Hourly => {
            InvoiceItem::hourly_from_input(&row.date, &row.description, &row.hours, &row.rate)
        }
    })
}

/// Parses CSV text and returns the items in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid.
/// * [`CsvLoadError::InvalidKind`] if a row names an unknown item kind.
pub fn load_from_str(input: &str) -> Result<ItemCollection, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect()
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<ItemCollection, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let items = load_from_str(&contents)?;
    tracing::debug!(path = %path.display(), count = items.len(), "line items loaded");
    Ok(items)
}
