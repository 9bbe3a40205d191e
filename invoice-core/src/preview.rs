//! Text model of the invoice preview: the item table and the totals lines.
//! Markup and printing belong to whoever renders these.

use serde::Serialize;

use crate::calculations::{Column, ColumnSet, GstInclusion, Totals, select_columns};
use crate::format::{NOT_APPLICABLE, format_currency_with, format_long_date, format_quantity};
use crate::models::{InvoiceItem, InvoiceSettings, ItemCollection, Pricing};

/// Item rows laid out under the selected columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemTable {
    pub columns: ColumnSet,
    pub rows: Vec<Vec<String>>,
}

impl ItemTable {
    pub fn build(
        items: &ItemCollection,
        settings: &InvoiceSettings,
    ) -> Self {
        let columns = select_columns(items);
        let rows = items
            .iter()
            .map(|item| {
                columns
                    .columns()
                    .iter()
                    .map(|&column| cell(item, column, columns, &settings.currency_symbol))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.headers()
    }
}

fn cell(
    item: &InvoiceItem,
    column: Column,
    set: ColumnSet,
    symbol: &str,
) -> String {
    let money = |value| format_currency_with(symbol, value);
    match (column, item.pricing()) {
        (Column::Description, _) => item.description().to_string(),
        (Column::Amount, _) => money(item.amount()),

        (Column::Quantity, Pricing::Generic { quantity, .. }) => format_quantity(*quantity),
        (Column::UnitPrice, Pricing::Generic { unit_price, .. }) => money(*unit_price),

        (Column::Date, Pricing::Hourly { date, .. }) => {
            date.map(format_long_date).unwrap_or_default()
        }
        (Column::Hours, Pricing::Hourly { hours, .. }) => format_quantity(*hours),
        (Column::Rate, Pricing::Hourly { rate, .. }) => money(*rate),
        (Column::UnitPrice, Pricing::Hourly { rate, .. }) if set == ColumnSet::Mixed => {
            money(*rate)
        }

        _ => NOT_APPLICABLE.to_string(),
    }
}

/// One line of the totals block, e.g. `GST (15%)` / `$25.50`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub amount: String,
}

/// The totals block. With GST excluded the GST line is dropped and the
/// subtotal and total captions lose their GST suffix.
pub fn summary_lines(
    totals: &Totals,
    gst: GstInclusion,
    settings: &InvoiceSettings,
) -> Vec<SummaryLine> {
    let money = |value| format_currency_with(&settings.currency_symbol, value);
    match gst {
        GstInclusion::Included => vec![
            SummaryLine {
                label: "Subtotal (excl. GST)",
                amount: money(totals.subtotal),
            },
            SummaryLine {
                label: "GST (15%)",
                amount: money(totals.gst),
            },
            SummaryLine {
                label: "Total (incl. GST)",
                amount: money(totals.total),
            },
        ],
        GstInclusion::Excluded => vec![
            SummaryLine {
                label: "Subtotal",
                amount: money(totals.subtotal),
            },
            SummaryLine {
                label: "Total",
                amount: money(totals.total),
            },
        ],
    }
}
