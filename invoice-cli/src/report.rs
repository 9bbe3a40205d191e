//! Terminal rendering of the invoice preview and the issued invoice.

use std::fmt;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use invoice_core::format::format_long_date;
use invoice_core::{InvoiceDocument, ItemTable, SummaryLine};

/// Item table with money columns right-aligned.
pub fn render_items(items: &ItemTable) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(items.headers().into_iter().map(header_cell));

    for row in &items.rows {
        table.add_row(row.iter().map(Cell::new));
    }

    for (index, column) in items.columns.columns().iter().enumerate() {
        if column.is_monetary() {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }

    table.to_string()
}

/// Totals block as a borderless two-column table.
pub fn render_summary(lines: &[SummaryLine]) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::NOTHING);

    let last = lines.len().saturating_sub(1);
    for (index, line) in lines.iter().enumerate() {
        let mut label = Cell::new(line.label);
        let mut amount = Cell::new(&line.amount);
        if index == last {
            label = label.add_attribute(Attribute::Bold);
            amount = amount.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![label, amount]);
    }
    align_column(&mut table, 1, CellAlignment::Right);

    table.to_string()
}

/// Preview: items followed by totals.
pub fn render_preview(
    items: &ItemTable,
    summary: &[SummaryLine],
) -> String {
    format!("{}\n{}", render_items(items), render_summary(summary))
}

/// Full invoice: parties and dates, items, totals, then payment details.
pub fn render_document(doc: &InvoiceDocument) -> String {
    DocumentView(doc).to_string()
}

struct DocumentView<'a>(&'a InvoiceDocument);

impl fmt::Display for DocumentView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let doc = self.0;
        writeln!(f, "TAX INVOICE")?;
        writeln!(f, "{}", doc.business.name)?;
        if let Some(gst_number) = non_blank(doc.business.gst_number.as_deref()) {
            writeln!(f, "GST Number: {gst_number}")?;
        }
        writeln!(f, "{}", doc.business.address)?;
        writeln!(f, "{}", doc.business.email)?;
        if let Some(phone) = non_blank(doc.business.phone.as_deref()) {
            writeln!(f, "{phone}")?;
        }
        writeln!(f)?;

        writeln!(f, "Bill To: {}", doc.client.name)?;
        writeln!(f, "{}", doc.client.address)?;
        writeln!(f)?;

        writeln!(f, "Invoice Number: {}", doc.details.number)?;
        if let Some(date) = doc.details.date {
            writeln!(f, "Invoice Date: {}", format_long_date(date))?;
        }
        if let Some(due) = doc.due_date {
            writeln!(f, "Due Date: {}", format_long_date(due))?;
        }
        if let Some(period) = &doc.period {
            writeln!(f, "Period: {period}")?;
        }
        writeln!(f)?;

        writeln!(f, "{}", render_preview(&doc.table, &doc.summary))?;
        writeln!(f)?;

        writeln!(f, "Payment Details")?;
        writeln!(f, "Bank: {}", doc.bank.bank_name)?;
        writeln!(f, "Account Name: {}", doc.bank.account_name)?;
        write!(f, "Account Number: {}", doc.bank.account_number)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(
    table: &mut Table,
    index: usize,
    alignment: CellAlignment,
) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
