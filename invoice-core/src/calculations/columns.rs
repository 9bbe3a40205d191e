//! Which columns the invoice preview shows, based on the kinds of item present.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ItemCollection, ItemKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Description,
    Date,
    Hours,
    Rate,
    Quantity,
    UnitPrice,
    Amount,
}

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Date => "Date",
            Self::Hours => "Hours",
            Self::Rate => "Rate",
            Self::Quantity => "Quantity",
            Self::UnitPrice => "Unit Price",
            Self::Amount => "Amount",
        }
    }

    /// Money columns are right-aligned and carry a currency symbol.
    pub fn is_monetary(&self) -> bool {
        matches!(self, Self::Rate | Self::UnitPrice | Self::Amount)
    }
}

impl fmt::Display for Column {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.header())
    }
}

const GENERIC_COLUMNS: &[Column] = &[
    Column::Description,
    Column::Quantity,
    Column::UnitPrice,
    Column::Amount,
];

const HOURLY_COLUMNS: &[Column] = &[
    Column::Description,
    Column::Date,
    Column::Hours,
    Column::Rate,
    Column::Amount,
];

// Hourly rows put their rate in the Unit Price column.
const MIXED_COLUMNS: &[Column] = &[
    Column::Description,
    Column::Date,
    Column::Hours,
    Column::Quantity,
    Column::UnitPrice,
    Column::Amount,
];

/// Ordered set of preview columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnSet {
    /// Only generic items (also used for an empty invoice).
    Generic,
    /// Only hourly items.
    Hourly,
    /// At least one item of each kind.
    Mixed,
}

impl ColumnSet {
    pub fn columns(&self) -> &'static [Column] {
        match self {
            Self::Generic => GENERIC_COLUMNS,
            Self::Hourly => HOURLY_COLUMNS,
            Self::Mixed => MIXED_COLUMNS,
        }
    }

    pub fn contains(
        &self,
        column: Column,
    ) -> bool {
        self.columns().contains(&column)
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns().iter().map(Column::header).collect()
    }
}

/// Picks the preview columns for `items`.
///
/// An empty invoice gets the generic columns, matching the form's initial
/// generic row.
pub fn select_columns(items: &ItemCollection) -> ColumnSet {
    let kinds = items.kinds_present();
    let generic = kinds.contains(&ItemKind::Generic);
    let hourly = kinds.contains(&ItemKind::Hourly);

    match (generic, hourly) {
        (true, true) => ColumnSet::Mixed,
        (false, true) => ColumnSet::Hourly,
        _ => ColumnSet::Generic,
    }
}
