pub mod calculations;
pub mod format;
pub mod models;
pub mod preview;
pub mod session;
pub mod store;

pub use calculations::{
    Column, ColumnSet, GST_RATE, GstInclusion, Totals, compute_totals, select_columns,
};
pub use models::*;
pub use preview::{ItemTable, SummaryLine, summary_lines};
pub use session::{InvoiceDocument, InvoiceSession, SessionError};
pub use store::{InvoiceStore, MemoryStore, StoreError};
