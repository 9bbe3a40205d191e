mod business;
mod client;
mod invoice_details;
mod invoice_item;
mod item_collection;
mod settings;
mod validation;

pub use business::{BankDetails, BusinessDetails, BusinessProfile};
pub use client::ClientDetails;
pub use invoice_details::{
    DEFAULT_PAYMENT_TERMS_DAYS, InvoiceDetails, default_due_date, suggest_invoice_number,
};
pub use invoice_item::{InvoiceItem, ItemKind, ParseItemKindError, Pricing};
pub use item_collection::ItemCollection;
pub use settings::InvoiceSettings;
pub use validation::ValidationError;
