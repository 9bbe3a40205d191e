//! The invoice being edited.
//!
//! [`InvoiceSession`] ties the item list and the GST setting to the store that
//! remembers the GST preference and saved records. Everything shown to the
//! user (totals, columns, table, totals block) is derived from the current
//! items and GST setting on request.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::calculations::{ColumnSet, GstInclusion, Totals, compute_totals, select_columns};
use crate::models::{
    BankDetails, BusinessDetails, BusinessProfile, ClientDetails, InvoiceDetails, InvoiceItem,
    InvoiceSettings, ItemCollection, ItemKind, ValidationError,
};
use crate::preview::{ItemTable, SummaryLine, summary_lines};
use crate::store::{InvoiceStore, StoreError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("{}", join_errors(.0))]
    Invalid(Vec<ValidationError>),

    #[error(transparent)]
    Store(#[from] StoreError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Everything the renderer needs to lay out a finished invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceDocument {
    pub business: BusinessDetails,
    pub bank: BankDetails,
    pub client: ClientDetails,
    pub details: InvoiceDetails,
    pub due_date: Option<NaiveDate>,
    pub period: Option<String>,
    pub table: ItemTable,
    pub gst: GstInclusion,
    pub totals: Totals,
    pub summary: Vec<SummaryLine>,
}

pub struct InvoiceSession<S> {
    store: S,
    settings: InvoiceSettings,
    items: ItemCollection,
    gst: GstInclusion,
}

impl<S: InvoiceStore> InvoiceSession<S> {
    /// Opens a session with default settings.
    pub fn new(store: S) -> Self {
        Self::with_settings(store, InvoiceSettings::default())
    }

    /// Opens a session, restoring the saved GST preference.
    ///
    /// A missing or unreadable preference falls back to GST included. The
    /// item list starts with one blank generic row.
    pub fn with_settings(
        store: S,
        settings: InvoiceSettings,
    ) -> Self {
        let gst = match store.load_gst_preference() {
            Ok(Some(included)) => GstInclusion::from(included),
            Ok(None) => GstInclusion::default(),
            Err(error) => {
                warn!(%error, "could not load GST preference; including GST");
                GstInclusion::default()
            }
        };
        debug!(?gst, "invoice session opened");

        Self {
            store,
            settings,
            items: std::iter::once(InvoiceItem::default()).collect(),
            gst,
        }
    }

    pub fn settings(&self) -> &InvoiceSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ── items ───────────────────────────────────────────────────────────

    pub fn items(&self) -> &ItemCollection {
        &self.items
    }

    /// Direct access for field edits. Totals are derived, so nothing needs
    /// to be notified.
    pub fn items_mut(&mut self) -> &mut ItemCollection {
        &mut self.items
    }

    pub fn add_item(
        &mut self,
        item: InvoiceItem,
    ) {
        self.items.push(item);
    }

    pub fn remove_item(
        &mut self,
        index: usize,
    ) -> Option<InvoiceItem> {
        self.items.remove(index)
    }

    pub fn switch_item_kind(
        &mut self,
        index: usize,
        kind: ItemKind,
    ) -> bool {
        self.items.switch_kind(index, kind)
    }

    /// Clears the items back to one blank row. Saved records and the GST
    /// preference are left alone.
    pub fn reset(&mut self) {
        self.items.clear();
        self.items.push(InvoiceItem::default());
        info!("invoice form reset");
    }

    // ── GST ─────────────────────────────────────────────────────────────

    pub fn gst_inclusion(&self) -> GstInclusion {
        self.gst
    }

    /// Changes the GST setting and saves it straight away.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the preference could not be saved. The
    /// session keeps the new setting either way.
    pub fn set_gst_inclusion(
        &mut self,
        gst: GstInclusion,
    ) -> Result<(), StoreError> {
        if self.gst != gst {
            debug!(from = ?self.gst, to = ?gst, "GST inclusion changed");
        }
        self.gst = gst;
        self.store.save_gst_preference(gst.is_included()).map_err(|error| {
            warn!(%error, "could not save GST preference");
            error
        })
    }

    /// Flips the GST setting and saves it. Returns the new setting.
    pub fn toggle_gst(&mut self) -> Result<GstInclusion, StoreError> {
        let next = self.gst.toggled();
        self.set_gst_inclusion(next)?;
        Ok(next)
    }

    // ── derived views ───────────────────────────────────────────────────

    pub fn totals(&self) -> Totals {
        compute_totals(&self.items, self.gst)
    }

    pub fn columns(&self) -> ColumnSet {
        select_columns(&self.items)
    }

    pub fn item_table(&self) -> ItemTable {
        ItemTable::build(&self.items, &self.settings)
    }

    pub fn summary_lines(&self) -> Vec<SummaryLine> {
        summary_lines(&self.totals(), self.gst, &self.settings)
    }

    // ── saved records ───────────────────────────────────────────────────

    /// Saves business and bank details after checking required fields.
    pub fn save_profile(
        &mut self,
        profile: &BusinessProfile,
    ) -> Result<(), SessionError> {
        profile.validate().map_err(SessionError::Invalid)?;
        self.store.save_profile(profile)?;
        info!(business = %profile.business.name, "business details saved");
        Ok(())
    }

    pub fn load_profile(&self) -> Result<Option<BusinessProfile>, StoreError> {
        self.store.load_profile()
    }

    pub fn clear_profile(&mut self) -> Result<(), StoreError> {
        self.store.clear_profile()
    }

    /// Adds the client to the saved list after checking required fields.
    pub fn save_client(
        &mut self,
        client: &ClientDetails,
    ) -> Result<(), SessionError> {
        client.validate().map_err(SessionError::Invalid)?;
        self.store.save_client(client)?;
        info!(client = %client.name, "client saved");
        Ok(())
    }

    pub fn saved_clients(&self) -> Result<Vec<ClientDetails>, StoreError> {
        self.store.list_clients()
    }

    pub fn select_client(
        &self,
        name: &str,
    ) -> Result<ClientDetails, StoreError> {
        self.store.find_client(name)
    }

    pub fn delete_client(
        &mut self,
        name: &str,
    ) -> Result<(), StoreError> {
        self.store.delete_client(name)
    }

    // ── generation ──────────────────────────────────────────────────────

    /// Builds the finished invoice.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Invalid`] listing every missing required field
    /// across the business, bank, client and invoice details.
    pub fn generate(
        &self,
        profile: &BusinessProfile,
        client: &ClientDetails,
        details: &InvoiceDetails,
    ) -> Result<InvoiceDocument, SessionError> {
        let mut errors = Vec::new();
        profile.collect_errors(&mut errors);
        client.collect_errors(&mut errors);
        details.collect_errors(&mut errors);
        if !errors.is_empty() {
            warn!(missing = errors.len(), "invoice not generated; required fields missing");
            return Err(SessionError::Invalid(errors));
        }

        let totals = self.totals();
        info!(number = %details.number, total = %totals.total, "invoice generated");

        Ok(InvoiceDocument {
            business: profile.business.clone(),
            bank: profile.bank.clone(),
            client: client.clone(),
            details: details.clone(),
            due_date: details.effective_due_date(self.settings.payment_terms_days),
            period: details.period_label(),
            table: self.item_table(),
            gst: self.gst,
            totals,
            summary: summary_lines(&totals, self.gst, &self.settings),
        })
    }
}
