use thiserror::Error;

use crate::models::{BusinessProfile, ClientDetails};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Backend(String),
}

/// Where preferences and saved records live between sessions.
///
/// The core only calls this at the edges of a change (a GST toggle, a save
/// or delete button); it never looks at how records are laid out. Writes are
/// last-write-wins with a single writer.
pub trait InvoiceStore {
    // GST preference
    /// `None` when no preference has ever been saved.
    fn load_gst_preference(&self) -> Result<Option<bool>, StoreError>;
    fn save_gst_preference(
        &mut self,
        included: bool,
    ) -> Result<(), StoreError>;

    // Business and bank details
    fn load_profile(&self) -> Result<Option<BusinessProfile>, StoreError>;
    fn save_profile(
        &mut self,
        profile: &BusinessProfile,
    ) -> Result<(), StoreError>;
    fn clear_profile(&mut self) -> Result<(), StoreError>;

    // Saved clients
    /// Saved clients in the order they were first saved.
    fn list_clients(&self) -> Result<Vec<ClientDetails>, StoreError>;
    /// Inserts the client, or replaces the saved client with the same name.
    fn save_client(
        &mut self,
        client: &ClientDetails,
    ) -> Result<(), StoreError>;
    fn delete_client(
        &mut self,
        name: &str,
    ) -> Result<(), StoreError>;

    /// Looks up a saved client by name.
    fn find_client(
        &self,
        name: &str,
    ) -> Result<ClientDetails, StoreError> {
        self.list_clients()?
            .into_iter()
            .find(|client| client.name == name)
            .ok_or_else(|| StoreError::NotFound(format!("client '{name}'")))
    }
}
