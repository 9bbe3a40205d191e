use tracing::debug;

use super::repository::{InvoiceStore, StoreError};
use crate::models::{BusinessProfile, ClientDetails};

/// [`InvoiceStore`] that keeps everything in memory for the life of the
/// process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    gst_preference: Option<bool>,
    profile: Option<BusinessProfile>,
    clients: Vec<ClientDetails>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a GST preference, as after a reload.
    pub fn with_gst_preference(included: bool) -> Self {
        Self {
            gst_preference: Some(included),
            ..Self::default()
        }
    }
}

impl InvoiceStore for MemoryStore {
    fn load_gst_preference(&self) -> Result<Option<bool>, StoreError> {
        Ok(self.gst_preference)
    }

    fn save_gst_preference(
        &mut self,
        included: bool,
    ) -> Result<(), StoreError> {
        self.gst_preference = Some(included);
        Ok(())
    }

    fn load_profile(&self) -> Result<Option<BusinessProfile>, StoreError> {
        Ok(self.profile.clone())
    }

    fn save_profile(
        &mut self,
        profile: &BusinessProfile,
    ) -> Result<(), StoreError> {
        self.profile = Some(profile.clone());
        Ok(())
    }

    fn clear_profile(&mut self) -> Result<(), StoreError> {
        self.profile = None;
        Ok(())
    }

    fn list_clients(&self) -> Result<Vec<ClientDetails>, StoreError> {
        Ok(self.clients.clone())
    }

    fn save_client(
        &mut self,
        client: &ClientDetails,
    ) -> Result<(), StoreError> {
        match self.clients.iter_mut().find(|c| c.name == client.name) {
            Some(existing) => {
                debug!(name = %client.name, "replacing saved client");
                *existing = client.clone();
            }
            None => self.clients.push(client.clone()),
        }
        Ok(())
    }

    fn delete_client(
        &mut self,
        name: &str,
    ) -> Result<(), StoreError> {
        let before = self.clients.len();
        self.clients.retain(|c| c.name != name);
        if self.clients.len() == before {
            return Err(StoreError::NotFound(format!("client '{name}'")));
        }
        Ok(())
    }
}
