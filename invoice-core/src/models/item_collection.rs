use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::invoice_item::{InvoiceItem, ItemKind};

/// Ordered list of invoice items. Insertion order is display and print order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCollection {
    items: Vec<InvoiceItem>,
}

impl ItemCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        item: InvoiceItem,
    ) {
        let kind = item.kind();
        self.items.push(item);
        debug!(count = self.items.len(), %kind, "item added");
    }

    /// Removes the item at `index`, keeping the order of the rest.
    /// Returns `None` when `index` is out of range.
    pub fn remove(
        &mut self,
        index: usize,
    ) -> Option<InvoiceItem> {
        if index >= self.items.len() {
            debug!(index, count = self.items.len(), "remove ignored; no such item");
            return None;
        }
        let removed = self.items.remove(index);
        debug!(index, count = self.items.len(), "item removed");
        Some(removed)
    }

    /// Switches the kind of the item at `index` in place.
    /// Returns `false` when `index` is out of range.
    pub fn switch_kind(
        &mut self,
        index: usize,
        kind: ItemKind,
    ) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.switch_kind(kind);
                debug!(index, %kind, "item kind switched");
                true
            }
            None => false,
        }
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&InvoiceItem> {
        self.items.get(index)
    }

    pub fn get_mut(
        &mut self,
        index: usize,
    ) -> Option<&mut InvoiceItem> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InvoiceItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The distinct item kinds present, in [`ItemKind`] order.
    pub fn kinds_present(&self) -> BTreeSet<ItemKind> {
        self.items.iter().map(InvoiceItem::kind).collect()
    }
}

impl FromIterator<InvoiceItem> for ItemCollection {
    fn from_iter<T: IntoIterator<Item = InvoiceItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ItemCollection {
    type Item = &'a InvoiceItem;
    type IntoIter = std::slice::Iter<'a, InvoiceItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
