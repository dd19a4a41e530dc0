//! Cart data model and merge rules
//!
//! A [`Cart`] is an ordered list of [`LineItem`]s keyed by product id.
//! Items keep insertion order; re-adding a product bumps its quantity
//! instead of duplicating it, and an item whose quantity reaches zero
//! is removed.

mod item;

pub use item::{LineItem, ProductInfo};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a merge rule did to the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A new line item was appended
    Added,
    /// An existing line item's quantity changed
    Quantity(u32),
    /// A line item dropped to zero and was removed
    Removed,
    /// No item with the given id exists
    Missing,
    /// The item is already at the largest representable quantity
    AtLimit,
}

impl Change {
    /// Short name used in logs and the activity log
    pub fn as_str(&self) -> &'static str {
        match self {
            Change::Added => "added",
            Change::Quantity(_) => "quantity",
            Change::Removed => "removed",
            Change::Missing => "missing",
            Change::AtLimit => "at_limit",
        }
    }
}

/// Entries repaired while loading a persisted cart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Repairs {
    /// Entries dropped because their quantity was zero
    pub zero_quantity: usize,
    /// Entries folded into an earlier entry with the same id
    pub duplicates: usize,
}

impl Repairs {
    pub fn is_empty(&self) -> bool {
        self.zero_quantity == 0 && self.duplicates == 0
    }
}

/// Ordered collection of line items with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a persisted cart, repairing entries that break the cart invariants
    ///
    /// Zero-quantity entries are dropped. Repeated ids are merged into the
    /// first occurrence by summing quantities, saturating at `u32::MAX`.
    pub fn from_persisted(raw: &str) -> serde_json::Result<(Self, Repairs)> {
        let entries: Vec<LineItem> = serde_json::from_str(raw)?;
        let mut repairs = Repairs::default();
        let mut items: Vec<LineItem> = Vec::with_capacity(entries.len());

        for entry in entries {
            if entry.quantity == 0 {
                repairs.zero_quantity += 1;
                continue;
            }
            match items.iter_mut().find(|i| i.id == entry.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(entry.quantity);
                    repairs.duplicates += 1;
                }
                None => items.push(entry),
            }
        }

        Ok((Self { items }, repairs))
    }

    /// Serialize for the storage backend
    pub fn to_persisted(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line item by product id
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Total number of units across all line items
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of every line total, `None` if it does not fit in a `Decimal`
    pub fn subtotal(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.line_total()?))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    /// Add a product, merging into an existing line item when present
    pub fn add(&mut self, product: ProductInfo) -> Change {
        match self.position(&product.id) {
            Some(idx) => self.bump(idx),
            None => {
                self.items.push(LineItem::from_product(product));
                Change::Added
            }
        }
    }

    /// Bump the quantity of an existing item; never creates one
    pub fn increment(&mut self, id: &str) -> Change {
        match self.position(id) {
            Some(idx) => self.bump(idx),
            None => Change::Missing,
        }
    }

    fn bump(&mut self, idx: usize) -> Change {
        let item = &mut self.items[idx];
        match item.quantity.checked_add(1) {
            Some(quantity) => {
                item.quantity = quantity;
                Change::Quantity(quantity)
            }
            None => Change::AtLimit,
        }
    }

    /// Lower the quantity of an existing item, removing it at zero
    pub fn decrement(&mut self, id: &str) -> Change {
        let Some(idx) = self.position(id) else {
            return Change::Missing;
        };

        let item = &mut self.items[idx];
        item.quantity = item.quantity.saturating_sub(1);
        if item.quantity == 0 {
            self.items.remove(idx);
            Change::Removed
        } else {
            Change::Quantity(item.quantity)
        }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        Self { items }
    }
}
