//! The cart mapping and its mutation rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::key::CartKey;

/// Quantity per line item. Quantities are always ≥ 1: any mutation that
/// would drive one to zero or below removes the key instead. A `BTreeMap`
/// keeps iteration — and therefore the rendered panel — deterministic.
///
/// Serializes as the bare JSON object of key string → quantity that the
/// storefront has always persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: BTreeMap<CartKey, u32>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `key`, creating the entry if absent.
    /// Adding zero units is a no-op.
    pub fn add(&mut self, key: CartKey, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.items.entry(key).or_insert(0) += quantity;
    }

    /// Applies a signed quantity delta. A result of zero or below deletes
    /// the key; a delta against an absent key starts from zero.
    pub fn change_quantity(&mut self, key: &CartKey, delta: i64) {
        let next = i64::from(self.quantity(key)) + delta;
        if next <= 0 {
            self.items.remove(key);
        } else {
            self.items
                .insert(key.clone(), u32::try_from(next).unwrap_or(u32::MAX));
        }
    }

    /// Deletes the key unconditionally.
    pub fn remove(&mut self, key: &CartKey) {
        self.items.remove(key);
    }

    /// Empties the mapping. Idempotent.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn quantity(&self, key: &CartKey) -> u32 {
        self.items.get(key).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, key: &CartKey) -> bool {
        self.items.contains_key(key)
    }

    /// Sum of all quantities; the badge is shown only when this is > 0.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.values().map(|&q| u64::from(q)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CartKey, u32)> {
        self.items.iter().map(|(key, &quantity)| (key, quantity))
    }

    /// Drops entries a hand-edited or legacy store file left at zero.
    pub(crate) fn prune_zero_quantities(&mut self) {
        self.items.retain(|_, quantity| *quantity > 0);
    }
}
