// src/hero/src/inventory.rs
use std::collections::BTreeMap;

use items::{ItemKind, DEFAULT_ITEM_COUNT};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Remaining count per item kind, owned by the player
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    counts: BTreeMap<ItemKind, u32>,
}

impl Inventory {
    /// Every kind starts with `count` items
    pub fn new(count: u32) -> Self {
        Self {
            counts: ItemKind::iter().map(|kind| (kind, count)).collect(),
        }
    }

    /// Explicit per-kind counts; kinds not listed start empty
    pub fn with_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (ItemKind, u32)>,
    {
        let mut inventory = Self::new(0);
        for (kind, count) in counts {
            inventory.counts.insert(kind, count);
        }
        inventory
    }

    pub fn count(&self, kind: ItemKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Remove one item of `kind`. Returns false (and changes nothing) when none are left.
    pub fn take(&mut self, kind: ItemKind) -> bool {
        match self.counts.get_mut(&kind) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Counts in kind order (Heal, Damage Boost, Defense Boost)
    pub fn iter(&self) -> impl Iterator<Item = (ItemKind, u32)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|count| *count == 0)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_ITEM_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stock() {
        let inventory = Inventory::default();
        for kind in ItemKind::iter() {
            assert_eq!(inventory.count(kind), 3);
        }
        assert!(!inventory.is_empty());
    }

    #[test]
    fn test_take_until_empty() {
        let mut inventory = Inventory::new(1);
        assert!(inventory.take(ItemKind::Heal));
        assert_eq!(inventory.count(ItemKind::Heal), 0);
        assert!(!inventory.take(ItemKind::Heal));
        assert_eq!(inventory.count(ItemKind::Heal), 0);
        assert_eq!(inventory.count(ItemKind::DamageBoost), 1);
    }

    #[test]
    fn test_with_counts_fills_missing_kinds() {
        let inventory = Inventory::with_counts([(ItemKind::DefenseBoost, 7)]);
        assert_eq!(inventory.count(ItemKind::Heal), 0);
        assert_eq!(inventory.count(ItemKind::DamageBoost), 0);
        assert_eq!(inventory.count(ItemKind::DefenseBoost), 7);
        assert_eq!(
            inventory.iter().collect::<Vec<_>>(),
            vec![
                (ItemKind::Heal, 0),
                (ItemKind::DamageBoost, 0),
                (ItemKind::DefenseBoost, 7),
            ]
        );
    }

    #[test]
    fn test_empty_inventory() {
        assert!(Inventory::new(0).is_empty());
    }
}
