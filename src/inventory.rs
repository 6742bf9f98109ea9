//! Inventory and equip state management
//!
//! Owns the owned-item set and the one-item-per-slot equip mapping through
//! the [`ProfileStore`] boundary. Precondition violations (equipping an
//! unowned item, equipping into the wrong slot) are silent no-ops: the
//! presentation layer is expected to offer only valid choices, so the
//! engine rejects without error and without mutating anything.

use crate::catalog::{self, CatalogItem};
use crate::models::Slot;
use crate::store::{ProfileStore, StoreError};

/// Result of an equip attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipOutcome {
    /// The item is now the slot's single equipped item.
    Equipped,
    /// Rejected: the item is not in the catalog. No state change.
    UnknownItem,
    /// Rejected: the item is not owned. No state change.
    NotOwned,
    /// Rejected: the item's catalog slot differs from the target. No state change.
    WrongSlot,
}

/// Equip an owned item into its slot, replacing any current occupant.
///
/// Preconditions: the item exists in the catalog, is owned, and its
/// catalog slot equals `slot`. On success the slot's previous mapping is
/// atomically replaced (delete-then-insert at the store), leaving exactly
/// one equipped item for the slot.
pub fn equip(
    store: &mut impl ProfileStore,
    key: &str,
    slot: Slot,
) -> Result<EquipOutcome, StoreError> {
    let item = match catalog::find(key) {
        Some(item) => item,
        None => return Ok(EquipOutcome::UnknownItem),
    };
    if item.slot != slot {
        return Ok(EquipOutcome::WrongSlot);
    }
    if !store.owned_keys()?.contains(key) {
        return Ok(EquipOutcome::NotOwned);
    }
    store.insert_equipped(slot, key)?;
    Ok(EquipOutcome::Equipped)
}

/// Remove the equip mapping for a slot. No-op when nothing is equipped;
/// returns `true` when a mapping was removed.
pub fn unequip(store: &mut impl ProfileStore, slot: Slot) -> Result<bool, StoreError> {
    store.delete_equipped(slot)
}

/// Grant every default-unlock catalog item not yet owned.
///
/// Idempotent: runs on each load, and the insert-if-not-exists store
/// contract keeps the owned set free of duplicates. Returns the items
/// newly granted by this call.
pub fn grant_default_items(
    store: &mut impl ProfileStore,
) -> Result<Vec<&'static CatalogItem>, StoreError> {
    let mut granted = Vec::new();
    for item in catalog::default_items() {
        if store.insert_owned(item.key)? {
            granted.push(item);
        }
    }
    Ok(granted)
}

/// The catalog item currently equipped in a slot.
///
/// A mapping whose key no longer resolves in the catalog is treated as
/// nothing equipped - never an error.
pub fn equipped_for_slot(
    store: &impl ProfileStore,
    slot: Slot,
) -> Result<Option<&'static CatalogItem>, StoreError> {
    let equipped = store.equipped()?;
    Ok(equipped.get(&slot).and_then(|key| catalog::find(key)))
}

/// Every resolvable equipped overlay, in stable slot order.
///
/// This is the overlay set handed to the compositor (which skips the pet)
/// and to the companion extractor (which takes only the pet).
pub fn equipped_overlays(
    store: &impl ProfileStore,
) -> Result<Vec<&'static CatalogItem>, StoreError> {
    let equipped = store.equipped()?;
    let mut overlays = Vec::new();
    for slot in Slot::ALL {
        if let Some(item) = equipped.get(&slot).and_then(|key| catalog::find(key)) {
            overlays.push(item);
        }
    }
    Ok(overlays)
}

/// Number of resolvable equipped items, feeding the glow calculator.
pub fn equipped_count(store: &impl ProfileStore) -> Result<usize, StoreError> {
    Ok(equipped_overlays(store)?.len())
}

/// Owned catalog items bound to a slot, in catalog order.
pub fn owned_items_for_slot(
    store: &impl ProfileStore,
    slot: Slot,
) -> Result<Vec<&'static CatalogItem>, StoreError> {
    let owned = store.owned_keys()?;
    Ok(catalog::items_for_slot(slot)
        .filter(|item| owned.contains(item.key))
        .collect())
}

/// Catalog items of a slot the user does not own yet, in catalog order.
pub fn locked_items_for_slot(
    store: &impl ProfileStore,
    slot: Slot,
) -> Result<Vec<&'static CatalogItem>, StoreError> {
    let owned = store.owned_keys()?;
    Ok(catalog::items_for_slot(slot)
        .filter(|item| !owned.contains(item.key))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn store_owning(keys: &[&str]) -> MemoryStore {
        let mut store = MemoryStore::new();
        for key in keys {
            store.insert_owned(key).unwrap();
        }
        store
    }

    #[test]
    fn test_equip_owned_item() {
        let mut store = store_owning(&["wizard_hat"]);
        let outcome = equip(&mut store, "wizard_hat", Slot::Head).unwrap();
        assert_eq!(outcome, EquipOutcome::Equipped);
        assert_eq!(
            equipped_for_slot(&store, Slot::Head).unwrap().map(|i| i.key),
            Some("wizard_hat")
        );
    }

    #[test]
    fn test_equip_unowned_is_silent_noop() {
        let mut store = MemoryStore::new();
        let before = store.clone();
        let outcome = equip(&mut store, "wizard_hat", Slot::Head).unwrap();
        assert_eq!(outcome, EquipOutcome::NotOwned);
        assert_eq!(store, before);
    }

    #[test]
    fn test_equip_wrong_slot_is_silent_noop() {
        let mut store = store_owning(&["wizard_hat"]);
        let before = store.clone();
        let outcome = equip(&mut store, "wizard_hat", Slot::Face).unwrap();
        assert_eq!(outcome, EquipOutcome::WrongSlot);
        assert_eq!(store, before);
    }

    #[test]
    fn test_equip_unknown_item_is_silent_noop() {
        let mut store = MemoryStore::new();
        let outcome = equip(&mut store, "no_such_item", Slot::Head).unwrap();
        assert_eq!(outcome, EquipOutcome::UnknownItem);
    }

    #[test]
    fn test_last_equip_wins_per_slot() {
        let mut store = store_owning(&["leaf_cap", "wizard_hat", "iron_helm"]);
        for key in ["leaf_cap", "wizard_hat", "iron_helm"] {
            equip(&mut store, key, Slot::Head).unwrap();
        }
        let equipped = store.equipped().unwrap();
        assert_eq!(equipped.len(), 1);
        assert_eq!(
            equipped_for_slot(&store, Slot::Head).unwrap().map(|i| i.key),
            Some("iron_helm")
        );
    }

    #[test]
    fn test_unequip() {
        let mut store = store_owning(&["wizard_hat"]);
        equip(&mut store, "wizard_hat", Slot::Head).unwrap();
        assert!(unequip(&mut store, Slot::Head).unwrap());
        assert!(!unequip(&mut store, Slot::Head).unwrap());
        assert_eq!(equipped_for_slot(&store, Slot::Head).unwrap(), None);
    }

    #[test]
    fn test_grant_default_items_is_idempotent() {
        let mut store = MemoryStore::new();
        let first = grant_default_items(&mut store).unwrap();
        assert!(!first.is_empty());
        let second = grant_default_items(&mut store).unwrap();
        assert!(second.is_empty());
        assert_eq!(store.owned_keys().unwrap().len(), first.len());
    }

    #[test]
    fn test_stale_equip_record_reads_as_empty() {
        let mut store = MemoryStore::new();
        // A record left behind by an old catalog version.
        store.insert_equipped(Slot::Head, "retired_item").unwrap();
        assert_eq!(equipped_for_slot(&store, Slot::Head).unwrap(), None);
        assert_eq!(equipped_count(&store).unwrap(), 0);
    }

    #[test]
    fn test_owned_and_locked_partition_slot() {
        let mut store = store_owning(&["leaf_cap"]);
        grant_default_items(&mut store).unwrap();
        let owned = owned_items_for_slot(&store, Slot::Head).unwrap();
        let locked = locked_items_for_slot(&store, Slot::Head).unwrap();
        let total = catalog::items_for_slot(Slot::Head).count();
        assert_eq!(owned.len() + locked.len(), total);
        assert!(owned.iter().any(|i| i.key == "leaf_cap"));
        assert!(locked.iter().all(|i| i.key != "leaf_cap"));
    }

    #[test]
    fn test_equipped_overlays_in_slot_order() {
        let mut store = store_owning(&["wizard_hat", "tabby_cat", "scarlet_cape"]);
        equip(&mut store, "tabby_cat", Slot::Pet).unwrap();
        equip(&mut store, "scarlet_cape", Slot::Cape).unwrap();
        equip(&mut store, "wizard_hat", Slot::Head).unwrap();
        let keys: Vec<&str> = equipped_overlays(&store)
            .unwrap()
            .iter()
            .map(|i| i.key)
            .collect();
        assert_eq!(keys, vec!["wizard_hat", "scarlet_cape", "tabby_cat"]);
    }
}
