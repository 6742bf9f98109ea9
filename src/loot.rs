//! Loot engine - resolving reward containers into granted items
//!
//! Selection is rarity-windowed and rarity-weighted: a container draws
//! from unowned items within one rarity tier of its own, weighting rarer
//! items lower, via a single uniform draw against cumulative weights.
//! Only the draw itself is non-deterministic; the randomness source is
//! caller-supplied so tests seed it.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use crate::catalog::{self, CatalogItem};
use crate::models::Rarity;
use crate::store::{ProfileStore, StoreError};

/// Error type for container resolution failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LootError {
    /// Datastore failure
    #[error(transparent)]
    Store(#[from] StoreError),
    /// No container with the given id exists
    #[error("container {0} not found")]
    UnknownContainer(u64),
    /// The container was already resolved
    #[error("container {0} already opened")]
    AlreadyOpened(u64),
}

/// Result of opening a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LootOutcome {
    /// The item the container resolved to.
    pub item: &'static CatalogItem,
    /// False when the exhaustion fallback re-rolled an item the user
    /// already owned - the container is consumed either way, and the
    /// reveal animation plays either way.
    pub newly_owned: bool,
    /// True when the exhaustion fallback drew from the full catalog.
    pub exhausted: bool,
}

/// Selection weight for an item: `max(1, 5 - rarityIndex)`.
///
/// Rarer items are chosen less often even inside the eligibility window.
/// The formula assumes the five fixed tiers; [`Rarity`] is a closed enum
/// so a new tier cannot appear without touching this.
pub fn rarity_weight(rarity: Rarity) -> u32 {
    (5 - rarity.index() as u32).max(1)
}

/// Items a container of the given rarity may grant: unowned catalog items
/// within one rarity tier of the container.
pub fn eligible_items(
    container_rarity: Rarity,
    owned: &HashSet<String>,
) -> Vec<&'static CatalogItem> {
    let container_index = container_rarity.index() as i32;
    catalog::items()
        .iter()
        .filter(|item| {
            !owned.contains(item.key)
                && (item.rarity.index() as i32 - container_index).abs() <= 1
        })
        .collect()
}

/// Draw one item for a container of the given rarity.
///
/// When the eligible set is empty, falls back to a uniform draw over the
/// entire catalog - possibly re-selecting an owned item, which grants
/// nothing new but still consumes the container. Returns the drawn item
/// and whether the fallback path was taken.
pub fn select_reward<R: Rng>(
    container_rarity: Rarity,
    owned: &HashSet<String>,
    rng: &mut R,
) -> (&'static CatalogItem, bool) {
    let eligible = eligible_items(container_rarity, owned);
    if eligible.is_empty() {
        let all = catalog::items();
        return (&all[rng.gen_range(0..all.len())], true);
    }

    let total: u32 = eligible.iter().map(|item| rarity_weight(item.rarity)).sum();
    let mut roll = rng.gen_range(0..total);
    for &item in &eligible {
        let weight = rarity_weight(item.rarity);
        if roll < weight {
            return (item, false);
        }
        roll -= weight;
    }
    // Unreachable: roll < total by construction.
    (eligible[eligible.len() - 1], false)
}

/// Resolve a reward container against the datastore.
///
/// Reads the container, draws an item, records ownership
/// (insert-if-not-exists), and irreversibly marks the container opened.
/// A container that was already resolved - including by a concurrent
/// session between our read and the opened-flag update - is an
/// [`LootError::AlreadyOpened`].
pub fn open_container<S: ProfileStore, R: Rng>(
    store: &mut S,
    id: u64,
    rng: &mut R,
) -> Result<LootOutcome, LootError> {
    let containers = store.containers()?;
    let container = containers
        .iter()
        .find(|c| c.id == id)
        .ok_or(LootError::UnknownContainer(id))?;
    if container.opened {
        return Err(LootError::AlreadyOpened(id));
    }

    let owned = store.owned_keys()?;
    let (item, exhausted) = select_reward(container.rarity, &owned, rng);
    let newly_owned = store.insert_owned(item.key)?;
    if !store.mark_opened(id)? {
        return Err(LootError::AlreadyOpened(id));
    }

    Ok(LootOutcome {
        item,
        newly_owned,
        exhausted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnlockMethod;
    use crate::store::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_weights_follow_formula() {
        assert_eq!(rarity_weight(Rarity::Common), 5);
        assert_eq!(rarity_weight(Rarity::Uncommon), 4);
        assert_eq!(rarity_weight(Rarity::Rare), 3);
        assert_eq!(rarity_weight(Rarity::Epic), 2);
        assert_eq!(rarity_weight(Rarity::Legendary), 1);
    }

    #[test]
    fn test_eligibility_window_is_one_tier() {
        let owned = HashSet::new();
        for item in eligible_items(Rarity::Rare, &owned) {
            let delta = (item.rarity.index() as i32 - Rarity::Rare.index() as i32).abs();
            assert!(delta <= 1, "{}", item.key);
        }
        // Nothing outside the window sneaks in.
        assert!(eligible_items(Rarity::Common, &owned)
            .iter()
            .all(|item| item.rarity <= Rarity::Uncommon));
    }

    #[test]
    fn test_owned_items_are_ineligible() {
        let mut owned = HashSet::new();
        owned.insert("wizard_hat".to_string());
        assert!(eligible_items(Rarity::Common, &owned)
            .iter()
            .all(|item| item.key != "wizard_hat"));
    }

    #[test]
    fn test_select_is_deterministic_for_seeded_rng() {
        let owned = HashSet::new();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let (item_a, _) = select_reward(Rarity::Rare, &owned, &mut a);
        let (item_b, _) = select_reward(Rarity::Rare, &owned, &mut b);
        assert_eq!(item_a.key, item_b.key);
    }

    #[test]
    fn test_exhaustion_falls_back_to_full_catalog() {
        // Own everything: the eligible set for any rarity is empty.
        let owned: HashSet<String> =
            catalog::items().iter().map(|i| i.key.to_string()).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let (item, exhausted) = select_reward(Rarity::Common, &owned, &mut rng);
        assert!(exhausted);
        assert!(owned.contains(item.key));
    }

    #[test]
    fn test_open_container_grants_and_consumes() {
        let mut store = MemoryStore::new();
        let container = store.create_container(Rarity::Common, None).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let outcome = open_container(&mut store, container.id, &mut rng).unwrap();
        assert!(outcome.newly_owned);
        assert!(!outcome.exhausted);
        assert!(store.owned_keys().unwrap().contains(outcome.item.key));
        assert!(store.containers().unwrap()[0].opened);
    }

    #[test]
    fn test_open_container_twice_fails_second_time() {
        let mut store = MemoryStore::new();
        let container = store.create_container(Rarity::Common, None).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        open_container(&mut store, container.id, &mut rng).unwrap();
        assert_eq!(
            open_container(&mut store, container.id, &mut rng),
            Err(LootError::AlreadyOpened(container.id))
        );
    }

    #[test]
    fn test_open_unknown_container() {
        let mut store = MemoryStore::new();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            open_container(&mut store, 99, &mut rng),
            Err(LootError::UnknownContainer(99))
        );
    }

    #[test]
    fn test_loot_never_grants_default_items_outside_window() {
        // A legendary container must not grant common defaults unless the
        // exhaustion path was forced.
        let owned = HashSet::new();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let (item, exhausted) = select_reward(Rarity::Legendary, &owned, &mut rng);
            assert!(!exhausted);
            assert!(item.rarity >= Rarity::Epic, "{}", item.key);
            assert_ne!(item.unlock, UnlockMethod::Default);
        }
    }
}
