//! Level-unlock scheduling - reacting to level-up events
//!
//! A level-up grants every non-premium level-gated item the user has
//! reached, and every fifth level mints one reward container whose rarity
//! follows fixed level brackets. The whole call produces at most one
//! summary notification, never one per item.

use crate::catalog::{self, CatalogItem};
use crate::models::{Rarity, RewardContainer, UnlockMethod};
use crate::store::{ProfileStore, StoreError};

/// Container rarity bracket for a level milestone.
pub fn container_rarity_for_level(level: u32) -> Rarity {
    if level >= 75 {
        Rarity::Legendary
    } else if level >= 50 {
        Rarity::Epic
    } else if level >= 25 {
        Rarity::Rare
    } else if level >= 10 {
        Rarity::Uncommon
    } else {
        Rarity::Common
    }
}

/// What one level-up event produced.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelUpSummary {
    pub level: u32,
    /// Items newly granted by this call, in catalog order.
    pub granted: Vec<&'static CatalogItem>,
    /// The reward container minted for a fifth-level milestone, if any.
    pub container: Option<RewardContainer>,
}

impl LevelUpSummary {
    /// The single notification line for this event, naming the first
    /// newly granted item plus a "+N others" count when applicable.
    /// None when the call granted nothing.
    pub fn message(&self) -> Option<String> {
        match self.granted.as_slice() {
            [] => None,
            [only] => Some(format!("Unlocked {}!", only.name)),
            [first, rest @ ..] => {
                Some(format!("Unlocked {} +{} others!", first.name, rest.len()))
            }
        }
    }
}

/// Apply a level-up event carrying the new level.
///
/// Grants every non-premium catalog item with a level unlock at or below
/// `level` that is not yet owned, then mints a bracket-rarity container
/// when `level` is a multiple of five. Both steps are idempotent:
/// ownership inserts are insert-if-not-exists, and a container is keyed
/// by the level that created it, so replaying the same event changes
/// nothing.
pub fn handle_level_up(
    store: &mut impl ProfileStore,
    level: u32,
) -> Result<LevelUpSummary, StoreError> {
    let mut granted = Vec::new();
    for item in catalog::items() {
        if item.premium {
            continue;
        }
        if let UnlockMethod::Level(required) = item.unlock {
            if required <= level && store.insert_owned(item.key)? {
                granted.push(item);
            }
        }
    }

    let container = if level % 5 == 0 {
        let already_minted = store
            .containers()?
            .iter()
            .any(|c| c.source_level == Some(level));
        if already_minted {
            None
        } else {
            Some(store.create_container(container_rarity_for_level(level), Some(level))?)
        }
    } else {
        None
    };

    Ok(LevelUpSummary {
        level,
        granted,
        container,
    })
}
