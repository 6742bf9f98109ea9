//! Datastore boundary for ownership, equipment, and reward records
//!
//! The engine never talks to a concrete backend. Everything stateful runs
//! against [`ProfileStore`], a read/insert/delete-shaped boundary scoped to
//! the signed-in user (identity binding is the backend's concern). Mutating
//! operations are idempotent - "insert if not exists" for ownership, "mark
//! opened only if unopened" for containers - so replays and multi-device
//! races degrade to no-ops instead of duplicate grants.
//!
//! [`MemoryStore`] is the reference implementation, used by tests and by
//! single-process callers that persist snapshots themselves.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{AvatarConfig, Rarity, RewardContainer, Slot};

/// Error type for datastore failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record the operation requires does not exist
    #[error("record not found: {0}")]
    NotFound(String),
    /// The backend could not be reached or rejected the operation
    #[error("datastore unavailable: {0}")]
    Unavailable(String),
}

/// Read/insert/delete boundary over one user's avatar records.
pub trait ProfileStore {
    /// Keys of every owned catalog item.
    fn owned_keys(&self) -> Result<HashSet<String>, StoreError>;

    /// Record ownership of an item. Insert-if-not-exists: returns `true`
    /// when the record was created, `false` when it already existed.
    fn insert_owned(&mut self, key: &str) -> Result<bool, StoreError>;

    /// The current slot -> item key equip mapping.
    fn equipped(&self) -> Result<HashMap<Slot, String>, StoreError>;

    /// Replace the equip record for a slot (delete-then-insert).
    fn insert_equipped(&mut self, slot: Slot, key: &str) -> Result<(), StoreError>;

    /// Delete the equip record for a slot. Returns `true` when a record
    /// existed.
    fn delete_equipped(&mut self, slot: Slot) -> Result<bool, StoreError>;

    /// Every reward container, opened or not.
    fn containers(&self) -> Result<Vec<RewardContainer>, StoreError>;

    /// Create a new unopened container; the backend assigns the id.
    fn create_container(
        &mut self,
        rarity: Rarity,
        source_level: Option<u32>,
    ) -> Result<RewardContainer, StoreError>;

    /// Flip a container to opened, only if it is still unopened. Returns
    /// `true` when this call performed the transition.
    fn mark_opened(&mut self, id: u64) -> Result<bool, StoreError>;

    /// The persisted avatar configuration, if any.
    fn load_config(&self) -> Result<Option<AvatarConfig>, StoreError>;

    /// Persist the avatar configuration.
    fn save_config(&mut self, config: &AvatarConfig) -> Result<(), StoreError>;
}

/// In-memory reference implementation of [`ProfileStore`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MemoryStore {
    owned: HashSet<String>,
    equipped: HashMap<Slot, String>,
    containers: Vec<RewardContainer>,
    config: Option<AvatarConfig>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn owned_keys(&self) -> Result<HashSet<String>, StoreError> {
        Ok(self.owned.clone())
    }

    fn insert_owned(&mut self, key: &str) -> Result<bool, StoreError> {
        Ok(self.owned.insert(key.to_string()))
    }

    fn equipped(&self) -> Result<HashMap<Slot, String>, StoreError> {
        Ok(self.equipped.clone())
    }

    fn insert_equipped(&mut self, slot: Slot, key: &str) -> Result<(), StoreError> {
        self.equipped.remove(&slot);
        self.equipped.insert(slot, key.to_string());
        Ok(())
    }

    fn delete_equipped(&mut self, slot: Slot) -> Result<bool, StoreError> {
        Ok(self.equipped.remove(&slot).is_some())
    }

    fn containers(&self) -> Result<Vec<RewardContainer>, StoreError> {
        Ok(self.containers.clone())
    }

    fn create_container(
        &mut self,
        rarity: Rarity,
        source_level: Option<u32>,
    ) -> Result<RewardContainer, StoreError> {
        let container = RewardContainer {
            id: self.next_id,
            rarity,
            opened: false,
            source_level,
        };
        self.next_id += 1;
        self.containers.push(container.clone());
        Ok(container)
    }

    fn mark_opened(&mut self, id: u64) -> Result<bool, StoreError> {
        match self.containers.iter_mut().find(|c| c.id == id) {
            Some(container) if !container.opened => {
                container.opened = true;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(StoreError::NotFound(format!("container {id}"))),
        }
    }

    fn load_config(&self) -> Result<Option<AvatarConfig>, StoreError> {
        Ok(self.config)
    }

    fn save_config(&mut self, config: &AvatarConfig) -> Result<(), StoreError> {
        self.config = Some(*config);
        Ok(())
    }
}
