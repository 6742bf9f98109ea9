//! Data models for avatar objects (slots, rarities, configuration, containers)

use serde::{Deserialize, Serialize};

/// An equip location. At most one item may be equipped per slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Head,
    Face,
    Outfit,
    Weapon,
    Cape,
    Aura,
    Background,
    Pet,
}

impl Slot {
    /// All slots, in catalog display order.
    pub const ALL: [Slot; 8] = [
        Slot::Head,
        Slot::Face,
        Slot::Outfit,
        Slot::Weapon,
        Slot::Cape,
        Slot::Aura,
        Slot::Background,
        Slot::Pet,
    ];

    /// Back-to-front compositing order for character overlays.
    ///
    /// Returns `None` for [`Slot::Pet`]: a pet is never merged into the
    /// character grid, it renders beside it as a companion sprite.
    pub fn layer_order(self) -> Option<u8> {
        match self {
            Slot::Background => Some(0),
            Slot::Aura => Some(1),
            Slot::Cape => Some(2),
            Slot::Outfit => Some(3),
            Slot::Head => Some(4),
            Slot::Face => Some(5),
            Slot::Weapon => Some(6),
            Slot::Pet => None,
        }
    }

    /// Lowercase slot name as stored in the datastore.
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Head => "head",
            Slot::Face => "face",
            Slot::Outfit => "outfit",
            Slot::Weapon => "weapon",
            Slot::Cape => "cape",
            Slot::Aura => "aura",
            Slot::Background => "background",
            Slot::Pet => "pet",
        }
    }
}

/// Ordered rarity classification controlling unlock gating and loot weighting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All rarities, lowest first.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Ordinal index 0 (common) .. 4 (legendary).
    pub fn index(self) -> u8 {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
        }
    }

    /// Lowercase rarity name for display and storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

/// Base body variant selecting which full-canvas body sprite to composite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BodyVariant {
    Male,
    Female,
}

/// How a catalog item becomes owned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnlockMethod {
    /// Granted to every user on first load.
    Default,
    /// Granted automatically when the user reaches the given level.
    Level(u32),
    /// Only obtainable from reward containers.
    Loot,
}

/// A user's avatar customization choices.
///
/// One selection index per customizable category, resolved against the
/// palette registry at composite time. Mutated only by explicit
/// customization actions and persisted as opaque external state - the
/// transient blink flag never lands here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvatarConfig {
    pub body: BodyVariant,
    pub skin: usize,
    pub eyes: usize,
    pub hair: usize,
    pub clothing: usize,
    pub shoes: usize,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            body: BodyVariant::Male,
            skin: 0,
            eyes: 0,
            hair: 0,
            clothing: 0,
            shoes: 0,
        }
    }
}

/// A one-time-use reward token resolved by the loot engine.
///
/// Transitions unopened -> opened exactly once. `source_level` records the
/// level-up that created it so replayed level events do not duplicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewardContainer {
    pub id: u64,
    pub rarity: Rarity,
    pub opened: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source_level: Option<u32>,
}
