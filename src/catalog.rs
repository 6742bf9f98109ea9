//! Built-in sprite catalog: base bodies and equippable overlay items
//!
//! One static declarative table defines every item at build time. Each
//! overlay carries its own local palette - the same role digit means
//! different colors in different items - together with its slot, rarity
//! tier, and unlock method.
//!
//! Base bodies are full-canvas sprites whose roles are semantic: they
//! resolve through the palette registry using the avatar configuration's
//! per-category selection indices rather than a local palette.

use crate::models::{BodyVariant, Rarity, Slot, UnlockMethod};

/// Base-body color roles. Overlay items do not use these - their role
/// digits index their own local palette.
pub const ROLE_SKIN: u8 = 1;
pub const ROLE_SKIN_SHADE: u8 = 2;
pub const ROLE_EYE: u8 = 3;
pub const ROLE_HAIR: u8 = 4;
pub const ROLE_HAIR_SHADE: u8 = 5;
pub const ROLE_CLOTHING: u8 = 6;
pub const ROLE_CLOTHING_SHADE: u8 = 7;
pub const ROLE_SHOES: u8 = 8;
pub const ROLE_OUTLINE: u8 = 9;

/// An immutable, build-time catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    /// Stable key stored in ownership and equip records.
    pub key: &'static str,
    /// Display name used in notifications.
    pub name: &'static str,
    pub slot: Slot,
    pub rarity: Rarity,
    pub unlock: UnlockMethod,
    /// Premium items are never granted by the level-unlock scheduler.
    pub premium: bool,
    /// Sparse sprite rows, zero-padded to the canonical canvas at decode.
    pub rows: &'static [&'static str],
    /// Local palette indexed by role digit; index 0 is the transparent slot.
    pub palette: &'static [&'static str],
}

const MALE_BODY: &[&str] = &[
    "......9999......",
    ".....944449.....",
    "....94444449....",
    "....94544459....",
    "...9411111149...",
    "...9411111149...",
    "...9413113149...",
    "....91111119....",
    "....91122119....",
    ".....911119.....",
    "......9119......",
    "....96666669....",
    "...9666666669...",
    "...9166666619...",
    "...9166776619...",
    "....96666669....",
    ".....977779.....",
    ".....97..79.....",
    ".....97..79.....",
    ".....98..89.....",
];

const FEMALE_BODY: &[&str] = &[
    "......9999......",
    ".....944449.....",
    "....94444449....",
    "....94544459....",
    "...4411111144...",
    "...4411111144...",
    "...4413113144...",
    "...4411111144...",
    "...4411221144...",
    "...44.1111.44...",
    "...44..11..44...",
    "....96666669....",
    "...9666666669...",
    "...9166666619...",
    "...9666776669...",
    "..966666666669..",
    "..967777777769..",
    "..977777777779..",
    "....11....11....",
    "....88....88....",
];

/// Returns the full-canvas base body sprite for a variant.
pub fn base_body(variant: BodyVariant) -> &'static [&'static str] {
    match variant {
        BodyVariant::Male => MALE_BODY,
        BodyVariant::Female => FEMALE_BODY,
    }
}

/// Transparent entry occupying index 0 of every local palette.
const NONE: &str = "#00000000";

static ITEMS: &[CatalogItem] = &[
    // ----- head -----
    CatalogItem {
        key: "leaf_cap",
        name: "Leaf Cap",
        slot: Slot::Head,
        rarity: Rarity::Common,
        unlock: UnlockMethod::Default,
        premium: false,
        rows: &[
            ".......3........",
            ".....11111......",
            "....1111221.....",
            "....2222222.....",
        ],
        palette: &[NONE, "#4E9B47", "#2F6B2B", "#8A6B4A"],
    },
    CatalogItem {
        key: "iron_helm",
        name: "Iron Helm",
        slot: Slot::Head,
        rarity: Rarity::Common,
        unlock: UnlockMethod::Level(3),
        premium: false,
        rows: &[
            "......1111......",
            ".....111111.....",
            "....11111122....",
            "....12222221....",
        ],
        palette: &[NONE, "#B8BECC", "#7E8796"],
    },
    CatalogItem {
        key: "wizard_hat",
        name: "Wizard Hat",
        slot: Slot::Head,
        rarity: Rarity::Uncommon,
        unlock: UnlockMethod::Loot,
        premium: false,
        rows: &[
            ".........1......",
            "........11......",
            ".......111......",
            "......11312.....",
            "...1111111122...",
        ],
        palette: &[NONE, "#6C3FA0", "#4E2C77", "#E8C547"],
    },
    CatalogItem {
        key: "gilded_crown",
        name: "Gilded Crown",
        slot: Slot::Head,
        rarity: Rarity::Legendary,
        unlock: UnlockMethod::Loot,
        premium: false,
        rows: &[
            "....1..1..1.....",
            "....11131131....",
            "....12222221....",
        ],
        palette: &[NONE, "#E8C547", "#C49A3C", "#D04648"],
    },
    // ----- face -----
    CatalogItem {
        key: "round_glasses",
        name: "Round Glasses",
        slot: Slot::Face,
        rarity: Rarity::Common,
        unlock: UnlockMethod::Default,
        premium: false,
        rows: &["", "", "", "", "", "", "....12211221...."],
        palette: &[NONE, "#1A1C2C", "#A8D8E8"],
    },
    CatalogItem {
        key: "eye_patch",
        name: "Eye Patch",
        slot: Slot::Face,
        rarity: Rarity::Uncommon,
        unlock: UnlockMethod::Loot,
        premium: false,
        rows: &["", "", "", "", "", "...2222222222...", "......11........"],
        palette: &[NONE, "#23212B", "#3A3846"],
    },
    CatalogItem {
        key: "star_visor",
        name: "Star Visor",
        slot: Slot::Face,
        rarity: Rarity::Epic,
        unlock: UnlockMethod::Loot,
        premium: false,
        rows: &[
            "",
            "",
            "",
            "",
            "",
            "...2111111112...",
            "...2111111112...",
            "....22222222....",
        ],
        palette: &[NONE, "#2BC9C9", "#1A6E7E"],
    },
    // ----- outfit -----
    CatalogItem {
        key: "traveler_tunic",
        name: "Traveler Tunic",
        slot: Slot::Outfit,
        rarity: Rarity::Common,
        unlock: UnlockMethod::Default,
        premium: false,
        rows: &[
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "....11111111....",
            "...1111111111...",
            "...1111111111...",
            "...1122332211...",
            "....11111111....",
            ".....222222.....",
        ],
        palette: &[NONE, "#8A6B4A", "#6B4E31", "#C9A227"],
    },
    CatalogItem {
        key: "mage_robe",
        name: "Mage Robe",
        slot: Slot::Outfit,
        rarity: Rarity::Rare,
        unlock: UnlockMethod::Loot,
        premium: false,
        rows: &[
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "....11111111....",
            "...1131111311...",
            "...1111111111...",
            "...1111111111...",
            "..211111111112..",
            "..333333333333..",
        ],
        palette: &[NONE, "#3E5FA8", "#2A4070", "#E8C547"],
    },
    CatalogItem {
        key: "knight_plate",
        name: "Knight Plate",
        slot: Slot::Outfit,
        rarity: Rarity::Epic,
        unlock: UnlockMethod::Level(20),
        premium: false,
        rows: &[
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "....11111111....",
            "...1111331111...",
            "...1111331111...",
            "...1122112211...",
            "....11111111....",
            ".....222222.....",
        ],
        palette: &[NONE, "#B8BECC", "#7E8796", "#E8C547"],
    },
    CatalogItem {
        key: "star_suit",
        name: "Star Suit",
        slot: Slot::Outfit,
        rarity: Rarity::Legendary,
        unlock: UnlockMethod::Level(30),
        premium: true,
        rows: &[
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "....33111133....",
            "...1121111211...",
            "...1111211111...",
            "...1211111121...",
            "....11211211....",
            ".....111111.....",
        ],
        palette: &[NONE, "#1F2A44", "#E8C547", "#C9CDD6"],
    },
    // ----- weapon -----
    CatalogItem {
        key: "wooden_sword",
        name: "Wooden Sword",
        slot: Slot::Weapon,
        rarity: Rarity::Common,
        unlock: UnlockMethod::Level(2),
        premium: false,
        rows: &[
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "..............1.",
            "..............1.",
            "..............1.",
            "..............1.",
            ".............222",
            "..............2.",
        ],
        palette: &[NONE, "#A5743B", "#6B4E31"],
    },
    CatalogItem {
        key: "oak_staff",
        name: "Oak Staff",
        slot: Slot::Weapon,
        rarity: Rarity::Rare,
        unlock: UnlockMethod::Loot,
        premium: false,
        rows: &[
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            ".............22.",
            ".............22.",
            "..............1.",
            "..............1.",
            "..............1.",
            "..............1.",
            "..............1.",
            "..............1.",
        ],
        palette: &[NONE, "#6B4E31", "#4FBF8F"],
    },
    CatalogItem {
        key: "ember_blade",
        name: "Ember Blade",
        slot: Slot::Weapon,
        rarity: Rarity::Legendary,
        unlock: UnlockMethod::Loot,
        premium: false,
        rows: &[
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "..............2.",
            ".............12.",
            ".............21.",
            ".............12.",
            "..............1.",
            ".............333",
            "..............3.",
        ],
        palette: &[NONE, "#D04648", "#E8832B", "#7E8796"],
    },
    // ----- cape -----
    CatalogItem {
        key: "scarlet_cape",
        name: "Scarlet Cape",
        slot: Slot::Cape,
        rarity: Rarity::Uncommon,
        unlock: UnlockMethod::Level(10),
        premium: false,
        rows: &[
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "...1111111111...",
            "..111111111111..",
            "..111111111111..",
            "..111111111111..",
            "..121111111121..",
            "..111111111111..",
            "..222222222222..",
        ],
        palette: &[NONE, "#9E3039", "#74232A"],
    },
    CatalogItem {
        key: "shadow_cloak",
        name: "Shadow Cloak",
        slot: Slot::Cape,
        rarity: Rarity::Epic,
        unlock: UnlockMethod::Loot,
        premium: false,
        rows: &[
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "...1111111111...",
            "..111111111111..",
            "..111111111111..",
            "..112111111211..",
            "..111111111111..",
            "..211211211211..",
            "..2.22.22.22.2..",
        ],
        palette: &[NONE, "#2A2438", "#1A1626"],
    },
    // ----- aura -----
    CatalogItem {
        key: "ember_aura",
        name: "Ember Aura",
        slot: Slot::Aura,
        rarity: Rarity::Rare,
        unlock: UnlockMethod::Loot,
        premium: false,
        rows: &[
            "",
            ".1............1.",
            "",
            "2..............2",
            "",
            "1..............1",
            "",
            "2..............2",
            "",
            "1..............1",
            "",
            "2..............2",
            "",
            "1..............1",
            "",
            ".2............2.",
            "",
            "..11........11..",
        ],
        palette: &[NONE, "#E8832B", "#E8C547"],
    },
    CatalogItem {
        key: "golden_halo",
        name: "Golden Halo",
        slot: Slot::Aura,
        rarity: Rarity::Legendary,
        unlock: UnlockMethod::Level(75),
        premium: false,
        rows: &[
            ".....122221.....",
            "....21....12....",
            ".....122221.....",
        ],
        palette: &[NONE, "#E8C547", "#FFF1B8"],
    },
    // ----- background -----
    CatalogItem {
        key: "meadow",
        name: "Meadow",
        slot: Slot::Background,
        rarity: Rarity::Common,
        unlock: UnlockMethod::Default,
        premium: false,
        // Side strips only: the canvas center stays transparent so the
        // body shows through the backdrop layer.
        rows: &[
            "11............44",
            "11............44",
            "11............11",
            "11............11",
            "11............11",
            "11............11",
            "11............11",
            "11............11",
            "11............11",
            "11............11",
            "11............11",
            "11............11",
            "11............11",
            "11............11",
            "22............22",
            "22............22",
            "22............22",
            "32............23",
            "33............33",
            "33............33",
        ],
        palette: &[NONE, "#BFE3F0", "#7FBF7F", "#5A965A", "#FFF1B8"],
    },
    CatalogItem {
        key: "night_sky",
        name: "Night Sky",
        slot: Slot::Background,
        rarity: Rarity::Uncommon,
        unlock: UnlockMethod::Level(5),
        premium: false,
        rows: &[
            "31............11",
            "33............21",
            "11............11",
            "12............11",
            "11............12",
            "11............11",
            "21............11",
            "11............11",
            "11............21",
            "11............11",
            "12............11",
            "11............11",
            "11............12",
            "21............11",
            "11............11",
            "11............21",
            "11............11",
            "12............11",
            "11............11",
            "11............11",
        ],
        palette: &[NONE, "#1F2A44", "#E8C547", "#C9CDD6"],
    },
    // ----- pet -----
    CatalogItem {
        key: "tabby_cat",
        name: "Tabby Cat",
        slot: Slot::Pet,
        rarity: Rarity::Uncommon,
        unlock: UnlockMethod::Loot,
        premium: false,
        rows: &[
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            ".1..1...........",
            ".1111...........",
            ".1311...........",
            ".111122.........",
            ".111112.........",
            ".1.11...........",
        ],
        palette: &[NONE, "#C98A2B", "#8A5527", "#1A1C2C"],
    },
    CatalogItem {
        key: "mint_slime",
        name: "Mint Slime",
        slot: Slot::Pet,
        rarity: Rarity::Common,
        unlock: UnlockMethod::Level(15),
        premium: false,
        rows: &[
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "..1111..........",
            ".113131.........",
            ".111111.........",
            ".122221.........",
        ],
        palette: &[NONE, "#7FDFA8", "#4FAF78", "#1A1C2C"],
    },
    CatalogItem {
        key: "ember_whelp",
        name: "Ember Whelp",
        slot: Slot::Pet,
        rarity: Rarity::Legendary,
        unlock: UnlockMethod::Loot,
        premium: false,
        rows: &[
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            ".4..4...........",
            ".1111...........",
            ".1311...........",
            ".11122..........",
            ".111221.........",
            ".1111211........",
            "..11.11.........",
        ],
        palette: &[NONE, "#D04648", "#E8832B", "#1A1C2C", "#7E8796"],
    },
];

/// Returns the full item table.
pub fn items() -> &'static [CatalogItem] {
    ITEMS
}

/// Look up an item by key.
pub fn find(key: &str) -> Option<&'static CatalogItem> {
    ITEMS.iter().find(|item| item.key == key)
}

/// All items bound to a slot, in table order.
pub fn items_for_slot(slot: Slot) -> impl Iterator<Item = &'static CatalogItem> {
    ITEMS.iter().filter(move |item| item.slot == slot)
}

/// Items flagged as default unlocks, granted to every user on first load.
pub fn default_items() -> impl Iterator<Item = &'static CatalogItem> {
    ITEMS.iter().filter(|item| item.unlock == UnlockMethod::Default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_color;
    use crate::grid::{decode_rows, CANVAS_H, CANVAS_W, EYE_ROW};
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let mut seen = HashSet::new();
        for item in items() {
            assert!(seen.insert(item.key), "duplicate key '{}'", item.key);
        }
    }

    #[test]
    fn test_base_bodies_are_full_canvas() {
        for variant in [BodyVariant::Male, BodyVariant::Female] {
            let rows = base_body(variant);
            assert_eq!(rows.len(), CANVAS_H);
            for row in rows {
                assert_eq!(row.chars().count(), CANVAS_W);
            }
            let (_, warnings) = decode_rows(rows);
            assert!(warnings.is_empty(), "{warnings:?}");
        }
    }

    #[test]
    fn test_base_bodies_have_eyes_on_eye_row() {
        for variant in [BodyVariant::Male, BodyVariant::Female] {
            let (grid, _) = decode_rows(base_body(variant));
            let eyes = grid[EYE_ROW].iter().filter(|&&r| r == ROLE_EYE).count();
            assert_eq!(eyes, 2, "{variant:?}");
        }
    }

    #[test]
    fn test_items_decode_without_warnings() {
        for item in items() {
            let (_, warnings) = decode_rows(item.rows);
            assert!(warnings.is_empty(), "{}: {warnings:?}", item.key);
        }
    }

    #[test]
    fn test_item_roles_stay_inside_local_palette() {
        for item in items() {
            let (grid, _) = decode_rows(item.rows);
            for row in &grid {
                for &role in row {
                    assert!(
                        (role as usize) < item.palette.len(),
                        "{}: role {} outside palette of {} entries",
                        item.key,
                        role,
                        item.palette.len()
                    );
                }
            }
        }
    }

    #[test]
    fn test_item_palettes_parse() {
        for item in items() {
            for (i, hex) in item.palette.iter().enumerate() {
                assert!(
                    parse_color(hex).is_ok(),
                    "{}: bad palette color at role {}",
                    item.key,
                    i
                );
            }
        }
    }

    #[test]
    fn test_every_slot_has_items() {
        for slot in Slot::ALL {
            assert!(items_for_slot(slot).count() > 0, "{slot:?}");
        }
    }

    #[test]
    fn test_default_items_cover_a_wearable_loadout() {
        let defaults: Vec<_> = default_items().collect();
        assert!(!defaults.is_empty());
        assert!(defaults.iter().all(|item| !item.premium));
        assert!(defaults.iter().all(|item| item.rarity == Rarity::Common));
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert_eq!(find("wizard_hat").map(|i| i.slot), Some(Slot::Head));
        assert!(find("no_such_item").is_none());
    }
}
