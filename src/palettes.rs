//! Built-in customization palettes
//!
//! Static tables mapping a customizable category and a selection index to
//! a concrete color entry. Premium and high-level entries carry gates; the
//! compositor itself never checks gates (it renders whatever the config
//! selects), the customization UI filters choices through [`Gate::unlocked`].

use serde::{Deserialize, Serialize};

/// A customizable category of the base body sprite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Skin,
    Eyes,
    Hair,
    Clothing,
    Shoes,
}

impl Category {
    /// All customizable categories, in customization-screen order.
    pub const ALL: [Category; 5] = [
        Category::Skin,
        Category::Eyes,
        Category::Hair,
        Category::Clothing,
        Category::Shoes,
    ];
}

/// Unlock gate on a palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Available to everyone.
    Free,
    /// Available once the user reaches the given level.
    Level(u32),
    /// Requires the premium subscription.
    Premium,
}

impl Gate {
    /// Whether a user at `level` (premium or not) may select this entry.
    pub fn unlocked(self, level: u32, premium: bool) -> bool {
        match self {
            Gate::Free => true,
            Gate::Level(required) => level >= required,
            Gate::Premium => premium,
        }
    }
}

/// One selectable color entry: a base color plus its shading color.
///
/// Categories with no shaded cells in the base bodies (eyes) still carry a
/// shade so every entry resolves the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub base: &'static str,
    pub shade: &'static str,
    pub gate: Gate,
}

const fn entry(
    name: &'static str,
    base: &'static str,
    shade: &'static str,
    gate: Gate,
) -> PaletteEntry {
    PaletteEntry {
        name,
        base,
        shade,
        gate,
    }
}

/// Outline color shared by both base bodies.
pub const OUTLINE: &str = "#1A1C2C";

const SKIN: &[PaletteEntry] = &[
    entry("fair", "#F2D3B3", "#D9A87E", Gate::Free),
    entry("tan", "#D9A066", "#B37A43", Gate::Free),
    entry("bronze", "#A9703D", "#8A5527", Gate::Free),
    entry("deep", "#7A4A21", "#5C3317", Gate::Free),
    entry("porcelain", "#FFE8D6", "#E8C4A0", Gate::Level(8)),
    entry("emerald", "#7FBF7F", "#5A965A", Gate::Premium),
];

const EYES: &[PaletteEntry] = &[
    entry("brown", "#5C3B22", "#3F2817", Gate::Free),
    entry("blue", "#3B6FD9", "#2A4FA0", Gate::Free),
    entry("green", "#3F8F4E", "#2C6B38", Gate::Free),
    entry("gray", "#6E7B8C", "#4E5866", Gate::Free),
    entry("amber", "#C98A2B", "#9C681C", Gate::Level(12)),
    entry("violet", "#8A4FBF", "#653390", Gate::Premium),
];

const HAIR: &[PaletteEntry] = &[
    entry("chestnut", "#6B4226", "#4A2C17", Gate::Free),
    entry("black", "#23212B", "#11101A", Gate::Free),
    entry("blonde", "#E3C06A", "#C49A3C", Gate::Free),
    entry("auburn", "#A5432B", "#7E2F1D", Gate::Free),
    entry("silver", "#C9CDD6", "#9BA1AF", Gate::Level(18)),
    entry("rose", "#E87A9F", "#C25579", Gate::Premium),
];

const CLOTHING: &[PaletteEntry] = &[
    entry("slate", "#4E5A6B", "#39424F", Gate::Free),
    entry("forest", "#3E6B3F", "#2C4E2E", Gate::Free),
    entry("crimson", "#9E3039", "#74232A", Gate::Free),
    entry("ochre", "#C98A2B", "#9C681C", Gate::Free),
    entry("plum", "#6C3FA0", "#4E2C77", Gate::Level(15)),
    entry("midnight", "#1F2A44", "#131A2C", Gate::Premium),
];

const SHOES: &[PaletteEntry] = &[
    entry("brown", "#5C3B22", "#3F2817", Gate::Free),
    entry("black", "#23212B", "#121019", Gate::Free),
    entry("red", "#9E3039", "#6E2128", Gate::Free),
    entry("white", "#E8E8F0", "#BFBFCC", Gate::Level(6)),
];

/// Returns the full entry table for a category.
pub fn entries(category: Category) -> &'static [PaletteEntry] {
    match category {
        Category::Skin => SKIN,
        Category::Eyes => EYES,
        Category::Hair => HAIR,
        Category::Clothing => CLOTHING,
        Category::Shoes => SHOES,
    }
}

/// Look up a single entry by selection index, or None if out of range.
pub fn lookup(category: Category, index: usize) -> Option<&'static PaletteEntry> {
    entries(category).get(index)
}
