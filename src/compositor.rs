//! Avatar compositing - merging the base body and overlays onto one canvas
//!
//! The compositor is a pure function of the avatar configuration, the
//! equipped overlay set, and a caller-driven transient blink flag. It
//! re-runs every render frame; nothing here is persisted, and the blink
//! substitution self-reverts the next time the flag is false.

use crate::catalog::{
    base_body, CatalogItem, ROLE_CLOTHING, ROLE_CLOTHING_SHADE, ROLE_EYE, ROLE_HAIR,
    ROLE_HAIR_SHADE, ROLE_OUTLINE, ROLE_SHOES, ROLE_SKIN, ROLE_SKIN_SHADE,
};
use crate::color::parse_color;
use crate::grid::{decode_rows, CANVAS_H, CANVAS_W, EYE_ROW};
use crate::models::AvatarConfig;
use crate::palettes::{self, Category};
use image::{Rgba, RgbaImage};

/// A warning generated during compositing
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Magenta color used for unknown roles and invalid colors
pub const MAGENTA: Rgba<u8> = Rgba([255, 0, 255, 255]);

/// Transparent color used for role 0 and padding
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Concrete colors for the base body's semantic roles.
struct BodyColors {
    skin: Rgba<u8>,
    skin_shade: Rgba<u8>,
    eye: Rgba<u8>,
    hair: Rgba<u8>,
    hair_shade: Rgba<u8>,
    clothing: Rgba<u8>,
    clothing_shade: Rgba<u8>,
    shoes: Rgba<u8>,
    outline: Rgba<u8>,
}

/// Composite an avatar into an RGBA image.
///
/// Merges the configured base body with the supplied character overlays in
/// fixed back-to-front slot order (background, aura, cape, outfit, head,
/// face, weapon). Pet-slot overlays are never merged - extract them with
/// [`crate::companion::first_companion`] instead.
///
/// When `blink` is true, eye-role cells on the fixed eye row render with
/// the configured skin color. The substitution is view-only: it is never
/// written back to the configuration.
///
/// # Error Handling (Lenient Mode)
///
/// - Selection index out of palette range: falls back to entry 0 with a warning
/// - Invalid palette color: magenta with a warning
/// - Overlay role outside its local palette: magenta with a warning
///
/// Deterministic for fixed inputs: two calls with identical arguments
/// produce identical pixel buffers.
pub fn composite(
    config: &AvatarConfig,
    overlays: &[&CatalogItem],
    blink: bool,
) -> (RgbaImage, Vec<Warning>) {
    let mut warnings = Vec::new();
    let mut canvas = RgbaImage::from_pixel(CANVAS_W as u32, CANVAS_H as u32, TRANSPARENT);

    paint_body(&mut canvas, config, blink, &mut warnings);

    // Character overlays only, back to front. Pets render beside the
    // character, not onto it. Every overlay overwrites the accumulating
    // result on its non-transparent cells; backgrounds and auras are
    // authored sparse so the body shows through them.
    let mut layered: Vec<&CatalogItem> = overlays
        .iter()
        .copied()
        .filter(|item| item.slot.layer_order().is_some())
        .collect();
    layered.sort_by_key(|item| item.slot.layer_order());

    for item in layered {
        blit_overlay(&mut canvas, item, &mut warnings);
    }

    (canvas, warnings)
}

/// Paint the configured base body onto the canvas.
fn paint_body(
    canvas: &mut RgbaImage,
    config: &AvatarConfig,
    blink: bool,
    warnings: &mut Vec<Warning>,
) {
    let colors = resolve_body_colors(config, warnings);
    let (grid, grid_warnings) = decode_rows(base_body(config.body));
    for w in grid_warnings {
        warnings.push(Warning::new(w.message));
    }

    for (y, row) in grid.iter().enumerate() {
        for (x, &role) in row.iter().enumerate() {
            if role == 0 {
                continue;
            }
            let color = match role {
                ROLE_SKIN => colors.skin,
                ROLE_SKIN_SHADE => colors.skin_shade,
                // Blink swaps the eye row's eye cells for skin.
                ROLE_EYE if blink && y == EYE_ROW => colors.skin,
                ROLE_EYE => colors.eye,
                ROLE_HAIR => colors.hair,
                ROLE_HAIR_SHADE => colors.hair_shade,
                ROLE_CLOTHING => colors.clothing,
                ROLE_CLOTHING_SHADE => colors.clothing_shade,
                ROLE_SHOES => colors.shoes,
                ROLE_OUTLINE => colors.outline,
                other => {
                    warnings.push(Warning::new(format!(
                        "Unknown body role {} at ({}, {})",
                        other, x, y
                    )));
                    MAGENTA
                }
            };
            canvas.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Blit one overlay's non-transparent cells over the canvas.
/// Later overlays win on shared cells.
fn blit_overlay(canvas: &mut RgbaImage, item: &CatalogItem, warnings: &mut Vec<Warning>) {
    let (grid, grid_warnings) = decode_rows(item.rows);
    for w in grid_warnings {
        warnings.push(Warning::new(format!("{}: {}", item.key, w.message)));
    }

    let colors = resolve_local_palette(item, warnings);
    for (y, row) in grid.iter().enumerate() {
        for (x, &role) in row.iter().enumerate() {
            if role == 0 {
                continue;
            }
            let color = match colors.get(role as usize) {
                Some(&rgba) => rgba,
                None => {
                    warnings.push(Warning::new(format!(
                        "Role {} outside palette of item '{}'",
                        role, item.key
                    )));
                    MAGENTA
                }
            };
            canvas.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Parse an item's local palette into concrete colors, magenta on failure.
fn resolve_local_palette(item: &CatalogItem, warnings: &mut Vec<Warning>) -> Vec<Rgba<u8>> {
    item.palette
        .iter()
        .map(|hex| match parse_color(hex) {
            Ok(rgba) => rgba,
            Err(e) => {
                warnings.push(Warning::new(format!(
                    "Invalid color '{}' in item '{}': {}, using magenta",
                    hex, item.key, e
                )));
                MAGENTA
            }
        })
        .collect()
}

/// Resolve the config's selection indices against the palette registry.
fn resolve_body_colors(config: &AvatarConfig, warnings: &mut Vec<Warning>) -> BodyColors {
    let skin = resolve_entry(Category::Skin, config.skin, warnings);
    let eyes = resolve_entry(Category::Eyes, config.eyes, warnings);
    let hair = resolve_entry(Category::Hair, config.hair, warnings);
    let clothing = resolve_entry(Category::Clothing, config.clothing, warnings);
    let shoes = resolve_entry(Category::Shoes, config.shoes, warnings);

    BodyColors {
        skin: skin.0,
        skin_shade: skin.1,
        eye: eyes.0,
        hair: hair.0,
        hair_shade: hair.1,
        clothing: clothing.0,
        clothing_shade: clothing.1,
        shoes: shoes.0,
        outline: parse_or_magenta(palettes::OUTLINE, warnings),
    }
}

/// Resolve one category selection to (base, shade) colors.
fn resolve_entry(
    category: Category,
    index: usize,
    warnings: &mut Vec<Warning>,
) -> (Rgba<u8>, Rgba<u8>) {
    let entry = match palettes::lookup(category, index) {
        Some(entry) => entry,
        None => {
            warnings.push(Warning::new(format!(
                "Selection {} out of range for {:?}, using default",
                index, category
            )));
            &palettes::entries(category)[0]
        }
    };
    (
        parse_or_magenta(entry.base, warnings),
        parse_or_magenta(entry.shade, warnings),
    )
}

fn parse_or_magenta(hex: &str, warnings: &mut Vec<Warning>) -> Rgba<u8> {
    match parse_color(hex) {
        Ok(rgba) => rgba,
        Err(e) => {
            warnings.push(Warning::new(format!(
                "Invalid color '{}': {}, using magenta",
                hex, e
            )));
            MAGENTA
        }
    }
}
