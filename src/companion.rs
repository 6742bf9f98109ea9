//! Companion extraction - cropping a pet overlay to its natural size
//!
//! A pet is never merged into the character canvas. Its overlay grid is
//! cropped to the minimal bounding box of non-transparent cells so the
//! companion renders at its own natural size beside the character.

use crate::catalog::CatalogItem;
use crate::color::parse_color;
use crate::grid::{bounding_box, decode_rows};
use crate::models::Slot;
use image::{Rgba, RgbaImage};

use crate::compositor::{MAGENTA, TRANSPARENT};

/// A warning generated during companion extraction
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

/// A companion sprite cropped to its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Companion {
    pub image: RgbaImage,
    pub width: u32,
    pub height: u32,
}

/// Extract a companion sprite from a pet overlay.
///
/// Scans the zero-padded grid for the bounding box of non-transparent
/// cells and slices to exactly that box. An overlay with no visible cells
/// yields a degenerate 1x1 transparent sprite rather than an error.
pub fn extract_companion(item: &CatalogItem) -> (Companion, Vec<Warning>) {
    let mut warnings = Vec::new();
    let (grid, grid_warnings) = decode_rows(item.rows);
    for w in grid_warnings {
        warnings.push(Warning::new(format!("{}: {}", item.key, w.message)));
    }

    let (min_x, min_y, max_x, max_y) = match bounding_box(&grid) {
        Some(bounds) => bounds,
        None => {
            warnings.push(Warning::new(format!(
                "Pet overlay '{}' has no visible cells",
                item.key
            )));
            return (
                Companion {
                    image: RgbaImage::from_pixel(1, 1, TRANSPARENT),
                    width: 1,
                    height: 1,
                },
                warnings,
            );
        }
    };

    let width = (max_x - min_x + 1) as u32;
    let height = (max_y - min_y + 1) as u32;
    let mut image = RgbaImage::from_pixel(width, height, TRANSPARENT);

    let colors: Vec<Rgba<u8>> = item
        .palette
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
        .collect();

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let role = grid[y][x];
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
            image.put_pixel((x - min_x) as u32, (y - min_y) as u32, color);
        }
    }

    (
        Companion {
            image,
            width,
            height,
        },
        warnings,
    )
}

/// Extract the first pet-slot overlay from an equipped set.
///
/// Additional pet overlays are ignored; non-pet overlays never produce a
/// companion.
pub fn first_companion(overlays: &[&CatalogItem]) -> Option<(Companion, Vec<Warning>)> {
    overlays
        .iter()
        .find(|item| item.slot == Slot::Pet)
        .map(|item| extract_companion(item))
}
