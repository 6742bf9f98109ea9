//! Equip-tier glow - presentational aura around a well-dressed avatar
//!
//! Recomputed every render from the equipped-item count, never persisted.

use image::Rgba;

/// Glow strength tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlowIntensity {
    Faint,
    Medium,
    Strong,
}

/// Glow color family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlowHue {
    Neutral,
    Cool,
    Warm,
}

/// A presentational glow tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glow {
    pub intensity: GlowIntensity,
    pub hue: GlowHue,
}

impl Glow {
    /// Concrete tint for the hue, alpha scaled by intensity.
    pub fn color(self) -> Rgba<u8> {
        let alpha = match self.intensity {
            GlowIntensity::Faint => 64,
            GlowIntensity::Medium => 128,
            GlowIntensity::Strong => 192,
        };
        match self.hue {
            GlowHue::Neutral => Rgba([232, 232, 240, alpha]),
            GlowHue::Cool => Rgba([91, 164, 232, alpha]),
            GlowHue::Warm => Rgba([232, 197, 71, alpha]),
        }
    }
}

/// Map an equipped-item count to a glow tier.
///
/// Step function, highest threshold first: five or more items glow strong
/// and warm, three or more medium and cool, one or more faint and neutral,
/// and a bare avatar has no glow.
pub fn glow_for_equipped(count: usize) -> Option<Glow> {
    if count >= 5 {
        Some(Glow {
            intensity: GlowIntensity::Strong,
            hue: GlowHue::Warm,
        })
    } else if count >= 3 {
        Some(Glow {
            intensity: GlowIntensity::Medium,
            hue: GlowHue::Cool,
        })
    } else if count >= 1 {
        Some(Glow {
            intensity: GlowIntensity::Faint,
            hue: GlowHue::Neutral,
        })
    } else {
        None
    }
}
