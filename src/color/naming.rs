//! Human-readable color names for chart legends
//!
//! Labels are derived from a rounded HSL decomposition: low-saturation colors become
//! Black/Grey/White, everything else falls into one of eight hue bands. A shade prefix
//! and a 1-based ordinal keep labels unique within one palette.

use crate::color::Color;

/// Rounded hue/saturation/lightness of a color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsl {
    /// Hue in degrees, 0-360
    pub hue: u16,
    /// Saturation percentage, 0-100
    pub saturation: u8,
    /// Lightness percentage, 0-100
    pub lightness: u8,
}

// Below this saturation a color is named by lightness alone
const ACHROMATIC_SATURATION: u8 = 15;

// Upper hue bound (exclusive) for each named band; anything past the last is pink
const HUE_BANDS: [(u16, &str); 7] = [
    (15, "Red"),
    (40, "Orange"),
    (65, "Yellow"),
    (155, "Green"),
    (185, "Cyan"),
    (255, "Blue"),
    (295, "Violet"),
];

const RED_WRAP_START: u16 = 345;

impl Hsl {
    /// Decompose an RGB color
    pub fn from_color(color: Color) -> Self {
        let max = color.r.max(color.g).max(color.b);
        let min = color.r.min(color.g).min(color.b);
        let max_n = f64::from(max) / 255.0;
        let min_n = f64::from(min) / 255.0;
        let lightness = (max_n + min_n) / 2.0;

        if max == min {
            return Self {
                hue: 0,
                saturation: 0,
                lightness: percent(lightness),
            };
        }

        let delta = max_n - min_n;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max_n - min_n)
        } else {
            delta / (max_n + min_n)
        };

        let r = f64::from(color.r) / 255.0;
        let g = f64::from(color.g) / 255.0;
        let b = f64::from(color.b) / 255.0;
        let sector = if color.r == max {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if color.g == max {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Self {
            hue: (sector / 6.0 * 360.0).round() as u16,
            saturation: percent(saturation),
            lightness: percent(lightness),
        }
    }

    /// Base color name without shade or ordinal
    pub fn name(&self) -> &'static str {
        if self.saturation < ACHROMATIC_SATURATION {
            return if self.lightness < 25 {
                "Black"
            } else if self.lightness > 75 {
                "White"
            } else {
                "Grey"
            };
        }
        if self.hue >= RED_WRAP_START {
            return "Red";
        }
        HUE_BANDS
            .iter()
            .find(|&&(upper, _)| self.hue < upper)
            .map_or("Pink", |&(_, name)| name)
    }

    /// `"Dark "`, `"Light "` or empty depending on lightness
    pub const fn shade(&self) -> &'static str {
        if self.lightness < 35 {
            "Dark "
        } else if self.lightness > 65 {
            "Light "
        } else {
            ""
        }
    }
}

fn percent(fraction: f64) -> u8 {
    (fraction * 100.0).round() as u8
}

/// Legend label for the palette entry at `index` (0-based)
pub fn color_label(color: Color, index: usize) -> String {
    let hsl = Hsl::from_color(color);
    format!("{}{} {}", hsl.shade(), hsl.name(), index + 1)
}
