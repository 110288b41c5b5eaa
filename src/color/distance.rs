//! Channel selection and distance metric in RGB space

use crate::color::Color;

/// One of the three color channels, in median-cut scan order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red intensity
    Red,
    /// Green intensity
    Green,
    /// Blue intensity
    Blue,
}

impl Channel {
    /// Channels in the order ties are resolved
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Read this channel from a color
    pub const fn of(self, color: Color) -> u8 {
        match self {
            Self::Red => color.r,
            Self::Green => color.g,
            Self::Blue => color.b,
        }
    }
}

/// Squared Euclidean distance between two colors
pub fn squared_distance(a: Color, b: Color) -> u32 {
    Channel::ALL
        .iter()
        .map(|&channel| {
            let diff = i32::from(channel.of(a)) - i32::from(channel.of(b));
            diff.unsigned_abs() * diff.unsigned_abs()
        })
        .sum()
}

/// Perceived brightness on a 0-255 scale (ITU-R BT.601 weights)
pub fn luminance(color: Color) -> f32 {
    0.299 * f32::from(color.r) + 0.587 * f32::from(color.g) + 0.114 * f32::from(color.b)
}
