//! Deterministic stride sampling of opaque pixels for quantization

use crate::color::Color;
use crate::io::configuration::OPACITY_THRESHOLD;
use crate::pattern::PixelBuffer;

/// Whether a pixel with this alpha contributes to the palette
pub const fn is_sampled(alpha: u8) -> bool {
    alpha > OPACITY_THRESHOLD
}

/// Collect up to roughly `max_samples` opaque colors from the image
///
/// Visits flat pixel indices `0, step, 2*step, ...` with
/// `step = max(1, pixel_count / max_samples)` and keeps pixels whose alpha exceeds
/// the opacity threshold. Output follows visitation order. A fully transparent
/// image yields an empty vector.
pub fn sample(pixels: &PixelBuffer, max_samples: usize) -> Vec<Color> {
    let pixel_count = pixels.pixel_count();
    let step = pixel_count
        .checked_div(max_samples)
        .unwrap_or(pixel_count)
        .max(1);

    (0..pixel_count)
        .step_by(step)
        .map(|index| pixels.rgba_at(index))
        .filter(|pixel| is_sampled(pixel.a))
        .map(|pixel| Color::new(pixel.r, pixel.g, pixel.b))
        .collect()
}
