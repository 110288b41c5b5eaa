//! Grid size helpers that keep charts proportional to their source image

use crate::io::configuration::{DEFAULT_WIDTH_DIVISOR, MIN_GRID_DIMENSION};

/// Grid height matching the source aspect ratio for a chosen grid width
///
/// Rounds to the nearest stitch and never returns less than the minimum grid
/// dimension, so very wide images still produce a usable chart.
pub fn target_height_for(source_width: usize, source_height: usize, target_width: usize) -> usize {
    let ratio = if source_width > 0 {
        source_height as f64 / source_width as f64
    } else {
        1.0
    };
    ((target_width as f64 * ratio).round() as usize).max(MIN_GRID_DIMENSION)
}

/// Suggested grid width for a freshly loaded image
pub fn default_target_width(source_width: usize) -> usize {
    ((source_width as f64 / DEFAULT_WIDTH_DIVISOR as f64).round() as usize)
        .max(MIN_GRID_DIMENSION)
}
