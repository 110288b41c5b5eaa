//! Cross-stitch chart generation from raster images
//!
//! An image is sampled, reduced to a small thread palette with median-cut quantization,
//! and resampled onto a stitch grid at a caller-chosen resolution. A parallel boolean
//! grid tracks which stitches are done and is persisted together with its pattern.

#![forbid(unsafe_code)]

/// Color primitives, distance metric and human-readable color naming
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid resampling, stitch progress and the generation pipeline
pub mod pattern;
/// Pixel sampling, median-cut quantization and palette construction
pub mod quantize;
/// Pure chart rendering into drawing commands and PNG export
pub mod render;

pub use io::error::{Result, StitchError};
pub use pattern::{GenerationConfig, Pattern, PixelBuffer, Session, StitchProgress, generate};
pub use quantize::{Palette, PaletteEntry, build_palette, sample};
