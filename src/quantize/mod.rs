//! Palette reduction from sampled source pixels
//!
//! This module contains:
//! - Stride-based sampling of opaque pixels
//! - Median-cut quantization
//! - Palette assembly with symbols, labels and the reserved empty slot

/// Median-cut color quantization
pub mod median_cut;
/// Palette entries, symbol alphabet and palette construction
pub mod palette;
/// Bounded, deterministic pixel sampling
pub mod sampler;

pub use palette::{EntryKind, Palette, PaletteEntry, build_palette};
pub use sampler::sample;
