//! Stitch grid generation and the progress grid paired with it
//!
//! This module contains:
//! - The in-memory RGBA source image
//! - Resampling onto a target grid with nearest-palette assignment
//! - Aspect-ratio helpers for choosing grid dimensions
//! - Stitch progress and its pairing with a pattern
//! - The sample, quantize, resample pipeline and its background variant

/// Grid size helpers derived from the source aspect ratio
pub mod dimensions;
/// Generation pipeline and background dispatch
pub mod generator;
/// Pattern type and grid resampling
pub mod grid;
/// Source image buffer
pub mod pixels;
/// Per-cell stitch completion flags
pub mod progress;
/// Pattern and progress kept in lockstep
pub mod session;

pub use generator::{GenerationConfig, PendingGeneration, generate, spawn_generation};
pub use grid::{Pattern, build_grid};
pub use pixels::PixelBuffer;
pub use progress::StitchProgress;
pub use session::{ProgressStats, Session};
