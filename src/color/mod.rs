//! Color primitives shared by quantization, assignment and rendering
//!
//! Colors are plain 8-bit RGB triples. Distance is squared Euclidean in RGB space;
//! no perceptual model is applied.

/// Channel access, squared distance and luminance
pub mod distance;
/// HSL decomposition and legend labels
pub mod naming;

/// An 8-bit RGB thread or pixel color
pub type Color = rgb::RGB8;

pub use distance::{Channel, luminance, squared_distance};
pub use naming::{Hsl, color_label};
