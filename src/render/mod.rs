//! Chart rendering
//!
//! Rendering is a pure function of pattern, progress and zoom. The result is a list
//! of drawing commands that a host UI can replay on any surface; [`svg`] serializes
//! them and [`raster`] turns that document into a PNG for printing.

/// Drawing commands and the chart renderer
pub mod commands;
/// Rasterization through resvg and PNG export
pub mod raster;
/// SVG serialization of drawing commands
pub mod svg;

pub use commands::{Chart, DrawCommand, cell_at, cell_size, render};
pub use raster::{ChartRasterizer, export_chart_png, rasterize};
pub use svg::chart_svg;
