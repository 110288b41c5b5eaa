//! Pure chart renderer producing drawing commands

use crate::color::{Color, luminance};
use crate::io::configuration::{
    BASE_CELL_SIZE, MAJOR_GRID_INTERVAL, MAX_ZOOM, MIN_CELL_SIZE, MIN_ZOOM, SYMBOL_MIN_CELL_SIZE,
};
use crate::io::error::{Result, StitchError};
use crate::pattern::{Pattern, StitchProgress};
use rgb::RGBA8;

/// Translucent green laid over finished stitches
pub const STITCHED_OVERLAY: RGBA8 = RGBA8 {
    r: 34,
    g: 197,
    b: 94,
    a: 166,
};
/// Glyph drawn on finished stitches
pub const STITCHED_MARK: char = '✓';
/// Color of the finished-stitch glyph
pub const STITCHED_MARK_COLOR: RGBA8 = RGBA8 {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};
/// Symbol color on light cells
pub const DARK_INK: RGBA8 = RGBA8 {
    r: 0x1a,
    g: 0x1a,
    b: 0x1a,
    a: 255,
};
/// Symbol color on dark cells
pub const LIGHT_INK: RGBA8 = RGBA8 {
    r: 0xf0,
    g: 0xf0,
    b: 0xf0,
    a: 255,
};
/// Thin outline around every cell
pub const CELL_BORDER: RGBA8 = RGBA8 {
    r: 0,
    g: 0,
    b: 0,
    a: 38,
};
/// Bold line every few cells
pub const MAJOR_LINE: RGBA8 = RGBA8 {
    r: 0,
    g: 0,
    b: 0,
    a: 115,
};

// Cells brighter than this get dark ink
const INK_LUMINANCE_SPLIT: f32 = 140.0;
const SYMBOL_SCALE: f32 = 0.65;
const MARK_SCALE: f32 = 0.7;
const CELL_BORDER_WIDTH: f32 = 0.5;
const MAJOR_LINE_WIDTH: f32 = 1.0;

/// One primitive on the chart surface, in pixel coordinates
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Solid or translucent rectangle
    FillRect {
        /// Left edge
        x: f32,
        /// Top edge
        y: f32,
        /// Rectangle width
        width: f32,
        /// Rectangle height
        height: f32,
        /// Fill color
        color: RGBA8,
    },
    /// Rectangle outline
    StrokeRect {
        /// Left edge
        x: f32,
        /// Top edge
        y: f32,
        /// Rectangle width
        width: f32,
        /// Rectangle height
        height: f32,
        /// Stroke width
        line_width: f32,
        /// Stroke color
        color: RGBA8,
    },
    /// Single character centered on a point
    Glyph {
        /// Center x
        x: f32,
        /// Center y
        y: f32,
        /// Font size in pixels
        size: f32,
        /// Character to draw
        symbol: char,
        /// Bold weight
        bold: bool,
        /// Text color
        color: RGBA8,
    },
    /// Straight line segment
    Line {
        /// Start point
        from: [f32; 2],
        /// End point
        to: [f32; 2],
        /// Stroke width
        line_width: f32,
        /// Stroke color
        color: RGBA8,
    },
}

/// A rendered chart ready to replay on a drawing surface
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Edge length of one stitch cell in pixels
    pub cell_size: u32,
    /// Commands in paint order
    pub commands: Vec<DrawCommand>,
}

/// Zoom limited to the supported range; NaN falls back to 1.0
pub fn clamp_zoom(zoom: f32) -> f32 {
    if zoom.is_nan() {
        1.0
    } else {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    }
}

/// Cell edge length in pixels at `zoom`
pub fn cell_size(zoom: f32) -> u32 {
    ((BASE_CELL_SIZE * clamp_zoom(zoom)).round() as u32).max(MIN_CELL_SIZE)
}

/// Grid cell under a point on a chart drawn at `zoom`
pub fn cell_at(pattern: &Pattern, zoom: f32, x: f32, y: f32) -> Option<(usize, usize)> {
    if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
        return None;
    }
    let size = cell_size(zoom) as f32;
    let column = (x / size).floor() as usize;
    let row = (y / size).floor() as usize;
    (column < pattern.width() && row < pattern.height()).then_some((column, row))
}

fn ink_for(color: Color) -> RGBA8 {
    if luminance(color) > INK_LUMINANCE_SPLIT {
        DARK_INK
    } else {
        LIGHT_INK
    }
}

const fn opaque(color: Color) -> RGBA8 {
    RGBA8 {
        r: color.r,
        g: color.g,
        b: color.b,
        a: 255,
    }
}

/// Draw a pattern with its progress at `zoom`
///
/// Every cell is filled with its palette color. Thread cells additionally carry
/// their symbol, or a green overlay with a check mark once stitched; symbols and
/// marks are omitted when cells are too small to read. Bold lines mark every tenth
/// row and column.
///
/// # Errors
///
/// Returns an error if `progress` was created for a differently sized pattern
pub fn render(pattern: &Pattern, progress: &StitchProgress, zoom: f32) -> Result<Chart> {
    if !progress.matches(pattern) {
        return Err(StitchError::DimensionMismatch {
            expected: pattern.dimensions(),
            actual: progress.dimensions(),
        });
    }

    let size = cell_size(zoom);
    let cell = size as f32;
    let show_glyphs = size >= SYMBOL_MIN_CELL_SIZE;
    let palette = pattern.palette();
    let mut commands = Vec::with_capacity(pattern.cell_count() * 3);

    for (index, &entry_index) in pattern.grid().iter().enumerate() {
        let Some(entry) = palette.get(entry_index) else {
            continue;
        };
        let left = (index % pattern.width()) as f32 * cell;
        let top = (index / pattern.width()) as f32 * cell;

        commands.push(DrawCommand::FillRect {
            x: left,
            y: top,
            width: cell,
            height: cell,
            color: opaque(entry.color),
        });

        if !entry.is_empty() {
            if progress.is_stitched_at(index) {
                commands.push(DrawCommand::FillRect {
                    x: left,
                    y: top,
                    width: cell,
                    height: cell,
                    color: STITCHED_OVERLAY,
                });
                if show_glyphs {
                    commands.push(DrawCommand::Glyph {
                        x: left + cell / 2.0,
                        y: top + cell / 2.0,
                        size: (cell * MARK_SCALE).round(),
                        symbol: STITCHED_MARK,
                        bold: true,
                        color: STITCHED_MARK_COLOR,
                    });
                }
            } else if show_glyphs {
                commands.push(DrawCommand::Glyph {
                    x: left + cell / 2.0,
                    y: top + cell / 2.0,
                    size: (cell * SYMBOL_SCALE).round(),
                    symbol: entry.symbol,
                    bold: false,
                    color: ink_for(entry.color),
                });
            }
        }

        commands.push(DrawCommand::StrokeRect {
            x: left + CELL_BORDER_WIDTH / 2.0,
            y: top + CELL_BORDER_WIDTH / 2.0,
            width: cell - CELL_BORDER_WIDTH,
            height: cell - CELL_BORDER_WIDTH,
            line_width: CELL_BORDER_WIDTH,
            color: CELL_BORDER,
        });
    }

    let chart_width = pattern.width() as f32 * cell;
    let chart_height = pattern.height() as f32 * cell;
    for column in (0..=pattern.width()).step_by(MAJOR_GRID_INTERVAL) {
        let x = column as f32 * cell;
        commands.push(DrawCommand::Line {
            from: [x, 0.0],
            to: [x, chart_height],
            line_width: MAJOR_LINE_WIDTH,
            color: MAJOR_LINE,
        });
    }
    for row in (0..=pattern.height()).step_by(MAJOR_GRID_INTERVAL) {
        let y = row as f32 * cell;
        commands.push(DrawCommand::Line {
            from: [0.0, y],
            to: [chart_width, y],
            line_width: MAJOR_LINE_WIDTH,
            color: MAJOR_LINE,
        });
    }

    Ok(Chart {
        width: pattern.width() as u32 * size,
        height: pattern.height() as u32 * size,
        cell_size: size,
        commands,
    })
}
