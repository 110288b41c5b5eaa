//! Pattern grids and nearest-palette resampling
//!
//! The grid is sampled at the center of each target cell's footprint in the source
//! image, so target resolution is independent of source resolution. Transparent
//! source pixels map straight to the empty entry; everything else goes to the closest
//! thread color.

use crate::color::Color;
use crate::io::configuration::OPACITY_THRESHOLD;
use crate::io::error::{Result, StitchError, corrupt_pattern, invalid_parameter};
use crate::pattern::PixelBuffer;
use crate::quantize::{Palette, PaletteEntry};
use serde::{Deserialize, Serialize};

/// Whether a source pixel with this alpha becomes a background cell
pub const fn is_transparent(alpha: u8) -> bool {
    alpha < OPACITY_THRESHOLD
}

/// Source row or column sampled for a target row or column
pub fn source_coordinate(target: usize, target_len: usize, source_len: usize) -> usize {
    let scaled = ((target as f64 + 0.5) / target_len as f64) * source_len as f64;
    (scaled.floor() as usize).min(source_len.saturating_sub(1))
}

/// Resample `image` onto a `target_width x target_height` grid of palette indices
///
/// Row-major, one full pass per call. `target_height` is used as given.
///
/// # Errors
///
/// Returns an error if either target dimension is zero
pub fn build_grid(
    image: &PixelBuffer,
    target_width: usize,
    target_height: usize,
    palette: &Palette,
) -> Result<Vec<usize>> {
    if target_width == 0 || target_height == 0 {
        return Err(invalid_parameter(
            "target",
            &format!("{target_width}x{target_height}"),
            &"grid dimensions must be positive",
        ));
    }

    let empty = palette.empty_index();
    let columns: Vec<usize> = (0..target_width)
        .map(|tx| source_coordinate(tx, target_width, image.width()))
        .collect();

    let mut grid = Vec::with_capacity(target_width * target_height);
    for ty in 0..target_height {
        let sy = source_coordinate(ty, target_height, image.height());
        for &sx in &columns {
            let pixel = image.rgba(sx, sy);
            let index = if is_transparent(pixel.a) {
                empty
            } else {
                palette.nearest(Color::new(pixel.r, pixel.g, pixel.b))
            };
            grid.push(index);
        }
    }
    Ok(grid)
}

/// A finished chart: palette plus a row-major grid of palette indices
///
/// Immutable once built; a new generation replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PatternRecord")]
pub struct Pattern {
    palette: Palette,
    grid: Vec<usize>,
    width: usize,
    height: usize,
}

// Unvalidated wire form
#[derive(Deserialize)]
struct PatternRecord {
    palette: Palette,
    grid: Vec<usize>,
    width: usize,
    height: usize,
}

impl TryFrom<PatternRecord> for Pattern {
    type Error = StitchError;

    fn try_from(record: PatternRecord) -> Result<Self> {
        Self::new(record.palette, record.grid, record.width, record.height)
    }
}

impl Pattern {
    /// Assemble a pattern, checking grid size and index validity
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero
    /// - The grid length is not `width * height`
    /// - Any grid value is not a valid palette index
    pub fn new(palette: Palette, grid: Vec<usize>, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(corrupt_pattern(&format!(
                "grid dimensions {width}x{height} must be positive"
            )));
        }
        if grid.len() != width * height {
            return Err(corrupt_pattern(&format!(
                "grid has {} cells, expected {}",
                grid.len(),
                width * height
            )));
        }
        if let Some(bad) = grid.iter().find(|&&index| index >= palette.len()) {
            return Err(corrupt_pattern(&format!(
                "grid index {bad} exceeds palette of {} entries",
                palette.len()
            )));
        }

        Ok(Self {
            palette,
            grid,
            width,
            height,
        })
    }

    /// Palette with the empty entry last
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Row-major palette indices
    pub fn grid(&self) -> &[usize] {
        &self.grid
    }

    /// Grid width in stitches
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in stitches
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Grid dimensions (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of cells
    pub fn cell_count(&self) -> usize {
        self.grid.len()
    }

    /// Palette index at column `x`, row `y`
    pub fn index_at(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.grid.get(y * self.width + x).copied()
    }

    /// Palette entry at column `x`, row `y`
    pub fn entry_at(&self, x: usize, y: usize) -> Option<&PaletteEntry> {
        self.index_at(x, y).and_then(|index| self.palette.get(index))
    }

    /// Thread entries for the chart key
    pub fn legend(&self) -> &[PaletteEntry] {
        self.palette.legend()
    }

    /// Cells that need a stitch (everything except background)
    pub fn stitchable_cells(&self) -> usize {
        let empty = self.palette.empty_index();
        self.grid.iter().filter(|&&index| index != empty).count()
    }
}
