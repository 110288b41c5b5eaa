//! Per-cell stitch completion flags co-indexed with a pattern grid

use crate::io::error::{Result, StitchError, invalid_parameter};
use crate::pattern::Pattern;
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

/// Completion flag for every cell of one pattern
///
/// Stored as a bitset in row-major order, matching `Pattern::grid`. Its dimensions
/// are fixed at creation; a regenerated pattern needs a fresh progress grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProgressRecord", into = "ProgressRecord")]
pub struct StitchProgress {
    cells: BitVec,
    width: usize,
    height: usize,
}

// Wire form: explicit dimensions plus one flag per cell
#[derive(Serialize, Deserialize)]
struct ProgressRecord {
    width: usize,
    height: usize,
    stitched: Vec<bool>,
}

impl TryFrom<ProgressRecord> for StitchProgress {
    type Error = StitchError;

    fn try_from(record: ProgressRecord) -> Result<Self> {
        Self::from_cells(record.width, record.height, &record.stitched)
    }
}

impl From<StitchProgress> for ProgressRecord {
    fn from(progress: StitchProgress) -> Self {
        Self {
            width: progress.width,
            height: progress.height,
            stitched: progress.to_vec(),
        }
    }
}

impl StitchProgress {
    /// All cells unstitched
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// All-false progress sized for `pattern`
    pub fn for_pattern(pattern: &Pattern) -> Self {
        Self::new(pattern.width(), pattern.height())
    }

    /// Rebuild from row-major flags
    ///
    /// # Errors
    ///
    /// Returns an error if the flag count is not `width * height`
    pub fn from_cells(width: usize, height: usize, stitched: &[bool]) -> Result<Self> {
        if stitched.len() != width * height {
            return Err(invalid_parameter(
                "stitched",
                &stitched.len(),
                &format!("expected {} flags for a {width}x{height} grid", width * height),
            ));
        }
        Ok(Self {
            cells: stitched.iter().copied().collect(),
            width,
            height,
        })
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

    /// Number of cells tracked
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-sized grid
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether this progress grid can be paired with `pattern`
    pub const fn matches(&self, pattern: &Pattern) -> bool {
        self.width == pattern.width() && self.height == pattern.height()
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(StitchError::CellOutOfRange {
                x,
                y,
                dimensions: self.dimensions(),
            });
        }
        Ok(y * self.width + x)
    }

    /// Completion flag at column `x`, row `y`
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is outside the grid
    pub fn is_stitched(&self, x: usize, y: usize) -> Result<bool> {
        let index = self.index(x, y)?;
        Ok(self.is_stitched_at(index))
    }

    /// Completion flag at a flat row-major index; false past the end
    pub fn is_stitched_at(&self, index: usize) -> bool {
        self.cells.get(index).as_deref() == Some(&true)
    }

    /// Flip one cell and return its new state
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is outside the grid
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool> {
        let index = self.index(x, y)?;
        let stitched = !self.is_stitched_at(index);
        self.cells.set(index, stitched);
        Ok(stitched)
    }

    /// Copy of this progress with one cell flipped
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is outside the grid
    pub fn toggled(&self, x: usize, y: usize) -> Result<Self> {
        let mut next = self.clone();
        next.toggle(x, y)?;
        Ok(next)
    }

    /// Mark every cell unstitched
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of cells marked stitched
    pub fn stitched_count(&self) -> usize {
        self.cells.count_ones()
    }

    /// Row-major flags
    pub fn to_vec(&self) -> Vec<bool> {
        self.cells.iter().by_vals().collect()
    }
}
