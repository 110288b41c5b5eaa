//! A pattern and its stitch progress, kept dimensionally consistent

use crate::io::error::{Result, StitchError};
use crate::pattern::{Pattern, StitchProgress};

/// Completed versus required stitches, ignoring background cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressStats {
    /// Non-background cells marked done
    pub stitched: usize,
    /// Non-background cells in the pattern
    pub total: usize,
}

impl ProgressStats {
    /// Stitches still to do
    pub const fn remaining(&self) -> usize {
        self.total.saturating_sub(self.stitched)
    }

    /// Completed share in `[0, 1]`; an all-background pattern counts as done
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.stitched as f64 / self.total as f64
        }
    }
}

/// The current chart and its progress
///
/// Every constructor and mutator keeps the progress grid the same size as the
/// pattern grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pattern: Pattern,
    progress: StitchProgress,
}

impl Session {
    /// Start a session with nothing stitched
    pub fn new(pattern: Pattern) -> Self {
        let progress = StitchProgress::for_pattern(&pattern);
        Self { pattern, progress }
    }

    /// Pair a loaded pattern with loaded progress
    ///
    /// # Errors
    ///
    /// Returns an error if the progress grid is a different size than the pattern
    pub fn from_parts(pattern: Pattern, progress: StitchProgress) -> Result<Self> {
        if !progress.matches(&pattern) {
            return Err(StitchError::DimensionMismatch {
                expected: pattern.dimensions(),
                actual: progress.dimensions(),
            });
        }
        Ok(Self { pattern, progress })
    }

    /// Current pattern
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Current progress
    pub const fn progress(&self) -> &StitchProgress {
        &self.progress
    }

    /// Split back into the persisted pair
    pub fn into_parts(self) -> (Pattern, StitchProgress) {
        (self.pattern, self.progress)
    }

    /// Swap in a newly generated pattern and reset progress to match it
    pub fn replace_pattern(&mut self, pattern: Pattern) {
        self.progress = StitchProgress::for_pattern(&pattern);
        self.pattern = pattern;
    }

    /// Flip one cell and return its new state
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is outside the pattern
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool> {
        self.progress.toggle(x, y)
    }

    /// Mark every cell unstitched
    pub fn clear(&mut self) {
        self.progress.clear();
    }

    /// Count done and required stitches over non-background cells
    pub fn stats(&self) -> ProgressStats {
        let empty = self.pattern.palette().empty_index();
        let mut stats = ProgressStats {
            stitched: 0,
            total: 0,
        };
        for (cell, &index) in self.pattern.grid().iter().enumerate() {
            if index == empty {
                continue;
            }
            stats.total += 1;
            if self.progress.is_stitched_at(cell) {
                stats.stitched += 1;
            }
        }
        stats
    }
}
